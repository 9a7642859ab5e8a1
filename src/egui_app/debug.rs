use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugLevel::Debug => write!(f, "DEBUG"),
            DebugLevel::Info => write!(f, "INFO"),
            DebugLevel::Warn => write!(f, "WARN"),
            DebugLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugCategory {
    Session,
    Auth,
    Api,
    State,
    Ui,
    Other,
}

impl fmt::Display for DebugCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugCategory::Session => write!(f, "SESSION"),
            DebugCategory::Auth => write!(f, "AUTH"),
            DebugCategory::Api => write!(f, "API"),
            DebugCategory::State => write!(f, "STATE"),
            DebugCategory::Ui => write!(f, "UI"),
            DebugCategory::Other => write!(f, "OTHER"),
        }
    }
}

#[derive(Clone)]
pub struct DebugEntry {
    pub timestamp: String,
    pub level: DebugLevel,
    pub category: DebugCategory,
    pub message: String,
}

impl fmt::Display for DebugEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} {}",
            self.timestamp, self.level, self.category, self.message
        )
    }
}

/// In-app log ring buffer surfaced in the debug panel. Entries are also
/// forwarded to `tracing` so they land in the terminal subscriber.
pub struct DebugLogger {
    entries: Arc<Mutex<VecDeque<DebugEntry>>>,
    max_entries: usize,
}

impl DebugLogger {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
            max_entries,
        }
    }

    fn timestamp() -> String {
        use std::time::UNIX_EPOCH;
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let secs = duration.as_secs();
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            (secs / 3600) % 24,
            (secs / 60) % 60,
            secs % 60,
            duration.subsec_millis()
        )
    }

    pub fn log(&self, level: DebugLevel, category: DebugCategory, message: impl Into<String>) {
        let entry = DebugEntry {
            timestamp: Self::timestamp(),
            level,
            category,
            message: message.into(),
        };

        match level {
            DebugLevel::Debug => tracing::debug!("[{}] {}", category, entry.message),
            DebugLevel::Info => tracing::info!("[{}] {}", category, entry.message),
            DebugLevel::Warn => tracing::warn!("[{}] {}", category, entry.message),
            DebugLevel::Error => tracing::error!("[{}] {}", category, entry.message),
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.push_back(entry);
            while entries.len() > self.max_entries {
                entries.pop_front();
            }
        }
    }

    pub fn debug(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Debug, category, msg);
    }

    pub fn info(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Info, category, msg);
    }

    pub fn warn(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Warn, category, msg);
    }

    pub fn error(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Error, category, msg);
    }

    pub fn get_entries(&self) -> Vec<DebugEntry> {
        self.entries
            .lock()
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn get_entries_by_category(&self, category: DebugCategory) -> Vec<DebugEntry> {
        self.entries
            .lock()
            .map(|e| {
                e.iter()
                    .filter(|entry| entry.category == category)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn count_at_level(&self, level: DebugLevel) -> usize {
        self.entries
            .lock()
            .map(|e| e.iter().filter(|entry| entry.level == level).count())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn count(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }
}

impl Clone for DebugLogger {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            max_entries: self.max_entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_buffer_evicts_oldest() {
        let logger = DebugLogger::new(3);
        for i in 0..5 {
            logger.info(DebugCategory::Other, format!("entry {}", i));
        }
        let entries = logger.get_entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "entry 2");
        assert_eq!(entries[2].message, "entry 4");
    }

    #[test]
    fn clones_share_the_buffer() {
        let logger = DebugLogger::new(10);
        let clone = logger.clone();
        clone.warn(DebugCategory::Auth, "shared");
        assert_eq!(logger.count(), 1);
        assert_eq!(logger.count_at_level(DebugLevel::Warn), 1);
    }

    #[test]
    fn category_filter() {
        let logger = DebugLogger::new(10);
        logger.info(DebugCategory::Session, "a");
        logger.info(DebugCategory::Api, "b");
        logger.info(DebugCategory::Session, "c");
        assert_eq!(logger.get_entries_by_category(DebugCategory::Session).len(), 2);
        assert_eq!(logger.get_entries_by_category(DebugCategory::Api).len(), 1);
    }
}
