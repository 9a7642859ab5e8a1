//! Account and security types shared with the backend
//!
//! The wallet backend returns a rich profile (balance, premium, 2FA flag)
//! while the site backend's admin profile only carries identity fields.
//! Serde defaults let both deserialize into the same struct.

use serde::{Deserialize, Serialize};

/// Profile record returned by `GET /api/auth/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub two_factor_enabled: bool,
}

impl UserProfile {
    /// First two words of the full name, for the dashboard greeting.
    /// Falls back to the email when no name is on file.
    pub fn short_name(&self) -> String {
        let words: Vec<&str> = self.full_name.split_whitespace().take(2).collect();
        if words.is_empty() {
            self.email.clone()
        } else {
            words.join(" ")
        }
    }
}

/// Body for `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Success shape of `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Body for `POST /api/auth/register`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub cpf: String,
    pub rg: String,
    pub phone: String,
    pub birth_date: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub password: String,
}

/// Security settings returned by `GET /api/user/security-settings`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
    pub two_factor_method: Option<TwoFactorMethod>,
    pub biometric_enabled: bool,
}

/// Second-factor delivery method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoFactorMethod {
    /// Authenticator app (time-based codes)
    Totp,
    /// Code sent by email
    Email,
}

impl TwoFactorMethod {
    pub fn label(&self) -> &'static str {
        match self {
            TwoFactorMethod::Totp => "Authenticator app",
            TwoFactorMethod::Email => "Email",
        }
    }
}

/// Body for `PUT /api/user/update-data`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalDataUpdate {
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub password_confirmation: String,
}

/// Body for `POST /api/user/enable-2fa`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoFactorToggle {
    pub enable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<TwoFactorMethod>,
}

/// Body for `POST /api/user/verify-2fa`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeRequest {
    pub code: String,
}

/// Body for `POST /api/user/biometric`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricToggle {
    pub enable: bool,
}

/// Generic `{"message": ...}` acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slim_admin_profile_deserializes() {
        let json = r#"{"id": "a1", "email": "admin@example.com"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "a1");
        assert_eq!(profile.balance, 0.0);
        assert!(!profile.premium);
        assert!(!profile.two_factor_enabled);
    }

    #[test]
    fn wallet_profile_deserializes() {
        let json = r#"{
            "id": "u1",
            "email": "user@example.com",
            "full_name": "Maria da Silva Santos",
            "balance": 1523.75,
            "premium": true,
            "two_factor_enabled": true
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.balance, 1523.75);
        assert!(profile.premium);
        assert_eq!(profile.short_name(), "Maria da");
    }

    #[test]
    fn short_name_falls_back_to_email() {
        let profile = UserProfile {
            id: "u1".to_string(),
            email: "user@example.com".to_string(),
            full_name: String::new(),
            balance: 0.0,
            premium: false,
            two_factor_enabled: false,
        };
        assert_eq!(profile.short_name(), "user@example.com");
    }

    #[test]
    fn two_factor_method_wire_names() {
        assert_eq!(
            serde_json::to_string(&TwoFactorMethod::Totp).unwrap(),
            "\"totp\""
        );
        assert_eq!(
            serde_json::to_string(&TwoFactorMethod::Email).unwrap(),
            "\"email\""
        );
    }

    #[test]
    fn disable_toggle_omits_method() {
        let toggle = TwoFactorToggle {
            enable: false,
            method: None,
        };
        let json = serde_json::to_string(&toggle).unwrap();
        assert_eq!(json, r#"{"enable":false}"#);
    }
}
