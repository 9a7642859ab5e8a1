//! Color Constants for the NovaPay Theme
//!
//! Deep purple backgrounds with teal accents, shared by the wallet and the
//! holding-site clients.

use eframe::egui::Color32;

/// Main background - deep purple
pub const BG_DARK: Color32 = Color32::from_rgb(0x23, 0x10, 0x45);

/// Slightly lifted panel background
pub const PANEL_BG: Color32 = Color32::from_rgb(0x2C, 0x16, 0x54);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1B, 0x0C, 0x36);

/// Card background - translucent purple over the dark base
pub const CARD_BG: Color32 = Color32::from_rgb(0x37, 0x1F, 0x63);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x53, 0x36, 0x8C);

/// Brand purple
pub const PRIMARY: Color32 = Color32::from_rgb(0x8B, 0x5C, 0xF6);

/// Brand cyan
pub const SECONDARY: Color32 = Color32::from_rgb(0x06, 0xB6, 0xD4);

/// Brand teal, used for accents and links
pub const ACCENT: Color32 = Color32::from_rgb(0x14, 0xB8, 0xA6);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF4, 0xF0, 0xFB);

/// Muted text
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xB5, 0xA8, 0xD4);

/// Success color - green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Credited amounts
pub const AMOUNT_POSITIVE: Color32 = Color32::from_rgb(0x66, 0xD9, 0x8A);

/// Debited amounts
pub const AMOUNT_NEGATIVE: Color32 = Color32::from_rgb(0xF2, 0x8B, 0x82);

/// Primary button fill
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x7C, 0x4D, 0xEB);

/// Secondary button fill
pub const BUTTON_SECONDARY: Color32 = Color32::from_rgb(0x44, 0x2A, 0x75);

/// Input field background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x2F, 0x1A, 0x57);

/// Hovered list item background
pub const HOVER_ITEM: Color32 = Color32::from_rgb(0x41, 0x26, 0x73);

/// Premium badge background - muted gold
pub const PREMIUM_BADGE: Color32 = Color32::from_rgb(0xC9, 0xA2, 0x27);
