//! Configuration constants for the quiz board
//!
//! This module contains the limits used throughout the crate to keep
//! prompt and form presentation within what a chat platform will
//! comfortably display.

/// Prompt presentation limits
pub mod prompt {
    /// Maximum length of the prompt title in characters
    pub const MAX_TITLE_LENGTH: usize = 256;
    /// Maximum length of an image URL attached to the prompt
    pub const MAX_IMAGE_URL_LENGTH: usize = 2048;
    /// Maximum length of a button label
    pub const MAX_LABEL_LENGTH: usize = 80;
}

/// Answer form presentation limits
pub mod form {
    /// Maximum length of the form title
    pub const MAX_TITLE_LENGTH: usize = 45;
    /// Maximum length of the text input label
    pub const MAX_LABEL_LENGTH: usize = 45;
}
