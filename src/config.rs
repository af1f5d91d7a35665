//! Prompt presentation settings
//!
//! The quiz prompt, its two buttons and the answer form all carry text
//! chosen by whoever runs the quiz. This module holds those settings and
//! validates them against the limits in [`crate::constants`].

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{form, prompt};

/// Presentation of a quiz round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct QuizConfig {
    /// Question shown on the prompt
    #[garde(length(chars, min = 1, max = prompt::MAX_TITLE_LENGTH))]
    pub title: String,
    /// Image shown with the prompt
    #[garde(length(max = prompt::MAX_IMAGE_URL_LENGTH))]
    pub image: Option<String>,
    /// Label of the button that opens the answer form
    #[garde(length(chars, min = 1, max = prompt::MAX_LABEL_LENGTH))]
    pub answer_label: String,
    /// Label of the button that shows the tally
    #[garde(length(chars, min = 1, max = prompt::MAX_LABEL_LENGTH))]
    pub view_label: String,
    /// Title of the answer form
    #[garde(length(chars, min = 1, max = form::MAX_TITLE_LENGTH))]
    pub form_title: String,
    /// Label of the answer form's text input
    #[garde(length(chars, min = 1, max = form::MAX_LABEL_LENGTH))]
    pub form_label: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            title: "Guess the book title!".to_owned(),
            image: None,
            answer_label: "Answer".to_owned(),
            view_label: "View answers".to_owned(),
            form_title: "Your answer".to_owned(),
            form_label: "What is your answer?".to_owned(),
        }
    }
}

/// Errors that can occur when loading a configuration
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a valid configuration document
    #[error("malformed quiz configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// The configuration violates a presentation limit
    #[error("invalid quiz configuration: {0}")]
    Invalid(#[from] garde::Report),
}

impl QuizConfig {
    /// Parses and validates a configuration from JSON
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// * `Error::Json` - The input is not valid JSON for this structure
    /// * `Error::Invalid` - A field is empty or exceeds its limit
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(QuizConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            QuizConfig::from_json(r#"{"title":"Name this film","image":"https://example.com/a.jpg"}"#)
                .unwrap();

        assert_eq!(config.title, "Name this film");
        assert_eq!(config.image.as_deref(), Some("https://example.com/a.jpg"));
        assert_eq!(config.answer_label, QuizConfig::default().answer_label);
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(QuizConfig::from_json("{}").unwrap(), QuizConfig::default());
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            QuizConfig::from_json("{not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(matches!(
            QuizConfig::from_json(r#"{"title":""}"#),
            Err(Error::Invalid(_))
        ));
    }

    #[test]
    fn test_title_too_long() {
        let config = QuizConfig {
            title: "a".repeat(prompt::MAX_TITLE_LENGTH + 1),
            ..QuizConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_label_too_long() {
        let config = QuizConfig {
            view_label: "a".repeat(prompt::MAX_LABEL_LENGTH + 1),
            ..QuizConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_form_title_too_long() {
        let config = QuizConfig {
            form_title: "a".repeat(form::MAX_TITLE_LENGTH + 1),
            ..QuizConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_image_url_too_long() {
        let config = QuizConfig {
            image: Some("a".repeat(prompt::MAX_IMAGE_URL_LENGTH + 1)),
            ..QuizConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
