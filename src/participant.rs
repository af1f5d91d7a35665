//! Participant identity
//!
//! Chat platforms hand out their own stable user identifiers. The quiz
//! board never interprets them; it only compares and stores them.

use serde::{Deserialize, Serialize};

/// A stable identifier for a chat-platform user
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a participant ID from the platform's identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the platform's identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The participant behind an incoming interaction
///
/// The display name is whatever the platform shows for the user at the
/// time of the interaction and is recorded alongside each answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Stable platform identity
    pub id: ParticipantId,
    /// Name shown next to the participant's answers
    pub display_name: String,
}

impl Sender {
    /// Creates a sender from a platform identity and display name
    pub fn new(id: impl Into<ParticipantId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}
