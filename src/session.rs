//! Chat transport seam
//!
//! This module defines the trait through which the quiz talks back to the
//! chat platform. The platform decides how a message is drawn (embeds,
//! buttons, forms); the quiz only decides what is said and to whom.

use super::quiz::UpdateMessage;

/// Trait for answering an interaction through the chat platform
///
/// One tunnel is handed to the quiz per incoming interaction, so replies
/// go back to whoever triggered it.
pub trait Tunnel {
    /// Sends a message visible only to the participant who triggered the
    /// interaction
    ///
    /// # Arguments
    ///
    /// * `message` - The message to send
    fn reply(&self, message: &UpdateMessage);

    /// Sends a message to the whole channel the interaction came from
    ///
    /// # Arguments
    ///
    /// * `message` - The message to send
    fn broadcast(&self, message: &UpdateMessage);
}
