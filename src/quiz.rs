//! Quiz coordination
//!
//! This module ties the round controller, the answer ledger and the prompt
//! configuration together. The chat transport feeds it one
//! [`IncomingMessage`] per interaction and receives [`UpdateMessage`]s back
//! through a [`Tunnel`].
//!
//! Every handler runs to completion without yielding, so two interactions
//! can never interleave between reading a participant's answers and
//! writing them back.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::{debug, info, warn};

use super::{
    config::QuizConfig,
    controller::SessionController,
    ledger::{self, Ledger, RenderedAnswer, Tally},
    participant::Sender,
    round_id::RoundId,
    session::Tunnel,
};

/// Interactions the chat transport forwards to the quiz
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub enum IncomingMessage {
    /// Open a new round, superseding the current one
    StartRound,
    /// The participant pressed the answer button
    OpenAnswerForm,
    /// The participant submitted the answer form
    SubmitAnswer(String),
    /// The participant pressed the view answers button
    ViewAnswers,
}

/// Messages sent back through the chat transport
#[skip_serializing_none]
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub enum UpdateMessage {
    /// (BROADCAST): A new round is open
    Prompt {
        /// The round the prompt belongs to
        round: RoundId,
        /// Question shown on the prompt
        title: String,
        /// Image shown with the prompt
        image: Option<String>,
        /// Label of the answer button
        answer_label: String,
        /// Label of the view answers button
        view_label: String,
    },
    /// Open a single free-text input form
    AnswerForm {
        /// Title of the form
        title: String,
        /// Label of the text input
        label: String,
    },
    /// The answer was stored
    AnswerRecorded {
        /// 1-based position among the participant's answers this round
        index: usize,
    },
    /// No round has been started yet
    NoActiveQuiz,
    /// The active round has no answers yet
    NoAnswersYet,
    /// Every answer of the active round
    Tally {
        /// Summary line, e.g. "Answers (3 answers from 2 participants)"
        header: String,
        /// One formatted line per answer
        lines: Vec<String>,
        /// The answers the lines were formatted from
        answers: Vec<RenderedAnswer>,
    },
}

impl UpdateMessage {
    /// Converts the update message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Formats a single tally line as `"{name} (answer {index}): {text}"`
pub fn format_answer(answer: &RenderedAnswer) -> String {
    format!(
        "{} (answer {}): {}",
        answer.display_name, answer.index, answer.text
    )
}

/// Formats the tally header with singular/plural agreement
fn tally_header(answer_count: usize, participant_count: usize) -> String {
    let count = |n: usize| isize::try_from(n).unwrap_or(isize::MAX);
    format!(
        "Answers ({} from {})",
        pluralizer::pluralize("answer", count(answer_count), true),
        pluralizer::pluralize("participant", count(participant_count), true),
    )
}

/// A quiz board for one channel
///
/// Owns the round controller and the answer ledger. Superseded rounds stay
/// in the ledger for the lifetime of the quiz.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Quiz {
    /// Prompt and form presentation
    config: QuizConfig,
    /// Which round is accepting answers
    controller: SessionController,
    /// Answers of every round ever started
    ledger: Ledger,
}

impl Quiz {
    /// Creates a quiz with no round started
    ///
    /// # Arguments
    ///
    /// * `config` - Presentation of the prompt and answer form
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            controller: SessionController::default(),
            ledger: Ledger::default(),
        }
    }

    /// Returns the round currently accepting answers
    pub fn active_round(&self) -> Option<RoundId> {
        self.controller.active_round()
    }

    /// Returns the answers of every round, including superseded ones
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the presentation settings
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Opens a new round with an empty answer table
    ///
    /// # Returns
    ///
    /// The ID of the new round
    pub fn start_round(&mut self) -> RoundId {
        let id = self.controller.start_round();
        self.ledger.ensure_round(id);
        id
    }

    /// Records an answer in the active round, exactly as typed
    ///
    /// # Returns
    ///
    /// The round the answer went to and the 1-based index of the answer
    /// among the sender's answers in that round
    ///
    /// # Errors
    ///
    /// Returns `ledger::Error::NoActiveRound` if no round was started.
    pub fn submit(
        &mut self,
        sender: &Sender,
        text: &str,
    ) -> Result<(RoundId, usize), ledger::Error> {
        let round = self.active_round().ok_or(ledger::Error::NoActiveRound)?;
        let index = self
            .ledger
            .submit(round, sender.id.clone(), &sender.display_name, text)?;
        Ok((round, index))
    }

    /// Renders the answers of the active round
    ///
    /// # Errors
    ///
    /// Returns `ledger::Error::NoActiveRound` if no round was started.
    pub fn render(&self) -> Result<Tally, ledger::Error> {
        let id = self.active_round().ok_or(ledger::Error::NoActiveRound)?;
        self.ledger.render(id)
    }

    /// Builds the prompt broadcast for a round
    fn prompt_message(&self, round: RoundId) -> UpdateMessage {
        UpdateMessage::Prompt {
            round,
            title: self.config.title.clone(),
            image: self.config.image.clone(),
            answer_label: self.config.answer_label.clone(),
            view_label: self.config.view_label.clone(),
        }
    }

    /// Builds the reply to a view answers request
    fn tally_message(&self) -> UpdateMessage {
        match self.render() {
            Err(_) => UpdateMessage::NoActiveQuiz,
            Ok(Tally::Empty) => UpdateMessage::NoAnswersYet,
            Ok(Tally::Answers(answers)) => {
                let participant_count = answers.iter().filter(|a| a.index == 1).count();
                UpdateMessage::Tally {
                    header: tally_header(answers.len(), participant_count),
                    lines: answers.iter().map(format_answer).collect(),
                    answers,
                }
            }
        }
    }

    /// Handles an interaction forwarded by the chat transport
    ///
    /// Failures are never fatal: they are reported privately to the sender
    /// and the quiz carries on.
    ///
    /// # Arguments
    ///
    /// * `sender` - The participant who triggered the interaction
    /// * `message` - What they did
    /// * `tunnel` - Where replies and broadcasts go
    pub fn receive_message<T: Tunnel>(
        &mut self,
        sender: &Sender,
        message: IncomingMessage,
        tunnel: &T,
    ) {
        match message {
            IncomingMessage::StartRound => {
                let round = self.start_round();
                info!(%round, starter = %sender.id, "quiz round started");
                tunnel.broadcast(&self.prompt_message(round));
            }
            IncomingMessage::OpenAnswerForm => match self.active_round() {
                Some(_) => tunnel.reply(&UpdateMessage::AnswerForm {
                    title: self.config.form_title.clone(),
                    label: self.config.form_label.clone(),
                }),
                None => {
                    warn!(participant = %sender.id, "answer form requested without a round");
                    tunnel.reply(&UpdateMessage::NoActiveQuiz);
                }
            },
            IncomingMessage::SubmitAnswer(text) => match self.submit(sender, &text) {
                Ok((round, index)) => {
                    debug!(%round, participant = %sender.id, index, "answer recorded");
                    tunnel.reply(&UpdateMessage::AnswerRecorded { index });
                }
                Err(ledger::Error::NoActiveRound) => {
                    warn!(participant = %sender.id, "answer submitted without a round");
                    tunnel.reply(&UpdateMessage::NoActiveQuiz);
                }
            },
            IncomingMessage::ViewAnswers => {
                let message = self.tally_message();
                if matches!(message, UpdateMessage::NoActiveQuiz) {
                    warn!(participant = %sender.id, "answers requested without a round");
                }
                tunnel.reply(&message);
            }
        }
    }
}
