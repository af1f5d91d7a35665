//! # Quizboard
//!
//! This library provides the core of a single-question chat quiz. An
//! operator opens a round, participants submit free-text answers (as many
//! as they like), and anyone can pull up a live tally of every answer given
//! in the round. The chat platform itself stays outside: it forwards
//! interactions to a [`quiz::Quiz`] and draws the messages it gets back.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod constants;
pub mod controller;
pub mod ledger;
pub mod participant;
pub mod quiz;
pub mod round_id;
pub mod session;

pub use config::QuizConfig;
pub use ledger::{Ledger, RenderedAnswer, Tally};
pub use participant::{ParticipantId, Sender};
pub use quiz::{IncomingMessage, Quiz, UpdateMessage};
pub use round_id::RoundId;
pub use session::Tunnel;
