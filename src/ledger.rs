//! Answer accumulation and tallying
//!
//! The ledger keeps, for every round that was ever started, the answers
//! each participant submitted in the order they arrived. Answers are only
//! ever appended: a participant who answers twice has two entries, and
//! rounds are never pruned once created.

use std::collections::{HashMap, hash_map::Entry};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{participant::ParticipantId, round_id::RoundId};

/// A single submitted answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Name the participant had when answering
    pub display_name: String,
    /// The answer text exactly as submitted
    pub text: String,
}

/// One line of a rendered tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedAnswer {
    /// Who submitted the answer
    pub participant: ParticipantId,
    /// 1-based position among this participant's answers
    pub index: usize,
    /// Name the participant had when answering
    pub display_name: String,
    /// The answer text
    pub text: String,
}

/// The outcome of rendering a round that exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Tally {
    /// The round exists but nobody has answered yet
    Empty,
    /// Every answer, grouped by participant in order of first answer
    Answers(Vec<RenderedAnswer>),
}

/// Errors that can occur when submitting or rendering
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No round was ever started under the requested ID
    #[error("no active quiz")]
    NoActiveRound,
}

/// Serialization helper for AnswerTable
#[derive(Deserialize)]
struct AnswerTableSerde {
    entries: Vec<(ParticipantId, Vec<Answer>)>,
}

/// Answers of a single round
///
/// Participants are kept in the order of their first answer; each
/// participant's answers are kept oldest first.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(from = "AnswerTableSerde")]
pub struct AnswerTable {
    /// Participants with their answers, in order of first answer
    entries: Vec<(ParticipantId, Vec<Answer>)>,

    /// Position of each participant within `entries`
    #[serde(skip_serializing)]
    positions: HashMap<ParticipantId, usize>,
}

impl From<AnswerTableSerde> for AnswerTable {
    /// Rebuilds the participant positions from the ordered entries
    fn from(serde: AnswerTableSerde) -> Self {
        let AnswerTableSerde { entries } = serde;
        let positions = entries
            .iter()
            .enumerate()
            .map(|(position, (participant, _))| (participant.clone(), position))
            .collect();
        Self { entries, positions }
    }
}

impl AnswerTable {
    /// Appends an answer to the participant's sequence
    ///
    /// # Returns
    ///
    /// The 1-based index of the new answer among the participant's answers
    fn append(&mut self, participant: ParticipantId, answer: Answer) -> usize {
        let position = match self.positions.entry(participant) {
            Entry::Occupied(o) => *o.get(),
            Entry::Vacant(v) => {
                let position = self.entries.len();
                self.entries.push((v.key().clone(), Vec::new()));
                v.insert(position);
                position
            }
        };
        let answers = &mut self.entries[position].1;
        answers.push(answer);
        answers.len()
    }

    /// Total number of answers across all participants
    pub fn answer_count(&self) -> usize {
        self.entries.iter().map(|(_, answers)| answers.len()).sum()
    }

    /// Number of participants who answered at least once
    pub fn participant_count(&self) -> usize {
        self.entries.len()
    }

    /// Answers given by a participant, oldest first
    pub fn answers_of(&self, participant: &ParticipantId) -> Option<&[Answer]> {
        self.positions
            .get(participant)
            .map(|position| self.entries[*position].1.as_slice())
    }

    /// Flattens the table into numbered answers
    fn render(&self) -> Tally {
        if self.entries.is_empty() {
            return Tally::Empty;
        }

        Tally::Answers(
            self.entries
                .iter()
                .flat_map(|(participant, answers)| {
                    answers.iter().enumerate().map(move |(i, answer)| RenderedAnswer {
                        participant: participant.clone(),
                        index: i + 1,
                        display_name: answer.display_name.clone(),
                        text: answer.text.clone(),
                    })
                })
                .collect_vec(),
        )
    }
}

/// Answers of every round, keyed by round ID
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Ledger {
    rounds: HashMap<RoundId, AnswerTable>,
}

impl Ledger {
    /// Creates an empty answer table for `id` unless one exists
    pub fn ensure_round(&mut self, id: RoundId) {
        self.rounds.entry(id).or_default();
    }

    /// Records an answer for a participant in the given round
    ///
    /// The text is stored exactly as given. Superseded rounds still accept
    /// answers as long as they were started at some point.
    ///
    /// # Arguments
    ///
    /// * `id` - The round the answer belongs to
    /// * `participant` - Who is answering
    /// * `display_name` - Name shown next to the answer
    /// * `text` - The raw answer text
    ///
    /// # Returns
    ///
    /// The 1-based index of the answer among the participant's answers
    /// for this round
    ///
    /// # Errors
    ///
    /// Returns `Error::NoActiveRound` if no round was ever started under
    /// `id`, in which case nothing is stored.
    pub fn submit(
        &mut self,
        id: RoundId,
        participant: ParticipantId,
        display_name: &str,
        text: &str,
    ) -> Result<usize, Error> {
        let table = self.rounds.get_mut(&id).ok_or(Error::NoActiveRound)?;

        Ok(table.append(
            participant,
            Answer {
                display_name: display_name.to_owned(),
                text: text.to_owned(),
            },
        ))
    }

    /// Renders every answer of a round
    ///
    /// # Errors
    ///
    /// Returns `Error::NoActiveRound` if no round was ever started under `id`.
    pub fn render(&self, id: RoundId) -> Result<Tally, Error> {
        self.rounds
            .get(&id)
            .map(AnswerTable::render)
            .ok_or(Error::NoActiveRound)
    }

    /// Returns the answer table of a round
    pub fn round(&self, id: RoundId) -> Option<&AnswerTable> {
        self.rounds.get(&id)
    }

    /// Checks whether a round was ever started under `id`
    pub fn contains_round(&self, id: RoundId) -> bool {
        self.rounds.contains_key(&id)
    }

    /// Number of rounds held, including superseded ones
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Total number of answers in a round
    pub fn answer_count(&self, id: RoundId) -> Option<usize> {
        self.round(id).map(AnswerTable::answer_count)
    }

    /// Number of distinct participants who answered in a round
    pub fn participant_count(&self, id: RoundId) -> Option<usize> {
        self.round(id).map(AnswerTable::participant_count)
    }
}
