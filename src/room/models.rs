use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// One of the four fixed answer choices a participant can pick.
///
/// On the wire answers are the JSON strings `"1"` through `"4"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
)]
pub enum Answer {
    #[serde(rename = "1")]
    #[strum(serialize = "1")]
    One,
    #[serde(rename = "2")]
    #[strum(serialize = "2")]
    Two,
    #[serde(rename = "3")]
    #[strum(serialize = "3")]
    Three,
    #[serde(rename = "4")]
    #[strum(serialize = "4")]
    Four,
}

/// Vote counts per answer. Always holds an entry for every answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally(BTreeMap<Answer, u32>);

impl Tally {
    pub fn zeroed() -> Self {
        Self(Answer::iter().map(|answer| (answer, 0)).collect())
    }

    pub fn count(&self, answer: Answer) -> u32 {
        self.0.get(&answer).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    fn record(&mut self, answer: Answer) {
        *self.0.entry(answer).or_insert(0) += 1;
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// In-memory state of a single poll room
#[derive(Debug, Clone)]
pub struct RoomModel {
    id: String,
    owner: String,
    votes: HashMap<String, Answer>, // participant token -> latest answer
    last_tally: Tally,
    dirty: bool, // votes changed since last_tally was computed
}

impl RoomModel {
    /// Creates an empty room owned by `owner`
    pub fn new(id: String, owner: String) -> Self {
        Self {
            id,
            owner,
            votes: HashMap::new(),
            last_tally: Tally::zeroed(),
            dirty: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_owner(&self, token: &str) -> bool {
        self.owner == token
    }

    /// Number of participants with a recorded vote
    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    /// Records the participant's answer, replacing any earlier one
    pub fn vote(&mut self, participant: &str, answer: Answer) {
        self.votes.insert(participant.to_string(), answer);
        self.dirty = true;
    }

    pub fn my_answer(&self, participant: &str) -> Option<Answer> {
        self.votes.get(participant).copied()
    }

    /// Clears all votes. Owner authorization is the caller's job.
    pub fn reset(&mut self) {
        self.votes.clear();
        self.dirty = true;
    }

    /// Returns the cached tally, recounting first if votes changed since the last call.
    pub fn tally(&mut self) -> &Tally {
        if self.dirty {
            self.last_tally = self.calculate_tally();
            self.dirty = false;
        }
        &self.last_tally
    }

    fn calculate_tally(&self) -> Tally {
        let mut tally = Tally::zeroed();
        for answer in self.votes.values() {
            tally.record(*answer);
        }
        tally
    }
}
