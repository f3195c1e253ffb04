//! Defines the Conversation structure.

use serde::{Deserialize, Serialize};

use crate::message::Turn;

/// An append-only sequence of turns between the user and the assistant.
///
/// The store itself does not enforce role alternation. The session's busy
/// flag is the only guard against overlapping requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Append a turn. Turns are never mutated or reordered afterwards.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns, in conversation order.
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent turn authored by the assistant, if any.
    #[must_use]
    pub fn last_reply(&self) -> Option<&Turn> {
        self.turns
            .iter()
            .rev()
            .find(|turn| turn.role == crate::Role::Assistant)
    }

    pub(crate) fn clear(&mut self) {
        self.turns.clear();
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type IntoIter = std::slice::Iter<'a, Turn>;
    type Item = &'a Turn;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}
