//! Bounded record of the keystroke transitions a session went through.

use super::Key;
use crate::core::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Record of a single keystroke transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct KeyTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The keystroke that caused the transition
    pub key: Key,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of the most recent transitions.
///
/// Once `limit` entries are held, recording a new one drops the oldest.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    transitions: VecDeque<KeyTransition<S>>,
    limit: usize,
}

impl<S: State> TransitionLog<S> {
    pub fn new(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(64)),
            limit,
        }
    }

    pub fn record(&mut self, transition: KeyTransition<S>) {
        if self.limit == 0 {
            return;
        }
        if self.transitions.len() == self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// States traversed: the first recorded `from`, then every `to`.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &KeyTransition<S>> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&KeyTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
