//! Linear undo history of independent state snapshots.

use std::collections::VecDeque;

use super::state::GameState;

/// Stack of snapshots, newest at the back.
///
/// With a limit set, pushing onto a full history drops the oldest snapshot,
/// so it behaves as a ring buffer.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    snapshots: VecDeque<GameState>,
    limit: Option<usize>,
}

impl UndoHistory {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit,
        }
    }

    pub fn push(&mut self, state: GameState) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.snapshots.len() >= limit {
                self.snapshots.pop_front();
            }
        }
        self.snapshots.push_back(state);
    }

    pub fn pop(&mut self) -> Option<GameState> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
