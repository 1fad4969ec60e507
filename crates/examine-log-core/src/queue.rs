//! FIFO queue of examine clicks awaiting their text

use crate::event::PendingToken;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct MatchQueue {
    pending: VecDeque<PendingToken>,
    capacity: Option<usize>,
}

impl MatchQueue {
    /// Unbounded queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue that drops its oldest token once `capacity` are pending.
    /// A capacity of zero is treated as one.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            pending: VecDeque::new(),
            capacity: Some(capacity.max(1)),
        }
    }

    pub fn enqueue(&mut self, token: PendingToken) {
        if let Some(cap) = self.capacity {
            while self.pending.len() >= cap {
                if let Some(dropped) = self.pending.pop_front() {
                    tracing::warn!(id = dropped.id, cap, "match queue full, dropping oldest");
                }
            }
        }
        self.pending.push_back(token);
    }

    /// Oldest pending token, if any
    pub fn dequeue(&mut self) -> Option<PendingToken> {
        self.pending.pop_front()
    }

    /// Drop every pending token without matching
    pub fn reset(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(dropped = self.pending.len(), "match queue reset");
        }
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
