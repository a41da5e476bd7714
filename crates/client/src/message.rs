//! Bounded message log shown under the board.
use std::collections::VecDeque;

/// Severity level for messages produced from runtime events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Alert,
}

/// A single message entry.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(MessageEntry {
            text: text.into(),
            level: MessageLevel::Info,
        });
    }

    pub fn alert(&mut self, text: impl Into<String>) {
        self.push(MessageEntry {
            text: text.into(),
            level: MessageLevel::Alert,
        });
    }

    /// Most recent messages first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_evicts_oldest_entries() {
        let mut log = MessageLog::new(2);
        log.info("first");
        log.info("second");
        log.alert("third");

        let texts: Vec<&str> = log.recent(10).map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["third", "second"]);
    }
}
