// Sentinel - core/activity.rs
//
// In-memory activity feed: a bounded, most-recent-first list of tagged
// one-line events. Written by the audit flow and application lifecycle;
// rendered by the overview panel. Never persisted.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

// =============================================================================
// Activity tag
// =============================================================================

/// Category prefix for an activity line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityTag {
    Info,
    Success,
    Error,
}

impl ActivityTag {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityTag::Info => "Info",
            ActivityTag::Success => "Success",
            ActivityTag::Error => "Error",
        }
    }

    /// Short label for compact display (feed prefix column).
    pub fn short_label(&self) -> &'static str {
        match self {
            ActivityTag::Info => "INFO",
            ActivityTag::Success => "OK",
            ActivityTag::Error => "ERR",
        }
    }
}

impl std::fmt::Display for ActivityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Activity entry
// =============================================================================

/// One line of the feed.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Utc>,
    pub tag: ActivityTag,
    pub message: String,
}

// =============================================================================
// Activity log
// =============================================================================

/// Bounded most-recent-first feed.
///
/// New entries go to the front; once the cap is reached the oldest entry is
/// evicted from the back.  The cap is fixed at construction (from
/// `[activity] max_entries` in config).
#[derive(Debug)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    cap: usize,
}

impl ActivityLog {
    /// Create an empty log holding at most `cap` entries (clamped to >= 1).
    pub fn new(cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cap: cap.max(1),
        }
    }

    /// Prepend an entry, evicting the oldest if the cap is reached.
    pub fn push(&mut self, tag: ActivityTag, message: impl Into<String>) {
        self.entries.push_front(ActivityEntry {
            timestamp: Utc::now(),
            tag,
            message: message.into(),
        });
        while self.entries.len() > self.cap {
            self.entries.pop_back();
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ActivityTag::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ActivityTag::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ActivityTag::Error, message);
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first_ordering() {
        let mut log = ActivityLog::new(10);
        log.info("first");
        log.success("second");
        log.error("third");

        let messages: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_tags_are_preserved() {
        let mut log = ActivityLog::new(10);
        log.error("boom");
        let entry = log.iter().next().unwrap();
        assert_eq!(entry.tag, ActivityTag::Error);
        assert_eq!(entry.tag.short_label(), "ERR");
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut log = ActivityLog::new(3);
        for i in 0..5 {
            log.info(format!("event {i}"));
        }
        assert_eq!(log.len(), 3);
        let messages: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
        // events 0 and 1 were evicted from the back
        assert_eq!(messages, vec!["event 4", "event 3", "event 2"]);
    }

    #[test]
    fn test_cap_is_clamped_to_at_least_one() {
        let mut log = ActivityLog::new(0);
        log.info("a");
        log.info("b");
        assert_eq!(log.len(), 1);
        assert_eq!(log.iter().next().unwrap().message, "b");
    }

    #[test]
    fn test_empty_log() {
        let log = ActivityLog::new(5);
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.iter().next().is_none());
    }
}
