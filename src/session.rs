//! Worker-portal check-in state. Session-only: the log lives for one
//! invocation and is never part of the financial record sets.

use crate::store::ids::IdAllocator;

/// How many recent check events the portal keeps, newest first.
pub const RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckAction {
    In,
    Out,
}

impl CheckAction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::In => "Checked In",
            Self::Out => "Checked Out",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckEvent {
    pub id: String,
    pub worker_id: String,
    pub action: CheckAction,
    pub time: String,
}

#[derive(Debug, Default)]
pub struct CheckinLog {
    checked_in: bool,
    entries: Vec<CheckEvent>,
    ids: IdAllocator,
}

impl CheckinLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a check action. The status follows the latest action and the
    /// log keeps only the RECENT_LIMIT newest entries.
    pub fn toggle(&mut self, worker_id: &str, action: CheckAction, time: &str) {
        self.checked_in = action == CheckAction::In;
        self.entries.insert(
            0,
            CheckEvent {
                id: self.ids.next_id("log"),
                worker_id: worker_id.to_string(),
                action,
                time: time.to_string(),
            },
        );
        self.entries.truncate(RECENT_LIMIT);
    }

    pub fn checked_in(&self) -> bool {
        self.checked_in
    }

    pub fn entries(&self) -> &[CheckEvent] {
        &self.entries
    }
}
