//! Static label and badge tables for campaign types and message states.

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Visual style of a badge, rendered as a Bootstrap background class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    Secondary,
    Primary,
    Success,
    /// Light background, needs dark text.
    Info,
    /// Light background, needs dark text.
    Warning,
    Danger,
}

impl Badge {
    pub fn class(self) -> &'static str {
        match self {
            Badge::Secondary => "bg-secondary",
            Badge::Primary => "bg-primary",
            Badge::Success => "bg-success",
            Badge::Info => "bg-info text-dark",
            Badge::Warning => "bg-warning text-dark",
            Badge::Danger => "bg-danger",
        }
    }

    pub fn dark_text(self) -> bool {
        matches!(self, Badge::Info | Badge::Warning)
    }
}

/// Campaign types known to the compose wizard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString, EnumIter, clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum SmsType {
    Manual,
    Adhoc,
    Staff,
    Student,
}

/// Lifecycle of an SMS campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum MessageState {
    Draft,
    Queued,
    Sending,
    Done,
    Partial,
    Failed,
}

pub const TYPE_LABELS: [(&str, &str); 4] = [
    ("manual", "Manual"),
    ("adhoc", "Ad Hoc"),
    ("staff", "Staff"),
    ("student", "Student"),
];

pub const TYPE_BADGES: [(&str, Badge); 4] = [
    ("manual", Badge::Secondary),
    ("adhoc", Badge::Success),
    ("staff", Badge::Warning),
    ("student", Badge::Info),
];

pub const STATE_BADGES: [(&str, Badge); 6] = [
    ("draft", Badge::Secondary),
    ("queued", Badge::Secondary),
    ("sending", Badge::Primary),
    ("done", Badge::Success),
    ("partial", Badge::Warning),
    ("failed", Badge::Danger),
];

fn lookup<T: Copy>(table: &[(&str, T)], code: &str) -> Option<T> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, value)| *value)
}

/// Human-readable campaign type; unknown codes pass through unchanged.
pub fn type_label(code: &str) -> &str {
    lookup(&TYPE_LABELS, code).unwrap_or(code)
}

pub fn type_badge(code: &str) -> Badge {
    lookup(&TYPE_BADGES, code).unwrap_or(Badge::Secondary)
}

pub fn state_badge(code: &str) -> Badge {
    lookup(&STATE_BADGES, code).unwrap_or(Badge::Secondary)
}
