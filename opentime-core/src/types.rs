//! Domain types for the window registry.
//!
//! Definitions keep their time strings exactly as written; the parsed
//! [`MinuteOfDay`] bounds live alongside them in [`Window`]. Response shapes
//! serialize with camelCase keys.

use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::evaluator;

/// Minutes in one day; every [`MinuteOfDay`] is strictly below this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed identifier for a registered window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for WindowId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WindowId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Time of day as minutes since midnight, always in `0..=1439`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    /// Returns `None` when `minutes` is 1440 or more.
    pub fn new(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Returns `None` when `hour > 23` or `minute > 59`.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < 60).then(|| Self(hour * 60 + minute))
    }

    /// Wall-clock minute of any chrono time value; seconds are dropped.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        // hour() < 24 and minute() < 60 by construction in chrono.
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    /// Parse `H:MM` or `HH:MM` (24-hour).
    pub fn parse(value: &str) -> Result<Self, RegistryError> {
        let mut parts = value.split(':');
        let (Some(hour), Some(minute), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(RegistryError::invalid(value, "expected exactly two parts separated by ':'"));
        };
        let hour = parse_part(value, hour)?;
        let minute = parse_part(value, minute)?;
        if hour > 23 {
            return Err(RegistryError::invalid(value, "hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(RegistryError::invalid(value, "minute must be between 0 and 59"));
        }
        Ok(Self(hour * 60 + minute))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

fn parse_part(value: &str, part: &str) -> Result<u16, RegistryError> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RegistryError::invalid(value, "hour and minute must be one or two digits"));
    }
    part.parse()
        .map_err(|_| RegistryError::invalid(value, "hour and minute must be one or two digits"))
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for MinuteOfDay {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// One row of the window table, as written in the built-in table or a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WindowDefinition {
    pub id: WindowId,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
}

impl WindowDefinition {
    pub fn new(
        id: impl Into<WindowId>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            title: title.into(),
        }
    }
}

/// A validated definition with its parsed bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    definition: WindowDefinition,
    start: MinuteOfDay,
    end: MinuteOfDay,
}

impl Window {
    /// Parses both bounds; fails with [`RegistryError::InvalidFormat`].
    pub fn new(definition: WindowDefinition) -> Result<Self, RegistryError> {
        let start = MinuteOfDay::parse(&definition.start_time)?;
        let end = MinuteOfDay::parse(&definition.end_time)?;
        Ok(Self {
            definition,
            start,
            end,
        })
    }

    pub fn id(&self) -> &WindowId {
        &self.definition.id
    }

    pub fn definition(&self) -> &WindowDefinition {
        &self.definition
    }

    pub fn start(&self) -> MinuteOfDay {
        self.start
    }

    pub fn end(&self) -> MinuteOfDay {
        self.end
    }

    pub fn is_open_at(&self, now: MinuteOfDay) -> bool {
        evaluator::is_open(now, self.start, self.end)
    }

    pub fn status_at(&self, now: MinuteOfDay) -> WindowStatus {
        WindowStatus {
            parameter: self.definition.id.0.clone(),
            is_open: self.is_open_at(now),
            start_time: self.definition.start_time.clone(),
            end_time: self.definition.end_time.clone(),
            title: self.definition.title.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// A window annotated with its open state at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowStatus {
    pub parameter: String,
    pub is_open: bool,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
}

/// Single-window lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    #[serde(flatten)]
    pub status: WindowStatus,
    pub current_time: String,
}

/// Every window in registry order, evaluated at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub current_time: String,
    pub settings: Vec<WindowStatus>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
