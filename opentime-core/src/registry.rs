//! Ordered, immutable table of windows.
//!
//! # Config file layout
//!
//! ```yaml
//! windows:
//!   - id: carrier-change
//!     startTime: "9:00"
//!     endTime: "21:00"
//!     title: 他社から乗り換え
//! ```
//!
//! Every constructor validates the whole table up front: time strings must
//! parse and ids must be unique. A registry that exists is always valid.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::clock::{format_wall_clock, minute_of_day};
use crate::error::RegistryError;
use crate::types::{Evaluation, Listing, Window, WindowDefinition, WindowStatus};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WindowTable {
    #[serde(default)]
    windows: Vec<WindowDefinition>,
}

/// The built-in window table, in listing order.
pub fn builtin_definitions() -> Vec<WindowDefinition> {
    vec![
        WindowDefinition::new("new-number", "0:00", "23:15", "新しい番号、機種変更"),
        WindowDefinition::new("ore-chan-phone", "5:00", "23:15", "俺ちゃんフォーン"),
        WindowDefinition::new("carrier-change", "9:00", "21:00", "他社から乗り換え"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegistry {
    windows: Vec<Window>,
}

impl WindowRegistry {
    /// Registry over [`builtin_definitions`].
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_definitions(builtin_definitions())
    }

    /// Validate and freeze `definitions`, preserving their order.
    pub fn from_definitions(definitions: Vec<WindowDefinition>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        let mut windows = Vec::with_capacity(definitions.len());
        for definition in definitions {
            if !seen.insert(definition.id.clone()) {
                return Err(RegistryError::DuplicateId {
                    id: definition.id.0,
                });
            }
            windows.push(Window::new(definition)?);
        }
        Ok(Self { windows })
    }

    /// Load a YAML window table from `path`.
    ///
    /// Returns `RegistryError::ConfigNotFound` if absent,
    /// `RegistryError::Parse` (with path) if malformed.
    pub fn load_at(path: &Path) -> Result<Self, RegistryError> {
        if !path.exists() {
            return Err(RegistryError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table: WindowTable =
            serde_yaml::from_str(&contents).map_err(|source| RegistryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_definitions(table.windows)
    }

    /// Exact-match lookup by id.
    pub fn find_by_id(&self, id: &str) -> Result<&Window, RegistryError> {
        self.windows
            .iter()
            .find(|window| window.id().0 == id)
            .ok_or_else(|| RegistryError::NotFound { id: id.to_owned() })
    }

    /// Every window, in definition order, evaluated at `now`.
    pub fn list_all(&self, now: &DateTime<FixedOffset>) -> Vec<WindowStatus> {
        let minute = minute_of_day(now);
        self.windows
            .iter()
            .map(|window| window.status_at(minute))
            .collect()
    }

    /// [`list_all`](Self::list_all) plus the formatted wall-clock time.
    pub fn listing(&self, now: &DateTime<FixedOffset>) -> Listing {
        Listing {
            current_time: format_wall_clock(now),
            settings: self.list_all(now),
        }
    }

    /// Look up `id` and evaluate it at `now`.
    pub fn evaluate(
        &self,
        id: &str,
        now: &DateTime<FixedOffset>,
    ) -> Result<Evaluation, RegistryError> {
        let window = self.find_by_id(id)?;
        Ok(Evaluation {
            status: window.status_at(minute_of_day(now)),
            current_time: format_wall_clock(now),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_valid_and_ordered() {
        let registry = WindowRegistry::builtin().expect("builtin");
        let ids: Vec<_> = registry.iter().map(|w| w.id().0.as_str()).collect();
        assert_eq!(ids, ["new-number", "ore-chan-phone", "carrier-change"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = WindowRegistry::from_definitions(vec![
            WindowDefinition::new("a", "9:00", "10:00", "first"),
            WindowDefinition::new("a", "11:00", "12:00", "second"),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId { ref id } if id == "a"), "got: {err}");
    }

    #[test]
    fn invalid_time_fails_construction() {
        let err = WindowRegistry::from_definitions(vec![WindowDefinition::new(
            "a", "9:00", "25:00", "bad",
        )])
        .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidFormat { .. }), "got: {err}");
        assert!(err.to_string().contains("25:00"));
    }

    #[test]
    fn lookup_is_exact_match() {
        let registry = WindowRegistry::builtin().expect("builtin");
        assert!(registry.find_by_id("carrier-change").is_ok());
        assert!(matches!(
            registry.find_by_id("Carrier-Change"),
            Err(RegistryError::NotFound { .. })
        ));
        assert!(registry.find_by_id("").is_err());
    }

    #[test]
    fn empty_table_is_allowed() {
        let registry = WindowRegistry::from_definitions(vec![]).expect("empty");
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
