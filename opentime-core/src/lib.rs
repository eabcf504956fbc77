//! opentime core library — window table, time parsing, open/closed evaluation.
//!
//! - [`types`] — newtypes, definitions and response shapes
//! - [`evaluator`] — inclusive range membership
//! - [`clock`] — injectable wall-clock source
//! - [`registry`] — validated, ordered window table
//! - [`error`] — [`RegistryError`]

pub mod clock;
pub mod error;
pub mod evaluator;
pub mod registry;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::RegistryError;
pub use registry::WindowRegistry;
pub use types::{
    Evaluation, Listing, MinuteOfDay, Window, WindowDefinition, WindowId, WindowStatus,
};
