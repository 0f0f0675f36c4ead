//! Character attributes, progression, derived stats, and persistence.

pub mod attributes;
pub mod events;
pub mod snapshot;
pub mod stats;

pub use attributes::{Attribute, AttributeBlock};
pub use events::{ListenerId, StatsEvent, StatsListeners};
pub use snapshot::{SnapshotError, StatsSnapshot};
pub use stats::{required_experience, DamageCategory, PlayerStats};
