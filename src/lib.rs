//! Numeric core for an action RPG: character progression and skill
//! resolution.
//!
//! [`character`] owns leveling, attribute allocation, and every derived
//! combat statistic. [`skills`] defines abilities and their attribute-scaled
//! values. [`combat`] turns a skill use into concrete damage against targets
//! supplied by the host through [`combat::TargetQuery`]. Movement, rendering,
//! AI, and persistence I/O live with the host; this crate only does the math.

pub mod character;
pub mod combat;
pub mod core;
pub mod equipment;
pub mod skills;
