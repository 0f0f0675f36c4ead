//! Skill resolution against the host-supplied battlefield.

pub mod resolve;
pub mod types;

pub use resolve::{resolve_projectile_impact, use_skill};
pub use types::{
    ImpactOutcome, ProjectileLaunch, SkillError, SkillOutcome, TargetId, TargetQuery, Vec2,
};
