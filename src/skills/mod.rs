//! Skill definitions, scaling formulas, and the character's skill book.

pub mod book;
pub mod types;

pub use book::SkillBook;
pub use types::{DamageType, Skill, TargetMode};
