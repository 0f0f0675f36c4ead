//! Shared balance constants for the character and skill systems.

pub mod constants;
