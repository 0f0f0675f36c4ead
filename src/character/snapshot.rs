//! Persistent view of a character's stored statistics.
//!
//! The snapshot carries exactly the fields that cannot be derived: level,
//! experience, base/modifier attributes, current health and mana, and point
//! allocation state. Maxima and every other derived value are recomputed on
//! restore. The on-disk format and file handling belong to the host.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::attributes::Attribute;
use super::stats::{required_experience, PlayerStats};

#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("level must be at least 1")]
    InvalidLevel,
    #[error("base {attribute} is negative: {value}")]
    NegativeBaseAttribute { attribute: &'static str, value: i32 },
    #[error("current {resource} is negative: {value}")]
    NegativeResource { resource: &'static str, value: i32 },
    #[error("experience {experience} is not below the level threshold {threshold}")]
    ExperienceOutOfRange { experience: u64, threshold: u64 },
    #[error("elemental resistance {0} is outside [0, 1]")]
    ResistanceOutOfRange(f64),
    #[error("malformed snapshot json: {0}")]
    Json(String),
}

/// All stored fields of [`PlayerStats`], sufficient to reconstruct identical
/// derived state after reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub level: u32,
    pub experience: u64,
    pub base_strength: i32,
    pub base_intelligence: i32,
    pub base_dexterity: i32,
    pub base_vitality: i32,
    pub modifier_strength: i32,
    pub modifier_intelligence: i32,
    pub modifier_dexterity: i32,
    pub modifier_vitality: i32,
    pub health: i32,
    pub mana: i32,
    pub available_attribute_points: u32,
    pub points_per_level: u32,
    pub elemental_resistance: f64,
}

impl StatsSnapshot {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("snapshot serialization cannot fail")
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Json(e.to_string()))
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        if self.level < 1 {
            return Err(SnapshotError::InvalidLevel);
        }

        for (name, value) in [
            ("strength", self.base_strength),
            ("intelligence", self.base_intelligence),
            ("dexterity", self.base_dexterity),
            ("vitality", self.base_vitality),
        ] {
            if value < 0 {
                return Err(SnapshotError::NegativeBaseAttribute {
                    attribute: name,
                    value,
                });
            }
        }

        for (name, value) in [("health", self.health), ("mana", self.mana)] {
            if value < 0 {
                return Err(SnapshotError::NegativeResource {
                    resource: name,
                    value,
                });
            }
        }

        let threshold = required_experience(self.level);
        if self.experience >= threshold {
            return Err(SnapshotError::ExperienceOutOfRange {
                experience: self.experience,
                threshold,
            });
        }

        if !(0.0..=1.0).contains(&self.elemental_resistance) {
            return Err(SnapshotError::ResistanceOutOfRange(self.elemental_resistance));
        }

        Ok(())
    }
}

impl PlayerStats {
    /// Captures all stored fields for persistence.
    pub fn snapshot(&self) -> StatsSnapshot {
        let attrs = self.attributes();
        StatsSnapshot {
            level: self.level(),
            experience: self.experience(),
            base_strength: attrs.base(Attribute::Strength),
            base_intelligence: attrs.base(Attribute::Intelligence),
            base_dexterity: attrs.base(Attribute::Dexterity),
            base_vitality: attrs.base(Attribute::Vitality),
            modifier_strength: attrs.modifier(Attribute::Strength),
            modifier_intelligence: attrs.modifier(Attribute::Intelligence),
            modifier_dexterity: attrs.modifier(Attribute::Dexterity),
            modifier_vitality: attrs.modifier(Attribute::Vitality),
            health: self.health(),
            mana: self.mana(),
            available_attribute_points: self.available_attribute_points(),
            points_per_level: self.points_per_level(),
            elemental_resistance: self.elemental_resistance(),
        }
    }

    /// Rebuilds a character from persisted fields, recomputing all derived
    /// state. Malformed data fails hard rather than producing an
    /// inconsistent character.
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;

        let mut stats = PlayerStats::new(
            snapshot.level,
            snapshot.base_strength,
            snapshot.base_intelligence,
            snapshot.base_dexterity,
            snapshot.base_vitality,
        );
        stats.set_points_per_level(snapshot.points_per_level);
        stats.set_elemental_resistance(snapshot.elemental_resistance);

        for attr in Attribute::all() {
            let delta = match attr {
                Attribute::Strength => snapshot.modifier_strength,
                Attribute::Intelligence => snapshot.modifier_intelligence,
                Attribute::Dexterity => snapshot.modifier_dexterity,
                Attribute::Vitality => snapshot.modifier_vitality,
            };
            if delta != 0 {
                stats.adjust_attribute(attr, delta);
            }
        }

        stats.restore_progression(
            snapshot.experience,
            snapshot.available_attribute_points,
            snapshot.health,
            snapshot.mana,
        );
        Ok(stats)
    }
}
