//! Passive modifier bundle contributed by equipped items.
//!
//! The inventory collaborator owns these; the core only reads them. Damage
//! fields are added flat to skill damage of the matching type, attribute
//! fields go through [`PlayerStats::adjust_attribute`] on equip/unequip.
//!
//! [`PlayerStats::adjust_attribute`]: crate::character::PlayerStats::adjust_attribute

use serde::{Deserialize, Serialize};

use crate::character::{Attribute, PlayerStats};
use crate::skills::DamageType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentModifiers {
    pub strength: i32,
    pub intelligence: i32,
    pub dexterity: i32,
    pub vitality: i32,
    pub physical_damage: i32,
    pub fire_damage: i32,
    pub ice_damage: i32,
    pub lightning_damage: i32,
    pub poison_damage: i32,
}

impl EquipmentModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat damage added to skills of the given type.
    pub fn damage_bonus(&self, damage_type: DamageType) -> i32 {
        match damage_type {
            DamageType::Physical => self.physical_damage,
            DamageType::Fire => self.fire_damage,
            DamageType::Ice => self.ice_damage,
            DamageType::Lightning => self.lightning_damage,
            DamageType::Poison => self.poison_damage,
        }
    }

    fn attribute_delta(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Intelligence => self.intelligence,
            Attribute::Dexterity => self.dexterity,
            Attribute::Vitality => self.vitality,
        }
    }

    /// Applies this item's attribute deltas on equip.
    pub fn apply_to(&self, stats: &mut PlayerStats) {
        for attr in Attribute::all() {
            let delta = self.attribute_delta(attr);
            if delta != 0 {
                stats.adjust_attribute(attr, delta);
            }
        }
    }

    /// Reverses [`apply_to`](Self::apply_to) on unequip.
    pub fn remove_from(&self, stats: &mut PlayerStats) {
        for attr in Attribute::all() {
            let delta = self.attribute_delta(attr);
            if delta != 0 {
                stats.adjust_attribute(attr, -delta);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_bonus_matches_type() {
        let weapon = EquipmentModifiers {
            physical_damage: 4,
            fire_damage: 9,
            ..EquipmentModifiers::new()
        };
        assert_eq!(weapon.damage_bonus(DamageType::Physical), 4);
        assert_eq!(weapon.damage_bonus(DamageType::Fire), 9);
        assert_eq!(weapon.damage_bonus(DamageType::Ice), 0);
    }

    #[test]
    fn test_equip_then_unequip_restores_attributes() {
        let mut stats = PlayerStats::new(1, 10, 10, 10, 10);
        let armor = EquipmentModifiers {
            strength: 3,
            vitality: 5,
            ..EquipmentModifiers::new()
        };

        armor.apply_to(&mut stats);
        assert_eq!(stats.strength(), 13);
        assert_eq!(stats.vitality(), 15);

        armor.remove_from(&mut stats);
        assert_eq!(stats.strength(), 10);
        assert_eq!(stats.vitality(), 10);
    }
}
