//! Skill definitions and their attribute-scaled runtime values.
//!
//! A [`Skill`] is a static ability definition; every "actual" value (damage,
//! cooldown, range, area) is computed against the caster's current
//! [`PlayerStats`] and optional weapon modifiers at use time.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::character::{Attribute, DamageCategory, PlayerStats};
use crate::core::constants::*;
use crate::equipment::EquipmentModifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    Physical,
    Fire,
    Ice,
    Lightning,
    Poison,
}

impl DamageType {
    /// Resistance category this damage type falls under when it hits a
    /// character.
    pub fn category(&self) -> DamageCategory {
        match self {
            DamageType::Physical => DamageCategory::Physical,
            DamageType::Fire | DamageType::Ice | DamageType::Lightning | DamageType::Poison => {
                DamageCategory::Elemental
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetMode {
    /// Nearest eligible target in a forward cone; at most one hit.
    Single,
    /// Everything within the area radius around a point ahead of the caster.
    Area,
    /// Deferred impact after travel time, then area-style resolution.
    Projectile,
    /// No target damage; buff/heal effects live with the caller.
    SelfCast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
    pub damage_type: DamageType,
    pub target_mode: TargetMode,
    pub base_mana_cost: i32,
    pub base_cooldown: f64,
    pub base_damage: i32,
    /// Overall multiplier applied after attribute scaling.
    pub damage_scaling: f64,
    pub range: f64,
    /// Zero means no area effect.
    pub area_radius: f64,
    pub projectile_speed: f64,
    pub scales_with_strength: bool,
    pub scales_with_intelligence: bool,
    pub scales_with_dexterity: bool,
    /// Which attribute extends the skill's range, if any.
    pub range_scaling: Option<Attribute>,
}

impl Skill {
    /// Minimal single-target skill. Physical skills scale damage with
    /// strength, elemental ones with intelligence; nothing else is
    /// configured.
    pub fn basic(
        name: impl Into<String>,
        mana_cost: i32,
        cooldown: f64,
        base_damage: i32,
        damage_type: DamageType,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            damage_type,
            target_mode: TargetMode::Single,
            base_mana_cost: mana_cost,
            base_cooldown: cooldown,
            base_damage,
            damage_scaling: 1.0,
            range: DEFAULT_SKILL_RANGE,
            area_radius: 0.0,
            projectile_speed: DEFAULT_PROJECTILE_SPEED,
            scales_with_strength: damage_type == DamageType::Physical,
            scales_with_intelligence: damage_type != DamageType::Physical,
            scales_with_dexterity: false,
            range_scaling: None,
        }
    }

    /// Fully specified skill with automatic scaling: the primary damage
    /// attribute and range scaling follow the damage type, and dexterity
    /// always contributes (cooldown and a small damage bonus).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        damage_type: DamageType,
        target_mode: TargetMode,
        mana_cost: i32,
        cooldown: f64,
        base_damage: i32,
        range: f64,
        area_radius: f64,
    ) -> Self {
        let physical = damage_type == DamageType::Physical;
        Self {
            name: name.into(),
            description: description.into(),
            damage_type,
            target_mode,
            base_mana_cost: mana_cost,
            base_cooldown: cooldown,
            base_damage,
            damage_scaling: 1.0,
            range,
            area_radius,
            projectile_speed: DEFAULT_PROJECTILE_SPEED,
            scales_with_strength: physical,
            scales_with_intelligence: !physical,
            scales_with_dexterity: true,
            range_scaling: Some(if physical {
                Attribute::Strength
            } else {
                Attribute::Intelligence
            }),
        }
    }

    // === Attribute-scaled runtime values ===

    /// Nominal mana cost. The intelligence discount is applied inside
    /// [`PlayerStats::use_mana`], not here; UI showing this value stays
    /// consistent with what a cast will actually charge.
    pub fn actual_mana_cost(&self, _stats: &PlayerStats) -> i32 {
        self.base_mana_cost
    }

    /// Cooldown after attack/cast speed, with an extra dexterity reduction
    /// for dexterity-scaling skills. No lower bound is enforced.
    pub fn actual_cooldown(&self, stats: &PlayerStats) -> f64 {
        let speed = if self.damage_type == DamageType::Physical {
            stats.attack_speed()
        } else {
            stats.cast_speed()
        };
        let mut cooldown = self.base_cooldown / speed;

        if self.scales_with_dexterity {
            cooldown /= 1.0 + stats.dexterity() as f64 * COOLDOWN_REDUCTION_PER_DEXTERITY;
        }
        cooldown
    }

    /// Damage after attribute multipliers (strength, intelligence, dexterity,
    /// in that order, compounding), the skill's own scaling factor, and the
    /// weapon's flat type-matched bonus.
    pub fn actual_damage(&self, stats: &PlayerStats, weapon: Option<&EquipmentModifiers>) -> i32 {
        let mut damage = self.base_damage as f64;

        if self.scales_with_strength {
            damage *= 1.0 + stats.strength() as f64 * DAMAGE_PER_STRENGTH;
        }
        if self.scales_with_intelligence {
            damage *= 1.0 + stats.intelligence() as f64 * DAMAGE_PER_INTELLIGENCE;
        }
        if self.scales_with_dexterity {
            damage *= 1.0 + stats.dexterity() as f64 * DAMAGE_PER_DEXTERITY;
        }

        damage *= self.damage_scaling;

        if let Some(weapon) = weapon {
            damage += weapon.damage_bonus(self.damage_type) as f64;
        }

        damage.round() as i32
    }

    pub fn actual_range(&self, stats: &PlayerStats) -> f64 {
        let factor = match self.range_scaling {
            Some(Attribute::Strength) => stats.strength() as f64 * RANGE_PER_STRENGTH,
            Some(Attribute::Intelligence) => stats.intelligence() as f64 * RANGE_PER_INTELLIGENCE,
            Some(Attribute::Dexterity) => stats.dexterity() as f64 * RANGE_PER_DEXTERITY,
            Some(Attribute::Vitality) => stats.vitality() as f64 * RANGE_PER_VITALITY,
            None => 0.0,
        };
        self.range * (1.0 + factor)
    }

    /// Area radius; intelligence widens it for intelligence-scaling skills
    /// only. Returns zero for skills with no area effect.
    pub fn actual_area_radius(&self, stats: &PlayerStats) -> f64 {
        if self.area_radius <= 0.0 {
            return 0.0;
        }

        let mut radius = self.area_radius;
        if self.scales_with_intelligence {
            radius *= 1.0 + stats.intelligence() as f64 * AREA_RADIUS_PER_INTELLIGENCE;
        }
        radius
    }

    /// True iff the caster's current mana covers the nominal cost.
    pub fn can_use(&self, stats: &PlayerStats) -> bool {
        stats.mana() >= self.actual_mana_cost(stats)
    }

    /// Multi-line tooltip text with the skill's current numbers.
    pub fn describe(&self, stats: &PlayerStats) -> String {
        let mut text = format!("{}\n\n", self.description);

        let _ = writeln!(text, "Damage: {}", self.actual_damage(stats, None));
        let _ = writeln!(text, "Mana cost: {}", self.actual_mana_cost(stats));
        let _ = writeln!(text, "Cooldown: {:.1}s", self.actual_cooldown(stats));
        let _ = writeln!(text, "Range: {:.1}m", self.actual_range(stats));
        if self.area_radius > 0.0 {
            let _ = writeln!(text, "Area radius: {:.1}m", self.actual_area_radius(stats));
        }

        text.push('\n');
        if self.scales_with_strength {
            text.push_str("Strength increases damage\n");
        }
        if self.scales_with_intelligence {
            text.push_str("Intelligence increases damage\n");
        }
        if self.scales_with_dexterity {
            text.push_str("Dexterity reduces cooldown\n");
        }
        if let Some(attr) = self.range_scaling {
            let _ = writeln!(text, "{} increases range", attr.display_name());
        }
        text
    }
}
