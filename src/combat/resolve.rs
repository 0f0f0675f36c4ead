//! Skill resolution: turns a skill use into damage applied to targets.
//!
//! Targeting policy by mode:
//! - Single: nearest living target within range, inside a forward cone of
//!   twice [`SINGLE_TARGET_CONE_HALF_ANGLE_DEG`].
//! - Area: every living target within the actual area radius of a point
//!   [`AREA_CENTER_RANGE_FRACTION`] of the way to max range along the
//!   caster's facing.
//! - Projectile: mana and cooldown are paid up front, damage is deferred;
//!   the host schedules [`resolve_projectile_impact`] after the travel time.
//! - Self-cast: no target damage; buff effects belong to the caller.

use log::debug;
use rand::Rng;

use super::types::{
    ImpactOutcome, ProjectileLaunch, SkillError, SkillOutcome, TargetId, TargetQuery, Vec2,
};
use crate::character::PlayerStats;
use crate::core::constants::{
    AREA_CENTER_RANGE_FRACTION, PROJECTILE_MIN_SPLASH_RADIUS, SINGLE_TARGET_CONE_HALF_ANGLE_DEG,
};
use crate::equipment::EquipmentModifiers;
use crate::skills::{Skill, TargetMode};

/// Uses a skill: checks affordability, pays mana, computes the cooldown,
/// resolves targets, and applies damage through the callback (exactly once
/// per target, with an independent critical roll each).
///
/// An unaffordable cast returns [`SkillError::InsufficientMana`] and changes
/// nothing.
pub fn use_skill<Q: TargetQuery + ?Sized>(
    skill: &Skill,
    stats: &mut PlayerStats,
    weapon: Option<&EquipmentModifiers>,
    query: &Q,
    mut apply_damage: impl FnMut(TargetId, i32, bool),
    rng: &mut impl Rng,
) -> Result<SkillOutcome, SkillError> {
    let nominal_cost = skill.actual_mana_cost(stats);
    if !skill.can_use(stats) {
        return Err(SkillError::InsufficientMana {
            required: nominal_cost,
            available: stats.mana(),
        });
    }

    let mana_spent = stats.discounted_mana_cost(nominal_cost);
    if !stats.use_mana(nominal_cost) {
        // Unreachable while the discount cannot exceed 100%.
        return Err(SkillError::InsufficientMana {
            required: nominal_cost,
            available: stats.mana(),
        });
    }

    let cooldown_set = skill.actual_cooldown(stats);
    let mut outcome = SkillOutcome {
        mana_spent,
        cooldown_set,
        ..SkillOutcome::default()
    };

    match skill.target_mode {
        TargetMode::Single => {
            if let Some(target) = nearest_in_cone(skill, stats, query) {
                apply_to_targets(skill, stats, weapon, &[target], &mut apply_damage, rng, &mut outcome);
            }
        }
        TargetMode::Area => {
            let targets = targets_in_area(skill, stats, query);
            apply_to_targets(skill, stats, weapon, &targets, &mut apply_damage, rng, &mut outcome);
        }
        TargetMode::Projectile => {
            outcome.projectile = Some(plan_projectile(skill, stats, query));
        }
        TargetMode::SelfCast => {}
    }

    debug!(
        "used {}: {} targets, {} damage, cooldown {:.2}s",
        skill.name, outcome.targets_hit, outcome.total_damage, cooldown_set
    );
    Ok(outcome)
}

/// Resolves a projectile's deferred impact: area-style resolution around the
/// impact point, with damage computed from the caster's stats at impact
/// time.
pub fn resolve_projectile_impact<Q: TargetQuery + ?Sized>(
    skill: &Skill,
    stats: &PlayerStats,
    weapon: Option<&EquipmentModifiers>,
    query: &Q,
    launch: &ProjectileLaunch,
    mut apply_damage: impl FnMut(TargetId, i32, bool),
    rng: &mut impl Rng,
) -> ImpactOutcome {
    let mut outcome = SkillOutcome::default();
    let targets: Vec<TargetId> = query
        .targets_within(launch.impact_point, launch.splash_radius)
        .into_iter()
        .filter(|t| query.is_alive(*t))
        .collect();

    apply_to_targets(skill, stats, weapon, &targets, &mut apply_damage, rng, &mut outcome);

    ImpactOutcome {
        targets_hit: outcome.targets_hit,
        total_damage: outcome.total_damage,
        any_critical: outcome.any_critical,
    }
}

/// Nearest living target within actual range, inside the forward cone.
fn nearest_in_cone<Q: TargetQuery + ?Sized>(
    skill: &Skill,
    stats: &PlayerStats,
    query: &Q,
) -> Option<TargetId> {
    let origin = query.caster_position();
    let facing = query.caster_facing();
    let range = skill.actual_range(stats);

    let mut best: Option<(TargetId, f64)> = None;
    for target in query.targets_within(origin, range) {
        if !query.is_alive(target) {
            continue;
        }
        let Some(position) = query.position_of(target) else {
            continue;
        };

        let to_target = position - origin;
        if facing.angle_between_deg(to_target) > SINGLE_TARGET_CONE_HALF_ANGLE_DEG {
            continue;
        }

        let distance = to_target.length();
        if distance <= range && best.map_or(true, |(_, d)| distance < d) {
            best = Some((target, distance));
        }
    }
    best.map(|(target, _)| target)
}

/// Living targets within the actual area radius of the area center.
fn targets_in_area<Q: TargetQuery + ?Sized>(
    skill: &Skill,
    stats: &PlayerStats,
    query: &Q,
) -> Vec<TargetId> {
    let center = area_center(skill, stats, query);
    let radius = skill.actual_area_radius(stats);

    query
        .targets_within(center, radius)
        .into_iter()
        .filter(|t| query.is_alive(*t))
        .collect()
}

/// Area skills land ahead of the caster, most of the way to max range.
fn area_center<Q: TargetQuery + ?Sized>(skill: &Skill, stats: &PlayerStats, query: &Q) -> Vec2 {
    let reach = skill.actual_range(stats) * AREA_CENTER_RANGE_FRACTION;
    query.caster_position() + query.caster_facing().normalized().scale(reach)
}

fn plan_projectile<Q: TargetQuery + ?Sized>(
    skill: &Skill,
    stats: &PlayerStats,
    query: &Q,
) -> ProjectileLaunch {
    let origin = query.caster_position();
    let range = skill.actual_range(stats);
    let impact_point = origin + query.caster_facing().normalized().scale(range);

    let splash_radius = if skill.area_radius > 0.0 {
        skill.actual_area_radius(stats)
    } else {
        PROJECTILE_MIN_SPLASH_RADIUS
    };

    ProjectileLaunch {
        origin,
        impact_point,
        travel_time: origin.distance(impact_point) / skill.projectile_speed,
        splash_radius,
    }
}

/// Applies skill damage to each target with an independent critical roll,
/// invoking the callback exactly once per target.
fn apply_to_targets(
    skill: &Skill,
    stats: &PlayerStats,
    weapon: Option<&EquipmentModifiers>,
    targets: &[TargetId],
    apply_damage: &mut impl FnMut(TargetId, i32, bool),
    rng: &mut impl Rng,
    outcome: &mut SkillOutcome,
) {
    for &target in targets {
        let mut damage = skill.actual_damage(stats, weapon);
        let is_critical = stats.roll_critical_hit(rng);
        if is_critical {
            damage = stats.apply_critical_damage(damage);
        }

        apply_damage(target, damage, is_critical);
        outcome.targets_hit += 1;
        outcome.total_damage += damage as i64;
        outcome.any_critical |= is_critical;
    }
}
