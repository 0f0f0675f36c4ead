//! Types at the boundary between skill resolution and the host's spatial
//! world: positions, the target-query collaborator, and resolution outcomes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point or direction on the battlefield plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: Vec2) -> f64 {
        (other - *self).length()
    }

    /// Unit vector in the same direction; zero stays zero.
    pub fn normalized(&self) -> Vec2 {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        Vec2::new(self.x / len, self.y / len)
    }

    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn scale(&self, factor: f64) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }

    /// Angle between two directions, in degrees.
    pub fn angle_between_deg(&self, other: Vec2) -> f64 {
        let denom = self.length() * other.length();
        if denom == 0.0 {
            return 0.0;
        }
        let cos = (self.dot(other) / denom).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Opaque handle to a damageable entity owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u64);

/// Spatial collaborator supplied by the host: candidate targets, their
/// positions, and liveness. The resolver never owns or mutates targets; it
/// reports damage through a callback.
pub trait TargetQuery {
    fn caster_position(&self) -> Vec2;

    /// Direction the caster is facing; need not be normalized.
    fn caster_facing(&self) -> Vec2;

    /// Candidate targets within `radius` of `center`. The resolver applies
    /// any further cone or liveness filtering itself.
    fn targets_within(&self, center: Vec2, radius: f64) -> Vec<TargetId>;

    /// None when the target no longer exists.
    fn position_of(&self, target: TargetId) -> Option<Vec2>;

    fn is_alive(&self, target: TargetId) -> bool;
}

/// The only expected failure mode of a skill use. Surfaced as a value; the
/// cast has no side effects when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkillError {
    #[error("insufficient mana: need {required}, have {available}")]
    InsufficientMana { required: i32, available: i32 },
}

/// A projectile in flight. The host schedules
/// [`resolve_projectile_impact`](super::resolve::resolve_projectile_impact)
/// after `travel_time`, or drops the launch entirely (caster death,
/// despawn) without telling the core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileLaunch {
    pub origin: Vec2,
    pub impact_point: Vec2,
    pub travel_time: f64,
    pub splash_radius: f64,
}

/// Summary of a resolved skill use, for UI and VFX.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkillOutcome {
    pub targets_hit: u32,
    pub total_damage: i64,
    pub any_critical: bool,
    /// Mana actually deducted, after the intelligence discount.
    pub mana_spent: i32,
    pub cooldown_set: f64,
    /// Present only for projectile skills; damage is deferred to impact.
    pub projectile: Option<ProjectileLaunch>,
}

/// Summary of a deferred projectile impact.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImpactOutcome {
    pub targets_hit: u32,
    pub total_damage: i64,
    pub any_critical: bool,
}
