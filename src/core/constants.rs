// Leveling constants
pub const XP_CURVE_SQUARE_FACTOR: u64 = 100;
pub const XP_CURVE_LINEAR_FACTOR: u64 = 50;
pub const ATTRIBUTE_POINTS_PER_LEVEL: u32 = 5;

// Health and mana formulas
pub const BASE_MAX_HEALTH: i32 = 100;
pub const HEALTH_PER_LEVEL: i32 = 5;
pub const HEALTH_PER_VITALITY: i32 = 8;
pub const BASE_MAX_MANA: i32 = 50;
pub const MANA_PER_LEVEL: i32 = 3;
pub const MANA_PER_INTELLIGENCE: i32 = 6;

// Critical hit constants
pub const BASE_CRIT_CHANCE: f64 = 0.05;
pub const CRIT_CHANCE_PER_DEXTERITY: f64 = 0.002;
pub const CRIT_CHANCE_CAP: f64 = 0.75;
pub const BASE_CRIT_MULTIPLIER: f64 = 1.5;
pub const CRIT_MULTIPLIER_PER_DEXTERITY: f64 = 0.01;

// Action speed constants
pub const ATTACK_SPEED_PER_DEXTERITY: f64 = 0.005;
pub const CAST_SPEED_PER_INTELLIGENCE: f64 = 0.005;

// Resistance constants
pub const PHYSICAL_RESIST_PER_VITALITY: f64 = 0.003;
pub const PHYSICAL_RESIST_CAP: f64 = 0.75;

// Mana cost discount from intelligence
pub const MANA_DISCOUNT_PER_INTELLIGENCE: f64 = 0.001;
pub const MANA_DISCOUNT_CAP: f64 = 0.30;

// Skill damage scaling per attribute point
pub const DAMAGE_PER_STRENGTH: f64 = 0.025;
pub const DAMAGE_PER_INTELLIGENCE: f64 = 0.03;
pub const DAMAGE_PER_DEXTERITY: f64 = 0.015;

// Cooldown reduction from dexterity (applied on top of attack/cast speed)
pub const COOLDOWN_REDUCTION_PER_DEXTERITY: f64 = 0.002;

// Skill range scaling per attribute point
pub const RANGE_PER_STRENGTH: f64 = 0.01;
pub const RANGE_PER_INTELLIGENCE: f64 = 0.015;
pub const RANGE_PER_DEXTERITY: f64 = 0.01;
pub const RANGE_PER_VITALITY: f64 = 0.005;

// Area-of-effect radius scaling (intelligence only)
pub const AREA_RADIUS_PER_INTELLIGENCE: f64 = 0.01;

// Skill defaults
pub const DEFAULT_SKILL_RANGE: f64 = 3.0;
pub const DEFAULT_PROJECTILE_SPEED: f64 = 10.0;

// Targeting policy
pub const SINGLE_TARGET_CONE_HALF_ANGLE_DEG: f64 = 30.0;
pub const AREA_CENTER_RANGE_FRACTION: f64 = 0.7;
pub const PROJECTILE_MIN_SPLASH_RADIUS: f64 = 1.0;
