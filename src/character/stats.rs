//! Character leveling state, attributes, and derived combat statistics.
//!
//! [`PlayerStats`] is the single source of truth for a character's numbers.
//! Base attributes grow only by spending points; equipment contributes
//! through modifiers; everything else (max health, crit chance, speeds,
//! resistances) is derived on demand and never stored.

use log::debug;
use rand::Rng;

use super::attributes::{Attribute, AttributeBlock};
use super::events::{ListenerId, StatsEvent, StatsListeners};
use crate::core::constants::*;

/// Category of incoming damage, used to pick the resistance that applies.
///
/// `True` damage bypasses resistances entirely (damage-over-time ticks,
/// scripted hazards).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageCategory {
    Physical,
    Elemental,
    True,
}

/// Experience required to go from `level` to `level + 1`.
///
/// Diablo-style curve: `level^2 * 100 + level * 50`.
pub fn required_experience(level: u32) -> u64 {
    let level = level as u64;
    level * level * XP_CURVE_SQUARE_FACTOR + level * XP_CURVE_LINEAR_FACTOR
}

/// A character's progression and combat statistics.
#[derive(Debug)]
pub struct PlayerStats {
    level: u32,
    experience: u64,
    experience_to_next: u64,
    attributes: AttributeBlock,
    health: i32,
    max_health: i32,
    mana: i32,
    max_mana: i32,
    available_attribute_points: u32,
    points_per_level: u32,
    /// Granted by equipment only; physical resistance is derived from vitality.
    elemental_resistance: f64,
    listeners: StatsListeners,
}

impl PartialEq for PlayerStats {
    /// Listeners are transient observers and do not participate in equality.
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level
            && self.experience == other.experience
            && self.experience_to_next == other.experience_to_next
            && self.attributes == other.attributes
            && self.health == other.health
            && self.max_health == other.max_health
            && self.mana == other.mana
            && self.max_mana == other.max_mana
            && self.available_attribute_points == other.available_attribute_points
            && self.points_per_level == other.points_per_level
            && self.elemental_resistance == other.elemental_resistance
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new(1, 10, 10, 10, 10)
    }
}

impl PlayerStats {
    /// Creates a character at the given level and base attributes, with
    /// health and mana filled to their maxima.
    pub fn new(level: u32, strength: i32, intelligence: i32, dexterity: i32, vitality: i32) -> Self {
        let mut stats = Self {
            level: level.max(1),
            experience: 0,
            experience_to_next: required_experience(level.max(1)),
            attributes: AttributeBlock::new(strength, intelligence, dexterity, vitality),
            health: 0,
            max_health: 0,
            mana: 0,
            max_mana: 0,
            available_attribute_points: 0,
            points_per_level: ATTRIBUTE_POINTS_PER_LEVEL,
            elemental_resistance: 0.0,
            listeners: StatsListeners::new(),
        };
        stats.recalculate();
        stats.health = stats.max_health;
        stats.mana = stats.max_mana;
        stats
    }

    // === Accessors ===

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    pub fn experience_to_next(&self) -> u64 {
        self.experience_to_next
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn mana(&self) -> i32 {
        self.mana
    }

    pub fn max_mana(&self) -> i32 {
        self.max_mana
    }

    pub fn available_attribute_points(&self) -> u32 {
        self.available_attribute_points
    }

    pub fn points_per_level(&self) -> u32 {
        self.points_per_level
    }

    pub fn set_points_per_level(&mut self, points: u32) {
        self.points_per_level = points;
    }

    pub fn attributes(&self) -> &AttributeBlock {
        &self.attributes
    }

    /// Effective attribute value: base plus equipment modifier.
    pub fn attribute(&self, attr: Attribute) -> i32 {
        self.attributes.total(attr)
    }

    pub fn strength(&self) -> i32 {
        self.attribute(Attribute::Strength)
    }

    pub fn intelligence(&self) -> i32 {
        self.attribute(Attribute::Intelligence)
    }

    pub fn dexterity(&self) -> i32 {
        self.attribute(Attribute::Dexterity)
    }

    pub fn vitality(&self) -> i32 {
        self.attribute(Attribute::Vitality)
    }

    // === Derived combat statistics (never stored) ===

    /// 5% base plus 0.2% per DEX, capped at 75%.
    pub fn critical_chance(&self) -> f64 {
        (BASE_CRIT_CHANCE + self.dexterity() as f64 * CRIT_CHANCE_PER_DEXTERITY)
            .min(CRIT_CHANCE_CAP)
    }

    /// 150% base plus 1% per DEX.
    pub fn critical_multiplier(&self) -> f64 {
        BASE_CRIT_MULTIPLIER + self.dexterity() as f64 * CRIT_MULTIPLIER_PER_DEXTERITY
    }

    pub fn attack_speed(&self) -> f64 {
        1.0 + self.dexterity() as f64 * ATTACK_SPEED_PER_DEXTERITY
    }

    pub fn cast_speed(&self) -> f64 {
        1.0 + self.intelligence() as f64 * CAST_SPEED_PER_INTELLIGENCE
    }

    /// 0.3% per VIT, capped at 75%.
    pub fn physical_resistance(&self) -> f64 {
        (self.vitality() as f64 * PHYSICAL_RESIST_PER_VITALITY).min(PHYSICAL_RESIST_CAP)
    }

    pub fn elemental_resistance(&self) -> f64 {
        self.elemental_resistance
    }

    /// Called by the equipment collaborator; clamped to [0, 1].
    pub fn set_elemental_resistance(&mut self, value: f64) {
        self.elemental_resistance = value.clamp(0.0, 1.0);
    }

    // === Event listeners ===

    pub fn subscribe(&mut self, listener: Box<dyn FnMut(&StatsEvent)>) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // === Attribute point allocation ===

    pub fn can_spend_attribute_point(&self) -> bool {
        self.available_attribute_points > 0
    }

    /// Spends one point on `attr`. Returns false (and changes nothing) if no
    /// points are available; this is a rejected input, not an error.
    pub fn spend_attribute_point(&mut self, attr: Attribute) -> bool {
        if !self.can_spend_attribute_point() {
            debug!("attribute point spend rejected: no points available");
            return false;
        }

        self.attributes.increment_base(attr);
        self.available_attribute_points -= 1;
        self.recalculate();
        self.listeners.emit(StatsEvent::AttributeChanged);

        debug!(
            "spent point on {}, {} remaining",
            attr.display_name(),
            self.available_attribute_points
        );
        true
    }

    /// Applies an equipment/buff modifier delta. Callers are responsible for
    /// symmetric equip/unequip deltas.
    pub fn adjust_attribute(&mut self, attr: Attribute, delta: i32) {
        self.attributes.adjust_modifier(attr, delta);
        self.recalculate();
        self.listeners.emit(StatsEvent::AttributeChanged);
    }

    // === Experience and leveling ===

    /// Adds experience and processes any level-ups it pays for. A grant large
    /// enough to span several levels loops until the remainder is below the
    /// current threshold.
    pub fn gain_experience(&mut self, amount: u64) {
        if amount == 0 {
            return;
        }

        self.experience += amount;
        self.listeners.emit(StatsEvent::ExperienceGained { amount });

        while self.experience >= self.experience_to_next {
            self.level_up();
        }
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.experience -= self.experience_to_next;
        self.experience_to_next = required_experience(self.level);

        self.available_attribute_points += self.points_per_level;
        self.listeners.emit(StatsEvent::AttributePointsGained {
            points: self.points_per_level,
        });

        self.recalculate();

        // Level-up refills rather than rescales.
        self.health = self.max_health;
        self.mana = self.max_mana;

        self.listeners.emit(StatsEvent::LevelUp { level: self.level });
        debug!(
            "level up: now level {}, {} attribute points available",
            self.level, self.available_attribute_points
        );
    }

    /// Recomputes max health/mana from level and attributes, preserving the
    /// current fill ratio. The rescale is skipped when the previous max was
    /// zero (first call from the constructor).
    pub fn recalculate(&mut self) {
        let old_max_health = self.max_health;
        let old_max_mana = self.max_mana;

        self.max_health = (BASE_MAX_HEALTH
            + self.level as i32 * HEALTH_PER_LEVEL
            + self.vitality() * HEALTH_PER_VITALITY)
            .max(0);
        self.max_mana = (BASE_MAX_MANA
            + self.level as i32 * MANA_PER_LEVEL
            + self.intelligence() * MANA_PER_INTELLIGENCE)
            .max(0);

        if old_max_health > 0 {
            let ratio = self.health as f64 / old_max_health as f64;
            self.health = (self.max_health as f64 * ratio).round() as i32;
        }
        if old_max_mana > 0 {
            let ratio = self.mana as f64 / old_max_mana as f64;
            self.mana = (self.max_mana as f64 * ratio).round() as i32;
        }

        self.health = self.health.clamp(0, self.max_health);
        self.mana = self.mana.clamp(0, self.max_mana);
    }

    // === Health and mana ===

    /// Applies incoming damage after the matching resistance. Negative
    /// amounts are rejected.
    pub fn take_damage(&mut self, amount: i32, category: DamageCategory) {
        if amount < 0 {
            return;
        }

        let resisted = match category {
            DamageCategory::Physical => amount as f64 * (1.0 - self.physical_resistance()),
            DamageCategory::Elemental => amount as f64 * (1.0 - self.elemental_resistance),
            DamageCategory::True => amount as f64,
        };

        let actual = resisted.round() as i32;
        self.health = (self.health - actual).max(0);
        self.listeners.emit(StatsEvent::HealthChanged { health: self.health });
    }

    pub fn heal(&mut self, amount: i32) {
        if amount < 0 {
            return;
        }
        self.health = (self.health + amount).min(self.max_health);
        self.listeners.emit(StatsEvent::HealthChanged { health: self.health });
    }

    pub fn restore_mana(&mut self, amount: i32) {
        if amount < 0 {
            return;
        }
        self.mana = (self.mana + amount).min(self.max_mana);
        self.listeners.emit(StatsEvent::ManaChanged { mana: self.mana });
    }

    pub fn set_health(&mut self, value: i32) {
        self.health = value.clamp(0, self.max_health);
        self.listeners.emit(StatsEvent::HealthChanged { health: self.health });
    }

    pub fn set_mana(&mut self, value: i32) {
        self.mana = value.clamp(0, self.max_mana);
        self.listeners.emit(StatsEvent::ManaChanged { mana: self.mana });
    }

    /// The real cost of a nominal mana amount after the intelligence
    /// discount (0.1% per INT, capped at 30%).
    pub fn discounted_mana_cost(&self, amount: i32) -> i32 {
        let reduction =
            (self.intelligence() as f64 * MANA_DISCOUNT_PER_INTELLIGENCE).min(MANA_DISCOUNT_CAP);
        (amount as f64 * (1.0 - reduction)).round() as i32
    }

    /// Deducts the discounted cost of `amount` mana. This is the sole gate
    /// for whether a skill can be cast; on failure nothing changes.
    pub fn use_mana(&mut self, amount: i32) -> bool {
        let actual_cost = self.discounted_mana_cost(amount);
        if self.mana < actual_cost {
            return false;
        }

        self.mana -= actual_cost;
        self.listeners.emit(StatsEvent::ManaChanged { mana: self.mana });
        true
    }

    /// Installs persisted progression values after construction. Only the
    /// snapshot restore path uses this; no notifications fire.
    pub(crate) fn restore_progression(
        &mut self,
        experience: u64,
        available_attribute_points: u32,
        health: i32,
        mana: i32,
    ) {
        self.experience = experience;
        self.available_attribute_points = available_attribute_points;
        self.health = health.clamp(0, self.max_health);
        self.mana = mana.clamp(0, self.max_mana);
    }

    // === Critical hits ===

    /// Rolls a uniform value in [0, 1) against the critical chance.
    pub fn roll_critical_hit(&self, rng: &mut impl Rng) -> bool {
        rng.gen::<f64>() < self.critical_chance()
    }

    pub fn apply_critical_damage(&self, damage: i32) -> i32 {
        (damage as f64 * self.critical_multiplier()).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_character_starts_full() {
        let stats = PlayerStats::default();
        // 100 + 1*5 + 10*8 = 185, 50 + 1*3 + 10*6 = 113
        assert_eq!(stats.max_health(), 185);
        assert_eq!(stats.health(), 185);
        assert_eq!(stats.max_mana(), 113);
        assert_eq!(stats.mana(), 113);
        assert_eq!(stats.experience_to_next(), 150);
    }

    #[test]
    fn test_max_health_formula() {
        // Scenario: vitality 10 at level 1 gives 100 + 5 + 80 = 185.
        let stats = PlayerStats::new(1, 0, 0, 0, 10);
        assert_eq!(stats.max_health(), 185);
    }

    #[test]
    fn test_derived_stats_from_dexterity() {
        let stats = PlayerStats::new(1, 10, 10, 10, 10);
        assert!((stats.critical_chance() - 0.07).abs() < 1e-9);
        assert!((stats.critical_multiplier() - 1.6).abs() < 1e-9);
        assert!((stats.attack_speed() - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_critical_chance_is_capped() {
        let stats = PlayerStats::new(1, 10, 10, 1000, 10);
        assert_eq!(stats.critical_chance(), 0.75);
    }

    #[test]
    fn test_apply_critical_damage() {
        let stats = PlayerStats::new(1, 10, 10, 10, 10);
        assert_eq!(stats.apply_critical_damage(100), 160);
    }

    #[test]
    fn test_mana_discount() {
        // Scenario: intelligence 50 discounts 5%, so 50 mana costs 48.
        let mut stats = PlayerStats::new(1, 10, 50, 10, 10);
        let before = stats.mana();
        assert_eq!(stats.discounted_mana_cost(50), 48);
        assert!(stats.use_mana(50));
        assert_eq!(stats.mana(), before - 48);
    }

    #[test]
    fn test_mana_discount_is_capped() {
        let stats = PlayerStats::new(1, 10, 500, 10, 10);
        assert_eq!(stats.discounted_mana_cost(100), 70);
    }

    #[test]
    fn test_use_mana_fails_without_mutation() {
        let mut stats = PlayerStats::new(1, 10, 0, 10, 10);
        stats.set_mana(5);
        assert!(!stats.use_mana(10));
        assert_eq!(stats.mana(), 5);
    }

    #[test]
    fn test_gain_experience_levels_up_and_refills() {
        let mut stats = PlayerStats::new(1, 10, 10, 10, 10);
        stats.set_health(1);
        stats.gain_experience(150);

        assert_eq!(stats.level(), 2);
        assert_eq!(stats.experience(), 0);
        assert_eq!(stats.experience_to_next(), required_experience(2));
        assert_eq!(stats.health(), stats.max_health());
        assert_eq!(stats.available_attribute_points(), 5);
    }

    #[test]
    fn test_gain_experience_spans_multiple_levels() {
        let mut stats = PlayerStats::new(1, 10, 10, 10, 10);
        stats.gain_experience(100_000);

        assert!(stats.level() > 2);
        assert!(stats.experience() < stats.experience_to_next());
        assert_eq!(
            stats.available_attribute_points(),
            (stats.level() - 1) * 5
        );
    }

    #[test]
    fn test_zero_experience_is_noop() {
        let mut stats = PlayerStats::new(1, 10, 10, 10, 10);
        stats.gain_experience(0);
        assert_eq!(stats.experience(), 0);
        assert_eq!(stats.level(), 1);
    }

    #[test]
    fn test_spend_attribute_point() {
        let mut stats = PlayerStats::new(1, 10, 10, 10, 10);
        assert!(!stats.spend_attribute_point(Attribute::Strength));

        stats.gain_experience(150);
        assert!(stats.spend_attribute_point(Attribute::Strength));
        assert_eq!(stats.strength(), 11);
        assert_eq!(stats.available_attribute_points(), 4);
    }

    #[test]
    fn test_recalculate_preserves_fill_ratio() {
        let mut stats = PlayerStats::new(1, 10, 10, 10, 10);
        stats.set_health(stats.max_health() / 2);
        let ratio = stats.health() as f64 / stats.max_health() as f64;

        stats.adjust_attribute(Attribute::Vitality, 20);

        let new_ratio = stats.health() as f64 / stats.max_health() as f64;
        assert!((ratio - new_ratio).abs() < 0.01);
        assert!(stats.health() <= stats.max_health());
    }

    #[test]
    fn test_equip_unequip_round_trip() {
        let mut stats = PlayerStats::new(1, 10, 10, 10, 10);
        stats.set_health(90);
        let health = stats.health();
        let max_health = stats.max_health();

        stats.adjust_attribute(Attribute::Vitality, 7);
        stats.adjust_attribute(Attribute::Vitality, -7);

        assert_eq!(stats.vitality(), 10);
        assert_eq!(stats.max_health(), max_health);
        assert_eq!(stats.health(), health);
    }

    #[test]
    fn test_take_damage_applies_physical_resistance() {
        // Vitality 100 gives 30% physical resistance.
        let mut stats = PlayerStats::new(1, 10, 10, 10, 100);
        let before = stats.health();
        stats.take_damage(100, DamageCategory::Physical);
        assert_eq!(stats.health(), before - 70);
    }

    #[test]
    fn test_true_damage_bypasses_resistance() {
        let mut stats = PlayerStats::new(1, 10, 10, 10, 100);
        stats.set_elemental_resistance(0.5);
        let before = stats.health();
        stats.take_damage(100, DamageCategory::True);
        assert_eq!(stats.health(), before - 100);
    }

    #[test]
    fn test_elemental_resistance_reduces_damage() {
        let mut stats = PlayerStats::new(1, 10, 10, 10, 10);
        stats.set_elemental_resistance(0.5);
        let before = stats.health();
        stats.take_damage(100, DamageCategory::Elemental);
        assert_eq!(stats.health(), before - 50);
    }

    #[test]
    fn test_health_never_goes_negative() {
        let mut stats = PlayerStats::new(1, 10, 10, 10, 10);
        stats.take_damage(100_000, DamageCategory::True);
        assert_eq!(stats.health(), 0);
        stats.take_damage(10, DamageCategory::Physical);
        assert_eq!(stats.health(), 0);
    }

    #[test]
    fn test_negative_amounts_are_rejected() {
        let mut stats = PlayerStats::new(1, 10, 10, 10, 10);
        stats.set_health(50);
        stats.set_mana(20);
        stats.take_damage(-5, DamageCategory::Physical);
        stats.heal(-5);
        stats.restore_mana(-5);
        assert_eq!(stats.health(), 50);
        assert_eq!(stats.mana(), 20);
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut stats = PlayerStats::new(1, 10, 10, 10, 10);
        stats.set_health(10);
        stats.heal(100_000);
        assert_eq!(stats.health(), stats.max_health());
    }

    #[test]
    fn test_crit_roll_matches_chance_statistically() {
        let stats = PlayerStats::new(1, 10, 10, 100, 10);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let rolls = 10_000;
        let crits = (0..rolls)
            .filter(|_| stats.roll_critical_hit(&mut rng))
            .count();

        // Expect roughly 25% (0.05 + 100 * 0.002).
        let rate = crits as f64 / rolls as f64;
        assert!((rate - 0.25).abs() < 0.02, "crit rate was {rate}");
    }

    #[test]
    fn test_level_up_emits_events() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut stats = PlayerStats::new(1, 10, 10, 10, 10);
        stats.subscribe(Box::new(move |event| sink.borrow_mut().push(*event)));
        stats.gain_experience(150);

        assert_eq!(
            *seen.borrow(),
            vec![
                StatsEvent::ExperienceGained { amount: 150 },
                StatsEvent::AttributePointsGained { points: 5 },
                StatsEvent::LevelUp { level: 2 },
            ]
        );
    }
}
