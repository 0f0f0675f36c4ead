//! A character's ability list: slot selection, add/remove, and per-slot
//! cooldown tracking.

use serde::{Deserialize, Serialize};

use super::types::{DamageType, Skill, TargetMode};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillBook {
    skills: Vec<Skill>,
    selected: usize,
    /// Remaining cooldown per slot, in seconds; zero means ready.
    cooldowns: Vec<f64>,
}

impl SkillBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four starting abilities every character begins with.
    pub fn default_loadout() -> Self {
        let mut book = Self::new();

        book.add(Skill::new(
            "Basic Attack",
            "A direct physical strike that scales with strength.",
            DamageType::Physical,
            TargetMode::Single,
            0,
            0.8,
            12,
            3.5,
            0.0,
        ));

        let mut fireball = Skill::new(
            "Fireball",
            "Hurls a fireball that explodes on arrival, damaging everything nearby.",
            DamageType::Fire,
            TargetMode::Projectile,
            15,
            1.5,
            25,
            6.0,
            2.0,
        );
        fireball.projectile_speed = 12.0;
        fireball.damage_scaling = 1.2;
        book.add(fireball);

        book.add(Skill::basic("Ice Blast", 12, 1.2, 18, DamageType::Ice));
        book.add(Skill::basic("Quick Strike", 5, 0.4, 8, DamageType::Physical));

        book
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Skill> {
        self.skills.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn add(&mut self, skill: Skill) {
        self.skills.push(skill);
        self.cooldowns.push(0.0);
    }

    /// Removes the skill at `index`, keeping the selection in bounds.
    /// Returns the removed skill, or None for an out-of-range index.
    pub fn remove(&mut self, index: usize) -> Option<Skill> {
        if index >= self.skills.len() {
            return None;
        }
        let skill = self.skills.remove(index);
        self.cooldowns.remove(index);
        if self.selected >= self.skills.len() && !self.skills.is_empty() {
            self.selected = self.skills.len() - 1;
        }
        Some(skill)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Skill> {
        self.skills.get(self.selected)
    }

    /// Selects a slot. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.skills.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    // === Cooldown tracking ===

    pub fn is_ready(&self, index: usize) -> bool {
        self.cooldowns.get(index).is_some_and(|cd| *cd <= 0.0)
    }

    pub fn remaining_cooldown(&self, index: usize) -> f64 {
        self.cooldowns.get(index).copied().unwrap_or(0.0)
    }

    pub fn set_cooldown(&mut self, index: usize, seconds: f64) {
        if let Some(slot) = self.cooldowns.get_mut(index) {
            *slot = seconds.max(0.0);
        }
    }

    /// Advances all cooldowns by one simulation step.
    pub fn tick(&mut self, dt: f64) {
        for cd in &mut self.cooldowns {
            *cd = (*cd - dt).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_loadout_contents() {
        let book = SkillBook::default_loadout();
        assert_eq!(book.len(), 4);

        let basic = book.get(0).unwrap();
        assert_eq!(basic.name, "Basic Attack");
        assert_eq!(basic.base_mana_cost, 0);
        assert!(basic.scales_with_strength);

        let fireball = book.get(1).unwrap();
        assert_eq!(fireball.target_mode, TargetMode::Projectile);
        assert_eq!(fireball.area_radius, 2.0);
        assert!((fireball.damage_scaling - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_select_rejects_out_of_range() {
        let mut book = SkillBook::default_loadout();
        assert!(book.select(3));
        assert!(!book.select(10));
        assert_eq!(book.selected_index(), 3);
    }

    #[test]
    fn test_remove_clamps_selection() {
        let mut book = SkillBook::default_loadout();
        book.select(3);
        assert!(book.remove(3).is_some());
        assert_eq!(book.selected_index(), 2);
        assert!(book.remove(9).is_none());
    }

    #[test]
    fn test_cooldown_tick() {
        let mut book = SkillBook::default_loadout();
        assert!(book.is_ready(0));

        book.set_cooldown(0, 1.0);
        assert!(!book.is_ready(0));

        book.tick(0.6);
        assert!(!book.is_ready(0));
        assert!((book.remaining_cooldown(0) - 0.4).abs() < 1e-9);

        book.tick(0.6);
        assert!(book.is_ready(0));
    }
}
