use serde::{Deserialize, Serialize};

/// The four core attributes a character can allocate points into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Attribute {
    Strength,
    Intelligence,
    Dexterity,
    Vitality,
}

impl Attribute {
    pub fn all() -> [Attribute; 4] {
        [
            Attribute::Strength,
            Attribute::Intelligence,
            Attribute::Dexterity,
            Attribute::Vitality,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Intelligence => "INT",
            Attribute::Dexterity => "DEX",
            Attribute::Vitality => "VIT",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Intelligence => "Intelligence",
            Attribute::Dexterity => "Dexterity",
            Attribute::Vitality => "Vitality",
        }
    }
}

/// A base/modifier pair for each attribute.
///
/// Base values are permanent and only grow by spending attribute points.
/// Modifiers are the transient contribution from equipped items and buffs,
/// and may go negative while an item granting a penalty is worn.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeBlock {
    base_strength: i32,
    base_intelligence: i32,
    base_dexterity: i32,
    base_vitality: i32,
    modifier_strength: i32,
    modifier_intelligence: i32,
    modifier_dexterity: i32,
    modifier_vitality: i32,
}

impl AttributeBlock {
    pub fn new(strength: i32, intelligence: i32, dexterity: i32, vitality: i32) -> Self {
        Self {
            base_strength: strength,
            base_intelligence: intelligence,
            base_dexterity: dexterity,
            base_vitality: vitality,
            ..Self::default()
        }
    }

    /// Effective value: base plus equipment/buff modifier.
    pub fn total(&self, attr: Attribute) -> i32 {
        self.base(attr) + self.modifier(attr)
    }

    pub fn base(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Strength => self.base_strength,
            Attribute::Intelligence => self.base_intelligence,
            Attribute::Dexterity => self.base_dexterity,
            Attribute::Vitality => self.base_vitality,
        }
    }

    pub fn modifier(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Strength => self.modifier_strength,
            Attribute::Intelligence => self.modifier_intelligence,
            Attribute::Dexterity => self.modifier_dexterity,
            Attribute::Vitality => self.modifier_vitality,
        }
    }

    pub fn increment_base(&mut self, attr: Attribute) {
        match attr {
            Attribute::Strength => self.base_strength += 1,
            Attribute::Intelligence => self.base_intelligence += 1,
            Attribute::Dexterity => self.base_dexterity += 1,
            Attribute::Vitality => self.base_vitality += 1,
        }
    }

    pub fn adjust_modifier(&mut self, attr: Attribute, delta: i32) {
        match attr {
            Attribute::Strength => self.modifier_strength += delta,
            Attribute::Intelligence => self.modifier_intelligence += delta,
            Attribute::Dexterity => self.modifier_dexterity += delta,
            Attribute::Vitality => self.modifier_vitality += delta,
        }
    }

    pub fn set_base(&mut self, attr: Attribute, value: i32) {
        match attr {
            Attribute::Strength => self.base_strength = value,
            Attribute::Intelligence => self.base_intelligence = value,
            Attribute::Dexterity => self.base_dexterity = value,
            Attribute::Vitality => self.base_vitality = value,
        }
    }

    pub fn set_modifier(&mut self, attr: Attribute, value: i32) {
        match attr {
            Attribute::Strength => self.modifier_strength = value,
            Attribute::Intelligence => self.modifier_intelligence = value,
            Attribute::Dexterity => self.modifier_dexterity = value,
            Attribute::Vitality => self.modifier_vitality = value,
        }
    }
}
