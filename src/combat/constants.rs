//! Combat constants - all tunable values in one place

// Weapon wear
/// Below this durability percentage a weapon swings at half power.
pub const WORN_THRESHOLD_PERCENT: f64 = 30.0;
/// Each swing wears the attacker's weapon by this much times a luck roll.
pub const SWING_WEAR: f64 = 10.0;

// Point-blank strike (attacker and defender on the same tile)
pub const POINT_BLANK_MULTIPLIER: f64 = 2.0;
pub const POINT_BLANK_PUSH: i32 = 1;

// Mage family damage absorption
pub const MAGIC_ABSORB_THRESHOLD: f64 = 50.0;
pub const MAGIC_ABSORB_COST: f64 = 12.0;

// Warrior magic shield
pub const SHIELD_LIFE_THRESHOLD: f64 = 60.0;
pub const SHIELD_LUCK_THRESHOLD: f64 = 0.8;

// Dwarf grit (every Nth received hit may land at half strength)
pub const GRIT_HIT_INTERVAL: u32 = 6;
pub const GRIT_LUCK_THRESHOLD: f64 = 0.5;

// Demiurge surge
pub const SURGE_MULTIPLIER: f64 = 1.5;
pub const SURGE_LUCK_THRESHOLD: f64 = 0.6;
