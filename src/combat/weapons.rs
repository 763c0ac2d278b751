//! Weapon catalog and durability model
//!
//! Every weapon is one of a fixed set of variants, each a fully resolved
//! (name, attack, durability, range) definition. A wielded weapon carries
//! only its variant tag and remaining durability; durability never rises
//! again once lost - a broken weapon is replaced, not repaired.

use serde::{Deserialize, Serialize};

use crate::combat::constants::WORN_THRESHOLD_PERCENT;

/// Weapon variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    BareHands,
    Knife,
    Bow,
    LongBow,
    Sword,
    Axe,
    Staff,
    StormStaff,
}

/// Fully resolved definition of a weapon variant
#[derive(Debug, Clone, Copy)]
pub struct WeaponSpec {
    pub name: &'static str,
    pub base_attack: f64,
    /// `f64::INFINITY` marks an unbreakable weapon.
    pub max_durability: f64,
    /// Maximum attack distance in tiles.
    pub range: u32,
}

impl WeaponKind {
    /// Get the catalog definition for this variant
    pub fn spec(&self) -> WeaponSpec {
        match self {
            WeaponKind::BareHands => WeaponSpec {
                name: "Рука",
                base_attack: 1.0,
                max_durability: f64::INFINITY,
                range: 1,
            },
            WeaponKind::Knife => WeaponSpec {
                name: "Нож",
                base_attack: 5.0,
                max_durability: 300.0,
                range: 1,
            },
            WeaponKind::Bow => WeaponSpec {
                name: "Лук",
                base_attack: 10.0,
                max_durability: 200.0,
                range: 3,
            },
            WeaponKind::LongBow => WeaponSpec {
                name: "Длинный лук",
                base_attack: 15.0,
                max_durability: 200.0,
                range: 4,
            },
            WeaponKind::Sword => WeaponSpec {
                name: "Меч",
                base_attack: 25.0,
                max_durability: 500.0,
                range: 1,
            },
            WeaponKind::Axe => WeaponSpec {
                name: "Секира",
                base_attack: 27.0,
                max_durability: 800.0,
                range: 1,
            },
            WeaponKind::Staff => WeaponSpec {
                name: "Посох",
                base_attack: 8.0,
                max_durability: 300.0,
                range: 2,
            },
            WeaponKind::StormStaff => WeaponSpec {
                name: "Посох Бури",
                base_attack: 10.0,
                max_durability: 300.0,
                range: 3,
            },
        }
    }
}

/// A wielded weapon: variant tag plus remaining durability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub durability: f64,
}

impl Weapon {
    /// Fresh instance at full durability
    pub fn new(kind: WeaponKind) -> Self {
        Self {
            kind,
            durability: kind.spec().max_durability,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.spec().name
    }

    pub fn base_attack(&self) -> f64 {
        self.kind.spec().base_attack
    }

    pub fn max_durability(&self) -> f64 {
        self.kind.spec().max_durability
    }

    pub fn range(&self) -> u32 {
        self.kind.spec().range
    }

    /// Reduce durability by `amount`, floored at 0. No-op for unbreakable
    /// weapons. Accepts any non-negative amount.
    pub fn wear(&mut self, amount: f64) {
        if self.durability.is_finite() {
            self.durability = (self.durability - amount).max(0.0);
        }
    }

    /// Attack contribution at the current state of wear: zero when broken,
    /// full at max durability or while the durability ratio stays at or
    /// above the worn threshold, half below it.
    pub fn degraded_power(&self) -> f64 {
        if self.is_broken() {
            return 0.0;
        }
        let spec = self.kind.spec();
        let percent = self.durability / spec.max_durability * 100.0;
        // The equality branch keeps unbreakable weapons (INFINITY/INFINITY
        // is NaN) and brand-new ones at full power.
        if percent >= WORN_THRESHOLD_PERCENT || self.durability == spec.max_durability {
            spec.base_attack
        } else {
            spec.base_attack / 2.0
        }
    }

    pub fn is_broken(&self) -> bool {
        self.durability == 0.0
    }
}
