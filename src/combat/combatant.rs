//! Combatant classes and their stat/behavior variation
//!
//! All classes share one record; behavior differences (how damage is dealt,
//! how incoming damage is absorbed) are selected by matching on the class
//! tag. Each class also declares a progression chain: the ordered fallback
//! list its broken weapon is replaced from.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    GRIT_HIT_INTERVAL, GRIT_LUCK_THRESHOLD, MAGIC_ABSORB_COST, MAGIC_ABSORB_THRESHOLD,
    SHIELD_LIFE_THRESHOLD, SHIELD_LUCK_THRESHOLD, SURGE_LUCK_THRESHOLD, SURGE_MULTIPLIER,
};
use crate::combat::dice::Dice;
use crate::combat::weapons::{Weapon, WeaponKind};
use crate::core::error::ArenaError;
use crate::core::types::CombatantId;

/// Combatant class tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatantClass {
    /// Baseline stats, bare hands, no progression chain
    Player,
    /// Durable melee fighter; a lucky magic shield when badly hurt
    Warrior,
    /// Ranged; damage grows toward the weapon's maximum range
    Archer,
    /// Spellcaster; burns magic to absorb half of incoming damage
    Mage,
    /// Heavy spellcaster; lucky surges amplify outgoing damage
    Demiurge,
    /// Stalwart; shrugs off part of every sixth received hit
    Dwarf,
    /// Precision ranged; high agility and luck
    Crossbowman,
}

/// Fully resolved starting profile for a class
#[derive(Debug, Clone, Copy)]
pub struct ClassProfile {
    pub description: &'static str,
    pub life: f64,
    pub magic: f64,
    pub attack: u32,
    pub agility: u32,
    pub speed: u32,
    pub luck: u32,
    pub weapon: WeaponKind,
}

impl CombatantClass {
    /// Get the starting profile for this class
    pub fn profile(&self) -> ClassProfile {
        match self {
            CombatantClass::Player => ClassProfile {
                description: "Игрок",
                life: 100.0,
                magic: 20.0,
                attack: 10,
                agility: 5,
                speed: 1,
                luck: 10,
                weapon: WeaponKind::BareHands,
            },
            CombatantClass::Warrior => ClassProfile {
                description: "Воин",
                life: 120.0,
                magic: 20.0,
                attack: 10,
                agility: 5,
                speed: 2,
                luck: 10,
                weapon: WeaponKind::Sword,
            },
            CombatantClass::Archer => ClassProfile {
                description: "Лучник",
                life: 80.0,
                magic: 35.0,
                attack: 5,
                agility: 10,
                speed: 1,
                luck: 10,
                weapon: WeaponKind::Bow,
            },
            CombatantClass::Mage => ClassProfile {
                description: "Маг",
                life: 70.0,
                magic: 100.0,
                attack: 5,
                agility: 8,
                speed: 1,
                luck: 10,
                weapon: WeaponKind::Staff,
            },
            CombatantClass::Demiurge => ClassProfile {
                description: "Демиург",
                life: 80.0,
                magic: 120.0,
                attack: 6,
                agility: 8,
                speed: 1,
                luck: 12,
                weapon: WeaponKind::StormStaff,
            },
            CombatantClass::Dwarf => ClassProfile {
                description: "Гном",
                life: 130.0,
                magic: 20.0,
                attack: 10,
                agility: 5,
                speed: 1,
                luck: 10,
                weapon: WeaponKind::Axe,
            },
            CombatantClass::Crossbowman => ClassProfile {
                description: "Арбалетчик",
                life: 85.0,
                magic: 20.0,
                attack: 8,
                agility: 20,
                speed: 1,
                luck: 15,
                weapon: WeaponKind::LongBow,
            },
        }
    }

    /// Ordered fallback list a broken weapon is replaced from.
    /// Lookup during replacement is by exact variant tag.
    pub fn progression_chain(&self) -> &'static [WeaponKind] {
        match self {
            CombatantClass::Player => &[],
            CombatantClass::Warrior => {
                &[WeaponKind::Sword, WeaponKind::Knife, WeaponKind::BareHands]
            }
            CombatantClass::Archer => &[WeaponKind::Bow, WeaponKind::Knife, WeaponKind::BareHands],
            CombatantClass::Mage => &[WeaponKind::Staff, WeaponKind::Knife, WeaponKind::BareHands],
            CombatantClass::Demiurge => &[
                WeaponKind::StormStaff,
                WeaponKind::Knife,
                WeaponKind::BareHands,
            ],
            CombatantClass::Dwarf => &[WeaponKind::Axe, WeaponKind::Knife, WeaponKind::BareHands],
            CombatantClass::Crossbowman => {
                &[WeaponKind::LongBow, WeaponKind::Knife, WeaponKind::BareHands]
            }
        }
    }
}

impl FromStr for CombatantClass {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "player" => Ok(CombatantClass::Player),
            "warrior" => Ok(CombatantClass::Warrior),
            "archer" => Ok(CombatantClass::Archer),
            "mage" => Ok(CombatantClass::Mage),
            "demiurge" => Ok(CombatantClass::Demiurge),
            "dwarf" => Ok(CombatantClass::Dwarf),
            "crossbowman" => Ok(CombatantClass::Crossbowman),
            _ => Err(ArenaError::UnknownClass(s.to_string())),
        }
    }
}

/// An actor in the battle: stats, position on the line, and an owned weapon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub class: CombatantClass,
    pub position: i32,
    pub life: f64,
    pub magic: f64,
    pub speed: u32,
    pub attack: u32,
    pub agility: u32,
    pub luck: u32,
    pub weapon: Weapon,
    /// Received-attack counter; drives the Dwarf's every-sixth-hit grit.
    pub hits_taken: u32,
}

impl Combatant {
    pub fn new(class: CombatantClass, position: i32, name: impl Into<String>) -> Self {
        let profile = class.profile();
        Self {
            id: CombatantId::new(),
            name: name.into(),
            class,
            position,
            life: profile.life,
            magic: profile.magic,
            speed: profile.speed,
            attack: profile.attack,
            agility: profile.agility,
            luck: profile.luck,
            weapon: Weapon::new(profile.weapon),
            hits_taken: 0,
        }
    }

    pub fn description(&self) -> &'static str {
        self.class.profile().description
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    /// One luck roll: a uniform draw plus this combatant's luck, over 100.
    /// Backs damage scaling, block checks, and dodge checks alike.
    pub fn luck_roll(&self, dice: &mut impl Dice) -> f64 {
        (dice.roll() + self.luck as f64) / 100.0
    }

    /// Move by `delta`, clamped to at most `speed` tiles per call.
    pub fn advance(&mut self, delta: i32) {
        let step = delta.unsigned_abs().min(self.speed) as i32;
        self.position += step * delta.signum();
    }

    /// Move up to `speed` tiles toward `target`.
    pub fn advance_toward(&mut self, target: i32) {
        self.advance(target - self.position);
    }

    /// Damage this combatant would deal at `distance`. Zero beyond the
    /// weapon's range; inside it the class picks the scaling:
    /// melee-style classes fall off with distance, ranged classes ramp up
    /// toward the weapon's maximum range, and the Demiurge stacks a lucky
    /// surge on the caster formula.
    pub fn attack_damage(&self, distance: u32, dice: &mut impl Dice) -> f64 {
        if distance > self.weapon.range() {
            return 0.0;
        }
        let power = self.attack as f64 + self.weapon.degraded_power();
        match self.class {
            CombatantClass::Archer | CombatantClass::Crossbowman => {
                power * self.luck_roll(dice) * distance as f64 / self.weapon.range() as f64
            }
            CombatantClass::Demiurge => {
                let base = power * self.luck_roll(dice) / distance.max(1) as f64;
                if self.magic > 0.0 && self.luck_roll(dice) > SURGE_LUCK_THRESHOLD {
                    base * SURGE_MULTIPLIER
                } else {
                    base
                }
            }
            _ => power * self.luck_roll(dice) / distance.max(1) as f64,
        }
    }

    /// Apply incoming damage to the life/magic pools, per class:
    /// a well-stocked Mage family member absorbs half and burns magic, a
    /// badly hurt Warrior may spend magic as a shield, the Dwarf may shrug
    /// off half of every sixth received hit. Life and magic floor at zero.
    pub fn take_damage(&mut self, amount: f64, dice: &mut impl Dice) {
        match self.class {
            CombatantClass::Mage | CombatantClass::Demiurge => {
                if self.magic > MAGIC_ABSORB_THRESHOLD {
                    self.life = (self.life - amount / 2.0).max(0.0);
                    self.magic = (self.magic - MAGIC_ABSORB_COST).max(0.0);
                } else {
                    self.life = (self.life - amount).max(0.0);
                }
            }
            CombatantClass::Warrior => {
                if self.life <= SHIELD_LIFE_THRESHOLD && self.luck_roll(dice) > SHIELD_LUCK_THRESHOLD
                {
                    let used = self.magic.min(amount);
                    self.magic -= used;
                    self.life = (self.life - (amount - used)).max(0.0);
                } else {
                    self.life = (self.life - amount).max(0.0);
                }
            }
            CombatantClass::Dwarf => {
                self.hits_taken += 1;
                let halved = self.hits_taken % GRIT_HIT_INTERVAL == 0
                    && self.luck_roll(dice) > GRIT_LUCK_THRESHOLD;
                let applied = if halved { amount / 2.0 } else { amount };
                self.life = (self.life - applied).max(0.0);
            }
            _ => self.life = (self.life - amount).max(0.0),
        }
    }

    /// Replace a broken weapon with the next entry of the progression
    /// chain, looked up by exact variant tag. A broken weapon whose tag is
    /// not in the chain stays in hand; the last chain entry is never
    /// replaced.
    pub fn refresh_weapon(&mut self) {
        if !self.weapon.is_broken() {
            return;
        }
        let chain = self.class.progression_chain();
        let Some(index) = chain.iter().position(|kind| *kind == self.weapon.kind) else {
            return;
        };
        if index + 1 < chain.len() {
            self.weapon = Weapon::new(chain[index + 1]);
        }
    }
}
