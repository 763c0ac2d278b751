pub mod combatant;
pub mod constants;
pub mod dice;
pub mod resolution;
pub mod weapons;

pub use combatant::{ClassProfile, Combatant, CombatantClass};
pub use dice::{Dice, FixedDice, RngDice, ScriptedDice};
pub use resolution::{receive_attack, try_attack, AttackOutcome, DefenseOutcome};
pub use weapons::{Weapon, WeaponKind, WeaponSpec};
