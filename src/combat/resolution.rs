//! Attack and defense resolution
//!
//! One attack: range check -> attacker weapon wear -> damage roll ->
//! delivery. A delivery lands on exactly one of three outcomes, checked in
//! order: block (the defender's weapon absorbs the blow), dodge (no effect),
//! hit (the defender's class decides how the damage is absorbed). When the
//! attacker stands on the defender's tile the defender is pushed one tile
//! right and struck a second time at double strength.

use serde::{Deserialize, Serialize};

use crate::combat::combatant::Combatant;
use crate::combat::constants::{POINT_BLANK_MULTIPLIER, POINT_BLANK_PUSH, SWING_WEAR};
use crate::combat::dice::Dice;

/// Outcome of a single delivery to the defender
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DefenseOutcome {
    /// The defender's weapon absorbed the blow as wear
    Blocked,
    /// No effect whatsoever
    Dodged,
    /// The damage reached the defender's pools
    Hit { damage: f64 },
}

/// Outcome of one attack attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// The target was beyond the attacker's weapon range; nothing changed
    OutOfRange,
    Delivered {
        first: DefenseOutcome,
        /// Second, doubled delivery after a same-tile push, if any
        point_blank: Option<DefenseOutcome>,
    },
}

/// Deliver `damage` to the defender: block, dodge, or take. Block is
/// checked before dodge; exactly one outcome occurs.
pub fn receive_attack(
    defender: &mut Combatant,
    damage: f64,
    dice: &mut impl Dice,
) -> DefenseOutcome {
    let block_threshold = (100.0 - defender.luck as f64) / 100.0;
    if defender.luck_roll(dice) > block_threshold {
        defender.weapon.wear(damage);
        defender.refresh_weapon();
        return DefenseOutcome::Blocked;
    }

    let dodge_threshold =
        (100.0 - defender.agility as f64 - defender.speed as f64 * 3.0) / 100.0;
    if defender.luck_roll(dice) > dodge_threshold {
        return DefenseOutcome::Dodged;
    }

    defender.take_damage(damage, dice);
    DefenseOutcome::Hit { damage }
}

/// One attack attempt from `attacker` against `defender`.
pub fn try_attack(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    dice: &mut impl Dice,
) -> AttackOutcome {
    let distance = attacker.position.abs_diff(defender.position);
    if distance > attacker.weapon.range() {
        return AttackOutcome::OutOfRange;
    }

    let wear = SWING_WEAR * attacker.luck_roll(dice);
    attacker.weapon.wear(wear);
    attacker.refresh_weapon();

    let damage = attacker.attack_damage(distance, dice);
    let first = receive_attack(defender, damage, dice);

    let point_blank = (attacker.position == defender.position).then(|| {
        defender.advance(POINT_BLANK_PUSH);
        receive_attack(defender, damage * POINT_BLANK_MULTIPLIER, dice)
    });

    AttackOutcome::Delivered { first, point_blank }
}
