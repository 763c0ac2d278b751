//! Per-combatant turn: pick the weakest living enemy, close distance, strike

use crate::combat::combatant::Combatant;
use crate::combat::dice::Dice;
use crate::combat::resolution::{try_attack, AttackOutcome};

/// Index of the living enemy with the lowest life. First encountered wins
/// ties; `None` when no other combatant is alive.
pub fn choose_target(roster: &[Combatant], actor: usize) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, combatant) in roster.iter().enumerate() {
        if index == actor || combatant.is_dead() {
            continue;
        }
        match best {
            Some(current) if roster[current].life <= combatant.life => {}
            _ => best = Some(index),
        }
    }
    best
}

/// One turn for `roster[actor]`: choose a target, move toward it, attempt
/// an attack. Returns the target index and attack outcome, or `None` when
/// no enemy is left to act against.
pub fn take_turn(
    roster: &mut [Combatant],
    actor: usize,
    dice: &mut impl Dice,
) -> Option<(usize, AttackOutcome)> {
    let target = choose_target(roster, actor)?;
    let target_position = roster[target].position;
    roster[actor].advance_toward(target_position);

    let (attacker, defender) = pair_mut(roster, actor, target);
    Some((target, try_attack(attacker, defender, dice)))
}

/// Disjoint mutable references to two roster slots.
fn pair_mut(roster: &mut [Combatant], a: usize, b: usize) -> (&mut Combatant, &mut Combatant) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = roster.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = roster.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::combatant::CombatantClass;
    use crate::combat::dice::FixedDice;

    fn roster_of(lives: &[f64]) -> Vec<Combatant> {
        lives
            .iter()
            .enumerate()
            .map(|(i, life)| {
                let mut combatant =
                    Combatant::new(CombatantClass::Player, i as i32 * 5, format!("Боец {i}"));
                combatant.life = *life;
                combatant
            })
            .collect()
    }

    #[test]
    fn test_choose_target_prefers_lowest_life() {
        let roster = roster_of(&[100.0, 80.0, 50.0]);
        assert_eq!(choose_target(&roster, 0), Some(2));
    }

    #[test]
    fn test_choose_target_first_wins_ties() {
        let roster = roster_of(&[100.0, 50.0, 50.0]);
        assert_eq!(choose_target(&roster, 0), Some(1));
    }

    #[test]
    fn test_choose_target_skips_the_dead_and_self() {
        let roster = roster_of(&[100.0, 0.0, 50.0]);
        assert_eq!(choose_target(&roster, 0), Some(2));
        assert_eq!(choose_target(&roster, 2), Some(0));
    }

    #[test]
    fn test_choose_target_none_when_alone() {
        let roster = roster_of(&[100.0, 0.0]);
        assert_eq!(choose_target(&roster, 0), None);
    }

    #[test]
    fn test_take_turn_moves_then_attacks() {
        let mut roster = roster_of(&[100.0, 50.0]);
        roster[1].position = 10;
        let mut dice = FixedDice(0.0);

        let result = take_turn(&mut roster, 0, &mut dice);

        // Speed 1: one step toward the enemy, still out of bare-hands reach.
        assert_eq!(roster[0].position, 1);
        assert_eq!(result, Some((1, AttackOutcome::OutOfRange)));
    }

    #[test]
    fn test_take_turn_noop_without_enemies() {
        let mut roster = roster_of(&[100.0, 0.0]);
        let mut dice = FixedDice(0.0);
        assert_eq!(take_turn(&mut roster, 0, &mut dice), None);
        assert_eq!(roster[0].position, 0);
    }

    #[test]
    fn test_take_turn_reaches_and_hits() {
        let mut roster = roster_of(&[100.0, 50.0]);
        roster[1].position = 1;
        let mut dice = FixedDice(0.0);

        let Some((1, AttackOutcome::Delivered { .. })) = take_turn(&mut roster, 0, &mut dice)
        else {
            panic!("expected a delivered attack");
        };
        // Actor stepped onto the target's tile, so the target was pushed.
        assert_eq!(roster[0].position, 1);
        assert_eq!(roster[1].position, 2);
    }
}
