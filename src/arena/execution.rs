//! Battle round loop
//!
//! Each round: filter to the living subset, stop at one survivor or the
//! round cap, otherwise every living combatant acts once in roster order.
//! Turns are strictly sequential; later actors in a round see earlier
//! actors' movement, damage, and deaths.

use serde::{Deserialize, Serialize};

use crate::arena::turn::take_turn;
use crate::combat::combatant::Combatant;
use crate::combat::dice::Dice;
use crate::combat::resolution::{AttackOutcome, DefenseOutcome};
use crate::core::types::{CombatantId, Round};

/// How a battle ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Victory { winner: String },
    Draw { survivors: Vec<String> },
    Wipeout,
}

/// Log entry for battle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEvent {
    pub round: Round,
    pub kind: BattleEventKind,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BattleEventKind {
    AttackLanded {
        attacker: CombatantId,
        defender: CombatantId,
        damage: f64,
    },
    AttackBlocked {
        attacker: CombatantId,
        defender: CombatantId,
    },
    AttackDodged {
        attacker: CombatantId,
        defender: CombatantId,
    },
    AttackOutOfRange {
        attacker: CombatantId,
        defender: CombatantId,
    },
    CombatantDied {
        combatant: CombatantId,
    },
    BattleEnded {
        outcome: BattleOutcome,
    },
}

/// Ordered log of everything that happened in a battle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleEventLog {
    pub events: Vec<BattleEvent>,
}

impl BattleEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: BattleEventKind, description: String, round: Round) {
        self.events.push(BattleEvent {
            round,
            kind,
            description,
        });
    }
}

/// Result of a finished battle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub rounds: Round,
    pub log: BattleEventLog,
}

/// The living subset of the roster, in roster order.
pub fn survivors(roster: &[Combatant]) -> Vec<&Combatant> {
    roster.iter().filter(|c| !c.is_dead()).collect()
}

/// Outcome as read from the roster's current state.
pub fn battle_outcome(roster: &[Combatant]) -> BattleOutcome {
    let living = survivors(roster);
    match living.as_slice() {
        [] => BattleOutcome::Wipeout,
        [winner] => BattleOutcome::Victory {
            winner: winner.name.clone(),
        },
        _ => BattleOutcome::Draw {
            survivors: living.iter().map(|c| c.name.clone()).collect(),
        },
    }
}

/// Run a battle to completion, bounded by `max_rounds`.
pub fn run_battle(
    roster: &mut [Combatant],
    max_rounds: Round,
    dice: &mut impl Dice,
) -> BattleReport {
    run_battle_observed(roster, max_rounds, dice, |_, _| {})
}

/// As [`run_battle`], invoking `observer` with the roster after every
/// completed round. The console driver uses this to render status lines.
pub fn run_battle_observed(
    roster: &mut [Combatant],
    max_rounds: Round,
    dice: &mut impl Dice,
    mut observer: impl FnMut(Round, &[Combatant]),
) -> BattleReport {
    let mut log = BattleEventLog::new();
    let mut rounds = 0;

    for round in 1..=max_rounds {
        if survivors(roster).len() <= 1 {
            break;
        }
        play_round(roster, round, dice, &mut log);
        rounds = round;
        observer(round, roster);
    }

    let outcome = battle_outcome(roster);
    tracing::info!(?outcome, rounds, "battle ended");
    log.push(
        BattleEventKind::BattleEnded {
            outcome: outcome.clone(),
        },
        format!("battle ended after {rounds} rounds"),
        rounds,
    );

    BattleReport {
        outcome,
        rounds,
        log,
    }
}

fn play_round(
    roster: &mut [Combatant],
    round: Round,
    dice: &mut impl Dice,
    log: &mut BattleEventLog,
) {
    tracing::debug!(round, "round begins");
    for actor in 0..roster.len() {
        // A combatant killed earlier in this round loses its turn.
        if roster[actor].is_dead() {
            continue;
        }
        let Some((target, outcome)) = take_turn(roster, actor, dice) else {
            continue;
        };
        record_attack(roster, actor, target, round, &outcome, log);
    }
}

fn record_attack(
    roster: &[Combatant],
    actor: usize,
    target: usize,
    round: Round,
    outcome: &AttackOutcome,
    log: &mut BattleEventLog,
) {
    let attacker = &roster[actor];
    let defender = &roster[target];
    match outcome {
        AttackOutcome::OutOfRange => {
            tracing::debug!(attacker = %attacker.name, defender = %defender.name, "out of range");
            log.push(
                BattleEventKind::AttackOutOfRange {
                    attacker: attacker.id,
                    defender: defender.id,
                },
                format!("{} cannot reach {}", attacker.name, defender.name),
                round,
            );
        }
        AttackOutcome::Delivered { first, point_blank } => {
            record_delivery(attacker, defender, first, round, log);
            if let Some(second) = point_blank {
                record_delivery(attacker, defender, second, round, log);
            }
            if defender.is_dead() {
                tracing::info!(combatant = %defender.name, "combatant died");
                log.push(
                    BattleEventKind::CombatantDied {
                        combatant: defender.id,
                    },
                    format!("{} has fallen", defender.name),
                    round,
                );
            }
        }
    }
}

fn record_delivery(
    attacker: &Combatant,
    defender: &Combatant,
    delivery: &DefenseOutcome,
    round: Round,
    log: &mut BattleEventLog,
) {
    match delivery {
        DefenseOutcome::Blocked => {
            tracing::debug!(attacker = %attacker.name, defender = %defender.name, "blocked");
            log.push(
                BattleEventKind::AttackBlocked {
                    attacker: attacker.id,
                    defender: defender.id,
                },
                format!("{} blocked {}'s attack", defender.name, attacker.name),
                round,
            );
        }
        DefenseOutcome::Dodged => {
            tracing::debug!(attacker = %attacker.name, defender = %defender.name, "dodged");
            log.push(
                BattleEventKind::AttackDodged {
                    attacker: attacker.id,
                    defender: defender.id,
                },
                format!("{} dodged {}'s attack", defender.name, attacker.name),
                round,
            );
        }
        DefenseOutcome::Hit { damage } => {
            tracing::debug!(
                attacker = %attacker.name,
                defender = %defender.name,
                damage,
                "hit"
            );
            log.push(
                BattleEventKind::AttackLanded {
                    attacker: attacker.id,
                    defender: defender.id,
                    damage: *damage,
                },
                format!(
                    "{} hit {} for {damage:.1}",
                    attacker.name, defender.name
                ),
                round,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::combatant::CombatantClass;
    use crate::combat::dice::FixedDice;

    fn named(class: CombatantClass, position: i32, name: &str) -> Combatant {
        Combatant::new(class, position, name)
    }

    #[test]
    fn test_outcome_sole_survivor() {
        let mut roster = vec![
            named(CombatantClass::Warrior, 0, "Воин"),
            named(CombatantClass::Player, 5, "Тест"),
        ];
        roster[1].life = 0.0;
        assert_eq!(
            battle_outcome(&roster),
            BattleOutcome::Victory {
                winner: "Воин".to_string()
            }
        );
    }

    #[test]
    fn test_outcome_wipeout() {
        let mut roster = vec![
            named(CombatantClass::Warrior, 0, "Воин"),
            named(CombatantClass::Player, 5, "Тест"),
        ];
        roster[0].life = 0.0;
        roster[1].life = 0.0;
        assert_eq!(battle_outcome(&roster), BattleOutcome::Wipeout);
    }

    #[test]
    fn test_outcome_draw_lists_all_survivors() {
        let roster = vec![
            named(CombatantClass::Warrior, 0, "Воин"),
            named(CombatantClass::Player, 5, "Тест"),
            named(CombatantClass::Mage, 10, "Маг"),
        ];
        assert_eq!(
            battle_outcome(&roster),
            BattleOutcome::Draw {
                survivors: vec!["Воин".to_string(), "Тест".to_string(), "Маг".to_string()]
            }
        );
    }

    #[test]
    fn test_battle_stops_at_one_survivor() {
        let mut roster = vec![
            named(CombatantClass::Warrior, 0, "Воин"),
            named(CombatantClass::Player, 1, "Тест"),
        ];
        roster[1].life = 1.0;
        // Raw roll 0 keeps every block/dodge off; the warrior kills in one
        // exchange.
        let mut dice = FixedDice(0.0);

        let report = run_battle(&mut roster, 100, &mut dice);

        assert_eq!(
            report.outcome,
            BattleOutcome::Victory {
                winner: "Воин".to_string()
            }
        );
        assert!(report.rounds <= 100);
        assert!(report
            .log
            .events
            .iter()
            .any(|e| matches!(e.kind, BattleEventKind::CombatantDied { .. })));
        assert!(matches!(
            report.log.events.last().map(|e| &e.kind),
            Some(BattleEventKind::BattleEnded { .. })
        ));
    }

    #[test]
    fn test_round_cap_produces_a_draw() {
        // Two combatants too far apart to ever connect in zero rounds.
        let mut roster = vec![
            named(CombatantClass::Mage, 0, "Маг"),
            named(CombatantClass::Demiurge, 1000, "Демиург"),
        ];
        let mut dice = FixedDice(0.0);

        let report = run_battle(&mut roster, 3, &mut dice);

        assert_eq!(report.rounds, 3);
        assert!(matches!(report.outcome, BattleOutcome::Draw { .. }));
    }

    #[test]
    fn test_observer_sees_every_round() {
        let mut roster = vec![
            named(CombatantClass::Mage, 0, "Маг"),
            named(CombatantClass::Demiurge, 1000, "Демиург"),
        ];
        let mut dice = FixedDice(0.0);
        let mut seen = Vec::new();

        run_battle_observed(&mut roster, 4, &mut dice, |round, roster| {
            seen.push((round, roster.len()));
        });

        assert_eq!(seen, vec![(1, 2), (2, 2), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_dead_roster_ends_immediately() {
        let mut roster = vec![
            named(CombatantClass::Warrior, 0, "Воин"),
            named(CombatantClass::Player, 5, "Тест"),
        ];
        roster[0].life = 0.0;
        roster[1].life = 0.0;
        let mut dice = FixedDice(0.0);

        let report = run_battle(&mut roster, 100, &mut dice);

        assert_eq!(report.rounds, 0);
        assert_eq!(report.outcome, BattleOutcome::Wipeout);
    }
}
