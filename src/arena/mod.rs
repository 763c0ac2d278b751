pub mod execution;
pub mod turn;

pub use execution::{
    battle_outcome, run_battle, run_battle_observed, survivors, BattleEvent, BattleEventKind,
    BattleEventLog, BattleOutcome, BattleReport,
};
pub use turn::{choose_target, take_turn};
