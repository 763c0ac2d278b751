//! Property tests for the numeric combat invariants

use proptest::prelude::*;

use steppe_arena::combat::{Combatant, CombatantClass, FixedDice, Weapon, WeaponKind};

const ALL_KINDS: [WeaponKind; 8] = [
    WeaponKind::BareHands,
    WeaponKind::Knife,
    WeaponKind::Bow,
    WeaponKind::LongBow,
    WeaponKind::Sword,
    WeaponKind::Axe,
    WeaponKind::Staff,
    WeaponKind::StormStaff,
];

const ALL_CLASSES: [CombatantClass; 7] = [
    CombatantClass::Player,
    CombatantClass::Warrior,
    CombatantClass::Archer,
    CombatantClass::Mage,
    CombatantClass::Demiurge,
    CombatantClass::Dwarf,
    CombatantClass::Crossbowman,
];

fn any_kind() -> impl Strategy<Value = WeaponKind> {
    prop::sample::select(ALL_KINDS.to_vec())
}

fn any_class() -> impl Strategy<Value = CombatantClass> {
    prop::sample::select(ALL_CLASSES.to_vec())
}

proptest! {
    #[test]
    fn durability_stays_in_bounds(
        kind in any_kind(),
        amounts in prop::collection::vec(0.0f64..1000.0, 0..50),
    ) {
        let mut weapon = Weapon::new(kind);
        for amount in amounts {
            weapon.wear(amount);
            prop_assert!(weapon.durability >= 0.0);
            prop_assert!(weapon.durability <= weapon.max_durability());
        }
    }

    #[test]
    fn unbreakable_weapons_never_degrade(amounts in prop::collection::vec(0.0f64..1e6, 1..20)) {
        let mut hands = Weapon::new(WeaponKind::BareHands);
        for amount in amounts {
            hands.wear(amount);
        }
        prop_assert_eq!(hands.durability, hands.max_durability());
        prop_assert!(!hands.is_broken());
        prop_assert_eq!(hands.degraded_power(), hands.base_attack());
    }

    #[test]
    fn degraded_power_is_zero_iff_broken(
        kind in any_kind(),
        wear in 0.0f64..2000.0,
    ) {
        let mut weapon = Weapon::new(kind);
        weapon.wear(wear);
        prop_assert_eq!(weapon.degraded_power() == 0.0, weapon.is_broken());
        if !weapon.is_broken() {
            let full = weapon.base_attack();
            let power = weapon.degraded_power();
            prop_assert!(power == full || power == full / 2.0);
        }
    }

    #[test]
    fn damage_is_zero_beyond_range(
        class in any_class(),
        roll in 0.0f64..100.0,
        extra in 1u32..100,
    ) {
        let combatant = Combatant::new(class, 0, "Тест");
        let mut dice = FixedDice(roll);
        let distance = combatant.weapon.range() + extra;
        prop_assert_eq!(combatant.attack_damage(distance, &mut dice), 0.0);
    }

    #[test]
    fn damage_in_range_is_never_negative(
        class in any_class(),
        roll in 0.0f64..100.0,
        distance in 0u32..5,
    ) {
        let combatant = Combatant::new(class, 0, "Тест");
        let mut dice = FixedDice(roll);
        prop_assert!(combatant.attack_damage(distance, &mut dice) >= 0.0);
    }

    #[test]
    fn life_and_magic_never_go_negative(
        class in any_class(),
        roll in 0.0f64..100.0,
        amounts in prop::collection::vec(0.0f64..500.0, 1..30),
    ) {
        let mut combatant = Combatant::new(class, 0, "Тест");
        let mut dice = FixedDice(roll);
        for amount in amounts {
            combatant.take_damage(amount, &mut dice);
            prop_assert!(combatant.life >= 0.0);
            prop_assert!(combatant.magic >= 0.0);
        }
    }

    #[test]
    fn replacement_only_restores_chain_successors(
        class in any_class(),
        wear in 0.0f64..5000.0,
    ) {
        let mut combatant = Combatant::new(class, 0, "Тест");
        let before = combatant.weapon.kind;
        combatant.weapon.wear(wear);
        combatant.refresh_weapon();

        let chain = combatant.class.progression_chain();
        if combatant.weapon.kind != before {
            // A swap must step exactly one chain entry forward, at full
            // durability.
            let from = chain.iter().position(|k| *k == before).unwrap();
            prop_assert_eq!(chain[from + 1], combatant.weapon.kind);
            prop_assert_eq!(combatant.weapon.durability, combatant.weapon.max_durability());
        }
    }
}
