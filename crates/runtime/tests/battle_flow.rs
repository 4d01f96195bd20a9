use std::io::Write;

use battle_core::UnitClass;
use battle_runtime::{RuntimeError, Scenario, Simulator, UnitSpec, Winner};

fn orc_hp(status: &[battle_runtime::UnitSnapshot]) -> i32 {
    status
        .iter()
        .find(|unit| unit.class == UnitClass::Orc)
        .expect("scenario has an orc")
        .hp
}

#[test]
fn canonical_skirmish_plays_out_and_rolls_back() {
    let scenario = Scenario::skirmish();
    let mut simulator = Simulator::new(&scenario).unwrap();

    let report = simulator.run().unwrap();

    // Two warriors at 20 damage each bring the orc from 200 to 160 in the
    // first round; the orc is felled in round five.
    assert_eq!(report.rounds.len(), 5);
    assert_eq!(orc_hp(&report.rounds[1].start_status), 160);
    assert_eq!(report.winner, Winner::Warriors);

    // The focused warrior nets -20 hp per round (two rounds of grace from
    // the heal) and ends the battle at exactly zero.
    let after = &report.after_battle;
    assert_eq!(after[0].hp, 0);
    assert_eq!(after[1].hp, 100);
    assert_eq!(orc_hp(after), 0);

    // Rollback restores the exact pre-battle state.
    assert!(report.restored);
    assert_eq!(report.pre_digest, report.post_digest);
    assert_eq!(report.after_rollback, report.rounds[0].start_status);
}

#[test]
fn damage_drives_hp_negative_and_counts_as_dead() {
    let scenario = Scenario {
        warriors: vec![UnitSpec::new(5, 20)],
        clerics: vec![],
        orcs: vec![UnitSpec::new(200, 30)],
    };
    let mut simulator = Simulator::new(&scenario).unwrap();

    let report = simulator.run().unwrap();

    assert_eq!(report.winner, Winner::Orcs);
    assert_eq!(report.rounds.len(), 1);
    // 5 hp minus 30 damage, no clamp at zero.
    assert_eq!(report.after_battle[0].hp, -25);
    assert!(report.restored);
}

#[test]
fn empty_orc_pool_resolves_before_any_round() {
    let scenario = Scenario {
        warriors: vec![UnitSpec::new(100, 20)],
        clerics: vec![],
        orcs: vec![],
    };
    let mut simulator = Simulator::new(&scenario).unwrap();

    let report = simulator.run().unwrap();

    assert!(report.rounds.is_empty());
    assert_eq!(report.winner, Winner::Warriors);
    assert!(report.restored);
}

#[test]
fn larger_battle_still_restores_exactly() {
    let scenario = Scenario {
        warriors: vec![
            UnitSpec::new(90, 15),
            UnitSpec::new(120, 25),
            UnitSpec::new(60, 10),
        ],
        clerics: vec![UnitSpec::new(70, 8), UnitSpec::new(50, 12)],
        orcs: vec![UnitSpec::new(250, 35), UnitSpec::new(180, 22)],
    };
    let mut simulator = Simulator::new(&scenario).unwrap();
    let initial = simulator.roster().clone();

    let report = simulator.run().unwrap();

    assert!(report.restored);
    assert_eq!(simulator.roster(), &initial);
    assert!(!report.rounds.is_empty());
}

#[test]
fn simulator_rejects_invalid_scenarios() {
    let scenario = Scenario {
        warriors: vec![UnitSpec::new(100, 0)],
        clerics: vec![],
        orcs: vec![UnitSpec::new(200, 30)],
    };

    assert!(matches!(
        Simulator::new(&scenario),
        Err(RuntimeError::NonPositivePower { power: 0, .. })
    ));
}

#[test]
fn scenario_round_trips_through_json_file() {
    let scenario = Scenario::skirmish();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&scenario).unwrap().as_bytes())
        .unwrap();

    let loaded = Scenario::from_path(file.path()).unwrap();
    assert_eq!(loaded, scenario);
}
