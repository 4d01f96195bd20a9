//! Transcript rendering for the console.
//!
//! Turns a [`BattleReport`] into the human-readable trace on stdout. The
//! text is a log for people, not a machine-parsed format.

use std::fmt::Write;

use battle_core::ActionKind;
use battle_runtime::{ActionRecord, BattleReport, UnitSnapshot, Winner};

const SEPARATOR: &str = "----------------------------------------";

/// Renders the grouped unit status block.
pub fn render_status(units: &[UnitSnapshot]) -> String {
    let mut out = String::from("[Unit Status]\n");

    let mut previous_class = None;
    for unit in units {
        if previous_class.is_some_and(|class| class != unit.class) {
            out.push('\n');
        }
        let _ = writeln!(out, "{} ID: {}, HP: {}", unit.class, unit.id.0, unit.hp);
        previous_class = Some(unit.class);
    }

    out
}

/// Renders one executed action as a single line naming actor, target, and
/// magnitude.
pub fn render_action(action: &ActionRecord) -> String {
    match action.kind {
        ActionKind::Attack => format!(
            "{} {} attacked unit {} for {} damage.",
            action.actor_class, action.actor, action.target, action.magnitude
        ),
        ActionKind::Heal => format!(
            "{} {} healed unit {} for {} health.",
            action.actor_class, action.actor, action.target, action.magnitude
        ),
    }
}

fn render_winner(winner: Winner) -> &'static str {
    match winner {
        Winner::Warriors => "All orcs are dead. Warriors win!",
        Winner::Orcs => "All warriors are dead. Orcs win!",
    }
}

/// Prints the full battle transcript to stdout.
pub fn print_transcript(report: &BattleReport, show_rounds: bool) {
    for round in &report.rounds {
        if show_rounds {
            println!("{SEPARATOR}");
            print!("{}", render_status(&round.start_status));
            println!("{SEPARATOR}");
        }
        for action in &round.actions {
            println!("{}", render_action(action));
        }
    }

    println!("{}", render_winner(report.winner));

    println!("{SEPARATOR}");
    println!("After battle ...");
    print!("{}", render_status(&report.after_battle));

    println!("{SEPARATOR}");
    println!("After rollback ...");
    print!("{}", render_status(&report.after_rollback));
}

#[cfg(test)]
mod tests {
    use battle_core::{UnitClass, UnitId};

    use super::*;

    #[test]
    fn status_groups_classes_with_blank_lines() {
        let units = vec![
            UnitSnapshot {
                id: UnitId(0),
                class: UnitClass::Warrior,
                hp: 100,
            },
            UnitSnapshot {
                id: UnitId(1),
                class: UnitClass::Warrior,
                hp: -15,
            },
            UnitSnapshot {
                id: UnitId(2),
                class: UnitClass::Cleric,
                hp: 80,
            },
        ];

        let rendered = render_status(&units);
        assert_eq!(
            rendered,
            "[Unit Status]\nWarrior ID: 0, HP: 100\nWarrior ID: 1, HP: -15\n\nCleric ID: 2, HP: 80\n"
        );
    }

    #[test]
    fn action_lines_name_actor_target_and_magnitude() {
        let attack = ActionRecord {
            kind: ActionKind::Attack,
            actor: UnitId(0),
            actor_class: UnitClass::Warrior,
            target: UnitId(3),
            magnitude: 20,
        };
        assert_eq!(
            render_action(&attack),
            "Warrior #0 attacked unit #3 for 20 damage."
        );

        let heal = ActionRecord {
            kind: ActionKind::Heal,
            actor: UnitId(2),
            actor_class: UnitClass::Cleric,
            target: UnitId(0),
            magnitude: 10,
        };
        assert_eq!(
            render_action(&heal),
            "Cleric #2 healed unit #0 for 10 health."
        );
    }
}
