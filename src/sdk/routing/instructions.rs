//! Turns provider maneuvers into the lines of the directions panel.

use super::route::{Maneuver, RawRoute, Step};
use crate::sdk::util::units::{format_km, meters_to_km};
use serde::Serialize;

/// Text used for a step that carries no maneuver at all.
pub const NO_MANEUVER_TEXT: &str = "Go straight";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instruction {
    /// Zero-based position of the step within its leg. A display key only.
    pub id: usize,
    pub text: String,
    pub distance_km: f64,
}

impl Instruction {
    pub fn distance_label(&self) -> String {
        format_km(self.distance_km)
    }
}

/// Derives one instruction per step of the route's first leg. Later legs are
/// ignored; a two-point route only ever has one.
pub fn derive_instructions(route: &RawRoute) -> Vec<Instruction> {
    let Some(leg) = route.legs.first() else {
        return Vec::new();
    };

    leg.steps
        .iter()
        .enumerate()
        .map(|(id, step)| Instruction {
            id,
            text: step_text(step),
            distance_km: meters_to_km(step.distance_m),
        })
        .collect()
}

pub fn step_text(step: &Step) -> String {
    step.maneuver
        .as_ref()
        .map(maneuver_text)
        .unwrap_or_else(|| NO_MANEUVER_TEXT.to_string())
}

/// First matching rule wins. An absent modifier or exit renders as nothing,
/// and the result never keeps a dangling blank.
pub fn maneuver_text(maneuver: &Maneuver) -> String {
    let modifier = maneuver.modifier.as_deref().unwrap_or("");

    let text = match maneuver.kind.as_str() {
        "depart" => return "Start".to_string(),
        "arrive" => return "You have arrived".to_string(),
        "turn" => format!("Turn {}", modifier),
        "new name" => format!("Continue {}", modifier),
        "roundabout" => {
            // Exit 0 counts as absent
            let exit = maneuver
                .exit
                .filter(|&e| e != 0)
                .map(|e| e.to_string())
                .unwrap_or_default();
            format!("Take roundabout exit {}", exit)
        }
        other => format!("{} {}", other, modifier),
    };
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::routing::route::Leg;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn text(m: Maneuver) -> String {
        maneuver_text(&m)
    }

    fn route_with_legs(legs: Vec<Vec<Step>>) -> RawRoute {
        RawRoute {
            geometry: vec![],
            distance_m: 0.0,
            duration_s: 0.0,
            legs: legs
                .into_iter()
                .map(|steps| Leg {
                    distance_m: 0.0,
                    summary: String::new(),
                    steps,
                })
                .collect(),
        }
    }

    #[test]
    fn test_depart_ignores_modifier() {
        assert_eq!(text(Maneuver::new("depart")), "Start");
        assert_eq!(text(Maneuver::new("depart").with_modifier("right")), "Start");
    }

    #[test]
    fn test_arrive() {
        assert_eq!(text(Maneuver::new("arrive").with_modifier("left")), "You have arrived");
    }

    #[test]
    fn test_turn_and_new_name_use_modifier() {
        assert_eq!(text(Maneuver::new("turn").with_modifier("left")), "Turn left");
        assert_eq!(
            text(Maneuver::new("new name").with_modifier("straight")),
            "Continue straight"
        );
        assert_eq!(text(Maneuver::new("turn")), "Turn");
    }

    #[test]
    fn test_roundabout_exit() {
        assert_eq!(
            text(Maneuver::new("roundabout").with_exit(3)),
            "Take roundabout exit 3"
        );
        // No synthesized default exit, and no trailing space
        assert_eq!(text(Maneuver::new("roundabout")), "Take roundabout exit");
    }

    #[test]
    fn test_roundabout_exit_zero_renders_empty() {
        assert_eq!(
            text(Maneuver::new("roundabout").with_exit(0)),
            "Take roundabout exit"
        );
    }

    #[test]
    fn test_unknown_type_falls_back_to_type_and_modifier() {
        assert_eq!(
            text(Maneuver::new("merge").with_modifier("slight right")),
            "merge slight right"
        );
        assert_eq!(text(Maneuver::new("fork")), "fork");
        assert_eq!(text(Maneuver::new("")), "");
    }

    #[test]
    fn test_missing_maneuver_goes_straight() {
        assert_eq!(step_text(&Step::new(None, 10.0)), "Go straight");
    }

    #[test]
    fn test_ids_and_distances_follow_first_leg() {
        let route = route_with_legs(vec![
            vec![
                Step::new(Some(Maneuver::new("depart")), 1234.5),
                Step::new(Some(Maneuver::new("turn").with_modifier("left")), 50.0),
                Step::new(Some(Maneuver::new("arrive")), 0.0),
            ],
            vec![Step::new(Some(Maneuver::new("depart")), 999.0)],
        ]);

        let instructions = derive_instructions(&route);
        assert_eq!(instructions.len(), 3);
        assert_eq!(
            instructions.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(instructions[1].text, "Turn left");
        assert_relative_eq!(instructions[0].distance_km, 1.2345);
        assert_eq!(instructions[0].distance_label(), "1.23");
        assert_eq!(instructions[1].distance_label(), "0.05");
        assert_eq!(instructions[2].distance_label(), "0.00");
    }

    #[test]
    fn test_route_without_legs_has_no_instructions() {
        assert!(derive_instructions(&route_with_legs(vec![])).is_empty());
    }
}
