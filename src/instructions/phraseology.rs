//! Phrase templates for generated instructions.

use super::types::{AltitudeVerb, Turn};

// --- Airspeed ---

/// "maintain 130 knots"
pub fn maintain_speed(knots: i32) -> String {
    format!("maintain {} knots", knots)
}

// --- Altitude ---

/// Compare the new target against the unrounded current altitude.
pub fn altitude_verb(target: i32, current: f64) -> AltitudeVerb {
    let target = f64::from(target);
    if target > current {
        AltitudeVerb::Climb
    } else if target < current {
        AltitudeVerb::Descend
    } else {
        AltitudeVerb::Maintain
    }
}

/// "descend and maintain 7500"
pub fn altitude_change(verb: AltitudeVerb, feet: i32) -> String {
    let verb = match verb {
        AltitudeVerb::Climb => "climb and maintain",
        AltitudeVerb::Descend => "descend and maintain",
        AltitudeVerb::Maintain => "maintain",
    };
    format!("{} {}", verb, feet)
}

// --- Heading ---

/// Left for any negative delta. Right only when the delta is larger than the
/// current heading itself; every other positive delta reads as "present".
pub fn heading_turn(delta: i32, current: f64) -> Turn {
    if delta < 0 {
        Turn::Left
    } else if f64::from(delta) > current {
        Turn::Right
    } else {
        Turn::Present
    }
}

/// "turn left heading 240"
pub fn heading_change(turn: Turn, heading: i32) -> String {
    match turn {
        Turn::Left => format!("turn left heading {}", heading),
        Turn::Right => format!("turn right heading {}", heading),
        Turn::Present => "maintain present heading".to_string(),
    }
}

// --- Utterance ---

/// "N56433, maintain 130 knots, turn left heading 240"
/// With no phrases the callsign is still spoken: "N56433, ".
pub fn utterance(callsign: &str, phrases: &[String]) -> String {
    format!("{}, {}", callsign, phrases.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn altitude_verbs() {
        assert_eq!(altitude_verb(7500, 8000.0), AltitudeVerb::Descend);
        assert_eq!(altitude_verb(8500, 8000.0), AltitudeVerb::Climb);
        assert_eq!(altitude_verb(8000, 8000.0), AltitudeVerb::Maintain);
        // Compared against the raw altitude, not the rounded one.
        assert_eq!(altitude_verb(8000, 8000.4), AltitudeVerb::Descend);
    }

    #[test]
    fn altitude_phrases() {
        assert_eq!(
            altitude_change(AltitudeVerb::Descend, 7500),
            "descend and maintain 7500"
        );
        assert_eq!(altitude_change(AltitudeVerb::Climb, 9000), "climb and maintain 9000");
        assert_eq!(altitude_change(AltitudeVerb::Maintain, 8000), "maintain 8000");
    }

    #[test]
    fn heading_turn_tie_break() {
        assert_eq!(heading_turn(-10, 90.0), Turn::Left);
        assert_eq!(heading_turn(100, 90.0), Turn::Right);
        assert_eq!(heading_turn(20, 350.0), Turn::Present);
        assert_eq!(heading_turn(0, 0.0), Turn::Present);
        assert_eq!(heading_turn(90, 90.0), Turn::Present);
    }

    #[test]
    fn heading_phrases() {
        assert_eq!(heading_change(Turn::Left, 240), "turn left heading 240");
        assert_eq!(heading_change(Turn::Right, 30), "turn right heading 30");
        assert_eq!(heading_change(Turn::Present, 10), "maintain present heading");
    }

    #[test]
    fn utterance_joins_with_callsign() {
        let phrases = vec![maintain_speed(130), "maintain present heading".to_string()];
        assert_eq!(
            utterance("N56433", &phrases),
            "N56433, maintain 130 knots, maintain present heading"
        );
        assert_eq!(utterance("N56433", &[]), "N56433, ");
    }
}
