//! Random instruction generation.
//!
//! Each cycle looks at the aircraft's airspeed, altitude and heading, rolls
//! independently for each whether to change it, and turns the chosen targets
//! into one ATC-style utterance addressed to the aircraft's callsign.

pub mod phraseology;
pub mod rules;
pub mod types;

use rand::Rng;

use crate::error::ConfigError;

use phraseology::{altitude_verb, heading_turn};
use rules::ParameterRule;
use types::*;

pub struct InstructionGenerator {
    callsign: String,
    airspeed: ParameterRule,
    altitude: ParameterRule,
    heading: ParameterRule,
}

impl InstructionGenerator {
    pub fn new(
        callsign: impl Into<String>,
        airspeed: ParameterRule,
        altitude: ParameterRule,
        heading: ParameterRule,
    ) -> Result<Self, ConfigError> {
        let callsign = callsign.into();
        if callsign.trim().is_empty() {
            return Err(ConfigError::BlankCallsign);
        }
        airspeed.validate("airspeed")?;
        altitude.validate("altitude")?;
        heading.validate("heading")?;

        Ok(InstructionGenerator {
            callsign,
            airspeed,
            altitude,
            heading,
        })
    }

    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    /// Run one instruction cycle. Draw order is airspeed gate/delta, altitude
    /// gate/delta, heading gate/delta, so a seeded rng replays exactly.
    pub fn generate<R: Rng + ?Sized>(&self, state: &FlightState, rng: &mut R) -> Instruction {
        let mut clearances = Vec::with_capacity(3);

        if self.airspeed.wants_change(rng) {
            let delta = self.airspeed.draw_delta(rng);
            clearances.push(airspeed_clearance(&self.airspeed, state.airspeed, delta));
        }

        if self.altitude.wants_change(rng) {
            let delta = self.altitude.draw_delta(rng);
            clearances.push(altitude_clearance(&self.altitude, state.altitude, delta));
        }

        if self.heading.wants_change(rng) {
            let delta = self.heading.draw_delta(rng);
            clearances.push(heading_clearance(&self.heading, state.heading, delta));
        }

        Instruction {
            callsign: self.callsign.clone(),
            clearances,
        }
    }
}

pub fn airspeed_clearance(rule: &ParameterRule, current: f64, delta: i32) -> Clearance {
    Clearance::Airspeed {
        knots: rule.target(current + f64::from(delta)),
    }
}

pub fn altitude_clearance(rule: &ParameterRule, current: f64, delta: i32) -> Clearance {
    let feet = rule.target(current + f64::from(delta));
    Clearance::Altitude {
        feet,
        verb: altitude_verb(feet, current),
    }
}

pub fn heading_clearance(rule: &ParameterRule, current: f64, delta: i32) -> Clearance {
    Clearance::Heading {
        heading: rule.target(wrap_heading(current + f64::from(delta))),
        turn: heading_turn(delta, current),
    }
}

/// Wrap into [0, 360).
pub fn wrap_heading(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}
