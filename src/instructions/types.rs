//! Shared types for instruction generation.

use std::fmt;

use super::phraseology;

/// Aircraft state sampled once per generation event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightState {
    pub airspeed: f64, // knots
    pub altitude: f64, // feet
    pub heading: f64,  // degrees, 0-360
}

/// Altitude clearance verb, picked by comparing target with current altitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AltitudeVerb {
    Climb,
    Descend,
    Maintain,
}

/// Turn direction attached to a heading clearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    /// Spoken as "maintain present heading"; the target is not read out.
    Present,
}

/// One phrase of an instruction, with the target it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clearance {
    Airspeed { knots: i32 },
    Altitude { feet: i32, verb: AltitudeVerb },
    Heading { heading: i32, turn: Turn },
}

impl Clearance {
    pub fn phrase(&self) -> String {
        match *self {
            Clearance::Airspeed { knots } => phraseology::maintain_speed(knots),
            Clearance::Altitude { feet, verb } => phraseology::altitude_change(verb, feet),
            Clearance::Heading { heading, turn } => phraseology::heading_change(turn, heading),
        }
    }
}

/// Everything said in one instruction cycle. May hold zero clearances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub callsign: String,
    pub clearances: Vec<Clearance>, // airspeed, altitude, heading order
}

impl Instruction {
    pub fn is_empty(&self) -> bool {
        self.clearances.is_empty()
    }

    pub fn airspeed_target(&self) -> Option<i32> {
        self.clearances.iter().find_map(|c| match *c {
            Clearance::Airspeed { knots } => Some(knots),
            _ => None,
        })
    }

    pub fn altitude_target(&self) -> Option<i32> {
        self.clearances.iter().find_map(|c| match *c {
            Clearance::Altitude { feet, .. } => Some(feet),
            _ => None,
        })
    }

    pub fn heading_target(&self) -> Option<(i32, Turn)> {
        self.clearances.iter().find_map(|c| match *c {
            Clearance::Heading { heading, turn } => Some((heading, turn)),
            _ => None,
        })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phrases: Vec<String> = self.clearances.iter().map(Clearance::phrase).collect();
        f.write_str(&phraseology::utterance(&self.callsign, &phrases))
    }
}
