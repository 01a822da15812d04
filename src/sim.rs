//! Headless stand-in for the simulator: one aircraft that flies toward the
//! most recent clearances at standard rates.

use crate::constants::ALT_M_TO_FT;
use crate::instructions::types::{FlightState, Instruction, Turn};

/// Fixed integration step (seconds).
pub const SIM_DT: f64 = 0.1;
/// Standard rate turn, degrees per second.
const TURN_RATE: f64 = 3.0;
/// Vertical speed toward a target altitude, feet per second (500 fpm).
const VERTICAL_RATE_FPS: f64 = 500.0 / 60.0;
/// Speed change rate, knots per second.
const SPEED_RATE: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
struct HeadingTarget {
    heading: f64,
    turn: Turn,
}

// --- SimulatedAircraft: fixed-timestep accumulator ---

pub struct SimulatedAircraft {
    elapsed: f64,
    airspeed_kts: f64,
    /// Stored in meters like the real simulator reports it.
    altitude_m: f64,
    heading_deg: f64,
    target_airspeed: Option<f64>,
    target_altitude_ft: Option<f64>,
    target_heading: Option<HeadingTarget>,
    accumulator: f64,
}

impl SimulatedAircraft {
    pub fn new(airspeed_kts: f64, altitude_ft: f64, heading_deg: f64) -> Self {
        Self {
            elapsed: 0.0,
            airspeed_kts,
            altitude_m: altitude_ft / ALT_M_TO_FT,
            heading_deg: heading_deg.rem_euclid(360.0),
            target_airspeed: None,
            target_altitude_ft: None,
            target_heading: None,
            accumulator: 0.0,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn airspeed(&self) -> f64 {
        self.airspeed_kts
    }

    pub fn altitude_meters(&self) -> f64 {
        self.altitude_m
    }

    pub fn heading(&self) -> f64 {
        self.heading_deg
    }

    pub fn flight_state(&self) -> FlightState {
        FlightState {
            airspeed: self.airspeed_kts,
            altitude: self.altitude_m * ALT_M_TO_FT,
            heading: self.heading_deg,
        }
    }

    /// Take up the targets carried by an instruction. "Present heading"
    /// cancels any turn in progress.
    pub fn apply(&mut self, instruction: &Instruction) {
        if let Some(knots) = instruction.airspeed_target() {
            self.target_airspeed = Some(f64::from(knots));
        }
        if let Some(feet) = instruction.altitude_target() {
            self.target_altitude_ft = Some(f64::from(feet));
        }
        if let Some((heading, turn)) = instruction.heading_target() {
            self.target_heading = match turn {
                Turn::Present => None,
                _ => Some(HeadingTarget {
                    heading: f64::from(heading).rem_euclid(360.0),
                    turn,
                }),
            };
        }
    }

    /// Advance wall-clock `dt`, stepping the model at `SIM_DT`.
    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
        self.accumulator += dt;
        while self.accumulator >= SIM_DT {
            self.step(SIM_DT);
            self.accumulator -= SIM_DT;
        }
    }

    fn step(&mut self, dt: f64) {
        if let Some(target) = self.target_airspeed {
            self.airspeed_kts = approach(self.airspeed_kts, target, SPEED_RATE * dt);
            if self.airspeed_kts == target {
                self.target_airspeed = None;
            }
        }

        if let Some(target) = self.target_altitude_ft {
            let feet = approach(self.altitude_m * ALT_M_TO_FT, target, VERTICAL_RATE_FPS * dt);
            self.altitude_m = feet / ALT_M_TO_FT;
            if feet == target {
                self.target_altitude_ft = None;
            }
        }

        if let Some(target) = self.target_heading {
            let remaining = match target.turn {
                Turn::Right => (target.heading - self.heading_deg).rem_euclid(360.0),
                _ => (self.heading_deg - target.heading).rem_euclid(360.0),
            };
            let max_turn = TURN_RATE * dt;
            if remaining <= max_turn {
                self.heading_deg = target.heading;
                self.target_heading = None;
            } else {
                let signed = if target.turn == Turn::Right { max_turn } else { -max_turn };
                self.heading_deg = (self.heading_deg + signed).rem_euclid(360.0);
            }
        }
    }
}

/// Move `current` toward `target` by at most `max_step`.
fn approach(current: f64, target: f64, max_step: f64) -> f64 {
    let diff = target - current;
    if diff.abs() <= max_step {
        target
    } else {
        current + max_step * diff.signum()
    }
}
