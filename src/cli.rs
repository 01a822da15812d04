use std::path::PathBuf;

use clap::Parser;

use crate::constants::{DEFAULT_CALLSIGN, DEFAULT_TAIL, GEN_TIME_INTERVAL};

#[derive(Parser, Debug)]
#[command(
    name = "random-instructions",
    about = "Random heading/altitude/airspeed instructions for instrument flying practice"
)]
pub struct Args {
    /// Callsign spoken before every instruction
    #[arg(long = "callsign", default_value = DEFAULT_CALLSIGN)]
    pub callsign: String,

    /// Shortest wait between instructions, seconds
    #[arg(long = "interval-min", default_value_t = GEN_TIME_INTERVAL.0)]
    pub interval_min: u32,

    /// Longest wait between instructions, seconds (exclusive)
    #[arg(long = "interval-max", default_value_t = GEN_TIME_INTERVAL.1)]
    pub interval_max: u32,

    /// Seed for reproducible sessions
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Simulated seconds to fly before stopping
    #[arg(short = 'd', long = "duration", default_value_t = 600.0)]
    pub duration: f64,

    /// Pace ticks in wall-clock time instead of running as fast as possible
    #[arg(short = 'r', long = "realtime")]
    pub realtime: bool,

    /// Disable espeak-ng speech, only log instructions
    #[arg(long = "no-tts")]
    pub no_tts: bool,

    /// Write a CSV flight log to this path
    #[arg(long = "flight-log")]
    pub flight_log: Option<PathBuf>,

    /// Tail number recorded in the flight log header
    #[arg(long = "tail", default_value = DEFAULT_TAIL)]
    pub tail: String,

    /// Initial indicated airspeed, knots
    #[arg(long = "ias", default_value_t = 120.0)]
    pub ias: f64,

    /// Initial altitude, feet
    #[arg(long = "altitude-ft", default_value_t = 8000.0)]
    pub altitude_ft: f64,

    /// Initial magnetic heading, degrees
    #[arg(long = "heading", default_value_t = 280.0)]
    pub heading: f64,
}
