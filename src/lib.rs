//! Random heading, altitude and airspeed instructions for attitude
//! instrument flying practice.

pub mod cli;
pub mod constants;
pub mod error;
pub mod flight_log;
pub mod instructions;
pub mod scheduler;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tts;
