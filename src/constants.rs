// Unit conversions
/// Meters to feet. Fixed approximation, not 3.28084; spoken altitudes depend on it.
pub const ALT_M_TO_FT: f64 = 3.2;

// Scheduling
/// Seconds between flight-loop callbacks.
pub const CHECK_INTERVAL_SECS: f64 = 1.0;
/// Half-open range, in whole seconds, between instructions.
pub const GEN_TIME_INTERVAL: (u32, u32) = (20, 70);

/// Tail number spoken at the start of every instruction.
pub const DEFAULT_CALLSIGN: &str = "N56433";
/// Tail number written to flight log metadata.
pub const DEFAULT_TAIL: &str = "X56433";
