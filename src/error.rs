use thiserror::Error;

/// Rejected settings, reported once at startup.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{parameter}: change probability {value} is outside [0, 1]")]
    ProbabilityOutOfRange { parameter: &'static str, value: f64 },

    #[error("{parameter}: quantization step must be positive, got {step}")]
    NonPositiveStep { parameter: &'static str, step: i32 },

    #[error("{parameter}: delta range [{lower}, {upper}) is empty")]
    EmptyDeltaRange {
        parameter: &'static str,
        lower: i32,
        upper: i32,
    },

    #[error("{parameter}: minimum {min} is above maximum {max}")]
    InvertedBounds {
        parameter: &'static str,
        min: i32,
        max: i32,
    },

    #[error("instruction interval [{min}, {max}) seconds is empty")]
    EmptyInterval { min: u32, max: u32 },

    #[error("check interval must be positive, got {0} s")]
    NonPositiveCheckInterval(f64),

    #[error("callsign must not be blank")]
    BlankCallsign,
}

/// A simulator read that failed; the current tick is skipped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HostError {
    #[error("could not read {0} from the simulator")]
    ReadFailed(&'static str),
}

#[derive(Debug, Error)]
pub enum FlightLogError {
    #[error("flight log I/O: {0}")]
    Io(#[from] std::io::Error),
}
