use crate::cli::Args;
use crate::constants::{CHECK_INTERVAL_SECS, DEFAULT_CALLSIGN, GEN_TIME_INTERVAL};
use crate::error::ConfigError;
use crate::instructions::rules::{ParameterRule, AIRSPEED_RULE, ALTITUDE_RULE, HEADING_RULE};
use crate::instructions::InstructionGenerator;
use crate::scheduler::Scheduler;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub callsign: String,
    pub check_interval_secs: f64,
    /// Half-open, whole seconds.
    pub gen_time_interval: (u32, u32),
    pub airspeed: ParameterRule,
    pub altitude: ParameterRule,
    pub heading: ParameterRule,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            callsign: DEFAULT_CALLSIGN.to_string(),
            check_interval_secs: CHECK_INTERVAL_SECS,
            gen_time_interval: GEN_TIME_INTERVAL,
            airspeed: AIRSPEED_RULE,
            altitude: ALTITUDE_RULE,
            heading: HEADING_RULE,
        }
    }
}

impl Settings {
    pub fn from_args(args: &Args) -> Self {
        Self {
            callsign: args.callsign.clone(),
            gen_time_interval: (args.interval_min, args.interval_max),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_scheduler().map(|_| ())
    }

    pub fn build_scheduler(&self) -> Result<Scheduler, ConfigError> {
        let (min, max) = self.gen_time_interval;
        if min >= max {
            return Err(ConfigError::EmptyInterval { min, max });
        }
        if !(self.check_interval_secs > 0.0) {
            return Err(ConfigError::NonPositiveCheckInterval(self.check_interval_secs));
        }
        let generator = InstructionGenerator::new(
            self.callsign.clone(),
            self.airspeed,
            self.altitude,
            self.heading,
        )?;
        Ok(Scheduler::new(
            generator,
            self.gen_time_interval,
            self.check_interval_secs,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_are_valid() {
        let s = Settings::default();
        assert_eq!(s.gen_time_interval, (20, 70));
        assert_eq!(s.check_interval_secs, 1.0);
        assert_eq!(s.callsign, "N56433");
        assert!(s.validate().is_ok());
    }

    #[test]
    fn rejects_empty_interval() {
        let s = Settings {
            gen_time_interval: (70, 20),
            ..Settings::default()
        };
        assert_eq!(s.validate(), Err(ConfigError::EmptyInterval { min: 70, max: 20 }));
    }

    #[test]
    fn rejects_non_positive_check_interval() {
        let s = Settings {
            check_interval_secs: 0.0,
            ..Settings::default()
        };
        assert!(matches!(
            s.validate(),
            Err(ConfigError::NonPositiveCheckInterval(_))
        ));
    }

    #[test]
    fn rejects_inverted_altitude_bounds() {
        let mut s = Settings::default();
        s.altitude.min_value = Some(14000);
        assert!(matches!(
            s.validate(),
            Err(ConfigError::InvertedBounds {
                parameter: "altitude",
                ..
            })
        ));
    }

    #[test]
    fn built_from_args() {
        let args = Args::parse_from([
            "random-instructions",
            "--callsign",
            "Cessna 123",
            "--interval-min",
            "5",
            "--interval-max",
            "10",
        ]);
        let s = Settings::from_args(&args);
        assert_eq!(s.callsign, "Cessna 123");
        assert_eq!(s.gen_time_interval, (5, 10));
        assert_eq!(s.altitude, ALTITUDE_RULE);
    }
}
