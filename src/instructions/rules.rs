//! Per-parameter generation rules and the quantizer.

use rand::Rng;

use crate::error::ConfigError;

/// How one flight parameter (heading, altitude or airspeed) may be changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterRule {
    /// Threshold a uniform draw must exceed before a change is issued.
    pub change_probability: f64,
    pub delta_lower_bound: i32,
    /// Exclusive.
    pub delta_upper_bound: i32,
    /// Delta stride and rounding precision of the target.
    pub quantization_step: i32,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
}

pub const HEADING_RULE: ParameterRule = ParameterRule {
    change_probability: 0.4,
    delta_lower_bound: -181,
    delta_upper_bound: 181,
    quantization_step: 10,
    min_value: None,
    max_value: None,
};

pub const ALTITUDE_RULE: ParameterRule = ParameterRule {
    change_probability: 0.3,
    delta_lower_bound: -2001,
    delta_upper_bound: 2001,
    quantization_step: 500,
    min_value: Some(5000),
    max_value: Some(13000),
};

pub const AIRSPEED_RULE: ParameterRule = ParameterRule {
    change_probability: 0.1,
    delta_lower_bound: -21,
    delta_upper_bound: 21,
    quantization_step: 10,
    min_value: Some(100),
    max_value: Some(140),
};

impl ParameterRule {
    /// Draw the gate for this cycle. A change is issued only when the draw
    /// exceeds `change_probability`.
    pub fn wants_change<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen::<f64>() > self.change_probability
    }

    /// Number of deltas in `lower, lower + step, ...` strictly below `upper`.
    pub fn delta_count(&self) -> i32 {
        let span = self.delta_upper_bound - self.delta_lower_bound;
        if span <= 0 || self.quantization_step <= 0 {
            return 0;
        }
        (span + self.quantization_step - 1) / self.quantization_step
    }

    /// Uniform pick from the stepped delta range. Needs a validated rule.
    pub fn draw_delta<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        let k = rng.gen_range(0..self.delta_count());
        self.delta_lower_bound + k * self.quantization_step
    }

    /// Lower bound first, then upper bound.
    pub fn clamp(&self, value: i32) -> i32 {
        let mut value = value;
        if let Some(min) = self.min_value {
            if value < min {
                value = min;
            }
        }
        if let Some(max) = self.max_value {
            if value > max {
                value = max;
            }
        }
        value
    }

    /// Quantize then clamp a raw target.
    pub fn target(&self, raw: f64) -> i32 {
        self.clamp(deprecisify(raw, self.quantization_step))
    }

    pub fn validate(&self, parameter: &'static str) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.change_probability) {
            return Err(ConfigError::ProbabilityOutOfRange {
                parameter,
                value: self.change_probability,
            });
        }
        if self.quantization_step <= 0 {
            return Err(ConfigError::NonPositiveStep {
                parameter,
                step: self.quantization_step,
            });
        }
        if self.delta_count() == 0 {
            return Err(ConfigError::EmptyDeltaRange {
                parameter,
                lower: self.delta_lower_bound,
                upper: self.delta_upper_bound,
            });
        }
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            if min > max {
                return Err(ConfigError::InvertedBounds { parameter, min, max });
            }
        }
        Ok(())
    }
}

/// Round `value` to the nearest multiple of `precision`, ties to even.
/// Example: (132, 100) -> 100; (132, 10) -> 130; (25, 10) -> 20
pub fn deprecisify(value: f64, precision: i32) -> i32 {
    let precision = f64::from(precision);
    ((value / precision).round_ties_even() * precision) as i32
}
