//! Decides when the next instruction is due.

use rand::Rng;

use crate::instructions::types::{FlightState, Instruction};
use crate::instructions::InstructionGenerator;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SchedulerState {
    Idle,
    Armed { next_instruction_time: f64 },
}

/// Result of one flight-loop tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutcome {
    pub instruction: Option<Instruction>,
    /// Seconds until the next tick. Constant.
    pub next_interval: f64,
}

pub struct Scheduler {
    generator: InstructionGenerator,
    gen_time_interval: (u32, u32),
    check_interval: f64,
    state: SchedulerState,
}

impl Scheduler {
    /// `gen_time_interval` is half-open, in whole seconds. Callers validate it.
    pub fn new(
        generator: InstructionGenerator,
        gen_time_interval: (u32, u32),
        check_interval: f64,
    ) -> Self {
        Scheduler {
            generator,
            gen_time_interval,
            check_interval,
            state: SchedulerState::Idle,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn check_interval(&self) -> f64 {
        self.check_interval
    }

    pub fn generator(&self) -> &InstructionGenerator {
        &self.generator
    }

    /// Drop any pending instruction time.
    pub fn reset(&mut self) {
        self.state = SchedulerState::Idle;
    }

    /// Advance to `elapsed` sim seconds. Arms when idle, then fires once
    /// `elapsed` is strictly past the armed time and returns to idle.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        elapsed: f64,
        flight: &FlightState,
        rng: &mut R,
    ) -> TickOutcome {
        let next_instruction_time = match self.state {
            SchedulerState::Armed {
                next_instruction_time,
            } => next_instruction_time,
            SchedulerState::Idle => {
                let (lo, hi) = self.gen_time_interval;
                let offset = rng.gen_range(lo..hi);
                let next_instruction_time = elapsed + f64::from(offset);
                log::debug!(
                    "next instruction in {} s (at t={:.1})",
                    offset,
                    next_instruction_time
                );
                self.state = SchedulerState::Armed {
                    next_instruction_time,
                };
                next_instruction_time
            }
        };

        let instruction = if elapsed > next_instruction_time {
            self.state = SchedulerState::Idle;
            Some(self.generator.generate(flight, rng))
        } else {
            None
        };

        TickOutcome {
            instruction,
            next_interval: self.check_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::rules::{AIRSPEED_RULE, ALTITUDE_RULE, HEADING_RULE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const STATE: FlightState = FlightState {
        airspeed: 120.0,
        altitude: 8000.0,
        heading: 280.0,
    };

    fn scheduler() -> Scheduler {
        let gen = InstructionGenerator::new("N56433", AIRSPEED_RULE, ALTITUDE_RULE, HEADING_RULE)
            .unwrap();
        Scheduler::new(gen, (20, 70), 1.0)
    }

    fn armed_time(s: &Scheduler) -> f64 {
        match s.state() {
            SchedulerState::Armed {
                next_instruction_time,
            } => next_instruction_time,
            SchedulerState::Idle => panic!("scheduler should be armed"),
        }
    }

    #[test]
    fn first_tick_arms_within_interval() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut s = scheduler();
            let out = s.tick(0.0, &STATE, &mut rng);
            assert!(out.instruction.is_none());
            assert_eq!(out.next_interval, 1.0);
            let t = armed_time(&s);
            assert!((20.0..70.0).contains(&t), "armed at {t}");
            assert_eq!(t.fract(), 0.0);
        }
    }

    #[test]
    fn fires_once_strictly_after_armed_time_then_idles() {
        let mut rng = StdRng::seed_from_u64(77);
        let mut s = scheduler();
        s.tick(100.0, &STATE, &mut rng);
        let t = armed_time(&s);

        let mut elapsed = 100.0;
        while elapsed < t {
            elapsed += 1.0;
            assert!(s.tick(elapsed, &STATE, &mut rng).instruction.is_none());
        }
        // elapsed == t is not yet past it
        assert_eq!(elapsed, t);
        assert_eq!(armed_time(&s), t);

        let out = s.tick(t + 0.5, &STATE, &mut rng);
        let instr = out.instruction.expect("should fire");
        assert!(instr.to_string().starts_with("N56433, "));
        assert_eq!(s.state(), SchedulerState::Idle);

        // Next tick re-arms relative to the new elapsed time.
        let out = s.tick(t + 1.5, &STATE, &mut rng);
        assert!(out.instruction.is_none());
        let next = armed_time(&s);
        assert!(next >= t + 1.5 + 20.0 && next < t + 1.5 + 70.0);
    }

    #[test]
    fn late_first_tick_does_not_fire_immediately() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut s = scheduler();
        let out = s.tick(5_000.0, &STATE, &mut rng);
        assert!(out.instruction.is_none());
    }

    #[test]
    fn reset_disarms() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut s = scheduler();
        s.tick(0.0, &STATE, &mut rng);
        s.reset();
        assert_eq!(s.state(), SchedulerState::Idle);
    }

    #[test]
    fn seeded_runs_replay() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut s = scheduler();
            (0..600)
                .filter_map(|t| s.tick(f64::from(t), &STATE, &mut rng).instruction)
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
        };
        let a = run(2024);
        assert!(!a.is_empty());
        assert_eq!(a, run(2024));
    }
}
