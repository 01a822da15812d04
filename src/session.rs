//! Start/stop lifecycle and the flight-loop callback.
//!
//! The host simulator is reached only through [`SimulatorHost`]; the session
//! owns the scheduler and the random source, so one session is one trainer.

use rand::Rng;

use crate::constants::ALT_M_TO_FT;
use crate::error::{ConfigError, HostError};
use crate::instructions::types::{FlightState, Instruction};
use crate::scheduler::Scheduler;
use crate::settings::Settings;

/// What the trainer needs from the simulator.
pub trait SimulatorHost {
    /// Seconds since simulation start.
    fn elapsed_time(&self) -> Result<f64, HostError>;
    /// Indicated airspeed, knots.
    fn airspeed(&self) -> Result<f64, HostError>;
    fn altitude_meters(&self) -> Result<f64, HostError>;
    /// Magnetic heading, degrees.
    fn heading_degrees(&self) -> Result<f64, HostError>;

    /// Fire-and-forget speech.
    fn speak(&mut self, text: &str);

    /// Called with every generated instruction.
    fn issue(&mut self, instruction: &Instruction) {
        self.speak(&instruction.to_string());
    }
}

/// Entries of the plugin menu, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Start,
    Stop,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 2] = [MenuCommand::Start, MenuCommand::Stop];

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::Start => "Start giving random instructions",
            MenuCommand::Stop => "Stop giving random instructions",
        }
    }

    /// Menu item reference -> command.
    pub fn from_item(item: usize) -> Option<Self> {
        Self::ALL.get(item).copied()
    }
}

pub struct Session<R> {
    scheduler: Scheduler,
    rng: R,
    operating: bool,
}

impl<R: Rng> Session<R> {
    pub fn new(settings: &Settings, rng: R) -> Result<Self, ConfigError> {
        Ok(Session {
            scheduler: settings.build_scheduler()?,
            rng,
            operating: false,
        })
    }

    pub fn is_operating(&self) -> bool {
        self.operating
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn handle_menu<H: SimulatorHost + ?Sized>(&mut self, command: MenuCommand, host: &mut H) {
        match command {
            MenuCommand::Start => self.start(host),
            MenuCommand::Stop => self.stop(host),
        }
    }

    /// Begin operating. No-op when already running.
    pub fn start<H: SimulatorHost + ?Sized>(&mut self, host: &mut H) {
        if self.operating {
            return;
        }
        self.operating = true;
        self.scheduler.reset();
        log::info!("Random instructions started");
        host.speak("Random Instructions: starting");
    }

    /// Stop operating. No-op when already stopped.
    pub fn stop<H: SimulatorHost + ?Sized>(&mut self, host: &mut H) {
        if !self.operating {
            return;
        }
        self.operating = false;
        self.scheduler.reset();
        log::info!("Random instructions stopped");
        host.speak("Random Instructions: stopping");
    }

    /// The periodic callback. Returns the delay until the next call, or
    /// `None` once the session is stopped and the callback is unregistered.
    pub fn flight_loop<H: SimulatorHost + ?Sized>(&mut self, host: &mut H) -> Option<f64> {
        if !self.operating {
            return None;
        }

        let (elapsed, flight) = match read_flight_state(host) {
            Ok(sample) => sample,
            Err(e) => {
                log::warn!("Skipping tick: {}", e);
                return Some(self.scheduler.check_interval());
            }
        };

        let outcome = self.scheduler.tick(elapsed, &flight, &mut self.rng);
        if let Some(instruction) = outcome.instruction {
            log::info!("t={:.0}s: {}", elapsed, instruction);
            host.issue(&instruction);
        }

        Some(outcome.next_interval)
    }
}

/// Sample elapsed time and the aircraft state, altitude converted to feet.
pub fn read_flight_state<H: SimulatorHost + ?Sized>(
    host: &H,
) -> Result<(f64, FlightState), HostError> {
    let elapsed = host.elapsed_time()?;
    let flight = FlightState {
        airspeed: host.airspeed()?,
        altitude: host.altitude_meters()? * ALT_M_TO_FT,
        heading: host.heading_degrees()?,
    };
    Ok((elapsed, flight))
}
