use std::fs::File;
use std::io::BufWriter;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use random_instructions::cli::Args;
use random_instructions::error::HostError;
use random_instructions::flight_log::FlightRecorder;
use random_instructions::instructions::types::Instruction;
use random_instructions::session::{MenuCommand, Session, SimulatorHost};
use random_instructions::settings::Settings;
use random_instructions::sim::SimulatedAircraft;
use random_instructions::tts::{SpeechEngine, SpeechSender};

/// Headless host: the simulated aircraft plus speech output.
struct HeadlessHost {
    aircraft: SimulatedAircraft,
    speech: Option<SpeechSender>,
}

impl SimulatorHost for HeadlessHost {
    fn elapsed_time(&self) -> Result<f64, HostError> {
        Ok(self.aircraft.elapsed())
    }

    fn airspeed(&self) -> Result<f64, HostError> {
        Ok(self.aircraft.airspeed())
    }

    fn altitude_meters(&self) -> Result<f64, HostError> {
        Ok(self.aircraft.altitude_meters())
    }

    fn heading_degrees(&self) -> Result<f64, HostError> {
        Ok(self.aircraft.heading())
    }

    fn speak(&mut self, text: &str) {
        println!("{}", text);
        if let Some(ref speech) = self.speech {
            speech.send(text);
        }
    }

    fn issue(&mut self, instruction: &Instruction) {
        self.speak(&instruction.to_string());
        self.aircraft.apply(instruction);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let settings = Settings::from_args(&args);
    settings.validate()?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Engine must outlive the host so queued speech gets played.
    let engine = if args.no_tts {
        None
    } else {
        match SpeechEngine::new() {
            Ok(engine) => Some(engine),
            Err(e) => {
                log::warn!("Speech unavailable: {}", e);
                None
            }
        }
    };

    let mut recorder: Option<FlightRecorder<BufWriter<File>>> = match &args.flight_log {
        Some(path) => Some(FlightRecorder::create(path, &args.tail)?),
        None => None,
    };

    let mut host = HeadlessHost {
        aircraft: SimulatedAircraft::new(args.ias, args.altitude_ft, args.heading),
        speech: engine.as_ref().map(SpeechEngine::sender),
    };
    let mut session = Session::new(&settings, rng)?;

    session.handle_menu(MenuCommand::Start, &mut host);
    while let Some(interval) = session.flight_loop(&mut host) {
        if let Some(rec) = recorder.as_mut() {
            rec.record(host.aircraft.elapsed(), &host.aircraft.flight_state())?;
        }

        if host.aircraft.elapsed() >= args.duration {
            session.handle_menu(MenuCommand::Stop, &mut host);
            continue;
        }

        host.aircraft.advance(interval);
        if args.realtime {
            std::thread::sleep(Duration::from_secs_f64(interval));
        }
    }

    if let Some(rec) = recorder {
        let rows = rec.rows();
        rec.finish()?;
        log::info!("Flight log closed after {} rows", rows);
    }

    Ok(())
}
