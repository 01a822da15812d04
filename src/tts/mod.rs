//! Spoken output through espeak-ng on a background thread.

use std::process::Command;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::JoinHandle;
use std::time::Duration;

// ── Public types ─────────────────────────────────────────────────────

/// A request to speak one utterance.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    /// Words per minute.
    pub rate_wpm: u32,
}

/// Clonable handle for queueing speech.
#[derive(Clone)]
pub struct SpeechSender {
    sender: mpsc::Sender<SpeechRequest>,
    rate_wpm: u32,
}

impl SpeechSender {
    /// Queue text; never blocks. Dropped silently once the engine is gone.
    pub fn send(&self, text: &str) {
        let _ = self.sender.send(SpeechRequest {
            text: text.to_string(),
            rate_wpm: self.rate_wpm,
        });
    }
}

// ── Speech Engine ────────────────────────────────────────────────────

/// Controllers talk a little faster than espeak's default 175.
const DEFAULT_RATE_WPM: u32 = 190;

pub struct SpeechEngine {
    worker: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
    sender: mpsc::Sender<SpeechRequest>,
}

impl SpeechEngine {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let has_espeak = Command::new("espeak-ng")
            .arg("--version")
            .output()
            .is_ok();
        if !has_espeak {
            log::warn!("espeak-ng not found. Install with: brew install espeak-ng");
            log::warn!("Speech will be disabled.");
            return Err("espeak-ng not found".into());
        }

        let (sender, receiver) = mpsc::channel::<SpeechRequest>();
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let worker = std::thread::Builder::new()
            .name("speech".to_string())
            .spawn(move || {
                speech_loop(receiver, shutdown_clone);
            })?;

        log::info!("Speech enabled (espeak-ng)");
        Ok(SpeechEngine {
            worker: Some(worker),
            shutdown,
            sender,
        })
    }

    pub fn sender(&self) -> SpeechSender {
        SpeechSender {
            sender: self.sender.clone(),
            rate_wpm: DEFAULT_RATE_WPM,
        }
    }
}

impl Drop for SpeechEngine {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

// ── Worker ───────────────────────────────────────────────────────────

/// Speak queued requests one at a time until shutdown, finishing whatever is
/// already queued first.
fn speech_loop(receiver: mpsc::Receiver<SpeechRequest>, shutdown: Arc<AtomicBool>) {
    loop {
        match receiver.recv_timeout(Duration::from_millis(100)) {
            Ok(request) => {
                if let Err(e) = speak(&request) {
                    log::warn!("Speech failed: {}", e);
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if shutdown.load(Ordering::Relaxed) {
                    break;
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
}

fn speak(request: &SpeechRequest) -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new("espeak-ng")
        .args(espeak_args(request))
        .output()?;

    if !output.status.success() {
        return Err(format!(
            "espeak-ng failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }
    Ok(())
}

fn espeak_args(request: &SpeechRequest) -> Vec<String> {
    vec![
        "-s".to_string(),
        request.rate_wpm.to_string(),
        request.text.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn espeak_arguments() {
        let req = SpeechRequest {
            text: "N56433, maintain 130 knots".to_string(),
            rate_wpm: 190,
        };
        assert_eq!(
            espeak_args(&req),
            vec!["-s", "190", "N56433, maintain 130 knots"]
        );
    }

    #[test]
    fn sender_queues_with_rate() {
        let (tx, rx) = mpsc::channel();
        let sender = SpeechSender {
            sender: tx,
            rate_wpm: 150,
        };
        sender.send("Random Instructions: starting");
        assert_eq!(
            rx.try_recv().unwrap(),
            SpeechRequest {
                text: "Random Instructions: starting".to_string(),
                rate_wpm: 150,
            }
        );
    }
}
