//! CSV flight log in CloudAhoy's CA_CSV.3 layout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::FlightLogError;
use crate::instructions::types::FlightState;

/// Column names, in row order.
pub const COLUMNS: [&str; 4] = ["seconds/t", "IAS", "altitude/ft", "HDG"];

pub struct FlightRecorder<W: Write> {
    out: W,
    rows: usize,
}

impl FlightRecorder<BufWriter<File>> {
    /// Create (or truncate) `path` and write the header stamped with now.
    pub fn create(path: &Path, tail: &str) -> Result<Self, FlightLogError> {
        let gmt = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let file = File::create(path)?;
        log::info!("Writing flight log to {}", path.display());
        Self::new(BufWriter::new(file), tail, gmt)
    }
}

impl<W: Write> FlightRecorder<W> {
    pub fn new(out: W, tail: &str, gmt: u64) -> Result<Self, FlightLogError> {
        let mut recorder = FlightRecorder { out, rows: 0 };
        recorder.write_metadata(tail, gmt)?;
        Ok(recorder)
    }

    fn write_metadata(&mut self, tail: &str, gmt: u64) -> Result<(), FlightLogError> {
        writeln!(self.out, "Metadata,CA_CSV.3")?;
        writeln!(self.out, "GMT,{}", gmt)?;
        writeln!(self.out, "TAIL,{}", tail)?;
        writeln!(self.out, "GPS,XPlane")?;
        writeln!(self.out, "ISSIM,1")?;
        writeln!(self.out, "DATA,")?;
        writeln!(self.out, "{}", COLUMNS.join(","))?;
        Ok(())
    }

    pub fn record(&mut self, elapsed: f64, state: &FlightState) -> Result<(), FlightLogError> {
        writeln!(
            self.out,
            "{:.1},{:.1},{:.0},{:.1}",
            elapsed, state.airspeed, state.altitude, state.heading
        )?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(mut self) -> Result<W, FlightLogError> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_header() {
        let rec = FlightRecorder::new(Vec::new(), "X56433", 1_700_000_000).unwrap();
        let text = String::from_utf8(rec.finish().unwrap()).unwrap();
        assert_eq!(
            text,
            "Metadata,CA_CSV.3\n\
             GMT,1700000000\n\
             TAIL,X56433\n\
             GPS,XPlane\n\
             ISSIM,1\n\
             DATA,\n\
             seconds/t,IAS,altitude/ft,HDG\n"
        );
    }

    #[test]
    fn rows_follow_header() {
        let mut rec = FlightRecorder::new(Vec::new(), "X56433", 0).unwrap();
        let state = FlightState {
            airspeed: 121.3,
            altitude: 8000.4,
            heading: 279.9,
        };
        rec.record(12.0, &state).unwrap();
        rec.record(13.0, &state).unwrap();
        assert_eq!(rec.rows(), 2);

        let text = String::from_utf8(rec.finish().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[7], "12.0,121.3,8000,279.9");
        assert_eq!(lines[8], "13.0,121.3,8000,279.9");
    }
}
