//! Append-only per-step position trace
//!
//! Writes one line per atom per simulation step:
//! `id, mapped_id, x, y, z` — comma-separated, no header, never read back.
//!
//! The file is opened once in append mode; a failed open is fatal at
//! startup. Write failures after that warn and continue, so a full disk
//! does not take the viewer down mid-run.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use bevy::prelude::{warn, Resource};

use crate::simulation::states::NVec3;

/// Bevy resource wrapping the trace sink
/// Construct with [`TraceLogger::open`] or [`TraceLogger::disabled`]
#[derive(Resource)]
pub struct TraceLogger {
    writer: Option<BufWriter<std::fs::File>>,
}

impl TraceLogger {
    /// Open (or create) the trace file in append mode
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open trace file {path}"))?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
        })
    }

    /// A logger that drops every record
    pub fn disabled() -> Self {
        Self {
            writer: None,
        }
    }

    /// Append one StepRecord line: `id, mapped_id, x, y, z`
    /// An id with no local mapping records a mapped_id of -1
    pub fn record(&mut self, id: u32, mapped_id: Option<usize>, pos: &NVec3) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        let mapped = mapped_id.map_or(-1, |i| i as i64);
        if let Err(err) = writeln!(writer, "{}, {}, {}, {}, {}", id, mapped, pos.x, pos.y, pos.z) {
            warn!("trace write failed: {err}");
        }
    }

    /// Push buffered records out to the file
    pub fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if let Err(err) = writer.flush() {
                warn!("trace flush failed: {err}");
            }
        }
    }
}
