use crate::{AppResult, Command, config::Config};

use std::{fs, path::Path};

use longplay_core::{Envelope, write_segments_script};
use tracing::{info, instrument, warn};

/// Offline tooling over dumped longplay save-state blobs.
pub struct App {
    pub(crate) config: Config,
}

impl App {
    /// Run one command to completion.
    #[instrument(skip(self))]
    pub(crate) fn run(&self, command: Command) -> AppResult<()> {
        match command {
            Command::Inspect { blob } => self.inspect(&blob).map(|_| ()),
            Command::Script { blob, output } => {
                let envelope = read_envelope(&blob)?;
                let settings = self.config.script.settings(output);

                if !write_segments_script(&envelope.segments, &settings)? {
                    warn!(blob = ?blob, "No recorded segments, no script written");
                }
                Ok(())
            }
        }
    }

    /// Decode `blob` and log every field.
    #[instrument(skip(self))]
    pub(crate) fn inspect(&self, blob: &Path) -> AppResult<Envelope> {
        let envelope = read_envelope(blob)?;

        info!(
            version = envelope.version,
            capture_flag = envelope.capture_flags.bits(),
            capture_active = envelope.capture_flags.is_video_active(),
            segment_count = envelope.segments.len(),
            "Envelope"
        );

        let in_flight = envelope.in_flight().is_some();
        let last = envelope.segments.len().saturating_sub(1);
        for (index, segment) in envelope.segments.iter().enumerate() {
            info!(
                index,
                path = %segment.path,
                width = segment.width,
                height = segment.height,
                frame_count = segment.frame_count,
                in_flight = in_flight && index == last,
                "Segment"
            );
        }

        Ok(envelope)
    }
}

#[track_caller]
fn read_envelope(blob: &Path) -> AppResult<Envelope> {
    let bytes = fs::read(blob)?;
    Ok(Envelope::decode(&bytes)?)
}
