use crate::{CaptureControl, LongplayResult, SessionState, persistence::Envelope};

use tracing::{debug, info, instrument};

/// Decode `bytes` and bring `capture` in line with what was saved.
///
/// Any running capture is shut down before a saved one is restarted, so two
/// captures never overlap. A restarted capture opens a fresh file; the
/// in-flight file from the save is archived when it holds frames.
#[track_caller]
#[instrument(skip(bytes, capture), fields(len = bytes.len()))]
pub fn deserialize<C: CaptureControl + ?Sized>(
    bytes: &[u8],
    capture: &mut C,
) -> LongplayResult<SessionState> {
    let envelope = Envelope::decode(bytes)?;
    let session = envelope.rebuild_session();
    reconcile_capture(&envelope, capture)?;
    Ok(session)
}

impl Envelope {
    /// Session as it stands right after a restore: closed segments, plus the
    /// in-flight one when it recorded frames, and nothing in flight.
    pub fn rebuild_session(&self) -> SessionState {
        let mut completed = self.closed_segments().to_vec();
        if let Some(segment) = self
            .in_flight()
            .filter(|s| s.has_frames() && !s.path.is_empty())
        {
            debug!(
                path = %segment.path,
                frame_count = segment.frame_count,
                "Archiving in-flight segment from save"
            );
            completed.push(segment.clone());
        }

        SessionState::from_completed(completed)
    }
}

/// Stop or clear a running capture, then restart it if the envelope was
/// saved mid-capture.
#[track_caller]
#[instrument(skip(envelope, capture))]
pub fn reconcile_capture<C: CaptureControl + ?Sized>(
    envelope: &Envelope,
    capture: &mut C,
) -> LongplayResult<()> {
    let saved_active = envelope.capture_flags.is_video_active();

    if capture.is_active() {
        match envelope.in_flight() {
            Some(segment) if segment.path.is_empty() => {
                // Capture was armed but never opened a file: nothing to close.
                capture.force_inactive();
                debug!("Cleared armed capture without a file");
            }
            _ => capture.stop()?,
        }
    }

    if saved_active {
        capture.start()?;
    }

    info!(
        segment_count = envelope.segments.len(),
        capture_active = saved_active,
        "Capture reconciled"
    );

    Ok(())
}
