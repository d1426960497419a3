//! Versioned container for a capture session.
//!
//! Layout (little-endian `u32` fields):
//!
//! ```text
//! format_version | capture_flag | segment_count | segment * segment_count
//! ```
//!
//! When the video bit of `capture_flag` is set, the last record is the
//! segment that was in flight at save time.

use crate::{
    CaptureFlags, CaptureSegment, LongplayError, LongplayResult, SessionState,
    segment::codec::{self, MIN_RECORD_LEN},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, instrument, warn};

/// Envelope version written by this build.
pub const CURRENT_VERSION: u32 = 1;

/// Decoded envelope, before any reconciliation with the live capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Schema revision.
    pub version: u32,
    /// Capture state when the envelope was written.
    pub capture_flags: CaptureFlags,
    /// Segments in concatenation order.
    pub segments: Vec<CaptureSegment>,
}

impl Envelope {
    /// Build the envelope for `session` under the given capture snapshot.
    ///
    /// An active capture always contributes a trailing in-flight record,
    /// even one with no frames, so the reader can reserve it.
    pub fn from_session(session: &SessionState, capture_flags: CaptureFlags) -> Self {
        let mut segments: Vec<CaptureSegment> = session.completed().to_vec();

        if capture_flags.is_video_active() {
            segments.push(session.current().cloned().unwrap_or_default());
        }

        Self {
            version: CURRENT_VERSION,
            capture_flags,
            segments,
        }
    }

    /// The record reserved for the in-flight segment, if the capture was
    /// active at save time.
    pub fn in_flight(&self) -> Option<&CaptureSegment> {
        if self.capture_flags.is_video_active() {
            self.segments.last()
        } else {
            None
        }
    }

    /// Segments that were closed at save time.
    pub fn closed_segments(&self) -> &[CaptureSegment] {
        match self.in_flight() {
            Some(_) => &self.segments[..self.segments.len() - 1],
            None => &self.segments,
        }
    }

    /// Encode to a fresh byte buffer.
    #[track_caller]
    pub fn encode(&self) -> LongplayResult<Vec<u8>> {
        let count = u32::try_from(self.segments.len()).map_err(|_| LongplayError::CorruptEnvelope {
            reason: format!("Too many segments to encode: {}", self.segments.len()),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut out = Vec::new();
        codec::write_u32(&mut out, self.version)?;
        codec::write_u32(&mut out, self.capture_flags.bits())?;
        codec::write_u32(&mut out, count)?;
        for segment in &self.segments {
            codec::encode(&mut out, segment)?;
        }

        Ok(out)
    }

    /// Decode an envelope without touching any live state.
    #[track_caller]
    #[instrument(skip(bytes), fields(len = bytes.len()))]
    pub fn decode(bytes: &[u8]) -> LongplayResult<Self> {
        let mut stream = bytes;

        let version = header_field(&mut stream, "format_version")?;
        match version {
            CURRENT_VERSION => {}
            other => {
                return Err(LongplayError::UnsupportedVersion {
                    version: other,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let capture_flags = CaptureFlags::from_bits(header_field(&mut stream, "capture_flag")?);
        let count = header_field(&mut stream, "segment_count")? as usize;

        if count > stream.len() / MIN_RECORD_LEN {
            return Err(LongplayError::CorruptEnvelope {
                reason: format!(
                    "segment_count {} cannot fit in the remaining {} bytes",
                    count,
                    stream.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut segments = Vec::with_capacity(count);
        for index in 0..count {
            let segment = codec::decode(&mut stream).map_err(|e| match e {
                LongplayError::TruncatedInput { location } => LongplayError::CorruptEnvelope {
                    reason: format!("Segment {} of {} is truncated", index + 1, count),
                    location,
                },
                other => other,
            })?;
            segments.push(segment);
        }

        if !stream.is_empty() {
            warn!(trailing = stream.len(), "Ignoring trailing bytes after envelope");
        }

        debug!(
            version,
            capture_flag = capture_flags.bits(),
            segment_count = segments.len(),
            "Envelope decoded"
        );

        Ok(Self {
            version,
            capture_flags,
            segments,
        })
    }
}

/// Encode `session` with the capture snapshot taken by the caller.
#[track_caller]
#[instrument(skip(session))]
pub fn serialize(session: &SessionState, capture_flags: CaptureFlags) -> LongplayResult<Vec<u8>> {
    let envelope = Envelope::from_session(session, capture_flags);
    let bytes = envelope.encode()?;

    debug!(
        segment_count = envelope.segments.len(),
        len = bytes.len(),
        "Session serialized"
    );

    Ok(bytes)
}

#[track_caller]
fn header_field(stream: &mut &[u8], name: &str) -> LongplayResult<u32> {
    codec::read_u32(stream).map_err(|e| match e {
        LongplayError::TruncatedInput { location } => LongplayError::CorruptEnvelope {
            reason: format!("Envelope ends before {}", name),
            location,
        },
        other => other,
    })
}
