//! Seam to the host's live capture subsystem.
//!
//! The host owns the encoder and the capture-active state. This crate only
//! observes that state and asks for transitions through [`CaptureControl`].

use crate::{LongplayError, LongplayResult};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Capture bitmask as persisted in the envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureFlags(u32);

impl CaptureFlags {
    /// Video capture bit.
    pub const VIDEO: u32 = 0x10;

    /// No capture active.
    pub const NONE: CaptureFlags = CaptureFlags(0);

    /// Wrap a raw bitmask read from an envelope.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Snapshot of a live capture state.
    pub const fn from_active(active: bool) -> Self {
        if active {
            Self(Self::VIDEO)
        } else {
            Self::NONE
        }
    }

    /// Raw bitmask for encoding.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether the video capture bit is set.
    pub const fn is_video_active(self) -> bool {
        self.0 & Self::VIDEO != 0
    }
}

/// Live capture subsystem as seen by the persistence layer.
///
/// Implementations toggle synchronously: after `request_toggle` returns,
/// `is_active` reflects the new state.
pub trait CaptureControl {
    /// Whether a capture is currently running.
    fn is_active(&self) -> bool;

    /// Start the capture when idle, stop it when running.
    fn request_toggle(&mut self);

    /// Clear the active state without closing anything.
    ///
    /// Used when capture was armed but no file was ever opened.
    fn force_inactive(&mut self);

    /// Stop a running capture and verify it stopped.
    #[track_caller]
    #[instrument(skip(self))]
    fn stop(&mut self) -> LongplayResult<()> {
        if self.is_active() {
            self.request_toggle();
        }
        if self.is_active() {
            return Err(LongplayError::CaptureTransition {
                expected_active: false,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        debug!("Capture stopped");
        Ok(())
    }

    /// Start capture and verify it started.
    #[track_caller]
    #[instrument(skip(self))]
    fn start(&mut self) -> LongplayResult<()> {
        if !self.is_active() {
            self.request_toggle();
        }
        if !self.is_active() {
            return Err(LongplayError::CaptureTransition {
                expected_active: true,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        debug!("Capture started");
        Ok(())
    }
}
