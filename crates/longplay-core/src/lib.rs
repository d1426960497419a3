//! Longplay Core Library
//!
//! Tracks a multi-segment video capture across emulator save states: a
//! versioned binary envelope of recorded segments, reconciliation of the
//! host's live capture on restore, and an AviSynth-style join script.
//!
//! # Example
//!
//! ```no_run
//! use longplay_core::{CaptureControl, LongPlay, LongplayResult, SaveStateComponent, ScriptSettings};
//!
//! struct Recorder {
//!     active: bool,
//! }
//!
//! impl CaptureControl for Recorder {
//!     fn is_active(&self) -> bool {
//!         self.active
//!     }
//!     fn request_toggle(&mut self) {
//!         self.active = !self.active;
//!     }
//!     fn force_inactive(&mut self) {
//!         self.active = false;
//!     }
//! }
//!
//! fn main() -> LongplayResult<()> {
//!     let mut longplay = LongPlay::new(Recorder { active: true }, ScriptSettings::default());
//!
//!     longplay.set_capture_file("capture_000.avi");
//!     longplay.begin_capture(640, 400);
//!     longplay.set_frame_count(120);
//!
//!     let saved = longplay.get_bytes()?;
//!     longplay.set_bytes(&saved)?;
//!     Ok(())
//! }
//! ```

mod capture;
mod component;
mod error;
mod persistence;
mod script;
mod segment;
mod session;

pub use {
    capture::{CaptureControl, CaptureFlags},
    component::{COMPONENT_NAME, LongPlay, SaveStateComponent},
    error::LongplayError,
    error::Result as LongplayResult,
    persistence::{CURRENT_VERSION, Envelope, deserialize, reconcile_capture, serialize},
    script::{
        Borders, Scaler, ScriptSettings, SegmentLayout, render_script, target_size, write_script,
        write_segments_script,
    },
    segment::{
        CaptureSegment,
        codec::{decode as decode_segment, encode as encode_segment},
    },
    session::SessionState,
};

#[cfg(test)]
mod tests;
