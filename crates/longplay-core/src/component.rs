//! Save-state integration.
//!
//! [`LongPlay`] is the piece the host registers with its save-state
//! framework. It receives capture lifecycle events while the host runs and
//! turns them into an envelope on save.

use crate::{
    CaptureControl, CaptureFlags, Envelope, LongplayResult, ScriptSettings, SessionState,
    persistence::{reconcile_capture, serialize},
    script::write_script,
};

use tracing::{info, instrument, warn};

/// Name the component registers under.
pub const COMPONENT_NAME: &str = "longplay";

/// Callbacks a save-state framework invokes on a registered component.
pub trait SaveStateComponent {
    /// Registration name; must be unique within one save state.
    fn name(&self) -> &'static str;

    /// Produce this component's bytes for a save.
    fn get_bytes(&mut self) -> LongplayResult<Vec<u8>>;

    /// Restore this component from bytes produced by `get_bytes`.
    fn set_bytes(&mut self, bytes: &[u8]) -> LongplayResult<()>;
}

/// Capture session tracker bound to the host's live capture.
pub struct LongPlay<C: CaptureControl> {
    session: SessionState,
    capture: C,
    script: ScriptSettings,
}

impl<C: CaptureControl> LongPlay<C> {
    /// Create a tracker with an empty session.
    pub fn new(capture: C, script: ScriptSettings) -> Self {
        Self {
            session: SessionState::new(),
            capture,
            script,
        }
    }

    /// Host opened a new capture file.
    pub fn set_capture_file(&mut self, path: &str) {
        self.session.begin_new_segment(path);
    }

    /// Host encoder learned the real frame size.
    pub fn begin_capture(&mut self, width: u32, height: u32) {
        self.session.set_dimensions(width, height);
    }

    /// Host recorded a frame or closed the segment.
    pub fn set_frame_count(&mut self, frame_count: u32) {
        self.session.set_frame_count(frame_count);
    }

    /// Whether the live capture is running.
    pub fn is_capture_active(&self) -> bool {
        self.capture.is_active()
    }

    /// Current session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Live capture collaborator.
    pub fn capture(&self) -> &C {
        &self.capture
    }

    /// Mutable access to the live capture collaborator.
    pub fn capture_mut(&mut self) -> &mut C {
        &mut self.capture
    }

    /// Script output settings.
    pub fn script_settings(&self) -> &ScriptSettings {
        &self.script
    }

    /// Write the join script for the current session.
    ///
    /// Failures are logged and swallowed; a missing script file is the only
    /// symptom.
    #[instrument(skip(self))]
    pub fn refresh_script(&self) {
        if let Err(e) = write_script(&self.session, self.capture.is_active(), &self.script) {
            warn!(error = %e, "Join script not written");
        }
    }
}

impl<C: CaptureControl> SaveStateComponent for LongPlay<C> {
    fn name(&self) -> &'static str {
        COMPONENT_NAME
    }

    #[instrument(skip(self))]
    fn get_bytes(&mut self) -> LongplayResult<Vec<u8>> {
        let flags = CaptureFlags::from_active(self.capture.is_active());
        let bytes = serialize(&self.session, flags)?;

        self.refresh_script();

        info!(len = bytes.len(), capture_flag = flags.bits(), "Longplay state saved");

        Ok(bytes)
    }

    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    fn set_bytes(&mut self, bytes: &[u8]) -> LongplayResult<()> {
        let envelope = Envelope::decode(bytes)?;

        // Replace the session before touching the capture so a failed
        // transition cannot leave a stale in-flight segment behind.
        self.session = envelope.rebuild_session();
        reconcile_capture(&envelope, &mut self.capture)
    }
}
