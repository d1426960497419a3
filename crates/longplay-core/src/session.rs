use crate::CaptureSegment;

use tracing::{debug, instrument};

/// Recorded segments of one capture session.
///
/// `completed` is append-only during a run and defines concatenation order.
/// `current` is the segment the live encoder is writing, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    completed: Vec<CaptureSegment>,
    current: Option<CaptureSegment>,
}

impl SessionState {
    /// Empty session with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_completed(completed: Vec<CaptureSegment>) -> Self {
        Self {
            completed,
            current: None,
        }
    }

    /// Called when the host opens a new capture file.
    ///
    /// An in-flight segment with recorded frames is archived; one that never
    /// recorded a frame is dropped.
    #[instrument(skip(self))]
    pub fn begin_new_segment(&mut self, path: &str) {
        if let Some(previous) = self.current.take() {
            if previous.has_frames() {
                debug!(
                    path = %previous.path,
                    frame_count = previous.frame_count,
                    "Archiving segment"
                );
                self.completed.push(previous);
            } else {
                debug!(path = %previous.path, "Discarding segment with no frames");
            }
        }

        self.current = Some(CaptureSegment::new(path));
    }

    /// Record the frame size the encoder settled on.
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        if let Some(current) = self.current.as_mut() {
            current.width = width;
            current.height = height;
        }
    }

    /// Overwrite the in-flight frame count.
    pub fn set_frame_count(&mut self, frame_count: u32) {
        if let Some(current) = self.current.as_mut() {
            current.frame_count = frame_count;
        }
    }

    /// Segments that were closed, in recording order.
    pub fn completed(&self) -> &[CaptureSegment] {
        &self.completed
    }

    /// The in-flight segment, if any.
    pub fn current(&self) -> Option<&CaptureSegment> {
        self.current.as_ref()
    }

    /// Effective ordered segment list: `completed`, then `current` when the
    /// capture is active.
    pub fn segments(&self, capture_active: bool) -> impl Iterator<Item = &CaptureSegment> {
        let current = if capture_active {
            self.current.as_ref()
        } else {
            None
        };
        self.completed.iter().chain(current)
    }

    /// True when nothing has been recorded or opened.
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty() && self.current.is_none()
    }
}
