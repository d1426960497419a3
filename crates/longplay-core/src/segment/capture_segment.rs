/// One contiguous recorded capture, bounded by a start and a stop/rollover.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureSegment {
    /// Output file of this segment. Empty until the encoder opens a file.
    pub path: String,
    /// Recorded frame width (0 while unknown).
    pub width: u32,
    /// Recorded frame height (0 while unknown).
    pub height: u32,
    /// Frames recorded so far.
    pub frame_count: u32,
}

impl CaptureSegment {
    /// Create a fresh segment for `path` with no size and no frames.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// A segment with no path and no frames was never started.
    pub fn is_started(&self) -> bool {
        !self.path.is_empty() || self.frame_count > 0
    }

    /// Whether this segment holds recorded frames worth archiving.
    pub fn has_frames(&self) -> bool {
        self.frame_count > 0
    }
}
