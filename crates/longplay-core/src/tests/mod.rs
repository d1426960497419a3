mod fake_capture;
mod script;

pub(crate) use fake_capture::{CaptureCall, FakeCapture};

use crate::CaptureSegment;

pub(crate) fn segment(path: &str, width: u32, height: u32, frame_count: u32) -> CaptureSegment {
    CaptureSegment {
        path: path.to_string(),
        width,
        height,
        frame_count,
    }
}
