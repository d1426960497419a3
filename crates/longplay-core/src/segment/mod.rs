mod capture_segment;
pub(crate) mod codec;

pub use capture_segment::CaptureSegment;
