//! Binary record codec for [`CaptureSegment`].
//!
//! Layout, all integers little-endian:
//!
//! | field         | encoding                         |
//! |---------------|----------------------------------|
//! | `path`        | `u32` byte length + UTF-8 bytes  |
//! | `width`       | `u32`                            |
//! | `height`      | `u32`                            |
//! | `frame_count` | `u32`                            |

use crate::{CaptureSegment, LongplayError, LongplayResult};

use std::{
    io::{ErrorKind, Read, Write},
    panic::Location,
};

use error_location::ErrorLocation;

/// Smallest possible encoded record: empty path plus three integers.
pub(crate) const MIN_RECORD_LEN: usize = 4 * 4;

/// Write `segment` to `stream`.
#[track_caller]
pub fn encode<W: Write + ?Sized>(stream: &mut W, segment: &CaptureSegment) -> LongplayResult<()> {
    let path_len = u32::try_from(segment.path.len()).map_err(|_| LongplayError::CorruptEnvelope {
        reason: format!("Segment path is too long to encode ({} bytes)", segment.path.len()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    write_u32(stream, path_len)?;
    stream.write_all(segment.path.as_bytes())?;
    write_u32(stream, segment.width)?;
    write_u32(stream, segment.height)?;
    write_u32(stream, segment.frame_count)?;

    Ok(())
}

/// Read one segment from `stream`.
///
/// Field values are not validated; a zero frame count or empty path is
/// returned as-is.
#[track_caller]
pub fn decode<R: Read + ?Sized>(stream: &mut R) -> LongplayResult<CaptureSegment> {
    let path_len = read_u32(stream)? as usize;

    let mut path_bytes = Vec::new();
    // Bounded read so a corrupt length cannot force a huge allocation.
    let read = (&mut *stream)
        .take(path_len as u64)
        .read_to_end(&mut path_bytes)?;
    if read < path_len {
        return Err(LongplayError::TruncatedInput {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let path = String::from_utf8(path_bytes).map_err(|e| LongplayError::CorruptEnvelope {
        reason: format!("Segment path is not valid UTF-8: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let width = read_u32(stream)?;
    let height = read_u32(stream)?;
    let frame_count = read_u32(stream)?;

    Ok(CaptureSegment {
        path,
        width,
        height,
        frame_count,
    })
}

#[track_caller]
pub(crate) fn write_u32<W: Write + ?Sized>(stream: &mut W, value: u32) -> LongplayResult<()> {
    stream.write_all(&value.to_le_bytes())?;
    Ok(())
}

#[track_caller]
pub(crate) fn read_u32<R: Read + ?Sized>(stream: &mut R) -> LongplayResult<u32> {
    let mut buf = [0u8; 4];
    stream.read_exact(&mut buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => LongplayError::TruncatedInput {
            location: ErrorLocation::from(Location::caller()),
        },
        _ => LongplayError::from(e),
    })?;
    Ok(u32::from_le_bytes(buf))
}
