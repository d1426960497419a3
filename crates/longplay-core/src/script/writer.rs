//! Join script output.
//!
//! One expression per segment, in recording order, joined by the aligned
//! splice operator `++`:
//!
//! ```text
//! # longplay join script
//! FFVideoSource("a.mp4").Trim(0, 99).AddBorders(160, 100, 160, 100) \
//! ++ FFVideoSource("b.mp4").Trim(0, 49)
//! ```

use crate::{
    CaptureSegment, LongplayError, LongplayResult, SessionState,
    script::{Scaler, SegmentLayout, target_size},
};

use std::{
    fs::File,
    io::{BufWriter, Write},
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

const HEADER: &str = "# longplay join script";
const JOIN_MARKER: &str = "++";

/// Where and how the join script is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSettings {
    /// Output file.
    pub path: PathBuf,
    /// Fitting strategy for undersized segments.
    pub scaler: Scaler,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("longplay.avs"),
            scaler: Scaler::None,
        }
    }
}

/// Render the script text for `segments`, or `None` if there is nothing to join.
///
/// Segments that were never started are skipped.
pub fn render_script<'a>(
    segments: impl IntoIterator<Item = &'a CaptureSegment>,
    scaler: Scaler,
) -> Option<String> {
    let segments: Vec<&CaptureSegment> = segments.into_iter().filter(|s| s.is_started()).collect();
    if segments.is_empty() {
        return None;
    }

    let target = target_size(segments.iter().copied());

    let mut script = String::new();
    script.push_str(HEADER);
    script.push('\n');
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            script.push_str(" \\\n");
            script.push_str(JOIN_MARKER);
            script.push(' ');
        }
        push_segment(&mut script, segment, SegmentLayout::fit(segment, target, scaler));
    }
    script.push('\n');

    Some(script)
}

fn push_segment(script: &mut String, segment: &CaptureSegment, layout: SegmentLayout) {
    script.push_str(&format!("FFVideoSource({})", string_literal(&segment.path)));

    if segment.frame_count > 0 {
        script.push_str(&format!(".Trim(0, {})", segment.frame_count - 1));
    }

    if let Some((width, height)) = layout.scaled {
        script.push_str(&format!(".PointResize({}, {})", width, height));
    }

    let b = layout.borders;
    if !b.is_empty() {
        script.push_str(&format!(
            ".AddBorders({}, {}, {}, {})",
            b.left, b.top, b.right, b.bottom
        ));
    }
}

/// AviSynth string literal for `path`.
///
/// AviSynth strings have no escape sequences; a path containing `"` is
/// wrapped in triple quotes instead.
fn string_literal(path: &str) -> String {
    if path.contains('"') {
        format!("\"\"\"{}\"\"\"", path)
    } else {
        format!("\"{}\"", path)
    }
}

/// Write the join script for `session` to `settings.path`.
///
/// Returns `Ok(false)` without touching the filesystem when there are no
/// segments.
#[track_caller]
#[instrument(skip(session))]
pub fn write_script(
    session: &SessionState,
    capture_active: bool,
    settings: &ScriptSettings,
) -> LongplayResult<bool> {
    write_segments_script(session.segments(capture_active), settings)
}

/// Write the join script for an explicit segment list.
#[track_caller]
pub fn write_segments_script<'a>(
    segments: impl IntoIterator<Item = &'a CaptureSegment>,
    settings: &ScriptSettings,
) -> LongplayResult<bool> {
    let Some(script) = render_script(segments, settings.scaler) else {
        debug!("No segments, skipping join script");
        return Ok(false);
    };

    write_file(&settings.path, &script)?;

    info!(path = ?settings.path, len = script.len(), "Join script written");

    Ok(true)
}

#[track_caller]
fn write_file(path: &Path, contents: &str) -> LongplayResult<()> {
    let script_err = |source: std::io::Error| LongplayError::ScriptWriteFailure {
        path: path.to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    };

    let file = File::create(path).map_err(script_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes()).map_err(script_err)?;
    writer.flush().map_err(script_err)?;

    Ok(())
}
