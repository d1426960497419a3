use crate::{
    Borders, LongplayError, Scaler, ScriptSettings, SegmentLayout, SessionState, render_script,
    target_size, tests::segment, write_script,
};

fn two_size_session() -> SessionState {
    let mut session = SessionState::new();
    session.begin_new_segment("a.mp4");
    session.set_dimensions(320, 200);
    session.set_frame_count(100);
    session.begin_new_segment("b.mp4");
    session.set_dimensions(640, 400);
    session.set_frame_count(50);
    session
}

/// WHAT: Border split always sums to the size difference, leading half rounded down
/// WHY: Odd differences must put the extra pixel on the trailing edge
#[test]
fn given_all_sizes_up_to_target_when_centering_then_borders_sum_to_difference() {
    // Given: Every actual size up to a few targets, odd and even
    for target in [0u32, 1, 7, 64, 65, 321] {
        for actual in 0..=target {
            // When: Centering on both axes
            let b = Borders::centered(actual, actual, target, target);

            // Then: Leading is half, trailing takes the remainder
            assert_eq!(b.left + b.right, target - actual);
            assert_eq!(b.top + b.bottom, target - actual);
            assert_eq!(b.left, (target - actual) / 2);
            assert_eq!(b.top, (target - actual) / 2);
        }
    }
}

/// WHAT: Equal sizes produce no borders
/// WHY: Full-size segments are passed through untouched
#[test]
fn given_equal_size_when_centering_then_borders_empty() {
    // Given/When: A frame exactly the target size
    let b = Borders::centered(640, 400, 640, 400);

    // Then: Nothing to pad
    assert!(b.is_empty());
}

/// WHAT: Target size is the per-axis maximum
/// WHY: Width and height can come from different segments
#[test]
fn given_mixed_segments_when_computing_target_then_per_axis_maximum() {
    // Given: One wide and one tall segment
    let segments = [segment("w", 800, 300, 1), segment("t", 320, 600, 1)];

    // When/Then: Largest of each axis
    assert_eq!(target_size(&segments), (800, 600));
}

/// WHAT: Integral scaler picks the largest whole factor that fits both axes
/// WHY: Pixel art should scale cleanly before padding
#[test]
fn given_integral_scaler_when_fitting_then_whole_factor_then_padding() {
    // Given: A 320x200 segment in a 1000x640 canvas
    let seg = segment("a", 320, 200, 1);

    // When: Fitting with the integral scaler
    let layout = SegmentLayout::fit(&seg, (1000, 640), Scaler::Integral);

    // Then: Factor 3 (960x600) and the rest is padding
    assert_eq!(layout.scaled, Some((960, 600)));
    assert_eq!(
        layout.borders,
        Borders {
            left: 20,
            top: 20,
            right: 20,
            bottom: 20
        }
    );
}

/// WHAT: The two-size scenario renders padded then plain expressions
/// WHY: Downstream tooling depends on field order and marker placement
#[test]
#[allow(clippy::unwrap_used)]
fn given_two_sizes_when_rendering_then_small_segment_padded_and_joined() {
    // Given: a.mp4 320x200 and b.mp4 640x400, both closed and capture stopped
    let mut session = two_size_session();
    session.begin_new_segment("next.mp4");

    // When: Rendering for an idle capture
    let script = render_script(session.segments(false), Scaler::None).unwrap();

    // Then: Exact text
    assert_eq!(
        script,
        "# longplay join script\n\
         FFVideoSource(\"a.mp4\").Trim(0, 99).AddBorders(160, 100, 160, 100) \\\n\
         ++ FFVideoSource(\"b.mp4\").Trim(0, 49)\n"
    );
}

/// WHAT: The live segment is joined last while capturing
/// WHY: A save mid-capture must include footage still being written
#[test]
#[allow(clippy::unwrap_used)]
fn given_active_capture_when_rendering_then_current_segment_last() {
    // Given: a.mp4 completed, b.mp4 still recording
    let session = two_size_session();

    // When: Rendering with and without the live segment
    let active = render_script(session.segments(true), Scaler::None).unwrap();
    let idle = render_script(session.segments(false), Scaler::None).unwrap();

    // Then: Only the active render contains b.mp4, at the end
    assert!(active.ends_with("++ FFVideoSource(\"b.mp4\").Trim(0, 49)\n"));
    assert!(!idle.contains("b.mp4"));
}

/// WHAT: Paths are emitted verbatim, with triple quotes when they contain a quote
/// WHY: AviSynth strings have no backslash escapes
#[test]
#[allow(clippy::unwrap_used)]
fn given_windows_path_with_quote_when_rendering_then_verbatim_triple_quoted() {
    // Given: One plain Windows path and one containing a quote
    let segments = [
        segment(r"C:\cap\a.avi", 320, 200, 2),
        segment(r#"C:\cap\a"b.avi"#, 320, 200, 3),
    ];

    // When: Rendering
    let script = render_script(&segments, Scaler::None).unwrap();

    // Then: Backslashes untouched, quoted path triple-quoted
    assert!(script.contains(r#"FFVideoSource("C:\cap\a.avi").Trim(0, 1)"#));
    assert!(script.contains(r#"FFVideoSource("""C:\cap\a"b.avi""").Trim(0, 2)"#));
}

/// WHAT: Integral scaling replaces padding when the factor fits exactly
/// WHY: The scaler setting changes only the per-segment fitting
#[test]
#[allow(clippy::unwrap_used)]
fn given_integral_scaler_when_rendering_then_point_resize_emitted() {
    // Given: The two-size session
    let session = two_size_session();

    // When: Rendering with the integral scaler
    let script = render_script(session.segments(true), Scaler::Integral).unwrap();

    // Then: a.mp4 is doubled instead of padded
    assert!(script.contains("FFVideoSource(\"a.mp4\").Trim(0, 99).PointResize(640, 400) \\\n"));
    assert!(!script.contains("AddBorders"));
}

/// WHAT: Sessions with no started segments produce no script
/// WHY: An empty join script would fail in the downstream tool
#[test]
fn given_only_unstarted_segments_when_rendering_then_none() {
    // Given: An unstarted placeholder
    let segments = [segment("", 0, 0, 0)];

    // When/Then: Nothing to render
    assert!(render_script(&segments, Scaler::None).is_none());
}

/// WHAT: Writing twice yields identical bytes
/// WHY: Script generation must be deterministic
#[test]
#[allow(clippy::unwrap_used)]
fn given_unchanged_session_when_writing_twice_then_identical_output() {
    // Given: A session and a temp output path
    let dir = tempfile::tempdir().unwrap();
    let settings = ScriptSettings {
        path: dir.path().join("join.avs"),
        scaler: Scaler::None,
    };
    let session = two_size_session();

    // When: Writing twice
    assert!(write_script(&session, true, &settings).unwrap());
    let first = std::fs::read(&settings.path).unwrap();
    assert!(write_script(&session, true, &settings).unwrap());
    let second = std::fs::read(&settings.path).unwrap();

    // Then: Byte-identical
    assert_eq!(first, second);
}

/// WHAT: An empty session writes no file
/// WHY: The absence of segments must not leave a stale or empty script
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_session_when_writing_then_no_file_created() {
    // Given: An empty session
    let dir = tempfile::tempdir().unwrap();
    let settings = ScriptSettings {
        path: dir.path().join("join.avs"),
        scaler: Scaler::None,
    };

    // When: Writing
    let written = write_script(&SessionState::new(), false, &settings).unwrap();

    // Then: Nothing written
    assert!(!written);
    assert!(!settings.path.exists());
}

/// WHAT: An unwritable path is reported as ScriptWriteFailure
/// WHY: Callers decide whether a missing script is fatal
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_directory_when_writing_then_script_write_failure() {
    // Given: A path inside a directory that does not exist
    let dir = tempfile::tempdir().unwrap();
    let settings = ScriptSettings {
        path: dir.path().join("missing").join("join.avs"),
        scaler: Scaler::None,
    };

    // When: Writing
    let result = write_script(&two_size_session(), true, &settings);

    // Then: Failure carries the path
    assert!(matches!(result, Err(LongplayError::ScriptWriteFailure { .. })));
}
