mod layout;
mod writer;

pub use {
    layout::{Borders, Scaler, SegmentLayout, target_size},
    writer::{ScriptSettings, render_script, write_script, write_segments_script},
};
