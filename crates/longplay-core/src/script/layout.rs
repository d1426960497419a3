use crate::CaptureSegment;

/// How undersized segments are fitted into the target canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scaler {
    /// Pad with borders only.
    #[default]
    None,
    /// Upscale by the largest whole factor that fits, then pad the rest.
    Integral,
}

/// Padding around a frame, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Borders {
    /// Left border.
    pub left: u32,
    /// Top border.
    pub top: u32,
    /// Right border.
    pub right: u32,
    /// Bottom border.
    pub bottom: u32,
}

impl Borders {
    /// Center `(width, height)` inside `(target_width, target_height)`.
    ///
    /// The trailing border takes the odd pixel. Dimensions larger than the
    /// target get no border on that axis.
    pub fn centered(width: u32, height: u32, target_width: u32, target_height: u32) -> Self {
        let (left, right) = split(target_width.saturating_sub(width));
        let (top, bottom) = split(target_height.saturating_sub(height));
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// All four borders are zero.
    pub fn is_empty(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }
}

fn split(difference: u32) -> (u32, u32) {
    let leading = difference / 2;
    (leading, difference - leading)
}

/// How one segment is placed on the common canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentLayout {
    /// Size after scaling, if the segment is scaled at all.
    pub scaled: Option<(u32, u32)>,
    /// Padding applied after scaling.
    pub borders: Borders,
}

impl SegmentLayout {
    /// Fit `segment` into the `(target_width, target_height)` canvas.
    pub fn fit(segment: &CaptureSegment, target: (u32, u32), scaler: Scaler) -> Self {
        let (target_width, target_height) = target;
        let (mut width, mut height) = (segment.width, segment.height);

        let factor = match scaler {
            Scaler::None => 1,
            Scaler::Integral if width == 0 || height == 0 => 1,
            Scaler::Integral => (target_width / width).min(target_height / height).max(1),
        };

        let scaled = if factor > 1 {
            width *= factor;
            height *= factor;
            Some((width, height))
        } else {
            None
        };

        Self {
            scaled,
            borders: Borders::centered(width, height, target_width, target_height),
        }
    }
}

/// Largest width and height across `segments`, taken independently.
pub fn target_size<'a>(segments: impl IntoIterator<Item = &'a CaptureSegment>) -> (u32, u32) {
    segments
        .into_iter()
        .fold((0, 0), |(w, h), s| (w.max(s.width), h.max(s.height)))
}
