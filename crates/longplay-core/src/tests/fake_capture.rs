use crate::CaptureControl;

/// Calls observed by [`FakeCapture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CaptureCall {
    Toggle,
    ForceInactive,
}

/// In-memory capture that records every call it receives.
#[derive(Debug, Default)]
pub(crate) struct FakeCapture {
    pub(crate) active: bool,
    pub(crate) calls: Vec<CaptureCall>,
    /// When set, toggles are recorded but do not change state.
    pub(crate) stuck: bool,
}

impl FakeCapture {
    pub(crate) fn active() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    pub(crate) fn idle() -> Self {
        Self::default()
    }

    pub(crate) fn toggles(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == CaptureCall::Toggle)
            .count()
    }
}

impl CaptureControl for FakeCapture {
    fn is_active(&self) -> bool {
        self.active
    }

    fn request_toggle(&mut self) {
        self.calls.push(CaptureCall::Toggle);
        if !self.stuck {
            self.active = !self.active;
        }
    }

    fn force_inactive(&mut self) {
        self.calls.push(CaptureCall::ForceInactive);
        self.active = false;
    }
}
