/// A navigation intent produced by the key router or a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    NextSection,
    PreviousSection,
    FirstSection,
    DocumentEnd,
}

/// Maps a key press to a navigation intent.
///
/// Returns `None` while focus is inside a text input or textarea so typing
/// never moves the page.
pub fn key_intent(key: &str, ctrl: bool, in_text_field: bool) -> Option<NavIntent> {
    if in_text_field {
        return None;
    }
    match (key, ctrl) {
        ("Home", true) => Some(NavIntent::FirstSection),
        ("End", true) => Some(NavIntent::DocumentEnd),
        ("PageDown", _) => Some(NavIntent::NextSection),
        ("PageUp", _) => Some(NavIntent::PreviousSection),
        ("ArrowDown", true) => Some(NavIntent::NextSection),
        ("ArrowUp", true) => Some(NavIntent::PreviousSection),
        _ => None,
    }
}

/// Per-sequence state for vertical swipe detection.
///
/// A sequence arms once vertical movement exceeds the arm threshold; at
/// touch end an armed sequence whose net delta exceeds the fire threshold
/// turns into a section change. Horizontal movement is ignored entirely.
#[derive(Debug)]
pub struct SwipeTracker {
    arm_px: f64,
    fire_px: f64,
    start_y: f64,
    armed: bool,
}

impl SwipeTracker {
    pub fn new(arm_px: f64, fire_px: f64) -> Self {
        Self {
            arm_px,
            fire_px,
            start_y: 0.0,
            armed: false,
        }
    }

    pub fn touch_start(&mut self, y: f64) {
        self.start_y = y;
        self.armed = false;
    }

    pub fn touch_move(&mut self, y: f64) {
        if (y - self.start_y).abs() > self.arm_px {
            self.armed = true;
        }
    }

    pub fn touch_end(&mut self, y: f64) -> Option<NavIntent> {
        if !self.armed {
            return None;
        }
        self.armed = false;
        let delta = self.start_y - y;
        if delta.abs() <= self.fire_px {
            return None;
        }
        if delta > 0.0 {
            // Swipe up: move down the page.
            Some(NavIntent::NextSection)
        } else {
            Some(NavIntent::PreviousSection)
        }
    }
}
