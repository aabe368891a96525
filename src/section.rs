/// A top-level page region with a stable id, measured from layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Maps a scroll offset to the current section.
///
/// The offset gets a fixed lookahead bias so a section counts as current
/// slightly before its top edge reaches the top of the viewport. When the
/// biased offset falls between sections the previous value is retained
/// rather than cleared, so indicators never all go dark once a section has
/// been entered.
#[derive(Debug, Default)]
pub struct SectionTracker {
    sections: Vec<Section>,
    bias: f64,
    current: Option<usize>,
}

impl SectionTracker {
    pub fn new(bias: f64) -> Self {
        Self {
            sections: Vec::new(),
            bias,
            current: None,
        }
    }

    /// Replaces the measured sections, e.g. after a resize. The current
    /// index is re-resolved by id so a re-measure doesn't reset tracking.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.current = self.current.and_then(|i| {
            let id = &self.sections.get(i)?.id;
            sections.iter().position(|s| &s.id == id)
        });
        self.sections = sections;
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Recomputes the current section for the given scroll offset.
    pub fn update(&mut self, offset: f64) -> Option<&str> {
        let position = offset + self.bias;
        if let Some(i) = self.sections.iter().position(|s| s.contains(position)) {
            self.current = Some(i);
        }
        self.current_id()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current
            .and_then(|i| self.sections.get(i))
            .map(|s| s.id.as_str())
    }

    /// Index of the section after the current one, clamped at the end.
    /// Before any section has been entered this is the first section.
    pub fn next_index(&self) -> Option<usize> {
        if self.sections.is_empty() {
            return None;
        }
        match self.current {
            None => Some(0),
            Some(i) if i + 1 < self.sections.len() => Some(i + 1),
            Some(_) => None,
        }
    }

    /// Index of the section before the current one. At the first section
    /// (or before any) there is nowhere to go.
    pub fn previous_index(&self) -> Option<usize> {
        match self.current {
            Some(i) if i > 0 => Some(i - 1),
            _ => None,
        }
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }
}

/// Progress bar width as a percentage of the scrollable height, clamped to [0, 100].
pub fn progress_percent(offset: f64, scrollable_height: f64) -> f64 {
    if scrollable_height <= 0.0 {
        return 0.0;
    }
    (100.0 * offset / scrollable_height).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sections() -> Vec<Section> {
        vec![
            Section {
                id: "a".into(),
                top: 0.0,
                height: 100.0,
            },
            Section {
                id: "b".into(),
                top: 100.0,
                height: 200.0,
            },
        ]
    }

    #[test]
    fn bias_pushes_offset_zero_into_second_section() {
        let mut tracker = SectionTracker::new(100.0);
        tracker.set_sections(two_sections());
        // 0 + 100 lands exactly on b's half-open start.
        assert_eq!(tracker.update(0.0), Some("b"));
    }

    #[test]
    fn offset_past_all_sections_is_sticky() {
        let mut tracker = SectionTracker::new(100.0);
        tracker.set_sections(two_sections());
        tracker.update(0.0);
        // 250 + 100 = 350 falls outside both ranges; keep the last value.
        assert_eq!(tracker.update(250.0), Some("b"));
    }

    #[test]
    fn no_current_before_any_match() {
        let mut tracker = SectionTracker::new(100.0);
        tracker.set_sections(vec![Section {
            id: "a".into(),
            top: 500.0,
            height: 100.0,
        }]);
        assert_eq!(tracker.update(0.0), None);
        assert_eq!(tracker.current_index(), None);
    }

    #[test]
    fn next_and_previous_clamp_at_boundaries() {
        let mut tracker = SectionTracker::new(100.0);
        tracker.set_sections(two_sections());

        // Nothing entered yet: next starts at the first section, previous is a no-op.
        assert_eq!(tracker.next_index(), Some(0));
        assert_eq!(tracker.previous_index(), None);

        tracker.update(0.0); // current = b, the last section
        assert_eq!(tracker.next_index(), None);
        assert_eq!(tracker.previous_index(), Some(0));

        tracker.update(0.0);
        assert_eq!(tracker.current_id(), Some("b"));
    }

    #[test]
    fn remeasure_keeps_current_by_id() {
        let mut tracker = SectionTracker::new(100.0);
        tracker.set_sections(two_sections());
        tracker.update(0.0);

        // Layout shifted and a new section appeared above b.
        tracker.set_sections(vec![
            Section {
                id: "intro".into(),
                top: 0.0,
                height: 300.0,
            },
            Section {
                id: "a".into(),
                top: 300.0,
                height: 100.0,
            },
            Section {
                id: "b".into(),
                top: 400.0,
                height: 200.0,
            },
        ]);
        assert_eq!(tracker.current_id(), Some("b"));
        assert_eq!(tracker.current_index(), Some(2));
    }

    #[test]
    fn empty_tracker_has_no_navigation() {
        let mut tracker = SectionTracker::new(100.0);
        assert_eq!(tracker.update(0.0), None);
        assert_eq!(tracker.next_index(), None);
        assert_eq!(tracker.previous_index(), None);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_percent(0.0, 1000.0), 0.0);
        assert_eq!(progress_percent(500.0, 1000.0), 50.0);
        assert_eq!(progress_percent(1200.0, 1000.0), 100.0);
        assert_eq!(progress_percent(-5.0, 1000.0), 0.0);
        // Page shorter than the viewport has nothing to scroll.
        assert_eq!(progress_percent(10.0, 0.0), 0.0);
    }
}
