pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Largest ratio among `(is_intersecting, ratio)` entries that intersect.
/// `None` when no entry intersects.
pub fn strongest_intersection(entries: impl IntoIterator<Item = (bool, f64)>) -> Option<f64> {
    entries
        .into_iter()
        .filter(|(intersecting, _)| *intersecting)
        .map(|(_, ratio)| ratio)
        .reduce(f64::max)
}

/// NaN never reaches a threshold.
pub fn reaches_threshold(ratio: f64, threshold: f64) -> bool {
    ratio >= threshold
}

/// One-way reveal flag. Once visible it stays visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    visible: bool,
}

impl VisibilityState {
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Returns `true` only for the observation that flips the flag.
    pub fn observe(&mut self, ratio: f64, threshold: f64) -> bool {
        if self.visible || !reaches_threshold(ratio, threshold) {
            return false;
        }

        self.visible = true;
        true
    }
}

/// Index of the card under the pointer, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    index: Option<usize>,
}

impl HoverState {
    pub fn current(self) -> Option<usize> {
        self.index
    }

    pub fn is_hovered(self, index: usize) -> bool {
        self.index == Some(index)
    }

    pub fn enter(&mut self, index: usize) -> bool {
        let changed = self.index != Some(index);
        self.index = Some(index);
        changed
    }

    pub fn leave(&mut self) -> bool {
        self.index.take().is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShowcaseAction {
    Intersect { ratio: f64 },
    PointerEnter(usize),
    PointerLeave,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShowcaseState {
    pub visibility: VisibilityState,
    pub hover: HoverState,
    threshold: f64,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}

impl ShowcaseState {
    pub fn new(threshold: f64) -> Self {
        Self {
            visibility: VisibilityState::default(),
            hover: HoverState::default(),
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Applies `action` and reports whether anything observable changed.
    pub fn apply(&mut self, action: ShowcaseAction) -> bool {
        match action {
            ShowcaseAction::Intersect { ratio } => self.visibility.observe(ratio, self.threshold),
            ShowcaseAction::PointerEnter(index) => self.hover.enter(index),
            ShowcaseAction::PointerLeave => self.hover.leave(),
        }
    }
}
