//! Scroll-linked horizontal panner with pinned viewport.
//!
//! While the trigger region is pinned, normalized scroll progress maps
//! linearly onto a negative horizontal translation of the content
//! strip. Per-child entrance reveals are computed against the composite
//! (pin + pan) progress, never against raw page scroll.

use tracing::debug;

/// Fraction of the viewport a child's leading edge must cross before
/// its entrance reveal triggers.
pub const CHILD_REVEAL_VIEWPORT_FRACTION: f32 = 0.95;

/// Measured extents of the panned surface, replaced wholesale on every
/// (re)layout rather than mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanMapping {
    pub track_extent: f32,
    pub viewport_extent: f32,
    /// `max(track - viewport, 0)`: a strip narrower than the viewport
    /// degenerates to a no-op mapping, never a negative range.
    pub scrollable_range: f32,
}

impl PanMapping {
    pub fn from_extents(track_extent: f32, viewport_extent: f32) -> Self {
        Self {
            track_extent,
            viewport_extent,
            scrollable_range: (track_extent - viewport_extent).max(0.0),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.scrollable_range <= 0.0
    }
}

/// Layout measurements handed to the panner once the strip's children
/// are attached and one rendering pass has completed.
#[derive(Debug, Clone, PartialEq)]
pub struct PanLayout {
    pub track_extent: f32,
    pub viewport_extent: f32,
    /// Leading-edge offsets of the strip's children, in strip space.
    pub child_offsets: Vec<f32>,
}

/// Scroll-progress-driven panner for one content strip.
///
/// Built in an awaiting-layout state: until [`layout_ready`] delivers
/// measured extents, every mapping query is a no-op (translation 0,
/// nothing pinned, no child reveals). Measuring before attachment would
/// observe a zero scrollable range, so the deferral is part of the
/// contract, not an optimization.
///
/// [`layout_ready`]: ScrollPanner::layout_ready
#[derive(Debug, Clone)]
pub struct ScrollPanner {
    mapping: Option<PanMapping>,
    child_offsets: Vec<f32>,
    revealed: Vec<bool>,
}

impl Default for ScrollPanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollPanner {
    pub fn new() -> Self {
        Self {
            mapping: None,
            child_offsets: Vec::new(),
            revealed: Vec::new(),
        }
    }

    /// Whether a layout pass has produced a valid mapping yet.
    pub fn is_ready(&self) -> bool {
        self.mapping.is_some()
    }

    pub fn mapping(&self) -> Option<&PanMapping> {
        self.mapping.as_ref()
    }

    /// Accept the one-shot post-layout measurement. Child reveal state
    /// starts untriggered.
    pub fn layout_ready(&mut self, layout: PanLayout) {
        debug!(
            track = layout.track_extent,
            viewport = layout.viewport_extent,
            children = layout.child_offsets.len(),
            "panner layout ready"
        );
        self.revealed = vec![false; layout.child_offsets.len()];
        self.install(layout);
    }

    /// Replace the mapping after a viewport resize. Children that have
    /// already revealed stay revealed; the new extents only affect
    /// future trigger positions.
    pub fn relayout(&mut self, layout: PanLayout) {
        debug!(
            track = layout.track_extent,
            viewport = layout.viewport_extent,
            "panner relayout"
        );
        self.revealed.resize(layout.child_offsets.len(), false);
        self.install(layout);
    }

    fn install(&mut self, layout: PanLayout) {
        self.mapping = Some(PanMapping::from_extents(
            layout.track_extent,
            layout.viewport_extent,
        ));
        self.child_offsets = layout.child_offsets;
    }

    /// Horizontal translation of the strip for progress `p`: exactly 0
    /// at `p = 0` and exactly `-scrollable_range` at `p = 1`. Before
    /// layout, or for a degenerate mapping, always 0.
    pub fn translation(&self, progress: f32) -> f32 {
        match &self.mapping {
            Some(mapping) => -progress.clamp(0.0, 1.0) * mapping.scrollable_range,
            None => 0.0,
        }
    }

    /// Scroll distance consumed while the region stays pinned.
    pub fn pin_span(&self) -> f32 {
        self.mapping
            .as_ref()
            .map(|m| m.scrollable_range)
            .unwrap_or(0.0)
    }

    /// The region is held fixed in the viewport while progress is in
    /// range and there is anything to pan over.
    pub fn is_pinned(&self, progress: f32) -> bool {
        match &self.mapping {
            Some(mapping) => {
                !mapping.is_noop() && (0.0..1.0).contains(&progress)
            }
            None => false,
        }
    }

    /// Composite progress at which child `i`'s entrance reveal
    /// triggers, or `None` while unmapped / degenerate.
    pub fn child_trigger_progress(&self, child: usize) -> Option<f32> {
        let mapping = self.mapping.as_ref()?;
        if mapping.is_noop() {
            return None;
        }
        let offset = *self.child_offsets.get(child)?;
        let threshold = CHILD_REVEAL_VIEWPORT_FRACTION * mapping.viewport_extent;
        Some(((offset - threshold) / mapping.scrollable_range).clamp(0.0, 1.0))
    }

    /// Advance to progress `p` and collect the children whose entrance
    /// reveal triggers now. Each child triggers at most once. Absent
    /// surface or children: silent no-op.
    pub fn advance(&mut self, progress: f32) -> Vec<usize> {
        let p = progress.clamp(0.0, 1.0);
        let mut triggered = Vec::new();
        for child in 0..self.child_offsets.len() {
            if self.revealed[child] {
                continue;
            }
            let Some(at) = self.child_trigger_progress(child) else {
                continue;
            };
            if p >= at {
                self.revealed[child] = true;
                triggered.push(child);
            }
        }
        triggered
    }

    /// Whether child `i` has already been entrance-revealed.
    pub fn is_revealed(&self, child: usize) -> bool {
        self.revealed.get(child).copied().unwrap_or(false)
    }
}
