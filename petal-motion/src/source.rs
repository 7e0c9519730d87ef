//! Seam to the external scroll-observation service.
//!
//! The motion core never polls scroll positions itself; a source
//! implementation (real or simulated) pushes normalized progress into a
//! subscriber callback as a trigger region moves through its
//! thresholds. If no source is available the panner is simply never
//! wired, degrading to static content.

/// Identifies a trigger region on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionId(pub String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where, on the page, a region's progress starts and ends, and
/// whether the region is pinned while in range.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollBinding {
    pub region: RegionId,
    /// Lead distance in page pixels before the region's top at which
    /// progress leaves 0. Zero means progress starts exactly when the
    /// scroll offset reaches the region.
    pub start: f32,
    /// Scroll distance (pixels) over which progress runs to 1.
    pub span: f32,
    /// Hold the region fixed while progress is in `[0, 1)`.
    pub pin: bool,
}

/// Callback invoked with normalized progress in `[0, 1]`.
pub type ProgressCallback = Box<dyn FnMut(f32) + Send>;

/// External scroll-observation capability.
///
/// Implementations own the delivery cadence; subscribers only see
/// normalized progress. Dropping the returned subscription tears the
/// binding down, which ties its lifetime to the trigger region's.
pub trait ScrollProgressSource {
    /// Opaque handle keeping the subscription alive.
    type Subscription;

    fn subscribe(
        &mut self,
        binding: ScrollBinding,
        on_progress: ProgressCallback,
    ) -> Self::Subscription;
}
