/// Horizontal carousel strip state
///
/// Tracks the strip's scroll geometry and derives which arrow controls
/// are currently useful. Geometry comes from three places: the
/// scrollable's own viewport notifications (exact), window resizes, and
/// an estimate from the item count once the catalog arrives.

use std::time::Duration;

use super::catalog::Feed;
use super::data::ImageItem;

/// Distance (px) from either end under which an arrow is hidden
pub const EDGE_THRESHOLD: f32 = 10.0;

/// Default arrow step (px)
pub const DEFAULT_STEP: f32 = 280.0;

/// The atmosphere strip moves a little further per press
pub const ATMOSPHERE_STEP: f32 = 320.0;

/// Card geometry shared with the strip view
pub const CARD_WIDTH: f32 = 280.0;
pub const CARD_GAP: f32 = 16.0;

/// Delay before re-measuring once freshly loaded cards are laid out
pub const RECHECK_DELAY: Duration = Duration::from_millis(50);

/// Frame interval of the smooth scroll animation
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Scroll geometry of a strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Current horizontal scroll offset
    pub offset: f32,
    /// Width of the visible window onto the strip
    pub visible_width: f32,
    /// Width of the whole strip
    pub content_width: f32,
}

impl ScrollMetrics {
    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.visible_width).max(0.0)
    }
}

/// Which arrow controls to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordance {
    pub left: bool,
    pub right: bool,
}

impl Affordance {
    /// Before anything is measured: assume the strip starts at the beginning
    /// and overflows to the right.
    pub fn initial() -> Self {
        Self {
            left: false,
            right: true,
        }
    }

    pub fn from_metrics(metrics: &ScrollMetrics) -> Self {
        Self {
            left: metrics.offset > EDGE_THRESHOLD,
            right: metrics.offset + metrics.visible_width
                < metrics.content_width - EDGE_THRESHOLD,
        }
    }
}

/// Arrow step of a feed's strip when the settings don't override it
pub fn default_step(feed: Feed) -> f32 {
    match feed {
        Feed::Atmosphere => ATMOSPHERE_STEP,
        Feed::Decoration | Feed::Gallery => DEFAULT_STEP,
    }
}

/// Estimated strip width for `count` cards
pub fn estimated_content_width(count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    count as f32 * CARD_WIDTH + (count - 1) as f32 * CARD_GAP
}

/// Amount to scroll during one animation frame.
/// Eases out: a quarter of what is left, at least 2px, never overshooting.
pub fn frame_delta(remaining: f32) -> f32 {
    let magnitude = remaining.abs();
    if magnitude <= 2.0 {
        return remaining;
    }
    (magnitude * 0.25).max(2.0).min(magnitude) * remaining.signum()
}

/// One carousel on the home screen
#[derive(Debug)]
pub struct Carousel {
    feed: Feed,
    items: Vec<ImageItem>,
    offset: f32,
    visible_width: Option<f32>,
    content_width: Option<f32>,
    affordance: Affordance,
    /// Distance still to travel in the current smooth scroll
    remaining: f32,
    step: f32,
}

impl Carousel {
    pub fn new(feed: Feed, step: f32) -> Self {
        Self {
            feed,
            items: Vec::new(),
            offset: 0.0,
            visible_width: None,
            content_width: None,
            affordance: Affordance::initial(),
            remaining: 0.0,
            step,
        }
    }

    pub fn feed(&self) -> Feed {
        self.feed
    }

    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    pub fn affordance(&self) -> Affordance {
        self.affordance
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn metrics(&self) -> Option<ScrollMetrics> {
        Some(ScrollMetrics {
            offset: self.offset,
            visible_width: self.visible_width?,
            content_width: self.content_width?,
        })
    }

    /// Catalog arrived: estimate the strip width until the real layout reports
    pub fn set_items(&mut self, items: Vec<ImageItem>) {
        self.content_width = Some(estimated_content_width(items.len()));
        self.items = items;
        self.recheck();
    }

    /// Exact geometry reported by the scrollable
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.offset = metrics.offset;
        self.visible_width = Some(metrics.visible_width);
        self.content_width = Some(metrics.content_width);
        self.recheck();
    }

    /// The strip's visible width changed with the window
    pub fn on_resize(&mut self, visible_width: f32) {
        self.visible_width = Some(visible_width.max(0.0));
        if let Some(metrics) = self.metrics() {
            self.offset = self.offset.min(metrics.max_offset());
        }
        self.recheck();
    }

    /// Recompute the arrow controls from the last known geometry
    pub fn recheck(&mut self) {
        if let Some(metrics) = self.metrics() {
            self.affordance = Affordance::from_metrics(&metrics);
        }
    }

    /// Start a smooth scroll by `amount` px. The target never leaves the strip.
    pub fn scroll_by(&mut self, amount: f32) {
        let target = self.offset + self.remaining + amount;
        let target = match self.metrics() {
            Some(metrics) => target.clamp(0.0, metrics.max_offset()),
            None => target.max(0.0),
        };

        self.remaining = target - self.offset;
        tracing::debug!(feed = ?self.feed, amount, remaining = self.remaining, "carousel scroll");
    }

    pub fn is_animating(&self) -> bool {
        self.remaining != 0.0
    }

    /// Advance the animation one frame. Returns the delta to apply, if any.
    pub fn tick(&mut self) -> Option<f32> {
        if !self.is_animating() {
            return None;
        }

        let delta = frame_delta(self.remaining);
        self.remaining -= delta;
        if self.remaining.abs() < f32::EPSILON {
            self.remaining = 0.0;
        }
        self.offset += delta;
        self.recheck();
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn metrics(offset: f32, visible_width: f32, content_width: f32) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            visible_width,
            content_width,
        }
    }

    fn loaded(count: usize, visible_width: f32) -> Carousel {
        let mut carousel = Carousel::new(Feed::Atmosphere, DEFAULT_STEP);
        carousel.on_resize(visible_width);
        carousel.set_items(Feed::Atmosphere.fallback().into_iter().cycle().take(count).collect());
        carousel
    }

    #[test]
    fn test_initial_affordance() {
        let carousel = Carousel::new(Feed::Decoration, DEFAULT_STEP);
        assert_eq!(carousel.affordance(), Affordance::initial());
    }

    #[test]
    fn test_edges() {
        assert!(!Affordance::from_metrics(&metrics(10.0, 500.0, 2000.0)).left);
        assert!(Affordance::from_metrics(&metrics(10.5, 500.0, 2000.0)).left);
        assert!(!Affordance::from_metrics(&metrics(1490.0, 500.0, 2000.0)).right);
        assert!(Affordance::from_metrics(&metrics(1489.0, 500.0, 2000.0)).right);
    }

    #[test]
    fn test_content_that_fits_hides_both_arrows() {
        let carousel = loaded(1, 900.0);
        assert_eq!(carousel.affordance(), Affordance { left: false, right: false });
    }

    #[test]
    fn test_overflowing_content_shows_right_arrow() {
        let carousel = loaded(6, 900.0);
        assert_eq!(carousel.affordance(), Affordance { left: false, right: true });
    }

    #[test]
    fn test_scroll_notification_updates_affordance() {
        let mut carousel = loaded(6, 900.0);
        carousel.on_scroll(metrics(300.0, 900.0, 1760.0));
        assert_eq!(carousel.affordance(), Affordance { left: true, right: true });

        carousel.on_scroll(metrics(860.0, 900.0, 1760.0));
        assert_eq!(carousel.affordance(), Affordance { left: true, right: false });
    }

    #[test]
    fn test_resize_rechecks() {
        let mut carousel = loaded(3, 600.0);
        assert!(carousel.affordance().right);

        carousel.on_resize(1200.0);
        assert!(!carousel.affordance().right);
    }

    #[test]
    fn test_scroll_by_does_not_wrap() {
        let mut carousel = loaded(6, 900.0);

        carousel.scroll_by(-DEFAULT_STEP);
        assert!(!carousel.is_animating());

        carousel.on_scroll(metrics(800.0, 900.0, 1760.0));
        carousel.scroll_by(DEFAULT_STEP);
        let travelled: f32 = std::iter::from_fn(|| carousel.tick()).sum();
        assert!((travelled - 60.0).abs() < 0.01);
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut carousel = loaded(10, 900.0);
        assert!(!carousel.affordance().left);
        carousel.scroll_by(DEFAULT_STEP);

        let deltas: Vec<f32> = std::iter::from_fn(|| carousel.tick()).collect();

        assert!(deltas.len() > 1);
        assert!((deltas.iter().sum::<f32>() - DEFAULT_STEP).abs() < 0.01);
        assert!(!carousel.is_animating());
        assert!(carousel.affordance().left);
    }

    #[test]
    fn test_animation_hides_right_arrow_at_end() {
        let mut carousel = loaded(6, 900.0);
        carousel.on_scroll(metrics(700.0, 900.0, 1760.0));
        assert!(carousel.affordance().right);

        carousel.scroll_by(DEFAULT_STEP);
        while carousel.tick().is_some() {}

        assert!(!carousel.affordance().right);
    }

    #[test]
    fn test_feed_steps() {
        assert_eq!(default_step(Feed::Decoration), 280.0);
        assert_eq!(default_step(Feed::Atmosphere), 320.0);
    }

    proptest! {
        #[test]
        fn prop_arrows_hidden_near_edges(offset in 0.0f32..5000.0, visible in 1.0f32..2000.0, extra in 0.0f32..5000.0) {
            let content = visible + extra;
            let offset = offset.min(extra);
            let affordance = Affordance::from_metrics(&metrics(offset, visible, content));

            if offset <= EDGE_THRESHOLD {
                prop_assert!(!affordance.left);
            }
            if offset + visible >= content - EDGE_THRESHOLD {
                prop_assert!(!affordance.right);
            }
        }

        #[test]
        fn prop_frame_delta_never_overshoots(remaining in -2000.0f32..2000.0) {
            let delta = frame_delta(remaining);
            prop_assert!(delta.abs() <= remaining.abs());
            prop_assert!(delta == 0.0 || delta.signum() == remaining.signum());
        }
    }
}
