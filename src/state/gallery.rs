/// Filterable gallery and lightbox state machine
///
/// The gallery is either `Browsing` (grid visible) or `Viewing(index)`
/// where `index` always points into the *filtered* sequence. While
/// browsing, a keyboard focus walks the grid and confirm opens the focused
/// item. Facets and
/// the filtered sequence are pure derivations of the catalog and the
/// active filter.

use super::data::ImageItem;
use super::overlay::{Overlay, OverlayManager};

/// Filter sentinel that shows the whole catalog
pub const ALL: &str = "All";

/// Horizontal displacement (px) a swipe must exceed to navigate
pub const SWIPE_THRESHOLD: f32 = 40.0;

/// Distinct categories usable as filters: "All" first, then first-seen order
pub fn facets(items: &[ImageItem]) -> Vec<String> {
    let mut facets = vec![ALL.to_string()];

    for category in items.iter().filter_map(|item| item.category.as_deref()) {
        if !category.is_empty() && !facets.iter().any(|f| f == category) {
            facets.push(category.to_string());
        }
    }

    facets
}

/// Items matching a filter, in catalog order
pub fn filtered<'a>(items: &'a [ImageItem], filter: &str) -> Vec<&'a ImageItem> {
    if filter == ALL {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| item.category.as_deref() == Some(filter))
        .collect()
}

/// Direction of a lightbox navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// Map a horizontal swipe displacement to a navigation step.
/// Dragging right (positive dx) goes back, dragging left goes forward.
pub fn classify_swipe(dx: f32) -> Option<Step> {
    if dx > SWIPE_THRESHOLD {
        Some(Step::Previous)
    } else if dx < -SWIPE_THRESHOLD {
        Some(Step::Next)
    } else {
        None
    }
}

/// Move an index one step, wrapping modulo `count`. None when `count` is 0.
pub fn step_index(index: usize, count: usize, step: Step) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let index = index.min(count - 1);
    Some(match step {
        Step::Previous => (index + count - 1) % count,
        Step::Next => (index + 1) % count,
    })
}

/// Lightbox visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lightbox {
    Browsing,
    Viewing(usize),
}

/// Gallery screen state
#[derive(Debug)]
pub struct Gallery {
    items: Vec<ImageItem>,
    filter: String,
    lightbox: Lightbox,
    /// Grid item under keyboard focus, an index into the filtered sequence
    focused: Option<usize>,
    /// Start x of an in-progress touch swipe
    swipe_origin: Option<f32>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: ALL.to_string(),
            lightbox: Lightbox::Browsing,
            focused: None,
            swipe_origin: None,
        }
    }
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog (one-shot load result)
    pub fn set_items(&mut self, items: Vec<ImageItem>, overlays: &mut OverlayManager) {
        self.items = items;
        self.reconcile(overlays);
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn facets(&self) -> Vec<String> {
        facets(&self.items)
    }

    pub fn visible(&self) -> Vec<&ImageItem> {
        filtered(&self.items, &self.filter)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Move the grid focus one step, wrapping. Without a focus, Next lands
    /// on the first item and Previous on the last. Ignored while viewing.
    pub fn move_focus(&mut self, step: Step) {
        if matches!(self.lightbox, Lightbox::Viewing(_)) {
            return;
        }

        let count = self.visible_count();
        self.focused = match (self.focused, step) {
            _ if count == 0 => None,
            (None, Step::Next) => Some(0),
            (None, Step::Previous) => Some(count - 1),
            (Some(index), step) => step_index(index, count, step),
        };
    }

    /// Keyboard confirm on the grid
    pub fn open_focused(&mut self, overlays: &mut OverlayManager) -> bool {
        match self.focused {
            Some(index) => self.open(index, overlays),
            None => false,
        }
    }

    /// Change the active filter.
    ///
    /// If the lightbox is open, its index is clamped to the new filtered
    /// sequence; an empty sequence closes it.
    pub fn set_filter(&mut self, filter: &str, overlays: &mut OverlayManager) {
        self.filter = filter.to_string();
        self.reconcile(overlays);
    }

    /// Open the lightbox on a visible item
    pub fn open(&mut self, index: usize, overlays: &mut OverlayManager) -> bool {
        if index >= self.visible_count() {
            return false;
        }

        self.lightbox = Lightbox::Viewing(index);
        self.focused = Some(index);
        overlays.acquire(Overlay::Lightbox);
        tracing::debug!(index, filter = %self.filter, "lightbox opened");
        true
    }

    /// Back to the grid, with focus on the item last shown
    pub fn close(&mut self, overlays: &mut OverlayManager) {
        if let Lightbox::Viewing(index) = self.lightbox {
            self.focused = Some(index);
        }
        self.lightbox = Lightbox::Browsing;
        self.swipe_origin = None;
        overlays.release(Overlay::Lightbox);
    }

    /// Move to the previous/next visible item. No-op while browsing or empty.
    pub fn navigate(&mut self, step: Step) {
        if let Lightbox::Viewing(index) = self.lightbox {
            if let Some(next) = step_index(index, self.visible_count(), step) {
                self.lightbox = Lightbox::Viewing(next);
            }
        }
    }

    /// The item currently shown in the lightbox
    pub fn current(&self) -> Option<&ImageItem> {
        match self.lightbox {
            Lightbox::Viewing(index) => self.visible().get(index).copied(),
            Lightbox::Browsing => None,
        }
    }

    pub fn begin_swipe(&mut self, x: f32) {
        if matches!(self.lightbox, Lightbox::Viewing(_)) {
            self.swipe_origin = Some(x);
        }
    }

    /// Finish a swipe and navigate if it was long enough
    pub fn end_swipe(&mut self, x: f32) -> Option<Step> {
        let origin = self.swipe_origin.take()?;
        let step = classify_swipe(x - origin)?;
        self.navigate(step);
        Some(step)
    }

    /// "1 item" / "12 items"
    pub fn count_label(&self) -> String {
        let count = self.visible_count();
        format!("{} item{}", count, if count == 1 { "" } else { "s" })
    }

    /// Shown under the grid when the filter matches nothing
    pub fn empty_message(&self) -> Option<String> {
        (self.visible_count() == 0).then(|| format!("No images found for {}.", self.filter))
    }

    /// Lightbox header, e.g. "2 / 7 — Neon Bar"
    pub fn position_label(&self) -> Option<String> {
        let Lightbox::Viewing(index) = self.lightbox else {
            return None;
        };
        let item = self.current()?;

        Some(format!(
            "{} / {} — {}",
            index + 1,
            self.visible_count(),
            item.caption.as_deref().unwrap_or_default()
        ))
    }

    /// Keep the open index and the grid focus valid for the current
    /// filtered sequence
    fn reconcile(&mut self, overlays: &mut OverlayManager) {
        let count = self.visible_count();
        if let Lightbox::Viewing(index) = self.lightbox {
            if count == 0 {
                self.close(overlays);
            } else if index >= count {
                self.lightbox = Lightbox::Viewing(count - 1);
            }
        }

        self.focused = match self.focused {
            Some(_) if count == 0 => None,
            focused => focused.map(|index| index.min(count - 1)),
        };
    }
}
