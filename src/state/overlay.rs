/// Page scroll lock ownership
///
/// Every modal surface (lightbox, event details) registers itself here while
/// it is open. The page scroll is locked as long as at least one overlay is
/// registered, so closing one overlay can never unlock the page underneath
/// another one.

/// The modal surfaces that can lock the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Lightbox,
    EventDetails,
}

/// Reference-counted scroll lock with one slot per overlay kind
#[derive(Debug, Default)]
pub struct OverlayManager {
    held: Vec<Overlay>,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an overlay. Returns false if it was already registered.
    pub fn acquire(&mut self, overlay: Overlay) -> bool {
        if self.held.contains(&overlay) {
            return false;
        }

        self.held.push(overlay);
        tracing::debug!(?overlay, holders = self.held.len(), "scroll lock acquired");
        true
    }

    /// Unregister an overlay. Releasing an overlay that is not held is a no-op.
    pub fn release(&mut self, overlay: Overlay) -> bool {
        let before = self.held.len();
        self.held.retain(|held| *held != overlay);

        let released = self.held.len() != before;
        if released {
            tracing::debug!(?overlay, holders = self.held.len(), "scroll lock released");
        }
        released
    }

    /// Whether the page underneath must stay still
    pub fn is_locked(&self) -> bool {
        !self.held.is_empty()
    }

    #[cfg(test)]
    pub fn holds(&self, overlay: Overlay) -> bool {
        self.held.contains(&overlay)
    }
}
