use std::time::Duration;

/// How long a toast stays up unless dismissed
pub const TOAST_TTL: Duration = Duration::from_millis(3500);

/// A single transient notification.
///
/// Each `show` bumps the generation; an expiry timer only clears the toast
/// it was started for, so a replaced toast keeps its full lifetime.
#[derive(Debug, Default)]
pub struct Toast {
    message: Option<String>,
    generation: u64,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, replacing any current one. Returns the generation
    /// to hand to the expiry timer.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = Some(message.into());
        self.generation
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    /// Timer fired for `generation`. Returns true if it cleared the toast.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_clears_message() {
        let mut toast = Toast::new();
        let generation = toast.show("Opening form…");

        assert!(toast.expire(generation));
        assert_eq!(toast.message(), None);
    }

    #[test]
    fn test_new_toast_replaces_and_outlives_stale_timer() {
        let mut toast = Toast::new();
        let first = toast.show("first");
        let second = toast.show("second");

        assert_eq!(toast.message(), Some("second"));
        assert!(!toast.expire(first));
        assert_eq!(toast.message(), Some("second"));
        assert!(toast.expire(second));
    }

    #[test]
    fn test_dismiss_before_expiry() {
        let mut toast = Toast::new();
        let generation = toast.show("bye");

        toast.dismiss();

        assert_eq!(toast.message(), None);
        assert!(!toast.expire(generation));
    }

    #[test]
    fn test_ttl() {
        assert_eq!(TOAST_TTL.as_secs_f32(), 3.5);
    }
}
