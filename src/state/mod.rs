/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Catalog JSON loading with static defaults (catalog.rs)
/// - Gallery filter and lightbox state machine (gallery.rs)
/// - Carousel scroll geometry and arrow controls (carousel.rs)
/// - Events programme, detail modal and host form link (events.rs)
/// - Transient notifications (toast.rs)
/// - Page scroll lock ownership (overlay.rs)

pub mod data;
pub mod catalog;
pub mod gallery;
pub mod carousel;
pub mod events;
pub mod toast;
pub mod overlay;
