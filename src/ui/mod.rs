/// UI module
///
/// View functions for each screen, plus the overlay and heading helpers
/// they share. All views are pure projections of the state module.

pub mod assets;
pub mod carousel;
pub mod events;
pub mod gallery;
pub mod home;
pub mod toast;

use iced::widget::{center, column, container, mouse_area, opaque, stack, text};
use iced::{Color, Element};

use crate::Message;

/// Outer padding of every screen
pub const PAGE_PADDING: f32 = 40.0;

pub const NEON_TEAL: Color = Color::from_rgb(0.29, 0.88, 1.0);
pub const NEON_PINK: Color = Color::from_rgb(1.0, 0.29, 1.0);
pub const MUTED: Color = Color::from_rgb(0.64, 0.64, 0.64);

/// Small uppercase kicker above a section title
pub fn heading<'a>(kicker: &'a str, title: &'a str) -> Element<'a, Message> {
    column![
        text(kicker.to_uppercase()).size(12).color(NEON_TEAL),
        text(title).size(32),
    ]
    .spacing(6)
    .into()
}

/// Lay `content` over `base` behind a dimmed backdrop.
///
/// The backdrop swallows all input to `base` (including wheel scrolling)
/// and emits `on_blur` when clicked.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
