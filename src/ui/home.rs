use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};
use std::path::Path;

use crate::state::carousel::Carousel;
use crate::{Message, Screen};

use super::assets::Artwork;
use super::{carousel, heading, MUTED, NEON_PINK, NEON_TEAL};

const ADDRESS: [&str; 4] = [
    "Carolina – The Luminary Lounge",
    "123 Rooftop Avenue",
    "Jaipur, Rajasthan 302001",
    "India",
];

const HOURS: [&str; 3] = [
    "Monday – Thursday: 6:00 PM – 2:00 AM",
    "Friday – Saturday: 5:00 PM – 3:00 AM",
    "Sunday: 6:00 PM – 1:00 AM",
];

fn hero<'a>() -> Element<'a, Message> {
    column![
        text("THE MOST").size(14).color(NEON_TEAL),
        text("Carolina Luminary Lounge").size(56),
        text("NEON LUMINARY LOUNGE").size(12).color(NEON_TEAL),
        text("An immersive black-label experience with cyan laser lights, bespoke cocktails, and curated performances that glow long after midnight.")
            .size(18),
        row![
            button(text("SEE EVENTS").size(14).color(NEON_PINK))
                .on_press(Message::ShowScreen(Screen::Events))
                .padding([12, 32])
                .style(button::secondary),
            button(text("VIEW GALLERY").size(14).color(NEON_TEAL))
                .on_press(Message::ShowScreen(Screen::Gallery))
                .padding([12, 32])
                .style(button::secondary),
        ]
        .spacing(16),
    ]
    .spacing(14)
    .max_width(720.0)
    .into()
}

fn location<'a>() -> Element<'a, Message> {
    let address = column(ADDRESS.iter().map(|line| text(*line).size(14).into()));
    let hours = column(HOURS.iter().map(|line| text(*line).size(14).color(MUTED).into()));

    column![
        heading("Location", "Find Us"),
        row![
            address.spacing(4).width(Length::Fill),
            column![text("HOURS").size(12).color(NEON_TEAL), hours.spacing(4)]
                .spacing(6)
                .width(Length::Fill),
        ]
        .spacing(24),
        button(text("Get Directions").size(14))
            .on_press(Message::OpenDirections)
            .style(button::primary),
    ]
    .spacing(16)
    .into()
}

/// Landing page: hero, both carousels and the location block
pub fn view<'a>(
    decoration: &'a Carousel,
    atmosphere: &'a Carousel,
    public_dir: &'a Path,
    artwork: &'a Artwork,
) -> Element<'a, Message> {
    column![
        hero(),
        heading("Gallery", "Inside the Carolina Experience"),
        carousel::view(decoration, public_dir, artwork),
        container(
            button(text("View Gallery →").size(14).color(NEON_TEAL))
                .on_press(Message::ShowScreen(Screen::Gallery))
                .style(button::text),
        )
        .center_x(Length::Fill),
        heading("Visual Experience", "The Carolina Atmosphere"),
        carousel::view(atmosphere, public_dir, artwork),
        location(),
    ]
    .spacing(32)
    .into()
}
