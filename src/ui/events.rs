use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;
use std::path::Path;

use crate::state::data::EventItem;
use crate::state::events::EventBoard;
use crate::Message;

use super::assets::Artwork;
use super::{heading, MUTED, NEON_TEAL};

const CARD_WIDTH: f32 = 340.0;

fn artwork_or_blank<'a>(
    event: &EventItem,
    public_dir: &Path,
    artwork: &Artwork,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    match event.image.and_then(|url| artwork.handle(public_dir, url)) {
        Some(handle) => image(handle)
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => Space::new(width, height).into(),
    }
}

fn card<'a>(event: &'static EventItem, public_dir: &Path, artwork: &Artwork) -> Element<'a, Message> {
    let badges = row![
        text(event.date_label).size(12),
        Space::with_width(Length::Fill),
        text(event.tag.unwrap_or_default()).size(12).color(NEON_TEAL),
    ];

    let footer = row![
        text(event.venue.unwrap_or_default()).size(14).color(MUTED),
        Space::with_width(Length::Fill),
        button(text("Details").size(14))
            .on_press(Message::OpenEvent(event.id))
            .style(button::primary),
    ]
    .align_y(Alignment::Center);

    container(
        column![
            artwork_or_blank(event, public_dir, artwork, CARD_WIDTH, 180.0),
            badges,
            text(event.title).size(20).color(NEON_TEAL),
            text(event.excerpt).size(14),
            footer,
        ]
        .spacing(10),
    )
    .width(CARD_WIDTH)
    .padding(12)
    .style(container::rounded_box)
    .into()
}

/// Events grid and the "host your event" call to action
pub fn view<'a>(board: &'a EventBoard, public_dir: &'a Path, artwork: &'a Artwork) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = board
        .events()
        .iter()
        .map(|event| card(event, public_dir, artwork))
        .collect();

    let cta = container(
        row![
            column![
                text("Host your event at Carolina").size(20),
                text("Private cabanas, curated menus and production support — fill the short form and we'll follow up with options.")
                    .size(14)
                    .color(MUTED),
            ]
            .spacing(6)
            .width(Length::Fill),
            button(text("Host an Event").size(14))
                .on_press(Message::HostForm(None))
                .padding([10, 20])
                .style(button::primary),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .padding(24)
    .style(container::rounded_box);

    column![
        heading("Events", "DJ Nights & Parties"),
        text("Neon-lit rooftop nights, curated DJs and weekend parties — see what's coming to Carolina.")
            .size(14)
            .color(MUTED),
        Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0),
        cta,
    ]
    .spacing(24)
    .into()
}

/// Read-only detail modal for the selected event
pub fn details<'a>(board: &'a EventBoard, public_dir: &'a Path, artwork: &'a Artwork) -> Option<Element<'a, Message>> {
    let event = board.selected()?;

    let title = row![
        column![
            text(event.title).size(26),
            text(event.date_label).size(14).color(MUTED),
            text(event.venue.unwrap_or_default()).size(12).color(MUTED),
        ]
        .spacing(4)
        .width(Length::Fill),
        button(text("✕"))
            .on_press(Message::CloseEvent)
            .style(button::text),
    ];

    let actions = row![
        button(text("Add to Calendar").size(14))
            .on_press(Message::AddToCalendar)
            .style(button::secondary),
        button(text("Host Similar Event").size(14))
            .on_press(Message::HostForm(Some(event.title)))
            .style(button::primary),
    ]
    .spacing(12);

    let body = column![
        title,
        text(event.full_description.unwrap_or_default()).size(14),
        actions,
    ]
    .spacing(20)
    .width(Length::Fill);

    Some(
        container(
            row![
                artwork_or_blank(event, public_dir, artwork, 360.0, 300.0),
                body,
            ]
            .spacing(24),
        )
        .max_width(820.0)
        .padding(24)
        .style(container::dark)
        .into(),
    )
}
