use iced::widget::{button, column, container, image, row, stack, text, Space};
use iced::{Alignment, Border, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;
use std::path::Path;

use crate::state::gallery::{Gallery, Step};
use crate::Message;

use super::assets::Artwork;
use super::{heading, MUTED, NEON_TEAL};

/// Grid tile size
const TILE_WIDTH: f32 = 260.0;
const TILE_HEIGHT: f32 = 182.0;

/// Grid tile, outlined while it has keyboard focus
fn tile_style(theme: &Theme, status: button::Status, focused: bool) -> button::Style {
    let style = button::text(theme, status);
    if !focused {
        return style;
    }

    button::Style {
        border: Border {
            color: NEON_TEAL,
            width: 2.0,
            radius: 4.0.into(),
        },
        ..style
    }
}

/// Filter bar, grid and empty state
pub fn view<'a>(gallery: &'a Gallery, public_dir: &'a Path, artwork: &'a Artwork) -> Element<'a, Message> {
    let filters = row(gallery.facets().into_iter().map(|facet| -> Element<'a, Message> {
        let active = facet == gallery.filter();
        button(text(facet.to_uppercase()).size(12))
            .on_press(Message::FilterSelected(facet))
            .padding([8, 16])
            .style(if active { button::primary } else { button::secondary })
            .into()
    }))
    .spacing(8);

    let filter_bar = row![
        filters,
        Space::with_width(Length::Fill),
        text(gallery.count_label()).size(14).color(MUTED),
    ]
    .align_y(Alignment::Center);

    let tiles: Vec<Element<'a, Message>> = gallery
        .visible()
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let picture: Element<'a, Message> = match artwork.handle(public_dir, &item.url) {
                Some(handle) => image(handle)
                    .width(TILE_WIDTH)
                    .height(TILE_HEIGHT)
                    .content_fit(ContentFit::Cover)
                    .into(),
                None => Space::new(TILE_WIDTH, TILE_HEIGHT).into(),
            };

            let focused = gallery.focused() == Some(index);
            button(picture)
                .on_press(Message::OpenLightbox(index))
                .padding(3)
                .style(move |theme, status| tile_style(theme, status, focused))
                .into()
        })
        .collect();

    let grid = Wrap::with_elements(tiles).spacing(16.0).line_spacing(16.0);

    let mut content = column![
        heading("Gallery", "Carolina — Visual Archive"),
        filter_bar,
        grid,
    ]
    .spacing(24);

    if let Some(message) = gallery.empty_message() {
        content = content.push(
            container(text(message).color(MUTED))
                .width(Length::Fill)
                .center_x(Length::Fill),
        );
    }

    content
        .push(
            container(
                button(text("Return Home").size(14))
                    .on_press(Message::ShowScreen(crate::Screen::Home))
                    .style(button::secondary),
            )
            .center_x(Length::Fill),
        )
        .into()
}

/// Lightbox content shown over the dimmed page
pub fn lightbox<'a>(gallery: &'a Gallery, public_dir: &'a Path, artwork: &'a Artwork) -> Option<Element<'a, Message>> {
    let item = gallery.current()?;

    let header = row![
        text(gallery.position_label().unwrap_or_default()).size(14).color(MUTED),
        Space::with_width(Length::Fill),
        button(text("DOWNLOAD").size(12))
            .on_press(Message::DownloadCurrent)
            .style(button::secondary),
        button(text("CLOSE").size(12))
            .on_press(Message::CloseLightbox)
            .style(button::secondary),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let picture: Element<'a, Message> = match artwork.handle(public_dir, &item.url) {
        Some(handle) => image(handle)
            .width(Length::Fill)
            .height(640.0)
            .content_fit(ContentFit::Contain)
            .into(),
        None => Space::new(Length::Fill, 640.0).into(),
    };

    let arrows = row![
        button(text("←").size(20))
            .on_press(Message::LightboxStep(Step::Previous))
            .style(button::secondary),
        Space::with_width(Length::Fill),
        button(text("→").size(20))
            .on_press(Message::LightboxStep(Step::Next))
            .style(button::secondary),
    ]
    .padding([0, 8]);

    let stage = stack![
        picture,
        container(arrows).width(Length::Fill).center_y(Length::Fill),
    ];

    Some(
        container(column![header, stage].spacing(12))
            .max_width(1100.0)
            .padding(16)
            .style(container::dark)
            .into(),
    )
}
