use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{button, column, container, image, row, scrollable, stack, text, Space};
use iced::{Alignment, ContentFit, Element, Length};
use std::path::Path;

use crate::state::carousel::{Carousel, ScrollMetrics, CARD_GAP, CARD_WIDTH};
use crate::state::catalog::Feed;
use crate::Message;

use super::assets::Artwork;
use super::MUTED;

/// Scrollable id of a feed's strip
pub fn strip_id(feed: Feed) -> scrollable::Id {
    match feed {
        Feed::Decoration => scrollable::Id::new("carousel-decoration"),
        Feed::Atmosphere => scrollable::Id::new("carousel-atmosphere"),
        Feed::Gallery => scrollable::Id::new("carousel-gallery"),
    }
}

/// Geometry reported by the strip's scrollable
pub fn metrics(viewport: Viewport) -> ScrollMetrics {
    ScrollMetrics {
        offset: viewport.absolute_offset().x,
        visible_width: viewport.bounds().width,
        content_width: viewport.content_bounds().width,
    }
}

/// A horizontal strip of cards with arrow controls
pub fn view<'a>(carousel: &'a Carousel, public_dir: &'a Path, artwork: &'a Artwork) -> Element<'a, Message> {
    let feed = carousel.feed();

    let cards = row(carousel
        .items()
        .iter()
        .map(|item| -> Element<'a, Message> {
            let picture: Element<'a, Message> = match artwork.handle(public_dir, &item.url) {
                Some(handle) => image(handle)
                    .width(CARD_WIDTH)
                    .height(CARD_WIDTH)
                    .content_fit(ContentFit::Cover)
                    .into(),
                None => Space::new(CARD_WIDTH, CARD_WIDTH).into(),
            };

            column![picture, text(item.display_caption()).size(14).color(MUTED)]
                .spacing(8)
                .width(CARD_WIDTH)
                .into()
        }))
    .spacing(CARD_GAP);

    let strip = scrollable(cards)
        .id(strip_id(feed))
        .direction(Direction::Horizontal(
            Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .on_scroll(move |viewport| Message::CarouselScrolled(feed, metrics(viewport)))
        .width(Length::Fill);

    let affordance = carousel.affordance();
    let step = carousel.step();

    let arrow = |label: &'static str, visible: bool, amount: f32| -> Element<'a, Message> {
        if visible {
            button(text(label).size(20))
                .on_press(Message::CarouselArrow(feed, amount))
                .padding([6, 12])
                .style(button::secondary)
                .into()
        } else {
            Space::with_width(0).into()
        }
    };

    let controls = row![
        arrow("←", affordance.left, -step),
        Space::with_width(Length::Fill),
        arrow("→", affordance.right, step),
    ]
    .padding([0, 8])
    .align_y(Alignment::Center);

    stack![
        strip,
        container(controls)
            .width(Length::Fill)
            .center_y(CARD_WIDTH),
    ]
    .into()
}
