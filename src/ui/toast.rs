use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Bottom-right notification with a dismiss control
pub fn view<'a>(message: &'a str) -> Element<'a, Message> {
    let bubble = container(
        row![
            text(message).size(14),
            button(text("✕").size(12))
                .on_press(Message::DismissToast)
                .style(button::text),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding([12, 16])
    .style(container::dark);

    container(bubble)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_right(Length::Fill)
        .align_bottom(Length::Fill)
        .padding(24)
        .into()
}
