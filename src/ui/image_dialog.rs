// SPDX-License-Identifier: MPL-2.0
//! Modal viewer for the original check-in photo.
//!
//! Opened by a thumbnail click with the original photo URL; closed only by
//! the close button, a press on the backdrop, or Escape.

use crate::i18n::fluent::I18n;
use crate::media::{ImageSlot, ImageStore};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, center, image, mouse_area, opaque, Column, Container, Row, Stack, Text},
    Element, Length,
};

/// Dialog visibility and the photo it shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    image_url: Option<String>,
}

impl State {
    pub fn open(&mut self, url: String) {
        self.image_url = Some(url);
    }

    pub fn close(&mut self) {
        self.image_url = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.image_url.is_some()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

/// Messages emitted by the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Close => state.close(),
    }
}

/// Contextual data needed to render the dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub images: &'a ImageStore,
}

/// Layers the dialog over `base` when open; returns `base` untouched otherwise.
pub fn view_over<'a, M>(
    base: Element<'a, M>,
    ctx: ViewContext<'a>,
    map: impl Fn(Message) -> M + 'a,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    let Some(url) = ctx.state.image_url() else {
        return base;
    };

    // The backdrop emits the same message as the close button.
    let close = map(Message::Close);
    let card = view_card(ctx.i18n, url, ctx.images).map(map);

    Stack::new()
        .push(base)
        .push(opaque(
            mouse_area(
                center(opaque(card))
                    .padding(spacing::LG)
                    .style(styles::container::backdrop),
            )
            .on_press(close),
        ))
        .into()
}

fn view_card<'a>(i18n: &I18n, url: &'a str, images: &'a ImageStore) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(i18n.tr("dialog-title")).size(typography::TITLE_MD))
                .width(Length::Fill),
        )
        .push(
            button(Text::new(i18n.tr("dialog-close")).size(typography::BODY))
                .on_press(Message::Close)
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::dismiss),
        );

    let body: Element<'a, Message> = match images.get(url) {
        Some(ImageSlot::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Shrink)
            .into(),
        Some(ImageSlot::Failed) => Text::new(i18n.tr("image-unavailable"))
            .size(typography::BODY)
            .into(),
        Some(ImageSlot::Loading) | None => Text::new(i18n.tr("image-loading"))
            .size(typography::BODY)
            .into(),
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(
            Container::new(body)
                .center_x(Length::Fill)
                .max_height(sizing::DIALOG_IMAGE_MAX_HEIGHT),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::dialog)
        .into()
}
