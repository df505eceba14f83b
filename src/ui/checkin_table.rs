// SPDX-License-Identifier: MPL-2.0
//! Weekly check-in table.
//!
//! Each row shows the user's name, `weekCount/7`, the latest thumbnail and,
//! below the weekly threshold, a warning badge carrying `warningCount`.

use crate::api::{StorageUrls, User};
use crate::config::{DAYS_PER_WEEK, WARNING_THRESHOLD};
use crate::i18n::fluent::I18n;
use crate::media::{ImageSlot, ImageStore};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image, text, Column, Container, Row, Stack, Text},
    Element, Length, Theme,
};

/// Display-ready data for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    pub username: String,
    /// `"{weekCount}/7"`.
    pub week_label: String,
    /// Warning count to show in the badge, if the badge is shown at all.
    pub badge: Option<u32>,
    /// Thumbnail URL, if the user has one.
    pub thumbnail_url: Option<String>,
    /// Original photo URL opened by clicking the thumbnail.
    pub original_url: Option<String>,
}

impl RowModel {
    pub fn new(user: &User, storage: &StorageUrls) -> Self {
        Self {
            username: user.username.clone(),
            week_label: format!("{}/{}", user.week_count, DAYS_PER_WEEK),
            badge: (user.week_count < WARNING_THRESHOLD).then_some(user.warning_count),
            thumbnail_url: user.thumb_url.as_deref().map(|path| storage.object_url(path)),
            original_url: user.image_url.as_deref().map(|path| storage.object_url(path)),
        }
    }

    /// Message sent when the thumbnail is clicked: opens the original photo.
    #[must_use]
    pub fn click_message(&self) -> Option<Message> {
        self.original_url.clone().map(Message::OpenImage)
    }
}

/// Builds one row per user, in server order.
pub fn rows(users: &[User], storage: &StorageUrls) -> Vec<RowModel> {
    users.iter().map(|user| RowModel::new(user, storage)).collect()
}

/// Messages emitted by the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A thumbnail was clicked; carries the original photo URL.
    OpenImage(String),
}

/// Contextual data needed to render the table.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub rows: &'a [RowModel],
    pub images: &'a ImageStore,
}

const NAME_PORTION: u16 = 3;
const WEEK_PORTION: u16 = 2;
const PHOTO_PORTION: u16 = 2;
const WARNING_PORTION: u16 = 2;

/// Render the table panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::SM])
        .push(header_cell(ctx.i18n.tr("table-header-user"), NAME_PORTION, Horizontal::Left))
        .push(header_cell(ctx.i18n.tr("table-header-week"), WEEK_PORTION, Horizontal::Center))
        .push(header_cell(ctx.i18n.tr("table-header-photo"), PHOTO_PORTION, Horizontal::Center))
        .push(header_cell(
            ctx.i18n.tr("table-header-warning"),
            WARNING_PORTION,
            Horizontal::Center,
        ));

    let mut body = Column::new().spacing(spacing::XXS).push(header);

    if ctx.rows.is_empty() {
        body = body.push(
            Container::new(Text::new(ctx.i18n.tr("table-empty")).size(typography::BODY))
                .center_x(Length::Fill)
                .padding(spacing::LG),
        );
    }

    for row in ctx.rows {
        body = body.push(view_row(&ctx, row));
    }

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
}

fn header_cell<'a>(label: String, portion: u16, align: Horizontal) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::CAPTION)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            }),
    )
    .width(Length::FillPortion(portion))
    .align_x(align)
    .into()
}

fn view_row<'a>(ctx: &ViewContext<'a>, row: &'a RowModel) -> Element<'a, Message> {
    let name = Container::new(Text::new(row.username.as_str()).size(typography::BODY_LG))
        .width(Length::FillPortion(NAME_PORTION));

    let week = Container::new(Text::new(row.week_label.as_str()).size(typography::BODY_LG))
        .width(Length::FillPortion(WEEK_PORTION))
        .align_x(Horizontal::Center);

    let photo = Container::new(view_thumbnail(ctx, row))
        .width(Length::FillPortion(PHOTO_PORTION))
        .align_x(Horizontal::Center);

    let warning = Container::new(view_badge(ctx.i18n, row.badge))
        .width(Length::FillPortion(WARNING_PORTION))
        .align_x(Horizontal::Center);

    let cells = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(name)
        .push(week)
        .push(photo)
        .push(warning);

    Container::new(cells)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::container::table_row)
        .into()
}

fn view_thumbnail<'a>(ctx: &ViewContext<'a>, row: &'a RowModel) -> Element<'a, Message> {
    let Some(url) = row.thumbnail_url.as_deref() else {
        return Text::new("").into();
    };

    let content: Element<'a, Message> = match ctx.images.get(url) {
        Some(ImageSlot::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        Some(ImageSlot::Failed) => Text::new("✕").size(typography::CAPTION).into(),
        Some(ImageSlot::Loading) | None => Text::new("…").size(typography::CAPTION).into(),
    };

    let frame = Container::new(content)
        .center(Length::Fixed(sizing::THUMBNAIL))
        .clip(true)
        .style(styles::container::thumbnail);

    button(frame)
        .padding(0.0)
        .style(styles::button::bare)
        .on_press_maybe(row.click_message())
        .into()
}

fn view_badge<'a>(i18n: &I18n, badge: Option<u32>) -> Element<'a, Message> {
    let Some(count) = badge else {
        return Text::new("").into();
    };

    let glyph = Text::new(i18n.tr("table-warning-glyph"))
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        });

    let bubble = Container::new(Text::new(count.to_string()).size(typography::CAPTION))
        .center(Length::Fixed(sizing::BADGE))
        .style(styles::container::badge);

    // Bubble sits on the glyph's top-right corner.
    Stack::new()
        .push(
            Container::new(glyph)
                .padding([spacing::XXS, spacing::SM])
                .align_y(Vertical::Bottom),
        )
        .push(
            Container::new(bubble)
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Top),
        )
        .into()
}
