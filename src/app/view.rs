// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout, top to bottom: heading, week range, upload form, check-in table.
//! The toast and the image dialog are layered above.

use super::dashboard::{self, Dashboard};
use super::week::WeekRange;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Toast;
use crate::ui::{checkin_table, image_dialog, upload_form};
use iced::{
    alignment::Horizontal,
    widget::{scrollable, text, Column, Container, Stack, Text},
    Element, Length, Theme,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub dashboard: &'a Dashboard,
    pub week: WeekRange,
}

/// Renders the check-in screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        dashboard,
        week,
    } = ctx;

    let heading = Text::new(i18n.tr("app-heading"))
        .size(typography::TITLE_LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let subtitle = Text::new(week_label(i18n, &week))
        .size(typography::BODY)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    let form = upload_form::view(upload_form::ViewContext {
        i18n,
        state: dashboard.form(),
    })
    .map(|m| Message::Dashboard(dashboard::Message::Form(m)));

    let table = checkin_table::view(checkin_table::ViewContext {
        i18n,
        rows: dashboard.rows(),
        images: dashboard.images(),
    })
    .map(|m| Message::Dashboard(dashboard::Message::Table(m)));

    let column = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(heading)
                .push(subtitle),
        )
        .push(form)
        .push(table);

    let content: Element<'_, Message> = scrollable(
        Container::new(column)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into();

    let toast = Toast::view_overlay(dashboard.notifications(), i18n)
        .map(|m| Message::Dashboard(dashboard::Message::Notification(m)));
    let with_toast: Element<'_, Message> = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(toast)
        .into();

    image_dialog::view_over(
        with_toast,
        image_dialog::ViewContext {
            i18n,
            state: dashboard.dialog(),
            images: dashboard.images(),
        },
        |m| Message::Dashboard(dashboard::Message::Dialog(m)),
    )
}

/// Localized "Week of {start} – {end}".
pub fn week_label(i18n: &I18n, week: &WeekRange) -> String {
    let start = week.start_label();
    let end = week.end_label();
    i18n.tr_with_args("week-range", &[("start", start.as_str()), ("end", end.as_str())])
}
