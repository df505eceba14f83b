// SPDX-License-Identifier: MPL-2.0
//! "Check in today" form: pick a user, pick a photo, upload.
//!
//! The form only checks that both inputs are present. Everything else
//! (size, format, duplicates) is the server's call.

use crate::api::{ImageFile, UploadRequest, User, UserId};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, text, Column, Container, Row, Text},
    Element, Length, Theme,
};
use std::fmt;

/// One entry of the user selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChoice {
    pub id: UserId,
    pub username: String,
}

impl fmt::Display for UserChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

impl From<&User> for UserChoice {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
        }
    }
}

/// Form inputs.
#[derive(Debug, Clone, Default)]
pub struct State {
    choices: Vec<UserChoice>,
    selected_user: Option<UserId>,
    file: Option<ImageFile>,
}

/// Messages emitted by the form widgets.
#[derive(Debug, Clone)]
pub enum Message {
    UserSelected(UserChoice),
    ChooseFile,
    /// Result of the file dialog; `Ok(None)` means it was cancelled.
    FilePicked(Result<Option<ImageFile>, Error>),
    Submit,
}

/// Events propagated to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Open the native file dialog.
    PickFile,
    /// Both inputs are present.
    Submit(UploadRequest),
    /// User or photo missing; nothing is sent.
    MissingInput,
    /// The chosen file has no bytes.
    EmptyFile,
    /// The chosen file could not be read.
    ReadFailed,
}

impl State {
    /// Refreshes the selector entries from the latest user list.
    ///
    /// The selected id is kept even if it disappeared from the list; the
    /// server decides whether it is still valid.
    pub fn set_users(&mut self, users: &[User]) {
        self.choices = users.iter().map(UserChoice::from).collect();
    }

    #[must_use]
    pub fn choices(&self) -> &[UserChoice] {
        &self.choices
    }

    #[must_use]
    pub fn selected_user(&self) -> Option<&UserId> {
        self.selected_user.as_ref()
    }

    #[must_use]
    pub fn selected_choice(&self) -> Option<&UserChoice> {
        let id = self.selected_user.as_ref()?;
        self.choices.iter().find(|choice| &choice.id == id)
    }

    #[must_use]
    pub fn file(&self) -> Option<&ImageFile> {
        self.file.as_ref()
    }

    /// Forgets the photo after an accepted upload. The user stays selected.
    pub fn clear_file(&mut self) {
        self.file = None;
    }

    /// Builds the upload request, or `None` if an input is missing.
    #[must_use]
    pub fn request(&self) -> Option<UploadRequest> {
        let user_id = self.selected_user.clone()?;
        let image = self.file.clone().filter(|file| !file.is_empty())?;
        Some(UploadRequest { user_id, image })
    }
}

/// Process a form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::UserSelected(choice) => {
            state.selected_user = Some(choice.id);
            Event::None
        }
        Message::ChooseFile => Event::PickFile,
        Message::FilePicked(Ok(Some(file))) if file.is_empty() => {
            state.file = None;
            Event::EmptyFile
        }
        Message::FilePicked(Ok(Some(file))) => {
            tracing::debug!(name = file.name(), bytes = file.len(), "photo selected");
            state.file = Some(file);
            Event::None
        }
        Message::FilePicked(Ok(None)) => Event::None,
        Message::FilePicked(Err(err)) => {
            tracing::warn!(error = %err, "photo could not be read");
            Event::ReadFailed
        }
        Message::Submit => match state.request() {
            Some(request) => Event::Submit(request),
            None => {
                tracing::debug!(
                    has_user = state.selected_user.is_some(),
                    has_file = state.file.is_some(),
                    "upload rejected: missing input"
                );
                Event::MissingInput
            }
        },
    }
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the form panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("form-title")).size(typography::TITLE_MD);

    let selector = pick_list(
        ctx.state.choices(),
        ctx.state.selected_choice().cloned(),
        Message::UserSelected,
    )
    .placeholder(ctx.i18n.tr("form-user-placeholder"))
    .width(Length::Fill)
    .text_size(typography::BODY_LG);

    let user_field = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("form-user-label")).size(typography::CAPTION))
        .push(selector);

    let file_label = match ctx.state.file() {
        Some(file) => file.name().to_string(),
        None => ctx.i18n.tr("form-no-file"),
    };
    let file_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            button(Text::new(ctx.i18n.tr("form-choose-file")).size(typography::BODY))
                .on_press(Message::ChooseFile)
                .style(button::secondary),
        )
        .push(
            Text::new(file_label)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );

    let submit = button(
        Container::new(Text::new(ctx.i18n.tr("form-submit")).size(typography::BODY_LG))
            .center_x(Length::Fill),
    )
    .on_press(Message::Submit)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(button::primary);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(user_field)
        .push(file_row)
        .push(submit);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}
