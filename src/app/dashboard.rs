// SPDX-License-Identifier: MPL-2.0
//! Explicit state container for the check-in screen.
//!
//! `Dashboard` owns everything the screen shows and changes only through
//! [`Dashboard::update`]. Each transition returns the [`Effect`]s the runtime
//! must perform; `App::update` turns them into Iced tasks. Keeping I/O out of
//! here lets the whole upload flow be exercised without a network.
//!
//! # Flow
//!
//! ```text
//! start ──► FetchUsers ──► UsersLoaded ──► FetchImage(thumb)…
//! Submit ──► (missing input: warning, no effect)
//!        └─► Upload ──► UploadFinished ──► toast + FetchUsers
//! Thumbnail click ──► dialog opens on the original ──► FetchImage(original)
//! ```

use crate::api::{ApiError, StorageUrls, UploadRequest, User};
use crate::media::ImageStore;
use crate::ui::checkin_table::{self, RowModel};
use crate::ui::image_dialog;
use crate::ui::notifications::{self, Notification, NotificationMessage, Severity};
use crate::ui::upload_form;

/// Inputs to the state container.
#[derive(Debug, Clone)]
pub enum Message {
    UsersLoaded(Result<Vec<User>, ApiError>),
    UploadFinished(Result<(), ApiError>),
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, ApiError>,
    },
    Form(upload_form::Message),
    Table(checkin_table::Message),
    Dialog(image_dialog::Message),
    Notification(NotificationMessage),
    EscapePressed,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `GET /users`; the user list is stale.
    FetchUsers,
    /// `POST /upload`.
    Upload(UploadRequest),
    /// Open the photo picker.
    PickFile,
    /// Download an image from public storage.
    FetchImage(String),
}

#[derive(Debug)]
pub struct Dashboard {
    storage: StorageUrls,
    users: Vec<User>,
    rows: Vec<RowModel>,
    form: upload_form::State,
    dialog: image_dialog::State,
    notifications: notifications::Manager,
    images: ImageStore,
    /// Set by an accepted upload; the next list refresh refetches every image
    /// since the server may have written new bytes under the same paths.
    images_stale: bool,
}

impl Dashboard {
    pub fn new(storage: StorageUrls, image_cache_entries: usize) -> Self {
        Self {
            storage,
            users: Vec::new(),
            rows: Vec::new(),
            form: upload_form::State::default(),
            dialog: image_dialog::State::default(),
            notifications: notifications::Manager::new(),
            images: ImageStore::new(image_cache_entries),
            images_stale: false,
        }
    }

    /// Effects to run once the screen is mounted.
    #[must_use]
    pub fn start(&self) -> Vec<Effect> {
        vec![Effect::FetchUsers]
    }

    /// Shows a toast, replacing the visible one.
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::UsersLoaded(Ok(users)) => self.apply_users(users),
            Message::UsersLoaded(Err(err)) => {
                // Last known list stays on screen.
                tracing::warn!(error = %err, "user list refresh failed");
                self.notify(Notification::warning("notification-users-load-error"));
                Vec::new()
            }
            Message::UploadFinished(result) => self.finish_upload(result),
            Message::ImageFetched { url, result } => {
                self.images.complete(&url, result);
                Vec::new()
            }
            Message::Form(form_message) => self.handle_form(form_message),
            Message::Table(checkin_table::Message::OpenImage(url)) => self.open_image(url),
            Message::Dialog(dialog_message) => {
                image_dialog::update(&mut self.dialog, dialog_message);
                Vec::new()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Vec::new()
            }
            Message::EscapePressed => {
                self.dialog.close();
                Vec::new()
            }
        }
    }

    fn apply_users(&mut self, users: Vec<User>) -> Vec<Effect> {
        tracing::info!(count = users.len(), "user list refreshed");
        self.rows = checkin_table::rows(&users, &self.storage);
        self.form.set_users(&users);
        self.users = users;

        let images = &mut self.images;
        if std::mem::take(&mut self.images_stale) {
            for row in &self.rows {
                for url in [&row.thumbnail_url, &row.original_url].into_iter().flatten() {
                    images.invalidate(url);
                }
            }
        }
        self.rows
            .iter()
            .filter_map(|row| row.thumbnail_url.as_deref())
            .filter(|url| images.request(url))
            .map(|url| Effect::FetchImage(url.to_string()))
            .collect()
    }

    fn finish_upload(&mut self, result: Result<(), ApiError>) -> Vec<Effect> {
        match result {
            Ok(()) => {
                self.form.clear_file();
                self.images_stale = true;
                self.notify(Notification::success("notification-upload-success"));
            }
            Err(err) => {
                tracing::warn!(error = %err, "upload failed");
                self.notify(upload_failure(&err));
            }
        }
        // Any completed attempt may have changed the counts.
        vec![Effect::FetchUsers]
    }

    fn handle_form(&mut self, message: upload_form::Message) -> Vec<Effect> {
        match upload_form::update(&mut self.form, message) {
            upload_form::Event::None => Vec::new(),
            upload_form::Event::PickFile => vec![Effect::PickFile],
            upload_form::Event::Submit(request) => vec![Effect::Upload(request)],
            upload_form::Event::MissingInput => {
                self.notify(Notification::warning("notification-upload-missing-input"));
                Vec::new()
            }
            upload_form::Event::EmptyFile => {
                self.notify(Notification::warning("notification-file-empty"));
                Vec::new()
            }
            upload_form::Event::ReadFailed => {
                self.notify(Notification::warning("notification-file-read-error"));
                Vec::new()
            }
        }
    }

    fn open_image(&mut self, url: String) -> Vec<Effect> {
        let fetch = self.images.request(&url);
        self.dialog.open(url.clone());
        if fetch {
            vec![Effect::FetchImage(url)]
        } else {
            Vec::new()
        }
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn rows(&self) -> &[RowModel] {
        &self.rows
    }

    #[must_use]
    pub fn form(&self) -> &upload_form::State {
        &self.form
    }

    #[must_use]
    pub fn dialog(&self) -> &image_dialog::State {
        &self.dialog
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn images(&self) -> &ImageStore {
        &self.images
    }
}

/// Toast for a failed upload: the server's message if it sent one.
fn upload_failure(err: &ApiError) -> Notification {
    if let Some(message) = err.server_message() {
        return Notification::plain(Severity::Error, message);
    }
    match err {
        ApiError::Status { .. } | ApiError::Decode(_) => {
            Notification::error("notification-upload-failed")
        }
        ApiError::Transport(_) | ApiError::InvalidUrl(_) => {
            Notification::error("notification-upload-network-error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ImageFile, UserId};
    use crate::config::{Config, TOAST_DURATION};
    use crate::i18n::fluent::I18n;
    use crate::media::ImageSlot;
    use crate::ui::upload_form::UserChoice;
    use std::time::Duration;

    const STORAGE: &str = "https://cdn.example/exercise-images";

    fn dashboard() -> Dashboard {
        Dashboard::new(StorageUrls::new(STORAGE), 16)
    }

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn user(id: &str, week_count: u32, warning_count: u32) -> User {
        User {
            id: UserId::new(id),
            username: format!("user-{id}"),
            week_count,
            warning_count,
            thumb_url: Some(format!("thumb/{id}.jpg")),
            image_url: Some(format!("orig/{id}.jpg")),
        }
    }

    fn photo() -> ImageFile {
        ImageFile::new("proof.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0])
    }

    fn select_user(dashboard: &mut Dashboard, id: &str) {
        let choice = UserChoice::from(&user(id, 0, 0));
        dashboard.update(Message::Form(upload_form::Message::UserSelected(choice)));
    }

    fn pick_photo(dashboard: &mut Dashboard) {
        dashboard.update(Message::Form(upload_form::Message::FilePicked(Ok(Some(
            photo(),
        )))));
    }

    fn submit(dashboard: &mut Dashboard) -> Vec<Effect> {
        dashboard.update(Message::Form(upload_form::Message::Submit))
    }

    fn toast(dashboard: &Dashboard) -> &Notification {
        dashboard.notifications().current().expect("toast visible")
    }

    #[test]
    fn start_fetches_users() {
        assert_eq!(dashboard().start(), vec![Effect::FetchUsers]);
    }

    #[test]
    fn submit_with_nothing_warns_without_network() {
        let mut dashboard = dashboard();
        let effects = submit(&mut dashboard);

        assert!(effects.is_empty());
        assert_eq!(toast(&dashboard).severity(), Severity::Warning);
        assert_eq!(
            toast(&dashboard).message_key(),
            Some("notification-upload-missing-input")
        );
    }

    #[test]
    fn submit_with_user_only_warns_without_network() {
        let mut dashboard = dashboard();
        select_user(&mut dashboard, "1");
        let effects = submit(&mut dashboard);

        assert!(effects.is_empty());
        assert_eq!(toast(&dashboard).severity(), Severity::Warning);
    }

    #[test]
    fn submit_with_file_only_warns_without_network() {
        let mut dashboard = dashboard();
        pick_photo(&mut dashboard);
        let effects = submit(&mut dashboard);

        assert!(effects.is_empty());
        assert_eq!(toast(&dashboard).severity(), Severity::Warning);
    }

    #[test]
    fn valid_submit_requests_upload() {
        let mut dashboard = dashboard();
        select_user(&mut dashboard, "9");
        pick_photo(&mut dashboard);

        match submit(&mut dashboard).as_slice() {
            [Effect::Upload(request)] => {
                assert_eq!(request.user_id.as_str(), "9");
                assert_eq!(request.image.name(), "proof.jpg");
            }
            other => panic!("expected one upload, got {other:?}"),
        }
    }

    #[test]
    fn accepted_upload_clears_file_and_refreshes() {
        let mut dashboard = dashboard();
        select_user(&mut dashboard, "1");
        pick_photo(&mut dashboard);

        let effects = dashboard.update(Message::UploadFinished(Ok(())));

        assert_eq!(effects, vec![Effect::FetchUsers]);
        assert_eq!(toast(&dashboard).severity(), Severity::Success);
        assert_eq!(
            toast(&dashboard).message_key(),
            Some("notification-upload-success")
        );
        assert!(dashboard.form().file().is_none());
        assert_eq!(
            dashboard.form().selected_user().map(UserId::as_str),
            Some("1")
        );
    }

    #[test]
    fn rejected_upload_shows_server_message() {
        let mut dashboard = dashboard();
        let effects = dashboard.update(Message::UploadFinished(Err(ApiError::Status {
            status: 422,
            message: Some("duplicate".to_string()),
        })));

        assert_eq!(effects, vec![Effect::FetchUsers]);
        assert_eq!(toast(&dashboard).severity(), Severity::Error);
        assert_eq!(toast(&dashboard).message(&i18n()), "duplicate");
    }

    #[test]
    fn rejected_upload_without_message_uses_fallback() {
        let mut dashboard = dashboard();
        pick_photo(&mut dashboard);
        dashboard.update(Message::UploadFinished(Err(ApiError::Status {
            status: 500,
            message: None,
        })));

        let message = toast(&dashboard).message(&i18n());
        assert_eq!(toast(&dashboard).severity(), Severity::Error);
        assert!(!message.is_empty());
        assert!(!message.starts_with("MISSING"));
        assert!(dashboard.form().file().is_some(), "file kept after failure");
    }

    #[test]
    fn transport_failure_is_an_error_toast_and_refreshes() {
        let mut dashboard = dashboard();
        let effects = dashboard.update(Message::UploadFinished(Err(ApiError::Transport(
            "connection refused".to_string(),
        ))));

        assert_eq!(effects, vec![Effect::FetchUsers]);
        assert_eq!(toast(&dashboard).severity(), Severity::Error);
        assert_eq!(
            toast(&dashboard).message_key(),
            Some("notification-upload-network-error")
        );
    }

    #[test]
    fn badge_follows_weekly_threshold() {
        let mut dashboard = dashboard();
        dashboard.update(Message::UsersLoaded(Ok(vec![user("a", 2, 4), user("b", 3, 4)])));

        assert_eq!(dashboard.rows()[0].badge, Some(4));
        assert_eq!(dashboard.rows()[1].badge, None);
    }

    #[test]
    fn thumbnail_click_opens_original() {
        let mut dashboard = dashboard();
        dashboard.update(Message::UsersLoaded(Ok(vec![user("a", 1, 0)])));
        let row = dashboard.rows()[0].clone();
        let original = format!("{STORAGE}/orig/a.jpg");

        let click = row.click_message().expect("clickable thumbnail");
        let effects = dashboard.update(Message::Table(click));

        assert_eq!(dashboard.dialog().image_url(), Some(original.as_str()));
        assert_ne!(dashboard.dialog().image_url(), row.thumbnail_url.as_deref());
        assert_eq!(effects, vec![Effect::FetchImage(original)]);
    }

    #[test]
    fn toast_hides_after_two_seconds() {
        let mut dashboard = dashboard();
        submit(&mut dashboard);
        let shown_at = toast(&dashboard).created_at();

        dashboard.notifications.tick_at(shown_at + Duration::from_millis(1999));
        assert!(dashboard.notifications().is_visible());

        dashboard.notifications.tick_at(shown_at + TOAST_DURATION);
        assert!(!dashboard.notifications().is_visible());
    }

    #[test]
    fn refresh_requests_each_thumbnail_once() {
        let mut dashboard = dashboard();
        let users = vec![user("a", 1, 0), user("b", 5, 0)];

        let first = dashboard.update(Message::UsersLoaded(Ok(users.clone())));
        assert_eq!(
            first,
            vec![
                Effect::FetchImage(format!("{STORAGE}/thumb/a.jpg")),
                Effect::FetchImage(format!("{STORAGE}/thumb/b.jpg")),
            ]
        );

        let second = dashboard.update(Message::UsersLoaded(Ok(users)));
        assert!(second.is_empty());
    }

    #[test]
    fn failed_thumbnail_is_retried_on_next_refresh() {
        let mut dashboard = dashboard();
        let users = vec![user("a", 1, 0)];
        dashboard.update(Message::UsersLoaded(Ok(users.clone())));

        let url = format!("{STORAGE}/thumb/a.jpg");
        dashboard.update(Message::ImageFetched {
            url: url.clone(),
            result: Err(ApiError::Status {
                status: 404,
                message: None,
            }),
        });
        assert!(matches!(dashboard.images().get(&url), Some(ImageSlot::Failed)));

        let effects = dashboard.update(Message::UsersLoaded(Ok(users)));
        assert_eq!(effects, vec![Effect::FetchImage(url)]);
    }

    #[test]
    fn accepted_upload_refetches_reused_image_paths() {
        let mut dashboard = dashboard();
        let thumb = format!("{STORAGE}/thumb/a.jpg");
        let original = format!("{STORAGE}/orig/a.jpg");

        let first = dashboard.update(Message::UsersLoaded(Ok(vec![user("a", 2, 0)])));
        assert_eq!(first, vec![Effect::FetchImage(thumb.clone())]);
        dashboard.update(Message::ImageFetched {
            url: thumb.clone(),
            result: Ok(vec![1, 2, 3]),
        });
        dashboard.update(Message::Table(checkin_table::Message::OpenImage(
            original.clone(),
        )));
        dashboard.update(Message::ImageFetched {
            url: original.clone(),
            result: Ok(vec![4, 5, 6]),
        });

        let after_upload = dashboard.update(Message::UploadFinished(Ok(())));
        assert_eq!(after_upload, vec![Effect::FetchUsers]);

        let refresh = dashboard.update(Message::UsersLoaded(Ok(vec![user("a", 3, 0)])));
        assert_eq!(refresh, vec![Effect::FetchImage(thumb)]);
        assert!(dashboard.images().get(&original).is_none());

        let settled = dashboard.update(Message::UsersLoaded(Ok(vec![user("a", 3, 0)])));
        assert!(settled.is_empty());
    }

    #[test]
    fn rejected_upload_keeps_cached_images() {
        let mut dashboard = dashboard();
        let thumb = format!("{STORAGE}/thumb/a.jpg");
        dashboard.update(Message::UsersLoaded(Ok(vec![user("a", 2, 0)])));
        dashboard.update(Message::ImageFetched {
            url: thumb.clone(),
            result: Ok(vec![1, 2, 3]),
        });

        dashboard.update(Message::UploadFinished(Err(ApiError::Status {
            status: 422,
            message: Some("already checked in".to_string()),
        })));
        let refresh = dashboard.update(Message::UsersLoaded(Ok(vec![user("a", 2, 0)])));

        assert!(refresh.is_empty());
        assert!(matches!(dashboard.images().get(&thumb), Some(ImageSlot::Ready(_))));
    }

    #[test]
    fn failed_refresh_keeps_last_list() {
        let mut dashboard = dashboard();
        dashboard.update(Message::UsersLoaded(Ok(vec![user("a", 1, 0)])));

        let effects = dashboard.update(Message::UsersLoaded(Err(ApiError::Decode(
            "expected array".to_string(),
        ))));

        assert!(effects.is_empty());
        assert_eq!(dashboard.users().len(), 1);
        assert_eq!(toast(&dashboard).severity(), Severity::Warning);
    }

    #[test]
    fn latest_response_wins() {
        let mut dashboard = dashboard();
        dashboard.update(Message::UsersLoaded(Ok(vec![user("a", 1, 0), user("b", 1, 0)])));
        dashboard.update(Message::UsersLoaded(Ok(vec![user("c", 1, 0)])));

        assert_eq!(dashboard.users().len(), 1);
        assert_eq!(dashboard.users()[0].id.as_str(), "c");
    }

    #[test]
    fn escape_and_close_button_close_dialog() {
        let mut dashboard = dashboard();
        dashboard.update(Message::Table(checkin_table::Message::OpenImage("x".into())));
        dashboard.update(Message::EscapePressed);
        assert!(!dashboard.dialog().is_open());

        dashboard.update(Message::Table(checkin_table::Message::OpenImage("x".into())));
        dashboard.update(Message::Dialog(image_dialog::Message::Close));
        assert!(!dashboard.dialog().is_open());
    }

    #[test]
    fn toast_never_triggers_refresh() {
        let mut dashboard = dashboard();
        submit(&mut dashboard);
        let id = toast(&dashboard).id();

        let effects = dashboard.update(Message::Notification(NotificationMessage::Dismiss(id)));
        assert!(effects.is_empty());
        assert!(!dashboard.notifications().is_visible());
    }

    #[test]
    fn choose_file_opens_picker() {
        let mut dashboard = dashboard();
        let effects = dashboard.update(Message::Form(upload_form::Message::ChooseFile));
        assert_eq!(effects, vec![Effect::PickFile]);
    }
}
