// SPDX-License-Identifier: MPL-2.0
//! Application root state and the bridge between the dashboard and the runtime.
//!
//! The `App` struct owns localization, the theme and the HTTP client, and
//! turns the [`dashboard::Effect`]s returned by the state container into Iced
//! tasks. Policy decisions (window size, config bootstrap, URL overrides)
//! live here, next to the update loop.

pub mod dashboard;
mod message;
pub mod paths;
mod subscription;
mod view;
pub mod week;

pub use message::{Flags, Message};

use crate::api::{ApiClient, ApiError, StorageUrls};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::notifications::Notification;
use crate::ui::theming::ThemeMode;
use crate::ui::upload_form;
use dashboard::{Dashboard, Effect};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use week::WeekRange;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// `Err` when the configured API URL is unusable; every request then
    /// fails fast with that error.
    client: Result<ApiClient, ApiError>,
    dashboard: Dashboard,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("api", &self.client.as_ref().map(ApiClient::base_url))
            .field("users", &self.dashboard.users().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Applies CLI URL overrides on top of the loaded config.
fn apply_overrides(config: &mut Config, flags: &Flags) {
    if let Some(url) = flags.api_url.clone() {
        config.api.base_url = url;
    }
    if let Some(url) = flags.storage_url.clone() {
        config.storage.base_url = url;
    }
}

impl App {
    /// Loads settings, builds the client and kicks off the first user fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let first_run = !config::exists_with_override(None);
        let (mut config, config_warning) = config::load();
        if first_run {
            // Written before CLI overrides so the file holds the defaults.
            if let Err(err) = config::save(&config) {
                tracing::warn!(error = %err, "could not write default settings");
            }
        }
        apply_overrides(&mut config, &flags);

        let i18n = I18n::new(flags.lang.clone(), &config);
        let client = ApiClient::new(&config.api.base_url);
        if let Err(err) = &client {
            tracing::error!(error = %err, "API client unavailable");
        }

        let mut dashboard = Dashboard::new(
            StorageUrls::new(config.storage.base_url.clone()),
            config.storage.cache_entries(),
        );
        if let Some(key) = config_warning {
            dashboard.notify(Notification::warning(key));
        }

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            client,
            dashboard,
        };

        let effects = app.dashboard.start();
        let task = app.run_effects(effects);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let week = WeekRange::current();
        format!("{app_name} - {}", week.start_label())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub =
            subscription::create_tick_subscription(self.dashboard.notifications().is_visible());
        let keyboard_sub =
            subscription::create_keyboard_subscription(self.dashboard.dialog().is_open());

        Subscription::batch([tick_sub, keyboard_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Dashboard(message) => {
                let effects = self.dashboard.update(message);
                self.run_effects(effects)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            dashboard: &self.dashboard,
            week: WeekRange::current(),
        })
    }

    fn run_effects(&self, effects: Vec<Effect>) -> Task<Message> {
        Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
    }

    fn run_effect(&self, effect: Effect) -> Task<Message> {
        // Requests run concurrently; results are applied in arrival order.
        match effect {
            Effect::FetchUsers => {
                let client = self.client.clone();
                Task::perform(
                    async move {
                        match client {
                            Ok(client) => client.fetch_users().await,
                            Err(err) => Err(err),
                        }
                    },
                    |result| Message::Dashboard(dashboard::Message::UsersLoaded(result)),
                )
            }
            Effect::Upload(request) => {
                let client = self.client.clone();
                Task::perform(
                    async move {
                        match client {
                            Ok(client) => client.upload(request).await,
                            Err(err) => Err(err),
                        }
                    },
                    |result| Message::Dashboard(dashboard::Message::UploadFinished(result)),
                )
            }
            Effect::PickFile => {
                let filter_name = self.i18n.tr("form-choose-file");
                Task::perform(media::pick_image(filter_name), |result| {
                    Message::Dashboard(dashboard::Message::Form(
                        upload_form::Message::FilePicked(result),
                    ))
                })
            }
            Effect::FetchImage(url) => {
                let client = self.client.clone();
                Task::perform(
                    async move {
                        let result = match client {
                            Ok(client) => client.fetch_bytes(&url).await,
                            Err(err) => Err(err),
                        };
                        (url, result)
                    },
                    |(url, result)| {
                        Message::Dashboard(dashboard::Message::ImageFetched { url, result })
                    },
                )
            }
        }
    }
}
