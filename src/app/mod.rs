// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (site theme, asset library,
//! site-image registry) and translates messages into side effects like
//! file dialogs, persistence, and toast notifications. The notification
//! store lives here so any screen handler can emit feedback without
//! threading state through the widget tree.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{BrandSlot, Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config, DEFAULT_TOAST_LIFETIME_MS};
use crate::site::assets::AssetLibrary;
use crate::site::images::SiteImageRegistry;
use crate::site::{images, theme};
use crate::ui::media_library;
use crate::ui::notifications::{self, Lifetime, Notification};
use crate::ui::site_images;
use crate::ui::theme_editor;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Root Iced application state bridging the screens, the site domain, and
/// persisted preferences.
pub struct App {
    config: Config,
    screen: Screen,
    /// Directory of the managed website.
    site_dir: PathBuf,
    library: AssetLibrary,
    registry: SiteImageRegistry,
    theme_editor: theme_editor::State,
    media_library: media_library::State,
    site_images: site_images::State,
    theme_mode: ThemeMode,
    /// Lifetime applied to every toast the app emits.
    toast_lifetime: Lifetime,
    /// Toast notification store for user feedback.
    notifications: notifications::Store,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("site_dir", &self.site_dir)
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from flags and persisted configuration,
    /// then kicks off the initial asset listing.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();

        let site_dir = flags
            .site_dir
            .map(PathBuf::from)
            .or_else(|| config.general.site_dir.clone())
            .unwrap_or_else(default_site_dir);

        let library = AssetLibrary::new(&site_dir);
        let theme_mode = config.general.theme_mode;
        let toast_lifetime = Lifetime::from_millis(
            config
                .notifications
                .toast_lifetime_ms
                .unwrap_or(DEFAULT_TOAST_LIFETIME_MS),
        );

        let mut app = App {
            config,
            screen: Screen::default(),
            site_dir,
            library,
            registry: SiteImageRegistry::new(),
            theme_editor: theme_editor::State::default(),
            media_library: media_library::State::new(),
            site_images: site_images::State::new(),
            theme_mode,
            toast_lifetime,
            notifications: notifications::Store::new(),
        };

        let mut startup_tasks = Vec::new();

        if let Some(warning) = config_warning {
            startup_tasks.push(app.notify(Notification::warning("Settings not loaded", warning)));
        }

        if let Err(error) = app.library.ensure_layout() {
            startup_tasks.push(app.notify(Notification::error(
                "Site directory not ready",
                format!("{}: {}", app.site_dir.display(), error),
            )));
        }

        match theme::load(&app.site_dir) {
            Ok(site_theme) => app.theme_editor = theme_editor::State::from_theme(&site_theme),
            Err(error) => {
                app.theme_editor = theme_editor::State::from_theme(&theme::SiteTheme::default());
                startup_tasks
                    .push(app.notify(Notification::error("Theme not loaded", error.to_string())));
            }
        }

        match images::load(&app.site_dir) {
            Ok(registry) => {
                app.registry = registry;
                app.site_images.refresh(&app.registry);
            }
            Err(error) => {
                startup_tasks.push(
                    app.notify(Notification::error("Site images not loaded", error.to_string())),
                );
            }
        }

        startup_tasks.push(update::refresh_assets(&mut app));

        (app, Task::batch(startup_tasks))
    }

    fn title(&self) -> String {
        format!("Brandboard - {}", self.site_dir.display())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.widget_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            theme_mode: self.theme_mode,
            theme_editor: &self.theme_editor,
            media_library: &self.media_library,
            site_images: &self.site_images,
            notifications: &self.notifications,
            site_dir: &self.site_dir,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    /// Pushes a toast with the configured lifetime and returns its timer
    /// task mapped into the application message type.
    fn notify(&mut self, notification: Notification) -> Task<Message> {
        let notification = match self.toast_lifetime {
            Lifetime::Timed(duration) => notification.lifetime(duration),
            Lifetime::Persistent => notification.persistent(),
        };
        let (_id, task) = self.notifications.push(notification);
        task.map(Message::Notification)
    }
}

fn default_site_dir() -> PathBuf {
    std::env::current_dir()
        .map(|dir| dir.join("site"))
        .unwrap_or_else(|_| PathBuf::from("site"))
}
