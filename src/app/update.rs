// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.
//!
//! Screen components return [`Effect`]s describing the side effects they
//! need (dialogs, persistence, deletions); this module turns those into
//! Iced tasks and reports every outcome through the notification store.

use super::{App, BrandSlot, Message, Screen};
use crate::error::{AssetError, Error};
use crate::site::assets::{AssetLibrary, Category};
use crate::site::{images, theme};
use crate::ui::media_library;
use crate::ui::notifications::Notification;
use crate::ui::site_images;
use crate::ui::theme_editor;
use iced::Task;
use std::path::{Path, PathBuf};

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::SwitchScreen(screen) => {
            let refresh = screen == Screen::MediaLibrary && app.screen != screen;
            app.screen = screen;
            if refresh {
                refresh_assets(app)
            } else {
                Task::none()
            }
        }
        Message::ThemeModeSelected(mode) => {
            app.theme_mode = mode;
            app.config.general.theme_mode = mode;
            persist_config(app);
            Task::none()
        }
        Message::ThemeEditor(msg) => match app.theme_editor.update(msg) {
            theme_editor::Effect::None => Task::none(),
            theme_editor::Effect::Save => save_theme(app),
            theme_editor::Effect::PickLogo => pick_brand_image(BrandSlot::Logo),
            theme_editor::Effect::PickFavicon => pick_brand_image(BrandSlot::Favicon),
        },
        Message::ThemeSaved(Ok(())) => {
            app.theme_editor.mark_saved();
            app.notify(Notification::success(
                "Theme saved",
                "theme.toml and theme.css were updated.",
            ))
        }
        Message::ThemeSaved(Err(error)) => {
            app.notify(Notification::error("Theme not saved", error.to_string()))
        }
        Message::BrandPicked { slot, path } => match path {
            Some(path) => import_brand(app, slot, path),
            // Dialog canceled.
            None => Task::none(),
        },
        Message::BrandImported { slot, result } => match result {
            Ok(relative) => {
                let (slot_name, message) = match slot {
                    BrandSlot::Logo => {
                        app.theme_editor.set_logo(relative.clone());
                        ("Logo", format!("Save the theme to publish {}.", relative))
                    }
                    BrandSlot::Favicon => {
                        app.theme_editor.set_favicon(relative.clone());
                        ("Favicon", format!("Save the theme to publish {}.", relative))
                    }
                };
                app.notify(Notification::info(format!("{} updated", slot_name), message))
            }
            Err(error) => app.notify(Notification::error(
                "Image not imported",
                error.to_string(),
            )),
        },
        Message::MediaLibrary(msg) => match app.media_library.update(msg) {
            media_library::Effect::None => Task::none(),
            media_library::Effect::Refresh => refresh_assets(app),
            media_library::Effect::PickUpload => pick_upload(),
            media_library::Effect::Delete(name) => delete_asset(app, name),
        },
        Message::AssetsListed(Ok(assets)) => {
            app.media_library.set_assets(assets);
            Task::none()
        }
        Message::AssetsListed(Err(error)) => {
            app.media_library.set_assets(Vec::new());
            app.notify(Notification::error(
                "Could not list assets",
                error.to_string(),
            ))
        }
        Message::UploadPicked(Some(path)) => {
            let library = app.library.clone();
            let category = app.media_library.category();
            Task::perform(
                async move { library.upload(category, &path) },
                Message::UploadCompleted,
            )
        }
        Message::UploadPicked(None) => Task::none(),
        Message::UploadCompleted(Ok(info)) => {
            let toast = app.notify(Notification::success(
                "Asset uploaded",
                format!("{} was added to the library.", info.name),
            ));
            Task::batch([toast, refresh_assets(app)])
        }
        Message::UploadCompleted(Err(error)) => {
            app.notify(Notification::error("Upload failed", error.to_string()))
        }
        Message::DeleteCompleted { name, result } => match result {
            Ok(()) => {
                let toast = app.notify(Notification::success(
                    "Asset deleted",
                    format!("{} was removed from the library.", name),
                ));
                Task::batch([toast, refresh_assets(app)])
            }
            Err(error) => {
                app.notify(Notification::error("Delete failed", error.to_string()))
            }
        },
        Message::SiteImages(msg) => match app.site_images.update(msg) {
            site_images::Effect::None => Task::none(),
            site_images::Effect::Assign(key) => pick_site_image(key),
            site_images::Effect::Remove(key) => remove_site_image(app, &key),
        },
        Message::SiteImagePicked { key, path } => match path {
            Some(path) => {
                let library = app.library.clone();
                Task::perform(
                    async move { import_image(&library, &path) },
                    move |result| Message::SiteImageImported {
                        key: key.clone(),
                        result,
                    },
                )
            }
            None => Task::none(),
        },
        Message::SiteImageImported { key, result } => match result {
            Ok(relative) => assign_site_image(app, &key, relative),
            Err(error) => app.notify(Notification::error(
                "Image not imported",
                error.to_string(),
            )),
        },
        Message::Notification(msg) => {
            app.notifications.handle_message(&msg);
            Task::none()
        }
        Message::WindowCloseRequested(id) => {
            app.config.general.site_dir = Some(app.site_dir.clone());
            persist_config(app);
            iced::window::close(id)
        }
    }
}

/// Starts a listing of the media screen's selected category.
pub fn refresh_assets(app: &mut App) -> Task<Message> {
    app.media_library.set_loading();
    let library = app.library.clone();
    let category = app.media_library.category();
    Task::perform(async move { library.list(category) }, Message::AssetsListed)
}

fn save_theme(app: &mut App) -> Task<Message> {
    match app.theme_editor.to_theme() {
        Ok(site_theme) => {
            let site_dir = app.site_dir.clone();
            Task::perform(
                async move { theme::save(&site_theme, &site_dir) },
                Message::ThemeSaved,
            )
        }
        Err(error) => app.notify(Notification::error("Invalid theme", error.to_string())),
    }
}

fn import_brand(app: &mut App, slot: BrandSlot, path: PathBuf) -> Task<Message> {
    let library = app.library.clone();
    Task::perform(
        async move { import_image(&library, &path) },
        move |result| Message::BrandImported { slot, result },
    )
}

/// Copies an image into the images category and returns its site-relative
/// path. Re-picking a file that is already stored keeps the stored copy.
fn import_image(library: &AssetLibrary, source: &Path) -> Result<String, Error> {
    match library.upload(Category::Images, source) {
        Ok(info) => Ok(library.relative_path(Category::Images, &info.name)),
        Err(Error::Asset(AssetError::DuplicateName(name))) => {
            Ok(library.relative_path(Category::Images, &name))
        }
        Err(error) => Err(error),
    }
}

fn assign_site_image(app: &mut App, raw_key: &str, relative: String) -> Task<Message> {
    match app.registry.assign(raw_key, relative) {
        Ok(key) => {
            app.site_images.refresh(&app.registry);
            app.site_images.clear_input();
            match images::save(&app.registry, &app.site_dir) {
                Ok(()) => {
                    let path = app.registry.get(&key).unwrap_or_default().to_string();
                    app.notify(Notification::success(
                        "Site image assigned",
                        format!("{} now points at {}.", key, path),
                    ))
                }
                Err(error) => app.notify(Notification::error(
                    "Registry not saved",
                    error.to_string(),
                )),
            }
        }
        Err(error) => app.notify(Notification::error("Invalid key", error.to_string())),
    }
}

fn remove_site_image(app: &mut App, key: &str) -> Task<Message> {
    if !app.registry.remove(key) {
        return Task::none();
    }
    app.site_images.refresh(&app.registry);
    match images::save(&app.registry, &app.site_dir) {
        Ok(()) => app.notify(Notification::info(
            "Site image removed",
            format!("{} is no longer assigned.", key),
        )),
        Err(error) => app.notify(Notification::error(
            "Registry not saved",
            error.to_string(),
        )),
    }
}

fn delete_asset(app: &mut App, name: String) -> Task<Message> {
    let library = app.library.clone();
    let category = app.media_library.category();
    let reported = name.clone();
    Task::perform(
        async move { library.delete(category, &name) },
        move |result| Message::DeleteCompleted {
            name: reported.clone(),
            result,
        },
    )
}

fn pick_brand_image(slot: BrandSlot) -> Task<Message> {
    let title = match slot {
        BrandSlot::Logo => "Choose a logo image",
        BrandSlot::Favicon => "Choose a favicon",
    };
    Task::perform(pick_image_file(title), move |path| Message::BrandPicked {
        slot,
        path,
    })
}

fn pick_site_image(key: String) -> Task<Message> {
    Task::perform(pick_image_file("Choose a site image"), move |path| {
        Message::SiteImagePicked {
            key: key.clone(),
            path,
        }
    })
}

fn pick_upload() -> Task<Message> {
    let future = async {
        rfd::AsyncFileDialog::new()
            .set_title("Choose a file to upload")
            .pick_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    };
    Task::perform(future, Message::UploadPicked)
}

async fn pick_image_file(title: &'static str) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp", "ico"])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Best-effort config persistence; failures are logged, not surfaced.
fn persist_config(app: &App) {
    if let Err(error) = crate::config::save(&app.config) {
        log::error!("Failed to save config: {}", error);
    }
}
