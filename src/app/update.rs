// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! The handlers borrow the application state through [`UpdateContext`] so the
//! dispatch in `App::update` stays a flat match. The ordering invariant lives
//! here: every tag-editor event is flushed back into the image list model (and
//! the sidecar on disk) within the same call, so a later selection change can
//! never observe unflushed edits.

use super::persistence;
use super::{persisted_state, Message, Screen};
use crate::app::config::SortOrder;
use crate::library::{self, ImageCache, ImageListModel, TagCounts};
use crate::ui::image_list;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings;
use crate::ui::tags_editor::{self, TagEditorState};
use crate::ui::theming::ThemeMode;
use crate::ui::viewer;
use iced::Task;
use std::path::{Path, PathBuf};

/// Mutable view of the application state for the update handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub image_list_model: &'a mut ImageListModel,
    pub tag_counts: &'a mut TagCounts,
    pub image_list: &'a mut image_list::State,
    pub viewer: &'a mut viewer::State,
    pub tags_editor: &'a mut TagEditorState,
    pub settings: &'a mut settings::State,
    pub notifications: &'a mut notifications::Manager,
    pub image_cache: &'a mut ImageCache,
    pub app_state: &'a mut persisted_state::AppState,
    pub theme_mode: &'a mut ThemeMode,
    pub font_size: &'a mut u16,
    pub sort_order: &'a mut SortOrder,
    pub tag_separator: &'a mut String,
    pub window_size: &'a mut iced::Size,
    pub window_position: &'a mut Option<iced::Point>,
}

/// Keyboard selection movement.
#[derive(Debug, Clone, Copy)]
pub enum Movement {
    Previous,
    Next,
    PageUp,
    PageDown,
}

/// Handles clicks in the image list panel.
pub fn handle_image_list_message(
    ctx: &mut UpdateContext<'_>,
    message: image_list::Message,
) -> Task<Message> {
    let len = ctx.image_list_model.len();
    match image_list::update(ctx.image_list, message, len) {
        image_list::Event::None => Task::none(),
        image_list::Event::SelectionChanged(index) => select_image(ctx, index),
    }
}

/// Handles viewer panel events (the empty-state open button).
pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    match viewer::update(message) {
        viewer::Event::OpenDirectoryRequested => {
            handle_open_directory_dialog(ctx.app_state.directory_path.clone())
        }
    }
}

/// Handles tag editor events, flushing edits straight back into the model.
pub fn handle_tags_editor_message(
    ctx: &mut UpdateContext<'_>,
    message: tags_editor::Message,
) -> Task<Message> {
    match tags_editor::update(ctx.tags_editor, message) {
        tags_editor::Event::None => {}
        tags_editor::Event::TagsEdited => flush_editor_tags(ctx),
        tags_editor::Event::DuplicateRejected(tag) => {
            ctx.notifications.push(Notification::warning(format!(
                "Tag \"{tag}\" is already on this image"
            )));
        }
    }
    Task::none()
}

/// Handles settings screen events.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(ctx.settings, message) {
        settings::Event::None => Task::none(),
        settings::Event::ThemeChanged(mode) => {
            *ctx.theme_mode = mode;
            persist_preferences(ctx);
            Task::none()
        }
        settings::Event::SortOrderChanged(order) => {
            *ctx.sort_order = order;
            persist_preferences(ctx);
            Task::none()
        }
        settings::Event::BackRequested => handle_screen_switch(ctx, Screen::Tagger),
    }
}

/// Switches screens, committing dirty settings inputs first.
///
/// Leaving the settings screen with an invalid input keeps the user there
/// with the error visible.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == Screen::Settings && target != Screen::Settings {
        if !ctx.settings.commit_inputs() {
            return Task::none();
        }
        *ctx.font_size = ctx.settings.font_size();
        *ctx.tag_separator = ctx.settings.tag_separator().to_string();
        persist_preferences(ctx);
    }
    *ctx.screen = target;
    Task::none()
}

/// Opens the async directory picker, starting from the last used directory.
pub fn handle_open_directory_dialog(initial_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title("Select directory to load images from");
            if let Some(directory) = initial_directory {
                dialog = dialog.set_directory(directory);
            }
            dialog
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::DirectoryPicked,
    )
}

/// Handles the directory picker result. Cancel is a no-op.
pub fn handle_directory_picked(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    match path {
        Some(path) => load_directory(ctx, &path, 0),
        None => Task::none(),
    }
}

/// Rebuilds the image list from `directory` and selects `select_index`
/// (clamped). Index 0 is used for fresh loads; a persisted index is passed
/// when restoring the previous session.
pub fn load_directory(
    ctx: &mut UpdateContext<'_>,
    directory: &Path,
    select_index: usize,
) -> Task<Message> {
    // Unbind the editor first so nothing can flush into the rebuilt list.
    ctx.tags_editor.clear();
    ctx.image_list.clear();
    ctx.image_cache.clear();

    if let Err(error) =
        ctx.image_list_model
            .load_directory(directory, *ctx.sort_order, ctx.tag_separator)
    {
        ctx.image_list_model.clear();
        ctx.notifications.push(Notification::warning(format!(
            "Could not read {}: {error}",
            directory.display()
        )));
    }

    ctx.app_state.directory_path = ctx.image_list_model.directory().map(Path::to_path_buf);
    ctx.app_state.image_index = None;
    ctx.tag_counts.recount(ctx.image_list_model.entries());

    let len = ctx.image_list_model.len();
    match ctx.image_list.select_clamped(select_index, len) {
        Some(index) => select_image(ctx, index),
        None => {
            ctx.viewer.clear();
            persistence::save_session(ctx.app_state, ctx.notifications);
            Task::none()
        }
    }
}

/// Makes `index` the current image: loads its tags into the editor, persists
/// the index, and starts (or resolves from cache) the image decode.
pub fn select_image(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    let Some((path, tags)) = ctx
        .image_list_model
        .get(index)
        .map(|entry| (entry.path.clone(), entry.tags.clone()))
    else {
        ctx.viewer.clear();
        ctx.tags_editor.clear();
        return Task::none();
    };

    ctx.tags_editor.load(index, tags);
    ctx.app_state.image_index = Some(index);
    persistence::save_session(ctx.app_state, ctx.notifications);

    ctx.viewer.begin_loading(path.clone());
    if let Some(data) = ctx.image_cache.get(&path) {
        ctx.viewer.show(&path, data);
        return Task::none();
    }

    // Decode on the blocking pool; image decoding is CPU-bound and must not
    // stall the event loop's reactor.
    Task::perform(
        async move {
            let decode_path = path.clone();
            let result =
                match tokio::task::spawn_blocking(move || library::load_image(&decode_path)).await
                {
                    Ok(result) => result,
                    Err(join_error) => Err(crate::error::Error::Io(join_error.to_string())),
                };
            (path, result)
        },
        |(path, result)| Message::ImageLoaded { path, result },
    )
}

/// Handles keyboard selection movement.
pub fn handle_movement(ctx: &mut UpdateContext<'_>, movement: Movement) -> Task<Message> {
    let len = ctx.image_list_model.len();
    let moved = match movement {
        Movement::Previous => ctx.image_list.select_previous(len),
        Movement::Next => ctx.image_list.select_next(len),
        Movement::PageUp => ctx.image_list.page_up(len),
        Movement::PageDown => ctx.image_list.page_down(len),
    };
    match moved {
        Some(index) => select_image(ctx, index),
        None => Task::none(),
    }
}

/// Handles a finished image decode.
pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: crate::error::Result<library::ImageData>,
) -> Task<Message> {
    match result {
        Ok(data) => {
            ctx.image_cache.put(path.clone(), data.clone());
            ctx.viewer.show(&path, data);
        }
        Err(error) => {
            ctx.viewer.load_failed(&path);
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ctx.notifications
                .push(Notification::error(format!("Could not load {name}: {error}")));
        }
    }
    Task::none()
}

/// Saves the session state and closes the window.
pub fn handle_window_close(
    ctx: &mut UpdateContext<'_>,
    id: iced::window::Id,
) -> Task<Message> {
    ctx.app_state.geometry = Some(persisted_state::WindowGeometry {
        width: ctx.window_size.width,
        height: ctx.window_size.height,
        x: ctx.window_position.map(|p| p.x),
        y: ctx.window_position.map(|p| p.y),
    });
    persistence::save_session(ctx.app_state, ctx.notifications);
    iced::window::close(id)
}

/// Writes the editor's tag list back to the image list model at the editor's
/// captured index, then recounts the tag table.
pub(super) fn flush_editor_tags(ctx: &mut UpdateContext<'_>) {
    let Some(index) = ctx.tags_editor.image_index() else {
        return;
    };

    if let Err(error) = ctx.image_list_model.update_tags(
        index,
        ctx.tags_editor.tags().to_vec(),
        ctx.tag_separator,
    ) {
        ctx.notifications
            .push(Notification::error(format!("Could not save tags: {error}")));
    }
    ctx.tag_counts.recount(ctx.image_list_model.entries());
}

fn persist_preferences(ctx: &mut UpdateContext<'_>) {
    persistence::persist_preferences(
        *ctx.font_size,
        *ctx.theme_mode,
        *ctx.sort_order,
        ctx.tag_separator,
        ctx.notifications,
    );
}
