// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::library::ImageData;
use crate::ui::image_list;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::tags_editor;
use crate::ui::viewer;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ImageList(image_list::Message),
    Viewer(viewer::Message),
    TagsEditor(tags_editor::Message),
    Settings(settings::Message),
    Notification(notifications::Message),
    SwitchScreen(Screen),
    /// Open the directory picker dialog.
    OpenDirectoryDialog,
    /// Result from the directory picker (`None` = cancelled).
    DirectoryPicked(Option<PathBuf>),
    /// Result from asynchronously decoding an image.
    ImageLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// Keyboard selection movement, forwarded even while the tag input has
    /// focus.
    SelectPrevious,
    SelectNext,
    SelectPageUp,
    SelectPageDown,
    /// The window was resized (tracked for session persistence).
    WindowResized(iced::Size),
    /// The window was moved (tracked for session persistence).
    WindowMoved(iced::Point),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional image directory to load on startup instead of the persisted
    /// one.
    pub directory: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over the `TAGVIEW_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `TAGVIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
