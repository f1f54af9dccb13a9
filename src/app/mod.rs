// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the panels.
//!
//! The `App` struct wires together the image library, the three workspace
//! panels, the settings screen, and the persistence layer, and translates
//! messages into side effects like sidecar writes or session saves. Policy
//! decisions (what happens on selection change, when state is persisted)
//! stay close to the main update loop so user-facing behavior is easy to
//! audit.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
pub mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::library::{ImageCache, ImageListModel, TagCounts};
use crate::ui::image_list;
use crate::ui::notifications;
use crate::ui::settings::{self, State as SettingsState, StateConfig as SettingsConfig};
use crate::ui::tags_editor::TagEditorState;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer;
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges the panels, the image library,
/// and persisted preferences.
pub struct App {
    screen: Screen,
    image_list_model: ImageListModel,
    tag_counts: TagCounts,
    image_list: image_list::State,
    viewer: viewer::State,
    tags_editor: TagEditorState,
    settings: SettingsState,
    notifications: notifications::Manager,
    image_cache: ImageCache,
    /// Persisted session state (last directory, selection, geometry).
    app_state: persisted_state::AppState,
    theme_mode: ThemeMode,
    font_size: u16,
    sort_order: config::SortOrder,
    tag_separator: String,
    /// Live window geometry, tracked from window events for the close-time
    /// session save.
    window_size: Size,
    window_position: Option<Point>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("images", &self.image_list_model.len())
            .field("selected", &self.image_list.selected())
            .finish()
    }
}

/// Builds the window settings, restoring the persisted geometry when there
/// is one.
fn window_settings(geometry: Option<persisted_state::WindowGeometry>) -> window::Settings {
    let size = geometry
        .map(|g| Size::new(g.width, g.height))
        .unwrap_or_else(|| {
            Size::new(
                config::WINDOW_DEFAULT_WIDTH as f32,
                config::WINDOW_DEFAULT_HEIGHT as f32,
            )
        });

    let position = geometry
        .and_then(|g| match (g.x, g.y) {
            (Some(x), Some(y)) => Some(window::Position::Specific(Point::new(x, y))),
            _ => None,
        })
        .unwrap_or(window::Position::Default);

    window::Settings {
        size,
        position,
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests are intercepted so the session can be saved first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // Geometry and font size must be known before the window opens.
    let (restored, _) = persisted_state::AppState::load();
    let (startup_config, _) = config::load();

    let settings = iced::Settings {
        default_text_size: iced::Pixels(f32::from(startup_config.font_size())),
        ..iced::Settings::default()
    };

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
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
        .settings(settings)
        .window(window_settings(restored.geometry))
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Tagger,
            image_list_model: ImageListModel::new(),
            tag_counts: TagCounts::new(),
            image_list: image_list::State::new(),
            viewer: viewer::State::new(),
            tags_editor: TagEditorState::new(),
            settings: SettingsState::default(),
            notifications: notifications::Manager::new(),
            image_cache: ImageCache::new(),
            app_state: persisted_state::AppState::default(),
            theme_mode: ThemeMode::System,
            font_size: config::DEFAULT_FONT_SIZE,
            sort_order: config::SortOrder::default(),
            tag_separator: config::DEFAULT_TAG_SEPARATOR.to_string(),
            window_size: Size::new(
                config::WINDOW_DEFAULT_WIDTH as f32,
                config::WINDOW_DEFAULT_HEIGHT as f32,
            ),
            window_position: None,
        }
    }
}

impl App {
    /// Initializes application state and reloads the previous session (or the
    /// directory given on the command line).
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = App::default();
        app.font_size = config.font_size();
        app.theme_mode = config.general.theme_mode;
        app.sort_order = config.sort_order();
        app.tag_separator = config.tag_separator();
        app.settings = SettingsState::new(SettingsConfig {
            font_size: app.font_size,
            theme_mode: app.theme_mode,
            sort_order: app.sort_order,
            tag_separator: app.tag_separator.clone(),
        });

        if let Some(geometry) = app_state.geometry {
            app.window_size = Size::new(geometry.width, geometry.height);
            if let (Some(x), Some(y)) = (geometry.x, geometry.y) {
                app.window_position = Some(Point::new(x, y));
            }
        }
        app.app_state = app_state;

        if let Some(warning) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }
        if let Some(warning) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        // A directory argument beats the persisted session; the persisted
        // session restores the previous selection index.
        let startup = flags
            .directory
            .map(|dir| (PathBuf::from(dir), 0))
            .or_else(|| {
                app.app_state
                    .directory_path
                    .clone()
                    .map(|dir| (dir, app.app_state.image_index.unwrap_or(0)))
            });

        let task = match startup {
            Some((directory, index)) => {
                let mut ctx = app.update_context();
                update::load_directory(&mut ctx, &directory, index)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = "TagView";
        match self
            .viewer
            .current_path()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
        {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = subscription::create_event_subscription(self.screen);
        let ticks =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        Subscription::batch([events, ticks])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            image_list_model: &mut self.image_list_model,
            tag_counts: &mut self.tag_counts,
            image_list: &mut self.image_list,
            viewer: &mut self.viewer,
            tags_editor: &mut self.tags_editor,
            settings: &mut self.settings,
            notifications: &mut self.notifications,
            image_cache: &mut self.image_cache,
            app_state: &mut self.app_state,
            theme_mode: &mut self.theme_mode,
            font_size: &mut self.font_size,
            sort_order: &mut self.sort_order,
            tag_separator: &mut self.tag_separator,
            window_size: &mut self.window_size,
            window_position: &mut self.window_position,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ImageList(panel_message) => {
                let mut ctx = self.update_context();
                update::handle_image_list_message(&mut ctx, panel_message)
            }
            Message::Viewer(panel_message) => {
                let mut ctx = self.update_context();
                update::handle_viewer_message(&mut ctx, panel_message)
            }
            Message::TagsEditor(panel_message) => {
                let mut ctx = self.update_context();
                update::handle_tags_editor_message(&mut ctx, panel_message)
            }
            Message::Settings(screen_message) => {
                let mut ctx = self.update_context();
                update::handle_settings_message(&mut ctx, screen_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::SwitchScreen(target) => {
                let mut ctx = self.update_context();
                update::handle_screen_switch(&mut ctx, target)
            }
            Message::OpenDirectoryDialog => {
                update::handle_open_directory_dialog(self.app_state.directory_path.clone())
            }
            Message::DirectoryPicked(path) => {
                let mut ctx = self.update_context();
                update::handle_directory_picked(&mut ctx, path)
            }
            Message::ImageLoaded { path, result } => {
                let mut ctx = self.update_context();
                update::handle_image_loaded(&mut ctx, path, result)
            }
            Message::SelectPrevious => self.handle_movement(update::Movement::Previous),
            Message::SelectNext => self.handle_movement(update::Movement::Next),
            Message::SelectPageUp => self.handle_movement(update::Movement::PageUp),
            Message::SelectPageDown => self.handle_movement(update::Movement::PageDown),
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
            Message::WindowMoved(position) => {
                self.window_position = Some(position);
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                let mut ctx = self.update_context();
                update::handle_window_close(&mut ctx, id)
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn handle_movement(&mut self, movement: update::Movement) -> Task<Message> {
        let mut ctx = self.update_context();
        update::handle_movement(&mut ctx, movement)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            image_list_model: &self.image_list_model,
            tag_counts: &self.tag_counts,
            image_list: &self.image_list,
            viewer: &self.viewer,
            tags_editor: &self.tags_editor,
            settings: &self.settings,
            notifications: &self.notifications,
            font_size: self.font_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::settings;
    use crate::ui::tags_editor;
    use std::fs;
    use std::path::Path;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    /// Runs a test with the data and config directories redirected into a
    /// temporary directory, so session saves cannot touch the real ones.
    fn with_temp_dirs<F>(test: F)
    where
        F: FnOnce(&Path),
    {
        let _guard = env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous_data = std::env::var(paths::ENV_DATA_DIR).ok();
        let previous_config = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_DATA_DIR, temp_dir.path().join("data"));
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path().join("config"));

        test(temp_dir.path());

        match previous_data {
            Some(value) => std::env::set_var(paths::ENV_DATA_DIR, value),
            None => std::env::remove_var(paths::ENV_DATA_DIR),
        }
        match previous_config {
            Some(value) => std::env::set_var(paths::ENV_CONFIG_DIR, value),
            None => std::env::remove_var(paths::ENV_CONFIG_DIR),
        }
    }

    /// Creates a directory of fake image files with optional sidecars.
    fn seed_images(root: &Path, names: &[(&str, Option<&str>)]) -> std::path::PathBuf {
        let dir = root.join("photos");
        fs::create_dir_all(&dir).expect("create photos dir");
        for (name, tags) in names {
            fs::write(dir.join(name), b"fake").expect("write image");
            if let Some(tags) = tags {
                let sidecar = Path::new(name).with_extension("txt");
                fs::write(dir.join(sidecar), tags).expect("write sidecar");
            }
        }
        dir
    }

    fn app_with_directory(root: &Path, names: &[(&str, Option<&str>)]) -> App {
        let dir = seed_images(root, names);
        let mut app = App::default();
        let mut ctx = app.update_context();
        let _ = update::load_directory(&mut ctx, &dir, 0);
        app
    }

    #[test]
    fn new_starts_in_tagger_screen_without_images() {
        with_temp_dirs(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Tagger);
            assert!(app.image_list_model.is_empty());
            assert!(!app.viewer.has_image());
        });
    }

    #[test]
    fn loading_directory_selects_first_image_and_its_tags() {
        with_temp_dirs(|root| {
            let app = app_with_directory(
                root,
                &[("a.jpg", Some("cat, gray")), ("b.jpg", None)],
            );

            assert_eq!(app.image_list.selected(), Some(0));
            assert_eq!(app.tags_editor.image_index(), Some(0));
            assert_eq!(
                app.tags_editor.tags(),
                ["cat".to_string(), "gray".to_string()]
            );
            assert_eq!(app.tag_counts.count_for("cat"), 1);
        });
    }

    #[test]
    fn selecting_an_image_loads_exactly_its_tags() {
        with_temp_dirs(|root| {
            let mut app = app_with_directory(
                root,
                &[("a.jpg", Some("cat")), ("b.jpg", Some("dog, brown"))],
            );

            let _ = app.update(Message::ImageList(crate::ui::image_list::Message::Select(1)));

            assert_eq!(app.tags_editor.image_index(), Some(1));
            assert_eq!(
                app.tags_editor.tags(),
                ["dog".to_string(), "brown".to_string()]
            );
        });
    }

    #[test]
    fn edits_survive_switching_away_and_back() {
        with_temp_dirs(|root| {
            let mut app =
                app_with_directory(root, &[("a.jpg", Some("cat")), ("b.jpg", None)]);

            let _ = app.update(Message::TagsEditor(tags_editor::Message::InputChanged(
                "fluffy".to_string(),
            )));
            let _ = app.update(Message::TagsEditor(tags_editor::Message::InputSubmitted));

            let _ = app.update(Message::ImageList(crate::ui::image_list::Message::Select(1)));
            let _ = app.update(Message::ImageList(crate::ui::image_list::Message::Select(0)));

            assert_eq!(
                app.tags_editor.tags(),
                ["cat".to_string(), "fluffy".to_string()]
            );
        });
    }

    #[test]
    fn tag_edits_update_counts_and_sidecar() {
        with_temp_dirs(|root| {
            let mut app =
                app_with_directory(root, &[("a.jpg", Some("cat")), ("b.jpg", Some("cat"))]);
            assert_eq!(app.tag_counts.count_for("cat"), 2);

            // Remove "cat" from the first image.
            let _ = app.update(Message::TagsEditor(tags_editor::Message::RemoveTag(0)));

            assert_eq!(app.tag_counts.count_for("cat"), 1);
            let dir = app.image_list_model.directory().expect("dir loaded");
            assert!(!dir.join("a.txt").exists(), "empty sidecar is removed");
        });
    }

    #[test]
    fn counts_equal_multiset_union_after_edits() {
        with_temp_dirs(|root| {
            let mut app = app_with_directory(
                root,
                &[("a.jpg", Some("cat, gray")), ("b.jpg", Some("cat"))],
            );

            let _ = app.update(Message::TagsEditor(tags_editor::Message::InputChanged(
                "gray".to_string(),
            )));
            let _ = app.update(Message::TagsEditor(tags_editor::Message::InputSubmitted));
            // "gray" was already on image 0, so nothing changed.
            assert_eq!(app.tag_counts.count_for("gray"), 1);

            let _ = app.update(Message::ImageList(crate::ui::image_list::Message::Select(1)));
            let _ = app.update(Message::TagsEditor(tags_editor::Message::AddExisting(
                "gray".to_string(),
            )));
            assert_eq!(app.tag_counts.count_for("gray"), 2);
            assert_eq!(app.tag_counts.count_for("cat"), 2);
        });
    }

    #[test]
    fn duplicate_tag_is_rejected_with_a_warning() {
        with_temp_dirs(|root| {
            let mut app = app_with_directory(root, &[("a.jpg", Some("cat"))]);

            let _ = app.update(Message::TagsEditor(tags_editor::Message::AddExisting(
                "cat".to_string(),
            )));

            assert_eq!(app.tags_editor.tags().len(), 1);
            assert!(app.notifications.has_notifications());
        });
    }

    #[test]
    fn reloading_a_directory_resets_selection_to_first() {
        with_temp_dirs(|root| {
            let mut app =
                app_with_directory(root, &[("a.jpg", None), ("b.jpg", None), ("c.jpg", None)]);
            let dir = app
                .image_list_model
                .directory()
                .expect("dir loaded")
                .to_path_buf();

            let _ = app.update(Message::ImageList(crate::ui::image_list::Message::Select(2)));
            assert_eq!(app.image_list.selected(), Some(2));

            let _ = app.update(Message::DirectoryPicked(Some(dir)));
            assert_eq!(app.image_list.selected(), Some(0));
        });
    }

    #[test]
    fn restored_index_survives_restart_and_is_clamped() {
        with_temp_dirs(|root| {
            let dir = seed_images(root, &[("a.jpg", None), ("b.jpg", None)]);

            // Previous session selected index 1.
            let state = persisted_state::AppState {
                geometry: None,
                directory_path: Some(dir.clone()),
                image_index: Some(1),
            };
            assert!(state.save().is_none());

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.image_list.selected(), Some(1));

            // An index past the end (directory shrank) is clamped.
            let state = persisted_state::AppState {
                geometry: None,
                directory_path: Some(dir),
                image_index: Some(99),
            };
            assert!(state.save().is_none());

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.image_list.selected(), Some(1));
        });
    }

    #[test]
    fn missing_restored_directory_yields_empty_list_with_warning() {
        with_temp_dirs(|root| {
            let state = persisted_state::AppState {
                geometry: None,
                directory_path: Some(root.join("vanished")),
                image_index: Some(3),
            };
            assert!(state.save().is_none());

            let (app, _task) = App::new(Flags::default());
            assert!(app.image_list_model.is_empty());
            assert_eq!(app.image_list.selected(), None);
            assert!(app.notifications.has_notifications());
        });
    }

    #[test]
    fn cancelled_directory_picker_is_a_no_op() {
        with_temp_dirs(|root| {
            let mut app = app_with_directory(root, &[("a.jpg", None)]);
            let _ = app.update(Message::DirectoryPicked(None));
            assert_eq!(app.image_list_model.len(), 1);
            assert_eq!(app.image_list.selected(), Some(0));
        });
    }

    #[test]
    fn selection_keys_move_the_selection() {
        with_temp_dirs(|root| {
            let mut app =
                app_with_directory(root, &[("a.jpg", None), ("b.jpg", None), ("c.jpg", None)]);

            let _ = app.update(Message::SelectNext);
            assert_eq!(app.image_list.selected(), Some(1));
            let _ = app.update(Message::SelectPrevious);
            assert_eq!(app.image_list.selected(), Some(0));
            let _ = app.update(Message::SelectPageDown);
            assert_eq!(app.image_list.selected(), Some(2));
        });
    }

    #[test]
    fn font_size_changes_commit_when_leaving_settings() {
        with_temp_dirs(|_| {
            let mut app = App {
                screen: Screen::Settings,
                ..App::default()
            };
            let _ = app.update(Message::Settings(settings::Message::FontSizeInputChanged(
                "20".into(),
            )));

            let _ = app.update(Message::SwitchScreen(Screen::Tagger));

            assert_eq!(app.screen, Screen::Tagger);
            assert_eq!(app.font_size, 20);
            assert!(!app.settings.font_size_input_dirty());
        });
    }

    #[test]
    fn invalid_font_size_prevents_leaving_settings() {
        with_temp_dirs(|_| {
            let mut app = App {
                screen: Screen::Settings,
                ..App::default()
            };
            let _ = app.update(Message::Settings(settings::Message::FontSizeInputChanged(
                "not-a-number".into(),
            )));

            let _ = app.update(Message::SwitchScreen(Screen::Tagger));

            assert_eq!(app.screen, Screen::Settings);
            assert_eq!(
                app.settings.font_size_error(),
                Some(settings::FONT_SIZE_INVALID)
            );
            assert_eq!(app.font_size, config::DEFAULT_FONT_SIZE);
        });
    }

    #[test]
    fn theme_change_applies_immediately() {
        with_temp_dirs(|_| {
            let mut app = App {
                screen: Screen::Settings,
                ..App::default()
            };
            let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
                ThemeMode::Light,
            )));
            assert_eq!(app.theme_mode, ThemeMode::Light);
            assert_eq!(app.theme(), Theme::Light);
        });
    }

    #[test]
    fn close_request_saves_geometry_and_session() {
        with_temp_dirs(|root| {
            let mut app = app_with_directory(root, &[("a.jpg", None)]);
            app.window_size = Size::new(1024.0, 640.0);
            app.window_position = Some(Point::new(12.0, 34.0));

            let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

            let geometry = app.app_state.geometry.expect("geometry saved");
            assert_eq!(geometry.width, 1024.0);
            assert_eq!(geometry.x, Some(12.0));

            // The state file must exist on disk, written synchronously.
            let (loaded, warning) = persisted_state::AppState::load();
            assert!(warning.is_none());
            assert_eq!(loaded.geometry, app.app_state.geometry);
            assert_eq!(loaded.image_index, Some(0));
        });
    }

    #[test]
    fn window_events_track_geometry() {
        with_temp_dirs(|_| {
            let mut app = App::default();
            let _ = app.update(Message::WindowResized(Size::new(900.0, 700.0)));
            let _ = app.update(Message::WindowMoved(Point::new(5.0, 6.0)));
            assert_eq!(app.window_size, Size::new(900.0, 700.0));
            assert_eq!(app.window_position, Some(Point::new(5.0, 6.0)));
        });
    }

    #[test]
    fn title_shows_selected_file_name() {
        with_temp_dirs(|root| {
            let app = App::default();
            assert_eq!(app.title(), "TagView");

            let app = app_with_directory(root, &[("a.jpg", None)]);
            assert_eq!(app.title(), "a.jpg - TagView");
        });
    }
}
