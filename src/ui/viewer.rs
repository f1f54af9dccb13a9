// SPDX-License-Identifier: MPL-2.0
//! Central image viewer panel.
//!
//! Displays the currently selected image scaled to fit, or an empty state
//! with a "Load directory" button when no directory is loaded yet.

use crate::library::ImageData;
use iced::widget::{button, container, text, Column, Image};
use iced::{alignment, ContentFit, Element, Length};
use std::path::{Path, PathBuf};

/// Viewer display state.
#[derive(Debug, Default)]
pub struct State {
    current: Option<ImageData>,
    current_path: Option<PathBuf>,
    is_loading: bool,
}

impl State {
    /// Creates an empty viewer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when an image is displayed.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the path of the displayed image, if any.
    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Marks the start of an asynchronous load for `path`.
    pub fn begin_loading(&mut self, path: PathBuf) {
        self.current_path = Some(path);
        self.is_loading = true;
    }

    /// Shows a freshly decoded image.
    ///
    /// The image is dropped if it does not belong to the path most recently
    /// requested; a slow decode must not overwrite a newer selection.
    pub fn show(&mut self, path: &Path, data: ImageData) {
        if self.current_path.as_deref() != Some(path) {
            return;
        }
        self.current = Some(data);
        self.is_loading = false;
    }

    /// Records a failed load for `path`, keeping the previous image visible.
    pub fn load_failed(&mut self, path: &Path) {
        if self.current_path.as_deref() == Some(path) {
            self.is_loading = false;
        }
    }

    /// Clears the viewer, returning it to the empty state.
    pub fn clear(&mut self) {
        self.current = None;
        self.current_path = None;
        self.is_loading = false;
    }
}

/// Messages emitted by the viewer panel.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The empty-state "Load directory" button was pressed.
    OpenDirectory,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// The user asked to pick a directory.
    OpenDirectoryRequested,
}

/// Processes a viewer message.
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenDirectory => Event::OpenDirectoryRequested,
    }
}

/// Contextual data needed to render the viewer.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub font_size: u16,
    /// Whether any directory is loaded (controls the empty state wording).
    pub has_directory: bool,
}

/// Renders the viewer panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = if let Some(data) = &ctx.state.current {
        Image::new(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else if ctx.state.is_loading {
        text("Loading…").size(f32::from(ctx.font_size)).into()
    } else if ctx.has_directory {
        // Directory loaded but nothing selected (or the directory is empty).
        text("No image selected").size(f32::from(ctx.font_size)).into()
    } else {
        empty_state(ctx.font_size)
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Renders the "no directory loaded" empty state.
fn empty_state<'a>(font_size: u16) -> Element<'a, Message> {
    Column::new()
        .spacing(12)
        .align_x(alignment::Horizontal::Center)
        .push(text("No directory loaded").size(f32::from(font_size)))
        .push(
            button(text("Load directory").size(f32::from(font_size)))
                .on_press(Message::OpenDirectory)
                .padding(10),
        )
        .into()
}
