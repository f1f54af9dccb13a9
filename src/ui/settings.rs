// SPDX-License-Identifier: MPL-2.0
//! Settings screen.
//!
//! Theme mode and sort order apply immediately; the font size and tag
//! separator inputs follow the dirty-input pattern: edits are held in the
//! screen state and committed when the user leaves, and an invalid value
//! keeps the user on the screen with an error message.

use crate::app::config::{SortOrder, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, pick_list, text, text_input, Column, Row};
use iced::{alignment, Element, Length};

/// Error shown when the font size input is not a number.
pub const FONT_SIZE_INVALID: &str = "Font size must be a whole number";

/// Error shown when the font size input is out of range.
pub const FONT_SIZE_RANGE: &str = "Font size must be between 8 and 40";

/// Error shown when the tag separator is blank.
pub const SEPARATOR_BLANK: &str = "Tag separator cannot be blank";

/// Initial values for the settings screen.
#[derive(Debug, Clone)]
pub struct StateConfig {
    pub font_size: u16,
    pub theme_mode: ThemeMode,
    pub sort_order: SortOrder,
    pub tag_separator: String,
}

/// Settings screen state.
#[derive(Debug, Clone)]
pub struct State {
    font_size: u16,
    font_size_input: String,
    font_size_dirty: bool,
    font_size_error: Option<&'static str>,
    theme_mode: ThemeMode,
    sort_order: SortOrder,
    tag_separator: String,
    separator_input: String,
    separator_dirty: bool,
    separator_error: Option<&'static str>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(StateConfig {
            font_size: crate::app::config::DEFAULT_FONT_SIZE,
            theme_mode: ThemeMode::default(),
            sort_order: SortOrder::default(),
            tag_separator: crate::app::config::DEFAULT_TAG_SEPARATOR.to_string(),
        })
    }
}

impl State {
    /// Creates the screen state from the current configuration.
    #[must_use]
    pub fn new(config: StateConfig) -> Self {
        Self {
            font_size: config.font_size,
            font_size_input: config.font_size.to_string(),
            font_size_dirty: false,
            font_size_error: None,
            theme_mode: config.theme_mode,
            sort_order: config.sort_order,
            tag_separator: config.tag_separator.clone(),
            separator_input: config.tag_separator,
            separator_dirty: false,
            separator_error: None,
        }
    }

    /// Committed font size.
    #[must_use]
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Current theme mode.
    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Current sort order.
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Committed tag separator.
    #[must_use]
    pub fn tag_separator(&self) -> &str {
        &self.tag_separator
    }

    /// Raw font size input value (for tests and rendering).
    #[must_use]
    pub fn font_size_input_value(&self) -> &str {
        &self.font_size_input
    }

    /// Whether the font size input has uncommitted edits.
    #[must_use]
    pub fn font_size_input_dirty(&self) -> bool {
        self.font_size_dirty
    }

    /// Current font size validation error, if any.
    #[must_use]
    pub fn font_size_error(&self) -> Option<&'static str> {
        self.font_size_error
    }

    /// Current separator validation error, if any.
    #[must_use]
    pub fn separator_error(&self) -> Option<&'static str> {
        self.separator_error
    }

    /// Validates and commits the dirty inputs.
    ///
    /// Returns `true` when everything is valid (the caller may leave the
    /// screen); on failure the error fields are set and the user stays.
    pub fn commit_inputs(&mut self) -> bool {
        let mut ok = true;

        if self.font_size_dirty {
            match self.font_size_input.trim().parse::<u16>() {
                Ok(size) if (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) => {
                    self.font_size = size;
                    self.font_size_dirty = false;
                    self.font_size_error = None;
                }
                Ok(_) => {
                    self.font_size_error = Some(FONT_SIZE_RANGE);
                    ok = false;
                }
                Err(_) => {
                    self.font_size_error = Some(FONT_SIZE_INVALID);
                    ok = false;
                }
            }
        }

        if self.separator_dirty {
            if self.separator_input.trim().is_empty() {
                self.separator_error = Some(SEPARATOR_BLANK);
                ok = false;
            } else {
                self.tag_separator = self.separator_input.clone();
                self.separator_dirty = false;
                self.separator_error = None;
            }
        }

        ok
    }
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    FontSizeInputChanged(String),
    TagSeparatorInputChanged(String),
    ThemeModeSelected(ThemeMode),
    SortOrderSelected(SortOrder),
    /// The back button was pressed.
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// No action needed.
    None,
    /// The theme mode changed; re-render and persist.
    ThemeChanged(ThemeMode),
    /// The sort order changed; persist (applies on the next directory load).
    SortOrderChanged(SortOrder),
    /// The user wants to leave the screen.
    BackRequested,
}

/// Processes a settings screen message.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FontSizeInputChanged(value) => {
            state.font_size_input = value;
            state.font_size_dirty = true;
            state.font_size_error = None;
            Event::None
        }
        Message::TagSeparatorInputChanged(value) => {
            state.separator_input = value;
            state.separator_dirty = true;
            state.separator_error = None;
            Event::None
        }
        Message::ThemeModeSelected(mode) => {
            state.theme_mode = mode;
            Event::ThemeChanged(mode)
        }
        Message::SortOrderSelected(order) => {
            state.sort_order = order;
            Event::SortOrderChanged(order)
        }
        Message::Back => Event::BackRequested,
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub font_size: u16,
}

/// Renders the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let font_size = ctx.font_size;
    let state = ctx.state;

    let mut font_row = Column::new().spacing(4).push(labeled_row(
        "Font size",
        text_input("16", &state.font_size_input)
            .size(f32::from(font_size))
            .padding(6)
            .width(Length::Fixed(80.0))
            .on_input(Message::FontSizeInputChanged)
            .into(),
        font_size,
    ));
    if let Some(error) = state.font_size_error() {
        font_row = font_row.push(error_text(error, font_size));
    }

    let mut separator_row = Column::new().spacing(4).push(labeled_row(
        "Tag separator",
        text_input(", ", &state.separator_input)
            .size(f32::from(font_size))
            .padding(6)
            .width(Length::Fixed(80.0))
            .on_input(Message::TagSeparatorInputChanged)
            .into(),
        font_size,
    ));
    if let Some(error) = state.separator_error() {
        separator_row = separator_row.push(error_text(error, font_size));
    }

    let theme_row = labeled_row(
        "Theme",
        pick_list(
            ThemeMode::ALL,
            Some(state.theme_mode()),
            Message::ThemeModeSelected,
        )
        .text_size(f32::from(font_size))
        .into(),
        font_size,
    );

    let sort_row = labeled_row(
        "Sort images by",
        pick_list(
            SortOrder::ALL,
            Some(state.sort_order()),
            Message::SortOrderSelected,
        )
        .text_size(f32::from(font_size))
        .into(),
        font_size,
    );

    let content = Column::new()
        .spacing(16)
        .max_width(420)
        .push(text("Settings").size(f32::from(font_size + 8)))
        .push(font_row)
        .push(separator_row)
        .push(theme_row)
        .push(sort_row)
        .push(
            button(text("Back").size(f32::from(font_size)))
                .padding(8)
                .on_press(Message::Back),
        );

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(24)
        .into()
}

fn labeled_row<'a>(
    label: &'a str,
    control: Element<'a, Message>,
    font_size: u16,
) -> Element<'a, Message> {
    Row::new()
        .spacing(12)
        .align_y(alignment::Vertical::Center)
        .push(text(label).size(f32::from(font_size)).width(Length::Fixed(140.0)))
        .push(control)
        .into()
}

fn error_text<'a>(error: &'a str, font_size: u16) -> Element<'a, Message> {
    text(error)
        .size(f32::from(font_size.saturating_sub(2)))
        .color(iced::Color::from_rgb(0.85, 0.25, 0.25))
        .into()
}
