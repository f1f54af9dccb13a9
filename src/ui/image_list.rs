// SPDX-License-Identifier: MPL-2.0
//! Selectable image list panel.
//!
//! The panel owns the selection index; every selection change is reported to
//! the application as an [`Event`] so it can load the image, refresh the tag
//! editor, and persist the index.

use crate::library::ImageEntry;
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{alignment, Border, Element, Length, Theme};

/// Width of the image list panel in pixels.
pub const PANEL_WIDTH: f32 = 240.0;

/// Rows jumped by PageUp / PageDown.
const PAGE_JUMP: usize = 10;

/// Selection state for the image list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    selected: Option<usize>,
}

impl State {
    /// Creates a state with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Clears the selection without emitting an event. Used when a directory
    /// load replaces the list, right before the new index is selected.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Selects `index` clamped to the list length; returns the effective
    /// index, or `None` for an empty list.
    pub fn select_clamped(&mut self, index: usize, len: usize) -> Option<usize> {
        if len == 0 {
            self.selected = None;
            return None;
        }
        let index = index.min(len - 1);
        self.selected = Some(index);
        Some(index)
    }

    /// Moves the selection one row up; selects the last row when nothing is
    /// selected yet. Returns the new index if it changed.
    pub fn select_previous(&mut self, len: usize) -> Option<usize> {
        self.step(len, |current| current.saturating_sub(1), len.saturating_sub(1))
    }

    /// Moves the selection one row down; selects the first row when nothing
    /// is selected yet. Returns the new index if it changed.
    pub fn select_next(&mut self, len: usize) -> Option<usize> {
        self.step(len, |current| current + 1, 0)
    }

    /// Moves the selection a page up. Returns the new index if it changed.
    pub fn page_up(&mut self, len: usize) -> Option<usize> {
        self.step(len, |current| current.saturating_sub(PAGE_JUMP), 0)
    }

    /// Moves the selection a page down. Returns the new index if it changed.
    pub fn page_down(&mut self, len: usize) -> Option<usize> {
        self.step(len, |current| current + PAGE_JUMP, len.saturating_sub(1))
    }

    fn step(
        &mut self,
        len: usize,
        move_from: impl Fn(usize) -> usize,
        initial: usize,
    ) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let target = match self.selected {
            Some(current) => move_from(current).min(len - 1),
            None => initial.min(len - 1),
        };
        if self.selected == Some(target) {
            return None;
        }
        self.selected = Some(target);
        Some(target)
    }
}

/// Messages emitted by the image list panel.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A row was clicked.
    Select(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// Nothing the application needs to react to.
    None,
    /// The selection moved to a new index.
    SelectionChanged(usize),
}

/// Processes a panel message against the current list length.
pub fn update(state: &mut State, message: Message, len: usize) -> Event {
    match message {
        Message::Select(index) => {
            if index >= len || state.selected == Some(index) {
                return Event::None;
            }
            state.selected = Some(index);
            Event::SelectionChanged(index)
        }
    }
}

/// Contextual data needed to render the image list.
pub struct ViewContext<'a> {
    pub entries: &'a [ImageEntry],
    pub state: &'a State,
    pub font_size: u16,
}

/// Renders the image list panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(2).width(Length::Fill);

    if ctx.entries.is_empty() {
        rows = rows.push(
            text("No images")
                .size(f32::from(ctx.font_size))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        );
    }

    for (index, entry) in ctx.entries.iter().enumerate() {
        let is_selected = ctx.state.selected() == Some(index);

        let mut row = Row::new()
            .spacing(6)
            .align_y(alignment::Vertical::Center)
            .push(text(entry.file_name()).size(f32::from(ctx.font_size)));

        if !entry.tags.is_empty() {
            row = row
                .push(Space::new().width(Length::Fill))
                .push(text(entry.tags.len().to_string()).size(f32::from(ctx.font_size.saturating_sub(3))));
        }

        let mut row_button = button(row)
            .width(Length::Fill)
            .padding(6)
            .on_press(Message::Select(index));
        if is_selected {
            row_button = row_button.style(button::primary);
        } else {
            row_button = row_button.style(button::text);
        }

        rows = rows.push(row_button);
    }

    let list = scrollable(rows).width(Length::Fill).height(Length::Fill);

    container(list)
        .width(Length::Fixed(PANEL_WIDTH))
        .height(Length::Fill)
        .padding(8)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_message_changes_selection() {
        let mut state = State::new();
        let event = update(&mut state, Message::Select(2), 5);
        assert!(matches!(event, Event::SelectionChanged(2)));
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn reselecting_same_row_is_a_no_op() {
        let mut state = State::new();
        let _ = update(&mut state, Message::Select(2), 5);
        let event = update(&mut state, Message::Select(2), 5);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut state = State::new();
        let event = update(&mut state, Message::Select(9), 3);
        assert!(matches!(event, Event::None));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn select_clamped_limits_to_last_row() {
        let mut state = State::new();
        assert_eq!(state.select_clamped(10, 3), Some(2));
        assert_eq!(state.select_clamped(1, 3), Some(1));
        assert_eq!(state.select_clamped(0, 0), None);
    }

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        let mut state = State::new();
        state.select_clamped(0, 3);

        assert_eq!(state.select_previous(3), None);
        assert_eq!(state.select_next(3), Some(1));
        assert_eq!(state.select_next(3), Some(2));
        assert_eq!(state.select_next(3), None);
    }

    #[test]
    fn paging_jumps_and_clamps() {
        let mut state = State::new();
        state.select_clamped(0, 25);

        assert_eq!(state.page_down(25), Some(10));
        assert_eq!(state.page_down(25), Some(20));
        assert_eq!(state.page_down(25), Some(24));
        assert_eq!(state.page_up(25), Some(14));
    }

    #[test]
    fn movement_with_no_selection_picks_an_end() {
        let mut state = State::new();
        assert_eq!(state.select_next(4), Some(0));

        let mut state = State::new();
        assert_eq!(state.select_previous(4), Some(3));
    }

    #[test]
    fn movement_on_empty_list_does_nothing() {
        let mut state = State::new();
        assert_eq!(state.select_next(0), None);
        assert_eq!(state.page_down(0), None);
        assert_eq!(state.selected(), None);
    }
}
