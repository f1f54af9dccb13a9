// SPDX-License-Identifier: MPL-2.0
//! View rendering for the tag editor panel.

use super::{Message, TagEditorState};
use crate::library::TagCounts;
use iced::widget::{button, container, rule, scrollable, text, text_input, Column, Row, Space};
use iced::{alignment, Border, Element, Length, Theme};

/// Width of the tag editor panel in pixels.
pub const PANEL_WIDTH: f32 = 280.0;

/// Contextual data needed to render the tag editor.
pub struct ViewContext<'a> {
    pub state: &'a TagEditorState,
    pub counts: &'a TagCounts,
    pub font_size: u16,
}

/// Renders the tag editor panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text("Image tags").size(f32::from(ctx.font_size + 4));

    let mut input = text_input("Add tag…", ctx.state.input())
        .size(f32::from(ctx.font_size))
        .padding(6)
        .on_input(Message::InputChanged);
    if ctx.state.image_index().is_some() {
        input = input.on_submit(Message::InputSubmitted);
    }

    let mut panel = Column::new()
        .width(Length::Fill)
        .spacing(10)
        .padding(10)
        .push(title)
        .push(input)
        .push(tag_rows(ctx.state, ctx.font_size));

    if !ctx.counts.is_empty() {
        panel = panel
            .push(rule::horizontal(1))
            .push(text("All tags").size(f32::from(ctx.font_size + 2)))
            .push(count_rows(ctx.counts, ctx.font_size));
    }

    let scrollable_content = scrollable(panel).width(Length::Fixed(PANEL_WIDTH));

    container(scrollable_content)
        .width(Length::Fixed(PANEL_WIDTH))
        .height(Length::Fill)
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

/// Renders the ordered tag list with remove and reorder controls.
fn tag_rows<'a>(state: &'a TagEditorState, font_size: u16) -> Element<'a, Message> {
    let tags = state.tags();
    if tags.is_empty() {
        let hint = if state.image_index().is_some() {
            "No tags yet"
        } else {
            "Select an image to edit its tags"
        };
        return text(hint).size(f32::from(font_size)).into();
    }

    let mut rows = Column::new().spacing(4);
    let last = tags.len() - 1;

    for (index, tag) in tags.iter().enumerate() {
        let mut up = button(text("↑").size(f32::from(font_size.saturating_sub(2))))
            .style(button::text)
            .padding(2);
        if index > 0 {
            up = up.on_press(Message::MoveTagUp(index));
        }

        let mut down = button(text("↓").size(f32::from(font_size.saturating_sub(2))))
            .style(button::text)
            .padding(2);
        if index < last {
            down = down.on_press(Message::MoveTagDown(index));
        }

        let remove = button(text("✕").size(f32::from(font_size.saturating_sub(2))))
            .style(button::text)
            .padding(2)
            .on_press(Message::RemoveTag(index));

        rows = rows.push(
            Row::new()
                .spacing(4)
                .align_y(alignment::Vertical::Center)
                .push(text(tag.clone()).size(f32::from(font_size)))
                .push(Space::new().width(Length::Fill))
                .push(up)
                .push(down)
                .push(remove),
        );
    }

    rows.into()
}

/// Renders the all-tags count list; clicking a row adds that tag to the
/// current image.
fn count_rows<'a>(counts: &'a TagCounts, font_size: u16) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(2);

    for (tag, count) in counts.ordered() {
        let row = Row::new()
            .spacing(6)
            .align_y(alignment::Vertical::Center)
            .push(text(tag.clone()).size(f32::from(font_size)))
            .push(Space::new().width(Length::Fill))
            .push(text(count.to_string()).size(f32::from(font_size.saturating_sub(2))));

        rows = rows.push(
            button(row)
                .width(Length::Fill)
                .padding(4)
                .style(button::text)
                .on_press(Message::AddExisting(tag.clone())),
        );
    }

    rows.into()
}
