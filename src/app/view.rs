// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen and overlays the toast notifications.

use super::{Message, Screen};
use crate::library::{ImageListModel, TagCounts};
use crate::ui::image_list;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::tags_editor;
use crate::ui::viewer;
use iced::widget::{button, text, Column, Row, Space, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub image_list_model: &'a ImageListModel,
    pub tag_counts: &'a TagCounts,
    pub image_list: &'a image_list::State,
    pub viewer: &'a viewer::State,
    pub tags_editor: &'a tags_editor::TagEditorState,
    pub settings: &'a settings::State,
    pub notifications: &'a notifications::Manager,
    pub font_size: u16,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen_content: Element<'_, Message> = match ctx.screen {
        Screen::Tagger => view_tagger(&ctx),
        Screen::Settings => settings::view(settings::ViewContext {
            state: ctx.settings,
            font_size: ctx.font_size,
        })
        .map(Message::Settings),
    };

    let toasts = notifications::view(ctx.notifications).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen_content)
        .push(toasts)
        .into()
}

/// Renders the toolbar, the menu-bar stand-in: directory loading and
/// settings, with their shortcuts spelled out.
fn toolbar<'a>(font_size: u16) -> Element<'a, Message> {
    Row::new()
        .spacing(8)
        .align_y(alignment::Vertical::Center)
        .push(
            button(text("Load directory").size(f32::from(font_size)))
                .padding(6)
                .on_press(Message::OpenDirectoryDialog),
        )
        .push(
            button(text("Settings").size(f32::from(font_size)))
                .padding(6)
                .on_press(Message::SwitchScreen(Screen::Settings)),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            text("Ctrl+L load · Ctrl+Alt+S settings")
                .size(f32::from(font_size.saturating_sub(4))),
        )
        .into()
}

/// Renders the tagging workspace: image list, viewer, tag editor.
fn view_tagger<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let list = image_list::view(image_list::ViewContext {
        entries: ctx.image_list_model.entries(),
        state: ctx.image_list,
        font_size: ctx.font_size,
    })
    .map(Message::ImageList);

    let viewer_panel = viewer::view(viewer::ViewContext {
        state: ctx.viewer,
        font_size: ctx.font_size,
        has_directory: ctx.image_list_model.directory().is_some(),
    })
    .map(Message::Viewer);

    let editor = tags_editor::view::view(tags_editor::ViewContext {
        state: ctx.tags_editor,
        counts: ctx.tag_counts,
        font_size: ctx.font_size,
    })
    .map(Message::TagsEditor);

    let workspace = Row::new()
        .spacing(8)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(list)
        .push(viewer_panel)
        .push(editor);

    Column::new()
        .spacing(8)
        .padding(8)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(toolbar(ctx.font_size))
        .push(workspace)
        .into()
}
