// SPDX-License-Identifier: MPL-2.0
//! Tag editor panel for the currently selected image.
//!
//! Binds the editable tag list to a tag-input control and an all-tags count
//! display. Every mutation is reported as an [`Event`] so the application can
//! write the new list back into the image list model (and the sidecar) before
//! anything else happens.

pub mod state;
pub mod view;

pub use state::TagEditorState;
pub use view::{ViewContext, PANEL_WIDTH};

/// Messages emitted by the tag editor panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// The tag input text changed.
    InputChanged(String),
    /// The tag input was submitted (Enter).
    InputSubmitted,
    /// A tag from the all-tags list was clicked.
    AddExisting(String),
    /// The remove button of the tag at this position was pressed.
    RemoveTag(usize),
    /// Move the tag at this position one step up.
    MoveTagUp(usize),
    /// Move the tag at this position one step down.
    MoveTagDown(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// No action needed.
    None,
    /// The tag list changed; flush it back to the image list model.
    TagsEdited,
    /// An add was rejected because the image already carries the tag.
    DuplicateRejected(String),
}

/// Processes a tag editor message.
///
/// Mutations are applied to `state` directly; the returned event tells the
/// application whether a write-back is needed.
pub fn update(state: &mut TagEditorState, message: Message) -> Event {
    match message {
        Message::InputChanged(input) => {
            state.set_input(input);
            Event::None
        }
        Message::InputSubmitted => {
            let input = state.take_input();
            add_tag(state, &input)
        }
        Message::AddExisting(tag) => add_tag(state, &tag),
        Message::RemoveTag(index) => {
            if state.remove_tag(index) {
                Event::TagsEdited
            } else {
                Event::None
            }
        }
        Message::MoveTagUp(index) => {
            if state.move_tag_up(index) {
                Event::TagsEdited
            } else {
                Event::None
            }
        }
        Message::MoveTagDown(index) => {
            if state.move_tag_down(index) {
                Event::TagsEdited
            } else {
                Event::None
            }
        }
    }
}

fn add_tag(state: &mut TagEditorState, tag: &str) -> Event {
    let trimmed = tag.trim();
    if trimmed.is_empty() || state.image_index().is_none() {
        return Event::None;
    }
    if state.add_tag(trimmed) {
        Event::TagsEdited
    } else {
        Event::DuplicateRejected(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state() -> TagEditorState {
        let mut state = TagEditorState::new();
        state.load(0, vec!["beach".to_string()]);
        state
    }

    #[test]
    fn submit_adds_tag_and_clears_input() {
        let mut state = loaded_state();
        let _ = update(&mut state, Message::InputChanged("sunset".to_string()));
        let event = update(&mut state, Message::InputSubmitted);

        assert!(matches!(event, Event::TagsEdited));
        assert_eq!(state.tags().len(), 2);
        assert!(state.input().is_empty());
    }

    #[test]
    fn submit_of_blank_input_is_ignored() {
        let mut state = loaded_state();
        let _ = update(&mut state, Message::InputChanged("   ".to_string()));
        let event = update(&mut state, Message::InputSubmitted);
        assert!(matches!(event, Event::None));
        assert_eq!(state.tags().len(), 1);
    }

    #[test]
    fn duplicate_add_reports_rejection() {
        let mut state = loaded_state();
        let event = update(&mut state, Message::AddExisting("beach".to_string()));
        assert!(matches!(event, Event::DuplicateRejected(tag) if tag == "beach"));
        assert_eq!(state.tags().len(), 1);
    }

    #[test]
    fn add_without_bound_image_is_ignored() {
        let mut state = TagEditorState::new();
        let event = update(&mut state, Message::AddExisting("beach".to_string()));
        assert!(matches!(event, Event::None));
        assert!(state.tags().is_empty());
    }

    #[test]
    fn remove_and_move_report_edits() {
        let mut state = TagEditorState::new();
        state.load(0, vec!["a".to_string(), "b".to_string()]);

        assert!(matches!(
            update(&mut state, Message::MoveTagDown(0)),
            Event::TagsEdited
        ));
        assert!(matches!(
            update(&mut state, Message::RemoveTag(0)),
            Event::TagsEdited
        ));
        assert!(matches!(
            update(&mut state, Message::RemoveTag(9)),
            Event::None
        ));
    }
}
