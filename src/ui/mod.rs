// SPDX-License-Identifier: MPL-2.0
//! UI panels and screens.
//!
//! Each panel follows the same shape: a state struct, a `Message` enum the
//! panel emits, an `Event` enum for the application to act on, and a `view`
//! function rendering from a context struct.

pub mod image_list;
pub mod notifications;
pub mod settings;
pub mod tags_editor;
pub mod theming;
pub mod viewer;
