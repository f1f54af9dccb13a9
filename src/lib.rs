// SPDX-License-Identifier: MPL-2.0
//! `tagview` is a directory-based image tagging tool built with the Iced GUI
//! framework.
//!
//! It shows the images of one directory in a selectable list, renders the
//! selected image, and lets the user attach free-text tags that persist in
//! plain-text sidecar files next to the images. Window geometry, the loaded
//! directory, and the selection survive restarts.

pub mod app;
pub mod error;
pub mod library;
pub mod ui;
