//! Interactive console presentation layer.
//!
//! The console is a pure consumer of the mission store: it renders store
//! state plus derived views and forwards user commands back into the store's
//! mutation operations. Each command runs to completion before the next line
//! is read; nothing here is asynchronous.
//!
//! Components:
//! - `console_handler`: command loop and view selector.
//! - `forms`: prompted input flows, including all required-field validation.
//! - `render`: textual rendering of the five views.

pub mod console_handler;
pub mod forms;
pub mod render;

pub use console_handler::{Console, View};
