//! Word lists for spelling practice
//!
//! The user's editable list, its on-disk formats, and a starter list
//! compiled into the binary.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{STARTER, STARTER_COUNT};
pub use list::WordList;
pub use loader::StoreError;
