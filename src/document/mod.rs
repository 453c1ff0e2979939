//! Document state management and text utilities.
//!
//! This module provides:
//! - byte offset <-> LSP position conversion and word extraction
//! - `ContentChange` for classifying didChange payload shapes
//! - `DocumentState` and `DocumentStore` for document lifecycle management

mod change;
mod store;
mod text;

pub use change::ContentChange;
pub use store::{DocumentState, DocumentStore};
pub use text::{extract_word_at_offset, offset_to_position, position_to_offset};
