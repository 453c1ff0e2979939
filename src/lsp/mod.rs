//! LSP protocol feature implementations.
//!
//! This module provides implementations for LSP features:
//! - Cursor-context classification
//! - Context-sensitive completion
//! - Hover information for the word under the cursor

mod completion;
mod context;
mod hover;

pub use completion::{completion_at_position, items_for_zone};
pub use context::{classify, ContextZone};
pub use hover::hover_at_position;
