//! Document model types.
//!
//! This module defines the intermediate representation that bridges
//! Markdown parsing and rendering. The model is flat: a document is an
//! ordered list of blocks, and order is the only relationship between them.

mod block;
mod document;
mod section;
mod table;

pub use block::DocumentBlock;
pub use document::{DocumentModel, Metadata};
pub use section::{Section, Sections};
pub use table::Table;
