//! Markdown parsing into the document model.

mod builder;
mod line;
mod options;
mod table;

pub use builder::{build_many, DocumentBuilder};
pub use line::{classify, LineKind};
pub use options::{BuildOptions, StrayLinePolicy};
pub use table::{is_separator_row, split_row, TableAccumulator};
