pub mod file_table;

pub use file_table::{DeleteHandler, DomFileTable};
