pub mod deletion_viewmodel;
pub mod file_list_viewmodel;
pub mod file_rows;
pub mod session_guard;

pub use deletion_viewmodel::{DeleteError, DeletionState, DeletionViewModel, DeletionWorkflow};
pub use file_list_viewmodel::{FileListViewModel, LoadOutcome};
pub use file_rows::{FileRow, Placeholder, TableBody, TableView};
pub use session_guard::{Access, SessionGuard};
