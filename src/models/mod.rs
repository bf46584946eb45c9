pub mod archivo;
pub mod user;

pub use archivo::{FileId, FileListResponse, FileRecord};
pub use user::UserProfile;
