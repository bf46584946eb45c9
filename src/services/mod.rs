pub mod api_client;
pub mod dialog_service;
pub mod file_service;
pub mod navigation;
pub mod session_service;

pub use api_client::{ApiClient, ApiError, RequestOptions};
pub use dialog_service::{ConfirmDialog, Dialogs, Notice, NoticeIcon, SwalDialogs};
pub use file_service::{FileBackend, HttpFileBackend, LocalFuture};
pub use navigation::{Navigator, WindowNavigator};
pub use session_service::{LocalStorageSession, MemorySession, SessionProvider};
