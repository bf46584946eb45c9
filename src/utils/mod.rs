// Utils compartidos

pub mod constants;
pub mod date_format;
pub mod html;
pub mod i18n;
pub mod storage;
pub mod swal_ffi;

pub use constants::*;
pub use date_format::format_upload_date;
pub use html::escape_html;
pub use i18n::*;
