//! Common types shared by all domain modules

pub mod api_error;
pub mod notice;

// Re-exports
pub use api_error::ApiError;
pub use notice::{Notice, NoticeKind};
