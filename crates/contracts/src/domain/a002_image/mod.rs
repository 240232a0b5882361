pub mod aggregate;
pub mod validation;

pub use aggregate::{ImageReference, DELETE_CONFIRMATION_MESSAGE};
pub use validation::{FileRejection, SelectedFile, SelectionReport};
