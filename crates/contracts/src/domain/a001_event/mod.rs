pub mod aggregate;
pub mod draft;

pub use aggregate::{CreateEventRequest, CreateEventResponse};
pub use draft::{EventDraft, ImageState, SelectionOutcome, SubmitOutcome, SubmitState};
