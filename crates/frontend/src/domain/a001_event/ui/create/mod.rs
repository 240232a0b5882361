//! New Event UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions (image upload/delete, event creation)
//! - view_model.rs: NewEventVm, drives the contracts `EventDraft`
//! - view.rs: Main component NewEvent

mod model;
mod view;
mod view_model;

pub use view::NewEvent;
pub use view_model::NewEventVm;
