//! Shared contracts between the venue frontend and its REST backend.
//!
//! Wire DTOs, file-selection rules and the event draft state machine live
//! here so they can be unit-tested without a browser.

pub mod domain;
