//! Submit lifecycle for the registration form

mod controller;
mod deferred;

pub use controller::{SubmissionController, SubmissionEvent, SubmitOutcome, Ticket, Transition};
pub use deferred::DeferredTask;
