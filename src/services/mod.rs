//! Application service layer.
//!
//! Services contain the contact pipeline's business logic: the form
//! controller the presentation layer talks to, and the dispatcher that walks
//! the provider chain on its behalf.

mod dispatcher;
mod form_controller;

pub use dispatcher::{DeliveryDispatcher, DeliveryOutcome, FallbackDispatcher, NO_PROVIDERS_MESSAGE};
pub use form_controller::{
    ContactFormController, FormSnapshot, SubmissionStatus, STATUS_RESET_DELAY, SUCCESS_MESSAGE,
};
