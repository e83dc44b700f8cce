//! Account creation seam
//!
//! The form never talks to a real backend; `SimulatedAccountService` stands
//! in for one behind the `AccountService` trait.

mod simulated;
mod traits;

pub use simulated::SimulatedAccountService;
pub use traits::{AccountReceipt, AccountService, RegistrationRequest};

#[cfg(test)]
pub use traits::MockAccountService;
