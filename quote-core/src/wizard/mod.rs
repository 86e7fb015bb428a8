//! The step-by-step quote wizard.
//!
//! [`Step`] is the ordered list of stages and [`QuoteSession`] holds the
//! selections and decides when the wizard may advance.

mod session;
mod step;

pub use session::QuoteSession;
pub use step::Step;
