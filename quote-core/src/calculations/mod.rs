//! Price calculation for solar installation quotes.
//!
//! This module provides the pricing tables' arithmetic and the display
//! helpers used when amounts are rendered.

pub mod common;
pub mod pricing;

pub use pricing::{BORING_COST, QuoteBreakdown, QuoteCalculator, TRAMP_COST, markup_factor};
