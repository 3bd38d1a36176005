//! Human-readable output: rupee formatting, the on-screen summary and the
//! printable report.

mod currency;
mod document;
mod summary;

pub use currency::format_inr;
pub use document::{DEFAULT_PAGE_HEIGHT, PAGE_WIDTH, TaxReport};
pub use summary::render_summary;
