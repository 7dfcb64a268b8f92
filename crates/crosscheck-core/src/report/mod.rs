//! Discrepancy report output.
//!
//! [`ReportRenderer`] turns material change records into a self-sizing
//! fixed-width table; [`ReportSink`] writes every line to the console and
//! to the category's report file.

pub mod sink;
pub mod table;

pub use sink::{ReportSink, SharedBuffer};
pub use table::{Justify, RenderedTable, ReportRenderer};

/// Width of the `#` rule around completion banners
pub const BANNER_WIDTH: usize = 56;

/// The `#` rule used above and below completion banners
pub fn banner_rule() -> String {
    "#".repeat(BANNER_WIDTH)
}
