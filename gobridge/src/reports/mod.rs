//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an [`output::Output`].

mod generate;
mod inspect;
mod output;

pub use generate::{GenerateReport, PackageOutcome};
pub use inspect::InspectReport;
pub use output::{Report, TerminalOutput};
