// Output formatting — console report, JSON report and CSV export.

pub mod csv;
pub mod json;
pub mod terminal;
