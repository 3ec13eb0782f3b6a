//! Output format modules for starmap
//!
//! This module turns star records into things people read or keep.
//! All writers use the `std::io::Write` trait; only [`save_reports`] touches
//! the filesystem.

pub mod chart_writer;
pub mod report;
pub mod text_report;

pub use chart_writer::{render_chart, ChartWriter};
pub use report::{
    file_stamp, save_reports, save_reports_at, BatchReport, ClosestStar, ReportCoordinates,
    SavedReports, StarReport,
};
pub use text_report::TextReportWriter;
