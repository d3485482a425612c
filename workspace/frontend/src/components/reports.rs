pub mod list;
pub mod viewer;

pub use list::DriftReports;
pub use viewer::ReportViewer;
