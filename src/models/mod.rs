pub mod report;

pub use report::{Entity as Report, Model as ReportModel, ReportStatus, DEPARTMENTS};
