pub mod error;
pub mod name;
pub mod record;
pub mod report;
pub mod request;

pub use error::{ErrorKind, UserFacing};
pub use name::PersonName;
pub use record::{AgeRecord, Gender};
pub use report::{CopyOutcome, CopyReport, RunReport, UserError};
pub use request::{DocumentFlags, ReportRequest, RequestError};
