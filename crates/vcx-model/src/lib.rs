mod domain;
pub use domain::{JobId, JobRecord};

mod source;
pub use source::JobSource;

mod error;
pub use error::SourceError;
