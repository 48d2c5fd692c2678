mod job_record;
pub use job_record::{JobId, JobRecord};
