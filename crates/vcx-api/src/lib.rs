mod error;
pub use error::ApiError;

mod policy;
pub use policy::{FailurePolicy, FatalSignal, InvalidPolicy};

mod http;
pub use http::MetricsApi;

pub use axum;
