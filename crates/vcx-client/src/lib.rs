mod client;
pub use client::SchedulerClient;

mod config;
pub use config::ClientConfig;

mod errors;
pub use errors::ClientError;

mod wire;
