pub mod client;
pub mod error;
pub mod transport;

pub use client::ApiClient;
pub use error::ApiError;
pub use transport::{HttpMethod, Transport, UploadFile};

#[cfg(test)]
pub mod mock;
