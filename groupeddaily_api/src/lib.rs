mod client;
mod errors;
pub mod types;
pub use self::client::{ApiResponse, Client, DEFAULT_BASE_URL};
pub use self::errors::Error;
