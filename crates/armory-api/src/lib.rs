// armory-api: Async Rust client for the weapon catalogue REST API and assistant endpoints

pub mod assist;
pub mod client;
pub mod error;
pub mod transport;
pub mod types;
pub mod weapons;

pub use client::ArmoryClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
