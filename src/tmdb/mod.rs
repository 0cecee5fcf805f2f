pub mod client;
pub mod relay_client;
pub mod request;

#[cfg(test)]
pub(crate) mod testutil;

pub use client::*;
pub use relay_client::RelayClient;
pub use request::UpstreamRequest;
