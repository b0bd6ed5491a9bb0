//! gs-client: HTTP access to the explorer backend.
//!
//! Transport ([`client`]) is separated from reply decoding ([`reply`]) so
//! the decode rules are testable without a live server.

pub mod client;
pub mod error;
pub mod reply;

pub use client::ExplorerClient;
pub use error::{ClientError, ClientResult};
pub use reply::{AttributesReply, DataReply, LoadReply};
