//! HTTP transport module
//!
//! One request in, one response out. Retry, pagination, and status
//! interpretation all live a layer up in the request engine.

mod transport;

pub use transport::Transport;
