//! Inbound adapters translating external requests onto domain ports.

pub mod http;
