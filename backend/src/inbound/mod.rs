//! Inbound adapters translating browser requests into shell operations while
//! keeping framework details at the edge.

pub mod http;
