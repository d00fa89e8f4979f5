// Adapters layer: concrete implementations for the outside world (inbound HTTP, outbound API).

pub mod http;
pub mod submission;
