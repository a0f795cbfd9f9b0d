pub mod agent;

pub use agent::{AUTH_REPLY, Assistant, FALLBACK_REPLY, RATE_LIMIT_REPLY, RequestParams};
