// Adapters layer: concrete implementations for external systems (deployment
// providers, notifications, the draft cache).

pub mod cache;
pub mod deploy;
pub mod notify;
