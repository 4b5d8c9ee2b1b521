//! Data hooks.
//!
//! Each hook instance owns one [`payloads::FetchSlot`]: at most one request
//! in flight, newer requests supersede older ones, and a superseded or
//! torn-down request never touches state. Hooks never share state, so one
//! failing panel leaves its siblings alone.

pub mod use_analytics;
pub mod use_fetch;

pub use use_analytics::{use_analytics_list, use_analytics_object};
pub use use_fetch::{FetchHookReturn, FetchOptions, Transform, use_fetch};
