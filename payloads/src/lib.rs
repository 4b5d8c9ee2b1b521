//! Client-side contract for the analytics dashboard: payload shapes, date
//! ranges, endpoint catalogue, the HTTP client, and the pure reshaping used
//! before data reaches a chart.

pub mod api_client;
pub mod endpoint;
pub mod fetch;
pub mod format;
pub mod lenient;
pub mod range;
pub mod reshape;
pub mod responses;
pub mod summary;

pub use api_client::{APIClient, ClientError, DEFAULT_API_BASE, normalize_base};
pub use endpoint::Endpoint;
pub use fetch::{AttemptId, FetchSlot, FetchState};
pub use range::{DateRange, RANGE_OPTIONS, RangeKey};
