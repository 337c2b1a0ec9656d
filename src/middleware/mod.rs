pub mod request_id;

pub use request_id::{CORRELATION_HEADER, CorrelationId, RequestId, RequestIdExt};
