pub mod cors;
pub mod security_headers;
pub mod tracing;

pub use self::cors::{cors_middleware, preflight, CorsPolicy};
pub use self::security_headers::security_headers_middleware;
pub use self::tracing::{make_request_span, request_id_middleware, REQUEST_ID_HEADER};
