pub mod signed_url;

pub use signed_url::{SignedUrlQuery, SignedUrlRequest, SignedUrlResponse};
