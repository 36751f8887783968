pub mod signer;

pub use signer::{SignedUrl, SigningError, UrlSigner, SIGNED_URL_TTL};
