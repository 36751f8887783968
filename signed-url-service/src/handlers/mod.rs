pub mod health;
pub mod signed_url;

pub use health::health_check;
pub use signed_url::get_signed_url;
