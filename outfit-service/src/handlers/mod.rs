pub mod health;
pub mod outfits;

pub use health::{health_check, readiness_check};
pub use outfits::get_outfit_suggestions;
