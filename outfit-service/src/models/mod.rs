pub mod outfit;

pub use outfit::{OutfitQuery, OutfitRequest, OutfitResponse};
