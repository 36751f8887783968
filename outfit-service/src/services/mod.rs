pub mod markdown;
pub mod prompt;
pub mod providers;

pub use prompt::PromptStyle;
