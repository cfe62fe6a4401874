pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
pub mod segments;
pub mod sources;
pub mod themes;
pub mod utils;

pub use config::*;
pub use error::*;
pub use prompt::*;
pub use render::*;
pub use segments::*;
pub use themes::*;
