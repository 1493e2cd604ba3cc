pub mod errors;
pub mod store;
pub mod types;

pub use errors::{ConfigError, HostError, SkyglowError};
pub use store::Store;
pub use types::{Color, ParseThemeModeError, ThemeMode};

pub type Result<T> = std::result::Result<T, SkyglowError>;
