mod config;
mod formatters;
mod labels;
mod locale;

pub mod date;

pub use self::config::*;
pub use self::formatters::*;
pub use self::labels::*;
pub use self::locale::*;

pub type Status = status::Status;
pub type Result<T, E = Status> = std::result::Result<T, E>;
