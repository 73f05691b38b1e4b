//! Site configuration for Booblie, a Portuguese-language recipe blog.
//!
//! [`site()`] is the record handed to the generator; the schema lives in
//! [`booblie_config`].

pub mod formatter;
pub mod site;

pub use booblie_config as config;
pub use booblie_config::Config;

pub use self::formatter::{format_added_on, try_format_added_on};
pub use self::site::{booblie, site};
