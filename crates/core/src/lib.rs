pub mod config;
pub mod error;
pub mod types;

pub use config::{default_site, parse_site_toml, parse_site_toml_str};
pub use error::{Error, Result};
pub use types::*;
