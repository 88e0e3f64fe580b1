pub mod defaults;
pub mod input;
pub mod loader;
pub mod types;

pub use input::{apply_edit, coerce_number, parse_assignment, Field, InputError};
pub use loader::{ConfigError, ConfigLoader};
pub use types::*;
