//! Unified configuration layer.
//!
//! Every environment variable read goes through this module; command code accesses
//! structured config instead of calling `std::env::var` directly.
//!
//! - `loader`: env_or, env_optional, env_bool, env_paths helpers and `.env` loading
//! - `schema`: PathsConfig, ViewConfig, EditorConfig, ObservabilityConfig
//! - `env_keys`: key constants (with legacy aliases)

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, env_paths, load_dotenv};
pub use schema::{EditorConfig, ObservabilityConfig, PathsConfig, ViewConfig};
