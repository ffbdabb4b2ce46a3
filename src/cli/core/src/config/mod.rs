/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_canis_config, load_canis_config};
pub use types::CanisConfig;
