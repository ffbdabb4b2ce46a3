/* src/server/core/rust/src/site_loader/mod.rs */

// Load translation catalogs and page templates from the site directory.

mod loader;


pub(crate) use loader::{HOME_TEMPLATE, NOT_FOUND_TEMPLATE, SERVICE_TEMPLATE};
pub use loader::{Templates, load_catalog, load_templates};
