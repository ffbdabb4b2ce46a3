/* src/server/core/rust/src/lib.rs */

pub mod errors;
pub mod site;
pub mod site_loader;

// Re-exports for ergonomic use
pub use errors::{LoadError, RenderError};
pub use site::{BuiltPage, RenderedPage, Site, SiteOptions};
pub use site_loader::{Templates, load_catalog, load_templates};
