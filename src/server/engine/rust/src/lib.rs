/* src/server/engine/rust/src/lib.rs */

//! Pure logic behind the clinic site: locale and service registries, the
//! translation catalog and its schema, page resolution, locale routing and
//! page assembly. No I/O.

pub mod catalog;
pub mod contact;
pub mod effects;
pub mod errors;
pub mod escape;
pub mod locale;
pub mod model;
pub mod page;
pub mod render;
pub mod resolve;
pub mod router;
pub mod schema;
pub mod slug;

#[cfg(test)]
mod test_support;

// Public API re-exports
pub use catalog::{Catalog, Translator};
pub use errors::SiteError;
pub use escape::script_safe_json;
pub use locale::{LocaleRegistry, PrefixPolicy};
pub use model::{Detail, PageModel};
pub use render::{DATA_ID, RenderOptions, render_page};
pub use resolve::{PageRef, Resolver};
pub use router::{LocaleLink, LocaleRouter, Navigator, PageKey, Route};
pub use schema::{SchemaReport, Violation, ViolationKind, validate};
pub use slug::{Icon, Service, is_known_slug};
