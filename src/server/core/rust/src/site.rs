/* src/server/core/rust/src/site.rs */

use std::path::PathBuf;
use std::sync::Arc;

use canis_engine::{
  Catalog, LocaleRegistry, PageKey, PageModel, PageRef, RenderOptions, Resolver, SiteError,
  render_page,
};
use tokio::task::JoinSet;

use crate::errors::{LoadError, RenderError};
use crate::site_loader::{
  HOME_TEMPLATE, NOT_FOUND_TEMPLATE, SERVICE_TEMPLATE, Templates, load_catalog, load_templates,
};

/// Where site content lives and how it is served.
#[derive(Debug, Clone)]
pub struct SiteOptions {
  pub root: PathBuf,
  /// Relative to `root`.
  pub messages_dir: PathBuf,
  /// Relative to `root`.
  pub templates_dir: PathBuf,
  pub registry: LocaleRegistry,
  /// Origin for canonical links, e.g. `https://cabinetveterinararad.ro`.
  pub site_url: String,
}

impl SiteOptions {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      messages_dir: PathBuf::from("locales"),
      templates_dir: PathBuf::from("templates"),
      registry: LocaleRegistry::canis(),
      site_url: String::new(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
  pub status: u16,
  pub locale: String,
  pub html: String,
}

/// One page of the full build, in enumeration order.
#[derive(Debug, Clone)]
pub struct BuiltPage {
  pub page: PageRef,
  pub html: String,
}

/// Validated site content, ready to render any page.
#[derive(Debug)]
pub struct Site {
  catalog: Catalog,
  registry: LocaleRegistry,
  templates: Templates,
  site_url: String,
}

impl Site {
  /// Read catalogs and templates, then validate the catalog schema.
  pub fn load(opts: &SiteOptions) -> Result<Self, LoadError> {
    let catalog = load_catalog(&opts.root.join(&opts.messages_dir), &opts.registry)?;
    let templates = load_templates(&opts.root.join(&opts.templates_dir))?;
    Self::new(catalog, opts.registry.clone(), templates, opts.site_url.clone())
  }

  pub fn new(
    catalog: Catalog,
    registry: LocaleRegistry,
    templates: Templates,
    site_url: String,
  ) -> Result<Self, LoadError> {
    canis_engine::validate(&catalog, &registry)?;
    let site = Self { catalog, registry, templates, site_url };
    site.check_template_paths()?;
    Ok(site)
  }

  /// Every path a template reads must resolve in every model it renders,
  /// otherwise the slot would silently render empty.
  fn check_template_paths(&self) -> Result<(), LoadError> {
    let resolver = self.resolver();
    let mut models = Vec::new();
    for page in resolver.enumerate_pages() {
      models.push(resolver.resolve(&page.locale, page.page)?);
    }
    for locale in self.registry.locales() {
      models.push(PageModel::NotFound(resolver.resolve_not_found(locale)?));
    }

    for model in &models {
      let (name, template) = match model {
        PageModel::Home(_) => (HOME_TEMPLATE, &self.templates.home),
        PageModel::Service(_) => (SERVICE_TEMPLATE, &self.templates.service),
        PageModel::NotFound(_) => (NOT_FOUND_TEMPLATE, &self.templates.not_found),
      };
      let data = serde_json::to_value(model).unwrap_or_default();
      let diagnostics = canis_injector::check_paths(template, &data);
      if !diagnostics.is_empty() {
        return Err(LoadError::Template { path: PathBuf::from(name), diagnostics });
      }
    }
    Ok(())
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn registry(&self) -> &LocaleRegistry {
    &self.registry
  }

  pub fn resolver(&self) -> Resolver<'_> {
    Resolver::new(&self.catalog, &self.registry)
  }

  pub fn pages(&self) -> Vec<PageRef> {
    self.resolver().enumerate_pages()
  }

  fn render_model(&self, model: &PageModel) -> String {
    let template = match model {
      PageModel::Home(_) => &self.templates.home,
      PageModel::Service(_) => &self.templates.service,
      PageModel::NotFound(_) => &self.templates.not_found,
    };
    let opts = RenderOptions {
      site_url: &self.site_url,
      default_locale: self.registry.default_locale(),
      ..RenderOptions::default()
    };
    render_page(template, model, &opts)
  }

  pub fn render_page(&self, locale: &str, page: PageKey) -> Result<String, SiteError> {
    let model = self.resolver().resolve(locale, page)?;
    Ok(self.render_model(&model))
  }

  /// Not-found page for `path`, in the locale its prefix names.
  pub fn render_not_found(&self, path: &str) -> Result<RenderedPage, SiteError> {
    let resolver = self.resolver();
    let locale = resolver.not_found_locale(path);
    let model = PageModel::NotFound(resolver.resolve_not_found(locale)?);
    Ok(RenderedPage { status: 404, locale: locale.to_string(), html: self.render_model(&model) })
  }

  /// Render whatever `path` names. Unknown locales, slugs and paths all give
  /// the not-found page; content defects are errors.
  pub fn render(&self, path: &str) -> Result<RenderedPage, SiteError> {
    match self.resolver().resolve_path(path) {
      Ok(model) => Ok(RenderedPage {
        status: 200,
        locale: model.locale().to_string(),
        html: self.render_model(&model),
      }),
      Err(e) if e.is_not_found() => self.render_not_found(path),
      Err(e) => Err(e),
    }
  }

  /// Render every enumerated page. Pages are independent, so each one runs
  /// on its own blocking worker.
  pub async fn render_all(self: &Arc<Self>) -> Result<Vec<BuiltPage>, RenderError> {
    let mut set = JoinSet::new();
    for (index, page) in self.pages().into_iter().enumerate() {
      let site = Arc::clone(self);
      set.spawn_blocking(move || {
        let html = site.render_page(&page.locale, page.page)?;
        Ok::<_, SiteError>((index, BuiltPage { page, html }))
      });
    }

    let mut built = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
      built.push(joined??);
    }
    built.sort_by_key(|(index, _)| *index);
    Ok(built.into_iter().map(|(_, page)| page).collect())
  }
}
