/* src/server/engine/rust/src/resolve.rs */

use serde::Serialize;
use serde_json::Value;

use crate::catalog::Catalog;
use crate::contact::{CONTACT, GALLERY_IMAGES, HERO_IMAGE, STATS, StatValue};
use crate::effects::{GALLERY_STAGGER_MS, SERVICE_STAGGER_MS, transition_delay};
use crate::errors::SiteError;
use crate::locale::LocaleRegistry;
use crate::model::{
  Chrome, GalleryImage, HomeModel, NotFoundModel, PageMeta, PageModel, ServiceCard, ServiceContent, ServiceLink,
  ServiceModel, StatCell, format_count,
};
use crate::router::{LocaleRouter, PageKey};
use crate::schema::SERVICES_DATA;
use crate::slug::Service;

/// One entry of the static page enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PageRef {
  pub locale: String,
  pub page: PageKey,
  pub path: String,
}

/// Builds page models from the catalog. Pure: same inputs, same model.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
  catalog: &'a Catalog,
  registry: &'a LocaleRegistry,
}

impl<'a> Resolver<'a> {
  pub fn new(catalog: &'a Catalog, registry: &'a LocaleRegistry) -> Self {
    Self { catalog, registry }
  }

  pub fn router(&self) -> LocaleRouter<'a> {
    LocaleRouter::new(self.registry)
  }

  fn check_locale(&self, locale: &str) -> Result<(), SiteError> {
    if self.registry.is_supported(locale) {
      Ok(())
    } else {
      Err(SiteError::InvalidLocale(locale.to_string()))
    }
  }

  fn namespace(&self, locale: &str, namespace: &str) -> Result<Value, SiteError> {
    self.catalog.translator(locale, namespace).all().cloned()
  }

  fn service_link(&self, locale: &str, service: Service) -> Result<ServiceLink, SiteError> {
    let data = self.catalog.translator(locale, SERVICES_DATA);
    Ok(ServiceLink {
      slug: service,
      icon: service.icon(),
      title: data.text(&format!("{}.title", service.slug()))?.to_string(),
      href: self.router().canonical(locale, PageKey::Service(service)),
    })
  }

  fn chrome(&self, locale: &str, page: PageKey, metadata: PageMeta) -> Result<Chrome, SiteError> {
    let router = self.router();
    let path = router.canonical(locale, page);
    let home_href = router.canonical(locale, PageKey::Home);
    Ok(Chrome {
      locale: locale.to_string(),
      alternates: router.switcher_links(&path, locale),
      services_href: format!("{home_href}#servicii"),
      contact_href: format!("{home_href}#contact"),
      home_href,
      path,
      contact: CONTACT,
      metadata,
      nav: self.namespace(locale, "nav")?,
    })
  }

  pub fn resolve_home(&self, locale: &str) -> Result<HomeModel, SiteError> {
    self.check_locale(locale)?;
    let meta = self.catalog.translator(locale, "metadata");
    let metadata = PageMeta {
      title: meta.text("title")?.to_string(),
      description: meta.text("description")?.to_string(),
    };
    let data = self.catalog.translator(locale, SERVICES_DATA);

    let mut service_cards = Vec::with_capacity(Service::ALL.len());
    for (i, service) in Service::ALL.into_iter().enumerate() {
      let slug = service.slug();
      service_cards.push(ServiceCard {
        slug: service,
        icon: service.icon(),
        href: self.router().canonical(locale, PageKey::Service(service)),
        title: data.text(&format!("{slug}.title"))?.to_string(),
        description: data.text(&format!("{slug}.description"))?.to_string(),
        items: data.list(&format!("{slug}.items"))?,
        delay_ms: transition_delay(i, SERVICE_STAGGER_MS),
      });
    }
    let footer_services = service_cards
      .iter()
      .map(|c| ServiceLink {
        slug: c.slug,
        icon: c.icon,
        title: c.title.clone(),
        href: c.href.clone(),
      })
      .collect();

    let labels = self.catalog.translator(locale, "stats");
    let mut stats = Vec::with_capacity(STATS.len());
    for (key, value) in STATS {
      let (display, end, suffix) = match value {
        StatValue::Counter { end, suffix } => {
          (format!("{}{suffix}", format_count(end, locale)), Some(end), suffix)
        }
        StatValue::Fixed(text) => (text.to_string(), None, ""),
      };
      stats.push(StatCell { key, label: labels.text(key)?.to_string(), display, end, suffix });
    }

    let alt = self.catalog.text(locale, "gallery", "alt")?;
    let gallery_images = GALLERY_IMAGES
      .into_iter()
      .enumerate()
      .map(|(i, src)| GalleryImage {
        src,
        alt: format!("{alt} {}", i + 1),
        delay_ms: transition_delay(i, GALLERY_STAGGER_MS),
      })
      .collect();

    Ok(HomeModel {
      chrome: self.chrome(locale, PageKey::Home, metadata)?,
      hero_image: HERO_IMAGE,
      hero: self.namespace(locale, "hero")?,
      stats,
      services: self.namespace(locale, "services")?,
      service_cards,
      gallery: self.namespace(locale, "gallery")?,
      gallery_images,
      about: self.namespace(locale, "about")?,
      cta: self.namespace(locale, "cta")?,
      footer: self.namespace(locale, "footer")?,
      footer_services,
    })
  }

  /// Locale is validated before the slug; both must pass.
  pub fn resolve_service(&self, locale: &str, slug: &str) -> Result<ServiceModel, SiteError> {
    self.check_locale(locale)?;
    let service = Service::from_slug(slug)?;
    let data = self.catalog.translator(locale, SERVICES_DATA);
    let key = |field: &str| format!("{slug}.{field}");

    let content = ServiceContent {
      slug: service,
      icon: service.icon(),
      title: data.text(&key("title"))?.to_string(),
      subtitle: data.text(&key("subtitle"))?.to_string(),
      description: data.text(&key("description"))?.to_string(),
      details: data.list(&key("details"))?,
      features: data.list(&key("features"))?,
    };
    let site_title = self.catalog.text(locale, "metadata", "title")?;
    let metadata = PageMeta {
      title: format!("{} | {site_title}", content.title),
      description: content.description.clone(),
    };
    let other_services =
      service.others().map(|s| self.service_link(locale, s)).collect::<Result<Vec<_>, _>>()?;

    Ok(ServiceModel {
      chrome: self.chrome(locale, PageKey::Service(service), metadata)?,
      service_page: self.namespace(locale, "servicePage")?,
      service: content,
      other_services,
    })
  }

  /// Not-found page in `locale`; links point at that locale's home.
  pub fn resolve_not_found(&self, locale: &str) -> Result<NotFoundModel, SiteError> {
    self.check_locale(locale)?;
    let text = self.catalog.translator(locale, "notFound");
    let site_title = self.catalog.text(locale, "metadata", "title")?;
    let metadata = PageMeta {
      title: format!("{} | {site_title}", text.text("title")?),
      description: text.text("description")?.to_string(),
    };
    Ok(NotFoundModel {
      chrome: self.chrome(locale, PageKey::Home, metadata)?,
      not_found: text.all()?.clone(),
    })
  }

  /// Locale for the not-found page of an unmatched path: the path's own
  /// locale prefix when it names a supported locale, else the default.
  pub fn not_found_locale(&self, path: &str) -> &'a str {
    match self.router().strip_locale(path) {
      (Some(locale), _) if self.registry.needs_prefix(locale) => locale,
      _ => self.registry.default_locale(),
    }
  }

  pub fn resolve(&self, locale: &str, page: PageKey) -> Result<PageModel, SiteError> {
    match page {
      PageKey::Home => self.resolve_home(locale).map(PageModel::Home),
      PageKey::Service(s) => self.resolve_service(locale, s.slug()).map(PageModel::Service),
    }
  }

  /// Parse a request path and resolve the page it names.
  pub fn resolve_path(&self, path: &str) -> Result<PageModel, SiteError> {
    let route = self.router().parse(path)?;
    self.resolve(&route.locale, route.page)
  }

  /// Every static page: per locale, home then each service in registry order.
  pub fn enumerate_pages(&self) -> Vec<PageRef> {
    let router = self.router();
    self
      .registry
      .locales()
      .iter()
      .flat_map(|locale| {
        PageKey::all().map(move |page| PageRef {
          locale: locale.clone(),
          page,
          path: router.canonical(locale, page),
        })
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;
  use crate::test_support::{complete_catalog, complete_document};

  fn with_resolver(f: impl FnOnce(Resolver<'_>)) {
    let catalog = complete_catalog();
    let registry = LocaleRegistry::canis();
    f(Resolver::new(&catalog, &registry));
  }

  #[test]
  fn every_service_resolves_in_every_locale() {
    with_resolver(|r| {
      for locale in ["ro", "en"] {
        for service in Service::ALL {
          let m = r.resolve_service(locale, service.slug()).unwrap();
          assert!(!m.service.title.is_empty());
          assert!(!m.service.subtitle.is_empty());
          assert!(!m.service.description.is_empty());
          assert!(!m.service.details.is_empty());
          assert!(!m.service.features.is_empty());
          assert_eq!(m.service.icon, service.icon());
        }
      }
    });
  }

  #[test]
  fn unknown_locale_is_not_found() {
    with_resolver(|r| {
      for locale in ["fr", "", "RO", "ro-RO"] {
        assert!(r.resolve_home(locale).unwrap_err().is_not_found());
        assert!(r.resolve_service(locale, "laser").unwrap_err().is_not_found());
      }
      // Locale is checked first
      assert_eq!(
        r.resolve_service("fr", "dental").unwrap_err(),
        SiteError::InvalidLocale("fr".into())
      );
    });
  }

  #[test]
  fn unknown_slug_is_not_found() {
    with_resolver(|r| {
      let err = r.resolve_service("en", "dental").unwrap_err();
      assert_eq!(err, SiteError::UnknownSlug("dental".into()));
      assert!(err.is_not_found());
    });
  }

  #[test]
  fn other_services_for_first_slug() {
    with_resolver(|r| {
      let m = r.resolve_service("ro", "consultatii").unwrap();
      assert_eq!(m.other_services.len(), Service::ALL.len() - 1);
      assert_eq!(m.other_services[0].slug, Service::Chirurgie);
      assert!(m.other_services.iter().all(|s| s.slug != Service::Consultatii));
      assert_eq!(m.other_services[0].href, "/servicii/chirurgie");
    });
  }

  #[test]
  fn home_grid_follows_registry_order() {
    with_resolver(|r| {
      let home = r.resolve_home("en").unwrap();
      let grid: Vec<_> = home.service_cards.iter().map(|c| c.slug).collect();
      assert_eq!(grid, Service::ALL);
      let footer: Vec<_> = home.footer_services.iter().map(|c| c.slug).collect();
      assert_eq!(footer, Service::ALL);
      assert_eq!(home.service_cards[2].href, "/en/servicii/laser");
      assert_eq!(home.service_cards[2].delay_ms, 160);
      assert_eq!(home.service_cards[0].items, ["EN consultatii item"]);
    });
  }

  #[test]
  fn home_stats_and_gallery() {
    with_resolver(|r| {
      let home = r.resolve_home("ro").unwrap();
      let displays: Vec<_> = home.stats.iter().map(|s| s.display.as_str()).collect();
      assert_eq!(displays, ["10+", "5.000+", "4", "24/7"]);
      assert_eq!(home.stats[3].end, None);
      assert_eq!(home.gallery_images.len(), 6);
      assert_eq!(home.gallery_images[1].alt, "RO gallery.alt 2");
      assert_eq!(home.chrome.services_href, "/#servicii");
    });
  }

  #[test]
  fn service_metadata_and_alternates() {
    with_resolver(|r| {
      let m = r.resolve_service("en", "laser").unwrap();
      assert_eq!(m.chrome.metadata.title, "EN laser title | EN metadata.title");
      assert_eq!(m.chrome.path, "/en/servicii/laser");
      let hrefs: Vec<_> = m.chrome.alternates.iter().map(|a| a.href.as_str()).collect();
      assert_eq!(hrefs, ["/servicii/laser", "/en/servicii/laser"]);
      assert_eq!(m.chrome.home_href, "/en/");
    });
  }

  #[test]
  fn resolve_path_dispatch() {
    with_resolver(|r| {
      let model = r.resolve_path("/en/servicii/hrana").unwrap();
      assert_eq!(model.page_key(), Some(PageKey::Service(Service::Hrana)));
      assert_eq!(model.locale(), "en");
      assert!(r.resolve_path("/ro/").unwrap_err().is_not_found());
      assert!(r.resolve_path("/servicii/nope").unwrap_err().is_not_found());
    });
  }

  #[test]
  fn missing_translation_surfaces_not_empty() {
    let mut en = complete_document("EN");
    en["servicesData"]["laser"].as_object_mut().unwrap().remove("subtitle");
    let catalog = Catalog::from_documents([("ro", complete_document("RO")), ("en", en)]);
    let registry = LocaleRegistry::canis();
    let r = Resolver::new(&catalog, &registry);
    let err = r.resolve_service("en", "laser").unwrap_err();
    assert_eq!(err, SiteError::missing("en", "servicesData.laser.subtitle"));
    assert!(!err.is_not_found());
  }

  #[test]
  fn enumeration_is_full_product_without_duplicates() {
    with_resolver(|r| {
      let pages = r.enumerate_pages();
      assert_eq!(pages.len(), 2 * (1 + Service::ALL.len()));
      let unique: HashSet<_> = pages.iter().map(|p| p.path.as_str()).collect();
      assert_eq!(unique.len(), pages.len());
      assert_eq!(pages[0].path, "/");
      assert_eq!(pages[11].path, "/en/");
      for page in &pages {
        assert!(r.resolve(&page.locale, page.page).is_ok(), "{}", page.path);
      }
    });
  }

  #[test]
  fn not_found_page_follows_path_locale() {
    with_resolver(|r| {
      assert_eq!(r.not_found_locale("/en/servicii/nope"), "en");
      assert_eq!(r.not_found_locale("/fr/"), "ro");
      assert_eq!(r.not_found_locale("/ro/servicii/laser"), "ro");
      let m = r.resolve_not_found("en").unwrap();
      assert_eq!(m.chrome.metadata.title, "EN notFound.title | EN metadata.title");
      assert_eq!(m.not_found["back"], "EN notFound.back");
      assert_eq!(PageModel::NotFound(m).page_key(), None);
    });
  }

  #[test]
  fn client_data_carries_counters_only_on_home() {
    with_resolver(|r| {
      let home = PageModel::Home(r.resolve_home("en").unwrap());
      let data = home.client_data();
      assert_eq!(data["counters"].as_array().map(Vec::len), Some(3));
      assert_eq!(data["counters"][1]["end"], 5000);
      let svc = r.resolve("en", PageKey::Service(Service::Laser)).unwrap();
      assert_eq!(svc.client_data()["counters"], serde_json::json!([]));
      let json = serde_json::to_value(&svc).unwrap();
      assert_eq!(json["kind"], "service");
      assert_eq!(json["service"]["icon"], "zap");
    });
  }
}
