/* src/server/engine/rust/src/slug.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::errors::SiteError;

/// One clinic service. `Service::ALL` is the registry: its order drives the
/// home grid, navigation, the footer listing and "other services".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Service {
  Consultatii,
  Chirurgie,
  Laser,
  Laborator,
  Radiologie,
  Internare,
  Farmacie,
  Hrana,
  Cosmetica,
  Accesorii,
}

/// Presentation token for a service icon. Opaque to everything but templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
  Stethoscope,
  Syringe,
  Zap,
  FlaskConical,
  Scan,
  Heart,
  Pill,
  UtensilsCrossed,
  PawPrint,
  ShoppingBag,
}

impl Service {
  pub const ALL: [Self; 10] = [
    Self::Consultatii,
    Self::Chirurgie,
    Self::Laser,
    Self::Laborator,
    Self::Radiologie,
    Self::Internare,
    Self::Farmacie,
    Self::Hrana,
    Self::Cosmetica,
    Self::Accesorii,
  ];

  pub fn slug(self) -> &'static str {
    match self {
      Self::Consultatii => "consultatii",
      Self::Chirurgie => "chirurgie",
      Self::Laser => "laser",
      Self::Laborator => "laborator",
      Self::Radiologie => "radiologie",
      Self::Internare => "internare",
      Self::Farmacie => "farmacie",
      Self::Hrana => "hrana",
      Self::Cosmetica => "cosmetica",
      Self::Accesorii => "accesorii",
    }
  }

  pub fn icon(self) -> Icon {
    match self {
      Self::Consultatii => Icon::Stethoscope,
      Self::Chirurgie => Icon::Syringe,
      Self::Laser => Icon::Zap,
      Self::Laborator => Icon::FlaskConical,
      Self::Radiologie => Icon::Scan,
      Self::Internare => Icon::Heart,
      Self::Farmacie => Icon::Pill,
      Self::Hrana => Icon::UtensilsCrossed,
      Self::Cosmetica => Icon::PawPrint,
      Self::Accesorii => Icon::ShoppingBag,
    }
  }

  pub fn from_slug(slug: &str) -> Result<Self, SiteError> {
    Self::ALL
      .into_iter()
      .find(|s| s.slug() == slug)
      .ok_or_else(|| SiteError::UnknownSlug(slug.to_string()))
  }

  /// Every other service, registry order preserved.
  pub fn others(self) -> impl Iterator<Item = Self> {
    Self::ALL.into_iter().filter(move |s| *s != self)
  }
}

pub fn is_known_slug(code: &str) -> bool {
  Service::ALL.iter().any(|s| s.slug() == code)
}

pub fn slugs() -> impl Iterator<Item = &'static str> {
  Service::ALL.into_iter().map(Service::slug)
}

impl FromStr for Service {
  type Err = SiteError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_slug(s)
  }
}

impl fmt::Display for Service {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.slug())
  }
}

impl Serialize for Service {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.slug())
  }
}
