/* src/server/engine/rust/src/contact.rs */

use serde::Serialize;

/// Clinic contact details. Not translated: identical in every locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  pub phone_href: &'static str,
  pub phone_display: &'static str,
  pub email: &'static str,
  pub email_href: &'static str,
  pub address: &'static str,
  pub map_href: &'static str,
  pub facebook_href: &'static str,
  pub copyright_holder: &'static str,
}

pub const CONTACT: Contact = Contact {
  phone_href: "tel:+40745534944",
  phone_display: "0745 534 944",
  email: "contact@cabinetveterinararad.ro",
  email_href: "mailto:contact@cabinetveterinararad.ro",
  address: "Str. Făt Frumos, nr. 5, Arad, România",
  map_href: "https://www.google.com/maps?um=1&fb=1&gl=ro&sa=X&geocode=KZke_EENmEVHMTG3MwPCzg2O&daddr=Strada+F%C4%83t+Frumos+5,+Arad+310364",
  facebook_href: "https://www.facebook.com/cabinetveterinararadro",
  copyright_holder: "Dr. Raul Tatar | Clinica Canis Vet",
};

pub const HERO_IMAGE: &str = "/images/clinic/hero.jpeg";
pub const GALLERY_IMAGES: [&str; 6] = [
  "/images/clinic/gallery1.jpeg",
  "/images/clinic/gallery2.jpeg",
  "/images/clinic/gallery3.jpeg",
  "/images/clinic/gallery4.jpeg",
  "/images/clinic/gallery5.jpeg",
  "/images/clinic/gallery6.jpeg",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatValue {
  /// Animated from zero to `end` on the client.
  Counter { end: u32, suffix: &'static str },
  Fixed(&'static str),
}

/// Home stats bar, keyed by the `stats` namespace labels.
pub const STATS: [(&str, StatValue); 4] = [
  ("years", StatValue::Counter { end: 10, suffix: "+" }),
  ("animals", StatValue::Counter { end: 5000, suffix: "+" }),
  ("doctors", StatValue::Counter { end: 4, suffix: "" }),
  ("emergency", StatValue::Fixed("24/7")),
];
