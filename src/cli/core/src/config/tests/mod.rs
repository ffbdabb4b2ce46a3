/* src/cli/core/src/config/tests/mod.rs */

use super::*;


#[test]
fn parse_minimal_config() {
  let config: CanisConfig = toml::from_str(
    r#"
[project]
name = "canis-vet"
"#,
  )
  .unwrap();
  assert_eq!(config.project.name, "canis-vet");
  assert_eq!(config.project.site_url, "");
  assert_eq!(config.i18n.locales, ["ro", "en"]);
  assert_eq!(config.i18n.default, "ro");
  assert_eq!(config.i18n.messages_dir, "locales");
  assert_eq!(config.build.templates_dir, "templates");
  assert_eq!(config.build.public_dir, "public");
  assert_eq!(config.build.out_dir, ".canis/output");
  assert_eq!(config.serve.port, 3000);
}

#[test]
fn parse_full_config() {
  let config: CanisConfig = toml::from_str(
    r#"
[project]
name = "canis-vet"
site_url = "https://cabinetveterinararad.ro"

[i18n]
locales = ["ro", "en"]
default = "ro"
prefix = "always"
messages_dir = "messages"

[build]
templates_dir = "html"
public_dir = "static"
out_dir = "dist"

[serve]
port = 8080
"#,
  )
  .unwrap();
  assert_eq!(config.project.site_url, "https://cabinetveterinararad.ro");
  assert_eq!(config.i18n.prefix, canis_engine::PrefixPolicy::Always);
  assert_eq!(config.build.out_dir, "dist");
  assert_eq!(config.serve.port, 8080);

  let opts = config.site_options(std::path::Path::new("/srv/site")).unwrap();
  assert_eq!(opts.messages_dir, std::path::PathBuf::from("messages"));
  assert_eq!(opts.templates_dir, std::path::PathBuf::from("html"));
  assert!(opts.registry.needs_prefix("ro"));
}

#[test]
fn unknown_prefix_policy_is_rejected() {
  let result: Result<CanisConfig, _> = toml::from_str(
    r#"
[project]
name = "x"

[i18n]
prefix = "sometimes"
"#,
  );
  assert!(result.is_err());
}

#[test]
fn default_outside_locales_fails_validation() {
  let config: CanisConfig = toml::from_str(
    r#"
[project]
name = "x"

[i18n]
locales = ["en"]
default = "ro"
"#,
  )
  .unwrap();
  assert!(config.i18n.validate().is_err());
}

#[test]
fn empty_locales_fail_validation() {
  let config: CanisConfig = toml::from_str(
    r#"
[project]
name = "x"

[i18n]
locales = []
"#,
  )
  .unwrap();
  assert!(config.i18n.validate().is_err());
}
