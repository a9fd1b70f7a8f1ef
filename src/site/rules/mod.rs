//! Built-in configuration checks.

pub mod accessibility;
pub mod defensive_defaults;
pub mod menu_weights;
pub mod required_fields;
pub mod security;

pub use accessibility::AccessibilityRule;
pub use defensive_defaults::DefensiveDefaultsRule;
pub use menu_weights::MenuWeightsRule;
pub use required_fields::RequiredFieldsRule;
pub use security::SecurityAuditRule;

#[cfg(test)]
pub(crate) fn toml_doc(raw: &str) -> crate::site::SiteConfig {
    crate::site::SiteConfig::parse(
        raw,
        crate::site::ConfigFormat::Toml,
        std::path::Path::new("config.toml"),
    )
    .unwrap()
}
