//! Site-wide content configuration.
//!
//! A single [`SiteConfig`] document drives the marketing surface: hero copy,
//! contact details, and footer text. It is replaced wholesale on update and
//! can always be reset to the shipped defaults.

use serde::{Deserialize, Serialize};

/// Hero section copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub tagline: String,
    pub headline_prefix: String,
    pub headline_gradient: String,
    pub description: String,
    pub hero_image: String,
}

/// Contact details shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Footer copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterInfo {
    pub description: String,
    pub copyright: String,
}

/// The whole site configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_name: String,
    pub logo_url: String,
    pub hero: HeroSection,
    pub contact: ContactInfo,
    pub footer: FooterInfo,
    pub terms_and_conditions: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_is_camel_case() {
        let config = SiteConfig {
            site_name: "Veloce".to_owned(),
            logo_url: String::new(),
            hero: HeroSection {
                tagline: "t".to_owned(),
                headline_prefix: "a".to_owned(),
                headline_gradient: "b".to_owned(),
                description: "d".to_owned(),
                hero_image: "img".to_owned(),
            },
            contact: ContactInfo {
                address: "addr".to_owned(),
                phone: "tel".to_owned(),
                email: "mail".to_owned(),
            },
            footer: FooterInfo {
                description: "d".to_owned(),
                copyright: "c".to_owned(),
            },
            terms_and_conditions: "terms".to_owned(),
        };

        let value = serde_json::to_value(config).unwrap();
        assert!(value.get("siteName").is_some());
        assert!(value.get("logoUrl").is_some());
        assert!(value.get("termsAndConditions").is_some());
        assert!(value.pointer("/hero/headlinePrefix").is_some());
        assert!(value.pointer("/hero/heroImage").is_some());
    }
}
