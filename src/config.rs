use crate::rotation;

/// Site settings read from podium.toml. Every key has a default; a
/// missing or unparsable file just means defaults.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub content_dir: String,
    pub founding_year: i32,
    pub rotate_interval_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> SiteConfig {
        SiteConfig {
            content_dir: "content".to_string(),
            founding_year: 1991,
            rotate_interval_ms: rotation::ROTATE_INTERVAL_MS,
        }
    }
}

impl SiteConfig {
    pub fn load() -> SiteConfig {
        Self::from_toml_str(&std::fs::read_to_string("podium.toml").unwrap_or_default())
    }

    pub fn from_toml_str(text: &str) -> SiteConfig {
        let defaults = SiteConfig::default();
        let toml_val: toml::Value = text
            .parse()
            .unwrap_or(toml::Value::Table(Default::default()));
        let site = toml_val.get("site");

        SiteConfig {
            content_dir: site
                .and_then(|s| s.get("content_dir"))
                .and_then(|v| v.as_str())
                .unwrap_or(&defaults.content_dir)
                .to_string(),
            founding_year: site
                .and_then(|s| s.get("founding_year"))
                .and_then(|v| v.as_integer())
                .and_then(|v| v.try_into().ok())
                .unwrap_or(defaults.founding_year),
            rotate_interval_ms: site
                .and_then(|s| s.get("rotate_interval_ms"))
                .and_then(|v| v.as_integer())
                .and_then(|v| v.try_into().ok())
                .unwrap_or(defaults.rotate_interval_ms),
        }
    }
}
