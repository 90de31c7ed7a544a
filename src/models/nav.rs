use serde::Deserialize;
use serde_json::Value;

/// One entry of `ui.navigation`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavLink {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub text: String,
}

impl NavLink {
    pub fn from_value(v: &Value) -> NavLink {
        serde_json::from_value(v.clone()).unwrap_or_default()
    }
}
