use serde::Deserialize;
use serde_json::Value;

/// One entry of `testimonials.gallery_items`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryItem {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub caption: String,
}

impl GalleryItem {
    pub fn from_value(v: &Value) -> GalleryItem {
        serde_json::from_value(v.clone()).unwrap_or_default()
    }
}
