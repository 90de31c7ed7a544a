use serde::Deserialize;
use serde_json::Value;

/// One entry of `testimonials.testimonials`. Ordered, fixed-size,
/// read-only after load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestimonialRecord {
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
}

impl TestimonialRecord {
    /// Lenient extraction — a missing field binds as empty text rather
    /// than failing the render.
    pub fn from_value(v: &Value) -> TestimonialRecord {
        serde_json::from_value(v.clone()).unwrap_or_default()
    }
}

/// One entry of `testimonials.video_testimonials`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoTestimonialRecord {
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
}

impl VideoTestimonialRecord {
    pub fn from_value(v: &Value) -> VideoTestimonialRecord {
        serde_json::from_value(v.clone()).unwrap_or_default()
    }
}
