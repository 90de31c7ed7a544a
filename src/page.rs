use url::Url;

/// Which binder runs for the current location. Derived once per load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIdentity {
    Home,
    About,
    Testimonials,
    Book,
    Unknown,
}

impl PageIdentity {
    /// Classify a location. Accepts a full URL or a bare path; the final
    /// path segment (minus a `.html` extension) decides. Empty and `index`
    /// both mean the homepage; anything unrecognized gets only the shared
    /// chrome bound.
    pub fn resolve(location: &str) -> PageIdentity {
        let path = match Url::parse(location) {
            Ok(url) => url.path().to_string(),
            // Not absolute — treat the input as a raw path.
            Err(_) => location
                .split(['?', '#'])
                .next()
                .unwrap_or("")
                .to_string(),
        };
        let segment = path.rsplit('/').next().unwrap_or("");
        let page = segment.strip_suffix(".html").unwrap_or(segment);
        match page {
            "" | "index" => PageIdentity::Home,
            "about" => PageIdentity::About,
            "testimonials" => PageIdentity::Testimonials,
            "book" => PageIdentity::Book,
            _ => PageIdentity::Unknown,
        }
    }
}
