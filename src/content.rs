use log::error;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Seam over the external data source. Fetch mechanics live behind this
/// trait; the renderer only ever sees document text.
pub trait ContentSource {
    fn read(&self, name: &str) -> Result<String, String>;
}

/// Reads content documents from a directory on disk.
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        FileSource {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl ContentSource for FileSource {
    fn read(&self, name: &str) -> Result<String, String> {
        let path = self.dir.join(format!("{}.json", name));
        fs::read_to_string(&path).map_err(|e| format!("{}: {}", path.display(), e))
    }
}

/// The three site content documents. Built once per page render and passed
/// down by reference; never mutated after load (reload = build a new store).
#[derive(Debug)]
pub struct ContentStore {
    pub main: Value,
    pub ui: Value,
    pub testimonials: Value,
}

impl ContentStore {
    /// Load all three documents. Any read or parse failure fails the whole
    /// load — there is no partial-success merging.
    pub fn load(source: &dyn ContentSource) -> Result<ContentStore, String> {
        Ok(ContentStore {
            main: parse_doc(source, "content")?,
            ui: parse_doc(source, "ui-text")?,
            testimonials: parse_doc(source, "testimonials")?,
        })
    }

    /// Load with the single recovery path: on any failure, log the
    /// diagnostic and fall back to the hard-coded minimal content set.
    pub fn load_or_fallback(source: &dyn ContentSource) -> ContentStore {
        match Self::load(source) {
            Ok(store) => store,
            Err(e) => {
                error!("Error loading content: {}", e);
                Self::fallback()
            }
        }
    }

    /// Minimal hard-coded content: hero text plus the four primary
    /// navigation links. Everything else stays blank.
    pub fn fallback() -> ContentStore {
        ContentStore {
            main: json!({
                "hero": {
                    "catchphrase": "Transform Your Leadership, Transform Your Business",
                    "subtitle": "Keynote speaker inspiring teams across the globe"
                }
            }),
            ui: json!({
                "navigation": [
                    { "href": "index.html", "text": "Home" },
                    { "href": "about.html", "text": "About" },
                    { "href": "testimonials.html", "text": "Testimonials" },
                    { "href": "book.html", "text": "Book Now" }
                ]
            }),
            testimonials: json!({}),
        }
    }

    /// Resolve a dot path whose first segment names the document
    /// (`main.hero.catchphrase`, `ui.form_labels`, ...).
    pub fn get(&self, path: &str) -> Option<&Value> {
        let (doc, rest) = match path.split_once('.') {
            Some((doc, rest)) => (doc, rest),
            None => (path, ""),
        };
        let root = match doc {
            "main" => &self.main,
            "ui" => &self.ui,
            "testimonials" => &self.testimonials,
            _ => return None,
        };
        if rest.is_empty() {
            Some(root)
        } else {
            lookup(root, rest)
        }
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|v| v.as_str())
    }
}

fn parse_doc(source: &dyn ContentSource, name: &str) -> Result<Value, String> {
    let text = source.read(name)?;
    serde_json::from_str(&text).map_err(|e| format!("{}.json: {}", name, e))
}

/// Dot-addressed lookup within a document. Numeric segments index into
/// arrays. Any missing step yields `None` — a miss is never an error.
pub fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = doc;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
