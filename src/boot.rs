use log::{info, warn};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;

/// Content documents the renderer expects to find in the content dir.
const CONTENT_DOCUMENTS: &[&str] = &["content.json", "ui-text.json", "testimonials.json"];

/// Run startup checks: make sure the content directory exists and warn
/// about missing documents. A missing document is not fatal — the loader
/// falls back to the built-in minimal content.
pub fn run(config: &SiteConfig) {
    info!("Podium boot check starting...");

    let mut warnings = 0u32;

    // ── 1. Content directory ───────────────────────────
    let dir = Path::new(&config.content_dir);
    if !dir.exists() {
        match fs::create_dir_all(dir) {
            Ok(_) => info!("  Created content directory: {}", config.content_dir),
            Err(e) => {
                warn!("  FAILED to create {}: {}", config.content_dir, e);
                warnings += 1;
            }
        }
    }

    // ── 2. Content documents ───────────────────────────
    for file in CONTENT_DOCUMENTS {
        if !dir.join(file).exists() {
            warn!(
                "  Missing content document: {}/{} (fallback content will be used)",
                config.content_dir, file
            );
            warnings += 1;
        }
    }

    // ── 3. podium.toml ─────────────────────────────────
    if !Path::new("podium.toml").exists() {
        warn!("  podium.toml not found — using default config");
        warnings += 1;
    }

    // ── Summary ────────────────────────────────────────
    if warnings > 0 {
        warn!("Boot check passed with {} warning(s).", warnings);
    } else {
        info!("Boot check passed. All systems go.");
    }
}
