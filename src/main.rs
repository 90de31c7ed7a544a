use std::env;

mod bind;
mod boot;
mod chrome;
mod config;
mod content;
mod models;
mod page;
mod rotation;
mod slots;

use config::SiteConfig;
use content::{ContentStore, FileSource};
use page::PageIdentity;
use rotation::{ManualScheduler, Rotator};
use slots::{Element, SlotDoc};

fn main() {
    env_logger::init();

    let config = SiteConfig::load();
    boot::run(&config);

    let location = env::args().nth(1).unwrap_or_else(|| "index.html".to_string());
    let identity = PageIdentity::resolve(&location);

    let source = FileSource::new(&config.content_dir);
    let store = ContentStore::load_or_fallback(&source);

    let mut doc = SlotDoc::for_page(identity);
    bind::initialize_page(&mut doc, &store, identity);
    chrome::bind_years_in_business(&mut doc, config.founding_year);

    if identity == PageIdentity::Home {
        rotate_once(&mut doc, &store, &config);
    }

    print!("{}", render_text(&doc, identity, &location));
}

/// Drive one rotation tick so the printed homepage reflects the carousel
/// state after the first interval.
fn rotate_once(doc: &mut SlotDoc, store: &ContentStore, config: &SiteConfig) {
    let total = store
        .get("testimonials.testimonials")
        .and_then(|v| v.as_array())
        .map(|items| items.len())
        .unwrap_or(0);

    let mut sched = ManualScheduler::new();
    let mut rotator = Rotator::windowed(total, config.rotate_interval_ms);
    rotator.start(&mut sched);
    if rotator.is_running() {
        let window = rotator.tick();
        bind::apply_window(doc, "testimonials-container", &window);
    }
    rotator.teardown(&mut sched);
}

/// Plain-text dump of the bound slots, one per line, children indented.
fn render_text(doc: &SlotDoc, identity: PageIdentity, location: &str) -> String {
    let mut out = format!("page: {:?} ({})\n", identity, location);
    let mut slots: Vec<_> = doc.iter().collect();
    slots.sort_by(|a, b| a.0.cmp(b.0));

    for (id, el) in slots {
        out.push_str(&format!("#{}", id));
        if !el.classes.is_empty() {
            out.push_str(&format!(" .{}", el.classes.join(".")));
        }
        if !el.text.is_empty() {
            out.push_str(&format!(" {:?}", el.text));
        }
        for (key, value) in &el.attrs {
            out.push_str(&format!(" [{}={}]", key, value));
        }
        out.push('\n');
        for child in &el.children {
            render_child(&mut out, child, 1);
        }
    }
    out
}

fn render_child(out: &mut String, el: &Element, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    out.push('-');
    if !el.classes.is_empty() {
        out.push_str(&format!(" .{}", el.classes.join(".")));
    }
    if !el.text.is_empty() {
        out.push_str(&format!(" {:?}", el.text));
    }
    for (key, value) in &el.attrs {
        out.push_str(&format!(" [{}={}]", key, value));
    }
    out.push('\n');
    for child in &el.children {
        render_child(out, child, depth + 1);
    }
}
