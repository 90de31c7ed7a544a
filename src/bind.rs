use serde_json::Value;

use crate::content::ContentStore;
use crate::models::gallery::GalleryItem;
use crate::models::nav::NavLink;
use crate::models::testimonial::{TestimonialRecord, VideoTestimonialRecord};
use crate::page::PageIdentity;
use crate::rotation;
use crate::slots::{Element, SlotDoc};

/// Slot id → document path. One table per page; a single generic applier
/// consumes them. List-shaped and attribute content has its own builders
/// below because the child templates differ per list.
pub type Binding = (&'static str, &'static str);

const CHROME_SLOTS: &[&str] = &[
    "logo-text",
    "nav-menu",
    "footer-text",
    "back-to-top",
    "years-in-business",
];

const HOME_BINDINGS: &[Binding] = &[
    ("hero-catchphrase", "main.hero.catchphrase"),
    ("hero-subtitle", "main.hero.subtitle"),
    ("book-cta-title", "main.sections.book_cta.title"),
    ("book-cta-description", "main.sections.book_cta.description"),
    ("book-cta-button", "main.sections.book_cta.button_text"),
    ("testimonials-section-title", "ui.section_titles.testimonials"),
    ("who-is-title", "main.sections.who_is.title"),
    ("who-is-description", "main.sections.who_is.description"),
    ("gallery-title", "main.sections.gallery.title"),
    ("final-cta-title", "main.sections.final_cta.title"),
    ("final-cta-button", "main.sections.final_cta.button_text"),
];

const HOME_CONTAINERS: &[&str] = &["testimonials-container", "gallery-container"];

const ABOUT_BINDINGS: &[Binding] = &[
    ("about-title", "main.about.title"),
    ("about-subtitle", "main.about.subtitle"),
    ("experience-title", "ui.section_titles.experience"),
    ("credentials-title", "ui.section_titles.credentials"),
    ("about-cta-title", "main.about.cta.title"),
    ("about-cta-description", "main.about.cta.description"),
    ("about-cta-button", "main.about.cta.button_text"),
];

const ABOUT_CONTAINERS: &[&str] = &[
    "about-bio",
    "about-photo",
    "experience-container",
    "credentials-container",
];

const TESTIMONIALS_BINDINGS: &[Binding] = &[
    ("testimonials-page-title", "main.testimonials_page.title"),
    ("testimonials-page-subtitle", "main.testimonials_page.subtitle"),
    ("philosophy-title", "main.philosophy.title"),
    ("philosophy-text", "main.philosophy.content"),
    ("video-testimonials-title", "ui.section_titles.video_testimonials"),
    ("testimonials-cta-title", "main.testimonials_page.cta.title"),
    (
        "testimonials-cta-description",
        "main.testimonials_page.cta.description",
    ),
    ("testimonials-cta-button", "main.testimonials_page.cta.button_text"),
];

const TESTIMONIALS_CONTAINERS: &[&str] =
    &["all-testimonials-container", "video-testimonials-container"];

const BOOK_BINDINGS: &[Binding] = &[
    ("book-title", "main.booking.title"),
    ("book-subtitle", "main.booking.subtitle"),
    ("booking-info-title", "main.booking.info_title"),
    ("form-title", "main.booking.form_title"),
    ("topics-title", "ui.section_titles.topics"),
];

/// Booking form slots come from the page template: one `<key>-label` per
/// form field, plus the submit button and the event-type select.
const BOOK_FORM_SLOTS: &[&str] = &[
    "name-label",
    "email-label",
    "phone-label",
    "organization-label",
    "event-date-label",
    "event-type-label",
    "message-label",
    "submit-button",
    "event-type",
];

const BOOK_CONTAINERS: &[&str] = &["booking-info-content", "topics-container"];

/// The fixed slot set a page template exposes, chrome included.
pub fn slot_ids(identity: PageIdentity) -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = CHROME_SLOTS.to_vec();
    let (bindings, containers): (&[Binding], &[&str]) = match identity {
        PageIdentity::Home => (HOME_BINDINGS, HOME_CONTAINERS),
        PageIdentity::About => (ABOUT_BINDINGS, ABOUT_CONTAINERS),
        PageIdentity::Testimonials => (TESTIMONIALS_BINDINGS, TESTIMONIALS_CONTAINERS),
        PageIdentity::Book => (BOOK_BINDINGS, BOOK_CONTAINERS),
        PageIdentity::Unknown => (&[], &[]),
    };
    ids.extend(bindings.iter().map(|(slot, _)| *slot));
    ids.extend(containers);
    if identity == PageIdentity::Book {
        ids.extend(BOOK_FORM_SLOTS);
    }
    ids
}

/// Write each bound field into its slot. Missing document path or missing
/// slot → silent skip; partial content degrades to the slot's existing
/// text, never to an error.
pub fn apply_text_bindings(doc: &mut SlotDoc, store: &ContentStore, table: &[Binding]) {
    for (slot, path) in table {
        if let Some(text) = store.get_str(path) {
            doc.set_text(slot, text);
        }
    }
}

/// Shared chrome: logo text and the navigation menu. Runs for every page
/// identity.
pub fn bind_navigation(doc: &mut SlotDoc, store: &ContentStore) {
    if let Some(logo) = store.get_str("ui.logo") {
        doc.set_text("logo-text", logo);
    }

    if let Some(Value::Array(items)) = store.get("ui.navigation") {
        if doc.has_slot("nav-menu") {
            doc.clear_children("nav-menu");
            for item in items {
                let link = NavLink::from_value(item);
                doc.append_child("nav-menu", nav_child(&link));
            }
        }
    }
}

pub fn bind_footer(doc: &mut SlotDoc, store: &ContentStore) {
    if let Some(text) = store.get_str("main.footer.text") {
        doc.set_text("footer-text", text);
    }
}

pub fn bind_home(doc: &mut SlotDoc, store: &ContentStore) {
    apply_text_bindings(doc, store, HOME_BINDINGS);
    render_testimonial_cards(
        doc,
        store,
        "testimonials-container",
        Some(rotation::HOME_VISIBLE_COUNT),
    );
    render_gallery(doc, store);
}

pub fn bind_about(doc: &mut SlotDoc, store: &ContentStore) {
    apply_text_bindings(doc, store, ABOUT_BINDINGS);

    if let Some(Value::Array(paragraphs)) = store.get("main.about.bio_paragraphs") {
        if doc.has_slot("about-bio") {
            doc.clear_children("about-bio");
            for p in paragraphs {
                let text = p.as_str().unwrap_or("");
                doc.append_child("about-bio", Element::with_text(text));
            }
        }
    }

    if let Some(photo) = store.get_str("main.about.photo") {
        doc.set_attr("about-photo", "src", photo);
    }

    if let Some(Value::Array(items)) = store.get("main.experience") {
        if doc.has_slot("experience-container") {
            doc.clear_children("experience-container");
            for item in items {
                doc.append_child(
                    "experience-container",
                    titled_child(
                        "experience-item",
                        item.get("title").and_then(|v| v.as_str()).unwrap_or(""),
                        item.get("description").and_then(|v| v.as_str()).unwrap_or(""),
                    ),
                );
            }
        }
    }

    if let Some(Value::Array(credentials)) = store.get("main.credentials") {
        if doc.has_slot("credentials-container") {
            doc.clear_children("credentials-container");
            for credential in credentials {
                let mut el = Element::with_text(credential.as_str().unwrap_or(""));
                el.add_class("credential-item");
                doc.append_child("credentials-container", el);
            }
        }
    }
}

pub fn bind_testimonials_page(doc: &mut SlotDoc, store: &ContentStore) {
    apply_text_bindings(doc, store, TESTIMONIALS_BINDINGS);
    render_testimonial_cards(doc, store, "all-testimonials-container", None);

    if let Some(Value::Array(videos)) = store.get("testimonials.video_testimonials") {
        if doc.has_slot("video-testimonials-container") {
            doc.clear_children("video-testimonials-container");
            for video in videos {
                let record = VideoTestimonialRecord::from_value(video);
                doc.append_child("video-testimonials-container", video_child(&record));
            }
        }
    }
}

pub fn bind_book(doc: &mut SlotDoc, store: &ContentStore) {
    apply_text_bindings(doc, store, BOOK_BINDINGS);

    if let Some(Value::Array(info)) = store.get("main.booking.info_content") {
        if doc.has_slot("booking-info-content") {
            doc.clear_children("booking-info-content");
            for line in info {
                doc.append_child(
                    "booking-info-content",
                    Element::with_text(line.as_str().unwrap_or("")),
                );
            }
        }
    }

    // Form labels are data-driven: every key in ui.form_labels targets the
    // slot named "<key>-label". The naming convention is the contract.
    if let Some(Value::Object(labels)) = store.get("ui.form_labels") {
        for (key, label) in labels {
            if let Some(text) = label.as_str() {
                doc.set_text(&format!("{}-label", key), text);
            }
        }
        if let Some(submit) = labels.get("submit").and_then(|v| v.as_str()) {
            doc.set_text("submit-button", submit);
        }
    }

    if let Some(Value::Array(types)) = store.get("ui.event_types") {
        if doc.has_slot("event-type") {
            for event_type in types {
                let text = event_type.as_str().unwrap_or("");
                let mut option = Element::with_text(text);
                option.attrs.insert("value".to_string(), text.to_string());
                doc.append_child("event-type", option);
            }
        }
    }

    if let Some(Value::Array(topics)) = store.get("main.speaking_topics") {
        if doc.has_slot("topics-container") {
            doc.clear_children("topics-container");
            for topic in topics {
                doc.append_child(
                    "topics-container",
                    titled_child(
                        "topic-item",
                        topic.get("title").and_then(|v| v.as_str()).unwrap_or(""),
                        topic.get("description").and_then(|v| v.as_str()).unwrap_or(""),
                    ),
                );
            }
        }
    }
}

/// Bind everything for the given identity: shared chrome first, then the
/// page's own binder. Unknown pages get chrome only.
pub fn initialize_page(doc: &mut SlotDoc, store: &ContentStore, identity: PageIdentity) {
    bind_navigation(doc, store);
    bind_footer(doc, store);
    match identity {
        PageIdentity::Home => bind_home(doc, store),
        PageIdentity::About => bind_about(doc, store),
        PageIdentity::Testimonials => bind_testimonials_page(doc, store),
        PageIdentity::Book => bind_book(doc, store),
        PageIdentity::Unknown => {}
    }
}

/// Flip the visible/hidden classes on a container's cards to match a
/// rotation window.
pub fn apply_window(doc: &mut SlotDoc, container: &str, window: &[usize]) {
    if let Some(el) = doc.get_mut(container) {
        for card in el.children.iter_mut() {
            card.remove_class("visible");
            card.add_class("hidden");
        }
        for &index in window {
            if let Some(card) = el.children.get_mut(index) {
                card.remove_class("hidden");
                card.add_class("visible");
            }
        }
    }
}

/// Rebuild a container from `testimonials.testimonials`. With a visible
/// count, the first N cards are marked visible and the rest hidden (the
/// homepage rotation's initial render); without one, no rotation classes.
fn render_testimonial_cards(
    doc: &mut SlotDoc,
    store: &ContentStore,
    container: &str,
    visible_count: Option<usize>,
) {
    let items = match store.get("testimonials.testimonials") {
        Some(Value::Array(items)) => items,
        _ => return,
    };
    if !doc.has_slot(container) {
        return;
    }

    doc.clear_children(container);
    for (index, item) in items.iter().enumerate() {
        let record = TestimonialRecord::from_value(item);
        let mut card = testimonial_child(&record);
        if let Some(visible) = visible_count {
            card.add_class(if index < visible { "visible" } else { "hidden" });
        }
        doc.append_child(container, card);
    }
}

fn render_gallery(doc: &mut SlotDoc, store: &ContentStore) {
    let items = match store.get("testimonials.gallery_items") {
        Some(Value::Array(items)) => items,
        _ => return,
    };
    if !doc.has_slot("gallery-container") {
        return;
    }

    doc.clear_children("gallery-container");
    for item in items {
        let record = GalleryItem::from_value(item);
        let mut el = Element::default();
        el.add_class("gallery-item");
        let mut img = Element::default();
        img.attrs.insert("src".to_string(), record.image.clone());
        img.attrs.insert("alt".to_string(), record.caption.clone());
        el.children.push(img);
        el.children.push(Element::with_text(&record.caption));
        doc.append_child("gallery-container", el);
    }
}

fn nav_child(link: &NavLink) -> Element {
    let mut el = Element::with_text(&link.text);
    el.add_class("nav-text");
    el.attrs.insert("href".to_string(), link.href.clone());
    el
}

fn testimonial_child(record: &TestimonialRecord) -> Element {
    let mut card = Element::default();
    card.add_class("testimonial-card");

    let mut quote = Element::with_text(&format!("\"{}\"", record.quote));
    quote.add_class("testimonial-quote");
    quote.add_class("quote-text");
    card.children.push(quote);

    let mut author = Element::with_text(&record.name);
    author.add_class("testimonial-author");
    card.children.push(author);

    let mut title = Element::with_text(&record.title);
    title.add_class("testimonial-title");
    card.children.push(title);

    card
}

fn video_child(record: &VideoTestimonialRecord) -> Element {
    let mut el = Element::default();
    el.add_class("video-testimonial-item");
    let mut video = Element::default();
    video
        .attrs
        .insert("src".to_string(), record.video_url.clone());
    el.children.push(video);
    el.children.push(Element::with_text(&record.name));
    el.children.push(Element::with_text(&record.title));
    el
}

fn titled_child(class: &str, title: &str, description: &str) -> Element {
    let mut el = Element::default();
    el.add_class(class);
    el.children.push(Element::with_text(title));
    el.children.push(Element::with_text(description));
    el
}
