use chrono::{Datelike, Utc};
use log::{debug, info};

use crate::slots::SlotDoc;

/// Scroll offset past which the back-to-top control appears.
const BACK_TO_TOP_THRESHOLD: i64 = 300;

pub const INQUIRY_ACK: &str = "Thank you for your inquiry! We will contact you soon.";

/// Open/close the mobile navigation panel.
pub fn toggle_mobile_menu(doc: &mut SlotDoc) {
    doc.toggle_class("nav-menu", "mobile-open");
}

/// Show the back-to-top control once the page is scrolled past the
/// threshold, hide it otherwise.
pub fn update_back_to_top(doc: &mut SlotDoc, scroll_y: i64) {
    if let Some(el) = doc.get_mut("back-to-top") {
        if scroll_y > BACK_TO_TOP_THRESHOLD {
            el.add_class("visible");
        } else {
            el.remove_class("visible");
        }
    }
}

/// Smooth-scroll back to the top of the page on request. Yields the
/// target offset the viewport lands on.
pub fn scroll_to_top() -> i64 {
    debug!("smooth-scrolling to top");
    0
}

/// Decide whether an in-page anchor href should smooth-scroll, and to
/// which element. Bare `#` and empty hrefs have no target and must be
/// swallowed rather than scrolled.
pub fn scroll_target(href: &str) -> Option<&str> {
    if !href.starts_with('#') || href.len() <= 1 {
        return None;
    }
    Some(&href[1..])
}

/// Difference between the current calendar year and the founding year.
/// Computed once at load; not live-updating.
pub fn years_in_business(founding_year: i32) -> i32 {
    Utc::now().year() - founding_year
}

pub fn bind_years_in_business(doc: &mut SlotDoc, founding_year: i32) {
    doc.set_text(
        "years-in-business",
        &years_in_business(founding_year).to_string(),
    );
}

/// Form submission stub: the submit is intercepted, nothing is sent
/// anywhere, and the visitor gets an acknowledgment.
pub fn acknowledge_inquiry(name: &str) -> String {
    info!("booking inquiry received from {:?} (not forwarded)", name);
    INQUIRY_ACK.to_string()
}
