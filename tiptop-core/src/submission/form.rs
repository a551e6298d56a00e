//! Form helpers: field capture, reset and the submit control

use crate::page::{Element, ElementId, Page};
use crate::traits::FormFields;

/// Attribute flagging an in-flight submission on the submit control
pub const LOCK_ATTRIBUTE: &str = "data-locked";

fn is_field(el: &Element) -> bool {
    matches!(el.tag(), "input" | "select" | "textarea")
}

fn is_submit_control(el: &Element) -> bool {
    el.tag() == "button" && el.attr("type") == Some("submit")
}

/// First `button[type="submit"]` inside `form`.
pub fn submit_control(page: &Page, form: ElementId) -> Option<ElementId> {
    page.query(form, is_submit_control)
}

/// Snapshot of the form's successful controls: named, enabled fields, with
/// checkboxes and radios included only when checked.
pub fn capture_fields(page: &Page, form: ElementId) -> FormFields {
    let mut fields = FormFields::new();
    for id in page.query_all(form, is_field) {
        let Some(el) = page.get(id) else {
            continue;
        };
        let Some(name) = el.non_empty_attr("name") else {
            continue;
        };
        if el.is_disabled() {
            continue;
        }
        let checkable = matches!(el.attr("type"), Some("checkbox" | "radio"));
        if checkable && !el.has_attr("checked") {
            continue;
        }
        let value = if checkable && el.value().is_empty() {
            "on"
        } else {
            el.value()
        };
        fields.insert(name.to_string(), value.to_string());
    }
    fields
}

/// Restore every field of `form` to its declared default.
pub fn reset_fields(page: &mut Page, form: ElementId) {
    for id in page.query_all(form, is_field) {
        if let Some(el) = page.get_mut(id) {
            el.reset_value();
        }
    }
}

/// Whether the submit control carries the in-flight flag.
pub fn is_locked(page: &Page, control: ElementId) -> bool {
    page.get(control)
        .and_then(|el| el.attr(LOCK_ATTRIBUTE))
        .is_some_and(|v| v == "1")
}
