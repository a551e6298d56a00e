//! Focus containment inside the overlay

use crate::page::{Element, ElementId, Page};

/// Candidates for keyboard focus: buttons, anything with `href`, form fields
/// and elements with a `tabindex` other than `-1`.
pub fn is_focusable(el: &Element) -> bool {
    matches!(el.tag(), "button" | "input" | "select" | "textarea")
        || el.has_attr("href")
        || el.attr("tabindex").is_some_and(|t| t.trim() != "-1")
}

/// Focusable descendants of `scope` in document order.
pub fn focusables(page: &Page, scope: ElementId) -> Vec<ElementId> {
    page.query_all(scope, is_focusable)
}

/// Wrap focus at the edges of `scope`.
///
/// Tab on the last focusable moves to the first, Shift+Tab on the first moves
/// to the last. Returns whether focus was moved; anywhere else the key is left
/// to the host.
pub fn trap(page: &mut Page, scope: ElementId, backwards: bool) -> bool {
    let list = focusables(page, scope);
    let (Some(&first), Some(&last)) = (list.first(), list.last()) else {
        return false;
    };
    let focused = page.focused();
    let (edge, target) = if backwards {
        (first, last)
    } else {
        (last, first)
    };
    if focused != Some(edge) {
        return false;
    }
    page.focus(target);
    true
}
