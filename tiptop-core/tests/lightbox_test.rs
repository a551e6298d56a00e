//! Lightbox behaviour driven through page events

mod common;

use std::sync::Arc;

use common::site;
use tiptop_core::test_utils::{MockTransport, Reply};
use tiptop_core::{Element, Interactions, Key, MediaKind, Page, PageEvent};

fn transport() -> Arc<MockTransport> {
    Arc::new(MockTransport::new(Reply::ok(200, "{}")))
}

fn click(
    interactions: &mut Interactions,
    page: &mut Page,
    target: tiptop_core::ElementId,
) -> bool {
    interactions
        .handle_event(page, &PageEvent::Click { target })
        .default_prevented
}

fn key(interactions: &mut Interactions, page: &mut Page, key: Key, shift: bool) -> bool {
    interactions
        .handle_event(page, &PageEvent::KeyDown { key, shift })
        .default_prevented
}

#[test]
fn test_click_inside_trigger_opens_image() {
    let mut s = site();
    let mut ix = s.attach(transport());
    s.page.focus(s.photo);

    assert!(click(&mut ix, &mut s.page, s.photo_thumb));

    let viewer = ix.modal().unwrap();
    assert!(viewer.is_open());
    assert_eq!(viewer.payload().unwrap().kind, MediaKind::Image);
    let image = s.page.get(s.image).unwrap();
    assert_eq!(image.attr("src"), Some("/static/img/sala.jpg"));
    assert_eq!(image.attr("alt"), Some("Sala konferencyjna"));
    assert_eq!(s.page.focused(), Some(s.close));
    assert!(s.page.is_scroll_locked());
}

#[test]
fn test_media_kind_resolution() {
    let mut s = site();
    let mut ix = s.attach(transport());

    click(&mut ix, &mut s.page, s.forced_video);
    assert_eq!(ix.modal().unwrap().payload().unwrap().kind, MediaKind::Video);
    assert_eq!(
        s.page.get(s.video).unwrap().attr("src"),
        Some("/media/poster.png")
    );

    click(&mut ix, &mut s.page, s.photo);
    assert_eq!(ix.modal().unwrap().payload().unwrap().kind, MediaKind::Image);

    click(&mut ix, &mut s.page, s.clip);
    assert_eq!(ix.modal().unwrap().payload().unwrap().kind, MediaKind::Video);
    assert!(s.page.get(s.video).unwrap().is_playing());
}

#[test]
fn test_second_trigger_swaps_payload_without_restoring_focus() {
    let mut s = site();
    let mut ix = s.attach(transport());
    s.page.focus(s.photo);
    click(&mut ix, &mut s.page, s.photo);

    // Focus moves within the overlay, never back to the first trigger
    s.page.focus(s.caption_link);
    click(&mut ix, &mut s.page, s.clip);

    assert!(ix.modal().unwrap().is_open());
    assert_eq!(s.page.focused(), Some(s.close));
    let image = s.page.get(s.image).unwrap();
    assert_eq!(image.attr("src"), None);
    assert!(image.has_class("hidden"));
    assert_eq!(
        s.page.get(s.video).unwrap().attr("src"),
        Some("/media/clip.webm")
    );

    assert!(!key(&mut ix, &mut s.page, Key::Escape, false));
    assert_eq!(s.page.focused(), Some(s.photo));
}

#[test]
fn test_close_paths_restore_focus() {
    let mut s = site();
    let mut ix = s.attach(transport());

    // Close control
    s.page.focus(s.photo);
    click(&mut ix, &mut s.page, s.photo);
    assert!(click(&mut ix, &mut s.page, s.close));
    assert!(!ix.modal().unwrap().is_open());
    assert_eq!(s.page.focused(), Some(s.photo));
    assert!(!s.page.is_scroll_locked());

    // Backdrop
    s.page.focus(s.clip);
    click(&mut ix, &mut s.page, s.clip);
    click(&mut ix, &mut s.page, s.overlay);
    assert!(!ix.modal().unwrap().is_open());
    assert_eq!(s.page.focused(), Some(s.clip));
    let video = s.page.get(s.video).unwrap();
    assert!(!video.is_playing());
    assert_eq!(video.attr("src"), None);

    // Escape
    s.page.focus(s.forced_video);
    click(&mut ix, &mut s.page, s.forced_video);
    key(&mut ix, &mut s.page, Key::Escape, false);
    assert!(s.page.get(s.overlay).unwrap().has_class("hidden"));
    assert_eq!(s.page.focused(), Some(s.forced_video));
}

#[test]
fn test_click_on_content_keeps_lightbox_open() {
    let mut s = site();
    let mut ix = s.attach(transport());
    click(&mut ix, &mut s.page, s.photo);

    assert!(!click(&mut ix, &mut s.page, s.image));
    assert!(ix.modal().unwrap().is_open());
}

#[test]
fn test_tab_wraps_inside_overlay() {
    let mut s = site();
    let mut ix = s.attach(transport());
    click(&mut ix, &mut s.page, s.photo);
    assert_eq!(s.page.focused(), Some(s.close));

    // Shift+Tab on the first focusable goes to the last
    assert!(key(&mut ix, &mut s.page, Key::Tab, true));
    assert_eq!(s.page.focused(), Some(s.caption_link));

    // Tab on the last goes back to the first
    assert!(key(&mut ix, &mut s.page, Key::Tab, false));
    assert_eq!(s.page.focused(), Some(s.close));

    // Tab elsewhere is left to the host
    assert!(!key(&mut ix, &mut s.page, Key::Tab, false));
    assert_eq!(s.page.focused(), Some(s.close));
}

#[test]
fn test_keys_are_ignored_while_closed() {
    let mut s = site();
    let mut ix = s.attach(transport());
    s.page.focus(s.submit);

    assert!(!key(&mut ix, &mut s.page, Key::Tab, false));
    assert!(!key(&mut ix, &mut s.page, Key::Escape, false));
    assert_eq!(s.page.focused(), Some(s.submit));
    assert!(!ix.modal().unwrap().is_open());
}

#[test]
fn test_enter_and_space_on_focused_trigger_open() {
    let mut s = site();
    let mut ix = s.attach(transport());

    s.page.focus(s.clip);
    assert!(key(&mut ix, &mut s.page, Key::Enter, false));
    assert_eq!(ix.modal().unwrap().payload().unwrap().source, "/media/clip.webm");

    key(&mut ix, &mut s.page, Key::Escape, false);
    s.page.focus(s.forced_video);
    assert!(key(&mut ix, &mut s.page, Key::Space, false));
    assert!(ix.modal().unwrap().is_open());

    key(&mut ix, &mut s.page, Key::Escape, false);
    s.page.focus(s.submit);
    assert!(!key(&mut ix, &mut s.page, Key::Enter, false));
    assert!(!ix.modal().unwrap().is_open());
}

#[test]
fn test_triggers_added_later_are_picked_up() {
    let mut s = site();
    let mut ix = s.attach(transport());
    let late = s.page.append(
        s.page.root(),
        Element::new("a")
            .with_attr("data-lightbox", "")
            .with_attr("href", "/late.ogg"),
    );

    click(&mut ix, &mut s.page, late);

    assert_eq!(ix.modal().unwrap().payload().unwrap().kind, MediaKind::Video);
}

#[test]
fn test_page_without_overlay_ignores_lightbox_events() {
    let mut s = site();
    s.page.remove(s.overlay);
    let mut ix = s.attach(transport());

    assert!(ix.modal().is_none());
    assert!(!click(&mut ix, &mut s.page, s.photo));
    assert!(!key(&mut ix, &mut s.page, Key::Escape, false));
}
