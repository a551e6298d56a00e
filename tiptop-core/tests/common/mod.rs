//! Shared fixtures: the site markup

#![allow(dead_code)]

use std::sync::Arc;

use tiptop_core::{Config, ContactTransport, Element, ElementId, Interactions, Page};

/// Handles to the interesting parts of [`site`].
pub struct Site {
    pub page: Page,
    pub form: ElementId,
    pub name: ElementId,
    pub email: ElementId,
    pub message: ElementId,
    pub submit: ElementId,
    pub status: ElementId,
    pub photo: ElementId,
    pub photo_thumb: ElementId,
    pub clip: ElementId,
    pub forced_video: ElementId,
    pub overlay: ElementId,
    pub close: ElementId,
    pub image: ElementId,
    pub video: ElementId,
    pub caption_link: ElementId,
}

/// Page laid out like the site: gallery, contact form and lightbox.
pub fn site() -> Site {
    let mut page = Page::new();
    let body = page.append(page.root(), Element::new("body"));

    let gallery = page.append(body, Element::new("section").with_id("galeria"));
    let photo = page.append(
        gallery,
        Element::new("a")
            .with_attr("data-lightbox", "")
            .with_attr("href", "/static/img/sala.jpg")
            .with_attr("data-title", "Sala konferencyjna"),
    );
    let photo_thumb = page.append(photo, Element::new("img").with_attr("src", "/thumb/sala.jpg"));
    let clip = page.append(
        gallery,
        Element::new("a")
            .with_attr("data-lightbox", "")
            .with_attr("href", "/media/clip.webm"),
    );
    let forced_video = page.append(
        gallery,
        Element::new("button")
            .with_attr("data-lightbox", "")
            .with_attr("data-src", "/media/poster.png")
            .with_attr("data-type", "video"),
    );

    let form = page.append(body, Element::new("form").with_id("kontakt-form"));
    let name = page.append(form, Element::new("input").with_attr("name", "name"));
    let email = page.append(
        form,
        Element::new("input")
            .with_attr("name", "email")
            .with_attr("type", "email"),
    );
    let message = page.append(form, Element::new("textarea").with_attr("name", "message"));
    let submit = page.append(
        form,
        Element::new("button")
            .with_attr("type", "submit")
            .with_text("Wyślij zapytanie"),
    );
    let status = page.append(form, Element::new("p").with_id("form-status"));

    let overlay = page.append(body, Element::new("div").with_id("lb").with_class("hidden"));
    let close = page.append(overlay, Element::new("button").with_id("lb-close"));
    let image = page.append(overlay, Element::new("img").with_id("lb-img"));
    let video = page.append(
        overlay,
        Element::new("video").with_id("lb-video").with_class("hidden"),
    );
    let caption_link = page.append(overlay, Element::new("a").with_attr("href", "/galeria"));

    Site {
        page,
        form,
        name,
        email,
        message,
        submit,
        status,
        photo,
        photo_thumb,
        clip,
        forced_video,
        overlay,
        close,
        image,
        video,
        caption_link,
    }
}

impl Site {
    /// Type into the contact form.
    pub fn fill(&mut self, name: &str, email: &str, message: &str) {
        for (id, value) in [(self.name, name), (self.email, email), (self.message, message)] {
            if let Some(el) = self.page.get_mut(id) {
                el.set_value(value);
            }
        }
    }

    pub fn attach(&self, transport: Arc<dyn ContactTransport>) -> Interactions {
        Interactions::attach(&self.page, &Config::default(), transport)
    }
}
