use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Card-like elements that fade in the first time they scroll into view.
const REVEAL_SELECTOR: &str =
    ".service-card, .highlight-card, .stat-card, .gallery-item, .mvv-item, .info-item, .contact-item";

pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Tags every animated element with `fade-in` and flips it to `visible`
/// once it intersects the viewport (bottom margin pulled up so elements
/// reveal slightly before fully entering).
pub fn mount_reveal(document: &Document) -> Option<RevealObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: Vec<IntersectionObserverEntry>, _observer: IntersectionObserver| {
            for entry in entries {
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("visible");
                }
            }
        },
    )
        as Box<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&0.1.into());
    options.set_root_margin("0px 0px -50px 0px");
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    let elements = document.query_selector_all(REVEAL_SELECTOR).ok()?;
    for index in 0..elements.length() {
        if let Some(element) = elements
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        {
            let _ = element.class_list().add_1("fade-in");
            observer.observe(&element);
        }
    }
    info!("scroll reveal armed for {} elements", elements.length());

    Some(RevealObserver { observer, _callback: callback })
}

pub struct ImageFallbacks {
    images: Vec<HtmlImageElement>,
    callbacks: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

impl Drop for ImageFallbacks {
    fn drop(&mut self) {
        for (image, callback) in self.images.iter().zip(&self.callbacks) {
            let _ = image
                .remove_event_listener_with_callback("error", callback.as_ref().unchecked_ref());
        }
    }
}

/// A broken image keeps its footprint: on `error` the element gets a
/// neutral background and its current height pinned, instead of
/// collapsing the layout around it.
pub fn watch_images(document: &Document) -> Option<ImageFallbacks> {
    let nodes = document.query_selector_all("img").ok()?;
    let mut images = Vec::new();
    let mut callbacks = Vec::new();

    for index in 0..nodes.length() {
        let Some(image) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
        else {
            continue;
        };

        let callback = {
            let image = image.clone();
            Closure::wrap(Box::new(move |_event: web_sys::Event| {
                warn!("image failed to load: {}", image.src());
                let style = image.style();
                let _ = style.set_property("background-color", "#f8f9fa");
                let _ = style.set_property("min-height", &format!("{}px", image.offset_height()));
            }) as Box<dyn FnMut(web_sys::Event)>)
        };
        if image
            .add_event_listener_with_callback("error", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            images.push(image);
            callbacks.push(callback);
        }
    }
    debug!("watching {} images for load failures", images.len());

    Some(ImageFallbacks { images, callbacks })
}
