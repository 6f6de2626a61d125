use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, Window};
use yew::Callback;

use crate::config::{
    HASH_LOAD_SETTLE_MS, HASH_SYNC_DEBOUNCE_MS, HOME_FORCE_THRESHOLD_PX, SCROLL_DEBOUNCE_MS,
};
use crate::nav::debounce::Debounce;
use crate::nav::dom;
use crate::nav::sync::{compute_active_section, HashEcho, NavState, ScrollCoalescer};

struct Inner {
    section_ids: Vec<String>,
    nav: NavState,
    scrolls: ScrollCoalescer,
    scroll_debounce: Debounce,
    hash_debounce: Debounce,
    hash_echo: HashEcho,
    on_active: Callback<Option<String>>,
}

impl Inner {
    /// Routes the new active id through the nav state and, only on an
    /// actual change, out to the rendered links.
    fn set_active(&mut self, id: Option<&str>) {
        if self.nav.apply_active_link(id) {
            self.on_active.emit(id.map(str::to_string));
        }
    }
}

/// Keeps scroll position, the single active nav link, and the URL hash
/// consistent, deferring to explicit navigation (link clicks, back/forward,
/// hash-bearing loads). Constructed once the page is mounted; dropping it
/// detaches every listener.
pub struct NavSync {
    inner: Rc<RefCell<Inner>>,
    window: Window,
    document: Document,
    scroll_cb: Closure<dyn FnMut()>,
    hashchange_cb: Closure<dyn FnMut()>,
    popstate_cb: Closure<dyn FnMut()>,
    anchor_cb: Closure<dyn FnMut(MouseEvent)>,
}

impl NavSync {
    pub fn mount(section_ids: Vec<String>, on_active: Callback<Option<String>>) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let inner = Rc::new(RefCell::new(Inner {
            nav: NavState::new(section_ids.iter().cloned()),
            section_ids,
            scrolls: ScrollCoalescer::default(),
            scroll_debounce: Debounce::new(SCROLL_DEBOUNCE_MS),
            hash_debounce: Debounce::new(HASH_SYNC_DEBOUNCE_MS),
            hash_echo: HashEcho::default(),
            on_active,
        }));

        let scroll_cb = {
            let inner = inner.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || on_scroll(&inner, &window)) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
            .ok()?;

        // hashchange covers address-bar edits and anchor navigation,
        // popstate covers back/forward; both funnel into the same guard.
        let hashchange_cb = {
            let inner = inner.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || on_external_hash(&inner, &window)) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("hashchange", hashchange_cb.as_ref().unchecked_ref())
            .ok()?;

        let popstate_cb = {
            let inner = inner.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || on_external_hash(&inner, &window)) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("popstate", popstate_cb.as_ref().unchecked_ref())
            .ok()?;

        // Any in-page anchor (nav links, hero call-to-action buttons) is a
        // navigation request; intercepted here so the default jump never
        // fights the smooth scroll.
        let anchor_cb = {
            let inner = inner.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                on_anchor_click(&inner, &window, event)
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        document
            .add_event_listener_with_callback("click", anchor_cb.as_ref().unchecked_ref())
            .ok()?;

        initial_sync(&inner, &window);

        // A hash already present at load is a navigation request; honor it
        // after a short settle delay so images and fonts stop shifting the
        // layout underneath the measurement.
        let hash = dom::current_hash(&window);
        if let Some(id) = hash.strip_prefix('#').filter(|id| !id.is_empty()) {
            let id = id.to_string();
            let inner = inner.clone();
            let window = window.clone();
            info!("page loaded with hash, scrolling to {id}");
            Timeout::new(HASH_LOAD_SETTLE_MS, move || {
                navigate_to(&inner, &window, &id);
            })
            .forget();
        }

        Some(Self { inner, window, document, scroll_cb, hashchange_cb, popstate_cb, anchor_cb })
    }
}

impl Drop for NavSync {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "scroll",
            self.scroll_cb.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "hashchange",
            self.hashchange_cb.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "popstate",
            self.popstate_cb.as_ref().unchecked_ref(),
        );
        let _ = self.document.remove_event_listener_with_callback(
            "click",
            self.anchor_cb.as_ref().unchecked_ref(),
        );
        let mut inner = self.inner.borrow_mut();
        inner.scroll_debounce.cancel();
        inner.hash_debounce.cancel();
    }
}

fn on_scroll(inner: &Rc<RefCell<Inner>>, window: &Window) {
    let Some(document) = window.document() else { return };
    let probe = dom::scroll_probe(window, &document);

    let mut state = inner.borrow_mut();
    state.scrolls.note(probe);
    state.scroll_debounce.schedule({
        let inner = inner.clone();
        let window = window.clone();
        move || settle_scroll(&inner, &window)
    });
    state.hash_debounce.schedule({
        let inner = inner.clone();
        let window = window.clone();
        move || sync_url_hash(&inner, &window)
    });
}

/// Fires once per scroll burst: recomputes the active section from the
/// probe recorded by the last scroll event.
fn settle_scroll(inner: &Rc<RefCell<Inner>>, window: &Window) {
    let Some(document) = window.document() else { return };
    let (probe, ids) = {
        let mut state = inner.borrow_mut();
        (state.scrolls.take(), state.section_ids.clone())
    };
    let Some(probe) = probe else { return };

    let sections = dom::measure_sections(&document, &ids);
    let active = compute_active_section(probe, &sections).map(str::to_string);
    inner.borrow_mut().set_active(active.as_deref());
}

/// Fires after the long quiet window: mirrors the active link into the URL
/// hash with a history replace, remembering the write so its own echo is
/// not mistaken for user navigation.
fn sync_url_hash(inner: &Rc<RefCell<Inner>>, window: &Window) {
    let mut state = inner.borrow_mut();
    let Some(desired) = state.nav.desired_hash() else { return };
    if dom::current_hash(window) != desired {
        debug!("syncing url hash to {desired}");
        state.hash_echo.record_write(&desired);
        dom::replace_hash(window, &desired);
    }
}

/// The browser reported a hash change. Self-written hashes are echoes of
/// `sync_url_hash` and are ignored; anything else is explicit navigation.
fn on_external_hash(inner: &Rc<RefCell<Inner>>, window: &Window) {
    let hash = dom::current_hash(window);
    let Some(id) = hash.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return;
    };
    if inner.borrow_mut().hash_echo.is_echo(&hash) {
        debug!("ignoring own hash write: {hash}");
        return;
    }
    info!("external hash navigation: {id}");
    let id = id.to_string();
    navigate_to(inner, window, &id);
}

/// Intercepts clicks on `a[href^="#"]` anywhere in the page. The default
/// jump is only suppressed when the target section actually exists, so a
/// stray anchor keeps its native behavior.
fn on_anchor_click(inner: &Rc<RefCell<Inner>>, window: &Window, event: MouseEvent) {
    let Some(document) = window.document() else { return };
    let Some(target) = event.target() else { return };
    let Some(element) = target.dyn_ref::<Element>() else { return };
    let Ok(Some(anchor)) = element.closest("a[href^='#']") else { return };
    let Some(href) = anchor.get_attribute("href") else { return };
    let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return;
    };
    if document.get_element_by_id(id).is_none() {
        return;
    }
    event.prevent_default();
    event.stop_propagation();
    debug!("anchor clicked: {id}");
    let id = id.to_string();
    navigate_to(inner, window, &id);
}

/// Shared path for clicks, external hash changes, and hash-bearing loads:
/// scroll to the section and make its link the sole active one without
/// waiting for the debounced recompute; the settled scroll merely confirms
/// it. Unknown ids are logged no-ops.
fn navigate_to(inner: &Rc<RefCell<Inner>>, window: &Window, id: &str) {
    let Some(document) = window.document() else { return };
    if !dom::scroll_to_section(window, &document, id) {
        return;
    }
    let mut state = inner.borrow_mut();
    if state.nav.contains(id) {
        state.set_active(Some(id));
    }
}

/// One recompute at mount so the page never starts with a stale menu; a
/// near-top load forces the home link active even though the probe may sit
/// below home's extent on short viewports.
fn initial_sync(inner: &Rc<RefCell<Inner>>, window: &Window) {
    let Some(document) = window.document() else { return };
    let probe = dom::scroll_probe(window, &document);
    let ids = inner.borrow().section_ids.clone();
    let sections = dom::measure_sections(&document, &ids);
    let mut active = compute_active_section(probe, &sections).map(str::to_string);
    if probe.offset < HOME_FORCE_THRESHOLD_PX {
        active = Some("home".to_string());
    }
    let mut state = inner.borrow_mut();
    if active.as_deref().is_some_and(|id| state.nav.contains(id)) || active.is_none() {
        state.set_active(active.as_deref());
    }
    info!("navigation sync initialized over {} sections", ids.len());
}
