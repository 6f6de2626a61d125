use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::config::{HEADER_SCROLLED_THRESHOLD_PX, MOBILE_BREAKPOINT_PX};
use crate::nav::controller::NavSync;

/// Section ids with their menu labels, in document order.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("services", "Services"),
    ("about", "About Us"),
    ("gallery", "Gallery"),
    ("contact", "Contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active_section = use_state_eq(|| None::<String>);
    let controller = use_mut_ref(|| None::<NavSync>);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    // The navigation sync controller lives exactly as long as the header.
    {
        let controller = controller.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let on_active = Callback::from(move |id: Option<String>| {
                    active_section.set(id);
                });
                let ids = NAV_ITEMS.iter().map(|(id, _)| id.to_string()).collect();
                *controller.borrow_mut() = NavSync::mount(ids, on_active);
                move || {
                    controller.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Header swaps to its translucent style once scrolled past the fold.
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(offset > HEADER_SCROLLED_THRESHOLD_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Clicking outside the menu, pressing Escape, or resizing past the
    // mobile breakpoint all close the menu.
    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let click_callback = {
                    let menu_open = menu_open.clone();
                    Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                        let target = event
                            .target()
                            .and_then(|t| t.dyn_into::<Node>().ok());
                        let inside = target.as_ref().is_some_and(|node| {
                            let in_menu = menu_ref
                                .cast::<Node>()
                                .is_some_and(|menu| menu.contains(Some(node)));
                            let in_toggle = toggle_ref
                                .cast::<Node>()
                                .is_some_and(|toggle| toggle.contains(Some(node)));
                            in_menu || in_toggle
                        });
                        if !inside {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut(web_sys::MouseEvent)>)
                };
                document
                    .add_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                let key_callback = {
                    let menu_open = menu_open.clone();
                    Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
                        if event.key() == "Escape" {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>)
                };
                document
                    .add_event_listener_with_callback(
                        "keydown",
                        key_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                let resize_callback = {
                    let menu_open = menu_open.clone();
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let width = window
                            .inner_width()
                            .ok()
                            .and_then(|w| w.as_f64())
                            .unwrap_or(0.0);
                        if width > MOBILE_BREAKPOINT_PX {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut()>)
                };
                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                move || {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    );
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        key_callback.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            menu_open.set(!*menu_open);
        })
    };

    // The controller's delegated anchor listener performs the scroll; the
    // link handler only has to collapse the mobile menu.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("header", (*is_scrolled).then_some("header--scrolled"))}>
            <nav class="nav">
                <a href="#home" class="nav__brand" onclick={close_menu.clone()}>
                    <span class="nav__brand-mark">{"🦷"}</span>
                    {"Ahlain Dental Hospital"}
                </a>

                <button
                    ref={toggle_ref}
                    id="nav-toggle"
                    class={classes!("nav__toggle", (*menu_open).then_some("active"))}
                    aria-label="Toggle navigation menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <ul
                    ref={menu_ref}
                    id="nav-menu"
                    class={classes!("nav__menu", (*menu_open).then_some("active"))}
                >
                    {
                        NAV_ITEMS.iter().map(|(id, label)| {
                            let is_active = active_section.as_deref() == Some(*id);
                            html! {
                                <li class="nav__item" key={*id}>
                                    <a
                                        href={format!("#{id}")}
                                        class={classes!("nav__link", is_active.then_some("active"))}
                                        onclick={close_menu.clone()}
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>
            </nav>
        </header>
    }
}
