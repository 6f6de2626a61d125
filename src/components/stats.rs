use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{COUNTER_STEPS, COUNTER_TICK_MS};

/// What the counter shows at an intermediate step: the floored running
/// value, keeping the `+` suffix throughout so the text never jumps width.
pub fn counter_display(current: f64, target: u32, plus: bool) -> String {
    let suffix = if plus { "+" } else { "" };
    if current >= target as f64 {
        format!("{target}{suffix}")
    } else {
        format!("{}{suffix}", current.floor() as u32)
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub label: &'static str,
    #[prop_or(false)]
    pub plus: bool,
    pub started: bool,
}

/// One hero stat, counting up from zero once its parent block scrolls into
/// view. Fifty ticks at a fixed interval, then the exact target.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let shown = use_state_eq(|| 0.0_f64);

    {
        let shown = shown.clone();
        let target = props.target;
        use_effect_with_deps(
            move |started| {
                let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if *started {
                    let increment = target as f64 / COUNTER_STEPS as f64;
                    let current = Rc::new(RefCell::new(0.0_f64));
                    let ticker = handle.clone();
                    *handle.borrow_mut() = Some(Interval::new(COUNTER_TICK_MS, move || {
                        let mut current = current.borrow_mut();
                        *current += increment;
                        shown.set(*current);
                        if *current >= target as f64 {
                            // Dropping the interval from its own tick clears it.
                            ticker.borrow_mut().take();
                        }
                    }));
                }
                move || {
                    handle.borrow_mut().take();
                }
            },
            props.started,
        );
    }

    html! {
        <div class="stat-card">
            <span class="stat__number">{counter_display(*shown, props.target, props.plus)}</span>
            <span class="stat__label">{props.label}</span>
        </div>
    }
}

/// The hero stats block. An `IntersectionObserver` arms the counters the
/// first time half the block is visible, then unhooks itself so the
/// animation runs once per page load.
#[function_component(HeroStats)]
pub fn hero_stats() -> Html {
    let started = use_state_eq(|| false);
    let stats_ref = use_node_ref();

    {
        let started = started.clone();
        let stats_ref = stats_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer = None;
                if let Some(element) = stats_ref.cast::<web_sys::Element>() {
                    let callback = Closure::wrap(Box::new(
                        move |entries: Vec<IntersectionObserverEntry>,
                              observer: IntersectionObserver| {
                            for entry in entries {
                                if entry.is_intersecting() {
                                    info!("hero stats visible, starting counters");
                                    started.set(true);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&0.5.into());
                    if let Ok(obs) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        obs.observe(&element);
                        observer = Some((obs, callback));
                    }
                }
                move || {
                    if let Some((obs, _callback)) = observer {
                        obs.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="hero__stats" ref={stats_ref}>
            <StatCounter target={5000} plus={true} label="Happy Patients" started={*started} />
            <StatCounter target={15} plus={true} label="Years of Care" started={*started} />
            <StatCounter target={12} label="Specialist Dentists" started={*started} />
            <StatCounter target={24} label="Emergency Hours" started={*started} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::counter_display;

    #[test]
    fn intermediate_steps_floor_and_keep_suffix() {
        assert_eq!(counter_display(0.0, 5000, true), "0+");
        assert_eq!(counter_display(123.9, 5000, true), "123+");
        assert_eq!(counter_display(14.2, 15, false), "14");
    }

    #[test]
    fn reaching_target_shows_exact_value() {
        assert_eq!(counter_display(5000.0, 5000, true), "5000+");
        assert_eq!(counter_display(5120.4, 5000, true), "5000+");
    }
}
