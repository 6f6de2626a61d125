use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::reveal::{mount_reveal, watch_images, RevealObserver};
use crate::components::stats::HeroStats;
use crate::config::REVEAL_START_DELAY_MS;

const SERVICES: &[(&str, &str, &str)] = &[
    ("🦷", "General Dentistry", "Checkups, cleanings, fillings and preventive care for the whole family."),
    ("✨", "Cosmetic Dentistry", "Whitening, veneers and smile design tailored to you."),
    ("🔩", "Dental Implants", "Permanent, natural-looking replacements for missing teeth."),
    ("📐", "Orthodontics", "Braces and clear aligners for children and adults."),
    ("👶", "Pediatric Dentistry", "Gentle care that makes young patients feel at home."),
    ("🚑", "Emergency Care", "Same-day appointments for pain, trauma and broken teeth."),
];

const GALLERY: &[(&str, &str)] = &[
    ("/assets/gallery-reception.jpg", "Reception area"),
    ("/assets/gallery-treatment.jpg", "Treatment room"),
    ("/assets/gallery-surgery.jpg", "Surgery suite"),
    ("/assets/gallery-xray.jpg", "Imaging and X-ray"),
    ("/assets/gallery-sterile.jpg", "Sterilization center"),
    ("/assets/gallery-kids.jpg", "Kids corner"),
];

/// Adds `loaded` to the first element matching `selector` after `delay_ms`,
/// driving the staggered entrance animation.
fn entrance(selector: &'static str, delay_ms: u32) -> Timeout {
    Timeout::new(delay_ms, move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Ok(Some(element)) = document.query_selector(selector) {
                let _ = element.class_list().add_1("loaded");
            }
        }
    })
}

#[function_component(Home)]
pub fn home() -> Html {
    // Reveal observer, image fallbacks and entrance animation all attach
    // once the markup is in the DOM and detach with the page.
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window().and_then(|w| w.document());

            let images = document.as_ref().and_then(watch_images);

            let reveal: Rc<RefCell<Option<RevealObserver>>> = Rc::new(RefCell::new(None));
            let reveal_timer = document.map(|document| {
                let reveal = reveal.clone();
                // Delayed so the first paint isn't competing with observer
                // setup over a page full of cards.
                Timeout::new(REVEAL_START_DELAY_MS, move || {
                    *reveal.borrow_mut() = mount_reveal(&document);
                })
            });

            let hero_entrance = entrance(".hero__inner", 200);
            let overview_entrance = entrance(".company-overview", 600);

            move || {
                drop(reveal_timer);
                drop(hero_entrance);
                drop(overview_entrance);
                reveal.borrow_mut().take();
                drop(images);
            }
        },
        (),
    );

    html! {
        <main>
            <section id="home" class="section hero">
                <div class="hero__inner">
                    <h1 class="hero__title">{"Your Smile, Our Passion"}</h1>
                    <p class="hero__subtitle">
                        {"Ahlain Dental Hospital brings modern, gentle dental care \
                          to the whole family, seven days a week."}
                    </p>
                    <div class="hero__actions">
                        <a href="#contact" class="btn btn--primary">{"Book an Appointment"}</a>
                        <a href="#services" class="btn btn--outline">{"Our Services"}</a>
                    </div>
                    <HeroStats />
                </div>
            </section>

            <section id="services" class="section services">
                <div class="company-overview">
                    <h2 class="section__title">{"Complete Care Under One Roof"}</h2>
                    <p class="section__lead">
                        {"From routine checkups to full-mouth rehabilitation, our \
                          specialists cover every branch of modern dentistry."}
                    </p>
                </div>
                <div class="services__grid">
                    {
                        SERVICES.iter().map(|(icon, title, blurb)| html! {
                            <div class="service-card" key={*title}>
                                <span class="service-card__icon">{*icon}</span>
                                <h3 class="service-card__title">{*title}</h3>
                                <p class="service-card__text">{*blurb}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="about" class="section about">
                <h2 class="section__title">{"About Us"}</h2>
                <p class="section__lead">
                    {"Serving the community since 2010, Ahlain Dental Hospital \
                      combines experienced specialists with the latest equipment."}
                </p>
                <div class="about__mvv">
                    <div class="mvv-item">
                        <h3>{"Mission"}</h3>
                        <p>{"Accessible, painless dentistry for every patient."}</p>
                    </div>
                    <div class="mvv-item">
                        <h3>{"Vision"}</h3>
                        <p>{"A community where nobody fears the dentist's chair."}</p>
                    </div>
                    <div class="mvv-item">
                        <h3>{"Values"}</h3>
                        <p>{"Honesty, gentleness and uncompromising hygiene."}</p>
                    </div>
                </div>
                <div class="about__highlights">
                    <div class="highlight-card">
                        <h3>{"Digital Imaging"}</h3>
                        <p>{"Low-dose 3D X-ray for precise, safe diagnostics."}</p>
                    </div>
                    <div class="highlight-card">
                        <h3>{"Sterile by Design"}</h3>
                        <p>{"Hospital-grade sterilization in every treatment room."}</p>
                    </div>
                    <div class="highlight-card">
                        <h3>{"Family Friendly"}</h3>
                        <p>{"A kids corner and patient lounges that put everyone at ease."}</p>
                    </div>
                </div>
            </section>

            <section id="gallery" class="section gallery">
                <h2 class="section__title">{"Our Clinic"}</h2>
                <div class="gallery__grid">
                    {
                        GALLERY.iter().map(|(src, caption)| html! {
                            <figure class="gallery-item" key={*src}>
                                <img src={*src} alt={*caption} loading="lazy" />
                                <figcaption>{*caption}</figcaption>
                            </figure>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="contact" class="section contact">
                <h2 class="section__title">{"Contact Us"}</h2>
                <div class="contact__grid">
                    <div class="contact-item">
                        <h3>{"Visit"}</h3>
                        <p>{"12 Pearl Street, Al Khuwair"}</p>
                    </div>
                    <div class="contact-item">
                        <h3>{"Call"}</h3>
                        <p><a href="tel:+96824123456">{"+968 2412 3456"}</a></p>
                    </div>
                    <div class="contact-item">
                        <h3>{"Hours"}</h3>
                        <p>{"Sat–Thu 8:00–21:00, Fri 14:00–21:00"}</p>
                    </div>
                    <div class="info-item">
                        <h3>{"Insurance"}</h3>
                        <p>{"All major providers accepted; direct billing available."}</p>
                    </div>
                </div>
                <div class="emergency-box">
                    <h3>{"Dental Emergency?"}</h3>
                    <p>{"We keep same-day slots open every day."}</p>
                    <a class="emergency-phone" href="tel:+96899123456">{"+968 9912 3456"}</a>
                </div>
            </section>

            <footer class="footer">
                <p>{"© 2026 Ahlain Dental Hospital. All rights reserved."}</p>
            </footer>
        </main>
    }
}
