use chrono::Datelike;
use log::{info, warn};
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::behavior::delegate::ControlDelegate;
use crate::behavior::page::{PageAction, PageState};
use crate::behavior::reveal::{RevealObserver, REVEAL_TARGETS};
use crate::behavior::scroll::read_section_bands;
use crate::components::contact::Contact;
use crate::components::floating::FloatingContact;
use crate::components::header::Header;
use crate::components::packages::Packages;
use crate::content::{NAV_LINKS, PACKAGES, REASONS, SERVICES};
use crate::dom;

/// Measures the page and feeds the sticky header and scroll-spy.
fn report_scroll(on_action: &Callback<PageAction>) {
    match (dom::scroll_y(), read_section_bands()) {
        (Ok(y), Ok(bands)) => on_action.emit(PageAction::Scrolled { y, bands }),
        (Err(e), _) | (_, Err(e)) => warn!("Could not measure scroll position: {}", e),
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(|| PageState::with_cards(PACKAGES.len()));
    let on_action = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: PageAction| dispatcher.dispatch(action))
    };

    // Page-wide listeners live exactly as long as the page is mounted.
    {
        let on_action = on_action.clone();
        use_effect_with_deps(
            move |_| {
                let delegate = ControlDelegate::attach(on_action.clone())
                    .map_err(|e| warn!("Click delegate unavailable: {}", e))
                    .ok();
                let reveal = RevealObserver::watch(REVEAL_TARGETS)
                    .map_err(|e| warn!("Fade-in disabled: {}", e))
                    .ok();
                // Initial check, the page may load already scrolled.
                report_scroll(&on_action);
                info!("Landing page interactions ready");

                move || {
                    drop(delegate);
                    drop(reveal);
                }
            },
            (),
        );
    }

    {
        let on_action = on_action.clone();
        use_event_with_window("scroll", move |_: Event| report_scroll(&on_action));
    }

    // Sections without a nav link simply have nothing to highlight.
    let active_links: Vec<String> = NAV_LINKS
        .iter()
        .filter(|link| state.is_link_active(link.href))
        .map(|link| link.href.to_string())
        .collect();

    let year = chrono::Local::now().year();

    html! {
        <div class="landing">
            <Header
                menu={state.menu}
                header={state.header}
                active_links={active_links}
                on_action={on_action.clone()}
            />

            <main>
                <section id="home" class="hero section">
                    <div class="container hero__container">
                        <h1 class="hero__title">{"Websites that grow your business"}</h1>
                        <p class="hero__text">
                            {"We design, build and look after websites for shops, clinics, schools and startups across Nepal."}
                        </p>
                        <div class="hero__actions">
                            <a href="#packages" class="btn">{"View Packages"}</a>
                            <a href="#contact" class="btn btn--outline">{"Contact Us"}</a>
                        </div>
                    </div>
                </section>

                <section id="services" class="services section">
                    <div class="container">
                        <h2 class="section__title">{"What We Do"}</h2>
                        <div class="services__grid">
                            {
                                SERVICES.iter().map(|service| html! {
                                    <div class="service__card">
                                        <span class="service__icon">{service.icon}</span>
                                        <h3>{service.title}</h3>
                                        <p>{service.description}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </section>

                <Packages cards={state.cards.clone()} />

                <section id="why-choose" class="why-choose section">
                    <div class="container">
                        <h2 class="section__title">{"Why Choose Us"}</h2>
                        <div class="why-choose__grid">
                            {
                                REASONS.iter().map(|reason| html! {
                                    <div class="why-choose__card">
                                        <h3>{reason.title}</h3>
                                        <p>{reason.description}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </section>

                <Contact panel={state.contact} on_action={on_action.clone()} />
            </main>

            <footer class="footer">
                <div class="container">
                    <p>{format!("© {} Nepal Web Studio. All rights reserved.", year)}</p>
                </div>
            </footer>

            <FloatingContact />

            <style>
                {r#"
                    .landing {
                        font-family: "Inter", system-ui, sans-serif;
                        color: #0f172a;
                    }
                    .container {
                        max-width: 1120px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .section {
                        padding: 6rem 0 4rem;
                    }
                    .section__title {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                        text-align: center;
                    }
                    .section__subtitle {
                        text-align: center;
                        color: #64748b;
                        margin-bottom: 3rem;
                    }
                    .btn {
                        display: inline-block;
                        padding: 0.85rem 1.75rem;
                        border: none;
                        border-radius: 8px;
                        background: #2563eb;
                        color: #ffffff;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .btn--outline {
                        background: transparent;
                        color: #2563eb;
                        border: 2px solid #2563eb;
                    }
                    .hero {
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        background: linear-gradient(135deg, #eff6ff 0%, #ffffff 100%);
                    }
                    .hero__title {
                        font-size: clamp(2.2rem, 5vw, 3.5rem);
                        max-width: 14ch;
                    }
                    .hero__text {
                        max-width: 40rem;
                        color: #475569;
                        font-size: 1.125rem;
                    }
                    .hero__actions {
                        display: flex;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .services__grid,
                    .why-choose__grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .service__card,
                    .why-choose__card {
                        padding: 2rem;
                        border-radius: 16px;
                        background: #ffffff;
                        box-shadow: 0 8px 24px rgba(15, 23, 42, 0.06);
                    }
                    .service__icon {
                        font-size: 2rem;
                    }
                    .footer {
                        padding: 2rem 0;
                        text-align: center;
                        background: #0f172a;
                        color: #cbd5e1;
                    }
                "#}
            </style>
        </div>
    }
}
