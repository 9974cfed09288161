use yew::prelude::*;

use crate::behavior::nav::MenuState;
use crate::behavior::page::PageAction;
use crate::behavior::scroll::HeaderState;
use crate::content::NAV_LINKS;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub menu: MenuState,
    pub header: HeaderState,
    /// Hrefs of the nav links pointing at the section in view.
    pub active_links: Vec<String>,
    pub on_action: Callback<PageAction>,
}

/// Nav link clicks are handled by the page click delegate, which closes the
/// menu and scrolls to the section.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { menu, header, active_links, on_action } = props;

    let toggle_menu = {
        let on_action = on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_action.emit(PageAction::ToggleMenu);
        })
    };

    let is_active = |href: &str| active_links.iter().any(|active| active == href);

    html! {
        <header id="header" class={classes!("header", header.class())}>
            <nav class="nav container">
                <a href="#home" class="nav__logo">{"Nepal Web Studio"}</a>

                <ul id="nav-menu" class={classes!("nav__menu", menu.menu_class())}>
                    {
                        NAV_LINKS.iter().map(|link| html! {
                            <li class="nav__item">
                                <a
                                    href={link.href}
                                    class={classes!("nav__link", is_active(link.href).then_some("active-link"))}
                                >
                                    {link.label}
                                </a>
                            </li>
                        }).collect::<Html>()
                    }
                </ul>

                <button
                    id="nav-toggle"
                    class={classes!("nav__toggle", menu.toggle_class())}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
            <style>
                {r#"
                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 100;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .header.scrolled {
                        background: #ffffff;
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                    }
                    .nav {
                        height: 70px;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav__logo {
                        font-weight: 700;
                        font-size: 1.25rem;
                        color: #0f172a;
                        text-decoration: none;
                    }
                    .nav__menu {
                        display: flex;
                        gap: 2rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav__link {
                        color: #334155;
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .nav__link.active-link {
                        color: #2563eb;
                        border-bottom: 2px solid #2563eb;
                    }
                    .nav__toggle {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                        flex-direction: column;
                        gap: 5px;
                    }
                    .nav__toggle span {
                        width: 24px;
                        height: 2px;
                        background: #0f172a;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .nav__toggle.active span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }
                    .nav__toggle.active span:nth-child(2) {
                        opacity: 0;
                    }
                    .nav__toggle.active span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }
                    @media (max-width: 768px) {
                        .nav__toggle {
                            display: flex;
                        }
                        .nav__menu {
                            position: fixed;
                            top: 70px;
                            right: -100%;
                            width: 70%;
                            height: 100vh;
                            flex-direction: column;
                            padding: 2rem;
                            background: #ffffff;
                            box-shadow: -4px 0 12px rgba(0, 0, 0, 0.08);
                            transition: right 0.3s ease;
                        }
                        .nav__menu.show-menu {
                            right: 0;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
