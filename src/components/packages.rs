use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::behavior::packages::{hover_transform, shows_toggle, CardState};
use crate::content::PACKAGES;
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct PackageCardProps {
    pub index: usize,
    pub state: CardState,
}

/// Toggle and order clicks are picked up by the page click delegate through
/// the `package__toggle` / `btn--package` classes and `data-card`.
#[function_component(PackageCard)]
pub fn package_card(props: &PackageCardProps) -> Html {
    let card_ref = use_node_ref();
    let Some(package) = PACKAGES.get(props.index) else {
        return html! {};
    };

    let hover = |pointer_inside: bool| {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card_ref.cast::<Element>() {
                if let Err(e) = dom::set_styles(&card, &[("transform", hover_transform(pointer_inside))]) {
                    warn!("Card hover failed: {}", e);
                }
            }
        })
    };

    let toggle_style = (!shows_toggle(package.hidden_features())).then_some("display: none;");

    html! {
        <div
            ref={card_ref.clone()}
            class={classes!(
                "package__card",
                package.featured.then_some("package__card--featured"),
                props.state.class()
            )}
            data-card={props.index.to_string()}
            onmouseenter={hover(true)}
            onmouseleave={hover(false)}
        >
            if package.featured {
                <span class="package__badge">{"Most Popular"}</span>
            }
            <h3 class="package__name">{package.name}</h3>
            <p class="package__tagline">{package.tagline}</p>
            <div class="package__price">
                <span class="package__currency">{package.currency}</span>
                <span class="package__amount">{package.amount}</span>
                <span class="package__period">{format!("/ {}", package.period)}</span>
            </div>
            <ul class="package__features">
                {
                    package.features.iter().enumerate().map(|(i, feature)| html! {
                        <li class={classes!((i >= package.visible).then_some("feature-hidden"))}>
                            {*feature}
                        </li>
                    }).collect::<Html>()
                }
            </ul>
            <button class="package__toggle" type="button" style={toggle_style}>
                <span>{props.state.toggle_label()}</span>
                <svg class="package__toggle-icon" width="12" height="12" viewBox="0 0 12 12">
                    <path d="M2 4l4 4 4-4" stroke="currentColor" fill="none" stroke-width="2" />
                </svg>
            </button>
            <a href="#" class="btn btn--package">{"Order on WhatsApp"}</a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PackagesProps {
    pub cards: Vec<CardState>,
}

#[function_component(Packages)]
pub fn packages(props: &PackagesProps) -> Html {
    html! {
        <section id="packages" class="packages section">
            <div class="container">
                <h2 class="section__title">{"Our Packages"}</h2>
                <p class="section__subtitle">{"Pick a package and order it straight from WhatsApp."}</p>
                <div class="packages__grid">
                    {
                        (0..PACKAGES.len()).map(|index| html! {
                            <PackageCard
                                key={index}
                                index={index}
                                state={props.cards.get(index).copied().unwrap_or_default()}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .packages__grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .package__card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        padding: 2rem;
                        border-radius: 16px;
                        background: #ffffff;
                        box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08);
                    }
                    .package__card--featured {
                        border: 2px solid #2563eb;
                    }
                    .package__badge {
                        position: absolute;
                        top: -12px;
                        right: 1.5rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        background: #2563eb;
                        color: #ffffff;
                        font-size: 0.75rem;
                    }
                    .package__price {
                        display: flex;
                        align-items: baseline;
                        gap: 0.35rem;
                        margin: 1rem 0;
                    }
                    .package__amount {
                        font-size: 2rem;
                        font-weight: 700;
                    }
                    .package__period {
                        color: #64748b;
                    }
                    .package__features {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 1rem;
                        flex: 1;
                    }
                    .package__features li {
                        padding: 0.4rem 0;
                    }
                    .package__features li.feature-hidden {
                        display: none;
                    }
                    .package__card.expanded .package__features li.feature-hidden {
                        display: list-item;
                    }
                    .package__features li::before {
                        content: "\2713";
                        color: #16a34a;
                        margin-right: 0.5rem;
                    }
                    .package__toggle {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.4rem;
                        margin-bottom: 1rem;
                        background: none;
                        border: none;
                        color: #2563eb;
                        cursor: pointer;
                    }
                    .package__card.expanded .package__toggle-icon {
                        transform: rotate(180deg);
                    }
                    .btn--package {
                        text-align: center;
                        background: #25d366;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render_card(index: usize) -> String {
        ServerRenderer::<PackageCard>::with_props(move || PackageCardProps {
            index,
            state: CardState::Collapsed,
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn feature_items_contain_only_feature_text() {
        let html = render_card(1).await;
        for feature in PACKAGES[1].features {
            assert!(html.contains(&format!(">{}</li>", feature)), "{}", html);
        }
        assert!(!html.contains('\u{2713}'));
    }

    #[tokio::test]
    async fn toggle_hidden_only_on_cards_without_folded_features() {
        let plain = render_card(0).await;
        assert!(plain.contains("display: none;"));

        let folded = render_card(1).await;
        assert!(!folded.contains("display: none;"));
        assert!(folded.contains("See More"));
        assert!(folded.contains(r#"data-card="1""#));
    }
}
