use log::{debug, warn};
use web_sys::{Element, HtmlFormElement, ScrollLogicalPosition};
use yew::prelude::*;

use crate::behavior::contact::{ContactMessage, ContactPanel};
use crate::behavior::page::PageAction;
use crate::config::{CALL_NUMBER, WHATSAPP_NUMBER};
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub panel: ContactPanel,
    pub on_action: Callback<PageAction>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form_ref = use_node_ref();
    let fields_ref = use_node_ref();
    let success_ref = use_node_ref();
    let first_render = use_mut_ref(|| true);

    // Bring whichever panel just became visible into view. Skipped on mount.
    {
        let fields_ref = fields_ref.clone();
        let success_ref = success_ref.clone();
        use_effect_with_deps(
            move |panel: &ContactPanel| {
                let mounting = std::mem::replace(&mut *first_render.borrow_mut(), false);
                if !mounting {
                    let (target, block) = match panel {
                        ContactPanel::Success => (&success_ref, ScrollLogicalPosition::Center),
                        ContactPanel::Fields => (&fields_ref, ScrollLogicalPosition::Start),
                    };
                    if let Some(element) = target.cast::<Element>() {
                        dom::smooth_scroll_into_view(&element, block);
                    }
                }
                || ()
            },
            props.panel,
        );
    }

    let onsubmit = {
        let on_action = props.on_action.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                warn!("Contact form is not mounted");
                return;
            };
            match ContactMessage::read(&form) {
                Ok(message) if message.is_blank() => debug!("Empty contact form submitted"),
                Ok(message) => debug!(
                    "Contact form submitted: {}",
                    serde_json::to_string(&message).unwrap_or_default()
                ),
                Err(e) => warn!("Could not read contact form: {}", e),
            }
            on_action.emit(PageAction::SubmitContact);
            form.reset();
        })
    };

    let onreset = {
        let on_action = props.on_action.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |_: MouseEvent| {
            on_action.emit(PageAction::ResetContact);
            if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                form.reset();
            }
        })
    };

    html! {
        <section id="contact" class="contact section">
            <div class="container contact__container">
                <div class="contact__info">
                    <h2 class="section__title">{"Get in Touch"}</h2>
                    <p>{"Tell us about your project and we will get back to you within a day."}</p>
                    <a class="contact__channel" href={format!("tel:+{}", CALL_NUMBER)}>
                        {format!("📞 +{}", CALL_NUMBER)}
                    </a>
                    <a class="contact__channel" href={format!("https://wa.me/{}", WHATSAPP_NUMBER)} target="_blank" rel="noopener">
                        {"💬 Chat on WhatsApp"}
                    </a>
                </div>

                <div class="contact__card">
                    <form id="contact-form" class="contact__form" ref={form_ref} {onsubmit}>
                        <div id="contact-form-fields" ref={fields_ref} style={props.panel.fields_display()}>
                            <input type="text" name="name" placeholder="Your name" />
                            <input type="email" name="email" placeholder="Email address" />
                            <input type="tel" name="phone" placeholder="Phone number" />
                            <textarea name="message" rows="5" placeholder="What do you need?"></textarea>
                            <button type="submit" class="btn">{"Send Message"}</button>
                        </div>
                    </form>

                    <div id="contact-success" class="contact__success" ref={success_ref} style={props.panel.success_display()}>
                        <h3>{"Thank you!"}</h3>
                        <p>{"Your message has been received. We will contact you shortly."}</p>
                        <button id="contact-reset-btn" type="button" class="btn btn--outline" onclick={onreset}>
                            {"Send another message"}
                        </button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .contact__container {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 3rem;
                    }
                    .contact__channel {
                        display: block;
                        margin-top: 1rem;
                        color: #2563eb;
                        text-decoration: none;
                    }
                    .contact__card {
                        padding: 2rem;
                        border-radius: 16px;
                        background: #ffffff;
                        box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08);
                    }
                    .contact__form input,
                    .contact__form textarea {
                        width: 100%;
                        margin-bottom: 1rem;
                        padding: 0.75rem 1rem;
                        border: 1px solid #cbd5e1;
                        border-radius: 8px;
                        font: inherit;
                        box-sizing: border-box;
                    }
                    .contact__success {
                        text-align: center;
                    }
                "#}
            </style>
        </section>
    }
}
