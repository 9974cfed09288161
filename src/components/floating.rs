use yew::prelude::*;

use crate::behavior::packages::whatsapp_url;
use crate::config::{CALL_NUMBER, WHATSAPP_NUMBER};

#[function_component(FloatingContact)]
pub fn floating_contact() -> Html {
    html! {
        <div class="floating-contact">
            <a
                class="floating-contact__btn floating-contact__btn--whatsapp"
                href={whatsapp_url(WHATSAPP_NUMBER, None)}
                target="_blank"
                rel="noopener"
                aria-label="Chat on WhatsApp"
            >
                {"💬"}
            </a>
            <a
                class="floating-contact__btn floating-contact__btn--call"
                href={format!("tel:+{}", CALL_NUMBER)}
                aria-label="Call us"
            >
                {"📞"}
            </a>
            <style>
                {r#"
                    .floating-contact {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 90;
                    }
                    .floating-contact__btn {
                        width: 52px;
                        height: 52px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        font-size: 1.4rem;
                        text-decoration: none;
                        box-shadow: 0 6px 16px rgba(0, 0, 0, 0.2);
                    }
                    .floating-contact__btn--whatsapp {
                        background: #25d366;
                    }
                    .floating-contact__btn--call {
                        background: #2563eb;
                    }
                "#}
            </style>
        </div>
    }
}
