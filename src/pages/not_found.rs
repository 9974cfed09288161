use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="btn">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        font-family: system-ui, sans-serif;
                    }
                    .not-found .btn {
                        padding: 0.75rem 1.5rem;
                        border-radius: 8px;
                        background: #2563eb;
                        color: #ffffff;
                        text-decoration: none;
                    }
                "#}
            </style>
        </div>
    }
}
