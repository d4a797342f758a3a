use leptos::prelude::*;
use leptos_meta::Title;

use crate::theme::use_theme;

/// Marks the server response as 404. No-op in the browser.
pub fn set_not_found_status() {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let theme = use_theme();
    set_not_found_status();

    view! {
        <Title text="Page not found"/>
        <div class=theme.detail_page data-theme=theme.name>
            <div class=theme.detail_card>
                <h1 class=theme.heading>"Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist or may have been moved."</p>
                <div class="not-found-actions">
                    <a href="/" class=theme.link>"Go Home"</a>
                    <button
                        class="not-found-back"
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                if let Ok(history) = window.history() {
                                    let _ = history.back();
                                }
                            }
                        }
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}
