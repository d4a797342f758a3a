use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

#[component]
pub fn ErrorView(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="notice">
            <MessageBar intent=MessageBarIntent::Error>
                {message.unwrap_or_else(|| GENERIC_ERROR.to_string())}
            </MessageBar>
        </div>
    }
}

#[component]
pub fn SuccessView(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="notice">
            <MessageBar intent=MessageBarIntent::Success>
                {message}
            </MessageBar>
        </div>
    }
}
