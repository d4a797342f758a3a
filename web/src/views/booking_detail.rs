use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use shared_types::Booking;

use crate::components::{error::ErrorView, loading::LoadingView};
use crate::server::get_booking;
use crate::theme::use_theme;
use crate::views::not_found::set_not_found_status;

pub const UNAVAILABLE_MESSAGE: &str = "We couldn't load this booking right now.";

#[component]
pub fn BookingDetailPage() -> impl IntoView {
    let theme = use_theme();
    let params = use_params_map();

    let booking_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .map(|id| id.trim().to_string())
            .unwrap_or_default()
    });

    let booking = Resource::new(
        move || booking_id.get(),
        move |id| async move {
            if id.is_empty() {
                Ok(None)
            } else {
                get_booking(id).await
            }
        },
    );

    view! {
        <Title text="Booking Details"/>
        <div class=theme.detail_page data-theme=theme.name>
            <a href="/" class=theme.back_link>"Back to Home"</a>
            <div class=theme.detail_card>
                <h1 class=theme.heading>"Booking Details"</h1>
                <Suspense fallback=|| view! { <LoadingView message="Loading booking..." /> }>
                    {move || booking.get().map(|result| view! { <BookingLookup result /> })}
                </Suspense>
            </div>
        </div>
    }
}

/// Renders whatever the detail read produced: the booking, a not-found
/// state, or a notice when the API could not be read.
#[component]
pub fn BookingLookup(result: Result<Option<Booking>, ServerFnError>) -> impl IntoView {
    match result {
        Ok(Some(booking)) => view! { <BookingSummary booking /> }.into_any(),
        Ok(None) => view! { <BookingNotFound /> }.into_any(),
        Err(e) => {
            leptos::logging::error!("Failed to load booking: {}", e);
            view! { <ErrorView message=UNAVAILABLE_MESSAGE /> }.into_any()
        }
    }
}

#[component]
pub fn BookingSummary(booking: Booking) -> impl IntoView {
    view! {
        <p class="detail-summary">
            "This Booking is with "
            <strong>{booking.doctor_name}</strong>
            " for "
            <strong>{booking.service}</strong>
            " and it ends on "
            <strong>{booking.end_time}</strong>
            "."
        </p>
    }
}

#[component]
fn BookingNotFound() -> impl IntoView {
    set_not_found_status();

    view! {
        <div class="detail-not-found">
            <p class="detail-not-found-title">"Booking not found"</p>
            <p>"This booking doesn't exist or is no longer available."</p>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use shared_types::BookingId;

    #[test]
    fn summary_renders_fields_verbatim() {
        let booking = Booking {
            id: BookingId::new("42"),
            service: "Root canal".to_string(),
            doctor_name: "Dr. Molar".to_string(),
            start_time: "11:00".to_string(),
            end_time: "12:15".to_string(),
            date: "2024-04-02".to_string(),
        };

        let html = Owner::new().with(|| view! { <BookingSummary booking /> }.to_html());

        assert!(html.contains("<strong>Dr. Molar</strong>"));
        assert!(html.contains("<strong>Root canal</strong>"));
        assert!(html.contains("<strong>12:15</strong>"));
    }

    #[test]
    fn missing_booking_renders_not_found_with_404() {
        let response = leptos_axum::ResponseOptions::default();

        let html = Owner::new().with(|| {
            provide_context(response.clone());
            view! { <BookingLookup result=Ok(None) /> }.to_html()
        });

        assert!(html.contains("Booking not found"));
        assert_eq!(response.0.read().status, Some(http::StatusCode::NOT_FOUND));
    }

    #[test]
    fn found_booking_keeps_default_status() {
        let response = leptos_axum::ResponseOptions::default();
        let booking = Booking {
            id: BookingId::new("5"),
            service: "Checkup".to_string(),
            doctor_name: "Dr. C".to_string(),
            start_time: "08:00".to_string(),
            end_time: "08:20".to_string(),
            date: "2024-05-01".to_string(),
        };

        let html = Owner::new().with(|| {
            provide_context(response.clone());
            view! { <BookingLookup result=Ok(Some(booking)) /> }.to_html()
        });

        assert!(html.contains("<strong>Dr. C</strong>"));
        assert!(!html.contains("Booking not found"));
        assert_eq!(response.0.read().status, None);
    }

    #[test]
    fn failed_read_renders_unavailable_notice() {
        let html = Owner::new().with(|| {
            leptos_meta::provide_meta_context();
            view! {
                <BookingLookup result=Err(ServerFnError::new("Booking API returned status 500")) />
            }
            .to_html()
        });

        assert!(html.contains("load this booking right now."));
        assert!(!html.contains("<strong>"));
        assert!(!html.contains("Booking not found"));
    }
}
