use leptos::prelude::*;
use shared_types::{Booking, BookingId};

use crate::theme::use_theme;
use crate::utils::date::{format_booking_date, format_time_range};

pub fn booking_href(id: &BookingId) -> String {
    format!("/booking/{}", urlencoding::encode(id.as_str()))
}

#[component]
pub fn BookingList(bookings: Vec<Booking>) -> impl IntoView {
    let theme = use_theme();

    if bookings.is_empty() {
        return view! { <p class=theme.empty>"No bookings yet."</p> }.into_any();
    }

    view! {
        <ul class=theme.list>
            {bookings
                .into_iter()
                .map(|booking| view! { <BookingCard booking /> })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
pub fn BookingCard(booking: Booking) -> impl IntoView {
    let theme = use_theme();
    let href = booking_href(&booking.id);
    let date = format!("Date: {}", format_booking_date(&booking.date));
    let time = format!(
        "Time: {}",
        format_time_range(&booking.start_time, &booking.end_time)
    );

    view! {
        <li class=theme.list_item>
            <a href=href class=theme.link>
                <div class=theme.item_title>{booking.service}</div>
                <div class="item-doctor">{format!("Doctor: {}", booking.doctor_name)}</div>
                <div class=theme.item_meta>{date}</div>
                <div class=theme.item_meta>{time}</div>
            </a>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaning() -> Booking {
        Booking {
            id: BookingId::new("1"),
            service: "Cleaning".to_string(),
            doctor_name: "Dr. A".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:30".to_string(),
            date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn links_to_detail_page() {
        assert_eq!(booking_href(&cleaning().id), "/booking/1");
        assert_eq!(booking_href(&BookingId::new("42")), "/booking/42");
        assert_eq!(booking_href(&BookingId::new("a b/c")), "/booking/a%20b%2Fc");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn card_renders_formatted_fields() {
        use leptos::tachys::view::RenderHtml;

        let html = Owner::new().with(|| view! { <BookingCard booking=cleaning() /> }.to_html());

        assert!(html.contains("href=\"/booking/1\""));
        assert!(html.contains("Cleaning"));
        assert!(html.contains("Doctor: Dr. A"));
        assert!(html.contains("Date: January 1, 2024"));
        assert!(html.contains("Time: 09:00 - 09:30"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn empty_collection_renders_no_items() {
        use leptos::tachys::view::RenderHtml;

        let html = Owner::new().with(|| view! { <BookingList bookings=vec![] /> }.to_html());

        assert!(html.contains("No bookings yet."));
        assert!(!html.contains("<li"));
    }
}
