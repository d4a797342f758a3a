pub mod booking_form;
pub mod booking_list;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::loading::LoadingView;
use crate::server::list_bookings;
use crate::theme::use_theme;

use booking_form::BookingForm;
use booking_list::BookingList;

#[component]
pub fn BookingsPage() -> impl IntoView {
    let theme = use_theme();

    // Refetched after every successful create so the new booking shows up
    let bookings = Resource::new(
        || (),
        |_| async move {
            list_bookings().await.unwrap_or_else(|e| {
                leptos::logging::error!("Failed to load bookings: {}", e);
                Vec::new()
            })
        },
    );

    view! {
        <Title text="Book an appointment"/>
        <div class=theme.page data-theme=theme.name>
            <section class=theme.panel>
                <h1 class=theme.heading>"Book an appointment"</h1>
                <BookingForm on_created=move || bookings.refetch() />
            </section>

            <section class=theme.panel>
                <h1 class=theme.heading>"Bookings"</h1>
                <Transition fallback=|| view! { <LoadingView message="Loading bookings..." /> }>
                    {move || bookings.get().map(|bookings| view! { <BookingList bookings /> })}
                </Transition>
            </section>
        </div>
    }
}
