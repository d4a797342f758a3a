use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, SsrMode, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::ConfigProvider;

use crate::theme::{provide_theme, Theme};
use crate::views::{
    booking_detail::BookingDetailPage, bookings::BookingsPage, not_found::NotFoundPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme(Theme::ROSE);

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/booking-web.css"/>

        <Title text="Appointments"/>

        <ConfigProvider>
            <Router>
                <main>
                    // Async mode: each page waits for its booking API read before
                    // responding, which also lets not-found pages set a 404 status.
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=BookingsPage ssr=SsrMode::Async/>
                        <Route
                            path=(StaticSegment("booking"), ParamSegment("id"))
                            view=BookingDetailPage
                            ssr=SsrMode::Async
                        />
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
