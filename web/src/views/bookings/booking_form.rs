use leptos::prelude::*;
use shared_types::NewBooking;

use crate::components::error::{ErrorView, SuccessView};
use crate::server::{create_booking, SubmitOutcome};
use crate::theme::use_theme;

pub const CREATED_MESSAGE: &str = "Booking created successfully!";
pub const REJECTED_FALLBACK: &str = "Error inserting booking";
pub const NETWORK_ERROR: &str = "Network error";

/// Lifecycle of the creation form. At most one message exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl FormStatus {
    /// Moves to `Submitting` and drops any previous message. Returns `false`
    /// when a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = FormStatus::Submitting;
        true
    }

    pub fn settle(result: Result<SubmitOutcome, ServerFnError>) -> Self {
        match result {
            Ok(SubmitOutcome::Created { .. }) => FormStatus::Succeeded(CREATED_MESSAGE.to_string()),
            Ok(SubmitOutcome::Rejected { message }) => FormStatus::Failed(
                message.unwrap_or_else(|| REJECTED_FALLBACK.to_string()),
            ),
            Err(_) => FormStatus::Failed(NETWORK_ERROR.to_string()),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }

    pub fn is_created(&self) -> bool {
        matches!(self, FormStatus::Succeeded(_))
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            FormStatus::Succeeded(message) => Some(message),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Final status of a submission. `on_created` runs only when the API created
/// the booking, so the list is re-read once per new booking.
pub fn settle_submission(
    result: Result<SubmitOutcome, ServerFnError>,
    on_created: impl FnOnce(),
) -> FormStatus {
    let status = FormStatus::settle(result);
    if status.is_created() {
        on_created();
    }
    status
}

#[derive(Clone, Copy)]
struct FormFields {
    service: RwSignal<String>,
    doctor_name: RwSignal<String>,
    start_time: RwSignal<String>,
    end_time: RwSignal<String>,
    date: RwSignal<String>,
}

impl FormFields {
    fn new() -> Self {
        Self {
            service: RwSignal::new(String::new()),
            doctor_name: RwSignal::new(String::new()),
            start_time: RwSignal::new(String::new()),
            end_time: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> NewBooking {
        NewBooking {
            service: self.service.get_untracked(),
            doctor_name: self.doctor_name.get_untracked(),
            start_time: self.start_time.get_untracked(),
            end_time: self.end_time.get_untracked(),
            date: self.date.get_untracked(),
        }
    }
}

#[component]
pub fn BookingForm(on_created: impl Fn() + 'static + Copy + Send + Sync) -> impl IntoView {
    let theme = use_theme();
    let fields = FormFields::new();
    let status = RwSignal::new(FormStatus::Idle);

    let submit = Action::new(move |booking: &NewBooking| {
        let booking = booking.clone();
        async move {
            let result = create_booking(booking).await;
            if let Err(e) = &result {
                leptos::logging::error!("Failed to submit booking: {}", e);
            }

            status.set(settle_submission(result, on_created));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.try_update(FormStatus::begin).unwrap_or(false) {
            submit.dispatch(fields.snapshot());
        }
    };

    let is_submitting = Memo::new(move |_| status.with(FormStatus::is_submitting));

    view! {
        {move || {
            status.with(|status| {
                if let Some(message) = status.error_message() {
                    view! { <ErrorView message=message.to_string() /> }.into_any()
                } else if let Some(message) = status.success_message() {
                    view! { <SuccessView message=message.to_string() /> }.into_any()
                } else {
                    view! {}.into_any()
                }
            })
        }}
        <form class=theme.form on:submit=on_submit>
            <FormField label="Service:" name="service" input_type="text" value=fields.service />
            <FormField label="Doctor Name:" name="doctor_name" input_type="text" value=fields.doctor_name />
            <FormField label="Start Time:" name="start_time" input_type="time" value=fields.start_time />
            <FormField label="End Time:" name="end_time" input_type="time" value=fields.end_time />
            <FormField label="Date:" name="date" input_type="date" value=fields.date />

            <button
                type="submit"
                class=theme.submit
                disabled=move || is_submitting.get()
            >
                {move || if is_submitting.get() { "Submitting..." } else { "Submit" }}
            </button>
        </form>
    }
}

#[component]
fn FormField(
    label: &'static str,
    name: &'static str,
    input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <label class=theme.field>
            <span class=theme.label>{label}</span>
            <input
                type=input_type
                name=name
                class=theme.input
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
