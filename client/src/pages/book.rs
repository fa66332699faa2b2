//! Appointment booking page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `BookingState` signal. Calendar clicks and retries turn into slot
//! requests that run in the background and report back through
//! `apply_slots`; submission goes through `begin_submit`/`finish_submit`.
//! The state type decides what is stale or invalid; this page only wires
//! events to it and renders the result.

#[cfg(test)]
#[path = "book_test.rs"]
mod book_test;

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::calendar_grid::CalendarGrid;
use crate::components::slot_picker::SlotPicker;
use crate::net::types::SERVICE_OPTIONS;
use crate::state::booking::{BookingField, BookingState, SlotLoad, SlotRequest};
use crate::util::calendar::{display_date, today};
use crate::util::validation::MESSAGE_MAX_CHARS;

fn field_value(state: &BookingState, field: BookingField) -> String {
    let form = &state.form;
    match field {
        BookingField::Name => form.name.clone(),
        BookingField::Email => form.email.clone(),
        BookingField::Phone => form.phone.clone(),
        BookingField::Service => form.service.clone(),
        BookingField::Message => form.message.clone(),
    }
}

fn field_error(state: &BookingState, field: BookingField) -> Option<String> {
    let errors = &state.errors;
    match field {
        BookingField::Name => errors.name.clone(),
        BookingField::Email => errors.email.clone(),
        BookingField::Phone => errors.phone.clone(),
        BookingField::Service => errors.service.clone(),
        BookingField::Message => errors.message.clone(),
    }
}

/// "Thursday, March 7, 2030 at 9:30 AM" for the current date/slot choice.
fn selection_summary(state: &BookingState) -> Option<String> {
    let date = state.selected_date?;
    let Some(time) = state.selected_slot.as_deref() else {
        return Some(display_date(date));
    };
    let label = match &state.slots {
        SlotLoad::Loaded(slots) => slots.iter().find(|s| s.time == time).map(|s| s.label.as_str()),
        _ => None,
    };
    Some(format!("{} at {}", display_date(date), label.unwrap_or(time)))
}

fn fetch_slots(booking: RwSignal<BookingState>, request: SlotRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::available_slots(request.date)
            .await
            .map_err(|e| e.to_string());
        let mut applied = false;
        booking.update(|b| applied = b.apply_slots(request, result));
        if !applied {
            leptos::logging::log!("dropped stale slot response for {}", request.date);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (booking, request);
    }
}

#[component]
fn TextField(
    booking: RwSignal<BookingState>,
    field: BookingField,
    label: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
) -> impl IntoView {
    let error = move || booking.with(|b| field_error(b, field));
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <input
                class="form__input"
                type=input_type
                autocomplete=autocomplete
                aria-invalid=move || if error().is_some() { "true" } else { "false" }
                prop:value=move || booking.with(|b| field_value(b, field))
                on:input=move |ev| booking.update(|b| b.set_field(field, event_target_value(&ev)))
            />
            {move || error().map(|e| view! { <span class="form__error">{e}</span> })}
        </label>
    }
}

#[component]
pub fn BookPage() -> impl IntoView {
    // SSR renders with the host clock; the browser's own date replaces it
    // once mounted so the grid's disabled days follow the visitor's timezone.
    let current_day = RwSignal::new(today());
    let booking = RwSignal::new(BookingState::new(current_day.get_untracked()));
    let refresh_day = move || {
        let now = today();
        if current_day.get_untracked() != now {
            current_day.set(now);
        }
        booking.update(|b| b.roll_to(now));
        now
    };
    // Unconditional set: hydration kept the server's static `disabled` flags.
    Effect::new(move || {
        let now = today();
        current_day.set(now);
        booking.update(|b| b.roll_to(now));
    });

    let on_date = Callback::new(move |date: NaiveDate| {
        let now = refresh_day();
        let mut request = None;
        booking.update(|b| request = b.select_date(date, now));
        if let Some(request) = request {
            fetch_slots(booking, request);
        }
    });
    let on_slot = Callback::new(move |time: String| booking.update(|b| b.select_slot(&time)));
    let on_retry = Callback::new(move |()| {
        let mut request = None;
        booking.update(|b| request = b.retry_slots());
        if let Some(request) = request {
            fetch_slots(booking, request);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let now = refresh_day();
        let mut payload = None;
        booking.update(|b| payload = b.begin_submit(now));
        let Some(payload) = payload else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_appointment(&payload)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string());
            if result.is_ok() {
                leptos::logging::log!("appointment requested for {}", payload.preferred_date);
            }
            booking.update(|b| b.finish_submit(result, today()));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    let confirmed = move || booking.with(|b| b.confirmed);
    let service_error = move || booking.with(|b| field_error(b, BookingField::Service));
    let message_error = move || booking.with(|b| field_error(b, BookingField::Message));
    let schedule_error = move || booking.with(|b| b.errors.date.clone().or_else(|| b.errors.slot.clone()));

    view! {
        <section class="page book">
            <h1>"Book an appointment"</h1>
            <Show
                when=move || !confirmed()
                fallback=move || view! {
                    <div class="book__confirmation" role="status">
                        <h2>"Appointment requested"</h2>
                        <p>"Thank you. We will contact you shortly to confirm your visit."</p>
                        <button
                            type="button"
                            class="btn btn--primary"
                            on:click=move |_| booking.update(|b| b.book_another(refresh_day()))
                        >
                            "Book another"
                        </button>
                    </div>
                }
            >
                <form class="book__form" novalidate=true on:submit=on_submit>
                    <div class="book__step">
                        <h2>"1. Choose a date"</h2>
                        <CalendarGrid booking=booking today=current_day on_select=on_date />
                    </div>
                    <div class="book__step">
                        <h2>"2. Choose a time"</h2>
                        <SlotPicker booking=booking on_select=on_slot on_retry=on_retry />
                        {move || schedule_error().map(|e| view! { <p class="form__error">{e}</p> })}
                        {move || booking.with(selection_summary).map(|s| view! {
                            <p class="book__summary">"Selected: " {s}</p>
                        })}
                    </div>
                    <div class="book__step">
                        <h2>"3. Your details"</h2>
                        <TextField booking=booking field=BookingField::Name label="Full name" input_type="text" autocomplete="name" />
                        <TextField booking=booking field=BookingField::Email label="Email" input_type="email" autocomplete="email" />
                        <TextField booking=booking field=BookingField::Phone label="Phone" input_type="tel" autocomplete="tel" />
                        <label class="form__field">
                            <span class="form__label">"Service"</span>
                            <select
                                class="form__input"
                                prop:value=move || booking.with(|b| b.form.service.clone())
                                on:change=move |ev| booking.update(|b| b.set_field(BookingField::Service, event_target_value(&ev)))
                            >
                                <option value="">"Select a service"</option>
                                {SERVICE_OPTIONS
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                            {move || service_error().map(|e| view! { <span class="form__error">{e}</span> })}
                        </label>
                        <label class="form__field">
                            <span class="form__label">"Message (optional)"</span>
                            <textarea
                                class="form__input"
                                rows="4"
                                prop:value=move || booking.with(|b| b.form.message.clone())
                                on:input=move |ev| booking.update(|b| b.set_field(BookingField::Message, event_target_value(&ev)))
                            ></textarea>
                            <span class="form__counter">
                                {move || format!("{}/{MESSAGE_MAX_CHARS}", booking.with(|b| b.form.message.chars().count()))}
                            </span>
                            {move || message_error().map(|e| view! { <span class="form__error">{e}</span> })}
                        </label>
                    </div>
                    {move || booking.with(|b| b.submit_error.clone()).map(|e| view! {
                        <p class="form__banner form__banner--error" role="alert">{e}</p>
                    })}
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || booking.with(|b| b.submitting)
                    >
                        {move || if booking.with(|b| b.submitting) { "Booking..." } else { "Request appointment" }}
                    </button>
                </form>
            </Show>
        </section>
    }
}
