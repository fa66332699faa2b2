//! Time-slot list for the selected date.

#[cfg(test)]
#[path = "slot_picker_test.rs"]
mod slot_picker_test;

use leptos::prelude::*;

use crate::net::types::TimeSlot;
use crate::state::booking::{BookingState, SlotLoad};

const LOADING_HINT: &str = "Loading available times...";
const EMPTY_HINT: &str = "No availability on this date. Please choose another day.";
const PICK_DATE_HINT: &str = "Choose a date to see available times.";

/// Informational text for non-list states; `None` when slot buttons render.
fn slot_hint(load: &SlotLoad) -> Option<&'static str> {
    match load {
        SlotLoad::Idle => Some(PICK_DATE_HINT),
        SlotLoad::Loading => Some(LOADING_HINT),
        SlotLoad::Loaded(slots) if slots.is_empty() => Some(EMPTY_HINT),
        SlotLoad::Loaded(_) | SlotLoad::Failed(_) => None,
    }
}

#[component]
pub fn SlotPicker(
    booking: RwSignal<BookingState>,
    on_select: Callback<String>,
    on_retry: Callback<()>,
) -> impl IntoView {
    move || {
        let (load, selected) = booking.with(|b| (b.slots.clone(), b.selected_slot.clone()));
        if let Some(hint) = slot_hint(&load) {
            return view! { <p class="slots__hint">{hint}</p> }.into_any();
        }
        match load {
            SlotLoad::Failed(message) => view! {
                <div class="slots__error" role="alert">
                    <p>{message}</p>
                    <button type="button" class="btn btn--secondary" on:click=move |_| on_retry.run(())>
                        "Try again"
                    </button>
                </div>
            }
            .into_any(),
            SlotLoad::Loaded(slots) => view! {
                <div class="slots" role="listbox">
                    {slots
                        .into_iter()
                        .map(|TimeSlot { time, label }| {
                            let is_selected = selected.as_deref() == Some(time.as_str());
                            view! {
                                <button
                                    type="button"
                                    class={if is_selected { "slots__slot slots__slot--selected" } else { "slots__slot" }}
                                    aria-selected={if is_selected { "true" } else { "false" }}
                                    on:click=move |_| on_select.run(time.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any(),
            SlotLoad::Idle | SlotLoad::Loading => ().into_any(),
        }
    }
}
