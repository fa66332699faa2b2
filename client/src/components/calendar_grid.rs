//! Month calendar for picking an appointment date.
//!
//! DESIGN
//! ======
//! The grid is pure output of `util::calendar::month_grid`; this component
//! only renders cells and forwards clicks. Past days render as disabled
//! buttons so they stay in the tab order but cannot be chosen. `today` is a
//! signal so the grid re-renders once the browser supplies its local date.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

use crate::state::booking::BookingState;
use crate::util::calendar::{CalendarCell, WEEKDAY_LABELS, can_show_previous, iso_date, month_grid};

fn day_class(is_today: bool, is_selected: bool) -> String {
    let mut class = String::from("calendar__day");
    if is_today {
        class.push_str(" calendar__day--today");
    }
    if is_selected {
        class.push_str(" calendar__day--selected");
    }
    class
}

#[component]
pub fn CalendarGrid(
    booking: RwSignal<BookingState>,
    #[prop(into)] today: Signal<NaiveDate>,
    on_select: Callback<NaiveDate>,
) -> impl IntoView {
    let shown = move || booking.with(|b| b.shown_month);
    let selected = move || booking.with(|b| b.selected_date);

    view! {
        <div class="calendar">
            <div class="calendar__header">
                <button
                    type="button"
                    class="calendar__nav"
                    aria-label="Previous month"
                    disabled=move || !can_show_previous(shown(), today.get())
                    on:click=move |_| booking.update(|b| b.show_previous_month(today.get_untracked()))
                >
                    "‹"
                </button>
                <span class="calendar__title">{move || shown().label()}</span>
                <button
                    type="button"
                    class="calendar__nav"
                    aria-label="Next month"
                    on:click=move |_| booking.update(BookingState::show_next_month)
                >
                    "›"
                </button>
            </div>
            <div class="calendar__grid" role="grid">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <span class="calendar__weekday">{*label}</span> })
                    .collect_view()}
                {move || {
                    month_grid(shown(), today.get())
                        .into_iter()
                        .map(|cell| match cell {
                            CalendarCell::Blank => view! { <span class="calendar__blank"></span> }.into_any(),
                            CalendarCell::Day { date, disabled, is_today } => {
                                let is_selected = selected() == Some(date);
                                view! {
                                    <button
                                        type="button"
                                        class=day_class(is_today, is_selected)
                                        disabled=disabled
                                        aria-pressed={if is_selected { "true" } else { "false" }}
                                        data-date=iso_date(date)
                                        on:click=move |_| {
                                            if !disabled {
                                                on_select.run(date);
                                            }
                                        }
                                    >
                                        {date.day()}
                                    </button>
                                }
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
