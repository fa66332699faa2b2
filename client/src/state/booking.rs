//! Booking flow state: date -> slot -> details -> submit.
//!
//! DESIGN
//! ======
//! The page holds one `BookingState` in a signal and drives it from event
//! handlers; async work happens outside and reports back through
//! `apply_slots` / `finish_submit`. Every slot request carries a generation
//! number and only the newest one may land, so switching dates quickly cannot
//! leave an older date's slots on screen.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use chrono::NaiveDate;

use crate::net::types::{AppointmentPayload, TimeSlot};
use crate::util::calendar::{YearMonth, can_show_previous, is_past, iso_date};
use crate::util::validation::{BookingErrors, validate_booking};

/// Free-text fields of the booking form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

/// Editable form fields, used to clear a field's error on input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

/// Slot list for the selected date.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SlotLoad {
    /// No date chosen yet.
    #[default]
    Idle,
    Loading,
    Failed(String),
    Loaded(Vec<TimeSlot>),
}

/// A slot fetch the page should perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotRequest {
    pub date: NaiveDate,
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingState {
    pub shown_month: YearMonth,
    pub selected_date: Option<NaiveDate>,
    pub selected_slot: Option<String>,
    pub slots: SlotLoad,
    pub slot_generation: u64,
    pub retry_count: u32,
    pub form: BookingForm,
    pub errors: BookingErrors,
    pub submitting: bool,
    pub submit_error: Option<String>,
    pub confirmed: bool,
}

impl BookingState {
    /// Fresh state showing `today`'s month.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            shown_month: YearMonth::of(today),
            selected_date: None,
            selected_slot: None,
            slots: SlotLoad::Idle,
            slot_generation: 0,
            retry_count: 0,
            form: BookingForm::default(),
            errors: BookingErrors::default(),
            submitting: false,
            submit_error: None,
            confirmed: false,
        }
    }

    /// Move to a new current day: bring the shown month up to it and drop a
    /// selection that is now in the past, invalidating any in-flight slot fetch.
    pub fn roll_to(&mut self, today: NaiveDate) {
        let current = YearMonth::of(today);
        if self.shown_month < current {
            self.shown_month = current;
        }
        if self.selected_date.is_some_and(|d| is_past(d, today)) {
            self.selected_date = None;
            self.selected_slot = None;
            self.slots = SlotLoad::Idle;
            self.slot_generation += 1;
        }
    }

    pub fn show_next_month(&mut self) {
        self.shown_month = self.shown_month.next();
    }

    /// Step back a month unless that would show only past days.
    pub fn show_previous_month(&mut self, today: NaiveDate) {
        if can_show_previous(self.shown_month, today) {
            self.shown_month = self.shown_month.previous();
        }
    }

    /// Select `date` and start loading its slots.
    ///
    /// Past dates are ignored and yield `None`.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Option<SlotRequest> {
        if is_past(date, today) {
            return None;
        }
        self.selected_date = Some(date);
        self.selected_slot = None;
        self.errors.date = None;
        self.errors.slot = None;
        Some(self.start_slot_request(date))
    }

    /// Re-request slots for the selected date after a failure.
    pub fn retry_slots(&mut self) -> Option<SlotRequest> {
        let date = self.selected_date?;
        self.retry_count += 1;
        Some(self.start_slot_request(date))
    }

    fn start_slot_request(&mut self, date: NaiveDate) -> SlotRequest {
        self.slot_generation += 1;
        self.slots = SlotLoad::Loading;
        SlotRequest { date, generation: self.slot_generation }
    }

    /// Record a slot response. Returns `false` when it was stale and dropped.
    pub fn apply_slots(&mut self, request: SlotRequest, result: Result<Vec<TimeSlot>, String>) -> bool {
        if request.generation != self.slot_generation || self.selected_date != Some(request.date) {
            return false;
        }
        self.slots = match result {
            Ok(slots) => SlotLoad::Loaded(slots),
            Err(message) => SlotLoad::Failed(message),
        };
        true
    }

    /// Pick one of the loaded slots by its `time` value.
    pub fn select_slot(&mut self, time: &str) {
        self.selected_slot = Some(time.to_owned());
        self.errors.date = None;
        self.errors.slot = None;
    }

    /// Update a form field and clear its error.
    pub fn set_field(&mut self, field: BookingField, value: String) {
        match field {
            BookingField::Name => {
                self.form.name = value;
                self.errors.name = None;
            }
            BookingField::Email => {
                self.form.email = value;
                self.errors.email = None;
            }
            BookingField::Phone => {
                self.form.phone = value;
                self.errors.phone = None;
            }
            BookingField::Service => {
                self.form.service = value;
                self.errors.service = None;
            }
            BookingField::Message => {
                self.form.message = value;
                self.errors.message = None;
            }
        }
    }

    pub fn validate(&self, today: NaiveDate) -> BookingErrors {
        validate_booking(&self.form, self.selected_date, self.selected_slot.as_deref(), today)
    }

    /// Validate and, if clean, mark submission in flight and return the payload.
    pub fn begin_submit(&mut self, today: NaiveDate) -> Option<AppointmentPayload> {
        if self.submitting {
            return None;
        }
        self.errors = self.validate(today);
        if !self.errors.is_empty() {
            return None;
        }
        let payload = self.payload()?;
        self.submitting = true;
        self.submit_error = None;
        Some(payload)
    }

    fn payload(&self) -> Option<AppointmentPayload> {
        let date = self.selected_date?;
        let slot = self.selected_slot.clone()?;
        let message = self.form.message.trim();
        Some(AppointmentPayload {
            name: self.form.name.trim().to_owned(),
            email: self.form.email.trim().to_owned(),
            phone: self.form.phone.trim().to_owned(),
            service: self.form.service.clone(),
            preferred_date: iso_date(date),
            slot_time: slot,
            message: (!message.is_empty()).then(|| message.to_owned()),
        })
    }

    /// Settle a submission. Success resets everything and shows the confirmation.
    pub fn finish_submit(&mut self, result: Result<(), String>, today: NaiveDate) {
        match result {
            Ok(()) => {
                *self = Self::new(today);
                self.confirmed = true;
            }
            Err(message) => {
                self.submitting = false;
                self.submit_error = Some(message);
            }
        }
    }

    /// Leave the confirmation view for an empty form.
    pub fn book_another(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }
}
