use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 3, 15).unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 3, d).unwrap()
}

fn slot(time: &str) -> TimeSlot {
    TimeSlot { time: time.to_owned(), label: time.to_owned() }
}

fn fill_details(state: &mut BookingState) {
    state.set_field(BookingField::Name, " Ann Lee ".to_owned());
    state.set_field(BookingField::Email, "ann@example.com ".to_owned());
    state.set_field(BookingField::Phone, "555 123 4567".to_owned());
    state.set_field(BookingField::Service, "cleaning".to_owned());
}

fn ready_to_submit() -> BookingState {
    let mut state = BookingState::new(today());
    let req = state.select_date(day(20), today()).unwrap();
    state.apply_slots(req, Ok(vec![slot("09:00"), slot("09:30")]));
    state.select_slot("09:30");
    fill_details(&mut state);
    state
}

// =============================================================
// Initial state and month navigation
// =============================================================

#[test]
fn new_state_shows_current_month_with_nothing_selected() {
    let state = BookingState::new(today());
    assert_eq!(state.shown_month, YearMonth { year: 2030, month: 3 });
    assert_eq!(state.selected_date, None);
    assert_eq!(state.slots, SlotLoad::Idle);
    assert!(!state.confirmed);
}

#[test]
fn previous_month_blocked_at_current_month() {
    let mut state = BookingState::new(today());
    state.show_previous_month(today());
    assert_eq!(state.shown_month, YearMonth { year: 2030, month: 3 });
    state.show_next_month();
    state.show_next_month();
    state.show_previous_month(today());
    assert_eq!(state.shown_month, YearMonth { year: 2030, month: 4 });
}

// =============================================================
// Date selection
// =============================================================

#[test]
fn selecting_past_date_is_ignored() {
    let mut state = BookingState::new(today());
    assert_eq!(state.select_date(day(14), today()), None);
    assert_eq!(state.selected_date, None);
    assert_eq!(state.slots, SlotLoad::Idle);
}

#[test]
fn selecting_today_starts_loading() {
    let mut state = BookingState::new(today());
    let req = state.select_date(today(), today()).unwrap();
    assert_eq!(req.date, today());
    assert_eq!(state.slots, SlotLoad::Loading);
}

#[test]
fn selecting_new_date_clears_slot_and_slot_error() {
    let mut state = BookingState::new(today());
    let req = state.select_date(day(20), today()).unwrap();
    state.apply_slots(req, Ok(vec![slot("09:00")]));
    state.select_slot("09:00");
    state.errors.slot = Some("x".to_owned());

    let req2 = state.select_date(day(21), today()).unwrap();
    assert_eq!(state.selected_slot, None);
    assert!(state.errors.slot.is_none());
    assert_eq!(state.slots, SlotLoad::Loading);
    assert!(req2.generation > req.generation);
}

#[test]
fn selecting_new_date_after_failure_clears_error() {
    let mut state = BookingState::new(today());
    let req = state.select_date(day(20), today()).unwrap();
    state.apply_slots(req, Err("boom".to_owned()));
    assert_eq!(state.slots, SlotLoad::Failed("boom".to_owned()));
    state.select_date(day(22), today());
    assert_eq!(state.slots, SlotLoad::Loading);
}

// =============================================================
// Slot loading
// =============================================================

#[test]
fn empty_slot_list_is_loaded_not_failed() {
    let mut state = BookingState::new(today());
    let req = state.select_date(day(20), today()).unwrap();
    assert!(state.apply_slots(req, Ok(Vec::new())));
    assert_eq!(state.slots, SlotLoad::Loaded(Vec::new()));
}

#[test]
fn stale_slot_response_is_dropped() {
    let mut state = BookingState::new(today());
    let first = state.select_date(day(20), today()).unwrap();
    let second = state.select_date(day(21), today()).unwrap();

    assert!(state.apply_slots(second, Ok(vec![slot("10:00")])));
    assert!(!state.apply_slots(first, Ok(vec![slot("09:00")])));
    assert_eq!(state.slots, SlotLoad::Loaded(vec![slot("10:00")]));
    assert_eq!(state.selected_date, Some(day(21)));
}

#[test]
fn retry_bumps_counter_and_generation() {
    let mut state = BookingState::new(today());
    assert_eq!(state.retry_slots(), None);

    let req = state.select_date(day(20), today()).unwrap();
    state.apply_slots(req, Err("offline".to_owned()));
    let retry = state.retry_slots().unwrap();
    assert_eq!(state.retry_count, 1);
    assert_eq!(retry.date, day(20));
    assert!(retry.generation > req.generation);
    assert_eq!(state.slots, SlotLoad::Loading);
    assert!(!state.apply_slots(req, Ok(Vec::new())));
    assert!(state.apply_slots(retry, Ok(vec![slot("11:00")])));
}

#[test]
fn selecting_slot_clears_date_and_slot_errors() {
    let mut state = BookingState::new(today());
    state.errors.date = Some("d".to_owned());
    state.errors.slot = Some("s".to_owned());
    state.select_slot("09:00");
    assert_eq!(state.selected_slot.as_deref(), Some("09:00"));
    assert!(state.errors.date.is_none());
    assert!(state.errors.slot.is_none());
}

// =============================================================
// Field edits and submission
// =============================================================

#[test]
fn editing_field_clears_only_its_error() {
    let mut state = BookingState::new(today());
    state.errors = state.validate(today());
    state.set_field(BookingField::Name, "Ann".to_owned());
    assert!(state.errors.name.is_none());
    assert!(state.errors.email.is_some());
}

#[test]
fn begin_submit_reports_all_errors_and_stays_idle() {
    let mut state = BookingState::new(today());
    state.set_field(BookingField::Name, "A".to_owned());
    state.set_field(BookingField::Email, "bad".to_owned());
    state.set_field(BookingField::Phone, "123".to_owned());
    assert_eq!(state.begin_submit(today()), None);
    assert_eq!(state.errors.count(), 6);
    assert!(!state.submitting);
}

#[test]
fn begin_submit_composes_trimmed_payload() {
    let mut state = ready_to_submit();
    state.set_field(BookingField::Message, "   ".to_owned());
    let payload = state.begin_submit(today()).unwrap();
    assert_eq!(payload.name, "Ann Lee");
    assert_eq!(payload.email, "ann@example.com");
    assert_eq!(payload.preferred_date, "2030-03-20");
    assert_eq!(payload.slot_time, "09:30");
    assert_eq!(payload.message, None);
    assert!(state.submitting);
}

#[test]
fn begin_submit_guards_against_double_submission() {
    let mut state = ready_to_submit();
    assert!(state.begin_submit(today()).is_some());
    assert!(state.begin_submit(today()).is_none());
}

#[test]
fn successful_submit_resets_everything_and_confirms() {
    let mut state = ready_to_submit();
    state.begin_submit(today()).unwrap();
    state.finish_submit(Ok(()), today());

    let mut expected = BookingState::new(today());
    expected.confirmed = true;
    assert_eq!(state, expected);
    assert_eq!(state.form, BookingForm::default());

    state.book_another(today());
    assert!(!state.confirmed);
}

#[test]
fn failed_submit_keeps_form_for_retry() {
    let mut state = ready_to_submit();
    state.begin_submit(today()).unwrap();
    state.finish_submit(Err("Service unavailable.".to_owned()), today());
    assert!(!state.submitting);
    assert!(!state.confirmed);
    assert_eq!(state.submit_error.as_deref(), Some("Service unavailable."));
    assert_eq!(state.form.name, " Ann Lee ");
    assert_eq!(state.selected_slot.as_deref(), Some("09:30"));
    assert!(state.begin_submit(today()).is_some());
    assert!(state.submit_error.is_none());
}

// =============================================================
// Day rollover
// =============================================================

#[test]
fn roll_to_advances_shown_month_and_drops_past_selection() {
    let mut state = BookingState::new(today());
    let req = state.select_date(day(31), today()).unwrap();
    state.apply_slots(req, Ok(vec![slot("09:00")]));
    state.select_slot("09:00");

    let april_first = NaiveDate::from_ymd_opt(2030, 4, 1).unwrap();
    state.roll_to(april_first);
    assert_eq!(state.shown_month, YearMonth { year: 2030, month: 4 });
    assert_eq!(state.selected_date, None);
    assert_eq!(state.selected_slot, None);
    assert_eq!(state.slots, SlotLoad::Idle);
    assert!(!state.apply_slots(req, Ok(vec![slot("10:00")])));
}

#[test]
fn roll_to_earlier_browser_date_keeps_selection() {
    let mut state = BookingState::new(today());
    state.select_date(today(), today()).unwrap();
    let yesterday = day(14);
    state.roll_to(yesterday);
    assert_eq!(state.selected_date, Some(today()));
    assert_eq!(state.shown_month, YearMonth { year: 2030, month: 3 });
    assert_eq!(state.select_date(yesterday, yesterday).map(|r| r.date), Some(yesterday));
}

#[test]
fn submit_after_midnight_rejects_stale_date() {
    let mut state = ready_to_submit();
    let next_day = day(21);
    assert_eq!(state.begin_submit(next_day), None);
    assert_eq!(state.errors.date.as_deref(), Some("Please choose a date that is not in the past."));
}
