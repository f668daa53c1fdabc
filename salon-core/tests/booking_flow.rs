use std::cell::RefCell;

use chrono::NaiveDate;
use salon_core::{
    BookingError, BookingFlow, CalendarCell, CalendarMonth, Handoff, HandoffRequest, Step,
};

#[derive(Default)]
struct CapturedHandoff {
    requests: RefCell<Vec<HandoffRequest>>,
}

impl Handoff for CapturedHandoff {
    fn dispatch(&self, request: &HandoffRequest) {
        self.requests.borrow_mut().push(request.clone());
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn click_day(flow: &mut BookingFlow, today: NaiveDate, day: u32) -> Result<(), BookingError> {
    let cell = flow
        .calendar_cells(today)
        .into_iter()
        .find_map(|c| match c {
            CalendarCell::Day(d) if d.day == day => Some(d),
            _ => None,
        })
        .expect("day is rendered");
    flow.select_date(cell.date, today)
}

#[test]
fn test_full_booking_produces_whatsapp_handoff() {
    let today = ymd(2025, 1, 2);
    let mut flow = BookingFlow::new(today);
    assert_eq!(flow.displayed_month(), CalendarMonth::new(2025, 0).unwrap());

    click_day(&mut flow, today, 15).unwrap();
    assert_eq!(flow.state().selected_date, Some(ymd(2025, 1, 15)));
    assert_eq!(flow.advance(), Ok(Step::Time));

    flow.select_time("14:00".parse().unwrap()).unwrap();
    assert_eq!(flow.advance(), Ok(Step::Summary));

    let summary = flow.summary().unwrap();
    assert_eq!(summary.formatted_date, "15 Ocak 2025");
    assert_eq!(summary.time_label, "14:00");

    let handoff = CapturedHandoff::default();
    let request = flow.confirm("905558903511", &handoff).unwrap();

    assert!(request.message.contains("Tarih: 15 Ocak 2025"));
    assert!(request.message.contains("Saat: 14:00"));
    assert!(request.url.starts_with("https://wa.me/905558903511?text="));
    assert_eq!(handoff.requests.borrow().len(), 1);
}

#[test]
fn test_proceed_without_date_stays_on_date_step() {
    let today = ymd(2025, 1, 2);
    let mut flow = BookingFlow::new(today);

    let err = flow.advance().unwrap_err();
    assert!(err.is_guard());
    assert_eq!(err.to_string(), "Lütfen bir tarih seçin");
    assert_eq!(flow.current_step(), Step::Date);
}

#[test]
fn test_next_month_from_december_wraps_to_january() {
    let today = ymd(2025, 12, 5);
    let mut flow = BookingFlow::new(today);

    flow.show_next_month();
    let month = flow.displayed_month();
    assert_eq!(month.year(), 2026);
    assert_eq!(month.month(), 0);

    flow.show_previous_month();
    flow.show_previous_month();
    assert_eq!(flow.displayed_month(), CalendarMonth::new(2025, 10).unwrap());
}

#[test]
fn test_past_days_cannot_be_picked() {
    let today = ymd(2025, 1, 20);
    let mut flow = BookingFlow::new(today);

    assert_eq!(
        click_day(&mut flow, today, 19),
        Err(BookingError::PastDate(ymd(2025, 1, 19)))
    );
    assert!(click_day(&mut flow, today, 20).is_ok());
}

#[test]
fn test_selection_survives_month_round_trip() {
    let today = ymd(2025, 1, 2);
    let mut flow = BookingFlow::new(today);
    click_day(&mut flow, today, 28).unwrap();

    flow.show_next_month();
    flow.show_next_month();
    flow.show_previous_month();
    flow.show_previous_month();

    let selected: Vec<u32> = flow
        .calendar_cells(today)
        .into_iter()
        .filter_map(|c| match c {
            CalendarCell::Day(d) if d.is_selected => Some(d.day),
            _ => None,
        })
        .collect();
    assert_eq!(selected, vec![28]);
}
