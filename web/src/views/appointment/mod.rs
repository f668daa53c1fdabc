pub mod appointment_booking;
pub mod booking_summary;
pub mod calendar_grid;
pub mod time_slot_picker;

pub use appointment_booking::AppointmentBooking;
pub use booking_summary::BookingSummaryPanel;
pub use calendar_grid::CalendarGrid;
pub use time_slot_picker::TimeSlotPicker;

use leptos::logging::warn;
use salon_core::BookingError;

use crate::utils::browser::show_notice;

/// Guard violations get a blocking notice; anything else means the markup let
/// through an action the flow does not allow, so it is only logged.
pub(crate) fn report_rejection(err: BookingError) {
    if err.is_guard() {
        show_notice(&err.to_string());
    } else {
        warn!("Booking action rejected: {}", err);
    }
}
