pub mod booking;
pub mod contact;
pub mod error;
pub mod page;

pub use booking::calendar::{render_month, CalendarCell, CalendarMonth, DayCell};
pub use booking::flow::{BookingFlow, BookingState, BookingSummary, Step};
pub use booking::handoff::{Handoff, HandoffRequest};
pub use booking::time_slots::{generate_time_slots, TimeSlot, TimeSlotCell};
pub use error::{BookingError, ContactError};
