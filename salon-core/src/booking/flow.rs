use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::{render_month, CalendarCell, CalendarMonth};
use super::format_long_date;
use super::handoff::{whatsapp_request, Handoff, HandoffRequest};
use super::time_slots::{generate_time_slots, TimeSlot, TimeSlotCell};
use crate::error::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Date,
    Time,
    Summary,
}

impl Step {
    /// 1-based position, matching the host's `data-step` attribute.
    pub fn number(&self) -> u8 {
        match self {
            Step::Date => 1,
            Step::Time => 2,
            Step::Summary => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingState {
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<TimeSlot>,
    pub current_step: Step,
}

impl Default for BookingState {
    fn default() -> Self {
        Self {
            selected_date: None,
            selected_time: None,
            current_step: Step::Date,
        }
    }
}

/// What the summary panel shows before confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub formatted_date: String,
    pub time_label: String,
}

/// The three-step Date → Time → Summary wizard.
///
/// Holds the selection state and the displayed calendar month. Rendering goes
/// through [`BookingFlow::calendar_cells`] and [`BookingFlow::time_slot_cells`];
/// every mutation is one of the explicit operations below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingFlow {
    state: BookingState,
    view: CalendarMonth,
}

impl BookingFlow {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            state: BookingState::default(),
            view: CalendarMonth::containing(today),
        }
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    pub fn displayed_month(&self) -> CalendarMonth {
        self.view
    }

    pub fn show_previous_month(&mut self) {
        self.view = self.view.prev();
        tracing::debug!(month = %self.view.label(), "calendar moved back");
    }

    pub fn show_next_month(&mut self) {
        self.view = self.view.next();
        tracing::debug!(month = %self.view.label(), "calendar moved forward");
    }

    /// Jumps the calendar to the month holding `date`. Used once the visitor's
    /// own date is known, since the flow may have been built with another one.
    pub fn show_month_containing(&mut self, date: NaiveDate) {
        self.view = CalendarMonth::containing(date);
        tracing::debug!(month = %self.view.label(), "calendar moved to local month");
    }

    pub fn calendar_cells(&self, today: NaiveDate) -> Vec<CalendarCell> {
        render_month(self.view, today, self.state.selected_date)
    }

    pub fn time_slot_cells(&self) -> Vec<TimeSlotCell> {
        generate_time_slots(self.state.selected_time)
    }

    /// Picks a day. Does not advance the step.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), BookingError> {
        self.expect_step(Step::Date)?;
        if date < today {
            tracing::warn!(%date, "rejected past date");
            return Err(BookingError::PastDate(date));
        }

        self.state.selected_date = Some(date);
        tracing::debug!(%date, "date selected");
        Ok(())
    }

    pub fn select_time(&mut self, slot: TimeSlot) -> Result<(), BookingError> {
        self.expect_step(Step::Time)?;
        if self.state.selected_date.is_none() {
            return Err(BookingError::MissingDate);
        }

        self.state.selected_time = Some(slot);
        tracing::debug!(%slot, "time selected");
        Ok(())
    }

    /// Whether the "next" control of the current step is enabled.
    pub fn can_advance(&self) -> bool {
        match self.state.current_step {
            Step::Date => self.state.selected_date.is_some(),
            Step::Time => self.state.selected_time.is_some(),
            Step::Summary => false,
        }
    }

    pub fn advance(&mut self) -> Result<Step, BookingError> {
        let next = match self.state.current_step {
            Step::Date if self.state.selected_date.is_none() => {
                tracing::debug!("advance blocked: no date");
                return Err(BookingError::MissingDate);
            }
            Step::Date => Step::Time,
            Step::Time if self.state.selected_time.is_none() => {
                tracing::debug!("advance blocked: no time");
                return Err(BookingError::MissingTime);
            }
            Step::Time => Step::Summary,
            Step::Summary => return Ok(Step::Summary),
        };

        tracing::debug!(from = ?self.state.current_step, to = ?next, "step advanced");
        self.state.current_step = next;
        Ok(next)
    }

    /// Steps back without clearing any selection.
    pub fn back(&mut self) -> Step {
        let previous = match self.state.current_step {
            Step::Date | Step::Time => Step::Date,
            Step::Summary => Step::Time,
        };

        tracing::debug!(from = ?self.state.current_step, to = ?previous, "step back");
        self.state.current_step = previous;
        previous
    }

    pub fn selected_date_label(&self) -> Option<String> {
        self.state.selected_date.map(format_long_date)
    }

    pub fn summary(&self) -> Option<BookingSummary> {
        let date = self.state.selected_date?;
        let time = self.state.selected_time?;
        Some(BookingSummary {
            formatted_date: format_long_date(date),
            time_label: time.label(),
        })
    }

    /// Composes the confirmation message and hands it off. The flow keeps no
    /// post-confirmation state, so this may be called again after going back.
    pub fn confirm(
        &self,
        phone_number: &str,
        handoff: &impl Handoff,
    ) -> Result<HandoffRequest, BookingError> {
        self.expect_step(Step::Summary)?;
        let summary = match (self.state.selected_date, self.state.selected_time) {
            (None, _) => return Err(BookingError::MissingDate),
            (_, None) => return Err(BookingError::MissingTime),
            (Some(date), Some(time)) => BookingSummary {
                formatted_date: format_long_date(date),
                time_label: time.label(),
            },
        };

        let request = whatsapp_request(phone_number, &summary);
        tracing::info!(date = %summary.formatted_date, time = %summary.time_label, "booking confirmed");
        handoff.dispatch(&request);
        Ok(request)
    }

    fn expect_step(&self, expected: Step) -> Result<(), BookingError> {
        if self.state.current_step == expected {
            Ok(())
        } else {
            Err(BookingError::WrongStep {
                expected,
                actual: self.state.current_step,
            })
        }
    }
}
