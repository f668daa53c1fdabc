use crate::booking::flow::Step;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Lütfen bir tarih seçin")]
    MissingDate,
    #[error("Lütfen bir saat seçin")]
    MissingTime,
    #[error("{0} is in the past and cannot be booked")]
    PastDate(NaiveDate),
    #[error("operation requires the {expected:?} step but the flow is on {actual:?}")]
    WrongStep { expected: Step, actual: Step },
    #[error("month index {0} is out of range (expected 0..=11)")]
    InvalidMonth(u32),
    #[error("invalid time slot: {0}")]
    InvalidTimeSlot(String),
}

impl BookingError {
    /// Guard violations are shown to the user as a blocking notice; everything
    /// else is a programming error on the host side and only gets logged.
    pub fn is_guard(&self) -> bool {
        matches!(self, BookingError::MissingDate | BookingError::MissingTime)
    }
}

/// A contact-form field that failed validation. `Display` is the notice shown
/// under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Lütfen geçerli bir isim girin")]
    InvalidName,
    #[error("Lütfen geçerli bir telefon numarası girin")]
    InvalidPhone,
    #[error("Lütfen bir hizmet seçin")]
    MissingService,
}

impl ContactError {
    /// The id of the form control the notice belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ContactError::InvalidName => "name",
            ContactError::InvalidPhone => "phone",
            ContactError::MissingService => "service",
        }
    }
}
