use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::MONTH_NAMES;
use crate::error::BookingError;

/// Monday-first weekday labels for the grid header.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Pzt", "Sal", "Çar", "Per", "Cum", "Cmt", "Paz"];

/// The month currently shown in the calendar grid. Month is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarMonth")]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawCalendarMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawCalendarMonth> for CalendarMonth {
    type Error = BookingError;

    fn try_from(raw: RawCalendarMonth) -> Result<Self, Self::Error> {
        CalendarMonth::new(raw.year, raw.month)
    }
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, BookingError> {
        if month > 11 {
            return Err(BookingError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(self) -> Self {
        if self.month == 11 {
            Self {
                year: self.year + 1,
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 0 {
            Self {
                year: self.year - 1,
                month: 11,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is always 0..=11 and day 1 exists in every month
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap_or_default()
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first_day();
        next.signed_duration_since(self.first_day()).num_days() as u32
    }

    /// Empty cells before the 1st, with the week starting on Monday.
    pub fn leading_placeholders(&self) -> usize {
        self.first_day().weekday().num_days_from_monday() as usize
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }

    /// Header label, e.g. "Ocak 2025".
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize], self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub is_past: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

impl DayCell {
    pub fn is_disabled(&self) -> bool {
        self.is_past
    }

    pub fn class_name(&self) -> String {
        let mut classes = vec!["calendar-day"];
        if self.is_past {
            classes.push("past");
        } else if self.is_today {
            classes.push("today");
        }
        if self.is_selected {
            classes.push("active");
        }
        classes.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarCell {
    Placeholder,
    Day(DayCell),
}

/// Builds the grid for `month`: leading placeholders followed by one cell per day.
///
/// `today` is the caller's local date; past-ness is a date-only comparison so
/// today itself is never past.
pub fn render_month(
    month: CalendarMonth,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<CalendarCell> {
    let leading = month.leading_placeholders();
    let days = month.days_in_month();

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend(std::iter::repeat(CalendarCell::Placeholder).take(leading));

    for day in 1..=days {
        let Some(date) = month.date(day) else {
            continue;
        };
        cells.push(CalendarCell::Day(DayCell {
            day,
            date,
            is_past: date < today,
            is_today: date == today,
            is_selected: selected == Some(date),
        }));
    }

    cells
}
