use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BookingError;

pub const FIRST_HOUR: u32 = 9;
pub const LAST_HOUR: u32 = 21;

/// A bookable whole-hour slot between 09:00 and 21:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32")]
pub struct TimeSlot(u32);

impl TryFrom<u32> for TimeSlot {
    type Error = BookingError;

    fn try_from(hour: u32) -> Result<Self, Self::Error> {
        TimeSlot::new(hour)
    }
}

impl TimeSlot {
    pub fn new(hour: u32) -> Result<Self, BookingError> {
        if (FIRST_HOUR..=LAST_HOUR).contains(&hour) {
            Ok(Self(hour))
        } else {
            Err(BookingError::InvalidTimeSlot(format!("{:02}:00", hour)))
        }
    }

    pub fn hour(&self) -> u32 {
        self.0
    }

    pub fn label(&self) -> String {
        format!("{:02}:00", self.0)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl FromStr for TimeSlot {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BookingError::InvalidTimeSlot(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if minute != "00" || hour.len() != 2 {
            return Err(invalid());
        }
        let hour = hour.parse::<u32>().map_err(|_| invalid())?;
        TimeSlot::new(hour).map_err(|_| invalid())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotCell {
    pub slot: TimeSlot,
    pub label: String,
    pub is_selected: bool,
}

/// Every slot of the day in ascending order. There is no availability
/// tracking, so all of them are always selectable.
pub fn generate_time_slots(selected: Option<TimeSlot>) -> Vec<TimeSlotCell> {
    (FIRST_HOUR..=LAST_HOUR)
        .map(|hour| {
            let slot = TimeSlot(hour);
            TimeSlotCell {
                slot,
                label: slot.label(),
                is_selected: selected == Some(slot),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_yields_thirteen_ascending_slots() {
        let cells = generate_time_slots(None);
        let labels: Vec<&str> = cells.iter().map(|c| c.label.as_str()).collect();

        assert_eq!(cells.len(), 13);
        assert_eq!(labels.first(), Some(&"09:00"));
        assert_eq!(labels.last(), Some(&"21:00"));
        assert!(cells.windows(2).all(|w| w[0].slot < w[1].slot));
        assert!(cells.iter().all(|c| !c.is_selected));
    }

    #[test]
    fn test_at_most_one_slot_selected() {
        for hour in FIRST_HOUR..=LAST_HOUR {
            let slot = TimeSlot::new(hour).unwrap();
            let cells = generate_time_slots(Some(slot));
            let selected: Vec<_> = cells.iter().filter(|c| c.is_selected).collect();

            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].slot, slot);
        }
    }

    #[test]
    fn test_parse_time_slot() {
        assert_eq!("14:00".parse::<TimeSlot>().unwrap().hour(), 14);
        assert_eq!("09:00".parse::<TimeSlot>().unwrap().to_string(), "09:00");

        assert!("9:00".parse::<TimeSlot>().is_err());
        assert!("08:00".parse::<TimeSlot>().is_err());
        assert!("22:00".parse::<TimeSlot>().is_err());
        assert!("14:30".parse::<TimeSlot>().is_err());
        assert!("noon".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_new_rejects_hours_outside_opening_time() {
        assert_eq!(
            TimeSlot::new(7),
            Err(BookingError::InvalidTimeSlot("07:00".to_string()))
        );
        assert!(TimeSlot::new(21).is_ok());
    }

    #[test]
    fn test_deserialize_rejects_closed_hours() {
        let slot: TimeSlot = serde_json::from_str("14").unwrap();
        assert_eq!(slot.label(), "14:00");
        assert!(serde_json::from_str::<TimeSlot>("22").is_err());
    }
}
