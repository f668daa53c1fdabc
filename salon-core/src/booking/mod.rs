pub mod calendar;
pub mod flow;
pub mod handoff;
pub mod time_slots;

/// Turkish month names, indexed by 0-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Formats a date in Turkish long form, e.g. "15 Ocak 2025".
pub fn format_long_date(date: chrono::NaiveDate) -> String {
    use chrono::Datelike;

    format!(
        "{} {} {}",
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}
