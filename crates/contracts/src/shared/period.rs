use chrono::NaiveDate;

/// Human-readable label for a year-month key: "2024-01" -> "Jan 2024".
/// Keys that are not a valid year-month are returned unchanged.
pub fn month_label(month_key: &str) -> String {
    match NaiveDate::parse_from_str(&format!("{}-01", month_key), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => month_key.to_string(),
    }
}
