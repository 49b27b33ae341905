use chrono::NaiveDate;

/// Parses `YYYY-MM` (or a full `YYYY-MM-DD`) into the first day of that month.
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d"))
        .ok()
}

/// `"2021-06"` → `"Jun 2021"`. Absent means ongoing; unparseable input is shown as-is.
pub fn format_month(value: Option<&str>) -> String {
    match value {
        None => "Present".to_string(),
        Some(raw) => parse_month(raw)
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

pub fn format_range(from: Option<&str>, to: Option<&str>) -> String {
    match from {
        Some(_) => format!("{} - {}", format_month(from), format_month(to)),
        None => String::new(),
    }
}
