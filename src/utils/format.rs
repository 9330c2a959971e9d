// ============================================================================
// FORMATO - porcentajes, fechas y textos para las vistas
// ============================================================================

use chrono::{NaiveDate, NaiveDateTime};

/// `part / total` en porcentaje; 0 si el total es 0
pub fn percentage(part: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    part * 100.0 / total
}

pub fn rounded_percentage(part: f64, total: f64) -> u32 {
    percentage(part, total).round() as u32
}

/// Porcentaje acotado a [0, 100] para anchos de barras de progreso
pub fn bar_width(percent: f64) -> String {
    format!("width: {:.1}%", percent.clamp(0.0, 100.0))
}

/// Primera letra en mayúscula ("critical" -> "Critical")
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Iniciales para el avatar ("John Doe" -> "JD")
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// 85000 -> "85,000"
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "2023-09-15T08:30:00" -> "9/15/2023, 8:30:00 AM"; si no parsea, se devuelve tal cual
pub fn format_timestamp(value: &str) -> String {
    match NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        Err(_) => value.to_string(),
    }
}

/// "2023-09-25" -> "9/25/2023"
pub fn format_short_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// "2023-09-25" -> "September 25, 2023"
pub fn format_long_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_handles_zero_total() {
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert_eq!(percentage(45000.0, 75000.0), 60.0);
        assert_eq!(rounded_percentage(110.0, 120.0), 92);
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(bar_width(150.0), "width: 100.0%");
        assert_eq!(bar_width(64.0), "width: 64.0%");
    }

    #[test]
    fn text_helpers() {
        assert_eq!(capitalize("long-term"), "Long-term");
        assert_eq!(capitalize(""), "");
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("jane"), "J");
        assert_eq!(thousands(85000), "85,000");
        assert_eq!(thousands(1250), "1,250");
        assert_eq!(thousands(500), "500");
        assert_eq!(thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn dates() {
        assert_eq!(format_timestamp("2023-09-15T08:30:00"), "9/15/2023, 8:30:00 AM");
        assert_eq!(format_timestamp("2023-09-14T14:15:00"), "9/14/2023, 2:15:00 PM");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_short_date("2023-09-25"), "9/25/2023");
        assert_eq!(format_long_date("2023-09-05"), "September 5, 2023");
    }
}
