// ============================================================================
// FORMATTERS - Helpers de formato para las vistas
// ============================================================================

use chrono::{DateTime, Utc};

/// Formatear precio en rupias (₹) con separador indio de miles
/// (lakhs/crores: 12,34,567)
pub fn format_inr(amount: f64) -> String {
    format!("₹{}", format_indian_number(amount.round() as i64))
}

/// Formatear número con separadores estilo indio
pub fn format_indian_number(num: i64) -> String {
    let negative = num < 0;
    let digits: Vec<char> = num.abs().to_string().chars().collect();

    // Los últimos 3 dígitos van juntos, el resto en grupos de 2
    let mut groups: Vec<String> = Vec::new();
    let n = digits.len();
    if n <= 3 {
        groups.push(digits.iter().collect());
    } else {
        groups.push(digits[n - 3..].iter().collect());
        let mut i = n - 3;
        while i > 0 {
            let start = i.saturating_sub(2);
            groups.push(digits[start..i].iter().collect());
            i = start;
        }
        groups.reverse();
    }

    let joined = groups.join(",");
    if negative {
        format!("-{}", joined)
    } else {
        joined
    }
}

/// Formatear fecha y hora como "05 Jan 2026, 14:30"
pub fn format_date_time(date: &DateTime<Utc>) -> String {
    date.format("%d %b %Y, %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping_small() {
        assert_eq!(format_indian_number(0), "0");
        assert_eq!(format_indian_number(999), "999");
    }

    #[test]
    fn indian_grouping_lakhs() {
        assert_eq!(format_indian_number(1234), "1,234");
        assert_eq!(format_indian_number(1234567), "12,34,567");
        assert_eq!(format_indian_number(123456789), "12,34,56,789");
    }

    #[test]
    fn inr_rounds_to_whole_rupees() {
        assert_eq!(format_inr(1234.6), "₹1,235");
    }
}
