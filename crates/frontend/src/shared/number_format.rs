//! Утилиты форматирования чисел для таблиц, карточек и осей графиков

/// Разделитель тысяч (запятая) и заданное количество знаков после точки
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    // -0.00 не показываем со знаком
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.insert(0, '-');
    }
    match decimal_part {
        Some(d) => format!("{}.{}", result, d),
        None => result,
    }
}

pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

pub fn format_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Короткая запись для подписей оси: 950, 1.5K, 2.3M
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1_000_000_000.0 {
        (value / 1_000_000_000.0, "B")
    } else if abs >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (value / 1_000.0, "K")
    } else {
        return format!("{:.0}", value);
    };
    let text = format!("{:.1}", scaled);
    format!("{}{}", text.trim_end_matches(".0"), suffix)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.5), "-1,234.50");
        assert_eq!(format_money(-0.001), "0.00");
    }

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(999.0), "999");
        assert_eq!(format_int(1000.0), "1,000");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(1500.0), "1.5K");
        assert_eq!(format_compact(2_000_000.0), "2M");
        assert_eq!(format_compact(-2_300_000.0), "-2.3M");
    }
}
