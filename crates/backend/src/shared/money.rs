//! Денежные значения: разбор ячеек выгрузки и хранение Decimal в SQLite как TEXT

use rust_decimal::prelude::*;

/// Разобрать число из ячейки выгрузки, никогда не падая
///
/// Пустое или нераспознанное значение даёт 0. Понимает префиксы валют (R$, $),
/// разделители тысяч и запятую как десятичный разделитель ("1.234,56", "1,234.56", "5309,00").
pub fn parse_decimal_lenient(raw: &str) -> Decimal {
    let mut s: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    for prefix in ["R$", "$"] {
        if let Some(rest) = s.strip_prefix(prefix) {
            s = rest.to_string();
        }
    }
    if s.is_empty() {
        return Decimal::ZERO;
    }

    let last_dot = s.rfind('.');
    let last_comma = s.rfind(',');
    let normalized = match (last_dot, last_comma) {
        (Some(dot), Some(comma)) if comma > dot => s.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => s.replace(',', ""),
        (None, Some(_)) if s.matches(',').count() > 1 => s.replace(',', ""),
        (None, Some(_)) => s.replace(',', "."),
        (Some(_), None) if s.matches('.').count() > 1 => s.replace('.', ""),
        _ => s,
    };

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .unwrap_or(Decimal::ZERO)
}

/// Decimal -> TEXT для БД
pub fn decimal_to_db(value: Decimal) -> String {
    value.normalize().to_string()
}

/// TEXT из БД -> Decimal; битое значение читается как 0
pub fn decimal_from_db(raw: &str, field: &str) -> Decimal {
    match Decimal::from_str(raw.trim()) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Invalid decimal '{}' in column {}: {}", raw, field, e);
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_decimal_lenient("50"), dec("50"));
        assert_eq!(parse_decimal_lenient(" 3.5 "), dec("3.5"));
        assert_eq!(parse_decimal_lenient("-2"), dec("-2"));
    }

    #[test]
    fn comma_decimal_separator() {
        assert_eq!(parse_decimal_lenient("5309,00"), dec("5309"));
        assert_eq!(parse_decimal_lenient("R$ 1.234,56"), dec("1234.56"));
        assert_eq!(parse_decimal_lenient("1,234.56"), dec("1234.56"));
        assert_eq!(parse_decimal_lenient("1.234.567"), dec("1234567"));
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(parse_decimal_lenient(""), Decimal::ZERO);
        assert_eq!(parse_decimal_lenient("   "), Decimal::ZERO);
        assert_eq!(parse_decimal_lenient("n/a"), Decimal::ZERO);
        assert_eq!(parse_decimal_lenient("R$"), Decimal::ZERO);
    }

    #[test]
    fn db_text_is_canonical() {
        assert_eq!(decimal_to_db(dec("25.00")), "25");
        assert_eq!(decimal_from_db("12.50", "unit_cost"), dec("12.5"));
        assert_eq!(decimal_from_db("oops", "unit_cost"), Decimal::ZERO);
    }
}
