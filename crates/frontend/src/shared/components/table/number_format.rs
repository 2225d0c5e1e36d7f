//! Форматирование чисел для таблиц во французском формате: "1 234,56"

/// Форматирует число с разделителем тысяч (пробел), десятичной запятой
/// и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
///
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1 234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (unsigned, None),
    };

    // Пробел каждые 3 цифры с конца целой части
    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*c);
    }

    // "-0,00" не показываем
    let sign = if grouped.chars().all(|c| c == '0' || c == ' ')
        && decimal_part.map_or(true, |d| d.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежное значение: 2 знака после запятой
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_money;
///
/// let formatted = format_money(1234567.89);
/// assert_eq!(formatted, "1 234 567,89");
/// ```
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Процентная ставка без лишних нулей: 5.5 -> "5,5 %", 20.0 -> "20 %"
pub fn format_rate(value: f64) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 1 };
    format!("{} %", format_number_with_decimals(value, decimals))
}
