//! Утилиты форматирования чисел для таблиц и осей графиков

use contracts::shared::number_format::format_grouped;

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    format_grouped(value, decimals, ' ')
}

/// Денежное значение с 2 знаками после запятой
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Подпись деления оси: без дробной части, если она нулевая
pub fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format_number_int(value)
    } else {
        // деления кратны 1, 2 или 5, умноженным на степень десяти
        let decimals = (-value.abs().log10().floor()).max(1.0) as usize;
        format_number_with_decimals(value, decimals.min(6))
    }
}
