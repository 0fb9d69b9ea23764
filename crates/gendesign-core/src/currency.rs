//! Rupiah amount formatting (`id-ID` locale grouping)

/// Groups the integer part with `.` every three digits: `5000000` → `"5.000.000"`.
pub fn format_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// `"Rp 5.000.000"`
pub fn format_rupiah(amount: u64) -> String {
    format!("Rp {}", format_thousands(amount))
}

/// Formats a generated (possibly fractional or negative) cost.
///
/// Rounds to whole rupiah; negative values keep their sign.
pub fn format_rupiah_f64(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp -".to_string();
    }
    let rounded = amount.round();
    let magnitude = format_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("Rp -{magnitude}")
    } else {
        format!("Rp {magnitude}")
    }
}
