use crate::types::Divisor;

const UNITS: &[&str] = &["", "k", "M", "G", "T", "P", "E", "Z", "Y"];

/// Format a byte count into a compact size string scaled by `divisor`.
///
/// Values below ten units keep one decimal, rounded half up; larger values
/// are shown as whole units. Only meant for display: compare and sort on the
/// raw byte counts.
pub fn format_size(bytes: u64, divisor: Divisor) -> String {
    if bytes == 0 {
        return "0.0".to_string();
    }

    let base = divisor.value();
    if base == 1 {
        return format!("{:3}", bytes);
    }

    let mut value = bytes;
    let mut remainder = 0;
    let mut exponent = 0usize;
    while value >= base {
        remainder = value % base;
        value /= base;
        exponent += 1;
    }

    let unit = match UNITS.get(exponent) {
        Some(unit) => (*unit).to_string(),
        None => format!("E{}", 3 * exponent),
    };

    if value < 10 {
        // tenths = floor((value + remainder / base + 0.05) * 10)
        let tenths = value * 10 + (20 * remainder + base) / (2 * base);
        format!("{:>3}{}", format!("{}.{}", tenths / 10, tenths % 10), unit)
    } else {
        format!("{:3}{}", value, unit)
    }
}

/// Share of `total` represented by `part`, in percent; zero when `total` is zero
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / (total as f64 / 100.0)
}
