//! Config files give file limits as "512K" or "10M"; the writer counts raw bytes.

const UNITS: [(&str, u64); 4] = [
    ("G", 1024 * 1024 * 1024),
    ("M", 1024 * 1024),
    ("K", 1024),
    ("B", 1),
];

/// Whole numbers with an optional `K`/`M`/`G` (or `KB`/`MB`/`GB`, `B`) suffix, powers of 1024.
///
/// Overflowing, fractional, negative or empty input yields `None`.
#[must_use]
pub fn parse_size(s: &str) -> Option<u64> {
    let upper = s.trim().to_uppercase();
    let digits_end = upper
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(upper.len());
    let (digits, suffix) = upper.split_at(digits_end);
    if digits.is_empty() {
        return None;
    }

    let suffix = suffix.trim();
    let multiplier = if suffix.is_empty() {
        1
    } else {
        let unit = suffix.strip_suffix('B').filter(|u| !u.is_empty()).unwrap_or(suffix);
        UNITS.iter().find(|(name, _)| *name == unit)?.1
    };

    digits.parse::<u64>().ok()?.checked_mul(multiplier)
}

/// Human-readable size for `stats` output.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    for (name, factor) in &UNITS[..3] {
        if bytes >= *factor {
            #[allow(clippy::cast_precision_loss)]
            let scaled = bytes as f64 / *factor as f64;
            return format!("{scaled:.2} {name}B");
        }
    }
    format!("{bytes} B")
}
