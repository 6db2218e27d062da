//! Display formatting for prices and category names.
//!
//! This is the only place monetary values are rounded; everything upstream
//! carries unrounded floats.

/// Convert a `-`-separated slug to a display title.
///
/// `"beauty-products"` becomes `"Beauty Products"`.
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a price in euros: comma decimal separator, non-breaking-space
/// thousands grouping, symbol after the amount (`1 234,56 €`).
pub fn format_price(amount: f64) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = rounded
        .split_once('.')
        .unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(*digit);
    }

    let sign = if amount < -0.004 { "-" } else { "" };
    format!("{sign}{grouped},{frac_part}\u{a0}\u{20ac}")
}
