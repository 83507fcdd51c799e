//! Text formatting helpers shared by the report sections.

/// Capitalize the first letter of each word: "rajasthan" → "Rajasthan".
///
/// A word starts after any non-alphabetic character, so "semi-arid"
/// becomes "Semi-Arid".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        at_word_start = !ch.is_alphabetic();
    }
    out
}

/// Round to a whole number and group thousands: 4233.3 → "4,233".
pub fn format_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if grouped == "0" {
        // "-0" from rounding tiny negatives
        return grouped;
    }
    format!("{}{}", sign, grouped)
}

/// "2020, 2021", or "None" for an empty list.
pub fn join_years(years: &[u16]) -> String {
    if years.is_empty() {
        return "None".to_string();
    }
    years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-separated title-cased names: ["rajasthan", "punjab"] → "Rajasthan, Punjab".
pub fn join_titles(names: &[String]) -> String {
    names
        .iter()
        .map(|n| title_case(n))
        .collect::<Vec<_>>()
        .join(", ")
}
