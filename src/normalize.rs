//! Word-to-number normalization for raw instructions.
//!
//! Rewrites standalone cardinal number words ("five", "twenty five",
//! "twenty-five") into digit tokens so downstream parsing only ever sees
//! numeric literals. Tokens that are not number words pass through verbatim,
//! and digit tokens are never rewritten, which makes the transform idempotent.

// ---------------------------------------------------------------------------
// Word tables
// ---------------------------------------------------------------------------

const UNITS: &[(&str, u32)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: &[(&str, u32)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

fn unit_value(word: &str) -> Option<u32> {
    UNITS.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

fn tens_value(word: &str) -> Option<u32> {
    TENS.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

/// Value of a single token: a unit/teen word, a tens word, or a hyphenated
/// tens-unit compound like "forty-two".
fn word_value(word: &str) -> Option<u32> {
    if let Some(v) = unit_value(word) {
        return Some(v);
    }
    if let Some(v) = tens_value(word) {
        return Some(v);
    }
    if let Some((tens, unit)) = word.split_once('-') {
        if let (Some(t), Some(u)) = (tens_value(tens), unit_value(unit)) {
            if u >= 1 && u <= 9 {
                return Some(t + u);
            }
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Replace every standalone word-form cardinal (zero through ninety-nine)
/// with its digit string. Tokens are matched case-insensitively; everything
/// else is kept as written. Output tokens are rejoined with single spaces.
pub fn normalize(text: &str) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());

    let mut i = 0;
    while i < tokens.len() {
        let lower = tokens[i].to_lowercase();

        // Two-token compound: "twenty five" is one number, not two.
        if let Some(tens) = tens_value(&lower) {
            if let Some(next) = tokens.get(i + 1) {
                if let Some(unit) = unit_value(&next.to_lowercase()) {
                    if unit >= 1 && unit <= 9 {
                        out.push((tens + unit).to_string());
                        i += 2;
                        continue;
                    }
                }
            }
            out.push(tens.to_string());
            i += 1;
            continue;
        }

        match word_value(&lower) {
            Some(value) => out.push(value.to_string()),
            None => out.push(tokens[i].to_string()),
        }
        i += 1;
    }

    out.join(" ")
}
