//! Rewrites common speech-recognition mishearings into chess vocabulary.

/// Substitutions, applied in this order. Later entries see the output of earlier ones.
pub const HOMOPHONES: &[(&str, &str)] = &[
    ("night", "knight"),
    ("rock", "rook"),
    ("brook", "rook"),
    ("horse", "knight"),
    ("elephant", "rook"),
    ("route", "rook"),
    ("books", "rooks"),
    ("lights", "knights"),
    ("light", "knight"),
    ("nights", "knights"),
];

/// The fixed homophone table plus optional user corrections appended after it.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    corrections: Vec<(String, String)>,
}

impl Normalizer {
    pub fn new(corrections: Vec<(String, String)>) -> Self {
        let corrections = corrections
            .into_iter()
            .filter(|(wrong, _)| !wrong.is_empty())
            .map(|(wrong, right)| (wrong.to_lowercase(), right.to_lowercase()))
            .collect();
        Self { corrections }
    }

    /// Lower-case `text` and apply every substitution in order.
    pub fn normalize(&self, text: &str) -> String {
        let mut out = text.to_lowercase();
        for (wrong, right) in HOMOPHONES {
            out = replace_outside(&out, wrong, right);
        }
        for (wrong, right) in &self.corrections {
            out = replace_outside(&out, wrong, right);
        }
        out
    }
}

/// [`Normalizer::normalize`] with no user corrections.
pub fn normalize(text: &str) -> String {
    Normalizer::default().normalize(text)
}

/// Replace every occurrence of `wrong` with `right`, except occurrences that already sit
/// inside an occurrence of `right` (`night` in `knight`). This keeps the table idempotent.
fn replace_outside(text: &str, wrong: &str, right: &str) -> String {
    let offsets: Vec<usize> = right.match_indices(wrong).map(|(i, _)| i).collect();

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (at, _) in text.match_indices(wrong) {
        let inside = offsets.iter().any(|&o| {
            at >= o
                && text
                    .get(at - o..)
                    .map_or(false, |tail| tail.starts_with(right))
        });
        if inside {
            continue;
        }
        out.push_str(&text[last..at]);
        out.push_str(right);
        last = at + wrong.len();
    }
    out.push_str(&text[last..]);
    out
}
