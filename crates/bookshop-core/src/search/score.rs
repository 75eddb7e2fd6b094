//! String similarity scores on a 0-100 scale.
//!
//! Whole-string and substring scores use normalized Levenshtein distance;
//! single-word scores use Jaro-Winkler, which is kinder to short typos. Both
//! come from `strsim`. Every function is pure and deterministic.

use std::collections::BTreeSet;

/// Weight applied to scores computed on rearranged or per-token text.
const UNBASE_SCALE: f64 = 0.95;

/// Weight applied to substring scores when lengths differ noticeably.
const PARTIAL_SCALE: f64 = 0.90;

/// Weight applied to substring scores when one side dwarfs the other.
const LONG_PARTIAL_SCALE: f64 = 0.60;

/// Query words shorter than this are left out of `token_ratio`.
const MIN_TOKEN_CHARS: usize = 2;

/// Lowercase, turn every non-alphanumeric character into a space, and trim.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else {
            out.push(' ');
        }
    }
    out.trim().to_string()
}

fn round(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return if a == b { 100.0 } else { 0.0 };
    }
    100.0 * strsim::normalized_levenshtein(a, b)
}

/// Plain similarity of two strings.
pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    round(similarity(a, b))
}

/// Best similarity of the shorter string against any equally long window of
/// the longer one.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let longer: Vec<char> = longer.chars().collect();
    let width = shorter.chars().count();

    let mut best = 0.0f64;
    for window in longer.windows(width) {
        let window: String = window.iter().collect();
        best = best.max(similarity(shorter, &window));
        if best >= 100.0 {
            break;
        }
    }
    round(best)
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_sort(a: &str, b: &str, partial: bool) -> u8 {
    let (a, b) = (sorted_tokens(a), sorted_tokens(b));
    if partial {
        partial_ratio(&a, &b)
    } else {
        ratio(&a, &b)
    }
}

fn token_set(a: &str, b: &str, partial: bool) -> u8 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }

    let join = |tokens: Vec<&str>| tokens.join(" ");
    let sect = join(tokens_a.intersection(&tokens_b).copied().collect());
    let rest_a = join(tokens_a.difference(&tokens_b).copied().collect());
    let rest_b = join(tokens_b.difference(&tokens_a).copied().collect());
    let combined_a = format!("{} {}", sect, rest_a).trim().to_string();
    let combined_b = format!("{} {}", sect, rest_b).trim().to_string();

    let score = |x: &str, y: &str| {
        if partial {
            partial_ratio(x, y)
        } else {
            ratio(x, y)
        }
    };
    score(&sect, &combined_a)
        .max(score(&sect, &combined_b))
        .max(score(&combined_a, &combined_b))
}

/// Similarity after sorting both strings' tokens.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    token_sort(a, b, false)
}

/// Similarity of the shared tokens plus each side's leftovers.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    token_set(a, b, false)
}

/// Mean, over the words of whichever side has fewer, of each word's best
/// Jaro-Winkler similarity to a word on the other side.
///
/// Single letters (initials such as the "j" in "j r r tolkien") are skipped;
/// a side made only of them scores 0.
pub fn token_ratio(a: &str, b: &str) -> u8 {
    let tokens_a: Vec<&str> = a.split_whitespace().collect();
    let tokens_b: Vec<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }
    let (words, targets) = if tokens_a.len() <= tokens_b.len() {
        (tokens_a, tokens_b)
    } else {
        (tokens_b, tokens_a)
    };

    let scores: Vec<f64> = words
        .iter()
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
        .map(|word| {
            targets
                .iter()
                .map(|other| strsim::jaro_winkler(word, other))
                .fold(0.0, f64::max)
        })
        .collect();
    if scores.is_empty() {
        return 0;
    }
    round(100.0 * scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Combined score used for matching queries against records.
///
/// Both inputs are normalized first. Returns 0 if either side has no
/// alphanumeric content.
pub fn weighted_ratio(query: &str, choice: &str) -> u8 {
    let a = normalize(query);
    let b = normalize(choice);
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let base = f64::from(ratio(&a, &b));
    let token = f64::from(token_ratio(&a, &b)) * UNBASE_SCALE;

    let best = if len_ratio < 1.5 {
        let sort = f64::from(token_sort(&a, &b, false)) * UNBASE_SCALE;
        let set = f64::from(token_set(&a, &b, false)) * UNBASE_SCALE;
        base.max(sort).max(set).max(token)
    } else {
        let scale = if len_ratio > 8.0 {
            LONG_PARTIAL_SCALE
        } else {
            PARTIAL_SCALE
        };
        let partial = f64::from(partial_ratio(&a, &b)) * scale;
        let sort = f64::from(token_sort(&a, &b, true)) * UNBASE_SCALE * scale;
        let set = f64::from(token_set(&a, &b, true)) * UNBASE_SCALE * scale;
        base.max(partial).max(sort).max(set).max(token)
    };
    round(best)
}
