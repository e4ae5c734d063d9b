//! Fuzzy answer matching

use std::collections::HashMap;

/// Dice coefficient over character bigrams, ignoring whitespace.
///
/// Returns 1.0 for identical strings and 0.0 when either side is shorter
/// than two characters.
pub fn compare_two_strings(first: &str, second: &str) -> f64 {
    let first: Vec<char> = first.chars().filter(|c| !c.is_whitespace()).collect();
    let second: Vec<char> = second.chars().filter(|c| !c.is_whitespace()).collect();

    if first == second {
        return 1.0;
    }
    if first.len() < 2 || second.len() < 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(char, char), usize> = HashMap::new();
    for pair in first.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_default() += 1;
    }

    let mut intersection = 0usize;
    for pair in second.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1]))
            && *count > 0
        {
            *count -= 1;
            intersection += 1;
        }
    }

    (2 * intersection) as f64 / (first.len() + second.len() - 2) as f64
}

/// Remove `<script>` blocks and markup tags, keeping the text between them
pub fn strip_tags(input: &str) -> String {
    let without_scripts = strip_scripts(input);
    let chars: Vec<char> = without_scripts.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '<'
            && let Some(end) = tag_end(&chars, i)
        {
            i = end;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn strip_scripts(input: &str) -> String {
    let lower = input.to_ascii_lowercase();
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    while let Some(offset) = lower[cursor..].find("<script") {
        let start = cursor + offset;
        let Some(open_end) = lower[start..].find('>').map(|o| start + o + 1) else {
            break;
        };
        let Some(close) = lower[open_end..].find("</script>").map(|o| open_end + o) else {
            break;
        };
        out.push_str(&input[cursor..start]);
        cursor = close + "</script>".len();
    }
    out.push_str(&input[cursor..]);
    out
}

/// Index one past the closing `>` of a tag starting at `start`, if it is one.
///
/// A tag is `<`, an optional `/`, a word character, then anything up to `>`
/// where quoted attribute values may contain `>`.
fn tag_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start + 1;
    if chars.get(i) == Some(&'/') {
        i += 1;
    }
    let first = chars.get(i)?;
    if !(first.is_alphanumeric() || *first == '_') {
        return None;
    }
    i += 1;
    while let Some(&c) = chars.get(i) {
        match c {
            '>' => return Some(i + 1),
            '"' | '\'' => {
                let close = chars[i + 1..].iter().position(|&q| q == c)?;
                i += close + 2;
            }
            _ => i += 1,
        }
    }
    None
}
