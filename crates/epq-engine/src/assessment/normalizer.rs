//! Canonical text form used to match submitted answers against option text.

use std::borrow::Cow;

const INVISIBLE: [char; 4] = ['\u{feff}', '\u{200b}', '\u{200c}', '\u{200d}'];
const MOJIBAKE_MARKERS: [char; 3] = ['\u{e2}', '\u{c3}', '\u{c2}'];
const MAX_PASSES: usize = 8;

/// Sequences left behind when UTF-8 punctuation is decoded as cp1252 and the
/// surrounding text cannot be repaired as a whole.
const MOJIBAKE_SEQUENCES: &[(&str, &str)] = &[
    ("\u{e2}\u{20ac}\u{2122}", "'"),
    ("\u{e2}\u{20ac}\u{2dc}", "'"),
    ("\u{e2}\u{20ac}\u{153}", "\""),
    ("\u{e2}\u{20ac}\u{9d}", "\""),
    ("\u{e2}\u{20ac}\u{201c}", "-"),
    ("\u{e2}\u{20ac}\u{201d}", "-"),
];

/// Trim, collapse whitespace, lowercase, fold curly quotes and dashes to ASCII,
/// and repair cp1252 mojibake. Idempotent.
pub fn normalize_choice_text(value: &str) -> String {
    let mut current = normalize_once(value);
    for _ in 1..MAX_PASSES {
        let next = normalize_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn normalize_once(value: &str) -> String {
    let cleaned = value.replace(INVISIBLE, "");
    let repaired = repair_mojibake(&cleaned);
    let folded: String = repaired.chars().map(fold_punctuation).collect();
    let lowered = folded.to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fold_punctuation(ch: char) -> char {
    match ch {
        '\u{2018}' | '\u{2019}' => '\'',
        '\u{201c}' | '\u{201d}' => '"',
        '\u{2010}' | '\u{2011}' | '\u{2013}' | '\u{2014}' => '-',
        other => other,
    }
}

fn repair_mojibake(value: &str) -> Cow<'_, str> {
    if !value.contains(MOJIBAKE_MARKERS) {
        return Cow::Borrowed(value);
    }

    if let Some(repaired) = reinterpret_as_utf8(value) {
        return Cow::Owned(repaired);
    }

    let mut patched = value.to_string();
    for (broken, replacement) in MOJIBAKE_SEQUENCES {
        if patched.contains(broken) {
            patched = patched.replace(broken, replacement);
        }
    }
    Cow::Owned(patched)
}

/// Undo a UTF-8 -> cp1252 misdecode when every character maps back to a single byte
/// and the bytes form valid UTF-8.
fn reinterpret_as_utf8(value: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(value.len());
    for ch in value.chars() {
        bytes.push(cp1252_byte(ch)?);
    }
    let repaired = String::from_utf8(bytes).ok()?;
    (repaired != value).then_some(repaired)
}

fn cp1252_byte(ch: char) -> Option<u8> {
    let code = u32::from(ch);
    if code <= 0xff {
        return u8::try_from(code).ok();
    }

    let byte = match ch {
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{2c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{160}' => 0x8a,
        '\u{2039}' => 0x8b,
        '\u{152}' => 0x8c,
        '\u{17d}' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{2dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{161}' => 0x9a,
        '\u{203a}' => 0x9b,
        '\u{153}' => 0x9c,
        '\u{17e}' => 0x9e,
        '\u{178}' => 0x9f,
        _ => return None,
    };
    Some(byte)
}
