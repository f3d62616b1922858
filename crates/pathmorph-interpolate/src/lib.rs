//! Scalar string interpolation
//!
//! Builds a `(t) -> String` blend from two strings by numerically
//! interpolating the numeric tokens embedded in them and splicing the
//! literal text around them. The second string supplies the literal
//! structure; the first only contributes starting values for paired
//! numbers. Knows nothing about SVG paths.

use std::ops::Range;

/// One spliced piece of the output string.
#[derive(Debug, Clone)]
enum Part {
    /// Text copied through unchanged.
    Literal(String),
    /// A numeric token blended between two endpoint values.
    Lerp { from: f64, to: f64 },
}

/// A prepared interpolation between two strings.
///
/// Construction pairs the numeric tokens of both inputs in order. Numbers
/// that are equal on both sides, and numbers in the target with no partner
/// in the source, fold into the target's literal spelling — so an unchanged
/// string round-trips byte for byte at every `t`.
#[derive(Debug, Clone)]
pub struct StringInterpolator {
    parts: Vec<Part>,
}

impl StringInterpolator {
    pub fn new(a: &str, b: &str) -> Self {
        let a_numbers: Vec<f64> = scan_numbers(a)
            .into_iter()
            .map(|(_, value)| value)
            .collect();

        let mut parts: Vec<Part> = Vec::new();
        let mut cursor = 0;
        for (index, (range, to)) in scan_numbers(b).into_iter().enumerate() {
            push_literal(&mut parts, &b[cursor..range.start]);
            cursor = range.end;
            match a_numbers.get(index) {
                Some(&from) if from != to => parts.push(Part::Lerp { from, to }),
                _ => push_literal(&mut parts, &b[range]),
            }
        }
        push_literal(&mut parts, &b[cursor..]);

        StringInterpolator { parts }
    }

    /// Evaluate the blend at `t`. Values outside [0, 1] extrapolate
    /// linearly; there is no clamping.
    pub fn eval(&self, t: f64) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Lerp { from, to } => {
                    let value = from + (to - from) * t;
                    out.push_str(&value.to_string());
                }
            }
        }
        out
    }
}

/// Append literal text, merging with a preceding literal part.
fn push_literal(parts: &mut Vec<Part>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Part::Literal(prev)) = parts.last_mut() {
        prev.push_str(text);
    } else {
        parts.push(Part::Literal(text.to_string()));
    }
}

/// Find every numeric token in `s`: optional sign, integer and/or decimal
/// digits, optional exponent.
fn scan_numbers(s: &str) -> Vec<(Range<usize>, f64)> {
    let bytes = s.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match number_end(bytes, i) {
            Some(end) => {
                let value = s[i..end]
                    .parse::<f64>()
                    .expect("scanned token is a valid float");
                found.push((i..end, value));
                i = end;
            }
            None => i += 1,
        }
    }
    found
}

/// End index of the numeric token starting at `start`, if one starts there.
fn number_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    if matches!(bytes.get(i).copied(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_digits = digit_run(bytes, &mut i);
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        let mut j = i + 1;
        frac_digits = digit_run(bytes, &mut j);
        if int_digits > 0 || frac_digits > 0 {
            i = j;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    // an exponent only counts when at least one digit follows it
    if matches!(bytes.get(i).copied(), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j).copied(), Some(b'+' | b'-')) {
            j += 1;
        }
        if digit_run(bytes, &mut j) > 0 {
            i = j;
        }
    }
    Some(i)
}

fn digit_run(bytes: &[u8], i: &mut usize) -> usize {
    let start = *i;
    while matches!(bytes.get(*i).copied(), Some(b'0'..=b'9')) {
        *i += 1;
    }
    *i - start
}
