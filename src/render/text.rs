//! Width estimation and line wrapping for the builtin Helvetica face.

use crate::foundation::core::CM_PER_PT;

/// Line advance as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.15;

// Helvetica advance widths for ASCII 0x20..=0x7E, in 1/1000 em.
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];
const FALLBACK_WIDTH: u16 = 556;

fn char_width_em(c: char) -> f64 {
    let w = match c {
        ' '..='~' => HELVETICA_ASCII[c as usize - 0x20],
        _ => FALLBACK_WIDTH,
    };
    f64::from(w) / 1000.0
}

/// Estimated rendered width of `text` at `size_pt`, in centimeters.
pub fn text_width_cm(text: &str, size_pt: f32) -> f64 {
    let em: f64 = text.chars().map(char_width_em).sum();
    em * f64::from(size_pt) * CM_PER_PT
}

pub fn line_height_cm(size_pt: f32) -> f64 {
    f64::from(size_pt) * CM_PER_PT * LINE_HEIGHT_FACTOR
}

/// Greedy word wrap. Words wider than `max_width_cm` are split by character.
///
/// Always returns at least one line (possibly empty).
pub fn wrap_lines(text: &str, size_pt: f32, max_width_cm: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width_cm(&candidate, size_pt) <= max_width_cm {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if text_width_cm(word, size_pt) <= max_width_cm {
            current = word.to_string();
            continue;
        }
        for c in word.chars() {
            current.push(c);
            if current.chars().count() > 1 && text_width_cm(&current, size_pt) > max_width_cm {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(c);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
