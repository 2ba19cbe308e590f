//! Formatting utilities for terminal output

use crate::core::{Guess, MYSTERY_LETTER, Pattern};

/// Format a pattern with spaced cells, blanks shown as underscores
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    let mut result = String::with_capacity(pattern.len() * 2);
    for (i, &cell) in pattern.cells().iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(if cell == MYSTERY_LETTER {
            '_'
        } else {
            char::from(cell)
        });
    }
    result
}

/// Short human description of a guess
#[must_use]
pub fn guess_label(guess: &Guess) -> String {
    match guess {
        Guess::Letter(letter) => format!("letter {}", char::from(*letter)),
        Guess::Word(word) => format!("word {word}"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_pattern_marks_blanks() {
        let pattern = Pattern::parse("a--le").unwrap();
        assert_eq!(spaced_pattern(&pattern), "A _ _ L E");
    }

    #[test]
    fn spaced_pattern_single_cell() {
        let pattern = Pattern::mystery(1);
        assert_eq!(spaced_pattern(&pattern), "_");
    }

    #[test]
    fn guess_labels() {
        assert_eq!(guess_label(&Guess::Letter(b'E')), "letter E");
        assert_eq!(guess_label(&Guess::Word("CAT".into())), "word CAT");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(3.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
