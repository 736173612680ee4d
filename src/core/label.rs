//! Structured label decoration
//!
//! A marked label is kept as `{prefix, marked, suffix}` instead of edited
//! markup, so marking and unmarking are pure data transforms and a label
//! text repeated elsewhere in an element can never be decorated by mistake.

use std::fmt;

/// Opening tag wrapped around the marked character when rendered.
pub const UNDERLINE_OPEN: &str = "<u>";
/// Closing tag wrapped around the marked character when rendered.
pub const UNDERLINE_CLOSE: &str = "</u>";

/// A label split around its mnemonic character
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarkedLabel {
    /// Text before the marked character
    pub prefix: String,
    /// The marked character
    pub marked: char,
    /// Text after the marked character
    pub suffix: String,
}

impl MarkedLabel {
    /// Split `label` around the character at `char_index`.
    ///
    /// Returns `None` when the index is past the end of the label.
    pub fn split(label: &str, char_index: usize) -> Option<Self> {
        let (byte_index, marked) = label.char_indices().nth(char_index)?;
        let rest = byte_index + marked.len_utf8();

        Some(Self {
            prefix: label[..byte_index].to_string(),
            marked,
            suffix: label[rest..].to_string(),
        })
    }

    /// The undecorated label.
    pub fn plain(&self) -> String {
        format!("{}{}{}", self.prefix, self.marked, self.suffix)
    }

    /// Char index of the marked character.
    pub fn char_index(&self) -> usize {
        self.prefix.chars().count()
    }
}

impl fmt::Display for MarkedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.prefix, UNDERLINE_OPEN, self.marked, UNDERLINE_CLOSE, self.suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_middle() {
        let label = MarkedLabel::split("Save", 1).unwrap();
        assert_eq!(label.prefix, "S");
        assert_eq!(label.marked, 'a');
        assert_eq!(label.suffix, "ve");
        assert_eq!(label.to_string(), "S<u>a</u>ve");
        assert_eq!(label.plain(), "Save");
    }

    #[test]
    fn test_split_multibyte() {
        let label = MarkedLabel::split("Éditer", 1).unwrap();
        assert_eq!(label.prefix, "É");
        assert_eq!(label.marked, 'd');
        assert_eq!(label.char_index(), 1);
        assert_eq!(label.plain(), "Éditer");
    }

    #[test]
    fn test_split_out_of_range() {
        assert!(MarkedLabel::split("Go", 2).is_none());
        assert!(MarkedLabel::split("", 0).is_none());
    }
}
