//! Character counter for the details footer.

use lipgloss_extras::prelude::*;

/// Counter styling.
#[derive(Debug, Clone)]
pub struct Model {
    /// Style for the counter within bounds.
    pub style: Style,
    /// Style once the length exceeds the maximum.
    pub overflow_style: Style,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            style: Style::new().foreground(Color::from("240")),
            overflow_style: Style::new().foreground(Color::from("9")),
        }
    }
}

impl Model {
    /// Creates a counter with default styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `len` against an optional maximum: `"5 / 20"` with a
    /// maximum, a bare count without one.
    pub fn view(&self, len: usize, max: Option<usize>) -> String {
        let text = match max {
            Some(max) => format!("{} / {}", len, max),
            None => len.to_string(),
        };
        let over = max.is_some_and(|m| len > m);
        if over {
            self.overflow_style.render(&text)
        } else {
            self.style.render(&text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_len_against_max() {
        let c = Model::new();
        assert_eq!(c.view(5, Some(5)), c.style.render("5 / 5"));
        assert_eq!(c.view(3, None), c.style.render("3"));
    }

    #[test]
    fn overflow_switches_style() {
        let c = Model::new();
        assert_eq!(c.view(6, Some(5)), c.overflow_style.render("6 / 5"));
    }
}
