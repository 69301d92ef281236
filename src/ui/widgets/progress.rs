#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStyle {
    /// Thin rule, used for the intro line
    Line,
    Blocks,
}

/// Horizontal fill driven by a ratio in 0..=1.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    ratio: f64,
    width: u16,
    label: String,
    style: ProgressStyle,
    show_percent: bool,
}

impl ProgressBar {
    pub fn new(width: u16) -> Self {
        Self {
            ratio: 0.0,
            width: width.max(1),
            label: String::new(),
            style: ProgressStyle::Blocks,
            show_percent: true,
        }
    }

    /// A bare rule that grows from the middle, like the intro line.
    pub fn line(width: u16) -> Self {
        Self {
            style: ProgressStyle::Line,
            show_percent: false,
            ..Self::new(width)
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn set(&mut self, ratio: f64) {
        self.ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let width = self.width as usize;
        let filled = ((self.ratio * width as f64).round() as usize).min(width);

        let bar = match (self.style, supports_unicode) {
            (ProgressStyle::Line, unicode) => {
                // centered: grows outwards from the middle
                let rule = if unicode { "─" } else { "-" };
                let pad = (width - filled) / 2;
                format!(
                    "{}{}{}",
                    " ".repeat(pad),
                    rule.repeat(filled),
                    " ".repeat(width - filled - pad)
                )
            }
            (ProgressStyle::Blocks, true) => {
                format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
            }
            (ProgressStyle::Blocks, false) => {
                format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
            }
        };

        let mut out = String::new();
        if !self.label.is_empty() {
            out.push_str(&self.label);
            out.push(' ');
        }
        out.push_str(&bar);
        if self.show_percent {
            out.push_str(&format!("  {:>3}%", (self.ratio * 100.0).round() as u32));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_render_percent() {
        let mut bar = ProgressBar::new(10).with_label("intro");
        bar.set(0.5);
        let rendered = bar.render(true);
        assert!(rendered.starts_with("intro "));
        assert!(rendered.contains("█████░░░░░"));
        assert!(rendered.ends_with(" 50%"));
    }

    #[test]
    fn ascii_blocks_snapshot() {
        let mut bar = ProgressBar::new(10).with_label("intro");
        bar.set(0.5);
        insta::assert_snapshot!(bar.render(false), @"intro #####.....   50%");
    }

    #[test]
    fn line_grows_from_the_middle() {
        let mut bar = ProgressBar::line(10);
        bar.set(0.4);
        assert_eq!(bar.render(false), "   ----   ");
        bar.set(1.0);
        assert_eq!(bar.render(true), "─".repeat(10));
    }

    #[test]
    fn ratio_is_clamped() {
        let mut bar = ProgressBar::new(4);
        bar.set(3.0);
        assert!(bar.render(false).ends_with("100%"));
        bar.set(f64::NAN);
        assert!(bar.render(false).starts_with("...."));
    }
}
