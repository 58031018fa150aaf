use crate::{
    config::EngineConfig,
    error::{ArtError, Result},
    models::{AsciiRequest, BorderStyle, ShapeKind},
};
use std::sync::Arc;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const FILLED: char = '█';
const EMPTY: char = ' ';

/// Interior width of the fixed `text_art` frame, and the margin before the text.
const TEXT_ART_INTERIOR: usize = 22;
const TEXT_ART_MARGIN: usize = 3;

struct BorderGlyphs {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    rule: &'static str,
    side: &'static str,
}

impl BorderStyle {
    fn glyphs(&self) -> BorderGlyphs {
        match self {
            BorderStyle::Simple => BorderGlyphs {
                top_left: "─",
                top_right: "─",
                bottom_left: "─",
                bottom_right: "─",
                rule: "─",
                side: "│",
            },
            BorderStyle::Double => BorderGlyphs {
                top_left: "═",
                top_right: "═",
                bottom_left: "═",
                bottom_right: "═",
                rule: "═",
                side: "║",
            },
            BorderStyle::Fancy => BorderGlyphs {
                top_left: "╔",
                top_right: "╗",
                bottom_left: "╚",
                bottom_right: "╝",
                rule: "═",
                side: "║",
            },
        }
    }
}

#[derive(Clone)]
pub struct AsciiGenerator {
    config: Arc<EngineConfig>,
}

impl AsciiGenerator {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    pub fn render(&self, request: &AsciiRequest) -> Result<String> {
        match request {
            AsciiRequest::Border(params) => Ok(self.border(&params.text, params.border_style)),
            AsciiRequest::TextArt(params) => Ok(self.text_art(&params.text)),
            AsciiRequest::Shape(params) => self.shape(params.shape, params.size),
            AsciiRequest::Mosaic(params) => self.mosaic(&params.grid, &params.separator),
        }
    }

    /// Frame `text` in a border. Every output line has the same display width.
    pub fn border(&self, text: &str, style: BorderStyle) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        let glyphs = style.glyphs();

        // sides plus one column of padding on each
        let rule = glyphs.rule.repeat(width + 2);
        let top = format!("{}{}{}", glyphs.top_left, rule, glyphs.top_right);
        let bottom = format!("{}{}{}", glyphs.bottom_left, rule, glyphs.bottom_right);

        let mut out = Vec::with_capacity(lines.len() + 2);
        out.push(top);
        for line in lines {
            out.push(format!(
                "{} {} {}",
                glyphs.side,
                pad_to_width(line, width),
                glyphs.side
            ));
        }
        out.push(bottom);
        out.join("\n")
    }

    /// Fixed 26-column frame around a single line of text.
    ///
    /// Only the first line of `text` is drawn; it is cut to fit the frame.
    pub fn text_art(&self, text: &str) -> String {
        let field = TEXT_ART_INTERIOR - TEXT_ART_MARGIN;
        let rule = "═".repeat(TEXT_ART_INTERIOR);
        let blank = " ".repeat(TEXT_ART_INTERIOR);
        let first_line = text.split('\n').next().unwrap_or("");

        [
            format!("  ╔{}╗", rule),
            format!("  ║{}║", blank),
            format!(
                "  ║{}{}║",
                " ".repeat(TEXT_ART_MARGIN),
                pad_to_width(&truncate_to_width(first_line, field), field)
            ),
            format!("  ║{}║", blank),
            format!("  ╚{}╝", rule),
        ]
        .join("\n")
    }

    pub fn mosaic(&self, grid: &[Vec<String>], separator: &str) -> Result<String> {
        if grid.is_empty() || grid.iter().all(|row| row.is_empty()) {
            return Err(ArtError::validation("mosaic grid must contain at least one cell"));
        }
        let out = grid
            .iter()
            .map(|row| row.join(separator))
            .collect::<Vec<_>>()
            .join("\n");
        if out.trim().is_empty() {
            return Err(ArtError::validation("mosaic grid has no visible glyphs"));
        }
        Ok(out)
    }

    pub fn shape(&self, kind: ShapeKind, size: usize) -> Result<String> {
        if size == 0 || size > self.config.max_shape_size {
            return Err(ArtError::validation(format!(
                "shape size must be between 1 and {}, got {}",
                self.config.max_shape_size, size
            )));
        }

        let mid = (size / 2) as isize;
        let last = size - 1;
        let filled = |x: usize, y: usize| -> bool {
            match kind {
                ShapeKind::Box => x == 0 || y == 0 || x == last || y == last,
                ShapeKind::Diamond => {
                    (x as isize - mid).abs() + (y as isize - mid).abs() <= mid
                }
                ShapeKind::Cross => x == y || x == last - y,
            }
        };

        Ok((0..size)
            .map(|y| {
                (0..size)
                    .map(|x| if filled(x, y) { FILLED } else { EMPTY })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - current))
}

fn truncate_to_width(s: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> AsciiGenerator {
        AsciiGenerator::new(Arc::new(EngineConfig::default()))
    }

    #[test]
    fn test_border_simple_two_lines() {
        let out = generator().border("ab\ncd", BorderStyle::Simple);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "──────");
        assert_eq!(lines[1], "│ ab │");
        assert_eq!(lines[2], "│ cd │");
        assert!(lines.iter().all(|l| l.chars().count() == 6));
    }

    #[test]
    fn test_border_pads_short_lines() {
        let out = generator().border("hello\nhi", BorderStyle::Fancy);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "╔═══════╗");
        assert_eq!(lines[2], "║ hi    ║");
        assert_eq!(lines[3], "╚═══════╝");
    }

    #[test]
    fn test_border_empty_text() {
        let out = generator().border("", BorderStyle::Double);
        assert_eq!(out, "════\n║  ║\n════");
    }

    #[test]
    fn test_border_wide_glyphs_align() {
        let out = generator().border("日本\nab", BorderStyle::Simple);
        let widths: Vec<usize> = out.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_text_art_fixed_frame() {
        let short = generator().text_art("hi");
        let long = generator().text_art("a very long line of text that overflows");
        let short_lines: Vec<&str> = short.lines().collect();
        let long_lines: Vec<&str> = long.lines().collect();
        assert_eq!(short_lines.len(), 5);
        assert_eq!(short_lines[2], format!("  ║   hi{}║", " ".repeat(17)));
        for lines in [&short_lines, &long_lines] {
            assert!(lines.iter().all(|l| l.chars().count() == 26));
        }
        assert!(long_lines[2].ends_with("a very long line of║"));
        assert!(!long_lines[2].contains("overflows"));
    }

    #[test]
    fn test_mosaic() {
        let grid = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ];
        assert_eq!(generator().mosaic(&grid, "✦").unwrap(), "a✦b\nc✦d");
        assert!(generator().mosaic(&[], "✦").is_err());
    }

    #[test]
    fn test_mosaic_blank_cells_rejected() {
        let blank = vec![vec![String::new(), String::new()]];
        assert!(generator().mosaic(&blank, "").unwrap_err().is_validation());
        assert!(generator().mosaic(&[vec![String::new()], vec![String::new()]], "✦").is_err());
        assert_eq!(generator().mosaic(&blank, "✦").unwrap(), "✦");
    }

    #[test]
    fn test_text_art_keeps_first_line() {
        let out = generator().text_art("first\nsecond");
        assert!(out.contains("first"));
        assert!(!out.contains("second"));
    }

    #[test]
    fn test_shape_box() {
        let out = generator().shape(ShapeKind::Box, 4).unwrap();
        assert_eq!(out, "████\n█  █\n█  █\n████");
    }

    #[test]
    fn test_shape_diamond() {
        let out = generator().shape(ShapeKind::Diamond, 5).unwrap();
        let rows: Vec<Vec<char>> = out.lines().map(|l| l.chars().collect()).collect();
        let expected = ["  █  ", " ███ ", "█████", " ███ ", "  █  "];
        assert_eq!(out.lines().collect::<Vec<_>>(), expected);
        for (x, y) in [(0, 0), (4, 0), (0, 4), (4, 4)] {
            assert_eq!(rows[y][x], EMPTY);
        }
        for (x, y) in [(2, 2), (1, 2), (3, 2), (2, 1), (2, 3), (0, 2), (2, 0)] {
            assert_eq!(rows[y][x], FILLED);
        }
    }

    #[test]
    fn test_shape_cross() {
        let out = generator().shape(ShapeKind::Cross, 3).unwrap();
        assert_eq!(out, "█ █\n █ \n█ █");
    }

    #[test]
    fn test_shape_size_limits() {
        assert!(generator().shape(ShapeKind::Box, 0).is_err());
        assert!(generator().shape(ShapeKind::Box, 65).is_err());
        assert_eq!(generator().shape(ShapeKind::Diamond, 1).unwrap(), "█");
    }
}
