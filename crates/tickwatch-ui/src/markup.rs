//! Inline text markup.
//!
//! Supported tags, each closed by `[/name]`:
//!
//! | Tag | Effect |
//! |-----|--------|
//! | `[b]` | bold |
//! | `[i]` | italic |
//! | `[u]` | underline |
//! | `[color=#rrggbb]` | foreground color (`#rgb` and `#rrggbbaa` also accepted) |
//! | `[size=N]` | accepted for compatibility; cells have a fixed size |
//!
//! Literal brackets and ampersands are written `&bl;`, `&br;` and `&amp;`.
//! A `]` outside a tag and an `&` that starts no known escape are literal.

use std::fmt;

use tickwatch_engine::paint::{Color, Style};

// ── Span ──────────────────────────────────────────────────────────────────

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self { text: text.into(), style }
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Concatenated text of `spans` without styling.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// Total width of `spans` in cells.
pub fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(Span::width).sum()
}

// ── MarkupError ───────────────────────────────────────────────────────────

/// A markup parse error. `column` is 1-based and counts characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupError {
    pub column: usize,
    pub message: String,
}

impl MarkupError {
    fn new(column: usize, message: impl Into<String>) -> Self {
        Self { column, message: message.into() }
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "markup error at column {}: {}", self.column, self.message)
    }
}

impl std::error::Error for MarkupError {}

// ── parser ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tag {
    Bold,
    Italic,
    Underline,
    Color(Color),
    Size,
}

impl Tag {
    fn name(self) -> &'static str {
        match self {
            Tag::Bold => "b",
            Tag::Italic => "i",
            Tag::Underline => "u",
            Tag::Color(_) => "color",
            Tag::Size => "size",
        }
    }

    fn apply(self, style: Style) -> Style {
        match self {
            Tag::Bold => style.bold(),
            Tag::Italic => style.italic(),
            Tag::Underline => style.underline(),
            Tag::Color(c) => style.fg(c),
            Tag::Size => style,
        }
    }

    fn parse(body: &str, column: usize) -> Result<Tag, MarkupError> {
        let (name, value) = match body.split_once('=') {
            Some((n, v)) => (n.trim(), Some(v.trim())),
            None => (body.trim(), None),
        };

        match (name, value) {
            ("b", None) => Ok(Tag::Bold),
            ("i", None) => Ok(Tag::Italic),
            ("u", None) => Ok(Tag::Underline),
            ("color", Some(v)) => Color::from_hex(v)
                .map(Tag::Color)
                .ok_or_else(|| MarkupError::new(column, format!("invalid color '{v}'"))),
            ("size", Some(v)) => {
                // Unit suffixes such as `sp` or `px` are tolerated.
                let number = v.trim_end_matches(|c: char| c.is_ascii_alphabetic());
                match number.parse::<f32>() {
                    Ok(n) if n.is_finite() && n > 0.0 => Ok(Tag::Size),
                    _ => Err(MarkupError::new(column, format!("invalid size '{v}'"))),
                }
            }
            ("b" | "i" | "u", Some(_)) => {
                Err(MarkupError::new(column, format!("tag '{name}' takes no value")))
            }
            ("color" | "size", None) => {
                Err(MarkupError::new(column, format!("tag '{name}' needs a value")))
            }
            _ => Err(MarkupError::new(column, format!("unknown tag '{name}'"))),
        }
    }
}

const ESCAPES: [(&str, char); 3] = [("&bl;", '['), ("&br;", ']'), ("&amp;", '&')];

/// Parses `src` into styled spans.
///
/// Adjacent runs with the same style are merged and empty runs dropped.
pub fn parse(src: &str) -> Result<Vec<Span>, MarkupError> {
    let mut spans: Vec<Span> = Vec::new();
    let mut stack: Vec<(Tag, usize)> = Vec::new();
    let mut text = String::new();

    let style_of = |stack: &[(Tag, usize)]| stack.iter().fold(Style::new(), |s, (t, _)| t.apply(s));

    let mut column = 1;
    let mut rest = src;
    while let Some(ch) = rest.chars().next() {
        match ch {
            '[' => {
                let Some(end) = rest.find(']') else {
                    return Err(MarkupError::new(column, "unterminated tag"));
                };
                let body = &rest[1..end];

                push_span(&mut spans, &mut text, style_of(&stack));
                if let Some(name) = body.strip_prefix('/') {
                    let name = name.trim();
                    match stack.pop() {
                        Some((tag, _)) if tag.name() == name => {}
                        Some((tag, _)) => {
                            return Err(MarkupError::new(
                                column,
                                format!("'[/{name}]' closes '[{}]'", tag.name()),
                            ));
                        }
                        None => {
                            return Err(MarkupError::new(column, format!("'[/{name}]' was never opened")));
                        }
                    }
                } else {
                    stack.push((Tag::parse(body, column)?, column));
                }

                column += rest[..=end].chars().count();
                rest = &rest[end + 1..];
            }
            '&' => {
                let escape = ESCAPES.iter().find(|(pat, _)| rest.starts_with(pat));
                let (len, out) = match escape {
                    Some((pat, out)) => (pat.len(), *out),
                    None => (1, '&'),
                };
                text.push(out);
                column += rest[..len].chars().count();
                rest = &rest[len..];
            }
            _ => {
                text.push(ch);
                column += 1;
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    if let Some((tag, col)) = stack.last() {
        return Err(MarkupError::new(*col, format!("'[{}]' is never closed", tag.name())));
    }
    push_span(&mut spans, &mut text, Style::new());
    Ok(spans)
}

/// Parses `src`, falling back to the raw source as one unstyled span.
pub fn parse_lossy(src: &str) -> Vec<Span> {
    parse(src).unwrap_or_else(|e| {
        log::warn!("{e} in {src:?}; showing it as plain text");
        vec![Span::new(src, Style::new())]
    })
}

/// Escapes `text` so it parses back to itself.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '[' => out.push_str("&bl;"),
            ']' => out.push_str("&br;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_span(spans: &mut Vec<Span>, text: &mut String, style: Style) {
    if text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => spans.push(Span::new(text.as_str(), style)),
    }
    text.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[Span]) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    // ── tags ──────────────────────────────────────────────────────────────

    #[test]
    fn plain_text_is_one_span() {
        let spans = parse("12:34:56").unwrap();
        assert_eq!(spans, [Span::new("12:34:56", Style::new())]);
    }

    #[test]
    fn bold_hours() {
        let spans = parse("[b]09[/b]:05:07").unwrap();
        assert_eq!(texts(&spans), ["09", ":05:07"]);
        assert!(spans[0].style.bold);
        assert!(!spans[1].style.bold);
    }

    #[test]
    fn colored_centiseconds() {
        let spans = parse("00:01.[color=#7a7f87]50[/color]").unwrap();
        assert_eq!(texts(&spans), ["00:01.", "50"]);
        assert_eq!(spans[1].style.fg, Color::from_hex("#7a7f87"));
    }

    #[test]
    fn nested_tags_accumulate() {
        let spans = parse("[b][i]x[/i]y[/b]").unwrap();
        assert!(spans[0].style.bold && spans[0].style.italic);
        assert!(spans[1].style.bold && !spans[1].style.italic);
    }

    #[test]
    fn size_is_accepted_without_visual_effect() {
        let spans = parse("[size=20sp]big[/size] small").unwrap();
        assert_eq!(spans, [Span::new("big small", Style::new())]);
    }

    #[test]
    fn whitespace_inside_tags_is_ignored() {
        assert!(parse("[ color = #fff ]x[/ color ]").is_ok());
    }

    // ── escapes ───────────────────────────────────────────────────────────

    #[test]
    fn escapes_decode() {
        let spans = parse("&bl;a&br; &amp; b & c]").unwrap();
        assert_eq!(plain_text(&spans), "[a] & b & c]");
    }

    #[test]
    fn escape_round_trips_through_parse() {
        let raw = "[b] & [/x]";
        assert_eq!(plain_text(&parse(&escape(raw)).unwrap()), raw);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn unknown_tag() {
        let err = parse("ab[blink]c[/blink]").unwrap_err();
        assert_eq!(err.column, 3);
        assert!(err.message.contains("blink"));
    }

    #[test]
    fn mismatched_close() {
        let err = parse("[b]x[/i]").unwrap_err();
        assert_eq!(err.column, 5);
    }

    #[test]
    fn close_without_open() {
        assert!(parse("x[/b]").is_err());
    }

    #[test]
    fn unclosed_tag_points_at_opener() {
        let err = parse("a[u]b").unwrap_err();
        assert_eq!(err.column, 2);
        assert!(err.to_string().starts_with("markup error at column 2"));
    }

    #[test]
    fn unterminated_tag() {
        assert!(parse("x[b").is_err());
    }

    #[test]
    fn bad_values() {
        assert!(parse("[color=#zzz]x[/color]").is_err());
        assert!(parse("[size=-3]x[/size]").is_err());
        assert!(parse("[b=1]x[/b]").is_err());
        assert!(parse("[color]x[/color]").is_err());
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let err = parse("éé[nope]").unwrap_err();
        assert_eq!(err.column, 3);
    }

    #[test]
    fn lossy_falls_back_to_source() {
        assert_eq!(parse_lossy("[b]oops"), [Span::new("[b]oops", Style::new())]);
    }

    #[test]
    fn width_counts_visible_cells() {
        assert_eq!(spans_width(&parse("[b]09[/b]:05:07").unwrap()), 8);
    }
}
