//! Inline parsing
//!
//! Turns the text of a block into a sequence of [`Span`]s. Parsing starts
//! from a single plain span and applies one pass per syntax, in order: bold,
//! italic, code, images, links. Each pass only rewrites spans that are still
//! plain, so styles never nest.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::Options;
use crate::span::{Span, SpanKind};
use crate::{Error, Result};

static IMAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid image regex")
});

// The optional leading `!` lets image markup be recognised and skipped.
static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid link regex")
});

/// Parse inline Markdown using the default delimiters
pub fn parse_inline(text: &str) -> Result<Vec<Span>> {
    parse_inline_with(text, &Options::default())
}

/// Parse inline Markdown using the delimiters from `options`
pub fn parse_inline_with(text: &str, options: &Options) -> Result<Vec<Span>> {
    let spans = vec![Span::plain(text)];
    let spans = split_delimiter(spans, &options.bold_delimiter, SpanKind::Bold)?;
    let spans = split_delimiter(spans, &options.italic_delimiter, SpanKind::Italic)?;
    let spans = split_delimiter(spans, &options.code_delimiter, SpanKind::Code)?;
    let spans = split_images(spans)?;
    split_links(spans)
}

/// Split every plain span on `delimiter`, styling the enclosed parts as `kind`.
///
/// Parts alternate plain/styled starting with plain, so an even part count
/// means a delimiter was left open. Empty parts are dropped. An empty
/// delimiter leaves the spans untouched.
pub fn split_delimiter(spans: Vec<Span>, delimiter: &str, kind: SpanKind) -> Result<Vec<Span>> {
    if delimiter.is_empty() {
        return Ok(spans);
    }

    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(Error::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            result.push(Span::new(part, part_kind));
        }
    }

    Ok(result)
}

/// Markup located by a regex: byte offset of the opening character plus its
/// captured text and url
#[derive(Debug, Clone, PartialEq, Eq)]
struct Markup {
    start: usize,
    text: String,
    url: String,
}

fn find_images(text: &str) -> Vec<Markup> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            Some(Markup {
                start: caps.get(0)?.start(),
                text: caps.get(1)?.as_str().to_string(),
                url: caps.get(2)?.as_str().to_string(),
            })
        })
        .collect()
}

fn find_links(text: &str) -> Vec<Markup> {
    LINK_RE
        .captures_iter(text)
        .filter(|caps| caps.get(1).map_or(true, |bang| bang.as_str().is_empty()))
        .filter_map(|caps| {
            Some(Markup {
                start: caps.get(0)?.start(),
                text: caps.get(2)?.as_str().to_string(),
                url: caps.get(3)?.as_str().to_string(),
            })
        })
        .collect()
}

/// Extract `(alt, url)` pairs for every `![alt](url)` in `text`
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// Extract `(text, url)` pairs for every `[text](url)` in `text` that is not
/// an image
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// Split image markup out of every plain span
pub fn split_images(spans: Vec<Span>) -> Result<Vec<Span>> {
    split_markup(spans, SpanKind::Image, find_images)
}

/// Split link markup out of every plain span
pub fn split_links(spans: Vec<Span>) -> Result<Vec<Span>> {
    split_markup(spans, SpanKind::Link, find_links)
}

fn split_markup(
    spans: Vec<Span>,
    kind: SpanKind,
    find: fn(&str) -> Vec<Markup>,
) -> Result<Vec<Span>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let found = find(&span.text);
        if found.is_empty() {
            result.push(span);
            continue;
        }

        split_on_markup(&span.text, &found, kind, &mut result)?;
    }

    Ok(result)
}

fn split_on_markup(
    text: &str,
    found: &[Markup],
    kind: SpanKind,
    out: &mut Vec<Span>,
) -> Result<()> {
    let mut remaining = text;
    let mut consumed = 0;

    for markup in found {
        let literal = match kind {
            SpanKind::Image => format!("![{}]({})", markup.text, markup.url),
            _ => format!("[{}]({})", markup.text, markup.url),
        };

        // The literal must sit exactly at its match position in what is left
        let (before, after) = markup
            .start
            .checked_sub(consumed)
            .and_then(|offset| {
                let before = remaining.get(..offset)?;
                let after = remaining.get(offset..)?.strip_prefix(literal.as_str())?;
                Some((before, after))
            })
            .ok_or_else(|| Error::MalformedMarkup {
                markup: literal.clone(),
            })?;

        if !before.is_empty() {
            out.push(Span::plain(before));
        }
        out.push(Span {
            text: markup.text.clone(),
            kind,
            url: Some(markup.url.clone()),
        });

        consumed += before.len() + literal.len();
        remaining = after;
    }

    if !remaining.is_empty() {
        out.push(Span::plain(remaining));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Vec<Span> {
        vec![Span::plain(text)]
    }

    #[test]
    fn test_delim_bold() {
        let spans = split_delimiter(plain("This is text with a **bolded** word"), "**", SpanKind::Bold)
            .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with a "),
                Span::new("bolded", SpanKind::Bold),
                Span::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_delim_bold_double() {
        let spans = split_delimiter(
            plain("This is text with a **bolded word** and **another**"),
            "**",
            SpanKind::Bold,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with a "),
                Span::new("bolded word", SpanKind::Bold),
                Span::plain(" and "),
                Span::new("another", SpanKind::Bold),
            ]
        );
    }

    #[test]
    fn test_delim_bold_then_italic() {
        let spans = split_delimiter(plain("**Bold** and _italic_"), "**", SpanKind::Bold).unwrap();
        let spans = split_delimiter(spans, "_", SpanKind::Italic).unwrap();
        assert_eq!(
            spans,
            vec![
                Span::new("Bold", SpanKind::Bold),
                Span::plain(" and "),
                Span::new("italic", SpanKind::Italic),
            ]
        );
    }

    #[test]
    fn test_delim_code() {
        let spans = split_delimiter(plain("This is text with a `code block` word"), "`", SpanKind::Code)
            .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with a "),
                Span::new("code block", SpanKind::Code),
                Span::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_delim_unclosed() {
        let err = split_delimiter(plain("This is **not closed"), "**", SpanKind::Bold).unwrap_err();
        assert_eq!(
            err,
            Error::UnclosedDelimiter {
                delimiter: "**".to_string()
            }
        );
    }

    #[test]
    fn test_delim_skips_styled_spans() {
        let spans = vec![Span::new("a_b", SpanKind::Code), Span::plain("plain")];
        let result = split_delimiter(spans.clone(), "_", SpanKind::Italic).unwrap();
        assert_eq!(result, spans);
    }

    #[test]
    fn test_delim_adjacent() {
        let spans = split_delimiter(plain("****"), "**", SpanKind::Bold).unwrap();
        assert!(spans.is_empty());
    }

    #[test]
    fn test_extract_images() {
        let images = extract_images(
            "This is text with a ![rick roll](https://i.imgur.com/aKaOqIh.gif) and ![obi wan](https://i.imgur.com/fJRm4Vk.jpeg)",
        );
        assert_eq!(
            images,
            vec![
                ("rick roll".to_string(), "https://i.imgur.com/aKaOqIh.gif".to_string()),
                ("obi wan".to_string(), "https://i.imgur.com/fJRm4Vk.jpeg".to_string()),
            ]
        );
    }

    #[test]
    fn test_extract_images_ignores_links() {
        let images = extract_images("an ![image](a.png) and a [link](https://example.com)");
        assert_eq!(images, vec![("image".to_string(), "a.png".to_string())]);
    }

    #[test]
    fn test_extract_links_ignores_images() {
        let links = extract_links("a [link](https://example.com) and an ![image](a.png)");
        assert_eq!(
            links,
            vec![("link".to_string(), "https://example.com".to_string())]
        );
    }

    #[test]
    fn test_extract_link_at_start() {
        let links = extract_links("[This link](https://example.com) is at the start");
        assert_eq!(
            links,
            vec![("This link".to_string(), "https://example.com".to_string())]
        );
    }

    #[test]
    fn test_split_images() {
        let spans = split_images(plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        ))
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with an "),
                Span::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                Span::plain(" and another "),
                Span::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn test_split_images_leaves_links() {
        let spans = split_images(plain("an ![image](a.png) and a [link](b.html)")).unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("an "),
                Span::image("image", "a.png"),
                Span::plain(" and a [link](b.html)"),
            ]
        );
    }

    #[test]
    fn test_split_only_image() {
        let spans = split_images(plain("![Image](a.png)")).unwrap();
        assert_eq!(spans, vec![Span::image("Image", "a.png")]);
    }

    #[test]
    fn test_split_without_markup() {
        let spans = plain("This string has no links");
        assert_eq!(split_images(spans.clone()).unwrap(), spans);
        assert_eq!(split_links(spans.clone()).unwrap(), spans);
    }

    #[test]
    fn test_split_links() {
        let spans = split_links(plain(
            "a link [to docs](https://example.com) and [to blog](https://example.com/@blog)",
        ))
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("a link "),
                Span::link("to docs", "https://example.com"),
                Span::plain(" and "),
                Span::link("to blog", "https://example.com/@blog"),
            ]
        );
    }

    #[test]
    fn test_split_links_leaves_images() {
        let spans = split_links(plain("[link](a.html) and an ![image](b.png)")).unwrap();
        assert_eq!(
            spans,
            vec![
                Span::link("link", "a.html"),
                Span::plain(" and an ![image](b.png)"),
            ]
        );
    }

    #[test]
    fn test_split_links_after_identical_image() {
        let spans = split_links(plain("![a](b) [a](b)")).unwrap();
        assert_eq!(
            spans,
            vec![Span::plain("![a](b) "), Span::link("a", "b")]
        );
    }

    #[test]
    fn test_consecutive_links() {
        let spans = parse_inline("[a](b)[c](d)").unwrap();
        assert_eq!(spans, vec![Span::link("a", "b"), Span::link("c", "d")]);
    }

    #[test]
    fn test_image_then_link_unspaced() {
        let spans = parse_inline("![a](b)[c](d)").unwrap();
        assert_eq!(spans, vec![Span::image("a", "b"), Span::link("c", "d")]);
    }

    #[test]
    fn test_repeated_markup() {
        let spans = parse_inline("[x](y) and [x](y)").unwrap();
        assert_eq!(
            spans,
            vec![
                Span::link("x", "y"),
                Span::plain(" and "),
                Span::link("x", "y"),
            ]
        );
    }

    #[test]
    fn test_markup_not_at_position() {
        let found = vec![Markup {
            start: 2,
            text: "a".to_string(),
            url: "b".to_string(),
        }];
        let mut out = Vec::new();
        let err = split_on_markup("[a](b) tail", &found, SpanKind::Link, &mut out).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedMarkup {
                markup: "[a](b)".to_string()
            }
        );
    }

    #[test]
    fn test_overlapping_markup() {
        let found = vec![
            Markup {
                start: 0,
                text: "a".to_string(),
                url: "b".to_string(),
            },
            Markup {
                start: 3,
                text: "c".to_string(),
                url: "d".to_string(),
            },
        ];
        let mut out = Vec::new();
        let err = split_on_markup("[a](b)[c](d)", &found, SpanKind::Link, &mut out).unwrap_err();
        assert!(matches!(err, Error::MalformedMarkup { .. }));
    }

    #[test]
    fn test_unterminated_link_stays_plain() {
        let spans = parse_inline("see [docs](https://example.com").unwrap();
        assert_eq!(spans, vec![Span::plain("see [docs](https://example.com")]);
    }

    #[test]
    fn test_parse_inline_all() {
        let spans = parse_inline(
            "This is **text** with an _italic_ word and a `code block` and an ![image](cat.png) and a [link](https://example.com)",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is "),
                Span::new("text", SpanKind::Bold),
                Span::plain(" with an "),
                Span::new("italic", SpanKind::Italic),
                Span::plain(" word and a "),
                Span::new("code block", SpanKind::Code),
                Span::plain(" and an "),
                Span::image("image", "cat.png"),
                Span::plain(" and a "),
                Span::link("link", "https://example.com"),
            ]
        );
    }

    #[test]
    fn test_parse_inline_mixed_markup() {
        let spans = parse_inline("a **bold** and ![img](u) and [link](u2)").unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("a "),
                Span::new("bold", SpanKind::Bold),
                Span::plain(" and "),
                Span::image("img", "u"),
                Span::plain(" and "),
                Span::link("link", "u2"),
            ]
        );
    }

    #[test]
    fn test_parse_inline_no_nesting() {
        let spans = parse_inline("**bold _not italic_**").unwrap();
        assert_eq!(spans, vec![Span::new("bold _not italic_", SpanKind::Bold)]);
    }

    #[test]
    fn test_parse_inline_unclosed_italic() {
        let err = parse_inline("snake_case word").unwrap_err();
        assert_eq!(
            err,
            Error::UnclosedDelimiter {
                delimiter: "_".to_string()
            }
        );
    }

    #[test]
    fn test_parse_inline_custom_delimiters() {
        let options = Options {
            bold_delimiter: "__".to_string(),
            italic_delimiter: "*".to_string(),
            ..Options::default()
        };
        let spans = parse_inline_with("__strong__ and *soft*", &options).unwrap();
        assert_eq!(
            spans,
            vec![
                Span::new("strong", SpanKind::Bold),
                Span::plain(" and "),
                Span::new("soft", SpanKind::Italic),
            ]
        );
    }
}
