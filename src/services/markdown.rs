use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// Render markdown to HTML. Content is first-party brochure copy, so the
/// output is stored as-is at write time without sanitization.
pub fn render(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Flatten markdown into plain text and truncate at a word boundary,
/// appending `...` when anything was cut. Headings and code blocks are
/// skipped; the result is used for card summaries and meta descriptions.
pub fn plain_text_summary(markdown: &str, max_len: usize) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());

    let mut text = String::new();
    let mut skip_depth = 0usize;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) | Event::Start(Tag::CodeBlock(_)) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::Heading(_)) | Event::End(TagEnd::CodeBlock) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(t) | Event::Code(t) if skip_depth == 0 => {
                text.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Item) => text.push(' '),
            _ => {}
        }
    }

    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if text.chars().count() <= max_len {
        return text;
    }

    let truncated: String = text.chars().take(max_len).collect();
    let cut = truncated
        .char_indices()
        .rev()
        .find(|(_, c)| *c == ' ')
        .map(|(i, _)| i);

    match cut {
        Some(pos) => format!("{}...", &truncated[..pos]),
        None => format!("{}...", truncated),
    }
}
