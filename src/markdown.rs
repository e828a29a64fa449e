//! Markdown Rendering
//!
//! Renders the profile bio with pulldown-cmark. External links open in a new
//! tab without leaking the opener.

use pulldown_cmark::{html::push_html, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd};

/// Parse markdown to HTML
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH);
    let events = rewrite_links(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Replace external link tags with raw anchors carrying target/rel
fn rewrite_links<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    // One entry per open link: whether we replaced its start tag
    let mut open_links: Vec<bool> = Vec::new();

    for event in parser {
        match event {
            Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                if link_type != LinkType::Email && is_external(&dest_url) {
                    open_links.push(true);
                    let title_attr = if title.is_empty() {
                        String::new()
                    } else {
                        format!(" title=\"{}\"", escape_attr(&title))
                    };
                    events.push(Event::InlineHtml(CowStr::from(format!(
                        "<a href=\"{}\"{} target=\"_blank\" rel=\"noopener noreferrer\">",
                        escape_attr(&dest_url),
                        title_attr,
                    ))));
                } else {
                    open_links.push(false);
                    events.push(Event::Start(Tag::Link { link_type, dest_url, title, id }));
                }
            }
            Event::End(TagEnd::Link) => {
                if open_links.pop().unwrap_or(false) {
                    events.push(Event::InlineHtml(CowStr::Borrowed("</a>")));
                } else {
                    events.push(Event::End(TagEnd::Link));
                }
            }
            other => events.push(other),
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_and_emphasis() {
        let html = render_markdown("Hello **world**\n\nSecond");
        assert_eq!(html, "<p>Hello <strong>world</strong></p>\n<p>Second</p>\n");
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let html = render_markdown("[repo](https://github.com/)");
        assert!(html.contains("<a href=\"https://github.com/\" target=\"_blank\" rel=\"noopener noreferrer\">repo</a>"));
    }

    #[test]
    fn test_in_page_link_untouched() {
        let html = render_markdown("[contact](#contact)");
        assert!(html.contains("<a href=\"#contact\">contact</a>"));
        assert!(!html.contains("_blank"));
    }
}
