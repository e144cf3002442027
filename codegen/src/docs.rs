/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Converts the HTML used by `smithy.api#documentation` into rustdoc markdown.

/// Converts documentation HTML into markdown lines.
///
/// Paragraph and list tags become paragraph breaks and bullets, `<code>` becomes a code span,
/// and every other tag is dropped while its text is kept.
pub fn to_markdown(html: &str) -> Vec<String> {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        push_text(&mut text, &rest[..start]);
        let after = &rest[start + 1..];
        let opens_tag = after.starts_with(|c: char| c.is_ascii_alphabetic() || c == '/');
        match after.find('>') {
            Some(end) if opens_tag => {
                push_tag(&mut text, &after[..end]);
                rest = &after[end + 1..];
            }
            _ => {
                push_text(&mut text, "<");
                rest = after;
            }
        }
    }
    push_text(&mut text, rest);

    let mut lines: Vec<String> = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() && lines.last().map_or(true, |last| last.is_empty()) {
            continue;
        }
        lines.push(line.to_owned());
    }
    while lines.last().map_or(false, |last| last.is_empty()) {
        lines.pop();
    }
    lines
}

fn push_text(out: &mut String, text: &str) {
    let mut last_was_space = out.ends_with(char::is_whitespace);
    for c in text.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
            continue;
        }
        last_was_space = false;
        match c {
            '<' => out.push_str("&lt;"),
            '[' => out.push_str("\\["),
            ']' => out.push_str("\\]"),
            _ => out.push(c),
        }
    }
}

fn push_tag(out: &mut String, tag: &str) {
    let name = tag
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    let closing = tag.starts_with('/');
    match name.as_str() {
        // a paragraph opening a list item stays on the bullet's line
        "p" if out.trim_end().ends_with("\n-") => {}
        "p" | "ul" | "ol" | "fullname" => out.push_str("\n\n"),
        "li" if !closing => out.push_str("\n- "),
        "br" => out.push('\n'),
        "code" => out.push('`'),
        _ => {}
    }
}

#[cfg(test)]
mod test {
    use super::to_markdown;
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraphs_and_code() {
        assert_eq!(
            to_markdown("<p>A column in a <code>Table</code>.</p>"),
            vec!["A column in a `Table`."]
        );
        assert_eq!(
            to_markdown("<p>First.</p> <p>Second   line\n continues.</p>"),
            vec!["First.", "", "Second line continues."]
        );
    }

    #[test]
    fn lists_and_links() {
        assert_eq!(
            to_markdown(
                "<p>Valid values:</p> <ul> <li> <p>For the <code>Standard</code> worker type</p> </li> <li><a href=\"https://docs.aws.amazon.com\">G.1X</a></li> </ul>"
            ),
            vec![
                "Valid values:",
                "",
                "- For the `Standard` worker type",
                "",
                "- G.1X",
            ]
        );
    }

    #[test]
    fn escapes_link_brackets_and_stray_angles() {
        assert_eq!(
            to_markdown("<p>Use [a-z] when x < 3</p>"),
            vec!["Use \\[a-z\\] when x &lt; 3"]
        );
    }

    #[test]
    fn empty_docs() {
        assert!(to_markdown("<p></p>").is_empty());
    }
}
