//! Text transformation helpers.

use pulldown_cmark::{html, Options, Parser};
use serde::de::IgnoredAny;

use crate::error::HelperError;

/// Renders markdown to HTML.
///
/// Only CommonMark core is enabled: headings, emphasis, links, lists and
/// paragraphs. Tables, footnotes, strikethrough and task lists stay literal
/// text. The output is not sanitized; raw HTML in the input passes through.
pub fn markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::empty());
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// One level of `indent_json` indentation.
const INDENT: &str = "    ";

/// Re-indents the JSON document in `text` with four spaces per level.
///
/// Only whitespace between tokens changes. Keys, strings, escapes and
/// numbers are copied through exactly as written, duplicate keys included.
/// Leading and trailing whitespace is dropped. Input that is not valid JSON
/// (plain text or HTML bodies, for instance) is rejected with
/// [`HelperError::Parse`].
pub fn indent_json(text: &str) -> Result<String, HelperError> {
    // Syntax check only; numbers are scanned, never converted.
    serde_json::from_str::<IgnoredAny>(text)?;

    let mut out = String::with_capacity(text.len() * 2);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    // A container was just opened and its first member is not placed yet.
    let mut opened = false;

    for c in text.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if matches!(c, ' ' | '\t' | '\n' | '\r') {
            continue;
        }

        if opened && c != ']' && c != '}' {
            newline(&mut out, depth);
            opened = false;
        }

        match c {
            '{' | '[' => {
                out.push(c);
                depth += 1;
                opened = true;
            }
            '}' | ']' => {
                depth -= 1;
                if opened {
                    opened = false;
                } else {
                    newline(&mut out, depth);
                }
                out.push(c);
            }
            ',' => {
                out.push(c);
                newline(&mut out, depth);
            }
            ':' => out.push_str(": "),
            '"' => {
                in_string = true;
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
