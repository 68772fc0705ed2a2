//! HTML sanitization for the proxied signin-code page.
//!
//! The policy neutralises active content and keeps everything else visually intact. It is a
//! denylist, not an allowlist:
//! - `<script>` is retagged to `<noscript>`; its text is kept (escaped) so timer logic shows up
//!   as inert text instead of running.
//! - `<iframe>`, `<object>` and `<embed>` become `<div>` with their children preserved.
//! - `<style>` content is emitted verbatim, never treated as renderable text.
//! - Every other tag and attribute passes through.
//!
//! With `strip_event_handlers` enabled (the default) attribute-borne script is removed as
//! well: `on*` event handlers and `javascript:`/`vbscript:` URLs in URL attributes. Without
//! it those vectors survive, which is the reference fidelity trade-off.
//!
//! The page is parsed with html5ever (through `scraper`) and re-serialised here rather than
//! by html5ever's serializer, because the retagged elements must escape text that the parser
//! read as raw text. Output is a pure function of the input and the policy.

use scraper::{ElementRef, Html, Node};

/// Elements serialised without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// HTML elements whose content is carried verbatim rather than as renderable text.
///
/// Only applies in the HTML namespace. Inside `<svg>` or `<math>` the parser decodes the
/// content of these elements like any other text, so it has to be escaped again.
const NON_TEXT_ELEMENTS: &[&str] = &["style", "xmp", "noembed", "noframes", "plaintext"];

/// Elements that swallow a single leading newline when parsed.
const LEADING_NEWLINE_ELEMENTS: &[&str] = &["pre", "textarea", "listing"];

/// Attributes whose value is navigated to or loaded as a URL.
const URL_ATTRIBUTES: &[&str] = &[
    "href",
    "src",
    "action",
    "formaction",
    "data",
    "poster",
    "background",
    "xlink:href",
];

/// Turns untrusted HTML into HTML that is safe to render in a trusted page.
pub trait Sanitize: Send + Sync {
    fn sanitize(&self, raw: &str) -> String;
}

#[derive(Clone, Debug)]
pub struct HtmlSanitizer {
    strip_event_handlers: bool,
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl HtmlSanitizer {
    pub fn new(strip_event_handlers: bool) -> Self {
        Self {
            strip_event_handlers,
        }
    }

    /// Name the element is emitted under.
    fn output_tag<'a>(&self, name: &'a str) -> &'a str {
        match name {
            "script" => "noscript",
            "iframe" | "object" | "embed" => "div",
            other => other,
        }
    }

    fn keeps_attribute(&self, name: &str, value: &str) -> bool {
        // Names the tokenizer accepted but a browser would re-tokenize differently
        if name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '=' | '/'))
        {
            return false;
        }

        if !self.strip_event_handlers {
            return true;
        }

        let lower = name.to_ascii_lowercase();
        if lower.starts_with("on") {
            return false;
        }

        !(URL_ATTRIBUTES.contains(&lower.as_str()) && is_script_url(value))
    }

    fn write_element(&self, element: ElementRef<'_>, out: &mut String) {
        let name = element.value().name();
        let tag = self.output_tag(name);

        // Parsed attribute storage is unordered; sort for stable output
        let mut attrs: Vec<(&str, &str)> = element
            .value()
            .attrs()
            .filter(|(attr_name, attr_value)| self.keeps_attribute(attr_name, attr_value))
            .collect();
        attrs.sort_unstable_by_key(|(attr_name, _)| *attr_name);

        out.push('<');
        out.push_str(tag);
        for (attr_name, attr_value) in attrs {
            out.push(' ');
            out.push_str(attr_name);
            out.push_str("=\"");
            escape_attribute(attr_value, out);
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&tag) {
            return;
        }

        let verbatim =
            &*element.value().name.ns == HTML_NAMESPACE && NON_TEXT_ELEMENTS.contains(&name);
        let mut first_child = true;

        for child in element.children() {
            if let Some(child_element) = ElementRef::wrap(child) {
                self.write_element(child_element, out);
            } else {
                if first_child && LEADING_NEWLINE_ELEMENTS.contains(&tag) {
                    if let Node::Text(text) = child.value() {
                        if text.starts_with('\n') {
                            out.push('\n');
                        }
                    }
                }
                write_leaf(child.value(), verbatim, out);
            }
            first_child = false;
        }

        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

impl Sanitize for HtmlSanitizer {
    fn sanitize(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());

        if looks_like_document(raw) {
            let html = Html::parse_document(raw);

            for child in html.tree.root().children() {
                match ElementRef::wrap(child) {
                    Some(element) => self.write_element(element, &mut out),
                    None => write_leaf(child.value(), false, &mut out),
                }
            }
        } else {
            let html = Html::parse_fragment(raw);

            for child in html.root_element().children() {
                match ElementRef::wrap(child) {
                    Some(element) => self.write_element(element, &mut out),
                    None => write_leaf(child.value(), false, &mut out),
                }
            }
        }

        out
    }
}

/// Full pages are re-emitted as documents; snippets stay snippets instead of gaining an
/// `<html><head><body>` wrapper.
fn looks_like_document(raw: &str) -> bool {
    let lower = raw.trim_start().to_ascii_lowercase();

    lower.starts_with("<!doctype") || lower.contains("<html")
}

fn write_leaf(node: &Node, verbatim: bool, out: &mut String) {
    match node {
        Node::Text(text) => {
            if verbatim {
                out.push_str(text);
            } else {
                escape_text(text, out);
            }
        }
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::Doctype(doctype) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(doctype.name());
            out.push('>');
        }
        _ => {}
    }
}

fn is_script_url(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    compact.starts_with("javascript:") || compact.starts_with("vbscript:")
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}
