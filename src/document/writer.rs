//! Serialize a document tree back to text

use super::{Document, Element, Node};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const INDENT: &str = "  ";

pub(super) fn write_pretty(out: &mut String, document: &Document) {
    out.push_str(XML_DECLARATION);
    out.push('\n');
    for node in &document.children {
        write_pretty_node(out, node, 0);
    }
}

fn write_pretty_node(out: &mut String, node: &Node, depth: usize) {
    let indent = INDENT.repeat(depth);
    match node {
        Node::Element(element) => {
            out.push_str(&indent);
            write_start_tag(out, element);
            match element.children.as_slice() {
                [] => out.push_str("/>\n"),
                [Node::Text(text)] => {
                    out.push('>');
                    out.push_str(&escape_text(text));
                    write_end_tag(out, element);
                    out.push('\n');
                }
                children => {
                    out.push_str(">\n");
                    for child in children {
                        write_pretty_node(out, child, depth + 1);
                    }
                    out.push_str(&indent);
                    write_end_tag(out, element);
                    out.push('\n');
                }
            }
        }
        Node::Text(text) => {
            out.push_str(&format!("{indent}{}\n", escape_text(text)));
        }
        Node::Comment(text) => {
            out.push_str(&format!("{indent}<!--{text}-->\n"));
        }
        Node::Doctype(text) => {
            out.push_str(text);
            out.push('\n');
        }
    }
}

pub(super) fn write_compact(out: &mut String, element: &Element) {
    write_start_tag(out, element);
    if element.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in &element.children {
        match child {
            Node::Element(child) => write_compact(out, child),
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Comment(text) => out.push_str(&format!("<!--{text}-->")),
            Node::Doctype(text) => out.push_str(text),
        }
    }
    write_end_tag(out, element);
}

fn write_start_tag(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in element.attributes() {
        out.push_str(&format!(r#" {}="{}""#, name, escape_text(value)));
    }
}

fn write_end_tag(out: &mut String, element: &Element) {
    out.push_str(&format!("</{}>", element.name));
}

/// Escape special XML characters in text and attribute values
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
