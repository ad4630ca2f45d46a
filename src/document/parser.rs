//! Build a [`Document`] from XML text

use xmlparser::{ElementEnd, StrSpan, Token, Tokenizer};

use super::{Document, Element, Node};
use crate::error::{offset_of, DocumentError, Span};

/// Parse XML text into a document tree
///
/// Prefixed names are kept as written (`kvg:element`); namespaces are not
/// resolved. The DOCTYPE declaration, including its internal subset, is kept
/// as raw text.
pub fn parse(source: &str) -> Result<Document, DocumentError> {
    let mut builder = TreeBuilder::default();

    for token in Tokenizer::from(source) {
        let token = token.map_err(|err| {
            let pos = err.pos();
            let offset = offset_of(source, pos.row, pos.col);
            DocumentError::syntax(offset..offset, err.to_string())
        })?;

        match token {
            Token::Declaration { .. }
            | Token::ProcessingInstruction { .. }
            | Token::EntityDeclaration { .. } => {}
            Token::DtdStart { span, .. } => builder.doctype_start = Some(span.start()),
            Token::DtdEnd { span } => {
                if let Some(start) = builder.doctype_start.take() {
                    builder.push_top_level(Node::Doctype(source[start..span.end()].to_string()));
                }
            }
            Token::EmptyDtd { span, .. } => {
                builder.push_top_level(Node::Doctype(span.as_str().to_string()))
            }
            Token::Comment { text, .. } => builder.push_node(Node::Comment(text.as_str().to_string()))?,
            Token::ElementStart { prefix, local, span } => {
                builder.start_tag = Some((Element::new(qualified_name(prefix, local)), span.range()));
            }
            Token::Attribute {
                prefix,
                local,
                value,
                span,
            } => {
                let (element, _) = builder
                    .start_tag
                    .as_mut()
                    .ok_or_else(|| DocumentError::syntax(span.range(), "attribute outside of a tag"))?;
                element.set_attribute(qualified_name(prefix, local), unescape(value.as_str()));
            }
            Token::ElementEnd { end, span } => builder.end_tag(end, span.range())?,
            Token::Text { text } => builder.push_text(unescape(text.as_str()), text.range())?,
            Token::Cdata { text, span } => builder.push_text(text.as_str().to_string(), span.range())?,
        }
    }

    builder.finish(source.len())
}

#[derive(Default)]
struct TreeBuilder {
    document: Document,
    /// Elements whose closing tag has not been seen yet
    open: Vec<(Element, Span)>,
    /// Element whose start tag is still collecting attributes
    start_tag: Option<(Element, Span)>,
    doctype_start: Option<usize>,
    has_root: bool,
}

impl TreeBuilder {
    fn push_top_level(&mut self, node: Node) {
        self.document.children.push(node);
    }

    fn push_node(&mut self, node: Node) -> Result<(), DocumentError> {
        match self.open.last_mut() {
            Some((parent, _)) => parent.append_child(node),
            None => self.push_top_level(node),
        }
        Ok(())
    }

    fn push_text(&mut self, text: String, span: Span) -> Result<(), DocumentError> {
        if self.open.is_empty() {
            if text.chars().all(char::is_whitespace) {
                return Ok(());
            }
            return Err(DocumentError::syntax(span, "text outside of the root element"));
        }
        self.push_node(Node::Text(text))
    }

    fn end_tag(&mut self, end: ElementEnd<'_>, span: Span) -> Result<(), DocumentError> {
        match end {
            ElementEnd::Open => {
                let tag = self.take_start_tag(&span)?;
                self.open.push(tag);
                Ok(())
            }
            ElementEnd::Empty => {
                let (element, span) = self.take_start_tag(&span)?;
                self.attach(element, span)
            }
            ElementEnd::Close(prefix, local) => {
                let name = qualified_name(prefix, local);
                let (element, _) = self.open.pop().ok_or_else(|| {
                    DocumentError::syntax(span.clone(), format!("unexpected closing tag </{name}>"))
                })?;
                if element.name != name {
                    return Err(DocumentError::syntax(
                        span,
                        format!("expected </{}>, found </{name}>", element.name),
                    ));
                }
                self.attach(element, span)
            }
        }
    }

    fn take_start_tag(&mut self, span: &Span) -> Result<(Element, Span), DocumentError> {
        self.start_tag
            .take()
            .ok_or_else(|| DocumentError::syntax(span.clone(), "tag end without a tag start"))
    }

    fn attach(&mut self, element: Element, span: Span) -> Result<(), DocumentError> {
        if let Some((parent, _)) = self.open.last_mut() {
            parent.append_child(element);
            return Ok(());
        }
        if self.has_root {
            return Err(DocumentError::syntax(span, "more than one root element"));
        }
        self.has_root = true;
        self.push_top_level(Node::Element(element));
        Ok(())
    }

    fn finish(mut self, end: usize) -> Result<Document, DocumentError> {
        if let Some((element, span)) = self.open.pop() {
            return Err(DocumentError::syntax(
                span,
                format!("element <{}> is never closed", element.name),
            ));
        }
        if !self.has_root {
            return Err(DocumentError::syntax(end..end, "no root element"));
        }
        Ok(self.document)
    }
}

fn qualified_name(prefix: StrSpan<'_>, local: StrSpan<'_>) -> String {
    if prefix.as_str().is_empty() {
        local.as_str().to_string()
    } else {
        format!("{}:{}", prefix.as_str(), local.as_str())
    }
}

/// Decode predefined entities and character references
///
/// References that cannot be decoded are kept as written.
fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest
            .find(';')
            .and_then(|semi| decode_reference(&rest[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x") {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code)
        }
    }
}
