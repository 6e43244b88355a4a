//! Markup fragment parser backing `innerHTML` assignment.
//!
//! Single pass from text straight to nodes; there is no separate token stream.
//!
//! Known limitations (intentional):
//! - Not an HTML5 tree builder: no implied end tags, no foster parenting, no adoption agency.
//!   An end tag closes the nearest open element with the same name; unmatched end tags are
//!   dropped and elements still open at end of input are closed there.
//! - Tag/attribute names are restricted to ASCII `[A-Za-z0-9:_-]` and lowercased.
//! - `<!DOCTYPE>` and other `<!…>` declarations are skipped.
use crate::entities::decode_entities;
use crate::host::DocumentHost;
use crate::types::Node;
use memchr::memchr;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn is_rawtext_element(name: &str) -> bool {
    matches!(name, "script" | "style" | "textarea" | "title")
}

fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

fn scan_name(bytes: &[u8], start: usize) -> usize {
    let mut j = start;
    while j < bytes.len() && is_name_char(bytes[j]) {
        j += 1;
    }
    j
}

/// Byte range of `</name` (ASCII case-insensitive) followed by optional whitespace and `>`.
fn find_close_tag(input: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let bytes = input.as_bytes();
    let n = name.len();
    let mut i = from;
    while i < bytes.len() {
        i += memchr(b'<', &bytes[i..])?;
        let name_start = i + 2;
        if bytes.get(i + 1) == Some(&b'/')
            && bytes
                .get(name_start..name_start + n)
                .is_some_and(|s| s.eq_ignore_ascii_case(name.as_bytes()))
        {
            let mut k = name_start + n;
            while k < bytes.len() && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if bytes.get(k) == Some(&b'>') {
                return Some((i, k + 1));
            }
        }
        i += 1;
    }
    None
}

struct TreeSink<'h, H: DocumentHost + ?Sized> {
    host: &'h H,
    roots: Vec<Node>,
    open: Vec<Node>,
    pending_text: String,
}

impl<'h, H: DocumentHost + ?Sized> TreeSink<'h, H> {
    fn new(host: &'h H) -> Self {
        Self {
            host,
            roots: Vec::new(),
            open: Vec::new(),
            pending_text: String::new(),
        }
    }

    fn attach(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => {
                // Open entries are always elements, which accept children.
                let _ = parent.append_child(node);
            }
            None => self.roots.push(node),
        }
    }

    fn flush_text(&mut self) {
        if self.pending_text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending_text);
        let node = self.host.create_text_node(&text);
        self.attach(node);
    }

    fn push_text(&mut self, raw: &str) {
        self.pending_text.push_str(&decode_entities(raw));
    }

    fn open_element(&mut self, element: Node) {
        self.flush_text();
        self.open.push(element);
    }

    fn leaf(&mut self, node: Node) {
        self.flush_text();
        self.attach(node);
    }

    fn close_element(&mut self, name: &str) {
        if !self.open.iter().any(|n| n.is_element_named(name)) {
            log::trace!(target: "dom.fragment", "dropping unmatched end tag </{name}>");
            return;
        }
        self.flush_text();
        while let Some(element) = self.open.pop() {
            let matched = element.is_element_named(name);
            self.attach(element);
            if matched {
                break;
            }
        }
    }

    fn finish(mut self) -> Vec<Node> {
        self.flush_text();
        while let Some(element) = self.open.pop() {
            self.attach(element);
        }
        self.roots
    }
}

/// Parse `input` into detached nodes created through `host`, in source order.
pub fn parse_fragment<H: DocumentHost + ?Sized>(host: &H, input: &str) -> Vec<Node> {
    let mut sink = TreeSink::new(host);
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    // Slices are only cut at ASCII structural bytes or after ASCII-only name runs, so every
    // endpoint stays on a UTF-8 char boundary.
    while i < len {
        if bytes[i] != b'<' {
            let start = i;
            i = memchr(b'<', &bytes[i..]).map_or(len, |rel| i + rel);
            sink.push_text(&input[start..i]);
            continue;
        }

        if input[i..].starts_with(COMMENT_START) {
            let body_start = i + COMMENT_START.len();
            let rest = &input[body_start..];
            // `<!-->` and `<!--->` are empty comments.
            let abrupt = [">", "->"].into_iter().find(|close| rest.starts_with(close));
            let (body_end, next) = match (abrupt, rest.find(COMMENT_END)) {
                (Some(close), _) => (body_start, body_start + close.len()),
                (None, Some(rel)) => (body_start + rel, body_start + rel + COMMENT_END.len()),
                (None, None) => (len, len),
            };
            let comment = host.create_comment(&input[body_start..body_end]);
            sink.leaf(comment);
            i = next;
            continue;
        }

        if bytes.get(i + 1) == Some(&b'!') || bytes.get(i + 1) == Some(&b'?') {
            i = memchr(b'>', &bytes[i..]).map_or(len, |rel| i + rel + 1);
            continue;
        }

        if bytes.get(i + 1) == Some(&b'/') {
            let name_end = scan_name(bytes, i + 2);
            let name = input[i + 2..name_end].to_ascii_lowercase();
            i = memchr(b'>', &bytes[name_end..]).map_or(len, |rel| name_end + rel + 1);
            if !name.is_empty() {
                sink.close_element(&name);
            }
            continue;
        }

        let name_end = scan_name(bytes, i + 1);
        if name_end == i + 1 {
            // A bare `<` that does not open a tag is text.
            sink.pending_text.push('<');
            i += 1;
            continue;
        }

        let name = input[i + 1..name_end].to_ascii_lowercase();
        let mut element = host.create_element(&name);
        let (k, self_closing) = parse_attributes(input, name_end, &mut element);
        i = k;

        if self_closing || is_void_element(&name) {
            sink.leaf(element);
            continue;
        }

        if is_rawtext_element(&name) {
            let (raw_end, next) = find_close_tag(input, i, &name).unwrap_or((len, len));
            let raw = &input[i..raw_end];
            if !raw.is_empty() {
                let text = if name == "textarea" || name == "title" {
                    decode_entities(raw)
                } else {
                    raw.to_string()
                };
                let _ = element.append_child(host.create_text_node(&text));
            }
            sink.leaf(element);
            i = next;
            continue;
        }

        sink.open_element(element);
    }

    sink.finish()
}

/// Parse attributes starting right after the tag name. Returns the index past `>` and whether
/// the tag used self-closing syntax. Duplicate attributes keep the first value.
fn parse_attributes(input: &str, start: usize, element: &mut Node) -> (usize, bool) {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut k = start;

    let skip_whitespace = |k: &mut usize| {
        while *k < len && bytes[*k].is_ascii_whitespace() {
            *k += 1;
        }
    };

    loop {
        skip_whitespace(&mut k);
        if k >= len {
            return (len, false);
        }
        match bytes[k] {
            b'>' => return (k + 1, false),
            b'/' if bytes.get(k + 1) == Some(&b'>') => return (k + 2, true),
            b'/' => {
                k += 1;
                continue;
            }
            _ => {}
        }

        let name_start = k;
        k = scan_name(bytes, k);
        if k == name_start {
            k += 1;
            continue;
        }
        let attr_name = input[name_start..k].to_ascii_lowercase();

        skip_whitespace(&mut k);
        let value = if k < len && bytes[k] == b'=' {
            k += 1;
            skip_whitespace(&mut k);
            if k < len && (bytes[k] == b'"' || bytes[k] == b'\'') {
                let quote = bytes[k];
                k += 1;
                let value_start = k;
                k = memchr(quote, &bytes[k..]).map_or(len, |rel| k + rel);
                let raw = &input[value_start..k];
                if k < len {
                    k += 1;
                }
                Some(decode_entities(raw))
            } else {
                let value_start = k;
                while k < len && !bytes[k].is_ascii_whitespace() && bytes[k] != b'>' {
                    if bytes[k] == b'/' && bytes.get(k + 1) == Some(&b'>') {
                        break;
                    }
                    k += 1;
                }
                Some(decode_entities(&input[value_start..k]))
            }
        } else {
            None
        };

        if !element.has_attr(&attr_name) {
            element.set_attr(&attr_name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeAllocator;
    use crate::debug::outline_from_dom;

    fn outline(input: &str) -> Vec<String> {
        let host = NodeAllocator::new();
        let mut wrapper = host.create_fragment();
        for node in parse_fragment(&host, input) {
            wrapper.append_child(node).unwrap();
        }
        outline_from_dom(&wrapper, 100)
    }

    #[test]
    fn parses_nested_elements_and_text() {
        assert_eq!(
            outline("<span class=\"a\">x<b>y</b></span>tail"),
            vec![
                "#fragment",
                "  <span class=\"a\">",
                "    \"x\"",
                "    <b>",
                "      \"y\"",
                "  \"tail\"",
            ]
        );
    }

    #[test]
    fn void_and_self_closing_elements_take_no_children() {
        assert_eq!(
            outline("<input type=text><br/><x-icon/>after"),
            vec![
                "#fragment",
                "  <input type=\"text\">",
                "  <br>",
                "  <x-icon>",
                "  \"after\"",
            ]
        );
    }

    #[test]
    fn unmatched_end_tags_are_dropped_and_open_elements_closed() {
        assert_eq!(
            outline("</p><div><em>open"),
            vec!["#fragment", "  <div>", "    <em>", "      \"open\""]
        );
    }

    #[test]
    fn comments_entities_and_stray_angle_brackets() {
        assert_eq!(
            outline("<!-- note -->a &lt; b < c<!doctype html>"),
            vec!["#fragment", "  <!--  note  -->", "  \"a < b < c\""]
        );
    }

    #[test]
    fn abruptly_closed_comments_are_empty() {
        assert_eq!(
            outline("<!-->a<!--->b<p>c</p>"),
            vec![
                "#fragment",
                "  <!--  -->",
                "  \"a\"",
                "  <!--  -->",
                "  \"b\"",
                "  <p>",
                "    \"c\"",
            ]
        );
    }

    #[test]
    fn rawtext_content_is_not_parsed_as_markup() {
        let host = NodeAllocator::new();
        let nodes = parse_fragment(&host, "<style>p > b { x: 1 }</STYLE >done");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text_content(), "p > b { x: 1 }");
        assert_eq!(nodes[1].text_content(), "done");
    }

    #[test]
    fn duplicate_attributes_keep_the_first_value() {
        let host = NodeAllocator::new();
        let nodes = parse_fragment(&host, "<a href='one' HREF=two disabled>");
        assert_eq!(nodes[0].attr("href"), Some("one"));
        assert!(nodes[0].has_attr("disabled"));
    }
}
