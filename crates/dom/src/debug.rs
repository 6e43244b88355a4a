use crate::Node;

const INDENT_STEP: &str = "  ";
const PREVIEW_CHARS: usize = 40;

fn push_preview(out: &mut String, s: &str) {
    let mut chars = s.chars();
    for ch in chars.by_ref().take(PREVIEW_CHARS) {
        out.push(if ch == '\n' { ' ' } else { ch });
    }
    if chars.next().is_some() {
        out.push('…');
    }
}

fn first_styles(style: &[(String, String)]) -> String {
    style
        .iter()
        .take(3)
        .map(|(k, v)| format!("{k}: {v};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Indented one-line-per-node rendering of a subtree, capped at `cap` nodes.
///
/// Attributes print in stored order; whitespace-only text nodes are skipped.
pub fn outline_from_dom(root: &Node, cap: usize) -> Vec<String> {
    fn walk(node: &Node, depth: usize, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        let mut line = INDENT_STEP.repeat(depth);
        match node {
            Node::Document { .. } => line.push_str("#document"),
            Node::Fragment { .. } => line.push_str("#fragment"),
            Node::Element {
                name,
                attributes,
                style,
                properties,
                ..
            } => {
                line.push('<');
                line.push_str(name);
                for (k, v) in attributes {
                    line.push(' ');
                    line.push_str(k);
                    if let Some(v) = v {
                        line.push_str("=\"");
                        line.push_str(v);
                        line.push('"');
                    }
                }
                line.push('>');
                let styl = first_styles(style);
                if !styl.is_empty() {
                    line.push_str("  /* ");
                    line.push_str(&styl);
                    line.push_str(" */");
                }
                if let Some((_, value)) = properties.iter().find(|(k, _)| k == "value") {
                    line.push_str("  value=");
                    line.push_str(&format!("{:?}", value.to_attr_string()));
                }
            }
            Node::Text { text, .. } => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return;
                }
                line.push('"');
                push_preview(&mut line, trimmed);
                line.push('"');
            }
            Node::Comment { text, .. } => {
                line.push_str("<!-- ");
                push_preview(&mut line, text);
                line.push_str(" -->");
            }
        }
        out.push(line);
        for c in node.children() {
            walk(c, depth + 1, out, left);
        }
    }

    let mut out = Vec::new();
    let mut left = cap;
    walk(root, 0, &mut out, &mut left);
    out
}
