use std::fmt;

pub type NodeId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub NodeId);

impl Id {
    /// Reserved sentinel for a node that has not been handed an identity.
    pub const UNASSIGNED: Id = Id(0);
}

/// A single script-level value: what a property assignment carries.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Str(String),
    Number(f64),
    Bool(bool),
}

/// Script-style rendering of a finite number: shortest round-trip digits, plain decimal
/// notation for exponents in `-7..21`, `1e21`/`1.5e-7` style outside it. `-0` prints as `0`.
fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    // `{:e}` yields the shortest digits that round-trip, as `d.ddde<exp>`.
    let sci = format!("{:e}", n.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exp: i32 = exp.parse().unwrap_or(0);
    let k = digits.len() as i32;
    let point = exp + 1;

    let mut out = String::new();
    if n < 0.0 {
        out.push('-');
    }
    if k <= point && point <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat_n('0', (point - k) as usize));
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-point) as usize));
        out.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        if point > 0 {
            out.push('+');
        }
        out.push_str(&(point - 1).to_string());
    }
    out
}

impl Scalar {
    /// String conversion used when a scalar lands in an attribute or text node.
    ///
    /// Integral numbers print without a fractional part (`20`, not `20.0`).
    pub fn to_attr_string(&self) -> String {
        match self {
            Scalar::Str(s) => s.clone(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) if n.is_nan() => "NaN".to_string(),
            Scalar::Number(n) if n.is_infinite() => {
                if *n > 0.0 {
                    "Infinity".to_string()
                } else {
                    "-Infinity".to_string()
                }
            }
            Scalar::Number(n) => format_number(*n),
        }
    }

    pub fn truthy(&self) -> bool {
        match self {
            Scalar::Str(s) => !s.is_empty(),
            Scalar::Number(n) => *n != 0.0 && !n.is_nan(),
            Scalar::Bool(b) => *b,
        }
    }

    /// Numeric conversion; strings that do not parse become NaN, blank strings 0.
    pub fn as_number(&self) -> f64 {
        match self {
            Scalar::Number(n) => *n,
            Scalar::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Scalar::Str(s) => {
                let t = s.trim();
                if t.is_empty() {
                    0.0
                } else {
                    t.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_attr_string())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Scalar::Str(value.clone())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(f64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Number(f64::from(value))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Document {
        id: Id,
        children: Vec<Node>,
    },
    /// Detached child list; appending it moves its children, not the fragment itself.
    Fragment {
        id: Id,
        children: Vec<Node>,
    },
    Element {
        id: Id,
        name: String,
        attributes: Vec<(String, Option<String>)>,
        style: Vec<(String, String)>,
        /// Script properties with no attribute reflection (`value`, expandos).
        properties: Vec<(String, Scalar)>,
        children: Vec<Node>,
    },
    Text {
        id: Id,
        text: String,
    },
    Comment {
        id: Id,
        text: String,
    },
}

impl Node {
    pub fn id(&self) -> Id {
        match self {
            Node::Document { id, .. }
            | Node::Fragment { id, .. }
            | Node::Element { id, .. }
            | Node::Text { id, .. }
            | Node::Comment { id, .. } => *id,
        }
    }

    /// Element name, canonical ASCII-lowercase. `None` for non-elements.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    pub fn is_element_named(&self, wanted: &str) -> bool {
        matches!(self, Node::Element { name, .. } if name.eq_ignore_ascii_case(wanted))
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children, .. }
            | Node::Fragment { children, .. }
            | Node::Element { children, .. } => children,
            Node::Text { .. } | Node::Comment { .. } => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document { children, .. }
            | Node::Fragment { children, .. }
            | Node::Element { children, .. } => Some(children),
            Node::Text { .. } | Node::Comment { .. } => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_deref().unwrap_or("")),
            _ => None,
        }
    }

    pub fn has_attr(&self, name: &str) -> bool {
        match self {
            Node::Element { attributes, .. } => {
                attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
            }
            _ => false,
        }
    }

    /// Set or replace an attribute, keeping its original position when it already exists.
    /// Returns `false` when the node is not an element.
    pub fn set_attr(&mut self, name: &str, value: Option<String>) -> bool {
        let Node::Element { attributes, .. } = self else {
            return false;
        };
        match attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, slot)) => *slot = value,
            None => attributes.push((name.to_ascii_lowercase(), value)),
        }
        true
    }

    pub fn remove_attr(&mut self, name: &str) {
        if let Node::Element { attributes, .. } = self {
            attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        }
    }

    /// Append a child. Fragments are flattened: their children move, in order, into `self`.
    /// Returns the child back when `self` cannot hold children.
    pub fn append_child(&mut self, child: Node) -> Result<(), Node> {
        let Some(children) = self.children_mut() else {
            return Err(child);
        };
        match child {
            Node::Fragment {
                children: moved, ..
            } => children.extend(moved),
            other => children.push(other),
        }
        Ok(())
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        fn walk(node: &Node, out: &mut String) {
            match node {
                Node::Text { text, .. } => out.push_str(text),
                Node::Comment { .. } => {}
                _ => {
                    for c in node.children() {
                        walk(c, out);
                    }
                }
            }
        }
        let mut out = String::new();
        walk(self, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(n: f64) -> String {
        Scalar::Number(n).to_attr_string()
    }

    #[test]
    fn integral_numbers_print_every_digit() {
        assert_eq!(attr(20.0), "20");
        assert_eq!(attr(1e19), "10000000000000000000");
        assert_eq!(attr(-1e19), "-10000000000000000000");
        assert_eq!(attr(1e21), "1e+21");
        assert_eq!(attr(-0.0), "0");
    }

    #[test]
    fn fractions_switch_to_exponents_below_one_millionth() {
        assert_eq!(attr(0.5), "0.5");
        assert_eq!(attr(123.456), "123.456");
        assert_eq!(attr(0.000001), "0.000001");
        assert_eq!(attr(1e-7), "1e-7");
        assert_eq!(attr(1.5e-7), "1.5e-7");
        assert_eq!(attr(f64::NAN), "NaN");
        assert_eq!(attr(f64::NEG_INFINITY), "-Infinity");
    }
}
