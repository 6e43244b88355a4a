//! Script-style property assignment onto elements.
//!
//! A property key maps to one of: a reflected attribute, a child-list replacement
//! (`textContent`, `innerHTML`), a read-only accessor, or an expando stored on the element.
//! Nested objects (`dataset`, `style`) exist on every element and only accept member-wise
//! assignment through [`Node::set_nested_property`].

use crate::error::PropertyError;
use crate::fragment::parse_fragment;
use crate::host::DocumentHost;
use crate::types::{Node, Scalar};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot<'a> {
    Reflect(&'a str),
    ReflectUnsigned(&'a str),
    ReflectInteger(&'a str),
    ReflectBool(&'a str),
    Text,
    Markup,
    StyleText,
    ClassText,
    OuterMarkup,
    ReadOnly,
    Expando,
}

fn classify(key: &str) -> Slot<'_> {
    match key {
        "id" | "title" | "lang" | "dir" | "name" | "type" | "placeholder" | "href" | "src"
        | "alt" | "rel" | "target" | "action" | "method" | "autocomplete" | "pattern" | "min"
        | "max" | "step" => Slot::Reflect(key),
        "className" => Slot::Reflect("class"),
        // `for` is the attribute spelling; page code uses it interchangeably with `htmlFor`.
        "htmlFor" | "for" => Slot::Reflect("for"),
        "maxLength" => Slot::ReflectUnsigned("maxlength"),
        "minLength" => Slot::ReflectUnsigned("minlength"),
        "size" | "rows" | "cols" => Slot::ReflectUnsigned(key),
        "tabIndex" => Slot::ReflectInteger("tabindex"),
        "readOnly" => Slot::ReflectBool("readonly"),
        "hidden" | "disabled" | "checked" | "required" | "autofocus" | "multiple" | "selected" => {
            Slot::ReflectBool(key)
        }
        "textContent" | "innerText" => Slot::Text,
        "innerHTML" => Slot::Markup,
        "style" => Slot::StyleText,
        "classList" => Slot::ClassText,
        "outerHTML" => Slot::OuterMarkup,
        "tagName" | "nodeName" | "localName" | "nodeType" | "children" | "childNodes"
        | "firstChild" | "lastChild" | "parentNode" | "parentElement" | "childElementCount"
        | "attributes" | "dataset" | "isConnected" | "ownerDocument" => Slot::ReadOnly,
        _ => Slot::Expando,
    }
}

fn to_integer(value: &Scalar) -> i64 {
    let n = value.as_number();
    if n.is_finite() { n.trunc() as i64 } else { 0 }
}

fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn dataset_attr_name(key: &str) -> Result<String, PropertyError> {
    let bytes = key.as_bytes();
    if bytes
        .windows(2)
        .any(|w| w[0] == b'-' && w[1].is_ascii_lowercase())
    {
        return Err(PropertyError::InvalidDatasetKey(key.to_string()));
    }
    Ok(format!("data-{}", camel_to_kebab(key)))
}

fn parse_declarations(css: &str) -> Vec<(String, String)> {
    css.split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim();
            (!name.is_empty() && !value.is_empty()).then(|| (name, value.to_string()))
        })
        .collect()
}

impl Node {
    /// Assign a scalar to the property `key`, the way `element[key] = value` would.
    pub fn set_property<H: DocumentHost + ?Sized>(
        &mut self,
        host: &H,
        key: &str,
        value: &Scalar,
    ) -> Result<(), PropertyError> {
        if !self.is_element() {
            return Err(PropertyError::NotAnElement);
        }
        match classify(key) {
            Slot::Reflect(attr) => {
                self.set_attr(attr, Some(value.to_attr_string()));
            }
            Slot::ReflectUnsigned(attr) => {
                let n = to_integer(value);
                if n < 0 {
                    return Err(PropertyError::IndexSize {
                        key: key.to_string(),
                        value: value.to_attr_string(),
                    });
                }
                self.set_attr(attr, Some(n.to_string()));
            }
            Slot::ReflectInteger(attr) => {
                self.set_attr(attr, Some(to_integer(value).to_string()));
            }
            Slot::ReflectBool(attr) => {
                if value.truthy() {
                    self.set_attr(attr, None);
                } else {
                    self.remove_attr(attr);
                }
            }
            Slot::Text => self.set_text_content(host, &value.to_attr_string()),
            Slot::Markup => self.set_inner_html(host, &value.to_attr_string()),
            Slot::StyleText => {
                if let Node::Element { style, .. } = self {
                    *style = parse_declarations(&value.to_attr_string());
                }
            }
            Slot::ClassText => {
                self.set_attr("class", Some(value.to_attr_string()));
            }
            Slot::OuterMarkup => return Err(PropertyError::NoParent(key.to_string())),
            Slot::ReadOnly => return Err(PropertyError::ReadOnly(key.to_string())),
            Slot::Expando => {
                if let Node::Element { properties, .. } = self {
                    match properties.iter_mut().find(|(k, _)| k == key) {
                        Some((_, slot)) => *slot = value.clone(),
                        None => properties.push((key.to_string(), value.clone())),
                    }
                }
            }
        }
        Ok(())
    }

    /// Assign one member of a nested object, the way `element[object][key] = value` would.
    pub fn set_nested_property(
        &mut self,
        object: &str,
        key: &str,
        value: &Scalar,
    ) -> Result<(), PropertyError> {
        if !self.is_element() {
            return Err(PropertyError::NotAnElement);
        }
        match object {
            "dataset" => {
                let attr = dataset_attr_name(key)?;
                self.set_attr(&attr, Some(value.to_attr_string()));
            }
            "style" => {
                let name = camel_to_kebab(key);
                let text = value.to_attr_string();
                if let Node::Element { style, .. } = self {
                    let text = text.trim();
                    match style.iter().position(|(k, _)| *k == name) {
                        Some(pos) if text.is_empty() => {
                            style.remove(pos);
                        }
                        Some(pos) => style[pos].1 = text.to_string(),
                        None if text.is_empty() => {}
                        None => style.push((name, text.to_string())),
                    }
                }
            }
            other => return Err(PropertyError::NotAnObject(other.to_string())),
        }
        Ok(())
    }

    /// Expando or non-reflected property previously assigned with [`Node::set_property`].
    pub fn property(&self, key: &str) -> Option<&Scalar> {
        match self {
            Node::Element { properties, .. } => {
                properties.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// `element.dataset[key]`.
    pub fn dataset_get(&self, key: &str) -> Option<&str> {
        let attr = dataset_attr_name(key).ok()?;
        self.attr(&attr)
    }

    /// `element.style[name]`, accepting camelCase or kebab-case names.
    pub fn style_get(&self, name: &str) -> Option<&str> {
        let name = camel_to_kebab(name);
        match self {
            Node::Element { style, .. } => style
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Replace all children with a single text node; an empty string leaves no children.
    pub fn set_text_content<H: DocumentHost + ?Sized>(&mut self, host: &H, text: &str) {
        let Some(children) = self.children_mut() else {
            if let Node::Text { text: own, .. } | Node::Comment { text: own, .. } = self {
                *own = text.to_string();
            }
            return;
        };
        children.clear();
        if !text.is_empty() {
            children.push(host.create_text_node(text));
        }
    }

    /// Replace all children with the nodes parsed from `markup`.
    pub fn set_inner_html<H: DocumentHost + ?Sized>(&mut self, host: &H, markup: &str) {
        let parsed = parse_fragment(host, markup);
        if let Some(children) = self.children_mut() {
            *children = parsed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeAllocator;

    fn element(name: &str) -> (NodeAllocator, Node) {
        let host = NodeAllocator::new();
        let el = host.create_element(name);
        (host, el)
    }

    #[test]
    fn reflected_properties_land_in_attributes() {
        let (host, mut el) = element("label");
        el.set_property(&host, "id", &"x".into()).unwrap();
        el.set_property(&host, "className", &"a b".into()).unwrap();
        el.set_property(&host, "for", &"txt-player-1".into()).unwrap();
        assert_eq!(el.attr("id"), Some("x"));
        assert_eq!(el.class_list(), vec!["a", "b"]);
        assert_eq!(el.attr("for"), Some("txt-player-1"));
    }

    #[test]
    fn numeric_reflection_prints_integers_and_rejects_negative_lengths() {
        let (host, mut el) = element("input");
        el.set_property(&host, "maxLength", &20.into()).unwrap();
        assert_eq!(el.attr("maxlength"), Some("20"));

        let err = el.set_property(&host, "maxLength", &(-1).into());
        assert_eq!(
            err,
            Err(PropertyError::IndexSize {
                key: "maxLength".into(),
                value: "-1".into()
            })
        );
        assert_eq!(el.attr("maxlength"), Some("20"));

        el.set_property(&host, "tabIndex", &(-1).into()).unwrap();
        assert_eq!(el.attr("tabindex"), Some("-1"));
    }

    #[test]
    fn boolean_reflection_toggles_presence() {
        let (host, mut el) = element("input");
        el.set_property(&host, "disabled", &true.into()).unwrap();
        el.set_property(&host, "readOnly", &true.into()).unwrap();
        assert!(el.has_attr("disabled"));
        assert!(el.has_attr("readonly"));
        el.set_property(&host, "disabled", &false.into()).unwrap();
        assert!(!el.has_attr("disabled"));
    }

    #[test]
    fn read_only_and_detached_outer_html_fail() {
        let (host, mut el) = element("div");
        assert_eq!(
            el.set_property(&host, "tagName", &"SPAN".into()),
            Err(PropertyError::ReadOnly("tagName".into()))
        );
        assert_eq!(
            el.set_property(&host, "outerHTML", &"<p></p>".into()),
            Err(PropertyError::NoParent("outerHTML".into()))
        );
        assert_eq!(el.name(), Some("div"));
    }

    #[test]
    fn text_content_replaces_markup() {
        let (host, mut el) = element("div");
        el.set_property(&host, "innerHTML", &"<span>x</span>".into())
            .unwrap();
        assert_eq!(el.children().len(), 1);
        assert!(el.children()[0].is_element_named("span"));

        el.set_property(&host, "textContent", &"y".into()).unwrap();
        assert_eq!(el.children().len(), 1);
        assert!(matches!(el.children()[0], Node::Text { .. }));
        assert_eq!(el.text_content(), "y");

        el.set_property(&host, "innerText", &"".into()).unwrap();
        assert!(el.children().is_empty());
    }

    #[test]
    fn expandos_are_kept_on_the_element() {
        let (host, mut el) = element("input");
        el.set_property(&host, "value", &"Ada".into()).unwrap();
        el.set_property(&host, "value", &"Grace".into()).unwrap();
        el.set_property(&host, "whatever", &3.5.into()).unwrap();
        assert_eq!(el.property("value"), Some(&Scalar::Str("Grace".into())));
        assert_eq!(el.property("whatever"), Some(&Scalar::Number(3.5)));
        assert!(!el.has_attr("value"));
    }

    #[test]
    fn dataset_members_merge_without_disturbing_others() {
        let (_, mut el) = element("div");
        el.set_nested_property("dataset", "seed", &1.into()).unwrap();
        el.set_nested_property("dataset", "playerName", &"Ada".into())
            .unwrap();
        el.set_nested_property("dataset", "seed", &2.into()).unwrap();
        assert_eq!(el.dataset_get("seed"), Some("2"));
        assert_eq!(el.dataset_get("playerName"), Some("Ada"));
        assert_eq!(el.attr("data-player-name"), Some("Ada"));
        assert_eq!(
            el.set_nested_property("dataset", "bad-key", &"x".into()),
            Err(PropertyError::InvalidDatasetKey("bad-key".into()))
        );
    }

    #[test]
    fn style_members_merge_and_empty_values_remove() {
        let (host, mut el) = element("div");
        el.set_property(&host, "style", &"color: red; margin: 0".into())
            .unwrap();
        el.set_nested_property("style", "fontSize", &"12px".into())
            .unwrap();
        el.set_nested_property("style", "margin", &"".into()).unwrap();
        assert_eq!(el.style_get("color"), Some("red"));
        assert_eq!(el.style_get("font-size"), Some("12px"));
        assert_eq!(el.style_get("margin"), None);
    }

    #[test]
    fn nested_assignment_onto_unknown_object_fails() {
        let (_, mut el) = element("div");
        assert_eq!(
            el.set_nested_property("classList", "x", &"y".into()),
            Err(PropertyError::NotAnObject("classList".into()))
        );
    }

    #[test]
    fn properties_on_text_nodes_are_rejected() {
        let host = NodeAllocator::new();
        let mut text = host.create_text_node("t");
        assert_eq!(
            text.set_property(&host, "id", &"x".into()),
            Err(PropertyError::NotAnElement)
        );
    }
}
