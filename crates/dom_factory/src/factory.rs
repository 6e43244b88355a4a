use crate::descriptor::{ElementDescriptor, Properties, PropertyValue};
use crate::error::{BuildWarning, FactoryError};
use crate::tag::{is_custom_element_name, is_identifier, is_valid_tag};
use dom::{DocumentHost, Node, NodeAllocator};

/// Builds detached, fully configured element nodes through a [`DocumentHost`].
///
/// The factory keeps no reference to what it builds and holds no state of its own beyond the
/// host handle, so a failed build never affects earlier or later ones.
///
/// Invalid tag names always fail with [`FactoryError::InvalidTag`]; there is no lenient mode.
#[derive(Clone, Debug, Default)]
pub struct ElementFactory<H = NodeAllocator> {
    host: H,
}

/// A built element together with the warnings raised while configuring it.
#[derive(Clone, Debug, PartialEq)]
pub struct Built {
    pub node: Node,
    pub warnings: Vec<BuildWarning>,
}

/// Result of looking a name up on the factory at run time.
///
/// Real methods are never shadowed by tag builders.
#[derive(Debug)]
pub enum Member<'f, H> {
    Build,
    Text,
    Method(&'static str),
    Tag(TagCall<'f, H>),
}

/// A by-name tag builder: calling it is `build(tag, ..)`.
#[derive(Debug)]
pub struct TagCall<'f, H> {
    factory: &'f ElementFactory<H>,
    tag: String,
}

const METHODS: [&str; 6] = [
    "build",
    "build_report",
    "build_descriptor",
    "text",
    "member",
    "host",
];

impl<H: DocumentHost> ElementFactory<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Build an element, logging any warnings at `warn`.
    pub fn build(
        &self,
        tag: &str,
        properties: &Properties,
        classes: &[&str],
        text_content: &str,
    ) -> Result<Node, FactoryError> {
        self.build_report(tag, properties, classes, text_content)
            .map(|built| built.node)
    }

    /// Like [`ElementFactory::build`], also handing back the warnings.
    ///
    /// Order of operations: properties (insertion order), then classes, then text content.
    /// Text content therefore overrides anything `innerHTML` put there.
    pub fn build_report(
        &self,
        tag: &str,
        properties: &Properties,
        classes: &[&str],
        text_content: &str,
    ) -> Result<Built, FactoryError> {
        if !is_valid_tag(tag) {
            log::debug!(target: "dom_factory.build", "rejecting tag {tag:?}");
            return Err(FactoryError::InvalidTag(tag.to_string()));
        }

        let mut element = self.host.create_element(tag);
        let mut warnings = Vec::new();

        for (key, value) in properties.iter() {
            match value {
                PropertyValue::Nested(members) => {
                    for (member, scalar) in members {
                        if let Err(error) = element.set_nested_property(key, member, scalar) {
                            warnings.push(BuildWarning::Property {
                                key: format!("{key}.{member}"),
                                error,
                            });
                        }
                    }
                }
                PropertyValue::Scalar(scalar) => {
                    if let Err(error) = element.set_property(&self.host, key, scalar) {
                        warnings.push(BuildWarning::Property {
                            key: key.to_string(),
                            error,
                        });
                    }
                }
            }
        }

        let markup_set = matches!(properties.get("innerHTML"), Some(PropertyValue::Scalar(_)));
        if markup_set && !text_content.is_empty() {
            warnings.push(BuildWarning::TextOverridesMarkup);
        }

        for class in classes {
            if let Err(error) = element.add_class(class) {
                warnings.push(BuildWarning::InvalidClass {
                    class: class.to_string(),
                    error,
                });
            }
        }

        if !text_content.is_empty() {
            element.set_text_content(&self.host, text_content);
        }

        for warning in &warnings {
            log::warn!(target: "dom_factory.build", "<{tag}>: {warning}");
        }
        log::trace!(
            target: "dom_factory.build",
            "built <{tag}> as {:?} ({} properties, {} classes)",
            element.id(),
            properties.len(),
            classes.len()
        );

        Ok(Built {
            node: element,
            warnings,
        })
    }

    pub fn build_descriptor(&self, descriptor: &ElementDescriptor) -> Result<Node, FactoryError> {
        let classes: Vec<&str> = descriptor.classes.iter().map(String::as_str).collect();
        self.build(
            &descriptor.tag,
            &descriptor.properties,
            &classes,
            &descriptor.text_content,
        )
    }

    /// A bare text node. No validation.
    pub fn text(&self, text_content: &str) -> Node {
        self.host.create_text_node(text_content)
    }

    /// Resolve `name` at run time: factory methods first, then a tag builder.
    ///
    /// Names that are not identifiers (custom elements such as `x-widget`) cannot be reached
    /// this way and must go through [`ElementFactory::build`].
    pub fn member(&self, name: &str) -> Result<Member<'_, H>, FactoryError> {
        match name {
            "build" => return Ok(Member::Build),
            "text" => return Ok(Member::Text),
            _ => {}
        }
        if let Some(method) = METHODS.iter().find(|m| **m == name) {
            return Ok(Member::Method(*method));
        }
        if !is_identifier(name) {
            if is_custom_element_name(name) {
                log::debug!(target: "dom_factory.build", "<{name}> is a custom element; use `build`");
            }
            return Err(FactoryError::NotAnIdentifier(name.to_string()));
        }
        Ok(Member::Tag(TagCall {
            factory: self,
            tag: name.to_string(),
        }))
    }
}

impl<H: DocumentHost> TagCall<'_, H> {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn call(
        &self,
        properties: &Properties,
        classes: &[&str],
        text_content: &str,
    ) -> Result<Node, FactoryError> {
        self.factory
            .build(&self.tag, properties, classes, text_content)
    }
}
