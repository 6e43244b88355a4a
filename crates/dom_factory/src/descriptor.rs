use dom::Scalar;

/// One property value: either assigned directly, or merged member-wise into a nested object
/// (`dataset`, `style`) that already exists on the element.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Scalar(Scalar),
    Nested(Vec<(String, Scalar)>),
}

impl From<Scalar> for PropertyValue {
    fn from(value: Scalar) -> Self {
        PropertyValue::Scalar(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Scalar(value.into())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Scalar(value.into())
    }
}

impl From<&String> for PropertyValue {
    fn from(value: &String) -> Self {
        PropertyValue::Scalar(value.into())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Scalar(value.into())
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Scalar(value.into())
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Scalar(value.into())
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        PropertyValue::Scalar(value.into())
    }
}

/// Insertion-ordered property map. Setting an existing key replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties {
    entries: Vec<(String, PropertyValue)>,
}

impl Properties {
    pub const EMPTY: Properties = Properties {
        entries: Vec::new(),
    };

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a nested object whose members are assigned one key at a time.
    pub fn nested<K, V>(
        mut self,
        key: impl Into<String>,
        members: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<Scalar>,
    {
        let members = members
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.insert(key, PropertyValue::Nested(members));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Properties::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

/// Everything needed to build one element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementDescriptor {
    pub tag: String,
    pub properties: Properties,
    pub classes: Vec<String>,
    pub text_content: String,
}

impl ElementDescriptor {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_classes<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_text(mut self, text_content: impl Into<String>) -> Self {
        self.text_content = text_content.into();
        self
    }
}
