use crate::error::PropertyError;
use crate::types::Node;

impl Node {
    /// Tokens of the `class` attribute, in order.
    pub fn class_list(&self) -> Vec<&str> {
        self.attr("class")
            .map(|c| c.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.class_list().contains(&token)
    }

    /// Append `token` unless it is already present.
    pub fn add_class(&mut self, token: &str) -> Result<(), PropertyError> {
        if !self.is_element() {
            return Err(PropertyError::NotAnElement);
        }
        if token.is_empty() || token.bytes().any(|b| b.is_ascii_whitespace()) {
            return Err(PropertyError::InvalidToken(token.to_string()));
        }
        if self.has_class(token) {
            return Ok(());
        }
        let mut value = self.class_list().join(" ");
        if !value.is_empty() {
            value.push(' ');
        }
        value.push_str(token);
        self.set_attr("class", Some(value));
        Ok(())
    }
}
