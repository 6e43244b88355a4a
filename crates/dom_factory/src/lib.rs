//! # dom_factory
//!
//! Build configured element nodes from a tag name plus a declarative description: properties,
//! CSS classes and initial text.
//!
//! Two call surfaces behave identically for every tag that is also an identifier:
//!
//! ```
//! use dom_factory::{ElementFactory, Properties};
//! use dom::NodeAllocator;
//!
//! let factory = ElementFactory::new(NodeAllocator::new());
//! let a = factory.div(&Properties::EMPTY, &["c"], "hi").unwrap();
//! let b = factory.build("div", &Properties::EMPTY, &["c"], "hi").unwrap();
//! assert_eq!(a.class_list(), b.class_list());
//!
//! // Custom elements are only reachable through `build`.
//! let widget = factory.build("x-custom-widget", &Properties::EMPTY, &[], "").unwrap();
//! assert_eq!(widget.name(), Some("x-custom-widget"));
//! ```
//!
//! Invalid tag names are an error (`FactoryError::InvalidTag`). Per-property failures are
//! warnings: logged at `warn`, returned by `build_report`, and never abort the build.

mod descriptor;
mod error;
mod factory;
mod tag;
mod tags;

pub use descriptor::{ElementDescriptor, Properties, PropertyValue};
pub use error::{BuildWarning, FactoryError};
pub use factory::{Built, ElementFactory, Member, TagCall};
pub use tag::{is_custom_element_name, is_identifier, is_valid_tag};
