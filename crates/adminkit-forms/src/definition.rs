//! The form-definition builder.
//!
//! [`FormDefinition`] is the declaration DSL for a record's input form:
//! declare fields by name or by pre-built element, optionally override
//! the input widget, position entries, group fields into sections, and
//! apply editors and hint texts to already-declared fields by name.
//!
//! ```
//! use adminkit_forms::{FormDefinition, InputSpec, Position};
//!
//! # fn main() -> adminkit_core::AdminResult<()> {
//! let form = FormDefinition::new()
//!     .section("basic", None)?
//!     .create("title", None, None)?
//!     .create("body", Some(InputSpec::kind("textarea")), None)?
//!     .section("media", Some(Position::at(0)))?
//!     .editors("body", Some("markdown"))
//!     .hints("title", Some("Max 80 chars"))?;
//!
//! assert!(form.has_editors("markdown")?);
//! # Ok(())
//! # }
//! ```
//!
//! The builder runs on the caller's thread during a synchronous
//! configuration phase; the finished definition is handed off read-only
//! to a renderer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use adminkit_core::{AdminError, AdminResult};

use crate::collection::{OrderedCollection, Position};
use crate::element::{FormElement, FormItem, FormSection};
use crate::inputs::{self, EditorKind};

/// A field declaration: a bare identifier or a pre-built element.
pub enum ElementSpec {
    /// Declare a new field named by this identifier.
    Id(String),
    /// Use an already-constructed element as-is.
    Element(FormElement),
}

impl From<&str> for ElementSpec {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for ElementSpec {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<FormElement> for ElementSpec {
    fn from(element: FormElement) -> Self {
        Self::Element(element)
    }
}

/// An input override: a widget type name or an ad-hoc configurator.
///
/// A type name goes through the input factory and preserves the old
/// input's relation binding and translatable flag. A configurator is
/// invoked on the element for side effects and nothing else happens.
pub enum InputSpec {
    /// Resolve this widget type name through the input factory.
    Kind(String),
    /// Run this closure against the not-yet-inserted element.
    Configure(Box<dyn FnOnce(&mut FormElement)>),
}

impl InputSpec {
    /// An input override by widget type name.
    pub fn kind(name: impl Into<String>) -> Self {
        Self::Kind(name.into())
    }

    /// An input override by configurator closure.
    pub fn configure(configure: impl FnOnce(&mut FormElement) + 'static) -> Self {
        Self::Configure(Box::new(configure))
    }
}

impl From<&str> for InputSpec {
    fn from(name: &str) -> Self {
        Self::Kind(name.to_string())
    }
}

/// A configuration target: one field id, or an id-to-value mapping.
///
/// Used by [`FormDefinition::editors`] and [`FormDefinition::hints`],
/// whose mapping form applies the paired value per field.
pub enum FieldSpec {
    /// A single field id; the value comes from the second argument.
    One(String),
    /// `(field id, value)` pairs applied in order.
    Many(Vec<(String, String)>),
}

impl From<&str> for FieldSpec {
    fn from(id: &str) -> Self {
        Self::One(id.to_string())
    }
}

impl From<String> for FieldSpec {
    fn from(id: String) -> Self {
        Self::One(id)
    }
}

impl From<Vec<(String, String)>> for FieldSpec {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::Many(pairs)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FieldSpec {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::Many(
            pairs
                .into_iter()
                .map(|(field, value)| (field.to_string(), value.to_string()))
                .collect(),
        )
    }
}

/// The ordered description of one record's input form.
///
/// Built through the chainable methods below during form definition,
/// then consumed read-only by a renderer. Not intended for concurrent
/// mutation; the whole API is synchronous and single-threaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    items: OrderedCollection<FormItem>,
}

impl FormDefinition {
    /// Creates an empty form definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a form element.
    ///
    /// `element` is a field identifier or a pre-built [`FormElement`].
    /// `input` optionally overrides the element's input: a type name is
    /// resolved through the factory (keeping the old input's relation
    /// binding and translatable flag), a configurator is invoked on the
    /// element directly.
    ///
    /// `position` places the element: [`Position::At`] inserts at that
    /// index directly; an anchor position appends first and then moves
    /// the element, resolved by the collection's move semantics; `None`
    /// appends at the end.
    pub fn create(
        mut self,
        element: impl Into<ElementSpec>,
        input: Option<InputSpec>,
        position: Option<Position>,
    ) -> AdminResult<Self> {
        let mut element = match element.into() {
            ElementSpec::Id(id) => {
                if id.is_empty() {
                    return Err(AdminError::InvalidArgument(
                        "element must be a named identifier or a form element instance"
                            .to_string(),
                    ));
                }
                FormElement::new(id)
            }
            ElementSpec::Element(element) => element,
        };

        match input {
            Some(InputSpec::Kind(name)) => {
                let input = inputs::switch_kind(element.input(), &name)?;
                element.set_input(input);
            }
            Some(InputSpec::Configure(configure)) => configure(&mut element),
            None => {}
        }

        debug!(id = element.id(), "declared form element");

        match position {
            // A numeric position is a direct insert; the element is never
            // separately appended.
            Some(Position::At(index)) => self.items.insert(element.into(), index),
            Some(marker) => {
                let id = element.id().to_string();
                self.items.push(element.into());
                self.items.move_to(&id, &marker)?;
            }
            None => self.items.push(element.into()),
        }

        Ok(self)
    }

    /// Declares a grouping section, by id or pre-built [`FormSection`].
    pub fn section(
        mut self,
        section: impl Into<SectionSpec>,
        position: Option<Position>,
    ) -> AdminResult<Self> {
        let section = match section.into() {
            SectionSpec::Id(id) => FormSection::new(id),
            SectionSpec::Section(section) => section,
        };

        debug!(id = section.id(), "declared form section");

        match position {
            Some(Position::At(index)) => self.items.insert(section.into(), index),
            Some(marker) => {
                let id = section.id().to_string();
                self.items.push(section.into());
                self.items.move_to(&id, &marker)?;
            }
            None => self.items.push(section.into()),
        }

        Ok(self)
    }

    /// Declares a media-gallery field bound to a named media collection.
    pub fn media(self, collection: &str, position: Option<Position>) -> AdminResult<Self> {
        self.create(FormElement::media(collection), None, position)
    }

    /// Returns `true` if at least one rich-text field currently has the
    /// named editor enabled.
    ///
    /// Unlike [`Self::editors`], the editor name is validated strictly:
    /// names outside the known set fail with
    /// [`AdminError::InvalidArgument`].
    pub fn has_editors(&self, editor: &str) -> AdminResult<bool> {
        let kind = EditorKind::parse(editor)
            .ok_or_else(|| AdminError::InvalidArgument(format!("unknown editor {editor}")))?;

        let hits = self.items.filter(|item| {
            item.as_field()
                .is_some_and(|field| field.enabled_editor() == Some(kind))
        });
        Ok(!hits.is_empty())
    }

    /// Enables rich-text editors on already-declared fields.
    ///
    /// `fields` is one field id (paired with `editor`) or an
    /// id-to-editor mapping. The single-field branch is deliberately
    /// lenient: a missing field, a non-rich-text field, or an unknown
    /// editor name is treated as "not applicable" and skipped without
    /// error. Use [`Self::has_editors`] for strict validation.
    pub fn editors(mut self, fields: impl Into<FieldSpec>, editor: Option<&str>) -> Self {
        match fields.into() {
            FieldSpec::Many(pairs) => {
                for (field, editor) in pairs {
                    self = self.editors(field, Some(&editor));
                }
            }
            FieldSpec::One(id) => {
                let Some(editor) = editor.filter(|editor| !editor.is_empty()) else {
                    return self;
                };
                let Some(kind) = EditorKind::parse(editor) else {
                    debug!(field = %id, editor, "ignoring unknown editor");
                    return self;
                };
                if let Some(field) = self
                    .items
                    .find_mut(&id)
                    .and_then(FormItem::as_field_mut)
                {
                    if field.supports_editor(kind) {
                        field.enable_editor(kind);
                    }
                }
            }
        }

        self
    }

    /// Sets hint/description texts on already-declared items.
    ///
    /// `fields` is one item id (paired with `hint`) or an id-to-hint
    /// mapping. An id absent from the definition fails with
    /// [`AdminError::NotFound`].
    pub fn hints(mut self, fields: impl Into<FieldSpec>, hint: Option<&str>) -> AdminResult<Self> {
        match fields.into() {
            FieldSpec::Many(pairs) => {
                for (field, hint) in pairs {
                    self = self.hints(field, Some(&hint))?;
                }
            }
            FieldSpec::One(id) => {
                let Some(hint) = hint.filter(|hint| !hint.is_empty()) else {
                    return Ok(self);
                };
                self.items
                    .find_mut(&id)
                    .ok_or(AdminError::NotFound(id))?
                    .set_description(hint);
            }
        }

        Ok(self)
    }

    /// Returns the item with the given id, if declared.
    pub fn find(&self, id: &str) -> Option<&FormItem> {
        self.items.find(id)
    }

    /// Returns the number of declared items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates all items in rendering order.
    pub fn iter(&self) -> std::slice::Iter<'_, FormItem> {
        self.items.iter()
    }

    /// Iterates only the fields, in rendering order.
    pub fn fields(&self) -> impl Iterator<Item = &FormElement> {
        self.items.iter().filter_map(FormItem::as_field)
    }

    /// Iterates only the sections, in rendering order.
    pub fn sections(&self) -> impl Iterator<Item = &FormSection> {
        self.items.iter().filter_map(FormItem::as_section)
    }
}

impl<'a> IntoIterator for &'a FormDefinition {
    type Item = &'a FormItem;
    type IntoIter = std::slice::Iter<'a, FormItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A section declaration: a bare identifier or a pre-built section.
pub enum SectionSpec {
    /// Declare a new section named by this identifier.
    Id(String),
    /// Use an already-constructed section as-is.
    Section(FormSection),
}

impl From<&str> for SectionSpec {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for SectionSpec {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<FormSection> for SectionSpec {
    fn from(section: FormSection) -> Self {
        Self::Section(section)
    }
}
