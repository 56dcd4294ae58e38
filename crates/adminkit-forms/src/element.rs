//! Form element and section descriptors.
//!
//! A [`FormElement`] describes one editable field of a record form; a
//! [`FormSection`] is a named grouping header between fields. Both are
//! addressable by a stable string id and stored together, in rendering
//! order, as [`FormItem`] entries of one collection.

use serde::{Deserialize, Serialize};

use crate::collection::Keyed;
use crate::inputs::{EditorKind, InputConfig, InputKind};

/// One editable field of a record form.
///
/// New elements default to a plain text input; the declaration DSL swaps
/// the input afterwards (see [`crate::FormDefinition::create`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormElement {
    id: String,
    label: String,
    description: Option<String>,
    input: InputConfig,
}

impl FormElement {
    /// Creates a field named by `id`, with a text input and a label
    /// derived from the id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let label = id.replace('_', " ");
        let input = InputConfig::new(id.clone(), InputKind::Text);
        Self {
            id,
            label,
            description: None,
            input,
        }
    }

    /// Creates a media-gallery field bound to a named media collection.
    pub fn media(collection: impl Into<String>) -> Self {
        let collection = collection.into();
        let mut element = Self::new(collection.clone());
        element.input.kind = InputKind::Media { collection };
        element
    }

    /// Returns the element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Returns the hint/description text, if set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sets the hint/description text.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Returns the input configuration.
    pub fn input(&self) -> &InputConfig {
        &self.input
    }

    /// Returns the input configuration mutably.
    pub fn input_mut(&mut self) -> &mut InputConfig {
        &mut self.input
    }

    /// Replaces the input configuration.
    pub fn set_input(&mut self, input: InputConfig) {
        self.input = input;
    }

    /// Returns `true` if this field can enable the given editor kind.
    pub fn supports_editor(&self, editor: EditorKind) -> bool {
        self.input.supports_editor(editor)
    }

    /// Enables an editor on this field. No-op unless rich-text-capable.
    pub fn enable_editor(&mut self, editor: EditorKind) {
        self.input.enable_editor(editor);
    }

    /// Returns the currently enabled editor, if any.
    pub fn enabled_editor(&self) -> Option<EditorKind> {
        self.input.enabled_editor()
    }
}

/// A named grouping section between fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSection {
    id: String,
    title: String,
    description: Option<String>,
}

impl FormSection {
    /// Creates a section named by `id`, with a title derived from the id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let title = id.replace('_', " ");
        Self {
            id,
            title,
            description: None,
        }
    }

    /// Returns the section id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the section title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns the description text, if set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sets the description text.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }
}

/// One entry of a form definition: a field or a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "item", rename_all = "lowercase")]
pub enum FormItem {
    /// An editable field.
    Field(FormElement),
    /// A grouping section.
    Section(FormSection),
}

impl FormItem {
    /// Returns the item id.
    pub fn id(&self) -> &str {
        match self {
            Self::Field(element) => element.id(),
            Self::Section(section) => section.id(),
        }
    }

    /// Returns the field descriptor, if this item is a field.
    pub fn as_field(&self) -> Option<&FormElement> {
        match self {
            Self::Field(element) => Some(element),
            Self::Section(_) => None,
        }
    }

    /// Returns the field descriptor mutably, if this item is a field.
    pub fn as_field_mut(&mut self) -> Option<&mut FormElement> {
        match self {
            Self::Field(element) => Some(element),
            Self::Section(_) => None,
        }
    }

    /// Returns the section descriptor, if this item is a section.
    pub fn as_section(&self) -> Option<&FormSection> {
        match self {
            Self::Field(_) => None,
            Self::Section(section) => Some(section),
        }
    }

    /// Sets the hint/description text on either item shape.
    pub fn set_description(&mut self, description: impl Into<String>) {
        match self {
            Self::Field(element) => element.set_description(description),
            Self::Section(section) => section.set_description(description),
        }
    }
}

impl Keyed for FormItem {
    fn key(&self) -> &str {
        self.id()
    }
}

impl From<FormElement> for FormItem {
    fn from(element: FormElement) -> Self {
        Self::Field(element)
    }
}

impl From<FormSection> for FormItem {
    fn from(section: FormSection) -> Self {
        Self::Section(section)
    }
}
