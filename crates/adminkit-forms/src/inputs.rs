//! Input configuration and the input factory.
//!
//! Every form field carries an [`InputConfig`] describing the widget that
//! edits it: the widget kind, an optional relation binding, and a
//! translatable flag. The factory functions [`resolve`] and [`switch_kind`]
//! turn type-name strings (the declaration DSL, e.g. `"textarea"`) into
//! concrete configurations.

use std::fmt;

use serde::{Deserialize, Serialize};

use adminkit_core::{AdminError, AdminResult};

/// Enumerates the rich-text editors a textarea input can enable.
///
/// The set is closed: editor names outside it are rejected by strict
/// call sites ([`crate::FormDefinition::has_editors`]) and ignored by
/// lenient ones ([`crate::FormDefinition::editors`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorKind {
    /// CKEditor.
    Ckeditor,
    /// TinyMCE.
    Tinymce,
    /// Medium-style inline editor.
    Medium,
    /// Plain markdown editing.
    Markdown,
}

impl EditorKind {
    /// All known editor kinds.
    pub const ALL: [Self; 4] = [Self::Ckeditor, Self::Tinymce, Self::Medium, Self::Markdown];

    /// Parses an editor name, returning `None` for anything outside the set.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ckeditor" => Some(Self::Ckeditor),
            "tinymce" => Some(Self::Tinymce),
            "medium" => Some(Self::Medium),
            "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ckeditor => "ckeditor",
            Self::Tinymce => "tinymce",
            Self::Medium => "medium",
            Self::Markdown => "markdown",
        }
    }
}

impl fmt::Display for EditorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of relationship a relation-bound field represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Field references a single parent record.
    BelongsTo,
    /// Field references many records through a join.
    BelongsToMany,
    /// Field owns a single child record.
    HasOne,
    /// Field owns many child records.
    HasMany,
}

/// Metadata marking a field as referencing another record type.
///
/// A relation binding survives widget-type switches: replacing a field's
/// input via [`switch_kind`] carries the binding onto the new config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// The relationship shape.
    pub kind: RelationKind,
    /// The related record type (e.g. "author", "tags").
    pub target: String,
}

impl Relation {
    /// Creates a relation binding.
    pub fn new(kind: RelationKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }
}

/// Enumerates the built-in input widget kinds.
///
/// Kind-specific state lives on the variant. Only `Textarea` is
/// rich-text-capable; its enabled editor is part of the kind so a field
/// can never hold more than one active editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputKind {
    /// `<input type="text">`.
    Text,
    /// `<textarea>`, optionally backed by a rich-text editor.
    Textarea {
        /// The currently enabled editor, if any.
        editor: Option<EditorKind>,
    },
    /// `<input type="number">`.
    Number,
    /// `<input type="email">`.
    Email,
    /// `<input type="password">`.
    Password,
    /// `<input type="hidden">`.
    Hidden,
    /// `<input type="checkbox">`.
    Checkbox,
    /// `<select>` over `(value, label)` pairs.
    Select {
        /// Available choices.
        choices: Vec<(String, String)>,
    },
    /// `<input type="date">`.
    Date,
    /// `<input type="datetime-local">`.
    Datetime,
    /// `<input type="file">`.
    File,
    /// A media gallery bound to a named media collection.
    Media {
        /// The media collection this field manages.
        collection: String,
    },
}

/// The input configuration of one form field.
///
/// The `name` matches the owning element's id and becomes the HTML name
/// attribute when the consuming renderer draws the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// The field name this input edits.
    pub name: String,
    /// The widget kind.
    pub kind: InputKind,
    /// Relation binding, if the field references another record type.
    pub relation: Option<Relation>,
    /// Whether the field holds per-locale values.
    pub translatable: bool,
}

impl InputConfig {
    /// Creates an input configuration of the given kind.
    pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            kind,
            relation: None,
            translatable: false,
        }
    }

    /// Sets the relation binding.
    #[must_use]
    pub fn relation(mut self, relation: Relation) -> Self {
        self.relation = Some(relation);
        self
    }

    /// Sets the translatable flag.
    #[must_use]
    pub fn translatable(mut self, translatable: bool) -> Self {
        self.translatable = translatable;
        self
    }

    /// Returns `true` if this input can host a rich-text editor.
    pub fn is_rich_text(&self) -> bool {
        matches!(self.kind, InputKind::Textarea { .. })
    }

    /// Returns `true` if this input can enable the given editor kind.
    pub fn supports_editor(&self, _editor: EditorKind) -> bool {
        // All known editors are available on any rich-text input.
        self.is_rich_text()
    }

    /// Enables an editor on a rich-text input. No-op on any other kind.
    ///
    /// A textarea holds at most one active editor, so enabling is
    /// idempotent and enabling a second kind replaces the first.
    pub fn enable_editor(&mut self, editor: EditorKind) {
        if let InputKind::Textarea { editor: current } = &mut self.kind {
            *current = Some(editor);
        }
    }

    /// Returns the currently enabled editor, if this is a rich-text input.
    pub fn enabled_editor(&self) -> Option<EditorKind> {
        match &self.kind {
            InputKind::Textarea { editor } => *editor,
            _ => None,
        }
    }
}

/// Resolves a type-name string from the declaration DSL into an input kind.
///
/// Unknown names fail with [`AdminError::InvalidArgument`].
pub fn resolve(name: &str) -> AdminResult<InputKind> {
    match name {
        "text" => Ok(InputKind::Text),
        "textarea" => Ok(InputKind::Textarea { editor: None }),
        "number" => Ok(InputKind::Number),
        "email" => Ok(InputKind::Email),
        "password" => Ok(InputKind::Password),
        "hidden" => Ok(InputKind::Hidden),
        "checkbox" => Ok(InputKind::Checkbox),
        "select" => Ok(InputKind::Select {
            choices: Vec::new(),
        }),
        "date" => Ok(InputKind::Date),
        "datetime" => Ok(InputKind::Datetime),
        "file" => Ok(InputKind::File),
        _ => Err(AdminError::InvalidArgument(format!(
            "unknown input type {name}"
        ))),
    }
}

/// Builds a replacement input of the named kind for an existing field.
///
/// The old config's relation binding and translatable flag carry over to
/// the new config; dropping them would silently break relation-bound or
/// localized fields whenever their widget type is overridden.
pub fn switch_kind(old: &InputConfig, name: &str) -> AdminResult<InputConfig> {
    let kind = resolve(name)?;
    let mut input = InputConfig::new(old.name.clone(), kind);
    input.relation = old.relation.clone();
    input.translatable = old.translatable;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_kind_parse() {
        assert_eq!(EditorKind::parse("ckeditor"), Some(EditorKind::Ckeditor));
        assert_eq!(EditorKind::parse("markdown"), Some(EditorKind::Markdown));
        assert_eq!(EditorKind::parse("froala"), None);
        assert_eq!(EditorKind::parse(""), None);
    }

    #[test]
    fn test_editor_kind_round_trip() {
        for kind in EditorKind::ALL {
            assert_eq!(EditorKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_resolve_known_kinds() {
        assert_eq!(resolve("text").unwrap(), InputKind::Text);
        assert_eq!(
            resolve("textarea").unwrap(),
            InputKind::Textarea { editor: None }
        );
        assert_eq!(resolve("datetime").unwrap(), InputKind::Datetime);
    }

    #[test]
    fn test_resolve_unknown_kind() {
        let err = resolve("carousel").unwrap_err();
        assert_eq!(
            err,
            AdminError::InvalidArgument("unknown input type carousel".to_string())
        );
    }

    #[test]
    fn test_switch_kind_preserves_relation_and_translatable() {
        let old = InputConfig::new("author", InputKind::Text)
            .relation(Relation::new(RelationKind::BelongsTo, "author"))
            .translatable(true);

        let new = switch_kind(&old, "select").unwrap();
        assert!(matches!(new.kind, InputKind::Select { .. }));
        assert_eq!(
            new.relation,
            Some(Relation::new(RelationKind::BelongsTo, "author"))
        );
        assert!(new.translatable);
        assert_eq!(new.name, "author");
    }

    #[test]
    fn test_switch_kind_unknown_name() {
        let old = InputConfig::new("body", InputKind::Text);
        assert!(matches!(
            switch_kind(&old, "froala"),
            Err(AdminError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_enable_editor_idempotent() {
        let mut input = InputConfig::new("body", InputKind::Textarea { editor: None });
        input.enable_editor(EditorKind::Markdown);
        input.enable_editor(EditorKind::Markdown);
        assert_eq!(input.enabled_editor(), Some(EditorKind::Markdown));
    }

    #[test]
    fn test_enable_editor_replaces_previous() {
        let mut input = InputConfig::new("body", InputKind::Textarea { editor: None });
        input.enable_editor(EditorKind::Ckeditor);
        input.enable_editor(EditorKind::Tinymce);
        assert_eq!(input.enabled_editor(), Some(EditorKind::Tinymce));
    }

    #[test]
    fn test_enable_editor_noop_on_plain_input() {
        let mut input = InputConfig::new("title", InputKind::Text);
        input.enable_editor(EditorKind::Markdown);
        assert_eq!(input.enabled_editor(), None);
        assert!(!input.supports_editor(EditorKind::Markdown));
    }
}
