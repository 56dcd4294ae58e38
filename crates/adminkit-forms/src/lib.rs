//! # adminkit-forms
//!
//! Form-definition builder for the adminkit toolkit. Provides the
//! [`FormDefinition`] declaration DSL, field and section descriptors,
//! input configuration with relation/translatable metadata, and the
//! insertion-ordered collection that carries rendering order.
//!
//! ## Modules
//!
//! - [`collection`] - Keyed, insertion-ordered collection and positions
//! - [`element`] - Field and section descriptors
//! - [`inputs`] - Input configuration and the input factory
//! - [`definition`] - The [`FormDefinition`] builder facade

pub mod collection;
pub mod definition;
pub mod element;
pub mod inputs;

// Re-export the most commonly used types at the crate root.
pub use collection::{Keyed, OrderedCollection, Position};
pub use definition::{ElementSpec, FieldSpec, FormDefinition, InputSpec, SectionSpec};
pub use element::{FormElement, FormItem, FormSection};
pub use inputs::{EditorKind, InputConfig, InputKind, Relation, RelationKind};
