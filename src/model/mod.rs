//! The semantic model: the flat, owned collections an external parser
//! produces and every downstream component (validator, query engine,
//! modifier) consumes (spec.md §3, §6).

mod alias;
mod element;
mod import;
mod kind;
mod relationship;

pub use alias::Alias;
pub use element::{BodyStatement, BodyStatementKind, Direction, Element, MetadataUsage, Visibility};
pub use import::{Import, ImportKind};
pub use kind::ElementKind;
pub use relationship::{Relationship, RelationshipKind};

use crate::interner::IStr;

/// `{source_name, elements[], relationships[], imports[], aliases[]}`
/// (spec.md §6, "Semantic Model contract consumed from the parser").
#[derive(Debug, Clone, Default)]
pub struct SemanticModel {
    pub source_name: Option<IStr>,
    pub elements: Vec<Element>,
    pub relationships: Vec<Relationship>,
    pub imports: Vec<Import>,
    pub aliases: Vec<Alias>,
}

impl SemanticModel {
    pub fn new(source_name: Option<IStr>) -> Self {
        Self {
            source_name,
            elements: Vec::new(),
            relationships: Vec::new(),
            imports: Vec::new(),
            aliases: Vec::new(),
        }
    }

    /// Linear scan by id — the validator and modifier both also build
    /// their own id-keyed indices when they need repeated lookups; this
    /// exists for the one-off call sites where building an index would
    /// cost more than it saves.
    pub fn find_element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| &*e.id == id)
    }

    pub fn find_element_index(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| &*e.id == id)
    }
}
