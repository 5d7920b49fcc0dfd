//! Shared builders for the integration tests in this directory. Kept
//! deliberately small — just enough to assemble a [`SemanticModel`] by
//! hand the way an external parser would, without pulling in a real
//! grammar.

use std::rc::Rc;

use sysml_core::base::{FileId, Position, SourceRange};
use sysml_core::model::{Element, ElementKind};

pub fn range_at(line: usize) -> SourceRange {
    SourceRange::new(
        FileId::new(Rc::from("model.sysml")),
        Position::new(line, 0, line),
        Position::new(line, 0, line),
    )
}

/// A named element at `id`, parented under `parent` (or top-level if
/// `None`), with an ascending source line so diagnostic ordering is
/// observable.
pub fn elem(id: &str, parent: Option<&str>, kind: ElementKind, line: usize) -> Element {
    let mut e = Element::new(Rc::from(id), kind, range_at(line));
    e.name = Some(Rc::from(sysml_core::qualified_id::last_segment(id)));
    e.parent_id = parent.map(Rc::from);
    e
}
