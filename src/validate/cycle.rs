use std::collections::HashMap;

use crate::interner::IStr;
use crate::model::Element;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Depth-limited cycle detection over `typed_by`/`specializes`/`references`
/// edges (Pass 3, spec.md §4.D). `redefines` edges are excluded by
/// construction — [`crate::model::Element::type_edges`] never includes
/// them, so a redefinition loop alone is not reported here.
///
/// Recursion stops at `max_depth`: a chain longer than that is treated as
/// acyclic rather than walked to exhaustion, bounding the cost on
/// pathologically deep (but ultimately acyclic) specialization chains.
/// `elements` may span several files (multi-model validation shares one
/// cycle check across the whole model set).
pub fn detect_cycles(elements: &[&Element], max_depth: usize) -> Vec<Vec<IStr>> {
    let by_id: HashMap<&str, usize> = elements.iter().enumerate().map(|(i, e)| (&*e.id, i)).collect();

    let mut marks: HashMap<IStr, Mark> = HashMap::new();
    let mut cycles = Vec::new();

    for element in elements {
        if !marks.contains_key(&element.id) {
            let mut stack = Vec::new();
            walk(
                &element.id,
                elements,
                &by_id,
                &mut marks,
                &mut stack,
                0,
                max_depth,
                &mut cycles,
            );
        }
    }
    cycles
}

#[allow(clippy::too_many_arguments)]
fn walk(
    id: &IStr,
    elements: &[&Element],
    by_id: &HashMap<&str, usize>,
    marks: &mut HashMap<IStr, Mark>,
    stack: &mut Vec<IStr>,
    depth: usize,
    max_depth: usize,
    cycles: &mut Vec<Vec<IStr>>,
) {
    if depth > max_depth {
        return;
    }
    marks.insert(id.clone(), Mark::InProgress);
    stack.push(id.clone());

    if let Some(&idx) = by_id.get(&**id) {
        for edge in elements[idx].type_edges() {
            match marks.get(edge) {
                Some(Mark::InProgress) => {
                    if let Some(pos) = stack.iter().position(|s| s == edge) {
                        let mut cycle = stack[pos..].to_vec();
                        cycle.push(edge.clone());
                        cycles.push(cycle);
                    }
                }
                Some(Mark::Done) => {}
                None => walk(edge, elements, by_id, marks, stack, depth + 1, max_depth, cycles),
            }
        }
    }

    stack.pop();
    marks.insert(id.clone(), Mark::Done);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{FileId, Position, SourceRange};
    use crate::model::{Element, ElementKind};
    use std::rc::Rc;

    fn range() -> SourceRange {
        SourceRange::new(
            FileId::new(Rc::from("t.sysml")),
            Position::new(0, 0, 0),
            Position::new(0, 0, 0),
        )
    }

    fn def(id: &str, specializes: &[&str]) -> Element {
        let mut e = Element::new(Rc::from(id), ElementKind::PartDef, range());
        e.name = Some(Rc::from(id));
        e.specializes = specializes.iter().map(|s| Rc::from(*s)).collect();
        e
    }

    #[test]
    fn detects_a_direct_cycle() {
        let a = def("A", &["B"]);
        let b = def("B", &["A"]);
        let cycles = detect_cycles(&[&a, &b], 20);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 3); // A -> B -> A
    }

    #[test]
    fn acyclic_chain_reports_nothing() {
        let a = def("A", &["B"]);
        let b = def("B", &["C"]);
        let c = def("C", &[]);
        assert!(detect_cycles(&[&a, &b, &c], 20).is_empty());
    }

    #[test]
    fn redefines_alone_is_not_a_cycle() {
        let mut a = def("A", &[]);
        a.redefines.push(Rc::from("B"));
        let mut b = def("B", &[]);
        b.redefines.push(Rc::from("A"));
        assert!(detect_cycles(&[&a, &b], 20).is_empty());
    }
}
