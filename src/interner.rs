//! String interner for efficient string storage and comparison.
//!
//! Uses `Rc<str>` for cheap cloning (reference count increment instead of
//! allocation) and hashes candidate bytes with FNV-1a (the `fnv` crate) so
//! that interning a several-hundred-element model stays close to linear
//! time. The interner deduplicates strings so that identical byte
//! sequences always share the same allocation — equality becomes pointer
//! equality for every consumer downstream (symbol tables, element ids,
//! type references, …).

use fnv::FnvBuildHasher;
use std::collections::HashSet;
use std::rc::Rc;

/// An interned string — cheap to clone (just an `Rc` increment).
///
/// Two `IStr` values are equal iff they are the *same* allocation:
/// compare with `Rc::ptr_eq`, not `==`, wherever the spec's "pointer
/// equality" invariant is load-bearing (it still round-trips through
/// `PartialEq` on `Rc<str>`, which compares content, not identity — callers
/// that need the stronger guarantee use `Interner::ptr_eq`).
pub type IStr = Rc<str>;

/// String interner that deduplicates strings.
///
/// Interning a string returns an `Rc<str>` that can be cheaply cloned. If
/// the same byte sequence is interned multiple times, the same `Rc` is
/// returned every time — this is what spec.md calls "interning
/// idempotence".
#[derive(Debug, Default, Clone)]
pub struct Interner {
    strings: HashSet<Rc<str>, FnvBuildHasher>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning a cheap-to-clone reference.
    ///
    /// If the string was already interned, returns the existing `Rc`.
    /// Otherwise allocates a new `Rc` and stores it.
    pub fn intern(&mut self, s: &str) -> IStr {
        if let Some(existing) = self.strings.get(s) {
            Rc::clone(existing)
        } else {
            let rc: Rc<str> = Rc::from(s);
            self.strings.insert(Rc::clone(&rc));
            rc
        }
    }

    /// Intern the first `len` bytes of `s` (substring interning without an
    /// intermediate owned copy when `s` already happens to be that long).
    ///
    /// # Panics
    ///
    /// Panics if `len` does not land on a UTF-8 char boundary — callers
    /// pass lengths derived from `str` segmentation (e.g. `::` splitting),
    /// never arbitrary byte counts.
    pub fn intern_n(&mut self, s: &str, len: usize) -> IStr {
        self.intern(&s[..len])
    }

    /// Intern an owned string, avoiding an extra allocation when it must
    /// already be built (e.g. a `format!`-assembled qualified id).
    pub fn intern_string(&mut self, s: String) -> IStr {
        if let Some(existing) = self.strings.get(s.as_str()) {
            Rc::clone(existing)
        } else {
            let rc: Rc<str> = Rc::from(s);
            self.strings.insert(Rc::clone(&rc));
            rc
        }
    }

    /// Look up a string without interning it. Never inserts.
    pub fn lookup(&self, s: &str) -> Option<IStr> {
        self.strings.get(s).cloned()
    }

    /// Number of distinct strings interned.
    pub fn count(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// True iff `a` and `b` are the same interned allocation.
    pub fn ptr_eq(a: &IStr, b: &IStr) -> bool {
        Rc::ptr_eq(a, b)
    }
}
