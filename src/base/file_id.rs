/// Interned handle to a source file name.
///
/// Two elements parsed from the same file carry the same `FileId` without
/// repeating the path string; `FileId` compares by the same pointer
/// equality the rest of the core relies on, since it wraps an
/// [`crate::interner::IStr`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileId(pub(crate) crate::interner::IStr);

impl FileId {
    pub fn new(name: crate::interner::IStr) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
