use std::fmt;

/// A named graph vertex.
///
/// Identity is the pair `(id, name)`: two vertices are equal only when both
/// components match, and hashing follows the same rule.
/// A graph stores its own copy of every vertex it is given, so renaming a
/// vertex held by the caller never changes the copy inside a graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex {
    id: i64,
    name: String,
}

impl Vertex {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Numeric identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Vertex name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the vertex name.
    ///
    /// This changes the identity of the vertex. A renamed vertex no longer
    /// matches the copy stored in any graph it was inserted into.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns true when both vertices carry the same id, ignoring names.
    pub fn has_same_id(&self, other: &Vertex) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({}, {})", self.id, self.name)
    }
}
