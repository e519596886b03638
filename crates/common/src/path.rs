//! Field paths for locating values inside the source document

use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// One step from a JSON node to one of its children
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a value in the source document
///
/// Rendered the way it would be written to reach the value from the root,
/// e.g. `paths["/pets"].get.responses.default.description`. Keys that are
/// plain identifiers are dotted, anything else is bracket-quoted.
///
/// Paths are persistent: a child shares its parent's segments, so
/// descending one level allocates a single segment.
#[derive(Clone, Default)]
pub struct FieldPath(Option<Arc<PathNode>>);

struct PathNode {
    parent: FieldPath,
    segment: Segment,
    depth: usize,
}

impl FieldPath {
    pub fn root() -> Self {
        Self(None)
    }

    /// Path to the member `key` of the value at this path
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(Segment::Key(key.into()))
    }

    /// Path to element `index` of the sequence at this path
    pub fn index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }

    fn child(&self, segment: Segment) -> Self {
        Self(Some(Arc::new(PathNode {
            parent: self.clone(),
            segment,
            depth: self.depth() + 1,
        })))
    }

    /// Nodes from the last segment back to the first
    fn nodes(&self) -> impl Iterator<Item = &PathNode> {
        std::iter::successors(self.0.as_deref(), |node| node.parent.0.as_deref())
    }

    /// Segments from the root down
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments: Vec<Segment> = self.nodes().map(|node| node.segment.clone()).collect();
        segments.reverse();
        segments
    }

    pub fn depth(&self) -> usize {
        self.0.as_ref().map_or(0, |node| node.depth)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_none()
    }
}

impl PartialEq for FieldPath {
    fn eq(&self, other: &Self) -> bool {
        self.depth() == other.depth()
            && self
                .nodes()
                .zip(other.nodes())
                .all(|(a, b)| a.segment == b.segment)
    }
}

impl Eq for FieldPath {}

impl Hash for FieldPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.depth().hash(state);
        for node in self.nodes() {
            node.segment.hash(state);
        }
    }
}

impl Debug for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FieldPath").field(&self.segments()).finish()
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_root() {
            return write!(f, "(root)");
        }

        for (i, segment) in self.segments().iter().enumerate() {
            match segment {
                Segment::Key(key) if is_identifier(key) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", key)?;
                }
                Segment::Key(key) => write!(f, "[{:?}]", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }

        Ok(())
    }
}
