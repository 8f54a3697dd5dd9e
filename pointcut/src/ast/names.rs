//!
//! Name Patterns
//!
//! The three name layers of a pointcut:
//! - IdentifierName: one segment with its wildcard match type
//! - QualifiedName: a dotted path of segments
//! - TypeName: a namespace path plus the type identifier
//!
//! Design decisions:
//! - "Any" and "None" sentinels are explicit tags, never inferred from
//!   content: both `QualifiedName::ANY` and `QualifiedName::NONE` hold zero
//!   segments but mean different things
//! - Factories normalize, so a canonical value always compares equal to its
//!   sentinel constant
//! - Matching is case-sensitive, names are compared as written
//!

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchType {
    Any,
    Strict,
    StartsWith,
    EndsWith,
    Contains,
}

/// A single name segment such as `Method`, `Get*`, `*Service` or `*`.
///
/// `MatchType::Any` always comes without a name; constructing one yields
/// [`IdentifierName::ANY`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IdentifierName {
    name: Option<String>,
    match_type: MatchType,
}

impl IdentifierName {
    pub const ANY: IdentifierName = IdentifierName {
        name: None,
        match_type: MatchType::Any,
    };

    pub fn new(name: impl Into<String>, match_type: MatchType) -> Self {
        if match_type == MatchType::Any {
            return Self::ANY;
        }

        Self {
            name: Some(name.into()),
            match_type,
        }
    }

    pub fn strict(name: impl Into<String>) -> Self {
        Self::new(name, MatchType::Strict)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    pub fn is_any(&self) -> bool {
        self.match_type == MatchType::Any
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        let Some(name) = self.name.as_deref() else {
            return true;
        };

        match self.match_type {
            MatchType::Any => true,
            MatchType::Strict => candidate == name,
            MatchType::StartsWith => candidate.starts_with(name),
            MatchType::EndsWith => candidate.ends_with(name),
            MatchType::Contains => candidate.contains(name),
        }
    }
}

impl fmt::Display for IdentifierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or_default();
        match self.match_type {
            MatchType::Any => write!(f, "*"),
            MatchType::Strict => write!(f, "{}", name),
            MatchType::StartsWith => write!(f, "{}*", name),
            MatchType::EndsWith => write!(f, "*{}", name),
            MatchType::Contains => write!(f, "*{}*", name),
        }
    }
}

pub type Segments = SmallVec<[IdentifierName; 4]>;

/// A dotted path like `Namespace.Sub.Class`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QualifiedName(QualifiedRepr);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
enum QualifiedRepr {
    Any,
    None,
    Segments(Segments),
}

impl QualifiedName {
    /// Matches any path.
    pub const ANY: QualifiedName = QualifiedName(QualifiedRepr::Any);

    /// No path at all, e.g. the namespace of `int`.
    pub const NONE: QualifiedName = QualifiedName(QualifiedRepr::None);

    /// Zero segments, or a single `*` segment, collapse to [`Self::ANY`].
    pub fn create(segments: impl IntoIterator<Item = IdentifierName>) -> Self {
        let segments: Segments = segments.into_iter().collect();

        match segments.as_slice() {
            [] => Self::ANY,
            [only] if only.is_any() => Self::ANY,
            _ => QualifiedName(QualifiedRepr::Segments(segments)),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self.0, QualifiedRepr::Any)
    }

    pub fn is_none(&self) -> bool {
        matches!(self.0, QualifiedRepr::None)
    }

    /// The explicit segments; empty for both sentinels.
    pub fn segments(&self) -> &[IdentifierName] {
        match &self.0 {
            QualifiedRepr::Segments(segments) => segments,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.segments().len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments().is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IdentifierName> {
        self.segments().iter()
    }

    /// Segment-wise match against a split path such as `["System", "IO"]`.
    pub fn is_match(&self, path: &[&str]) -> bool {
        match &self.0 {
            QualifiedRepr::Any => true,
            QualifiedRepr::None => path.is_empty(),
            QualifiedRepr::Segments(segments) => {
                segments.len() == path.len()
                    && segments
                        .iter()
                        .zip(path)
                        .all(|(segment, part)| segment.is_match(part))
            }
        }
    }
}

impl<'a> IntoIterator for &'a QualifiedName {
    type Item = &'a IdentifierName;
    type IntoIter = std::slice::Iter<'a, IdentifierName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            QualifiedRepr::Any => write!(f, "*"),
            QualifiedRepr::None => Ok(()),
            QualifiedRepr::Segments(segments) => {
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", segment)?;
                }
                Ok(())
            }
        }
    }
}

/// A type reference: namespace path plus type identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeName {
    namespace: QualifiedName,
    type_name: IdentifierName,
}

impl TypeName {
    /// Any namespace, any type (`*.*`).
    pub const ANY: TypeName = TypeName {
        namespace: QualifiedName::ANY,
        type_name: IdentifierName::ANY,
    };

    /// No namespace, any type (`*`). Also stands for "not given", e.g. a
    /// method pointcut without a return type.
    pub const NONE: TypeName = TypeName {
        namespace: QualifiedName::NONE,
        type_name: IdentifierName::ANY,
    };

    pub fn new(namespace: QualifiedName, type_name: IdentifierName) -> Self {
        Self {
            namespace,
            type_name,
        }
    }

    pub fn from_qualified(name: QualifiedName) -> Self {
        if name.is_any() {
            return Self::ANY;
        }
        if name.is_none() {
            return Self::NONE;
        }
        Self::from_segments(name.segments())
    }

    /// Folds a flat dotted path: the rightmost segment is the type, the rest
    /// is the namespace.
    pub fn from_segments(segments: &[IdentifierName]) -> Self {
        match segments.split_last() {
            None => Self::NONE,
            Some((last, [])) => Self::new(QualifiedName::NONE, last.clone()),
            Some((last, namespace)) => Self::new(
                QualifiedName::create(namespace.iter().cloned()),
                last.clone(),
            ),
        }
    }

    pub fn namespace(&self) -> &QualifiedName {
        &self.namespace
    }

    pub fn type_name(&self) -> &IdentifierName {
        &self.type_name
    }

    pub fn is_any(&self) -> bool {
        *self == Self::ANY
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_none() {
            write!(f, "{}", self.type_name)
        } else {
            write!(f, "{}.{}", self.namespace, self.type_name)
        }
    }
}
