//!
//! Pointcut Shapes
//!
//! The closed set of pointcut variants produced by the parser. Every shape
//! carries a visibility and a scope; the rest depends on the shape:
//!
//! - Member: declared type, peeled name, optional member type
//! - Constructor: declared type and parameters
//! - Method: declared type, name, return type and parameters
//! - Property: declared type, name, property type and accessor flags
//!
//! `Display` renders a pointcut back to text that parses to an equal value.
//!

use std::fmt;

use serde::Serialize;

use super::names::{IdentifierName, TypeName};
use super::parameters::ParameterList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Visibility {
    Any,
    #[default]
    Public,
    Private,
    Protected,
    Internal,
    ProtectedInternal,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Visibility::Any => "*",
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Internal => "internal",
            Visibility::ProtectedInternal => "protected internal",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Scope {
    #[default]
    Any,
    Instance,
    Static,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Scope::Any => "*",
            Scope::Instance => "instance",
            Scope::Static => "static",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PointcutKind {
    Member,
    Constructor,
    Method,
    Property,
    GetProperty,
    SetProperty,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MemberPointcut {
    pub visibility: Visibility,
    pub scope: Scope,
    pub declared_type: TypeName,
    pub name: IdentifierName,
    /// `TypeName::NONE` when no leading type was written.
    pub member_type: TypeName,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConstructorPointcut {
    pub visibility: Visibility,
    pub scope: Scope,
    pub declared_type: TypeName,
    pub parameters: ParameterList,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MethodPointcut {
    pub visibility: Visibility,
    pub scope: Scope,
    pub declared_type: TypeName,
    pub method_name: IdentifierName,
    /// `TypeName::NONE` when no return type was written.
    pub return_type: TypeName,
    pub parameters: ParameterList,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyPointcut {
    pub visibility: Visibility,
    pub scope: Scope,
    pub declared_type: TypeName,
    pub property_type: TypeName,
    pub name: IdentifierName,
    pub is_get: bool,
    pub is_set: bool,
}

impl PropertyPointcut {
    fn accessor(&self) -> &'static str {
        match (self.is_get, self.is_set) {
            (true, false) => "get",
            (false, true) => "set",
            _ => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Pointcut {
    Member(MemberPointcut),
    Constructor(ConstructorPointcut),
    Method(MethodPointcut),
    Property(PropertyPointcut),
}

impl Pointcut {
    pub fn kind(&self) -> PointcutKind {
        match self {
            Pointcut::Member(_) => PointcutKind::Member,
            Pointcut::Constructor(_) => PointcutKind::Constructor,
            Pointcut::Method(_) => PointcutKind::Method,
            Pointcut::Property(p) => match (p.is_get, p.is_set) {
                (true, false) => PointcutKind::GetProperty,
                (false, true) => PointcutKind::SetProperty,
                _ => PointcutKind::Property,
            },
        }
    }

    pub fn visibility(&self) -> Visibility {
        match self {
            Pointcut::Member(p) => p.visibility,
            Pointcut::Constructor(p) => p.visibility,
            Pointcut::Method(p) => p.visibility,
            Pointcut::Property(p) => p.visibility,
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            Pointcut::Member(p) => p.scope,
            Pointcut::Constructor(p) => p.scope,
            Pointcut::Method(p) => p.scope,
            Pointcut::Property(p) => p.scope,
        }
    }

    pub fn declared_type(&self) -> &TypeName {
        match self {
            Pointcut::Member(p) => &p.declared_type,
            Pointcut::Constructor(p) => &p.declared_type,
            Pointcut::Method(p) => &p.declared_type,
            Pointcut::Property(p) => &p.declared_type,
        }
    }

    pub fn as_method(&self) -> Option<&MethodPointcut> {
        match self {
            Pointcut::Method(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_constructor(&self) -> Option<&ConstructorPointcut> {
        match self {
            Pointcut::Constructor(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&PropertyPointcut> {
        match self {
            Pointcut::Property(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_member(&self) -> Option<&MemberPointcut> {
        match self {
            Pointcut::Member(p) => Some(p),
            _ => None,
        }
    }
}

fn write_modifiers(f: &mut fmt::Formatter<'_>, visibility: Visibility, scope: Scope) -> fmt::Result {
    write!(f, "{}", visibility)?;
    if scope != Scope::Any {
        write!(f, " {}", scope)?;
    }
    Ok(())
}

fn write_leading_type(f: &mut fmt::Formatter<'_>, type_name: &TypeName) -> fmt::Result {
    if type_name.is_none() {
        return Ok(());
    }
    write!(f, " {}", type_name)
}

impl fmt::Display for MemberPointcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_modifiers(f, self.visibility, self.scope)?;
        write_leading_type(f, &self.member_type)?;
        write!(f, " {}.{}", self.declared_type, self.name)
    }
}

impl fmt::Display for ConstructorPointcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_modifiers(f, self.visibility, self.scope)?;
        write!(f, " {}.new{}", self.declared_type, self.parameters)
    }
}

impl fmt::Display for MethodPointcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_modifiers(f, self.visibility, self.scope)?;
        write_leading_type(f, &self.return_type)?;
        write!(
            f,
            " {}.{}{}",
            self.declared_type, self.method_name, self.parameters
        )
    }
}

impl fmt::Display for PropertyPointcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_modifiers(f, self.visibility, self.scope)?;
        write_leading_type(f, &self.property_type)?;
        write!(f, " {}.{}.{}", self.declared_type, self.name, self.accessor())
    }
}

impl fmt::Display for Pointcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pointcut::Member(p) => write!(f, "{}", p),
            Pointcut::Constructor(p) => write!(f, "{}", p),
            Pointcut::Method(p) => write!(f, "{}", p),
            Pointcut::Property(p) => write!(f, "{}", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::names::{MatchType, QualifiedName};
    use crate::ast::parameters::{Parameter, ParameterModifier};

    fn type_name(path: &[&str]) -> TypeName {
        let segments: Vec<_> = path.iter().map(|s| IdentifierName::strict(*s)).collect();
        TypeName::from_segments(&segments)
    }

    fn property(is_get: bool, is_set: bool) -> Pointcut {
        Pointcut::Property(PropertyPointcut {
            visibility: Visibility::Private,
            scope: Scope::Any,
            declared_type: type_name(&["Namespace", "Class"]),
            property_type: TypeName::NONE,
            name: IdentifierName::strict("Property"),
            is_get,
            is_set,
        })
    }

    #[test]
    fn test_property_kinds() {
        assert_eq!(property(true, true).kind(), PointcutKind::Property);
        assert_eq!(property(true, false).kind(), PointcutKind::GetProperty);
        assert_eq!(property(false, true).kind(), PointcutKind::SetProperty);
    }

    #[test]
    fn test_property_display() {
        assert_eq!(property(true, true).to_string(), "private Namespace.Class.Property.property");
        assert_eq!(property(true, false).to_string(), "private Namespace.Class.Property.get");
        assert_eq!(property(false, true).to_string(), "private Namespace.Class.Property.set");
    }

    #[test]
    fn test_method_display() {
        let method = Pointcut::Method(MethodPointcut {
            visibility: Visibility::ProtectedInternal,
            scope: Scope::Static,
            declared_type: type_name(&["Namespace", "Class"]),
            method_name: IdentifierName::new("Get", MatchType::StartsWith),
            return_type: type_name(&["string"]),
            parameters: ParameterList::new(vec![
                Parameter::new(ParameterModifier::Out, type_name(&["int"])),
                Parameter::new(ParameterModifier::Ref, TypeName::NONE),
            ]),
        });

        assert_eq!(method.kind(), PointcutKind::Method);
        assert_eq!(method.visibility(), Visibility::ProtectedInternal);
        assert_eq!(method.scope(), Scope::Static);
        assert_eq!(
            method.to_string(),
            "protected internal static string Namespace.Class.Get*(out int, ref *)"
        );
    }

    #[test]
    fn test_method_without_return_type() {
        let method = MethodPointcut {
            visibility: Visibility::Any,
            scope: Scope::Any,
            declared_type: TypeName::NONE,
            method_name: IdentifierName::ANY,
            return_type: TypeName::NONE,
            parameters: ParameterList::EMPTY,
        };
        assert_eq!(method.to_string(), "* *.*()");
    }

    #[test]
    fn test_constructor_display() {
        let ctor = Pointcut::Constructor(ConstructorPointcut {
            visibility: Visibility::Public,
            scope: Scope::Any,
            declared_type: TypeName::ANY,
            parameters: ParameterList::ANY,
        });
        assert_eq!(ctor.kind(), PointcutKind::Constructor);
        assert_eq!(ctor.declared_type(), &TypeName::ANY);
        assert_eq!(ctor.to_string(), "public *.*.new(..)");
    }

    #[test]
    fn test_member_display() {
        let member = Pointcut::Member(MemberPointcut {
            visibility: Visibility::Internal,
            scope: Scope::Instance,
            declared_type: TypeName::new(
                QualifiedName::create([IdentifierName::strict("Namespace")]),
                IdentifierName::strict("Class"),
            ),
            name: IdentifierName::new("Field", MatchType::Contains),
            member_type: type_name(&["int"]),
        });
        assert_eq!(member.kind(), PointcutKind::Member);
        assert!(member.as_member().is_some());
        assert!(member.as_method().is_none());
        assert_eq!(member.to_string(), "internal instance int Namespace.Class.*Field*");
    }
}
