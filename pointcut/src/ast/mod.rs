//!
//! Abstract Syntax Tree Module
//!
//! This module defines the AST for the pointcut expression language. The
//! AST is produced by the parser and consumed by whatever matches pointcuts
//! against real members; it has no behavior beyond construction,
//! normalization, rendering and the wildcard primitives.
//!
//! Module structure:
//! - names: IdentifierName, QualifiedName, TypeName
//! - parameters: Parameter, ParameterList
//! - pointcut: Visibility, Scope and the four pointcut shapes
//!
//! Sentinel values (`ANY`, `NONE`, `EMPTY`) are associated constants with an
//! explicit tag, so two sentinels with the same (empty) content never compare
//! equal.
//!

pub mod names;
pub mod parameters;
pub mod pointcut;

pub use names::{IdentifierName, MatchType, QualifiedName, Segments, TypeName};
pub use parameters::{Parameter, ParameterList, ParameterModifier};
pub use pointcut::{
    ConstructorPointcut, MemberPointcut, MethodPointcut, Pointcut, PointcutKind, PropertyPointcut,
    Scope, Visibility,
};
