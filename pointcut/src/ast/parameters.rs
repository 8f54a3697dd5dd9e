//!
//! Parameter Patterns
//!
//! A parameter list is one of three things: any arity (`(..)`), exactly
//! no parameters (`()`), or an explicit list of typed parameters.
//!

use std::fmt;

use serde::Serialize;

use super::names::TypeName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ParameterModifier {
    #[default]
    In,
    Out,
    Ref,
}

impl fmt::Display for ParameterModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterModifier::In => Ok(()),
            ParameterModifier::Out => write!(f, "out"),
            ParameterModifier::Ref => write!(f, "ref"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Parameter {
    pub modifier: ParameterModifier,
    pub type_name: TypeName,
}

impl Parameter {
    pub fn new(modifier: ParameterModifier, type_name: TypeName) -> Self {
        Self {
            modifier,
            type_name,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modifier {
            ParameterModifier::In => write!(f, "{}", self.type_name),
            modifier => write!(f, "{} {}", modifier, self.type_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ParameterList(ListRepr);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
enum ListRepr {
    Any,
    Empty,
    Parameters(Vec<Parameter>),
}

impl ParameterList {
    /// Any number of parameters of any type: `(..)`.
    pub const ANY: ParameterList = ParameterList(ListRepr::Any);

    /// Exactly zero parameters: `()`.
    pub const EMPTY: ParameterList = ParameterList(ListRepr::Empty);

    pub fn new(parameters: Vec<Parameter>) -> Self {
        if parameters.is_empty() {
            return Self::EMPTY;
        }
        ParameterList(ListRepr::Parameters(parameters))
    }

    pub fn is_any(&self) -> bool {
        matches!(self.0, ListRepr::Any)
    }

    pub fn parameters(&self) -> &[Parameter] {
        match &self.0 {
            ListRepr::Parameters(parameters) => parameters,
            _ => &[],
        }
    }

    /// Number of explicit parameters; zero for both sentinels.
    pub fn len(&self) -> usize {
        self.parameters().len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters().is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.parameters().iter()
    }
}

impl std::ops::Index<usize> for ParameterList {
    type Output = Parameter;

    fn index(&self, index: usize) -> &Parameter {
        &self.parameters()[index]
    }
}

impl fmt::Display for ParameterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ListRepr::Any => write!(f, "(..)"),
            ListRepr::Empty => write!(f, "()"),
            ListRepr::Parameters(parameters) => {
                write!(f, "(")?;
                for (i, parameter) in parameters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", parameter)?;
                }
                write!(f, ")")
            }
        }
    }
}
