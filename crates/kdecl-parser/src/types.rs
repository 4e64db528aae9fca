//! Declaration tree produced by the extractor.
//!
//! The serde shape of these types is the tool's output format:
//!
//! ```json
//! {"declarations":[{"type":"function","name":"add","parameters":[{"name":"x","type":"Int"}],
//!   "returnType":"Int","body":"fun add(x: Int): Int { return x }"}]}
//! ```

use serde::{Deserialize, Serialize};

/// Return type recorded for functions without an explicit annotation.
pub const UNIT_TYPE: &str = "Unit";

/// Root of the serialized output: the ordered root declarations of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationTree {
    pub declarations: Vec<Declaration>,
}

impl DeclarationTree {
    /// Total number of declarations, counting every nesting level.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.declarations.iter().map(Declaration::total_count).sum()
    }
}

/// A function-like or class-like declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Declaration {
    Function(FunctionDeclaration),
    Class(TypeDeclaration),
}

impl Declaration {
    /// Declared name; `None` for anonymous functions.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Function(function) => function.name.as_deref(),
            Self::Class(class) => class.name.as_deref(),
        }
    }

    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Function(function) => &function.body,
            Self::Class(class) => &class.body,
        }
    }

    /// Declarations whose nearest enclosing declaration is `self`.
    #[must_use]
    pub fn nested(&self) -> &[Self] {
        match self {
            Self::Function(function) => &function.declarations,
            Self::Class(class) => &class.declarations,
        }
    }

    #[must_use]
    pub const fn as_function(&self) -> Option<&FunctionDeclaration> {
        match self {
            Self::Function(function) => Some(function),
            Self::Class(_) => None,
        }
    }

    #[must_use]
    pub const fn as_class(&self) -> Option<&TypeDeclaration> {
        match self {
            Self::Class(class) => Some(class),
            Self::Function(_) => None,
        }
    }

    fn total_count(&self) -> usize {
        1 + self.nested().iter().map(Self::total_count).sum::<usize>()
    }
}

/// `fun name(params): ReturnType { ... }`, including anonymous `fun (...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub parameters: Vec<Parameter>,
    pub return_type: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub declarations: Vec<Declaration>,
}

/// `class`, `interface`, `enum class`, `data class`, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Primary-constructor parameters followed by body properties.
    pub properties: Vec<Property>,
    pub body: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub declarations: Vec<Declaration>,
}

/// A named, optionally typed slot: a function parameter or a class property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Type annotation as written in source; `None` when not annotated.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

#[cfg(test)]
impl Member {
    pub(crate) fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            type_name: Some(type_name.into()),
        }
    }

    pub(crate) fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            type_name: None,
        }
    }
}

pub type Parameter = Member;
pub type Property = Member;

/// How a declaration's source span is turned into its `body` string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyStyle {
    /// Whitespace runs collapsed to one space, trimmed.
    #[default]
    Collapsed,
    /// Function bodies trim-indented, class bodies trimmed; line breaks kept.
    Verbatim,
}

/// Shape of the declaration sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Roots at the top, each declaration under its nearest enclosing one.
    #[default]
    Nested,
    /// Every declaration of the file in source order, without nesting.
    Flat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub body_style: BodyStyle,
    pub layout: Layout,
}
