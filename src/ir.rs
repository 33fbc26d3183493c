// Structural IR between enumeration and rendering. No target syntax here.
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    /// curried partial application, as one intersection of call signatures
    Partial,
    /// predicate complement, one declaration per arity
    Complement,
    /// test cases exercising the complement declarations
    ComplementTests,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Signature {
    /// `arity` parameters total, the first `bound` supplied up front.
    PartialMember { arity: usize, bound: usize },
    ComplementDecl { arity: usize },
    /// `index` is the position in the enumeration, used to label the case.
    ComplementTest { index: usize, arity: usize },
}

impl Signature {
    pub fn arity(&self) -> usize {
        match *self {
            Signature::PartialMember { arity, .. } => arity,
            Signature::ComplementDecl { arity } => arity,
            Signature::ComplementTest { arity, .. } => arity,
        }
    }
}

/// Ordered fragments for one generator run. Order is the emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub generator: GeneratorKind,
    pub max_arity: usize,
    pub entries: Vec<Signature>, // stable order for deterministic output
}
