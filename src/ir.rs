// Strongly-typed IR for the inferred schema. No serde_json::Value here.

/// Scalar kinds the engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Null,
    /// Missing/undefined slot. Parsed JSON never produces one, but the
    /// target syntax distinguishes it from null, so the IR keeps the slot.
    #[allow(dead_code)]
    Undefined,
    Bool,
    Number,
    String,
    /// Depth fence / empty-array element / anything we refuse to guess at.
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Primitive(Primitive),
    /// Elements share one type (or a union when samples disagree).
    ArrayOf(Box<TypeExpr>),
    /// Distinct alternatives, first-seen order, already deduplicated.
    UnionOf(Vec<TypeExpr>),
    /// Anonymous object shape rendered at point of use.
    InlineShape(Vec<Field>),
    /// Reference into the run's extracted-shape table.
    NamedRef(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: TypeExpr,
    pub optional: bool,      // value was null at observation time
}

/// A hoisted, named object shape. One per unique signature per run.
#[derive(Debug, Clone)]
pub struct ExtractedShape {
    pub name: String,
    pub fields: Vec<Field>,
    /// Sorted `key:kindTag` pairs; the coarse fingerprint used for dedup.
    pub signature: String,
}

impl TypeExpr {
    pub fn unknown() -> Self {
        TypeExpr::Primitive(Primitive::Unknown)
    }
}
