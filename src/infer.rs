//! Structural type inference over raw JSON (single pass, run-scoped).
//!
//! Walk a `serde_json::Value`, compute a `TypeExpr` for every node, and hoist
//! "complex enough" object shapes into a named, deduplicated table. All
//! mutable bookkeeping (shape table, used-name set) lives in `Inferencer`,
//! which is created fresh per generation run and consumed by the renderer.
//!
//! Design goals:
//! - Bounded cost: array sampling cap + hard recursion fence (degrade to
//!   `unknown`, never error, on pathological nesting).
//! - Deterministic output: field order follows the document's key insertion
//!   order; dedup and naming are first-seen-wins.
pub mod arr;
pub mod obj;

use indexmap::IndexMap;
use serde_json::Value;

use crate::ir::{ExtractedShape, Primitive, TypeExpr};
use crate::names::NameAllocator;

// ------------------------------- Policy ---------------------------------- //

/// Recursion fence: beyond this depth everything is `unknown`.
pub const MAX_DEPTH: usize = 10;
/// How many leading array elements participate in element-type inference.
pub const ARRAY_SAMPLE_LEN: usize = 5;
/// Objects with at least this many own keys are hoisted into named shapes.
pub const EXTRACT_MIN_KEYS: usize = 5;

// ------------------------------- Engine ----------------------------------- //

/// Run-scoped inference context: the extracted-shape table (insertion order
/// preserved for rendering) plus the name allocator. Passed explicitly
/// through the recursion; discarded after one run.
#[derive(Debug)]
pub struct Inferencer {
    pub(crate) shapes: IndexMap<String, ExtractedShape>,
    pub(crate) names: NameAllocator,
}

impl Inferencer {
    /// Fresh context with the root type name pre-reserved, so no extracted
    /// shape can shadow it.
    pub fn new(root_type_name: &str) -> Self {
        let mut names = NameAllocator::new();
        names.reserve(root_type_name);
        Self { shapes: IndexMap::new(), names }
    }

    /// Infer the whole document. The path seed is empty: extracted names
    /// derive purely from field position (`rooms` → element shape `RoomsItem`).
    pub fn infer_root(&mut self, value: &Value) -> TypeExpr {
        self.infer(value, 0, "")
    }

    pub fn infer(&mut self, value: &Value, depth: usize, path: &str) -> TypeExpr {
        if depth > MAX_DEPTH {
            return TypeExpr::unknown();
        }
        match value {
            Value::Null => TypeExpr::Primitive(Primitive::Null),
            Value::Bool(_) => TypeExpr::Primitive(Primitive::Bool),
            Value::Number(_) => TypeExpr::Primitive(Primitive::Number),
            Value::String(_) => TypeExpr::Primitive(Primitive::String),
            Value::Array(items) => self.infer_array(items, depth, path),
            Value::Object(map) => self.infer_object(map, depth, path),
        }
    }

    /// Extracted shapes in first-created order.
    pub fn shapes(&self) -> impl Iterator<Item = &ExtractedShape> {
        self.shapes.values()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Every allocated name (root first, then extraction order).
    pub fn allocated_names(&self) -> impl Iterator<Item = &str> {
        self.names.all_names()
    }

    pub fn name_count(&self) -> usize {
        self.names.count()
    }
}

// ------------------------------- Tests ------------------------------------ //
