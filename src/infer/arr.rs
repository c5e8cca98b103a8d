//! Array element inference: bounded sampling + structural dedup.

use serde_json::Value;

use super::{ARRAY_SAMPLE_LEN, Inferencer};
use crate::ir::TypeExpr;

impl Inferencer {
    /// Infer an array's element type from its leading elements.
    ///
    /// Every sampled element is inferred against the same `{path}Item`
    /// naming context (no per-index paths), which is what lets the shape
    /// table collapse an array of similar records into one named shape.
    pub(crate) fn infer_array(&mut self, items: &[Value], depth: usize, path: &str) -> TypeExpr {
        if items.is_empty() {
            return TypeExpr::ArrayOf(Box::new(TypeExpr::unknown()));
        }

        let item_path = format!("{path}Item");
        let mut distinct: Vec<TypeExpr> = Vec::new();
        for item in items.iter().take(ARRAY_SAMPLE_LEN) {
            let ty = self.infer(item, depth + 1, &item_path);
            if !distinct.contains(&ty) {
                distinct.push(ty);
            }
        }

        let element = if distinct.len() == 1 {
            distinct.remove(0)
        } else {
            TypeExpr::UnionOf(distinct)
        };
        TypeExpr::ArrayOf(Box::new(element))
    }
}
