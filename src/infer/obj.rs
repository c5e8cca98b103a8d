//! Object inference: extraction policy, shallow signatures, dedup.

use serde_json::{Map, Value};

use super::{EXTRACT_MIN_KEYS, Inferencer};
use crate::ir::{ExtractedShape, Field, TypeExpr};

/// Extraction policy: hoist iff the object is "record-sized". Small ad-hoc
/// bags (coordinates, flag pairs) read better inline.
pub fn should_extract(map: &Map<String, Value>) -> bool {
    map.len() >= EXTRACT_MIN_KEYS
}

/// Coarse dedup fingerprint: sorted `key:kindTag` pairs joined with `|`.
/// Deliberately shallow — nested shapes do not participate, so two objects
/// with the same keys and shallow kinds share one extracted shape even when
/// their nested values differ (first occurrence wins).
pub fn object_signature(map: &Map<String, Value>) -> String {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    let pairs: Vec<String> = keys
        .into_iter()
        .map(|key| format!("{key}:{}", kind_tag(&map[key])))
        .collect();
    pairs.join("|")
}

fn kind_tag(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Inferencer {
    pub(crate) fn infer_object(
        &mut self,
        map: &Map<String, Value>,
        depth: usize,
        path: &str,
    ) -> TypeExpr {
        if !should_extract(map) {
            return TypeExpr::InlineShape(self.infer_fields(map, depth, path));
        }

        // Dedup before naming: a signature hit must not burn a name.
        let signature = object_signature(map);
        if let Some(existing) = self.find_by_signature(&signature) {
            return TypeExpr::NamedRef(existing);
        }

        let name = self.names.allocate(path);
        let fields = self.infer_fields(map, depth, path);
        self.shapes.insert(
            name.clone(),
            ExtractedShape { name: name.clone(), fields, signature },
        );
        TypeExpr::NamedRef(name)
    }

    /// Field list in document key order; a field is optional iff its
    /// observed value was null.
    fn infer_fields(&mut self, map: &Map<String, Value>, depth: usize, path: &str) -> Vec<Field> {
        map.iter()
            .map(|(key, value)| Field {
                name: key.clone(),
                ty: self.infer(value, depth + 1, &format!("{path}.{key}")),
                optional: value.is_null(),
            })
            .collect()
    }

    fn find_by_signature(&self, signature: &str) -> Option<String> {
        self.shapes
            .values()
            .find(|shape| shape.signature == signature)
            .map(|shape| shape.name.clone())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
