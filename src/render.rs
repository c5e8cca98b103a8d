//! IR → TypeScript declaration text.
//!
//! The only place that knows target syntax; inference hands over structured
//! `TypeExpr`s and the extracted-shape table. Everything below the header is
//! byte-deterministic for a given input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::infer::Inferencer;
use crate::ir::{Primitive, TypeExpr};

static IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

// ————————————————————————————————————————————————————————————————————————————
// HEADER (metadata, carries the only non-deterministic line)
// ————————————————————————————————————————————————————————————————————————————

pub fn render_header(source_file: &str, module_name: Option<&str>) -> String {
    let timestamp = chrono::Utc::now().to_rfc3339();
    let mut out = String::new();
    out.push_str("/**\n");
    out.push_str(" * Auto-generated TypeScript types\n");
    out.push_str(&format!(" * Generated from: {source_file}\n"));
    if let Some(module) = module_name {
        out.push_str(&format!(" * Module: {module}\n"));
    }
    out.push_str(&format!(" * Generated on: {timestamp}\n"));
    out.push_str(" *\n");
    out.push_str(" * @warning Do not edit this file manually\n");
    out.push_str(" * Run `json-shapegen` to regenerate\n");
    out.push_str(" */\n\n");
    out
}

// ————————————————————————————————————————————————————————————————————————————
// SCHEMA BODY (deterministic)
// ————————————————————————————————————————————————————————————————————————————

/// Serialize one full run: extracted shapes first (table order), then the
/// root declaration, derived utility types, and the default-export alias.
/// `root_is_record` reports whether the source root value was a non-array
/// object (that is what gates the utility types).
pub fn render_module(
    root_name: &str,
    root_expr: &TypeExpr,
    root_is_record: bool,
    inf: &Inferencer,
) -> String {
    let mut out = String::new();

    if inf.shape_count() > 0 {
        out.push_str("// Extracted interfaces\n");
        let decls: Vec<String> = inf
            .shapes()
            .map(|shape| {
                format!(
                    "export interface {} {}",
                    shape.name,
                    shape_body(&shape.fields)
                )
            })
            .collect();
        out.push_str(&decls.join("\n\n"));
        out.push_str("\n\n");
    }

    out.push_str("// Main interface\n");
    out.push_str(&root_declaration(root_name, root_expr));

    if root_is_record {
        out.push_str(&format!(
            "\n\n// Utility types\nexport type {root_name}Keys = keyof {root_name};\n\
             export type Partial{root_name} = Partial<{root_name}>;"
        ));
    }

    if inf.name_count() > 1 {
        let all: Vec<&str> = inf.allocated_names().collect();
        out.push_str(&format!(
            "\n\n// Union types\nexport type AnyInterface = {};",
            all.join(" | ")
        ));
    }

    out.push_str(&format!("\n\nexport default {root_name};\n"));
    out
}

fn root_declaration(root_name: &str, root_expr: &TypeExpr) -> String {
    match root_expr {
        TypeExpr::InlineShape(fields) => {
            format!("export interface {root_name} {}", shape_body(fields))
        }
        // The root itself was hoisted; alias it onto the requested name.
        TypeExpr::NamedRef(name) => {
            format!("export interface {root_name} extends {name} {{}}")
        }
        other => format!("export type {root_name} = {};", type_expr(other)),
    }
}

pub fn type_expr(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::Primitive(p) => primitive(*p).to_string(),
        TypeExpr::ArrayOf(item) => match item.as_ref() {
            TypeExpr::UnionOf(_) => format!("({})[]", type_expr(item)),
            other => format!("{}[]", type_expr(other)),
        },
        TypeExpr::UnionOf(arms) => {
            let parts: Vec<String> = arms.iter().map(type_expr).collect();
            parts.join(" | ")
        }
        TypeExpr::InlineShape(fields) => shape_body(fields),
        TypeExpr::NamedRef(name) => name.clone(),
    }
}

fn shape_body(fields: &[crate::ir::Field]) -> String {
    let props: Vec<String> = fields
        .iter()
        .map(|f| {
            let name = property_name(&f.name);
            let opt = if f.optional { "?" } else { "" };
            format!("  {name}{opt}: {};", type_expr(&f.ty))
        })
        .collect();
    format!("{{\n{}\n}}", props.join("\n"))
}

fn primitive(p: Primitive) -> &'static str {
    match p {
        Primitive::Null => "null",
        Primitive::Undefined => "undefined",
        Primitive::Bool => "boolean",
        Primitive::Number => "number",
        Primitive::String => "string",
        Primitive::Unknown => "unknown",
    }
}

/// Quote property names that are not valid bare identifiers.
fn property_name(name: &str) -> String {
    if IDENT.is_match(name) {
        name.to_string()
    } else {
        format!("\"{name}\"")
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
