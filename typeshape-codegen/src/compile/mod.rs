//! Schema-to-declaration compiler.
//!
//! [`compile`] walks a root [`Schema`], emits declarations into a
//! [`CompileContext`] (nested declarations before the ones referencing
//! them), collapses duplicates with [`dedup`] and hands back the survivors
//! root first.
//!
//! Names for anonymous nested objects are derived from context and passed
//! down explicitly; the schema tree is never modified.

mod context;
mod dedup;

pub use context::CompileContext;
pub use dedup::dedup;

use tracing::{instrument, trace};
use typeshape_core::{capitalize_first, derive_plural_singular};
use typeshape_ir::{
    Alias, Declaration, DeclarationRef, Field, Keyword, Literal, Schema, SchemaKind, Structure,
    TypeExpr,
};

use crate::{Error, Result};

/// Output of a successful compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    /// Surviving declarations, root first and dependents after.
    pub declarations: Vec<Declaration>,
    /// The declaration produced for the root schema.
    pub root: DeclarationRef,
    /// Number of declarations removed by deduplication.
    pub dropped: usize,
}

impl Compilation {
    /// Names of the declarations in output order.
    pub fn names(&self) -> Vec<&str> {
        self.declarations.iter().map(Declaration::name).collect()
    }

    /// Look up a surviving declaration by name.
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name() == name)
    }
}

/// Compile a root schema into deduplicated declarations, root first.
///
/// A failed compilation yields no declarations.
#[instrument(skip_all, fields(root = schema.name.as_deref().unwrap_or_default()))]
pub fn compile(schema: &Schema) -> Result<Compilation> {
    let mut ctx = CompileContext::new();
    let root = compile_root(schema, &mut ctx)?;

    let emitted = ctx.into_declarations();
    let emitted_len = emitted.len();
    let mut declarations = dedup(emitted);
    let dropped = emitted_len - declarations.len();
    declarations.reverse();

    Ok(Compilation {
        declarations,
        root,
        dropped,
    })
}

/// Compile a root schema into `ctx` without deduplicating.
///
/// Exactly one branch runs: objects produce one structure, arrays produce
/// the element structure followed by an alias for the array.
pub fn compile_root(schema: &Schema, ctx: &mut CompileContext) -> Result<DeclarationRef> {
    ctx.enter(schema.name.clone().unwrap_or_default());
    let result = match &schema.kind {
        SchemaKind::Object { .. } => compile_object(schema, None, ctx),
        SchemaKind::Array { items } => compile_root_array(schema, items, ctx),
        other => Err(Error::invalid_root(other.as_str())),
    };
    ctx.leave();
    result
}

fn compile_root_array(
    schema: &Schema,
    items: &Schema,
    ctx: &mut CompileContext,
) -> Result<DeclarationRef> {
    let name = match schema.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(Error::missing_name(ctx.path())),
    };

    ctx.enter_items();
    let element = if items.is_object() {
        compile_object(items, Some(&derive_plural_singular(name)), ctx)
    } else {
        Err(Error::unsupported(
            format!("{} items in root array", items.kind),
            ctx.path(),
        ))
    };
    ctx.leave();
    let element = element?;

    let mut alias = Alias::new(name, TypeExpr::array(element.to_type_expr()));
    alias.doc = schema.description.clone();
    Ok(ctx.emit(alias))
}

/// Compile an object schema into a structure declaration.
///
/// The name is the explicit `name`, else the capitalized `derived_key`,
/// else the capitalized `key`.
pub fn compile_object(
    schema: &Schema,
    derived_key: Option<&str>,
    ctx: &mut CompileContext,
) -> Result<DeclarationRef> {
    let SchemaKind::Object { properties } = &schema.kind else {
        return Err(Error::unsupported(schema.kind.as_str(), ctx.path()));
    };

    let fields = properties
        .iter()
        .map(|property| compile_property(property, ctx))
        .collect::<Result<Vec<_>>>()?;

    let name = match (schema.name.as_deref(), derived_key.or(schema.key.as_deref())) {
        (Some(name), _) if !name.is_empty() => name.to_string(),
        (_, Some(key)) if !key.is_empty() => capitalize_first(key),
        _ => return Err(Error::missing_name(ctx.path())),
    };

    let structure = Structure {
        name,
        type_params: Vec::new(),
        fields,
        doc: schema.description.clone(),
    };
    Ok(ctx.emit(structure))
}

/// Compile a property schema into a field of its parent structure.
pub fn compile_property(schema: &Schema, ctx: &mut CompileContext) -> Result<Field> {
    let key = schema.key.clone().unwrap_or_default();
    trace!(key = %key, variant = schema.kind.as_str(), "compile property");

    ctx.enter(key.clone());
    let ty = type_expr(schema, schema.key.as_deref(), ctx);
    ctx.leave();
    let ty = ty?;

    Ok(Field {
        name: key,
        ty: if schema.nullable { ty.or_null() } else { ty },
        optional: schema.optional,
        doc: schema.description.clone(),
    })
}

/// Base type expression of a schema node, before nullability.
fn type_expr(
    schema: &Schema,
    name_hint: Option<&str>,
    ctx: &mut CompileContext,
) -> Result<TypeExpr> {
    match &schema.kind {
        SchemaKind::Boolean => Ok(TypeExpr::Keyword(Keyword::Boolean)),
        SchemaKind::Number { values: None } => Ok(TypeExpr::Keyword(Keyword::Number)),
        SchemaKind::String { values: None } => Ok(TypeExpr::Keyword(Keyword::String)),
        SchemaKind::Number { values: Some(values) }
        | SchemaKind::String { values: Some(values) } => {
            enum_type(&schema.kind, values, ctx)
        }
        SchemaKind::Object { .. } => {
            compile_object(schema, name_hint, ctx).map(|r| r.to_type_expr())
        }
        SchemaKind::Array { items } => {
            let item_hint = name_hint.map(|hint| {
                if items.is_object() {
                    derive_plural_singular(hint)
                } else {
                    hint.to_string()
                }
            });

            ctx.enter_items();
            let element = type_expr(items, item_hint.as_deref(), ctx);
            ctx.leave();
            let element = element?;

            let element = if items.nullable {
                element.or_null()
            } else {
                element
            };
            Ok(TypeExpr::array(element))
        }
    }
}

/// Union of the literal types of an `enum` constraint.
///
/// The union replaces the base keyword; every literal must match the
/// variant (numbers for `number`, strings for `string`).
fn enum_type(kind: &SchemaKind, values: &[Literal], ctx: &CompileContext) -> Result<TypeExpr> {
    if values.is_empty() {
        return Err(Error::unsupported(
            format!("{} enum without values", kind),
            ctx.path(),
        ));
    }

    let members = values
        .iter()
        .map(|value| {
            if value.kind() == kind.as_str() {
                Ok(TypeExpr::Literal(value.clone()))
            } else {
                Err(Error::unsupported(
                    format!("{} enum with {} literal", kind, value.kind()),
                    ctx.path(),
                ))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TypeExpr::union(members))
}
