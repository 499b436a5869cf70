//! End-to-end compilation of schema documents into declarations.

use typeshape_codegen::{CompileContext, Error, compile, compile::compile_root, dedup};
use typeshape_ir::{Alias, Declaration, Keyword, Literal, Schema, Structure, TypeExpr};

fn parse(json: &str) -> Schema {
    serde_json::from_str(json).expect("Failed to parse test schema")
}

fn structure<'a>(declarations: &'a [Declaration], name: &str) -> &'a Structure {
    declarations
        .iter()
        .find_map(|d| match d {
            Declaration::Structure(s) if s.name == name => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| panic!("structure '{}' not found", name))
}

#[test]
fn test_user_list() {
    let schema = parse(
        r#"{
            "type": "array",
            "name": "UserList",
            "items": {
                "type": "object",
                "properties": [
                    { "key": "id", "type": "string" },
                    { "key": "name", "type": "string" }
                ]
            }
        }"#,
    );

    let compilation = compile(&schema).unwrap();

    assert_eq!(compilation.declarations.len(), 2);
    assert_eq!(
        compilation.declarations[0],
        Declaration::Alias(Alias::new(
            "UserList",
            TypeExpr::array(TypeExpr::reference("UserItem"))
        ))
    );
    let item = structure(&compilation.declarations, "UserItem");
    let fields: Vec<_> = item
        .fields
        .iter()
        .map(|f| (f.name.as_str(), &f.ty))
        .collect();
    let string = TypeExpr::Keyword(Keyword::String);
    assert_eq!(fields, vec![("id", &string), ("name", &string)]);
}

#[test]
fn test_api_payload() {
    let schema = parse(
        r#"{
            "type": "object",
            "name": "Order",
            "properties": [
                { "key": "id", "type": "number" },
                { "key": "status", "type": "string", "enum": ["PENDING", "SHIPPED"] },
                { "key": "note", "type": "string", "nullable": true, "optional": true },
                {
                    "key": "customer",
                    "type": "object",
                    "properties": [
                        { "key": "email", "type": "string" },
                        {
                            "key": "addresses",
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": [{ "key": "city", "type": "string" }]
                            }
                        }
                    ]
                },
                {
                    "key": "lineItems",
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": [
                            { "key": "sku", "type": "string" },
                            { "key": "quantity", "type": "number", "default": 1 }
                        ]
                    }
                },
                { "key": "flags", "type": "array", "items": { "type": "boolean" } }
            ]
        }"#,
    );

    let compilation = compile(&schema).unwrap();

    assert_eq!(
        compilation.names(),
        vec!["Order", "LineItem", "Customer", "Address"]
    );
    assert_eq!(compilation.dropped, 0);

    let order = structure(&compilation.declarations, "Order");
    let names: Vec<_> = order.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["id", "status", "note", "customer", "lineItems", "flags"]
    );
    assert_eq!(
        order.fields[1].ty,
        TypeExpr::Union(vec![
            TypeExpr::Literal(Literal::from("PENDING")),
            TypeExpr::Literal(Literal::from("SHIPPED")),
        ])
    );
    assert!(order.fields[2].optional);
    assert!(order.fields[2].ty.is_nullable());
    assert_eq!(order.fields[3].ty, TypeExpr::reference("Customer"));
    assert_eq!(
        order.fields[4].ty,
        TypeExpr::array(TypeExpr::reference("LineItem"))
    );
    assert_eq!(
        order.fields[5].ty,
        TypeExpr::array(TypeExpr::Keyword(Keyword::Boolean))
    );
}

#[test]
fn test_plural_keys_ending_in_s_singularize() {
    let schema = parse(
        r#"{
            "type": "object",
            "name": "Order",
            "properties": [
                {
                    "key": "statuses",
                    "type": "array",
                    "items": { "type": "object", "properties": [{ "key": "code", "type": "string" }] }
                },
                {
                    "key": "buses",
                    "type": "array",
                    "items": { "type": "object", "properties": [{ "key": "route", "type": "number" }] }
                }
            ]
        }"#,
    );

    let compilation = compile(&schema).unwrap();

    assert_eq!(compilation.names(), vec!["Order", "Bus", "Status"]);
    let order = structure(&compilation.declarations, "Order");
    assert_eq!(
        order.fields[0].ty,
        TypeExpr::array(TypeExpr::reference("Status"))
    );
}

#[test]
fn test_root_dispatch_takes_one_branch() {
    let schema = parse(
        r#"{ "type": "object", "name": "Config", "properties": [{ "key": "debug", "type": "boolean" }] }"#,
    );

    let mut ctx = CompileContext::new();
    compile_root(&schema, &mut ctx).unwrap();

    assert_eq!(ctx.declarations().len(), 1);
    assert!(matches!(ctx.declarations()[0], Declaration::Structure(_)));
}

#[test]
fn test_invalid_root() {
    let schema = parse(r#"{ "type": "string", "name": "Name" }"#);
    let err = compile(&schema).unwrap_err();
    assert_eq!(err, Error::invalid_root("string"));
}

#[test]
fn test_error_path_points_at_property() {
    let schema = parse(
        r#"{
            "type": "array",
            "name": "Users",
            "items": {
                "type": "object",
                "properties": [{
                    "key": "roles",
                    "type": "array",
                    "items": { "type": "number", "enum": ["admin"] }
                }]
            }
        }"#,
    );

    let err = compile(&schema).unwrap_err();
    assert_eq!(
        err,
        Error::unsupported("number enum with string literal", "Users[].roles[]")
    );
}

#[test]
fn test_dedup_last_emitted_wins() {
    let a1: Declaration = Structure::new("A").into();
    let b: Declaration = Structure::new("B").into();
    let mut second = Structure::new("A");
    second.doc = Some("second".to_string());
    let a2: Declaration = second.into();

    let result = dedup(vec![a1, b.clone(), a2.clone()]);
    assert_eq!(result, vec![b, a2]);
}

#[test]
fn test_independent_compilations_are_identical() {
    let schema = parse(
        r#"{
            "type": "object",
            "name": "Feed",
            "properties": [
                { "key": "posts", "type": "array", "items": {
                    "type": "object",
                    "properties": [
                        { "key": "author", "type": "object", "properties": [{ "key": "name", "type": "string" }] },
                        { "key": "comments", "type": "array", "items": {
                            "type": "object",
                            "properties": [
                                { "key": "author", "type": "object", "properties": [{ "key": "name", "type": "string" }] }
                            ]
                        } }
                    ]
                } }
            ]
        }"#,
    );

    let first = compile(&schema).unwrap();
    let second = compile(&schema).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.names(), vec!["Feed", "Post", "Comment", "Author"]);
    assert_eq!(first.dropped, 1);
}
