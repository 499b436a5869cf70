//! Rendering of [`TypeExpr`] trees as TypeScript type syntax.

use typeshape_ir::TypeExpr;

/// Render a type expression, e.g. `("a" | "b")[] | null`.
pub fn render_type(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::Keyword(keyword) => keyword.as_str().to_string(),
        TypeExpr::Reference(name) => name.clone(),
        TypeExpr::Literal(literal) => literal.to_string(),
        TypeExpr::Null => "null".to_string(),
        TypeExpr::Array(element) => {
            let inner = render_type(element);
            if element.is_union() {
                format!("({})[]", inner)
            } else {
                format!("{}[]", inner)
            }
        }
        TypeExpr::Union(members) => members
            .iter()
            .map(render_type)
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

#[cfg(test)]
mod tests {
    use typeshape_ir::{Keyword, Literal};

    use super::*;

    #[test]
    fn test_keywords_and_null() {
        assert_eq!(render_type(&TypeExpr::Keyword(Keyword::String)), "string");
        assert_eq!(render_type(&TypeExpr::Keyword(Keyword::Number)), "number");
        assert_eq!(render_type(&TypeExpr::Keyword(Keyword::Boolean)), "boolean");
        assert_eq!(render_type(&TypeExpr::Null), "null");
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            render_type(&TypeExpr::Literal(Literal::from("ACTIVE"))),
            "\"ACTIVE\""
        );
        assert_eq!(render_type(&TypeExpr::Literal(Literal::from(42))), "42");
    }

    #[test]
    fn test_nullable_reference() {
        let expr = TypeExpr::reference("Address").or_null();
        assert_eq!(render_type(&expr), "Address | null");
    }

    #[test]
    fn test_array_of_union_is_parenthesized() {
        let expr = TypeExpr::array(TypeExpr::Keyword(Keyword::String).or_null());
        assert_eq!(render_type(&expr), "(string | null)[]");
    }

    #[test]
    fn test_nested_arrays() {
        let expr = TypeExpr::array(TypeExpr::array(TypeExpr::reference("GridItem")));
        assert_eq!(render_type(&expr), "GridItem[][]");
    }

    #[test]
    fn test_nullable_array_of_enum() {
        let expr = TypeExpr::array(TypeExpr::union(vec![
            TypeExpr::Literal(Literal::from(1)),
            TypeExpr::Literal(Literal::from(2)),
        ]))
        .or_null();
        assert_eq!(render_type(&expr), "(1 | 2)[] | null");
    }
}
