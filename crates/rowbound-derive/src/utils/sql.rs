//! SQL fragment building utilities.

use crate::mapped::parse::PropertyDef;

/// Name of the identity column under the structural convention.
const IDENTITY_COLUMN: &str = "id";

/// Join property names into a comma-separated column list.
pub fn join_columns(properties: &[&PropertyDef]) -> String {
    properties
        .iter()
        .map(|property| property.name_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build named placeholders: `:col1, :col2, ...`
pub fn placeholders(properties: &[&PropertyDef]) -> String {
    properties
        .iter()
        .map(|property| format!(":{}", property.name_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the SET assignment list: `col1 = :col1, col2 = :col2, ...`
///
/// The identity column is excluded; UPDATE keys on it instead.
pub fn assignments(properties: &[&PropertyDef]) -> String {
    properties
        .iter()
        .filter(|property| property.name_str() != IDENTITY_COLUMN)
        .map(|property| {
            let name = property.name_str();
            format!("{name} = :{name}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn properties() -> Vec<PropertyDef> {
        vec![
            PropertyDef::from_field(&parse_quote! { id: i64 }).unwrap(),
            PropertyDef::from_field(&parse_quote! { amount: f64 }).unwrap(),
            PropertyDef::from_field(&parse_quote! { name: String }).unwrap(),
        ]
    }

    #[test]
    fn columns_in_declaration_order() {
        let properties = properties();
        let refs: Vec<&PropertyDef> = properties.iter().collect();
        assert_eq!(join_columns(&refs), "id, amount, name");
    }

    #[test]
    fn named_placeholders() {
        let properties = properties();
        let refs: Vec<&PropertyDef> = properties.iter().collect();
        assert_eq!(placeholders(&refs), ":id, :amount, :name");
    }

    #[test]
    fn assignments_exclude_identity() {
        let properties = properties();
        let refs: Vec<&PropertyDef> = properties.iter().collect();
        assert_eq!(assignments(&refs), "amount = :amount, name = :name");
    }

    #[test]
    fn empty_lists() {
        let refs: Vec<&PropertyDef> = Vec::new();
        assert_eq!(join_columns(&refs), "");
        assert_eq!(placeholders(&refs), "");
        assert_eq!(assignments(&refs), "");
    }
}
