// SPDX-License-Identifier: MIT

use rowbound::{Mapped as _, TypeTag};
use rowbound_derive::Mapped;

pub type Lines = Vec<LineItem>;

#[derive(Debug, Clone, PartialEq, Mapped)]
pub struct Order {
    pub id: i64,

    // Structural element resolution.
    #[property(nested)]
    pub items: Vec<LineItem>,

    // Array-marker annotation over an opaque alias.
    #[property(item = "LineItem[]", nested)]
    pub extras: Lines,

    // Generic-form annotation over an opaque alias.
    #[property(item = "Vec<LineItem>", nested)]
    pub credits: Lines,

    pub quantities: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Mapped)]
pub struct LineItem {
    pub label: String,
}

fn main() {
    for name in ["items", "extras", "credits"] {
        let property = Order::properties()
            .iter()
            .find(|property| property.name() == name)
            .unwrap();
        assert!(property.is_array());
        assert!(property.nested().unwrap().is_value_object());
    }
    let quantities = Order::properties()
        .iter()
        .find(|property| property.name() == "quantities")
        .unwrap();
    assert!(quantities.is_array());
    assert_eq!(quantities.declared(), TypeTag::Integer);
}
