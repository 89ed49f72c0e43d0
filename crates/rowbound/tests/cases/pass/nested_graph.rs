// SPDX-License-Identifier: MIT

use rowbound::{Mapped as _, TypeTag};
use rowbound_derive::Mapped;

#[derive(Debug, Clone, PartialEq, Mapped)]
#[mapped(table = "invoices")]
pub struct Invoice {
    pub id: i64,
    pub amount: f64,

    #[property(nested)]
    pub customer: Customer,
}

#[derive(Debug, Clone, PartialEq, Mapped)]
pub struct Customer {
    pub name: String,
}

fn main() {
    let customer = Invoice::properties()
        .iter()
        .find(|property| property.name() == "customer")
        .unwrap();
    let nested = customer.nested().unwrap();
    assert!(nested.is_value_object());
    assert_eq!(nested.id_type(), Customer::classifier().id_type());
    assert_eq!(customer.id_type(), TypeTag::Text);
}
