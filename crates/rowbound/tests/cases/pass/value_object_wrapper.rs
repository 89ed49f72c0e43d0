// SPDX-License-Identifier: MIT

use rowbound::{ColumnValue as _, Mapped as _, Value};
use rowbound_derive::Mapped;

// A single-property mapped type is a value-object wrapper: it gets a
// delegating ColumnValue impl and can appear as a column of an embedding
// entity.
#[derive(Debug, Clone, PartialEq, Mapped)]
pub struct EmailAddress {
    pub address: String,
}

fn main() {
    let email = EmailAddress {
        address: "billing@example.com".to_string(),
    };
    let value = email.to_value();
    assert_eq!(value, Value::Text("billing@example.com".to_string()));
    assert_eq!(EmailAddress::from_value(&value).unwrap(), email);

    assert!(EmailAddress::classifier().is_value_object());
    assert_eq!(EmailAddress::properties().len(), 1);
}
