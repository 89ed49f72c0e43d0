// SPDX-License-Identifier: MIT

use rowbound::{Mapped as _, Value};
use rowbound_derive::Mapped;

#[derive(Debug, Clone, PartialEq, Mapped)]
pub struct Money {
    #[property(getter = "rounded")]
    pub amount: f64,
}

impl Money {
    pub fn rounded(&self) -> f64 {
        self.amount.round()
    }
}

fn main() {
    assert_eq!(Money::properties()[0].accessor(), "rounded");

    let money = Money { amount: 1.4 };
    let value = rowbound::ColumnValue::to_value(&money);
    assert_eq!(value, Value::Float(1.0));
}
