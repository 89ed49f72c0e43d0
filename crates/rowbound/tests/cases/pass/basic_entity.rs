// SPDX-License-Identifier: MIT

use rowbound::{Mapped as _, Repository as _, TypeTag};
use rowbound_derive::Mapped;

#[derive(Debug, Clone, PartialEq, Mapped)]
#[mapped(table = "users", repository)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub active: bool,
}

#[derive(Debug)]
struct NullConnection;

impl rowbound::Connection for NullConnection {
    type Error = std::convert::Infallible;

    fn execute(
        &self,
        _statement: &str,
        _bindings: &rowbound::Bindings,
    ) -> Result<rowbound::Rows, Self::Error> {
        Ok(Box::new(std::iter::empty()))
    }

    fn select(
        &self,
        _table: &str,
        _criteria: &rowbound::Criteria,
        _order: &rowbound::Order,
        _limit: Option<u64>,
        _offset: Option<u64>,
    ) -> Result<rowbound::Rows, Self::Error> {
        Ok(Box::new(std::iter::empty()))
    }
}

fn main() {
    // Explicit table name wins over the repository shorthand.
    let repository = UserRepository::new(NullConnection);
    assert_eq!(repository.table(), "users");
    assert_eq!(repository.columns(), "id, name, email, active");
    assert_eq!(repository.placeholders(), ":id, :name, :email, :active");
    assert_eq!(
        repository.assignments(),
        "name = :name, email = :email, active = :active"
    );

    let classifier = User::classifier();
    assert!(classifier.is_entity());
    assert_eq!(classifier.id_type(), TypeTag::Integer);
    assert!(User::properties()[2].is_nullable());
}
