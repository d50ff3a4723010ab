use perchance::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub postal_code: String,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub address: Option<Address>,
}

always_present!(Address, Customer);

/// A customer with an address in the given country.
pub fn customer_in(country_code: &str) -> Customer {
    Customer {
        name: String::from("Daniel"),
        address: Some(Address {
            postal_code: String::from("08401"),
            country_code: String::from(country_code),
        }),
    }
}

/// A customer without an address.
pub fn customer_without_address() -> Customer {
    Customer {
        name: String::from("Daniel"),
        address: None,
    }
}
