use perchance::prelude::*;
use perchance_testutils::{Customer, customer_in, customer_without_address};

fn postal_code(root: Maybe<Customer>, evaluated: &mut bool) -> Maybe<String> {
    root.select(|c| c.address)
        .filter(|addr| {
            *evaluated = true;
            addr.country_code == "ES"
        })
        .select_or_default(|addr| addr.postal_code, || String::from("None"))
}

#[test]
fn matching_country_yields_postal_code() {
    let mut evaluated = false;
    let result = postal_code(Maybe::wrap(customer_in("ES")), &mut evaluated);

    assert_eq!(result, Maybe::wrap(String::from("08401")));
    assert!(evaluated);
}

#[test]
fn rejected_country_yields_fallback() {
    let mut evaluated = false;
    let result = postal_code(Maybe::wrap(customer_in("PT")), &mut evaluated);

    assert_eq!(result, Maybe::wrap(String::from("None")));
    assert!(evaluated);
}

#[test]
fn missing_address_yields_fallback() {
    let mut evaluated = false;
    let result = postal_code(Maybe::wrap(customer_without_address()), &mut evaluated);

    assert_eq!(result, Maybe::wrap(String::from("None")));
    assert!(!evaluated);
}

#[test]
fn absent_root_yields_fallback() {
    let mut evaluated = false;
    let result = postal_code(Maybe::wrap(None::<Customer>), &mut evaluated);

    assert_eq!(result, Maybe::wrap(String::from("None")));
    assert!(!evaluated);
}

#[test]
fn absent_roots_are_equal() {
    assert_eq!(Maybe::<Customer>::absent(), Maybe::<Customer>::absent());
}

#[test]
fn return_or_default_unwraps_name() {
    let name = Maybe::wrap(customer_in("ES")).return_or_default(|c| c.name, || String::from("Anon"));
    assert_eq!(name, "Daniel");
}

#[test]
fn return_or_default_falls_back_on_absent_root() {
    let name =
        Maybe::wrap(None::<Customer>).return_or_default(|c| c.name, || String::from("Anon"));
    assert_eq!(name, "Anon");
}

#[test]
fn execute_runs_against_present_root() {
    let mut seen = None;
    Maybe::wrap(customer_in("ES")).execute(|c| seen = Some(c.name.clone()));

    assert_eq!(seen.as_deref(), Some("Daniel"));
}

#[test]
fn execute_skips_absent_root() {
    let mut executed = false;
    Maybe::wrap(None::<Customer>).execute(|_| executed = true);

    assert!(!executed);
}
