use crate::complexity::DefaultOperationComplexityCalculator;
use crate::complexity::OperationComplexityCalculator;
use crate::tests::utils::build_document;
use crate::tests::utils::only_operation;
use crate::tests::utils::test_schema;
use crate::SchemaConfiguration;

fn complexity_of(text: &str) -> f64 {
    let schema = test_schema();
    let document = build_document(&schema, text);
    DefaultOperationComplexityCalculator::new().calculate(
        &document,
        only_operation(&document),
        schema.configuration(),
    )
}

#[test]
fn each_field_costs_one() {
    assert_eq!(complexity_of("{ version }"), 1.0);
    assert_eq!(complexity_of("{ user(id: 1) { id name } version }"), 4.0);
}

#[test]
fn list_fields_multiply_their_selections() {
    // users: 1 + 10 * (id)
    assert_eq!(complexity_of("{ users { id } }"), 11.0);
    assert_eq!(complexity_of("{ users(first: 3) { id name } }"), 7.0);
    assert_eq!(complexity_of("query ($n: Int) { users(last: $n) { id } }"), 11.0);
    // user: 1 + (friends: 1 + 5 * (id))
    assert_eq!(complexity_of("{ user(id: 1) { friends(first: 5) { id } } }"), 7.0);
}

#[test]
fn excluded_parts_cost_nothing() {
    assert_eq!(complexity_of("{ version @skip(if: true) dog { name } }"), 2.0);
}

#[test]
fn fragments_are_followed_once_per_path() {
    let complexity = complexity_of(concat!(
        "{ dog { ...DogFields ... on Dog { barks } } }",
        "fragment DogFields on Dog { name owner { ...DogFields } }",
    ));
    // dog(1) + name(1) + owner(1) + barks(1)
    assert_eq!(complexity, 4.0);
}

#[test]
fn calculator_is_usable_as_a_trait_object() {
    let schema = test_schema();
    let document = build_document(&schema, "{ version }");
    let calculator: &dyn OperationComplexityCalculator = &DefaultOperationComplexityCalculator;
    let configuration = SchemaConfiguration {
        default_list_size: 2.0,
        ..SchemaConfiguration::default()
    };
    assert_eq!(calculator.calculate(&document, only_operation(&document), &configuration), 1.0);
}

#[test]
fn negative_page_sizes_cost_no_more_than_zero() {
    // users: 1 + 0 * (id)
    assert_eq!(complexity_of("{ users(first: -5) { id } }"), 1.0);
    assert_eq!(
        complexity_of(concat!(
            "{ a: users(first: -1001000) { id } ",
            "b: users(first: 1000) { friends(first: 1000) { id } } }",
        )),
        1.0 + 1_001_001.0,
    );
}
