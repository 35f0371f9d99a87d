use crate::schema::ScalarLiteralKind;
use crate::schema::ScalarTypeProvider;

#[test]
fn builtin_scalars_accept_their_literals() {
    let provider = ScalarTypeProvider::new();

    assert!(provider.accepts("Int", ScalarLiteralKind::Int));
    assert!(!provider.accepts("Int", ScalarLiteralKind::Float));
    assert!(provider.accepts("Float", ScalarLiteralKind::Int));
    assert!(provider.accepts("Float", ScalarLiteralKind::Float));
    assert!(provider.accepts("ID", ScalarLiteralKind::String));
    assert!(provider.accepts("ID", ScalarLiteralKind::Int));
    assert!(!provider.accepts("String", ScalarLiteralKind::Int));
    assert!(!provider.accepts("Boolean", ScalarLiteralKind::String));
}

#[test]
fn unregistered_scalars_accept_anything() {
    let provider = ScalarTypeProvider::new();
    for literal in ScalarLiteralKind::ALL {
        assert!(provider.accepts("DateTime", *literal));
    }
    assert!(!provider.is_registered("DateTime"));
}

#[test]
fn maps_host_types_to_scalar_names() {
    let mut provider = ScalarTypeProvider::new();
    assert_eq!(provider.scalar_name_for::<i32>(), Some("Int"));
    assert_eq!(provider.scalar_name_for::<f64>(), Some("Float"));
    assert_eq!(provider.scalar_name_for::<bool>(), Some("Boolean"));
    assert_eq!(provider.scalar_name_for::<String>(), Some("String"));
    assert_eq!(provider.scalar_name_for::<u64>(), None);

    provider.register_scalar("Long", &[ScalarLiteralKind::Int]);
    provider.register_host_type::<u64>("Long");
    assert_eq!(provider.scalar_name_for::<u64>(), Some("Long"));
    assert!(provider.accepts("Long", ScalarLiteralKind::Int));
    assert!(!provider.accepts("Long", ScalarLiteralKind::String));
}
