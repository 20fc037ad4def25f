use kestrel_types::{IntWidth, Operator, Precision, Signedness, TypeRegistry, PRIMITIVE_KEYWORDS};

#[test]
fn test_reflexive_except_void() {
    let types = TypeRegistry::new();
    let mut reflexive = vec![types.string(), types.boolean()];
    for width in IntWidth::ALL {
        for sign in Signedness::ALL {
            reflexive.push(types.integer(width, sign));
        }
    }
    for precision in Precision::ALL {
        reflexive.push(types.decimal(precision));
    }

    for ty in &reflexive {
        assert!(ty.is_convertible_to(ty), "{} should convert to itself", ty.describe());
    }

    let void = types.void_type();
    assert!(!void.is_convertible_to(&void), "void must not convert to itself");
}

#[test]
fn test_integer_width_monotonicity() {
    let types = TypeRegistry::new();
    let i8_ty = types.integer(IntWidth::W8, Signedness::Signed);
    let i32_ty = types.integer(IntWidth::W32, Signedness::Signed);

    assert!(i8_ty.is_convertible_to(&i32_ty));
    assert!(!i32_ty.is_convertible_to(&i8_ty));
}

#[test]
fn test_integer_to_decimal_edge() {
    let types = TypeRegistry::new();
    let i64_ty = types.integer(IntWidth::W64, Signedness::Signed);
    let i32_ty = types.integer(IntWidth::W32, Signedness::Signed);

    assert!(!i64_ty.is_convertible_to(&types.decimal(Precision::Single)));
    assert!(i64_ty.is_convertible_to(&types.decimal(Precision::Double)));
    assert!(i32_ty.is_convertible_to(&types.decimal(Precision::Single)));
}

#[test]
fn test_decimal_precision_monotonicity() {
    let types = TypeRegistry::new();
    let float = types.decimal(Precision::Single);
    let double = types.decimal(Precision::Double);

    assert!(float.is_convertible_to(&double));
    assert!(!double.is_convertible_to(&float));
}

#[test]
fn test_canonical_identity() {
    let types = TypeRegistry::new();
    assert!(TypeRegistry::same_instance(
        &types.integer(IntWidth::W32, Signedness::Signed),
        &types.integer(IntWidth::W32, Signedness::Signed)
    ));
    assert!(TypeRegistry::same_instance(
        &types.decimal(Precision::Double),
        &types.decimal(Precision::Double)
    ));
    assert!(TypeRegistry::same_instance(&types.boolean(), &types.boolean()));
    assert!(TypeRegistry::same_instance(&types.string(), &types.string()));
    assert!(TypeRegistry::same_instance(&types.void_type(), &types.void_type()));
}

#[test]
fn test_keyword_table() {
    let types = TypeRegistry::new();

    let int = types.lookup("int").unwrap();
    assert!(TypeRegistry::same_instance(
        &int,
        &types.integer(IntWidth::W32, Signedness::Signed)
    ));

    let float = types.lookup("float").unwrap();
    assert!(TypeRegistry::same_instance(&float, &types.decimal(Precision::Single)));

    for keyword in PRIMITIVE_KEYWORDS {
        assert!(types.keywords().contains_key(keyword), "{} missing", keyword);
    }
}

#[test]
fn test_prefix_not() {
    let types = TypeRegistry::new();
    for operand in [types.int(), types.float(), types.string()] {
        let result = operand.prefix_operator_result(Operator::Not, &types);
        assert_eq!(result.as_deref().map(|t| t.stringify()), Some("bool"));
    }

    assert!(types.boolean().prefix_operator_result(Operator::Not, &types).is_none());
    assert!(types.void_type().prefix_operator_result(Operator::Not, &types).is_none());
}

#[test]
fn test_infix_arithmetic_takes_right_operand() {
    let types = TypeRegistry::new();
    let i8_ty = types.integer(IntWidth::W8, Signedness::Signed);
    let i32_ty = types.integer(IntWidth::W32, Signedness::Signed);

    let result = i8_ty
        .infix_operator_result(Operator::Plus, &i32_ty, &types)
        .unwrap();
    assert!(TypeRegistry::same_instance(&result, &i32_ty));
}

#[test]
fn test_string_concatenation() {
    let types = TypeRegistry::new();
    let s = types.string();

    let concat = s.infix_operator_result(Operator::Plus, &s, &types).unwrap();
    assert_eq!(concat.stringify(), "string");

    let mixed = s.infix_operator_result(
        Operator::Plus,
        &types.integer(IntWidth::W16, Signedness::Unsigned),
        &types,
    );
    assert!(mixed.is_none());
}

#[test]
fn test_bool_has_no_operators() {
    let types = TypeRegistry::new();
    let b = types.boolean();
    for op in Operator::ALL {
        assert!(
            b.infix_operator_result(op, &b, &types).is_none(),
            "bool {} bool should be unsupported",
            op
        );
    }
}
