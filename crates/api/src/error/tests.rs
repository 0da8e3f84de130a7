use super::{validate, Error};
use alloc::string::ToString;

#[test]
fn display_formats_carry_operands() {
    let e = Error::InvMod {
        value: "6".to_string(),
        modulus: "9".to_string(),
    };
    assert_eq!(e.to_string(), "6 is not invertible modulo 9");

    let e = Error::InvalidModulus {
        modulus: "1".to_string(),
    };
    assert!(e.to_string().contains("greater than 1"));
}

#[test]
fn invmod_is_queryable() {
    let e = Error::InvMod {
        value: "4".to_string(),
        modulus: "8".to_string(),
    };
    match e {
        Error::InvMod { value, modulus } => {
            assert_eq!(value, "4");
            assert_eq!(modulus, "8");
        }
        _ => panic!("wrong variant"),
    }
}

#[test]
fn validate_modulus() {
    assert!(validate::modulus(true, &17).is_ok());
    let err = validate::modulus(false, &1).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidModulus {
            modulus: "1".to_string()
        }
    );
}

#[test]
fn validate_dimension() {
    assert!(validate::dimension("matrix add", 3, 3).is_ok());
    let err = validate::dimension("matrix add", 2, 3).unwrap_err();
    assert_eq!(
        err,
        Error::DimensionMismatch {
            context: "matrix add",
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn validate_divisor() {
    assert!(validate::divisor(true, "divrem").is_ok());
    assert_eq!(
        validate::divisor(false, "divrem").unwrap_err(),
        Error::DivisionByZero { operation: "divrem" }
    );
}
