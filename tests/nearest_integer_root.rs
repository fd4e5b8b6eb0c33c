use introot::numerics::{IntegerRoot, NumericsError, nearest_integer_root};
use introot::primitives::U256;
use introot::validation::RootCheck;

/// `r² <= v < (r + 1)²`, computed in 256-bit arithmetic.
fn assert_bracketed_u128(value: u128, root: u128) {
    let v = U256::from(value);
    let r = U256::from(root);
    let next = r + U256::ONE;

    assert!(r * r <= v, "{value}: root {root} is too big");
    assert!(next * next > v, "{value}: root {root} is too small");
}

#[test]
fn base_cases() {
    assert_eq!(nearest_integer_root(0u32), Ok(0));
    assert_eq!(nearest_integer_root(1u32), Ok(1));
    assert_eq!(nearest_integer_root(0i8), Ok(0));
    assert_eq!(nearest_integer_root(1i128), Ok(1));
    assert_eq!(U256::ZERO.integer_root(), U256::ZERO);
    assert_eq!(U256::ONE.integer_root(), U256::ONE);
}

#[test]
fn small_values() {
    let expected = [0u8, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 4];
    for (value, &root) in expected.iter().enumerate() {
        assert_eq!((value as u8).integer_root(), root, "root of {value}");
    }
}

#[test]
fn negative_input_is_rejected() {
    assert_eq!(nearest_integer_root(-1i32), Err(NumericsError::OutOfRange));
    assert_eq!(nearest_integer_root(i8::MIN), Err(NumericsError::OutOfRange));
    assert_eq!(nearest_integer_root(i128::MIN), Err(NumericsError::OutOfRange));
    assert_eq!(nearest_integer_root(-1isize), Err(NumericsError::OutOfRange));
}

#[test]
fn maximum_value_of_every_native_width() {
    assert_eq!(u8::MAX.integer_root(), 15);
    assert_eq!(u16::MAX.integer_root(), 255);
    assert_eq!(u32::MAX.integer_root(), 65_535);
    assert_eq!(u64::MAX.integer_root(), 4_294_967_295);
    assert_eq!(u128::MAX.integer_root(), 18_446_744_073_709_551_615);

    assert_eq!(nearest_integer_root(i8::MAX), Ok(11));
    assert_eq!(nearest_integer_root(i16::MAX), Ok(181));
    assert_eq!(nearest_integer_root(i32::MAX), Ok(46_340));
    assert_eq!(nearest_integer_root(i64::MAX), Ok(3_037_000_499));
    assert_eq!(nearest_integer_root(i128::MAX), Ok(13_043_817_825_332_782_212));
}

#[test]
fn u128_max_disagrees_with_floating_point() {
    let value: u128 = 340282366920938463463374607431768211455;
    let root = value.integer_root();

    assert_eq!(root, 18446744073709551615);
    assert_bracketed_u128(value, root);

    // u128::MAX rounds up to 2^128 as f64, whose root 2^64 squares to 0.
    let float_root = (value as f64).sqrt() as u128;
    assert_eq!(float_root, 18446744073709551616);

    let float_check = RootCheck::with_root(value, float_root);
    assert!(float_check.is_wrapped_around());
    assert!(!float_check.is_good());

    assert!(RootCheck::of(value).unwrap().is_good());
}

#[test]
fn exact_square_where_floating_point_is_one_short() {
    let value = (40_532_396_646_334_464u128 << 64) | 1_729_382_256_910_270_465u128;
    let exact = 864_691_128_455_135_233u128;

    assert_eq!(exact * exact, value);
    assert_eq!(value.integer_root(), exact);

    let float_root = (value as f64).sqrt() as u128;
    assert_ne!(float_root, exact);
    assert!(RootCheck::with_root(value, float_root).is_good());
}

#[test]
fn decimal_power_of_ten() {
    let value = 10u128.pow(38);
    assert_eq!(value.integer_root(), 10u128.pow(19));
    assert_eq!((value - 1).integer_root(), 10u128.pow(19) - 1);
}

#[test]
fn boundaries_around_powers_of_two() {
    for bit in 0..128 {
        let power = 1u128 << bit;

        for value in [power - 1, power, power + 1] {
            assert_bracketed_u128(value, value.integer_root());
        }
    }
}

#[test]
fn even_powers_of_two_are_exact() {
    for bit in 0..64 {
        assert_eq!((1u128 << (2 * bit)).integer_root(), 1u128 << bit);
    }
}

#[test]
fn exhaustive_u16() {
    for value in 0..=u16::MAX {
        let root = value.integer_root() as u32;
        let value = value as u32;
        assert!(root * root <= value && value < (root + 1) * (root + 1), "{value}");
    }
}

#[test]
fn exhaustive_i16() {
    for value in 0..=i16::MAX {
        let root = nearest_integer_root(value).unwrap() as i32;
        let value = value as i32;
        assert!(root * root <= value && value < (root + 1) * (root + 1), "{value}");
    }
    for value in i16::MIN..0 {
        assert_eq!(nearest_integer_root(value), Err(NumericsError::OutOfRange));
    }
}

#[test]
fn u256_maximum_value() {
    let root = U256::MAX.integer_root();
    assert_eq!(root, U256::from(u128::MAX));

    // root² fits, (root + 1)² = 2^256 wraps to zero.
    assert!(root * root <= U256::MAX);
    let next = root + U256::ONE;
    assert_eq!(next * next, U256::ZERO);
}

#[test]
fn u256_exact_squares_and_neighbours() {
    let roots = [
        U256::from(2u8),
        U256::from(u64::MAX),
        U256::from(1u128 << 100),
        U256::from(u128::MAX - 12_345),
        U256::from(u128::MAX),
    ];

    for k in roots {
        let square = k * k;
        assert_eq!(square.integer_root(), k);
        assert_eq!((square - U256::ONE).integer_root(), k - U256::ONE);
        assert_eq!((square + U256::ONE).integer_root(), k);
    }
}

#[test]
fn u256_powers_of_two() {
    for bit in 0..256u32 {
        let power = U256::ONE << bit;
        let root = power.integer_root();
        let next = root + U256::ONE;

        assert!(root * root <= power, "2^{bit}");
        assert!(next * next > power, "2^{bit}");
        if bit % 2 == 0 {
            assert_eq!(root, U256::ONE << (bit / 2));
        }
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        NumericsError::OutOfRange.to_string(),
        "cannot compute the square root of a negative number"
    );
    let err: Box<dyn std::error::Error> = Box::new(NumericsError::Unsupported);
    assert!(err.to_string().contains("bit width"));
}
