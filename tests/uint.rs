use bignum::{Category, ErrorCode, UnsignedBigInt};

fn big(s: &str) -> UnsignedBigInt {
    UnsignedBigInt::from_decimal_str(s).unwrap()
}

const B: &str = "12341234123412341234123412341234123412341234";

#[test]
fn word_constructor() {
    let a = UnsignedBigInt::from(12341234u64);
    assert_eq!(a.to_u64().unwrap(), 12341234);
    assert_eq!(a.to_string(), "12341234");
}

#[test]
fn decimal_constructor_round_trips() {
    assert_eq!(big(B).to_string(), B);
    assert_eq!(big("0").to_string(), "0");
    assert_eq!(big("000123").to_string(), "123");
    assert_eq!(UnsignedBigInt::zero().to_string(), "0");
}

#[test]
fn decimal_constructor_rejects_garbage() {
    let err = UnsignedBigInt::from_decimal_str("123a456").unwrap_err();
    assert_eq!(*err.code(), ErrorCode::InvalidDigit('a'));
    assert_eq!(err.classify(), Category::InvalidInput);

    let err = UnsignedBigInt::from_decimal_str("+123").unwrap_err();
    assert_eq!(*err.code(), ErrorCode::InvalidDigit('+'));

    let err = UnsignedBigInt::from_decimal_str("").unwrap_err();
    assert_eq!(*err.code(), ErrorCode::EmptyDecimalString);
}

#[test]
fn from_str_parses() {
    let a: UnsignedBigInt = "12341234".parse().unwrap();
    assert_eq!(a, UnsignedBigInt::from(12341234u64));
    assert!("12x".parse::<UnsignedBigInt>().is_err());
}

#[test]
fn add_is_symmetric() {
    let a = UnsignedBigInt::from(12341234u64);
    let b = big(B);
    let expected = "12341234123412341234123412341234123424682468";
    assert_eq!(a.add(&b).to_string(), expected);
    assert_eq!(b.add(&a).to_string(), expected);
}

#[test]
fn add_carries_into_a_new_bit() {
    let a = UnsignedBigInt::from(u64::MAX);
    let sum = a.add(&UnsignedBigInt::one());
    assert_eq!(sum.bit_length(), 65);
    assert_eq!(sum.to_string(), "18446744073709551616");
}

#[test]
fn subtract_undoes_add() {
    let a = UnsignedBigInt::from(12341234u64);
    let b = big(B);
    let sum = a.add(&b);
    assert_eq!(sum.subtract(&b).unwrap(), a);
    assert_eq!(sum.subtract(&a).unwrap(), b);
    assert!(b.subtract(&b).unwrap().is_zero());
}

#[test]
fn subtract_underflow_is_an_error() {
    let a = UnsignedBigInt::from(12341234u64);
    let b = big(B);
    let err = a.subtract(&b).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::SubtractionUnderflow);
    assert_eq!(err.classify(), Category::Precondition);
}

#[test]
fn comparisons() {
    let a = UnsignedBigInt::from(12341234u64);
    let b = big(B);
    assert!(b.greater_than(&a));
    assert!(!a.greater_than(&b));
    assert!(!b.greater_than(&b));
    assert!(a.smaller_than(&b));
    assert!(!b.smaller_than(&a));
    assert!(!a.smaller_than(&a));
    assert!(a.equals(&a));
    assert!(!a.equals(&b));
    assert!(a.equals(&big(&a.to_string())));
    assert!(a < b);
    assert!(b > a);
}

#[test]
fn multiply_small() {
    let a = UnsignedBigInt::from(12341234u64);
    assert_eq!(a.multiply(&a).to_string(), "152306056642756");
    assert!(a.multiply(&UnsignedBigInt::zero()).is_zero());
    assert_eq!(a.multiply(&UnsignedBigInt::one()), a);
}

// 770-bit operand, wide enough that the shift-and-add loop takes
// word-granular strides between set bits.
#[test]
fn multiply_wide() {
    let c = big(
        "1552518092300708935148979488462502555256886017116696611139052038026050952686376886330\
         8784088286464779504877306971310732061715800441148143914442872750411811392044549760208\
         49905550265285631598444825262999193716468750892846853816057855",
    );
    let expected = big(
        "2410312426921032588580116606028314112912093247945688951359675039065257391591803200669\
         0850241073460496634487662808880047878624169787949583249696129878907746514552133393816\
         2522477078207791768149967684554313738782005759734585790459910635635093749809009469985\
         6664417295567115701321048224206133690087915683964997615196447464774285761276110587297\
         0558184331755077409054852635005880720810991527853959634231405606951464622666355090813\
         61999844936968295485071311052707201025",
    );
    assert_eq!(c.multiply(&c), expected);
    assert_eq!(c.karatsuba_multiply(&c), expected);
}

#[test]
fn divide_and_mod() {
    let a = UnsignedBigInt::from(12341234u64);
    let b = big(B);
    assert_eq!(a.divide(&a).unwrap(), UnsignedBigInt::one());
    assert_eq!(
        b.divide(&a).unwrap().to_string(),
        "1000000010000000100000001000000010000"
    );
    assert!(a.rem(&a).unwrap().is_zero());
    assert_eq!(b.rem(&a).unwrap().to_string(), "1234");

    let (quotient, remainder) = b.divide_with_remainder(&a).unwrap();
    assert_eq!(quotient.multiply(&a).add(&remainder), b);
}

#[test]
fn divide_by_smaller_dividend() {
    let a = UnsignedBigInt::from(12341234u64);
    let b = big(B);
    assert!(a.divide(&b).unwrap().is_zero());
    assert_eq!(a.rem(&b).unwrap(), a);
}

#[test]
fn division_by_zero_is_an_error() {
    let a = UnsignedBigInt::from(12341234u64);
    let zero = UnsignedBigInt::zero();
    for err in [
        a.divide(&zero).unwrap_err(),
        a.rem(&zero).unwrap_err(),
        a.divide_with_remainder(&zero).map(|_| ()).unwrap_err(),
        a.mod_pow(&a, &zero).unwrap_err(),
    ] {
        assert_eq!(*err.code(), ErrorCode::DivisionByZero);
        assert_eq!(err.classify(), Category::DivisionByZero);
    }
}

#[test]
fn pow_small_exponents() {
    let a = UnsignedBigInt::from(12341234u64);
    assert_eq!(a.pow(&UnsignedBigInt::zero()), UnsignedBigInt::one());
    assert_eq!(a.pow(&UnsignedBigInt::one()), a);
    assert_eq!(a.pow(&UnsignedBigInt::from(2u64)).to_string(), "152306056642756");
    assert_eq!(
        a.pow(&UnsignedBigInt::from(3u64)).to_string(),
        "1879644684645506200904"
    );
    assert_eq!(
        a.pow(&UnsignedBigInt::from(4u64)).to_string(),
        "23197134890066399073807275536"
    );
}

#[test]
fn mod_pow_reduces_at_every_step() {
    let a = UnsignedBigInt::from(12341234u64);
    let b = big(B);
    assert_eq!(
        b.mod_pow(&UnsignedBigInt::from(4u64), &a).unwrap().to_string(),
        "3720510"
    );
    assert_eq!(b.mod_pow(&a, &a).unwrap().to_string(), "1522756");
}

#[test]
fn mod_pow_edge_cases() {
    let a = UnsignedBigInt::from(12341234u64);
    let one = UnsignedBigInt::one();
    // x^0 mod m is 1 for m > 1, and everything mod 1 is 0.
    assert_eq!(a.mod_pow(&UnsignedBigInt::zero(), &a).unwrap(), one);
    assert!(a.mod_pow(&a, &one).unwrap().is_zero());
    // The base is congruent to 0, so every positive power is too.
    assert!(a.mod_pow(&a, &a).unwrap().is_zero());
}

#[test]
fn narrowing_conversions() {
    let b = big(B);
    let err = b.to_u64().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::NumberOutOfRange);
    assert_eq!(err.classify(), Category::Narrowing);
    // low_u64 is the named lossy read; it just hands back the bottom word.
    let reconstructed = UnsignedBigInt::from(b.low_u64());
    assert!(reconstructed.smaller_than(&b));
}

#[test]
fn error_messages_are_readable() {
    let err = UnsignedBigInt::from_decimal_str("9!9").unwrap_err();
    assert_eq!(err.to_string(), "invalid digit `!` in decimal string");
    let err = UnsignedBigInt::one()
        .divide(&UnsignedBigInt::zero())
        .unwrap_err();
    assert_eq!(err.to_string(), "division by zero");
}
