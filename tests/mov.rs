use checkers::{Move, ParseError, Square, WeightedMove};
use std::str::FromStr;

#[test]
fn test_display_from_str() {
    let mov = Move::new(Square::new(21).unwrap(), Square::new(17).unwrap());
    assert_eq!(mov.to_string(), "21-17");
    assert_eq!(Move::from_str("21-17"), Ok(mov));
    assert_eq!(Move::from_str("21"), Err(ParseError));
    assert_eq!(Move::from_str("21-32"), Err(ParseError));
    assert_eq!(Move::from_str("-1-5"), Err(ParseError));
}

#[test]
fn test_middle() {
    let jump = Move::from_str("26-17").unwrap();
    assert!(jump.is_capture());
    assert_eq!(jump.middle(), Square::new(22));
    let step = Move::from_str("21-17").unwrap();
    assert!(!step.is_capture());
    assert_eq!(step.middle(), None);
}

#[test]
fn test_weighted_move() {
    let mov = Move::from_str("21-17").unwrap();
    let weighted = WeightedMove { mov, weight: 12.5 };
    assert!(weighted.is_valid());
    assert_eq!(weighted.to_string(), "21-17 (12.5)");
    let invalid = WeightedMove {
        mov,
        weight: WeightedMove::INVALID_WEIGHT,
    };
    assert!(!invalid.is_valid());
}
