use std::cmp::Ordering;

use storage_metrics::prelude::*;

#[test]
fn test_show_one_gibibyte() {
    let size = ByteSize::from_bytes(1_073_741_824.0);
    assert_eq!(size.to_string(), "1.00 GiB");
}

#[test]
fn test_conversion_round_trip_law() {
    // Converting away and back must land on the starting magnitude within
    // floating-point tolerance.
    let original = ByteSize::new(42.75, "GiB").unwrap();

    for unit in ["B", "KiB", "MiB", "GiB", "TiB", "PiB"] {
        let back = original.convert_to(unit).unwrap().convert_to("GiB").unwrap();
        let (difference, _) = back.subtract(&original);
        assert!(difference < 1e-9, "Round trip through {} drifted by {}", unit, difference);
    }
}

#[test]
fn test_compare_is_a_total_order() {
    let quantities = [
        ByteSize::from_bytes(0.0),
        ByteSize::from_bytes(1023.0),
        ByteSize::new(1.0, "KiB").unwrap(),
        ByteSize::new(1024.0, "MiB").unwrap(),
        ByteSize::new(1.0, "GiB").unwrap(),
        ByteSize::new(3.0, "PiB").unwrap(),
    ];

    for a in &quantities {
        for b in &quantities {
            let forward = a.compare(b);
            let reverse = b.compare(a);
            assert_eq!(forward, reverse.reverse(), "Compare should be antisymmetric");

            if forward == Ordering::Equal {
                assert_eq!(a.compare(a), Ordering::Equal);
            }
        }
    }
}

#[test]
fn test_compare_add_subtract_basics() {
    let two = ByteSize::new(2.0, "GiB").unwrap();
    let four = ByteSize::new(4.0, "GiB").unwrap();

    assert_eq!(two.compare(&four), Ordering::Less);

    let (difference, unit) = four.subtract(&two);
    assert_eq!(difference, 2.0);
    assert_eq!(unit, SizeUnit::GiB);

    let (sum, unit) = four.add(&two);
    assert_eq!(sum, 6.0);
    assert_eq!(unit, SizeUnit::GiB);
}

#[test]
fn test_rounding_examples() {
    let size = ByteSize::new(1.0123456789, "GiB").unwrap();
    assert_eq!(size.truncate(5), 1.01234);
    assert_eq!(size.round(5), 1.01235);
}

#[test]
fn test_arithmetic_results_need_reconstruction() {
    // Arithmetic hands back a raw (magnitude, unit) pair; feeding it through
    // construction again is the supported way to keep computing.
    let a = ByteSize::new(1.5, "GiB").unwrap();
    let b = ByteSize::new(512.0, "MiB").unwrap();

    let (sum, unit) = a.add(&b);
    let total = ByteSize::new(sum, unit.symbol()).unwrap();
    assert_eq!(total.to_string(), "2.00 GiB");
}

#[test]
fn test_unit_serializes_as_symbol() {
    let json = serde_json::to_string(&SizeUnit::GiB).unwrap();
    assert_eq!(json, "\"GiB\"");
}
