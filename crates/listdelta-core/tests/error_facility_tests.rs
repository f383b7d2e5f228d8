//! Error facility tests: stable codes, display context, side reporting.

use listdelta_core::{ListDeltaError, Side};

#[test]
fn test_error_codes_are_stable() {
    let cases: Vec<(ListDeltaError, &str)> = vec![
        (
            ListDeltaError::DuplicateSectionIdentity {
                side: Side::Before,
                identity: 1,
            },
            "ERR_DUPLICATE_IDENTITY",
        ),
        (
            ListDeltaError::DuplicateRowIdentity {
                side: Side::After,
                section: 1,
                identity: 2,
            },
            "ERR_DUPLICATE_IDENTITY",
        ),
        (
            ListDeltaError::InconsistentSnapshot {
                side: Side::Before,
                section: 3,
            },
            "ERR_INCONSISTENT_SNAPSHOT",
        ),
        (
            ListDeltaError::IndexOutOfBounds {
                op: "row insert",
                index: 9,
                len: 2,
            },
            "ERR_INDEX_OUT_OF_BOUNDS",
        ),
        (
            ListDeltaError::UnsoundEditScript {
                detail: "x".to_string(),
            },
            "ERR_UNSOUND_EDIT_SCRIPT",
        ),
    ];
    for (err, expected) in cases {
        assert_eq!(err.code(), expected, "wrong code for {:?}", err);
    }
}

#[test]
fn test_duplicate_display_names_side_and_hash() {
    let err = ListDeltaError::DuplicateRowIdentity {
        side: Side::After,
        section: 0xBEEF,
        identity: 0xCAFE,
    };
    let text = err.to_string();
    assert!(text.contains("after"));
    assert!(text.contains("0x000000000000cafe"));
    assert!(text.contains("0x000000000000beef"));
}

#[test]
fn test_out_of_bounds_display_names_the_operation() {
    let err = ListDeltaError::IndexOutOfBounds {
        op: "section move",
        index: 7,
        len: 2,
    };
    assert_eq!(err.to_string(), "section move index 7 out of bounds (len 2)");
}

#[test]
fn test_side_display() {
    assert_eq!(Side::Before.to_string(), "before");
    assert_eq!(Side::After.to_string(), "after");
}

#[test]
fn test_errors_are_std_errors() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    let err = ListDeltaError::UnsoundEditScript {
        detail: "detail".to_string(),
    };
    assert_error(&err);
}
