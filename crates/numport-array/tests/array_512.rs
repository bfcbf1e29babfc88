//! End-to-end behavior of the standard 512-slot array.

use numport_array::{with_array_512, with_bounded_array, ArrayError, ARRAY_512_CAPACITY};
use numport_core::{to_signed_size, SignedSize};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

#[test]
fn fill_every_slot_then_read_back() {
    with_array_512(|arr| {
        for i in 0..512 {
            arr.set(i, (i as u32) * 3 + 1).unwrap();
        }
        assert_eq!(arr.len(), 512);
        for i in 0..512 {
            assert_eq!(arr.get(i), Some((i as u32) * 3 + 1));
        }
    });
}

#[test]
fn write_at_capacity_fails_and_keeps_length() {
    with_array_512(|arr| {
        arr.set(0, 1).unwrap();
        arr.set(1, 2).unwrap();
        let err = arr.set(512, 3).unwrap_err();
        assert_eq!(
            err,
            ArrayError::CapacityExceeded {
                index: 512,
                capacity: 512
            }
        );
        assert_eq!(arr.len(), 2);
    });
}

#[test]
fn reads_at_or_beyond_length_are_absent() {
    with_array_512(|arr| {
        arr.set(0, 10).unwrap();
        arr.set(1, 20).unwrap();
        assert_eq!(arr.get(0), Some(10));
        assert_eq!(arr.get(2), None);
        assert_eq!(arr.get(5), None);
        assert_eq!(arr.get(511), None);
        assert_eq!(arr.get(100_000), None);
        assert!(matches!(
            arr.try_get(5),
            Err(ArrayError::IndexNotPresent {
                index: 5,
                length: 2
            })
        ));
    });
}

#[test]
fn forward_jump_populates_skipped_slots_with_zero() {
    with_array_512(|arr| {
        arr.set(0, 10).unwrap();
        arr.set(300, 42).unwrap();
        assert_eq!(arr.len(), 301);
        assert_eq!(arr.get(150), Some(0));
        assert_eq!(arr.get(300), Some(42));
        assert_eq!(arr.get(301), None);
    });
}

#[test]
fn rewriting_an_earlier_slot_shrinks_length() {
    with_array_512(|arr| {
        arr.set(3, 30).unwrap();
        arr.set(1, 10).unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.get(3), None);
        assert_eq!(arr.get(1), Some(10));
    });
}

#[test]
fn capacity_matches_constant() {
    let capacity = with_array_512(|arr| arr.capacity());
    assert_eq!(capacity, to_signed_size(ARRAY_512_CAPACITY));
}

#[derive(Debug, Clone)]
enum Op {
    Set(SignedSize, u32),
    Get(SignedSize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    let index = -4 as SignedSize..(ARRAY_512_CAPACITY as SignedSize + 4);
    prop_oneof![
        (index.clone(), any::<u32>()).prop_map(|(i, v)| Op::Set(i, v)),
        index.prop_map(Op::Get),
    ]
}

proptest! {
    #[test]
    fn matches_a_simple_model(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut model = vec![0u32; ARRAY_512_CAPACITY];
        let mut length: SignedSize = 0;

        with_bounded_array::<u32, ARRAY_512_CAPACITY, _>(|arr| -> Result<(), TestCaseError> {
            for op in &ops {
                match *op {
                    Op::Set(i, v) => {
                        let result = arr.set(i, v);
                        if (0..ARRAY_512_CAPACITY as SignedSize).contains(&i) {
                            prop_assert!(result.is_ok());
                            model[i as usize] = v;
                            length = i + 1;
                        } else {
                            prop_assert!(result.is_err());
                        }
                    }
                    Op::Get(i) => {
                        let expected = (0..length).contains(&i).then(|| model[i as usize]);
                        prop_assert_eq!(arr.get(i), expected);
                    }
                }
                prop_assert_eq!(arr.len(), length);
                prop_assert!(arr.len() <= arr.capacity());
            }
            Ok(())
        })?;
    }
}
