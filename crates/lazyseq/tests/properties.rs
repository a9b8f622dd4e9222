use lazyseq::{Arithmetic, Cycle, Producer, Repeat, Taken, Value};
use proptest::prelude::*;

fn int_list(xs: &[i64]) -> Value {
    Value::List(xs.iter().map(|&x| Value::Int(x)).collect())
}

proptest! {
    #[test]
    fn arithmetic_take_matches_formula(
        start in -10_000_i64..10_000,
        step in -10_000_i64..10_000,
        n in 0_i64..256,
    ) {
        let taken = Arithmetic::new(start, step).take(n).unwrap();
        prop_assert_eq!(taken.len(), n as usize);
        for (i, &v) in taken.iter().enumerate() {
            prop_assert_eq!(v, start + (i as i64) * step);
        }
    }

    #[test]
    fn cycle_list_take_matches_modular_indexing(
        elements in prop::collection::vec(-50_i64..50, 1..8),
        n in 0_i64..128,
    ) {
        let cycle = Cycle::new(&int_list(&elements)).unwrap();
        let values = match cycle.take(n).unwrap() {
            Taken::List(values) => values,
            Taken::Text(_) => panic!("list source must take out as a list"),
        };
        prop_assert_eq!(values.len(), n as usize);
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(v, &Value::Int(elements[i % elements.len()]));
        }
    }

    #[test]
    fn cycle_text_take_matches_modular_indexing(
        text in "[a-z ]{1,8}",
        n in 0_i64..128,
    ) {
        let chars: Vec<char> = text.chars().collect();
        let cycle = Cycle::new(&Value::from(text.as_str())).unwrap();
        let taken = match cycle.take(n).unwrap() {
            Taken::Text(taken) => taken,
            Taken::List(_) => panic!("text source must take out as text"),
        };
        let expected: String = (0..n as usize).map(|i| chars[i % chars.len()]).collect();
        prop_assert_eq!(taken, expected);
    }

    #[test]
    fn repeat_take_is_constant(value in any::<i64>(), n in 0_i64..128) {
        let taken = Repeat::new(value).take(n).unwrap();
        prop_assert_eq!(taken.len(), n as usize);
        prop_assert!(taken.into_iter().all(|v| v == value));
    }

    #[test]
    fn take_is_stateless_and_agrees_with_iter(
        start in -1_000_i64..1_000,
        step in -1_000_i64..1_000,
        n in 0_i64..128,
    ) {
        let seq = Arithmetic::new(start, step);
        let first = seq.take(n).unwrap();
        prop_assert_eq!(&seq.take(n).unwrap(), &first);
        prop_assert_eq!(&seq.iter().take(n as usize).collect::<Vec<_>>(), &first);
    }

    #[test]
    fn negative_counts_never_yield_values(n in i64::MIN..0) {
        prop_assert!(Arithmetic::new(0, 1).take(n).is_err());
        prop_assert!(Repeat::new(0_i64).take(n).is_err());
        prop_assert!(Cycle::new(&int_list(&[1])).unwrap().take(n).is_err());
    }
}
