//! Property-based tests for the optional-field protocol and numeric text

use proptest::prelude::*;

use muxml::{Optional, Value};

proptest! {
    #[test]
    fn absent_slot_reads_its_default(default in any::<i64>()) {
        let slot = Optional::new(default);
        prop_assert!(!slot.is_present());
        prop_assert_eq!(slot.value(), default);
    }

    #[test]
    fn set_then_get_returns_the_value(default in any::<i64>(), value in any::<i64>()) {
        let mut slot = Optional::new(default);
        slot.set(value);
        prop_assert!(slot.is_present());
        prop_assert_eq!(slot.value(), value);
    }

    #[test]
    fn set_if_present_false_always_clears(
        default in any::<i64>(),
        before in any::<i64>(),
        value in any::<i64>(),
    ) {
        let mut slot = Optional::new(default);
        slot.set(before);
        slot.set_if_present(false, value);
        prop_assert!(!slot.is_present());
        prop_assert_eq!(slot.value(), default);
    }

    #[test]
    fn set_if_present_true_always_copies(default in any::<i64>(), value in any::<i64>()) {
        let mut slot = Optional::new(default);
        slot.set_if_present(true, value);
        prop_assert!(slot.is_present());
        prop_assert_eq!(slot.value(), value);
    }

    #[test]
    fn setters_touch_only_their_own_slot(a in any::<i64>(), b in any::<i64>()) {
        let mut first = Optional::new(0i64);
        let second = Optional::new(0i64);
        first.set(a);
        first.set_if_present(true, b);
        prop_assert!(!second.is_present());
        prop_assert_eq!(second.value(), 0);
    }

    #[test]
    fn number_text_round_trips_exactly(
        value in any::<f64>().prop_filter("finite", |v| v.is_finite())
    ) {
        // The rendered decimal text must parse back to the identical number.
        let text = Value::Number(value).to_string();
        let parsed: f64 = text.parse().unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn integer_text_round_trips_exactly(value in any::<i64>()) {
        let text = Value::Int(value).to_string();
        let parsed: i64 = text.parse().unwrap();
        prop_assert_eq!(parsed, value);
    }
}
