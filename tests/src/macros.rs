/// Asserts that `actual` yields exactly the items of `expect`, in any order.
#[macro_export]
macro_rules! assert_eq_unordered {
    ($actual:expr, $expect:expr) => {
        let mut vals = std::collections::HashSet::new();

        for val in $actual {
            assert!(vals.insert(val), "`{:#?}` yielded twice", val);
        }

        for val in $expect {
            assert!(vals.remove(val), "`{:#?}` missing", val);
        }

        assert!(vals.is_empty(), "unexpected items: {:#?}", vals);
    };
}
