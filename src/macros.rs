#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Nil(None)
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty sequence
    ([]) => {
        $crate::Value::seq(vec![])
    };

    // Handle non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::seq(vec![$($crate::value!($elem)),*])
    };

    // Handle empty map
    ({}) => {
        $crate::Value::map(vec![])
    };

    // Handle non-empty map
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut entries = Vec::new();
        $(
            entries.push(($crate::Value::from($key), $crate::value!($value)));
        )*
        $crate::Value::map(entries)
    }};

    // Fallback for any serializable expression
    ($other:expr) => {{
        $crate::to_value(&$other).unwrap_or($crate::Value::Nil(None))
    }};
}

#[cfg(test)]
mod tests {
    use crate::value::{Int, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Nil(None));
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42i32), Value::Int(Int::I32(42)));
        assert_eq!(value!("hello"), Value::Str("hello".to_string()));
    }

    #[test]
    fn test_value_macro_sequences() {
        assert_eq!(value!([]), Value::seq(vec![]));

        let seq = value!([1i32, 2i32, 3i32]);
        match seq {
            Value::Seq(s) => {
                assert_eq!(s.items.len(), 3);
                assert_eq!(s.items[0], Value::Int(Int::I32(1)));
                assert_eq!(s.items[2], Value::Int(Int::I32(3)));
            }
            _ => panic!("Expected sequence"),
        }
    }

    #[test]
    fn test_value_macro_maps() {
        assert_eq!(value!({}), Value::map(vec![]));

        let map = value!({
            "name": "Alice",
            "age": 30u8
        });

        match map {
            Value::Map(m) => {
                assert_eq!(m.entries.len(), 2);
                assert_eq!(m.entries[0].0, Value::from("name"));
                assert_eq!(m.entries[0].1, Value::from("Alice"));
                assert_eq!(m.entries[1].1, Value::from(30u8));
            }
            _ => panic!("Expected map"),
        }
    }

    #[test]
    fn test_value_macro_nesting() {
        let nested = value!({ "points": [1i32, 2i32] });
        match nested {
            Value::Map(m) => {
                assert_eq!(m.entries[0].1, Value::seq(vec![
                    Value::from(1i32),
                    Value::from(2i32),
                ]));
            }
            _ => panic!("Expected map"),
        }
    }
}
