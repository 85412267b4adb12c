/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Arrays become list-shaped [`Value::Array`](crate::Value::Array)s, objects
/// become arrays keyed by their (normalized) keys. Any other expression goes
/// through `Value::from`; wrap negative numbers in parentheses inside arrays.
///
/// ```rust
/// use keyed_collection::{value, Value};
///
/// let v = value!({"name": "apple", "sizes": [1, (-2), 3.5], "ripe": true, "note": null});
/// assert!(v.is_array());
/// assert_eq!(value!("x"), Value::from("x"));
/// ```
#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array($crate::ValueMap::new())
    };

    // Handle non-empty array
    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Value::array(::std::vec![$($crate::value!($elem)),+])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Array($crate::ValueMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),+ $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($crate::Key::from($key), $crate::value!($value));
        )+
        $crate::Value::Array(object)
    }};

    // Anything else converts through From
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Builds a [`Collection`](crate::Collection) from a JSON-like literal.
///
/// ```rust
/// use keyed_collection::{collection, Key};
///
/// let list = collection!(["apple", "pear"]);
/// assert_eq!(list.count(), 2);
///
/// let keyed = collection!({"a": 1, "7": [2, 3]});
/// assert!(keyed.has(Key::Int(7)));
///
/// assert!(collection!().is_empty());
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::empty()
    };

    ([]) => {
        $crate::Collection::empty()
    };

    ({}) => {
        $crate::Collection::empty()
    };

    ([ $($elem:tt),+ $(,)? ]) => {{
        let values: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::value!($elem)),+];
        $crate::Collection::from(values)
    }};

    ({ $($key:literal : $value:tt),+ $(,)? }) => {{
        let mut data = $crate::ValueMap::new();
        $(
            data.insert($crate::Key::from($key), $crate::value!($value));
        )+
        $crate::Collection::new(data)
    }};
}
