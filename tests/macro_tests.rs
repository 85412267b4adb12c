use keyed_collection::{collection, value, Collection, Key, Number, Value, ValueMap};

#[test]
fn test_value_macro_null() {
    let value = value!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    let true_val = value!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = value!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    let int_val = value!(42);
    assert_eq!(int_val, Value::Number(Number::Integer(42)));

    let float_val = value!(3.5);
    assert_eq!(float_val, Value::Number(Number::Float(3.5)));

    let negative_val = value!(-123);
    assert_eq!(negative_val, Value::Number(Number::Integer(-123)));
}

#[test]
fn test_value_macro_strings() {
    let string_val = value!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = value!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_value_macro_arrays() {
    let empty_array = value!([]);
    assert_eq!(empty_array, Value::Array(ValueMap::new()));

    let mixed_array = value!([1, "hello", true, null]);
    assert_eq!(
        mixed_array,
        Value::array(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_value_macro_objects() {
    let empty_object = value!({});
    assert_eq!(empty_object, Value::Array(ValueMap::new()));

    let simple_object = value!({
        "name": "Alice",
        "age": 30
    });

    match simple_object {
        Value::Array(ref map) => {
            assert_eq!(map.len(), 2);
            assert!(!map.is_list());
            assert_eq!(
                map.get(&Key::from("name")),
                Some(&Value::String("Alice".to_string()))
            );
            assert_eq!(
                map.get(&Key::from("age")),
                Some(&Value::Number(Number::Integer(30)))
            );
        }
        _ => panic!("Expected array"),
    }
}

#[test]
fn test_value_macro_nested() {
    let nested = value!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    match nested {
        Value::Array(ref map) => {
            assert_eq!(map.len(), 3);

            // Check user record
            if let Some(Value::Array(user)) = map.get(&Key::from("user")) {
                assert_eq!(
                    user.get(&Key::from("id")),
                    Some(&Value::Number(Number::Integer(123)))
                );
                assert_eq!(user.get(&Key::from("active")), Some(&Value::Bool(true)));
            } else {
                panic!("Expected user to be an array");
            }

            // Check tags list
            if let Some(Value::Array(tags)) = map.get(&Key::from("tags")) {
                assert!(tags.is_list());
                assert_eq!(tags.get(&Key::Int(1)), Some(&Value::from("developer")));
            } else {
                panic!("Expected tags to be an array");
            }
        }
        _ => panic!("Expected array"),
    }
}

#[test]
fn test_value_macro_integer_like_keys() {
    let value = value!({"10": "ten", "name": "x", "010": "padded"});
    let map = value.as_array().unwrap();

    let keys: Vec<&Key> = map.keys().collect();
    assert_eq!(
        keys,
        vec![&Key::Int(10), &Key::from("name"), &Key::Str("010".to_string())]
    );
    assert_eq!(map.next_index(), Some(11));
}

#[test]
fn test_value_macro_expressions() {
    let name = String::from("dynamic");
    assert_eq!(value!(name), Value::from("dynamic"));

    let nested = collection!(["a"]);
    assert!(value!(nested).is_collection());
}

#[test]
fn test_collection_macro() {
    assert_eq!(collection!(), Collection::empty());
    assert_eq!(collection!({}), Collection::empty());

    let list = collection!(["apple", "pear"]);
    assert_eq!(list.count(), 2);
    assert_eq!(list.get(1), Some(&Value::from("pear")));

    let keyed = collection!({"a": 1, "7": [2, 3]});
    assert!(keyed.has("a"));
    assert!(keyed.has(7));
    assert!(keyed.get(7).map_or(false, Value::is_array));
}

#[test]
fn test_value_methods() {
    let null_val = value!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_collection());
    assert!(!null_val.is_object());

    let bool_val = value!(true);
    assert!(bool_val.is_bool());
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = value!("hello");
    assert!(str_val.is_string());
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = value!([1, 2, 3]);
    assert!(array_val.is_array());
    assert_eq!(array_val.as_array().unwrap().len(), 3);
}
