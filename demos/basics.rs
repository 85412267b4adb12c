//! Building collections and reading entries.
//!
//! Run with: cargo run --example basics

use keyed_collection::{collection, Collection, Value};

fn main() {
    // Lists get keys 0, 1, 2, ...
    let mut fruits = collection!(["apple", "pear"]);
    fruits.push("orange").put("favourite", "mango");
    println!("Fruits: {}", fruits);

    // Integer-like string keys address the same entry as integers
    println!("Entry \"1\": {:?}", fruits.get("1"));
    println!("Has 'favourite': {}", fruits.has("favourite"));
    println!("Contains 'kiwi': {}", fruits.contains("kiwi"));
    println!("Missing with default: {}\n", fruits.get_or("kiwi", "none"));

    // Transformations return new collections
    let long_names = fruits.filter(|v, _| v.as_str().map_or(false, |s| s.len() > 4));
    println!("Long names (keys kept): {}", long_names);

    let shouting = fruits.map(|v, _| v.as_str().map(str::to_uppercase));
    println!("Upper-cased (re-indexed): {}\n", shouting);

    // Sorting re-indexes
    let mut sorted = fruits.clone();
    sorted.sort();
    println!("Sorted: {}", sorted);
    sorted.rsort();
    println!("Reverse sorted: {}\n", sorted);

    // Nested data flattens into one list
    let nested = collection!(["a", ["b", ["c", ["d"]]]]);
    println!("flatten(1): {}", nested.flatten_depth(1));
    println!("flatten():  {}\n", nested.flatten());

    // Merging
    let merged = collection!({"a": [1], "b": "x"}).merge_recursive(&collection!({"a": [2], "b": "y"}));
    println!("Recursive merge: {}\n", merged);

    // Cursor-style iteration
    let mut cursor: Collection = vec![Value::from(1), Value::from(2)].into();
    while cursor.valid() {
        if let (Some(key), Some(value)) = (cursor.key(), cursor.current()) {
            println!("  {} => {}", key, value);
        }
        cursor.next();
    }
}
