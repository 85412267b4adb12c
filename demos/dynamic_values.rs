//! Objects exposing fields and getters to a collection.
//!
//! Run with: cargo run --example dynamic_values

use keyed_collection::{collection, FieldAccessible, Value};

#[derive(Debug)]
struct Account {
    email: String,
    balance: i64,
}

impl FieldAccessible for Account {
    fn call(&self, method: &str) -> Option<Value> {
        match method {
            "getEmail" => Some(Value::from(self.email.as_str())),
            "isOverdrawn" => Some(Value::from(self.balance < 0)),
            _ => None,
        }
    }

    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "balance" => Some(Value::from(self.balance)),
            _ => None,
        }
    }
}

fn main() {
    let mut accounts = collection!([{"email": "ops@example.com", "balance": 12}]);
    accounts
        .push(Value::object(Account {
            email: "alice@example.com".to_string(),
            balance: 250,
        }))
        .push(Value::object(Account {
            email: "bob@example.com".to_string(),
            balance: -40,
        }));

    // Arrays answer by key, objects by method, getter, then field
    println!("Emails: {}", accounts.pluck("email"));
    println!("Balances: {}", accounts.pluck("balance"));
    println!("Overdrawn flags: {}\n", accounts.pluck("isOverdrawn"));

    let by_email = accounts.key_by("email");
    println!("Keys: {}", by_email.keys());

    // Runtime type checks
    for (key, account) in &accounts {
        println!(
            "  {} is_array={} is_object={} type={}",
            key,
            account.is_array(),
            account.is_object(),
            account.type_name()
        );
    }
}
