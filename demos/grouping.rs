//! group_by, key_by and pluck over records.
//!
//! Run with: cargo run --example grouping

use keyed_collection::{to_value, Collection, Value};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct Employee {
    id: u32,
    name: String,
    team: Option<String>,
    salary: u32,
}

fn employee(id: u32, name: &str, team: Option<&str>, salary: u32) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        team: team.map(str::to_string),
        salary,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let staff = vec![
        employee(1, "Alice", Some("core"), 120),
        employee(2, "Bob", Some("web"), 95),
        employee(3, "Carol", Some("core"), 110),
        employee(4, "Dave", None, 80),
    ];

    // Structs become keyed arrays
    let staff = match to_value(&staff)? {
        Value::Array(map) => Collection::new(map),
        other => return Err(format!("expected a list, got {}", other.type_name()).into()),
    };

    println!("Names: {}", staff.pluck("name"));
    println!("Salaries by name: {}\n", staff.pluck_keyed("salary", "name"));

    // Items without a team are kept ungrouped at the next integer key
    let by_team = staff.group_by("team");
    for (team, members) in &by_team {
        match members.as_collection() {
            Some(group) => println!("Team {}: {}", team, group.pluck("name")),
            None => println!("Ungrouped at {}: {}", team, members),
        }
    }

    // Computed groups
    let bands = staff.group_by_fn(|item, _| {
        let salary = keyed_collection::accessor::resolve(item, "salary");
        if salary.as_i64().unwrap_or(0) >= 100 {
            "senior"
        } else {
            "junior"
        }
    });
    println!("\nBands: {:?}", bands.keys().all());

    let by_id = staff.key_by("id");
    println!("Employee 3: {:?}", by_id.get(3).map(|e| e.to_string()));

    Ok(())
}
