use schema_spec::{Specification, Value, are, is};

fn main() {
    println!("=== Schema Spec Demo ===");

    let mut account = Specification::named("account");
    account.property("number", is::integer());

    let mut spec = Specification::named("person");
    spec.all(are::not::null())
        .property("id", is::undefined())
        .property("name", [is::not::undefined(), is::string()])
        .property("account", is::schema(account));

    let people = [
        Value::object([
            ("id", Value::from(12)),
            ("name", Value::from("jim")),
            ("account", Value::object([("number", 86753009)])),
        ]),
        Value::object([
            ("name", Value::from("jim")),
            ("account", Value::object([("number", 86753009)])),
        ]),
        Value::object([("name", Value::Null)]),
    ];

    for person in &people {
        println!("\nInput: {}", person);
        match spec.validate(person) {
            Ok(valid) => println!("Valid: {}", valid),
            Err(e) => println!("Error: {}", e),
        }
    }

    println!("\nInput: \"not an object\"");
    if let Err(e) = spec.validate(&Value::from("not an object")) {
        println!("Error: {}", e);
    }
}
