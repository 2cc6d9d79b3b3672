use crate::recreate_table;
use indoc::indoc;
use quarry::{Entity, Executor, Statement};
use time::PrimitiveDateTime;

#[derive(Entity, Debug, Clone, PartialEq)]
#[quarry(table = "users")]
struct User {
    #[quarry(auto)]
    id: i64,
    name: String,
    email: Option<String>,
    age: i32,
    #[quarry(default = "CURRENT_TIMESTAMP")]
    created_at: Option<PrimitiveDateTime>,
}

fn user(name: &str, email: Option<&str>, age: i32) -> User {
    User {
        id: 0,
        name: name.into(),
        email: email.map(Into::into),
        age,
        created_at: None,
    }
}

pub(crate) fn users<E: Executor>(executor: &E) {
    recreate_table(
        executor,
        "users",
        indoc! {"
            create table users (
                id integer primary key,
                name text not null,
                email text,
                age integer not null,
                created_at text
            )
        "},
    );

    // Empty table
    let count = Statement::of::<User>(executor)
        .count()
        .expect("Failed to count the users");
    assert_eq!(count, 0);

    // Insert
    let mut ids = Vec::new();
    for entity in [
        user("Alice", Some("alice@example.com"), 31),
        user("Bob", None, 25),
        user("Carol", Some("carol@example.com"), 42),
    ] {
        ids.push(
            Statement::of::<User>(executor)
                .insert(&entity)
                .expect("Failed to insert a user"),
        );
    }
    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(
        Statement::of::<User>(executor)
            .count()
            .expect("Failed to count the users"),
        3
    );

    // Find one
    let bob: User = Statement::of::<User>(executor)
        .filter_with("id = {}", &[&ids[1]])
        .find_one()
        .expect("Failed to find Bob");
    assert_eq!(bob.id, ids[1]);
    assert_eq!(bob.name, "Bob");
    assert_eq!(bob.email, None);
    assert_eq!(bob.age, 25);
    assert!(
        bob.created_at.is_some(),
        "The creation time is written by the database"
    );

    // Find many
    let names = Statement::of::<User>(executor)
        .sort("age")
        .order("desc")
        .find_many::<User>()
        .expect("Failed to find the users")
        .into_iter()
        .map(|u| u.name)
        .collect::<Vec<_>>();
    assert_eq!(names, ["Carol", "Alice", "Bob"]);

    // Update
    let mut changed = bob.clone();
    changed.email = Some("bob@example.com".into());
    changed.age = 26;
    let affected = Statement::of::<User>(executor)
        .filter_with("id = {}", &[&bob.id])
        .update(&changed)
        .expect("Failed to update Bob");
    assert_eq!(affected, 1);
    let bob: User = Statement::of::<User>(executor)
        .filter("name = 'Bob'")
        .find_one()
        .expect("Failed to find the updated Bob");
    assert_eq!(bob.id, changed.id);
    assert_eq!(bob.email.as_deref(), Some("bob@example.com"));
    assert_eq!(bob.age, 26);

    // Update without any match
    let affected = Statement::of::<User>(executor)
        .filter("id < 0")
        .update(&changed)
        .expect("Failed to run an update matching nothing");
    assert_eq!(affected, 0);

    // Count with a filter
    let count = Statement::of::<User>(executor)
        .filter("age > 30")
        .count()
        .expect("Failed to count the users older than 30");
    assert_eq!(count, 2);
}
