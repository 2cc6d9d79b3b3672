use crate::recreate_table;
use quarry::{Entity, Executor, MappingError, Statement, is_not_found, mapping_error};

#[derive(Entity, Debug, Clone, PartialEq)]
struct Ticket {
    id: i64,
    title: String,
}

pub(crate) fn not_found<E: Executor>(executor: &E) {
    recreate_table(
        executor,
        "ticket",
        "create table ticket (id integer primary key, title text not null)",
    );

    let statement = Statement::of::<Ticket>(executor);
    assert_eq!(statement.table(), "ticket");

    // Single record
    let error = statement
        .find_one::<Ticket>()
        .expect_err("An empty table must not produce a ticket");
    assert!(is_not_found(&error));
    assert_eq!(mapping_error(&error), Some(&MappingError::NotFound));

    // The target is left untouched
    let previous = Ticket {
        id: 99,
        title: "Previous".into(),
    };
    let mut single = Some(previous.clone());
    let error = statement
        .query(&mut single)
        .expect_err("An empty table must not produce a ticket");
    assert!(is_not_found(&error));
    assert_eq!(single, Some(previous.clone()));

    let mut many = vec![previous.clone()];
    let error = statement
        .query(&mut many)
        .expect_err("An empty table must not produce tickets");
    assert!(is_not_found(&error));
    assert_eq!(many, [previous.clone()]);

    // Collection replaced once rows exist
    statement
        .insert(&Ticket {
            id: 1,
            title: "First".into(),
        })
        .expect("Failed to insert a ticket");
    statement
        .query(&mut many)
        .expect("Failed to query the tickets");
    assert_eq!(
        many,
        [Ticket {
            id: 1,
            title: "First".into(),
        }]
    );

    // A filter matching nothing
    let error = statement
        .clone()
        .filter("title = 'Missing'")
        .find_many::<Ticket>()
        .expect_err("No ticket has that title");
    assert!(is_not_found(&error));
    assert_eq!(
        statement
            .clone()
            .filter("title = 'Missing'")
            .count()
            .expect("Failed to count the tickets"),
        0
    );

    // Driver failures are never reported as an empty result
    let broken = statement.clone().filter("nope ==");
    let errors;
    crate::silent_logs! {
        errors = [
            broken.find_one::<Ticket>().expect_err("The filter is malformed"),
            broken.find_many::<Ticket>().expect_err("The filter is malformed"),
            broken.count().expect_err("The filter is malformed"),
            statement
                .insert(&Ticket {
                    id: 1,
                    title: "Duplicate".into(),
                })
                .expect_err("The id is already taken"),
        ];
    }
    for error in errors {
        assert!(!is_not_found(&error), "{:#}", error);
        assert!(mapping_error(&error).is_none(), "{:#}", error);
    }
    assert_eq!(
        statement.count().expect("Failed to count the tickets"),
        1,
        "The duplicate was not inserted"
    );
}
