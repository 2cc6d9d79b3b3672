mod resource {
    pub mod mock;
}

#[cfg(test)]
mod tests {
    use crate::resource::mock::MockConnection;
    use quarry::{
        Entity, MappingError, RowsAffected, Statement, Value, is_not_found, mapping_error,
    };

    #[derive(Entity, Debug, Clone, PartialEq)]
    #[quarry(table = "users")]
    struct User {
        #[quarry(auto)]
        id: i64,
        name: String,
    }

    fn row(id: i64, name: &str) -> Vec<Value> {
        vec![Value::Int64(id), Value::Varchar(name.into())]
    }

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.into(),
        }
    }

    #[test]
    fn collection() {
        let connection =
            MockConnection::with_rows(vec![row(1, "a"), row(2, "b"), row(3, "c")]);
        let mut users = vec![user(9, "old")];
        Statement::of::<User>(&connection)
            .query(&mut users)
            .expect("Could not query");
        assert_eq!(users, [user(1, "a"), user(2, "b"), user(3, "c")]);
        assert_eq!(connection.scanned(), 3);
        assert_eq!(connection.released(), 1);
        let (sql, args) = connection.last_statement();
        assert_eq!(sql, "select users.id, users.name from users");
        assert!(args.is_empty());
    }

    #[test]
    fn single_reads_the_first_row() {
        let connection = MockConnection::with_rows(vec![row(1, "a"), row(2, "b")]);
        let mut user: Option<User> = None;
        Statement::of::<User>(&connection)
            .query(&mut user)
            .expect("Could not query");
        assert_eq!(user, Some(self::user(1, "a")));
        assert_eq!(connection.scanned(), 1, "The second row is never read");
        assert_eq!(connection.released(), 1);
        assert!(connection.last_statement().0.ends_with(" limit 1"));

        let found = Statement::of::<User>(&connection)
            .find_one::<User>()
            .expect("Could not find");
        assert_eq!(found, self::user(1, "a"));
    }

    #[test]
    fn not_found() {
        let connection = MockConnection::default();
        let statement = Statement::of::<User>(&connection).filter("id = 7");

        let mut single = Some(user(1, "kept"));
        let error = statement.query(&mut single).expect_err("No row");
        assert!(is_not_found(&error));
        assert_eq!(single, Some(user(1, "kept")));

        let mut many = vec![user(2, "kept")];
        let error = statement.query(&mut many).expect_err("No row");
        assert_eq!(mapping_error(&error), Some(&MappingError::NotFound));
        assert_eq!(many, [user(2, "kept")]);

        assert!(is_not_found(&statement.find_one::<User>().unwrap_err()));
        assert!(is_not_found(&statement.find_many::<User>().unwrap_err()));
        assert_eq!(error.to_string(), "not found");
        assert_eq!(connection.released(), 4);
    }

    #[test]
    fn cursor_released_on_errors() {
        let connection = MockConnection {
            failing_row: Some(1),
            ..MockConnection::with_rows(vec![row(1, "a"), row(2, "b"), row(3, "c")])
        };
        let mut users = vec![user(9, "old")];
        let error = Statement::of::<User>(&connection)
            .query(&mut users)
            .expect_err("The second row fails");
        assert!(mapping_error(&error).is_none());
        assert_eq!(users, [user(9, "old")]);
        assert_eq!(connection.released(), 1);

        let connection = MockConnection::with_rows(vec![vec![Value::Int64(1)]]);
        let mut users = Vec::<User>::new();
        let error = Statement::of::<User>(&connection)
            .query(&mut users)
            .expect_err("Too few columns");
        assert_eq!(
            mapping_error(&error),
            Some(&MappingError::ScanArity {
                expected: 2,
                actual: 1
            })
        );
        assert!(users.is_empty());
        assert_eq!(connection.released(), 1);

        let connection =
            MockConnection::with_rows(vec![vec![Value::Varchar("x".into()), Value::Null]]);
        let error = Statement::of::<User>(&connection)
            .find_one::<User>()
            .expect_err("Wrong types");
        assert!(matches!(
            mapping_error(&error),
            Some(MappingError::Scan { column: "id", .. })
        ));
        assert_eq!(connection.released(), 1);
    }

    #[test]
    fn count() {
        let connection = MockConnection::with_rows(vec![vec![Value::Int64(0)]]);
        assert_eq!(Statement::of::<User>(&connection).count().unwrap(), 0);
        assert_eq!(connection.last_statement().0, "select count(*) from users");

        let connection = MockConnection::with_rows(vec![vec![Value::Int64(12)]]);
        assert_eq!(
            Statement::of::<User>(&connection)
                .filter("name like 'a%'")
                .count()
                .unwrap(),
            12
        );

        let connection = MockConnection::default();
        assert!(Statement::of::<User>(&connection).count().is_err());
        let connection = MockConnection::with_rows(vec![vec![]]);
        assert!(Statement::of::<User>(&connection).count().is_err());
    }

    #[test]
    fn mutations() {
        let connection = MockConnection {
            result: RowsAffected {
                rows_affected: 1,
                last_insert_id: Some(17),
            },
            ..Default::default()
        };
        let statement = Statement::of::<User>(&connection);
        assert_eq!(statement.insert(&user(0, "new")).unwrap(), 17);
        assert_eq!(
            connection.last_statement(),
            (
                "insert into users (name) values (?)".to_string(),
                vec![Value::Varchar("new".into())]
            )
        );
        assert_eq!(
            statement
                .clone()
                .filter("id = 17")
                .update(&user(17, "renamed"))
                .unwrap(),
            1
        );
        assert_eq!(
            connection.last_statement(),
            (
                "update users set name=? where id = 17".to_string(),
                vec![Value::Varchar("renamed".into())]
            )
        );

        let connection = MockConnection::default();
        assert_eq!(
            Statement::of::<User>(&connection)
                .insert(&user(0, "new"))
                .unwrap(),
            0
        );
    }

    #[test]
    fn driver_errors_are_not_not_found() {
        let connection = MockConnection {
            failing_query: true,
            failing_execute: true,
            ..MockConnection::with_rows(vec![row(1, "a")])
        };
        let statement = Statement::of::<User>(&connection).filter("id = 1");

        let mut single = Some(user(5, "kept"));
        let error = statement.query(&mut single).expect_err("The query fails");
        assert!(!is_not_found(&error));
        assert!(mapping_error(&error).is_none());
        assert_eq!(single, Some(user(5, "kept")));

        let mut many = vec![user(6, "kept")];
        let error = statement.query(&mut many).expect_err("The query fails");
        assert!(!is_not_found(&error));
        assert_eq!(many, [user(6, "kept")]);

        for error in [
            statement.find_one::<User>().unwrap_err(),
            statement.find_many::<User>().unwrap_err(),
            statement.count().unwrap_err(),
            statement.insert(&user(0, "new")).unwrap_err(),
            statement.update(&user(1, "renamed")).unwrap_err(),
        ] {
            assert!(!is_not_found(&error), "{:#}", error);
            assert!(mapping_error(&error).is_none(), "{:#}", error);
        }
        assert_eq!(connection.scanned(), 0);
        assert_eq!(connection.released(), 0);
    }
}
