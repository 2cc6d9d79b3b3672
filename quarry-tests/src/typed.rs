use crate::recreate_table;
use indoc::indoc;
use quarry::{Entity, Executor, MappingError, Statement, mapping_error};
use rust_decimal::Decimal;
use std::str::FromStr;
use time::{Date, Month, PrimitiveDateTime, Time};
use uuid::Uuid;

#[derive(Entity, Debug, Clone, PartialEq)]
#[quarry(table = "typed_values")]
struct TypedValues {
    id: i64,
    flag: bool,
    small: i16,
    unsigned: u32,
    ratio: f64,
    price: Decimal,
    code: Uuid,
    day: Date,
    at: Time,
    stamp: PrimitiveDateTime,
    bytes: Vec<u8>,
    note: Option<String>,
    boxed: Box<Option<i32>>,
}

#[derive(Entity, Debug)]
#[quarry(table = "typed_values")]
struct WrongType {
    id: i64,
    #[quarry(name = "note")]
    number: i64,
}

pub(crate) fn typed<E: Executor>(executor: &E) {
    recreate_table(
        executor,
        "typed_values",
        indoc! {"
            create table typed_values (
                id integer primary key,
                flag integer not null,
                small integer not null,
                unsigned integer not null,
                ratio real not null,
                price text not null,
                code text not null,
                day text not null,
                at text not null,
                stamp text not null,
                bytes blob not null,
                note text,
                boxed integer
            )
        "},
    );
    let day = Date::from_calendar_date(2024, Month::February, 29).unwrap();
    let at = Time::from_hms_milli(23, 59, 58, 250).unwrap();
    let first = TypedValues {
        id: 1,
        flag: true,
        small: -32_768,
        unsigned: u32::MAX,
        ratio: 0.125,
        price: Decimal::from_str("1234.50").unwrap(),
        code: Uuid::parse_str("5e915574-bb30-4430-98cf-c5854f61fbbd").unwrap(),
        day,
        at,
        stamp: PrimitiveDateTime::new(day, at),
        bytes: vec![0, 1, 2, 255],
        note: Some("Hello world!".into()),
        boxed: Box::new(Some(-7)),
    };
    let second = TypedValues {
        id: 2,
        flag: false,
        small: 0,
        unsigned: 0,
        ratio: -1.5e10,
        price: Decimal::ZERO,
        code: Uuid::nil(),
        day: Date::from_calendar_date(1970, Month::January, 1).unwrap(),
        at: Time::MIDNIGHT,
        stamp: PrimitiveDateTime::new(day, Time::MIDNIGHT),
        bytes: Vec::new(),
        note: None,
        boxed: Box::new(None),
    };
    for entity in [&first, &second] {
        Statement::of::<TypedValues>(executor)
            .insert(entity)
            .expect("Failed to insert the typed values");
    }

    let values = Statement::of::<TypedValues>(executor)
        .sort("id")
        .find_many::<TypedValues>()
        .expect("Failed to query the typed values");
    assert_eq!(values, [first.clone(), second.clone()]);

    // Text that is not a number
    let error = Statement::of::<WrongType>(executor)
        .filter("id = 1")
        .find_one::<WrongType>()
        .expect_err("The note is not a number");
    assert!(matches!(
        mapping_error(&error),
        Some(MappingError::Scan { column: "note", .. })
    ));
}
