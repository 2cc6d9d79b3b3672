#[cfg(test)]
mod tests {
    use quarry_core::{AsValue, Value};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use time::{Date, Month, PrimitiveDateTime, Time};
    use uuid::Uuid;

    #[test]
    fn value_null() {
        assert!(Value::Null.is_null());
        assert!(Value::default().is_null());
        assert!(!Value::Int64(0).is_null());
        assert_eq!(Option::<i32>::None.as_value(), Value::Null);
        assert_eq!(Option::<String>::try_from_value(Value::Null).unwrap(), None);
        assert!(i32::try_from_value(Value::Null).is_err());
        assert!(String::try_from_value(Value::Null).is_err());
    }

    #[test]
    fn value_bool() {
        assert_eq!(true.as_value(), Value::Boolean(true));
        assert_eq!(bool::try_from_value(Value::Boolean(false)).unwrap(), false);
        assert_eq!(bool::try_from_value(Value::Int64(1)).unwrap(), true);
        assert_eq!(bool::try_from_value(Value::Int64(0)).unwrap(), false);
        assert_eq!(bool::try_from_value(Value::UInt64(1)).unwrap(), true);
        assert_eq!(
            bool::try_from_value(Value::Varchar("TRUE".into())).unwrap(),
            true
        );
        assert_eq!(
            bool::try_from_value(Value::Varchar("0".into())).unwrap(),
            false
        );
        assert!(bool::try_from_value(Value::Int64(2)).is_err());
        assert!(bool::try_from_value(Value::Float64(0.5)).is_err());
    }

    #[test]
    fn value_integers() {
        assert_eq!(127i8.as_value(), Value::Int64(127));
        assert_eq!(u32::MAX.as_value(), Value::Int64(u32::MAX as i64));
        assert_eq!(u64::MAX.as_value(), Value::UInt64(u64::MAX));
        assert_eq!(i8::try_from_value(Value::Int64(-128)).unwrap(), -128);
        assert!(i8::try_from_value(Value::Int64(128)).is_err());
        assert!(u8::try_from_value(Value::Int64(-1)).is_err());
        assert_eq!(u64::try_from_value(Value::Int64(5)).unwrap(), 5);
        assert!(i64::try_from_value(Value::UInt64(u64::MAX)).is_err());
        assert_eq!(i32::try_from_value(Value::Boolean(true)).unwrap(), 1);
        assert_eq!(
            i64::try_from_value(Value::Varchar(" 42 ".into())).unwrap(),
            42
        );
        assert_eq!(
            i16::try_from_value(Value::Decimal(Decimal::new(-300, 0))).unwrap(),
            -300
        );
        assert!(i16::try_from_value(Value::Decimal(Decimal::new(15, 1))).is_err());
        assert!(i32::try_from_value(Value::Float64(1.0)).is_err());
        assert!(i32::try_from_value(Value::Varchar("forty".into())).is_err());
    }

    #[test]
    fn value_floats() {
        assert_eq!(0.5f32.as_value(), Value::Float64(0.5));
        assert_eq!(f64::try_from_value(Value::Float64(-2.25)).unwrap(), -2.25);
        assert_eq!(f64::try_from_value(Value::Int64(3)).unwrap(), 3.0);
        assert_eq!(
            f32::try_from_value(Value::Decimal(Decimal::new(125, 3))).unwrap(),
            0.125
        );
        assert_eq!(
            f64::try_from_value(Value::Varchar("1e3".into())).unwrap(),
            1000.0
        );
        assert!(f64::try_from_value(Value::Boolean(true)).is_err());
    }

    #[test]
    fn value_text_and_blob() {
        assert_eq!(
            String::from("hello").as_value(),
            Value::Varchar("hello".into())
        );
        assert_eq!(
            String::try_from_value(Value::Blob([104, 105].into())).unwrap(),
            "hi"
        );
        assert!(String::try_from_value(Value::Blob([0xff, 0xfe].into())).is_err());
        assert!(String::try_from_value(Value::Int64(1)).is_err());
        assert_eq!(vec![1u8, 2, 3].as_value(), Value::Blob([1, 2, 3].into()));
        assert_eq!(
            Vec::<u8>::try_from_value(Value::Varchar("ab".into())).unwrap(),
            b"ab"
        );
        assert_eq!(Box::new(5i32).as_value(), Value::Int64(5));
        assert_eq!(
            *Box::<Option<i32>>::try_from_value(Value::Null).unwrap(),
            None
        );
    }

    #[test]
    fn value_decimal() {
        let value = Decimal::from_str("1234.5678").unwrap();
        assert_eq!(value.as_value(), Value::Decimal(value));
        assert_eq!(
            Decimal::try_from_value(Value::Varchar("1234.5678".into())).unwrap(),
            value
        );
        assert_eq!(
            Decimal::try_from_value(Value::Int64(-7)).unwrap(),
            Decimal::new(-7, 0)
        );
        assert_eq!(
            Decimal::try_from_value(Value::Float64(0.25)).unwrap(),
            Decimal::new(25, 2)
        );
        assert!(Decimal::try_from_value(Value::Float64(f64::NAN)).is_err());
        assert_eq!(
            Value::Decimal(value).as_text().unwrap().as_deref(),
            Some("1234.5678")
        );
    }

    #[test]
    fn value_temporal() {
        let date = Date::from_calendar_date(2025, Month::July, 4).unwrap();
        let time = Time::from_hms_micro(8, 30, 0, 125_000).unwrap();
        let timestamp = PrimitiveDateTime::new(date, time);

        assert_eq!(date.as_value(), Value::Date(date));
        assert_eq!(
            Date::try_from_value(Value::Varchar("2025-07-04".into())).unwrap(),
            date
        );
        assert_eq!(
            Time::try_from_value(Value::Varchar("08:30:00.125".into())).unwrap(),
            time
        );
        assert_eq!(
            Time::try_from_value(Value::Varchar("08:30:00".into())).unwrap(),
            Time::from_hms(8, 30, 0).unwrap()
        );
        assert_eq!(
            PrimitiveDateTime::try_from_value(Value::Varchar("2025-07-04 08:30:00.125".into()))
                .unwrap(),
            timestamp
        );
        assert!(Date::try_from_value(Value::Varchar("07/04/2025".into())).is_err());
        assert!(Date::try_from_value(Value::Int64(20250704)).is_err());

        assert_eq!(
            Value::Date(date).as_text().unwrap().as_deref(),
            Some("2025-07-04")
        );
        let value = Value::Timestamp(timestamp);
        let text = value.as_text().unwrap().unwrap();
        assert_eq!(
            PrimitiveDateTime::try_from_value(Value::Varchar(text.into_owned())).unwrap(),
            timestamp
        );
    }

    #[test]
    fn value_uuid() {
        let uuid = Uuid::parse_str("5e915574-bb30-4430-98cf-c5854f61fbbd").unwrap();
        assert_eq!(uuid.as_value(), Value::Uuid(uuid));
        assert_eq!(
            Uuid::try_from_value(Value::Varchar("5e915574-bb30-4430-98cf-c5854f61fbbd".into()))
                .unwrap(),
            uuid
        );
        assert_eq!(
            Uuid::try_from_value(Value::Blob(uuid.as_bytes().as_slice().into())).unwrap(),
            uuid
        );
        assert!(Uuid::try_from_value(Value::Varchar("not-a-uuid".into())).is_err());
        assert_eq!(
            Value::Uuid(uuid).as_text().unwrap().as_deref(),
            Some("5e915574-bb30-4430-98cf-c5854f61fbbd")
        );
    }

    #[test]
    fn value_as_text_native() {
        assert_eq!(Value::Null.as_text().unwrap(), None);
        assert_eq!(Value::Int64(1).as_text().unwrap(), None);
        assert_eq!(Value::Blob([1].into()).as_text().unwrap(), None);
        assert_eq!(
            Value::Varchar("a".into()).as_text().unwrap().as_deref(),
            Some("a")
        );
    }
}
