#[cfg(test)]
mod tests {
    use crate::url_sync::{
        date_to_month_string, date_to_time_slot_string, month_string_to_date,
        time_slot_string_to_date,
    };
    use chrono::Datelike;
    use proptest::prelude::*;

    proptest! {
        // For all valid YYYY-MM strings, decode then encode is the identity.
        #[test]
        fn month_string_round_trip(year in 1000i32..=9999, month in 1u32..=12) {
            let encoded = format!("{:04}-{:02}", year, month);
            let decoded = month_string_to_date(&encoded).expect("valid month string must decode");
            prop_assert_eq!(date_to_month_string(decoded), encoded);
        }

        // For all valid YYYY-MM-DD'T'HH:mm strings, decode then encode is the identity.
        #[test]
        fn time_slot_string_round_trip(
            year in 1000i32..=9999,
            month in 1u32..=12,
            day in 1u32..=28, // stay within every month's length
            hour in 0u32..=23,
            minute in 0u32..=59,
        ) {
            let encoded = format!("{:04}-{:02}-{:02}T{:02}:{:02}", year, month, day, hour, minute);
            let decoded =
                time_slot_string_to_date(&encoded).expect("valid time slot string must decode");
            prop_assert_eq!(date_to_time_slot_string(decoded), encoded);
        }

        // Encoding a date then decoding lands on the first day of the same month.
        #[test]
        fn month_encode_then_decode_normalizes_to_first_day(
            year in 1000i32..=9999,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let date = chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let decoded = month_string_to_date(&date_to_month_string(date)).unwrap();
            prop_assert_eq!(decoded, date.with_day(1).unwrap());
        }
    }
}
