#[cfg(test)]
mod tests {
    use crate::logic::{load_availability, month_range, resolve_month};
    use chrono::{Datelike, Local, NaiveDate};
    use meetflow_common::services::{
        AvailabilitySlot, BoxFuture, CalendarApi, CreateBookingRequest,
    };
    use std::fmt;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_range_regular_month() {
        let (first, last) = month_range(date(2025, 7, 15));
        assert_eq!(first, date(2025, 7, 1));
        assert_eq!(last, date(2025, 7, 31));
    }

    #[test]
    fn test_month_range_february_leap_year() {
        let (first, last) = month_range(date(2024, 2, 10));
        assert_eq!(first, date(2024, 2, 1));
        assert_eq!(last, date(2024, 2, 29));
    }

    #[test]
    fn test_month_range_december_wraps_year() {
        let (first, last) = month_range(date(2025, 12, 5));
        assert_eq!(first, date(2025, 12, 1));
        assert_eq!(last, date(2025, 12, 31));
    }

    #[test]
    fn test_resolve_month_parses_selector() {
        assert_eq!(resolve_month(Some("2025-07")), date(2025, 7, 1));
    }

    #[test]
    fn test_resolve_month_defaults_on_missing_or_bad_input() {
        let today = Local::now().date_naive();
        let resolved = resolve_month(None);
        assert_eq!((resolved.year(), resolved.month()), (today.year(), today.month()));

        let resolved = resolve_month(Some("not-a-month"));
        assert_eq!((resolved.year(), resolved.month()), (today.year(), today.month()));
    }

    #[derive(Debug)]
    struct FakeError;

    impl fmt::Display for FakeError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "calendar service unavailable")
        }
    }

    impl std::error::Error for FakeError {}

    /// Fake calendar service: availability fails, bookings are not expected.
    struct DownCalendar;

    impl CalendarApi for DownCalendar {
        type Error = FakeError;

        fn fetch_availability(
            &self,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> BoxFuture<'_, Vec<AvailabilitySlot>, Self::Error> {
            Box::pin(async { Err(FakeError) })
        }

        fn create_booking(
            &self,
            _request: CreateBookingRequest,
        ) -> BoxFuture<'_, serde_json::Value, Self::Error> {
            Box::pin(async { panic!("no booking expected in this test") })
        }
    }

    #[tokio::test]
    async fn test_load_availability_swallows_service_errors() {
        let payload = load_availability(&DownCalendar, Some("2025-07")).await;
        assert!(payload.availability.is_empty());
    }
}
