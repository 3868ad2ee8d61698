#[cfg(test)]
mod tests {
    use crate::models::{BookingState, BookingStep};
    use crate::store::{BookingStore, StateChange};
    use crate::url_sync::{InMemoryUrlStore, UrlStore};
    use chrono::{NaiveDate, NaiveDateTime};
    use meetflow_common::services::AvailabilitySlot;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    fn slot(start: &str, end: &str) -> AvailabilitySlot {
        AvailabilitySlot {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    #[test]
    fn test_initial_state_defaults() {
        let store = BookingStore::new();
        let state = store.snapshot();
        assert_eq!(state.current_step, BookingStep::DateTime);
        assert_eq!(state.selected_time_slot, None);
        assert!(!state.is_complete);
        assert!(state.availability.is_empty());
        assert!(!state.is_loading_availability);
        assert!(state.booking_details.guests.is_empty());
    }

    #[test]
    fn test_step_navigation() {
        let store = BookingStore::new();
        store.go_to_details();
        assert_eq!(store.current_step(), BookingStep::Details);
        store.go_to_date_time();
        assert_eq!(store.current_step(), BookingStep::DateTime);
        store.go_to_confirmation();
        assert_eq!(store.current_step(), BookingStep::Confirmation);
        assert!(store.is_complete());
    }

    #[test]
    fn test_set_step_allows_arbitrary_jumps() {
        let store = BookingStore::new();
        store.set_step(BookingStep::Confirmation);
        assert_eq!(store.current_step(), BookingStep::Confirmation);
        // set_step alone does not mark the wizard complete
        assert!(!store.is_complete());
        store.set_step(BookingStep::DateTime);
        assert_eq!(store.current_step(), BookingStep::DateTime);
    }

    #[test]
    fn test_setters_replace_only_their_field() {
        let store = BookingStore::new();
        store.set_name("Ada");
        store.set_email("ada@example.com");
        store.set_additional_info("bring laptop");
        let details = store.booking_details();
        assert_eq!(details.name, "Ada");
        assert_eq!(details.email, "ada@example.com");
        assert_eq!(details.additional_info, "bring laptop");
        // Unrelated fields untouched
        assert_eq!(store.current_step(), BookingStep::DateTime);
        assert_eq!(store.selected_time_slot(), None);
    }

    #[test]
    fn test_add_then_remove_guest_restores_empty_list() {
        let store = BookingStore::new();
        store.add_guest("a@x.com");
        assert_eq!(store.booking_details().guests, vec!["a@x.com".to_string()]);
        store.remove_guest(0);
        assert!(store.booking_details().guests.is_empty());
    }

    #[test]
    fn test_guests_preserve_insertion_order() {
        let store = BookingStore::new();
        store.add_guest("a@x.com");
        store.add_guest("b@x.com");
        store.add_guest("c@x.com");
        store.remove_guest(1);
        assert_eq!(
            store.booking_details().guests,
            vec!["a@x.com".to_string(), "c@x.com".to_string()]
        );
        // Out-of-range removal is a no-op
        store.remove_guest(10);
        assert_eq!(store.booking_details().guests.len(), 2);
    }

    #[test]
    fn test_set_availability_clears_loading() {
        let store = BookingStore::new();
        store.set_loading_availability(true);
        assert!(store.is_loading_availability());
        store.set_availability(vec![slot(
            "2025-07-15T10:00:00Z",
            "2025-07-15T10:30:00Z",
        )]);
        assert!(!store.is_loading_availability());
        assert_eq!(store.availability().len(), 1);
    }

    #[test]
    fn test_availability_order_is_preserved() {
        let store = BookingStore::new();
        let slots = vec![
            slot("2025-07-15T14:00:00Z", "2025-07-15T14:30:00Z"),
            slot("2025-07-15T10:00:00Z", "2025-07-15T10:30:00Z"),
        ];
        store.set_availability(slots.clone());
        // Service order, not sorted
        assert_eq!(store.availability(), slots);
    }

    #[test]
    fn test_set_time_slot_and_clear() {
        let store = BookingStore::new();
        let chosen = datetime(2025, 7, 15, 10, 0);
        store.set_time_slot(Some(chosen));
        assert!(store.has_selected_slot());
        assert_eq!(store.selected_time_slot(), Some(chosen));
        store.set_time_slot(None);
        assert!(!store.has_selected_slot());
    }

    #[test]
    fn test_is_details_valid_minimal_gate() {
        let store = BookingStore::new();
        store.set_name("");
        store.set_email("x@y.com");
        assert!(!store.is_details_valid());
        store.set_name("A");
        assert!(store.is_details_valid());
        store.set_email("no-at-sign");
        assert!(!store.is_details_valid());
    }

    #[test]
    fn test_reset_restores_initial_aggregate() {
        let store = BookingStore::new();
        store.go_to_details();
        store.set_name("Ada");
        store.set_time_slot(Some(datetime(2025, 7, 15, 10, 0)));
        store.reset();
        let state = store.snapshot();
        assert_eq!(state.current_step, BookingStep::DateTime);
        assert_eq!(state.selected_time_slot, None);
        assert!(state.booking_details.name.is_empty());
        assert!(!state.is_complete);
    }

    #[test]
    fn test_from_url_seeds_month_and_slot() {
        let url = InMemoryUrlStore::from_query("month=2025-07&timeSlot=2025-07-15T10:00");
        let store = BookingStore::from_url(&url);
        assert_eq!(store.current_month(), date(2025, 7, 1));
        assert_eq!(store.selected_time_slot(), Some(datetime(2025, 7, 15, 10, 0)));
    }

    #[test]
    fn test_from_url_writes_default_month_when_absent() {
        let url = InMemoryUrlStore::from_query("");
        let store = BookingStore::from_url(&url);
        let written = url.read();
        assert_eq!(
            written.get("month"),
            Some(crate::url_sync::date_to_month_string(store.current_month()).as_str())
        );
    }

    #[test]
    fn test_from_url_ignores_invalid_params() {
        let url = InMemoryUrlStore::from_query("month=bogus&timeSlot=also-bogus");
        let store = BookingStore::from_url(&url);
        // Falls back to the defaults instead of erroring
        assert_eq!(store.selected_time_slot(), None);
        assert_eq!(store.current_step(), BookingStep::DateTime);
    }

    #[test]
    fn test_subscribers_see_committed_state_synchronously() {
        let store = BookingStore::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);
        let id = store.subscribe(move |state: &BookingState, change| {
            if change == StateChange::Month {
                assert_eq!(state.current_month, date(2025, 9, 1));
                seen_clone.fetch_add(1, Ordering::SeqCst);
            }
        });
        store.set_month(date(2025, 9, 1));
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        store.unsubscribe(id);
        store.set_month(date(2025, 10, 1));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscriber_may_reenter_the_store() {
        // A subscriber reading derived views must not deadlock
        let store = Arc::new(BookingStore::new());
        let store_clone = Arc::clone(&store);
        store.subscribe(move |_state, _change| {
            let _ = store_clone.current_month();
        });
        store.set_month(date(2025, 9, 1));
        assert_eq!(store.current_month(), date(2025, 9, 1));
    }
}
