//! Unit tests for the Identifiers module
//!
//! Tests cover UUID-backed identifiers and the prison number value object.

use core_kernel::{CoreError, EventId, PrisonNumber, ReviewScheduleId};
use uuid::Uuid;

mod review_schedule_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = ReviewScheduleId::new();
        let id2 = ReviewScheduleId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_ids_are_time_ordered() {
        let id1 = ReviewScheduleId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = ReviewScheduleId::new();
        assert!(id1.as_uuid() < id2.as_uuid());
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let uuid = Uuid::now_v7();
        let with_prefix: ReviewScheduleId = format!("RVS-{}", uuid).parse().unwrap();
        let without_prefix: ReviewScheduleId = uuid.to_string().parse().unwrap();
        assert_eq!(with_prefix, without_prefix);
        assert_eq!(*with_prefix.as_uuid(), uuid);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("RVS-not-a-uuid".parse::<ReviewScheduleId>().is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = ReviewScheduleId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}

mod event_id_tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(EventId::prefix(), "EVT");
        assert!(EventId::new().to_string().starts_with("EVT-"));
    }
}

mod prison_number_tests {
    use super::*;

    #[test]
    fn test_valid_prison_number() {
        let number: PrisonNumber = "A1234BC".parse().unwrap();
        assert_eq!(number.to_string(), "A1234BC");
    }

    #[test]
    fn test_lower_case_is_upper_cased() {
        let number = PrisonNumber::new("g6115va").unwrap();
        assert_eq!(number.as_str(), "G6115VA");
    }

    #[test]
    fn test_invalid_prison_number_is_validation_error() {
        let result = PrisonNumber::new("AB12345");
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let number = PrisonNumber::new("A1234BC").unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"A1234BC\"");

        let parsed: PrisonNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, number);

        let rejected: Result<PrisonNumber, _> = serde_json::from_str("\"XYZ\"");
        assert!(rejected.is_err());
    }
}
