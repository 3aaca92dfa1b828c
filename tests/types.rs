// ABOUTME: Integration tests for identifiers and pagination.
// ABOUTME: Tests wire representation and value semantics.

use goploy_deploy::types::*;
use std::collections::HashSet;

mod id_tests {
    use super::*;

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(ProjectId::new(3), ProjectId::from(3));
        assert_ne!(ServerId::new(1), ServerId::new(2));
    }

    #[test]
    fn ids_hash_by_value() {
        let set: HashSet<ServerId> = [10, 11, 10].into_iter().map(ServerId::new).collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn id_vec_serializes_as_number_array() {
        let ids = vec![ServerId::new(10), ServerId::new(11)];
        assert_eq!(serde_json::to_string(&ids).unwrap(), "[10,11]");
    }

    #[test]
    fn display_shows_number() {
        assert_eq!(PublishTraceId::new(99).to_string(), "99");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(UserId::default().get(), 0);
    }
}

mod pagination_tests {
    use super::*;

    #[test]
    fn default_is_first_page() {
        let p = Pagination::default();
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, DEFAULT_PAGE_SIZE);
        assert!(p.total.is_none());
    }

    #[test]
    fn missing_total_deserializes_as_none() {
        let p: Pagination = serde_json::from_str(r#"{"page":3,"pageSize":50}"#).unwrap();
        assert_eq!(p, Pagination::new(3, 50));
    }
}
