use crate::app::domain::Record;

/// Case-insensitive substring match against the plain string form of every
/// field of `record`. An empty term matches everything.
pub fn matches_search<T: Record>(record: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record
        .search_values()
        .iter()
        .any(|value| value.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{Contract, PlanningItem};

    fn contract() -> Contract {
        Contract {
            id: "c1".to_string(),
            item: "Папір офісний А4".to_string(),
            contracting_party: "ТОВ \"Канцсвіт\"".to_string(),
            expected_cost: 4520.5,
            year: 2024,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_term_matches_all() {
        assert!(matches_search(&contract(), ""));
    }

    #[test]
    fn test_case_insensitive_across_fields() {
        let c = contract();
        assert!(matches_search(&c, "папір"));
        assert!(matches_search(&c, "КАНЦСВІТ"));
        assert!(matches_search(&c, "4520.5"));
        assert!(matches_search(&c, "2024"));
        assert!(!matches_search(&c, "бензин"));
    }

    #[test]
    fn test_matches_flags_and_type_label() {
        let c = contract();
        assert!(matches_search(&c, "false"));
        assert!(matches_search(&c, "прямий"));
    }

    #[test]
    fn test_planning_items() {
        let item = PlanningItem {
            id: "p1".to_string(),
            notes: "Потрібно узгодити".to_string(),
            ..Default::default()
        };
        assert!(matches_search(&item, "узгод"));
        assert!(!matches_search(&item, "договір"));
    }
}
