use chrono::{SecondsFormat, Utc};

use crate::app::domain::Record;

/// Fresh record id derived from the current UTC time
/// (RFC 3339 with milliseconds). When `taken` reports a collision, a numeric
/// suffix is appended until the id is free.
pub fn generate_id(taken: impl Fn(&str) -> bool) -> String {
    let base = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    unique_id(base, taken)
}

/// Give every record with a blank id a fresh one, leaving the rest alone.
/// Returns how many ids were assigned.
pub fn assign_missing_ids<T: Record>(records: &mut [T]) -> usize {
    let mut assigned = 0;
    for i in 0..records.len() {
        if !records[i].id().trim().is_empty() {
            continue;
        }
        let id = generate_id(|candidate| records.iter().any(|r| r.id() == candidate));
        records[i].set_id(id);
        assigned += 1;
    }
    assigned
}

fn unique_id(base: String, taken: impl Fn(&str) -> bool) -> String {
    if !taken(&base) {
        return base;
    }
    (1u32..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_timestamp_like() {
        let id = generate_id(|_| false);
        assert!(id.ends_with('Z'));
        assert!(id.contains('T'));
    }

    #[test]
    fn test_collision_gets_suffix() {
        let existing = ["2024-05-01T10:00:00.000Z", "2024-05-01T10:00:00.000Z-1"];
        let id = unique_id("2024-05-01T10:00:00.000Z".to_string(), |c| existing.contains(&c));
        assert_eq!(id, "2024-05-01T10:00:00.000Z-2");
    }

    #[test]
    fn test_assign_missing_ids_fills_only_blanks() {
        use crate::app::domain::PlanningItem;

        let mut items = vec![
            PlanningItem { id: String::new(), name: "a".into(), ..Default::default() },
            PlanningItem { id: "keep".into(), name: "b".into(), ..Default::default() },
            PlanningItem { id: "  ".into(), name: "c".into(), ..Default::default() },
        ];
        assert_eq!(assign_missing_ids(&mut items), 2);
        assert_eq!(items[1].id, "keep");
        assert!(!items[0].id.trim().is_empty());
        assert!(!items[2].id.trim().is_empty());
        assert_ne!(items[0].id, items[2].id);
        assert_eq!(assign_missing_ids(&mut items), 0);
    }

    #[test]
    fn test_generated_id_avoids_existing() {
        let first = generate_id(|_| false);
        let second = generate_id(|c| c == first);
        assert_ne!(first, second);
    }
}
