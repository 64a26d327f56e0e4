//! Candidate deduplication.
//!
//! Raw provider results can surface the same real-world place several
//! times: once per sample point it is within radius of, and once per
//! category it is tagged with. `place_id` is the identity key.

use std::collections::HashSet;

use crate::api::CandidateStop;

/// Keep the first candidate seen for each `place_id`.
///
/// Input order is the logical query order (point-major,
/// category-minor), so which duplicate survives is a defined
/// tie-break: the first (point, category) pair that surfaced the
/// place wins, including its category and rating snapshot. Output
/// order equals first-seen order.
pub fn dedupe_stops(candidates: Vec<CandidateStop>) -> Vec<CandidateStop> {
    let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.place_id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Category, GeoPoint};

    fn stop(place_id: &str, category: Category, rating: Option<f64>) -> CandidateStop {
        CandidateStop {
            place_id: place_id.to_string(),
            name: format!("place {place_id}"),
            location: GeoPoint::new(0.0, 0.0),
            category,
            rating,
            price_level: None,
        }
    }

    #[test]
    fn test_first_seen_wins() {
        let input = vec![
            stop("a", Category::restaurant(), Some(4.0)),
            stop("b", Category::gas_station(), None),
            // Same place rediscovered under a different category with a
            // different rating snapshot.
            stop("a", Category::cafe(), Some(4.5)),
        ];

        let out = dedupe_stops(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].place_id, "a");
        assert_eq!(out[0].category, Category::restaurant());
        assert_eq!(out[0].rating, Some(4.0));
        assert_eq!(out[1].place_id, "b");
    }

    #[test]
    fn test_output_order_is_first_seen_order() {
        let input = vec![
            stop("c", Category::lodging(), None),
            stop("a", Category::restaurant(), None),
            stop("c", Category::restaurant(), None),
            stop("b", Category::cafe(), None),
        ];

        let ids: Vec<String> = dedupe_stops(input).into_iter().map(|s| s.place_id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            stop("a", Category::restaurant(), Some(4.0)),
            stop("b", Category::gas_station(), None),
            stop("a", Category::cafe(), None),
        ];

        let once = dedupe_stops(input);
        let twice = dedupe_stops(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe_stops(vec![]).is_empty());
    }

    #[test]
    fn test_all_output_ids_unique() {
        let input: Vec<CandidateStop> = (0..50)
            .map(|i| stop(&format!("p{}", i % 7), Category::restaurant(), None))
            .collect();
        let out = dedupe_stops(input);
        let mut ids: Vec<_> = out.iter().map(|s| s.place_id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), out.len());
    }
}
