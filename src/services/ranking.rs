//! Preference-based ranking of candidate stops.

use crate::api::{Budget, CandidateStop, Preferences};

/// Maximum number of stops returned to the caller.
pub const MAX_RANKED_STOPS: usize = 20;

/// Filter, score, and order candidates against user preferences.
///
/// Candidates whose rating (0 when absent) falls below
/// `prefs.min_rating` are dropped. Survivors are ordered by descending
/// score; ties keep their relative input order, i.e. the dedup
/// first-seen order. At most [`MAX_RANKED_STOPS`] entries are
/// returned. The score itself is transient and not part of the
/// returned shape.
pub fn rank_stops(candidates: Vec<CandidateStop>, prefs: &Preferences) -> Vec<CandidateStop> {
    let mut scored: Vec<(CandidateStop, f64)> = candidates
        .into_iter()
        .filter(|c| c.rating.unwrap_or(0.0) >= prefs.min_rating)
        .map(|c| {
            let s = score(&c, prefs);
            (c, s)
        })
        .collect();

    // Stable sort preserves input order among equal scores.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(MAX_RANKED_STOPS);
    scored.into_iter().map(|(c, _)| c).collect()
}

/// Compute the preference score for a single candidate.
fn score(candidate: &CandidateStop, prefs: &Preferences) -> f64 {
    let mut score = candidate.rating.unwrap_or(0.0);
    let price_level = candidate.price_level.unwrap_or(0);

    if prefs.budget == Budget::Low && price_level <= 2 {
        score += 0.5;
    }
    if prefs.budget == Budget::High && price_level >= 3 {
        score += 0.5;
    }

    if !prefs.cuisine.is_empty() {
        let name = candidate.name.to_lowercase();
        let matched = prefs
            .cuisine
            .iter()
            .any(|c| name.contains(&c.to_lowercase()));
        if matched {
            score += 0.3;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Category, GeoPoint};

    fn stop(place_id: &str, name: &str, rating: Option<f64>, price_level: Option<i32>) -> CandidateStop {
        CandidateStop {
            place_id: place_id.to_string(),
            name: name.to_string(),
            location: GeoPoint::new(0.0, 0.0),
            category: Category::restaurant(),
            rating,
            price_level,
        }
    }

    #[test]
    fn test_min_rating_filter_boundary() {
        let prefs = Preferences::default(); // min_rating 3.5
        let out = rank_stops(
            vec![
                stop("below", "Below", Some(3.4), None),
                stop("at", "At", Some(3.5), None),
            ],
            &prefs,
        );
        let ids: Vec<_> = out.iter().map(|s| s.place_id.as_str()).collect();
        assert_eq!(ids, vec!["at"]);
    }

    #[test]
    fn test_missing_rating_treated_as_zero() {
        let prefs = Preferences::default();
        assert!(rank_stops(vec![stop("x", "X", None, None)], &prefs).is_empty());

        let lenient = Preferences {
            min_rating: 0.0,
            ..Preferences::default()
        };
        assert_eq!(rank_stops(vec![stop("x", "X", None, None)], &lenient).len(), 1);
    }

    #[test]
    fn test_score_example() {
        let prefs = Preferences {
            budget: Budget::Low,
            cuisine: vec!["mexican".to_string()],
            min_rating: 3.0,
            ..Preferences::default()
        };
        let candidate = stop("m", "Mexican Grill", Some(4.0), Some(1));

        // 4.0 rating + 0.5 low-budget bonus + 0.3 cuisine match
        assert!((score(&candidate, &prefs) - 4.8).abs() < 1e-9);
    }

    #[test]
    fn test_high_budget_bonus() {
        let prefs = Preferences {
            budget: Budget::High,
            ..Preferences::default()
        };
        assert_eq!(score(&stop("a", "A", Some(4.0), Some(3)), &prefs), 4.5);
        assert_eq!(score(&stop("b", "B", Some(4.0), Some(2)), &prefs), 4.0);
        // Absent price level counts as 0: no high-budget bonus.
        assert_eq!(score(&stop("c", "C", Some(4.0), None), &prefs), 4.0);
    }

    #[test]
    fn test_cuisine_match_case_insensitive() {
        let prefs = Preferences {
            cuisine: vec!["THAI".to_string()],
            ..Preferences::default()
        };
        assert_eq!(score(&stop("t", "Bangkok Thai Kitchen", Some(4.0), None), &prefs), 4.3);
        assert_eq!(score(&stop("u", "Burger Barn", Some(4.0), None), &prefs), 4.0);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let prefs = Preferences {
            min_rating: 0.0,
            ..Preferences::default()
        };
        let out = rank_stops(
            vec![
                stop("first_tie", "A", Some(4.0), None),
                stop("top", "B", Some(4.5), None),
                stop("second_tie", "C", Some(4.0), None),
            ],
            &prefs,
        );
        let ids: Vec<_> = out.iter().map(|s| s.place_id.as_str()).collect();
        assert_eq!(ids, vec!["top", "first_tie", "second_tie"]);
    }

    #[test]
    fn test_truncated_to_cap() {
        let prefs = Preferences::default();
        let input: Vec<CandidateStop> = (0..30)
            .map(|i| stop(&format!("p{i}"), "Diner", Some(4.0), None))
            .collect();
        assert_eq!(rank_stops(input, &prefs).len(), MAX_RANKED_STOPS);
    }

    #[test]
    fn test_output_shape_unchanged() {
        let prefs = Preferences::default();
        let input = stop("p", "Diner", Some(4.0), Some(2));
        let out = rank_stops(vec![input.clone()], &prefs);
        assert_eq!(out, vec![input]);
    }
}
