//! Feedback classification.
//!
//! Maps free-text user feedback plus preferences to the category set
//! used for the next round of POI queries. Rules are cumulative: one
//! feedback string can trigger several of them.

use crate::api::{Category, Preferences};

/// Classify feedback text into a set of POI categories.
///
/// Always starts from the base set `{restaurant, gas_station,
/// lodging}`, so the result is never empty. The returned order is
/// rule insertion order, which downstream dedup uses as its category
/// tie-break order.
pub fn classify_feedback(feedback: &str, prefs: &Preferences) -> Vec<Category> {
    let text = feedback.to_lowercase();
    let mut categories = CategorySet::new();

    categories.add(Category::restaurant());
    categories.add(Category::gas_station());
    categories.add(Category::lodging());

    if text.contains("hotel") || text.contains("lodging") {
        categories.add(Category::lodging());
    }
    if text.contains("gas") || text.contains("fuel") {
        categories.add(Category::gas_station());
    }
    if text.contains("food") || text.contains("eat") || text.contains("restaurant") {
        categories.add(Category::restaurant());
    }
    if text.contains("coffee") {
        categories.add(Category::cafe());
    }
    if text.contains("cheap")
        || text.contains("inexpensive")
        || text.contains("budget")
        || text.contains("too expensive")
    {
        // Budget sensitivity is handled by ranking; keep restaurant in
        // the set to cast a wider net.
        categories.add(Category::restaurant());
    }
    if text.contains("one more") {
        categories.add(Category::lodging());
    }

    // Cuisine preferences keep restaurants in play regardless of the
    // feedback text.
    if !prefs.cuisine.is_empty() {
        categories.add(Category::restaurant());
    }

    categories.into_vec()
}

/// Insertion-ordered category set.
struct CategorySet {
    entries: Vec<Category>,
}

impl CategorySet {
    fn new() -> Self {
        CategorySet {
            entries: Vec::new(),
        }
    }

    fn add(&mut self, category: Category) {
        if !self.entries.contains(&category) {
            self.entries.push(category);
        }
    }

    fn into_vec(self) -> Vec<Category> {
        self.entries
    }
}
