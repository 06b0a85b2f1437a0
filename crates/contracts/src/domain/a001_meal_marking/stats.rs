use serde::{Deserialize, Serialize};

use super::view::ResidentMeals;

/// Итоги по питанию for the residents currently in view
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MealStats {
    pub residents: usize,
    pub breakfast_served: usize,
    pub lunch_served: usize,
    pub dinner_served: usize,
    pub total_served: usize,
    /// served / (3 x residents), rounded; 0 when there are no residents
    pub completion_percent: u32,
}

impl MealStats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ResidentMeals>) -> Self {
        let mut stats = Self::default();
        for r in records {
            stats.residents += 1;
            stats.breakfast_served += usize::from(r.meals.breakfast.marked);
            stats.lunch_served += usize::from(r.meals.lunch.marked);
            stats.dinner_served += usize::from(r.meals.dinner.marked);
        }
        stats.total_served = stats.breakfast_served + stats.lunch_served + stats.dinner_served;
        let slots = stats.residents * 3;
        if slots > 0 {
            stats.completion_percent = (stats.total_served as f64 / slots as f64 * 100.0).round() as u32;
        }
        stats
    }
}
