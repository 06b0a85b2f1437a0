pub mod aggregate;
pub mod stats;
pub mod view;

pub use aggregate::{DailyMeals, MealEntry, MealMarking, MealMarkingDetail};
pub use stats::MealStats;
pub use view::{MealDetail, MealsOfDay, ResidentMeals};
