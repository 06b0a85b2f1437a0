//! List views per resource: query, error message and filters

use contracts::domain::a001_meal_marking::ResidentMeals;
use contracts::domain::a002_welfare_check::WelfareRecord;
use contracts::domain::a003_incident::IncidentRecord;
use contracts::domain::a004_service_user::ServiceUserRecord;
use contracts::domain::a005_removal_request::RemovalRecord;
use contracts::domain::a006_basket::BasketRecord;
use contracts::shared::list_query::{CategoryFilter, ListRecord, ListState, ALL};

use super::list_page::ListPage;
use crate::queries::QueryKey;

fn exact() -> CategoryFilter {
    CategoryFilter::exact(ALL)
}

fn folded() -> CategoryFilter {
    CategoryFilter::folded(ALL)
}

// company -> branch, the branch list depends on the chosen company
fn by_company<R: ListRecord>(page_size: usize) -> ListState<R> {
    ListState::new(page_size)
        .with_filter("company", exact())
        .with_filter("branch", exact())
        .with_dependent("company", "branch")
}

// meal payloads only carry a company when the branch is populated with one
pub fn meal_markings(page_size: usize) -> ListPage<ResidentMeals> {
    ListPage::new(
        QueryKey::MealMarkings,
        "Error loading meal markings",
        by_company(page_size).with_filter("company", exact().keeping_missing()),
    )
}

pub fn welfare_checks(page_size: usize) -> ListPage<WelfareRecord> {
    ListPage::new(
        QueryKey::WelfareChecks,
        "Error loading welfare checks",
        ListState::new(page_size).with_filter("status", folded()),
    )
}

pub fn incidents(page_size: usize) -> ListPage<IncidentRecord> {
    ListPage::new(
        QueryKey::Incidents,
        "Error loading incidents",
        ListState::new(page_size)
            .with_filter("status", folded())
            .with_filter("severity", folded())
            .with_filter("branch", exact()),
    )
}

pub fn service_users(page_size: usize) -> ListPage<ServiceUserRecord> {
    ListPage::new(
        QueryKey::Guests,
        "Error loading service users",
        by_company(page_size).with_filter("nationality", exact()),
    )
}

pub fn in_transit(page_size: usize) -> ListPage<RemovalRecord> {
    ListPage::new(
        QueryKey::InTransitUsers,
        "Error loading in-transit service users",
        by_company(page_size).with_filter("status", exact()),
    )
}

pub fn other_removals(page_size: usize) -> ListPage<RemovalRecord> {
    ListPage::new(
        QueryKey::OtherRemovals,
        "Error loading removal requests",
        by_company(page_size).with_filter("status", exact()),
    )
}

pub fn baskets(page_size: usize) -> ListPage<BasketRecord> {
    ListPage::new(
        QueryKey::Baskets,
        "Error loading baskets",
        ListState::new(page_size)
            .with_filter("branch", exact())
            .with_filter("status", exact()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::normalize::Normalize;
    use serde_json::json;

    #[test]
    fn test_filters_start_at_all() {
        let page = incidents(10);
        let criteria = page.state.criteria();
        assert_eq!(criteria.active_count(), 0);
        assert!(criteria.categorical["status"].fold_case);
        assert!(!criteria.categorical["branch"].fold_case);
    }

    #[test]
    fn test_company_change_resets_branch() {
        let mut page = service_users(10);
        page.state.set_category("company", "c1");
        page.state.set_category("branch", "b1");
        page.state.set_category("company", "c2");
        assert_eq!(page.state.criteria().categorical["branch"].selected, ALL);
        assert_eq!(page.state.criteria().categorical["nationality"].selected, ALL);
    }

    #[test]
    fn test_meal_company_filter_keeps_rows_without_company() {
        let mut page = meal_markings(10);
        page.state.replace_records(vec![
            ResidentMeals::from_value(json!({
                "_id": "m1",
                "branchId": {"_id": "b1", "name": "North", "companyId": "c1"},
                "guestId": {"userId": {"fullName": "Jane"}}
            })),
            ResidentMeals::from_value(json!({
                "_id": "m2",
                "branchId": "b2",
                "guestId": {"userId": {"fullName": "Omar"}}
            })),
            ResidentMeals::from_value(json!({
                "_id": "m3",
                "branchId": {"_id": "b3", "companyId": "c2"},
                "guestId": {"userId": {"fullName": "Ada"}}
            })),
        ]);
        page.state.set_category("company", "c1");
        let rows = page.state.filtered();
        let mut ids: Vec<&str> = rows.iter().map(|r| r.id()).collect();
        ids.sort();
        assert_eq!(ids, vec!["m1", "m2"]);

        page.state.set_category("branch", "b1");
        let rows = page.state.filtered();
        let ids: Vec<&str> = rows.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["m1"]);
    }
}
