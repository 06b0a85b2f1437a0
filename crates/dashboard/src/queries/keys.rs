use contracts::domain::a007_room::CapacityQuery;

/// Identity of one cached collection.
///
/// `name` groups keys for invalidation: invalidating `"branches"` drops the
/// branch lists of every company.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    MealMarkings,
    WelfareChecks,
    Incidents,
    Guests,
    InTransitUsers,
    OtherRemovals,
    Baskets,
    Companies,
    Locations,
    BranchesByCompany(String),
    CapacityRooms(String),
}

impl QueryKey {
    pub fn name(&self) -> &'static str {
        match self {
            QueryKey::MealMarkings => "mealMarkings",
            QueryKey::WelfareChecks => "welfareChecks",
            QueryKey::Incidents => "incidents",
            QueryKey::Guests => "guests",
            QueryKey::InTransitUsers => "inTransitUsers",
            QueryKey::OtherRemovals => "otherRemovals",
            QueryKey::Baskets => "baskets",
            QueryKey::Companies => "companies",
            QueryKey::Locations => "locations",
            QueryKey::BranchesByCompany(_) => "branches",
            QueryKey::CapacityRooms(_) => "rooms",
        }
    }

    pub fn path(&self) -> String {
        match self {
            QueryKey::MealMarkings => "/meal-marking".to_string(),
            QueryKey::WelfareChecks => "/welfare-check".to_string(),
            QueryKey::Incidents => "/incident".to_string(),
            QueryKey::Guests => "/guest".to_string(),
            QueryKey::InTransitUsers => "/su-removal/in-transit".to_string(),
            QueryKey::OtherRemovals => "/su-removal/other-removals".to_string(),
            QueryKey::Baskets => "/su-basket".to_string(),
            QueryKey::Companies => "/company".to_string(),
            QueryKey::Locations => "/location".to_string(),
            QueryKey::BranchesByCompany(company_id) => format!(
                "/branch/list/by-company?companyId={}",
                urlencoding::encode(company_id)
            ),
            QueryKey::CapacityRooms(branch_id) => {
                let query = CapacityQuery::single_adult(branch_id.as_str());
                format!(
                    "/guest/rooms/capacity?capacity={}&kids={}&branchId={}",
                    query.capacity,
                    query.kids,
                    urlencoding::encode(&query.branch_id)
                )
            }
        }
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryKey::BranchesByCompany(id) | QueryKey::CapacityRooms(id) => {
                write!(f, "{}[{}]", self.name(), id)
            }
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterized_paths() {
        assert_eq!(
            QueryKey::BranchesByCompany("c 1".into()).path(),
            "/branch/list/by-company?companyId=c%201"
        );
        assert_eq!(
            QueryKey::CapacityRooms("b1".into()).path(),
            "/guest/rooms/capacity?capacity=1&kids=0&branchId=b1"
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(QueryKey::InTransitUsers.name(), "inTransitUsers");
        assert_eq!(QueryKey::CapacityRooms("b1".into()).to_string(), "rooms[b1]");
        assert_eq!(QueryKey::WelfareChecks.path(), "/welfare-check");
    }
}
