use contracts::domain::a001_meal_marking::{MealDetail, MealStats, ResidentMeals};
use contracts::domain::a002_welfare_check::WelfareRecord;
use contracts::domain::a003_incident::IncidentRecord;
use contracts::domain::a004_service_user::{PractitionerInfo, ServiceUserRecord};
use contracts::domain::a005_removal_request::RemovalRecord;
use contracts::domain::a006_basket::{branch_options, BasketRecord, STATUS_OPTIONS};
use contracts::shared::assets::AssetResolver;
use contracts::shared::date_utils::{format_date, format_datetime, format_time};
use contracts::shared::tone::Tone;

use crate::shared::format::{or_dash, TableRow};

fn date(value: &Option<chrono::DateTime<chrono::Utc>>) -> String {
    value.as_ref().map(format_date).unwrap_or_else(|| "-".to_string())
}

// Danger/attention rows get a marker, the terminal has no badge colours
fn toned(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Danger => format!("{} (!)", text),
        Tone::Attention => format!("{} (*)", text),
        _ => text.to_string(),
    }
}

fn meal(detail: &MealDetail) -> String {
    match (detail.marked, &detail.time) {
        (true, Some(time)) if !time.is_empty() => format!("yes {}", time),
        (true, _) => "yes".to_string(),
        (false, _) => "no".to_string(),
    }
}

fn practitioner(info: &PractitionerInfo) -> String {
    if info.name.is_empty() {
        return "-".to_string();
    }
    if info.is_inactive() {
        format!("{} (inactive)", info.name)
    } else {
        info.name.clone()
    }
}

impl TableRow for ResidentMeals {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Port", "Room", "Branch", "Breakfast", "Lunch", "Dinner", "Taken", "Date"]
    }

    fn cells(&self, _: &AssetResolver) -> Vec<String> {
        vec![
            self.name.clone(),
            or_dash(self.port_number.as_deref()),
            or_dash(self.room.as_deref()),
            or_dash(self.branch.as_deref()),
            meal(&self.meals.breakfast),
            meal(&self.meals.lunch),
            meal(&self.meals.dinner),
            self.total_meals_taken.to_string(),
            or_dash(self.meal_date.as_deref()),
        ]
    }
}

impl TableRow for WelfareRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "Name", "Port", "Week", "Physical", "Mental", "Emotional", "Social", "Overall",
            "Status", "Staff", "Notes", "Image",
        ]
    }

    fn cells(&self, assets: &AssetResolver) -> Vec<String> {
        let status = self.status.as_deref().unwrap_or("-");
        let assessments = [
            &self.physical_health,
            &self.mental_health,
            &self.emotional_wellbeing,
            &self.social_support,
            &self.overall_assessment,
        ];
        let mut cells = vec![
            self.name.clone(),
            or_dash(self.port_number.as_deref()),
            format!("{} - {}", date(&self.week_start), date(&self.week_end)),
        ];
        cells.extend(
            assessments
                .iter()
                .zip(self.assessment_tones())
                .map(|(value, tone)| toned(&or_dash(value.as_deref()), tone)),
        );
        cells.extend([
            toned(status, self.status_tone()),
            or_dash(self.staff.as_deref()),
            self.notes_display().to_string(),
            assets.resolve(self.image.as_deref()),
        ]);
        cells
    }
}

impl TableRow for IncidentRecord {
    fn headers() -> Vec<&'static str> {
        vec!["Title", "Severity", "Status", "Resident", "Port", "Branch", "Reported", "Evidence"]
    }

    fn cells(&self, assets: &AssetResolver) -> Vec<String> {
        let reported = match (self.date_reported(), self.time_reported()) {
            (Some(d), Some(t)) => format!("{} {}", d, t),
            _ => "-".to_string(),
        };
        let evidence = match self.evidence.as_deref() {
            Some(path) => assets.resolve(Some(path)),
            None => "-".to_string(),
        };
        vec![
            self.title.clone(),
            or_dash(Some(self.severity.as_str())),
            self.status_choice(),
            or_dash(Some(self.resident.as_str())),
            or_dash(Some(self.port_number.as_str())),
            or_dash(Some(self.branch.as_str())),
            reported,
            evidence,
        ]
    }
}

impl TableRow for ServiceUserRecord {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Port", "Nationality", "Branch", "Room", "Medic", "Dentist", "Arrival"]
    }

    fn cells(&self, _: &AssetResolver) -> Vec<String> {
        vec![
            self.full_name.clone(),
            or_dash(Some(self.port_number.as_str())),
            or_dash(Some(self.nationality.as_str())),
            or_dash(Some(self.branch.as_str())),
            or_dash(Some(self.room.as_str())),
            practitioner(&self.medic),
            practitioner(&self.dentist),
            date(&self.arrival_date),
        ]
    }
}

impl TableRow for RemovalRecord {
    fn headers() -> Vec<&'static str> {
        vec!["Resident", "Phone", "Room", "Location", "Reason", "Status", "Requested", "Attachment"]
    }

    fn cells(&self, assets: &AssetResolver) -> Vec<String> {
        let attachment = self
            .attachment
            .as_ref()
            .and_then(|a| a.view_url.as_deref())
            .map(|url| assets.resolve(Some(url)))
            .unwrap_or_else(|| "-".to_string());
        vec![
            self.guest_name.clone(),
            self.phone_display().to_string(),
            or_dash(self.room_number.as_deref()),
            or_dash(self.location.as_deref()),
            self.reason_display().to_string(),
            toned(&self.status_label(), self.status_tone()),
            self.created_at
                .as_ref()
                .map(format_datetime)
                .unwrap_or_else(|| "-".to_string()),
            attachment,
        ]
    }
}

impl TableRow for BasketRecord {
    fn headers() -> Vec<&'static str> {
        vec!["Resident", "Port", "Branch", "Staff", "Status", "Items", "Created"]
    }

    fn cells(&self, _: &AssetResolver) -> Vec<String> {
        vec![
            self.resident.clone(),
            or_dash(self.port_number.as_deref()),
            self.branch_display().to_string(),
            self.staff_display().to_string(),
            toned(&self.status, self.status_tone()),
            format!(
                "{}/{} ({}%)",
                self.delivered_items,
                self.total_items,
                self.completion_percent()
            ),
            self.created_at
                .as_ref()
                .map(|at| format!("{} {}", format_date(at), format_time(at)))
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}

/// Summary line printed above the meals table.
pub fn render_meal_stats(stats: &MealStats) -> String {
    format!(
        "Residents: {} | Breakfast: {} | Lunch: {} | Dinner: {} | Served: {} | Completion: {}%\n",
        stats.residents,
        stats.breakfast_served,
        stats.lunch_served,
        stats.dinner_served,
        stats.total_served,
        stats.completion_percent
    )
}

/// Filter choices printed above the baskets table.
pub fn render_basket_choices(records: &[BasketRecord]) -> String {
    let branches = branch_options(records);
    format!(
        "Branches: {} | Statuses: {}\n",
        if branches.is_empty() {
            "-".to_string()
        } else {
            branches.join(", ")
        },
        STATUS_OPTIONS.join(", ")
    )
}
