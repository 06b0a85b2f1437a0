use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::{Parser, Subcommand, ValueEnum};
use contracts::domain::a001_meal_marking::MealStats;
use contracts::domain::a003_incident::ResolveStatus;
use contracts::domain::a005_removal_request::TransferSelection;
use contracts::domain::a006_basket::STATUS_OPTIONS;
use contracts::domain::a007_room::{capacity_rooms, RelocationSelection};
use contracts::domain::common::{branch_choices, Branch, Company, Location};
use contracts::shared::date_utils::parse_date_input;
use contracts::shared::envelope::collection_of;
use contracts::shared::list_query::ListRecord;
use contracts::shared::normalize::Normalize;
use serde_json::Value;

use crate::api::Transport;
use crate::mutations::{MutationError, Notification, SignatureRole};
use crate::queries::QueryKey;
use crate::session::Session;
use crate::shared::format::TableRow;
use crate::views::{pages, render_basket_choices, render_meal_stats, ListFilters, ListPage};

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Care facility dashboard: resident lists and review actions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Meals,
    Welfare,
    Incidents,
    ServiceUsers,
    InTransit,
    OtherRemovals,
    Baskets,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Staff,
    ServiceUser,
}

impl From<Role> for SignatureRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Staff => SignatureRole::Staff,
            Role::ServiceUser => SignatureRole::ServiceUser,
        }
    }
}

#[derive(clap::Args, Debug, Default)]
pub struct ListArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// Branch id (branch name for baskets)
    #[arg(long)]
    pub branch: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub severity: Option<String>,
    #[arg(long)]
    pub nationality: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub from: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long)]
    pub page: Option<usize>,
    #[arg(long)]
    pub page_size: Option<usize>,
    /// Jump to the page holding this resident (service users)
    #[arg(long)]
    pub highlight: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one page of a list view
    List {
        resource: Resource,
        #[command(flatten)]
        args: ListArgs,
    },
    /// List companies, or the branches of one company
    Branches {
        #[arg(long)]
        company: Option<String>,
    },
    /// Approve a pending transfer to another branch
    ApproveTransfer {
        #[arg(long)]
        guest: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        current_branch: String,
        #[arg(long)]
        branch: String,
        #[arg(long)]
        room: String,
        #[arg(long)]
        notes: Option<String>,
    },
    RejectTransfer {
        #[arg(long)]
        guest: String,
        #[arg(long)]
        reason: Option<String>,
    },
    ApproveRemoval {
        #[arg(long)]
        guest: String,
        #[arg(long)]
        notes: Option<String>,
    },
    RejectRemoval {
        #[arg(long)]
        guest: String,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Set an incident to Resolved or Closed
    ResolveIncident {
        #[arg(long)]
        id: String,
        #[arg(long)]
        status: Option<String>,
    },
    /// Move a resident to another room of their branch
    Relocate {
        #[arg(long)]
        guest: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        branch: String,
        #[arg(long)]
        current_room: Option<String>,
        #[arg(long)]
        location: String,
        #[arg(long)]
        room: String,
    },
    /// Save a room document read from a JSON file
    UpdateRoom {
        #[arg(long)]
        id: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Upload a signature, given as a data URL or a PNG file
    SaveSignature {
        #[arg(long)]
        guest: String,
        #[arg(long, value_enum, default_value_t = Role::ServiceUser)]
        role: Role,
        #[arg(long, conflicts_with = "file")]
        data_url: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

impl ListArgs {
    fn date(value: &Option<String>, flag: &str) -> Option<chrono::NaiveDate> {
        let value = value.as_deref()?;
        let date = parse_date_input(value);
        if date.is_none() {
            tracing::warn!("--{} {:?} is not a YYYY-MM-DD date, ignored", flag, value);
        }
        date
    }

    pub fn filters(&self) -> ListFilters {
        ListFilters {
            search: self.search.clone(),
            from: Self::date(&self.from, "from"),
            to: Self::date(&self.to, "to"),
            page: self.page,
            page_size: self.page_size,
            ..ListFilters::default()
        }
        .category("company", self.company.clone())
        .category("branch", self.branch.clone())
        .category("status", self.status.clone())
        .category("severity", self.severity.clone())
        .category("nationality", self.nationality.clone())
    }
}

fn notified(result: Result<Notification, MutationError>) -> anyhow::Result<String> {
    match result {
        Ok(notification) => Ok(format!("{}\n", notification)),
        Err(e) => Err(anyhow!("{}", e.notification())),
    }
}

async fn show<R, T>(session: &Session<T>, mut page: ListPage<R>, args: &ListArgs) -> String
where
    R: ListRecord + Normalize + TableRow,
    T: Transport,
{
    page.refresh(session).await;
    page.apply(&args.filters());
    page.render(session)
}

async fn list<T: Transport>(
    session: &Session<T>,
    resource: Resource,
    args: &ListArgs,
) -> anyhow::Result<String> {
    let size = session.page_size;
    let out = match resource {
        Resource::Meals => {
            let mut page = pages::meal_markings(size);
            page.refresh(session).await;
            page.apply(&args.filters());
            let stats = MealStats::from_records(page.state.filtered());
            format!("{}{}", render_meal_stats(&stats), page.render(session))
        }
        Resource::Welfare => show(session, pages::welfare_checks(size), args).await,
        Resource::Incidents => show(session, pages::incidents(size), args).await,
        Resource::ServiceUsers => {
            let mut page = pages::service_users(size);
            page.refresh(session).await;
            page.apply(&args.filters());
            if let Some(name) = args.highlight.as_deref() {
                if page.highlight(|r| r.full_name == name).is_none() {
                    tracing::warn!("{} is not in the filtered list", name);
                }
            }
            page.render(session)
        }
        Resource::InTransit => show(session, pages::in_transit(size), args).await,
        Resource::OtherRemovals => show(session, pages::other_removals(size), args).await,
        Resource::Baskets => {
            if let Some(status) = args.status.as_deref() {
                if !STATUS_OPTIONS.contains(&status.trim()) {
                    tracing::warn!(
                        "basket status {:?} is not one of: {}",
                        status,
                        STATUS_OPTIONS.join(", ")
                    );
                }
            }
            let mut page = pages::baskets(size);
            page.refresh(session).await;
            page.apply(&args.filters());
            format!(
                "{}{}",
                render_basket_choices(page.state.records()),
                page.render(session)
            )
        }
    };
    Ok(out)
}

async fn branches<T: Transport>(
    session: &Session<T>,
    company: Option<&str>,
) -> anyhow::Result<String> {
    let companies: Vec<Company> = collection_of(session.fetch(&QueryKey::Companies).await?);
    let mut out = String::new();
    match company {
        None => {
            for c in &companies {
                out.push_str(&format!(
                    "{}  {}\n",
                    c.id.as_deref().unwrap_or("-"),
                    c.name.as_deref().unwrap_or("-")
                ));
            }
        }
        Some(company) => {
            for choice in branch_choices(&companies, company) {
                out.push_str(&format!("{}  {}\n", choice.id, choice.name));
            }
        }
    }
    if out.is_empty() {
        out.push_str("No records found.\n");
    }
    Ok(out)
}

async fn approve_transfer<T: Transport>(
    session: &Session<T>,
    mut selection: TransferSelection,
    branch: &str,
    room: &str,
    notes: Option<String>,
) -> anyhow::Result<String> {
    let company = selection.company_id().unwrap_or_default().to_string();
    let all: Vec<Branch> =
        collection_of(session.fetch(&QueryKey::BranchesByCompany(company)).await?);
    if !selection
        .candidate_branches(&all)
        .iter()
        .any(|b| b.id.as_deref() == Some(branch))
    {
        bail!("Branch {} is not a transfer destination for this resident", branch);
    }
    selection.select_branch(branch);

    let rooms = capacity_rooms(
        session
            .fetch(&QueryKey::CapacityRooms(branch.to_string()))
            .await?,
    );
    if let Some(found) = rooms.iter().find(|r| r.id == room) {
        selection.select_room(found);
    } else {
        tracing::warn!("room {} has no free capacity in branch {}", room, branch);
    }
    notified(session.approve_transfer(&mut selection, notes).await)
}

async fn relocate<T: Transport>(
    session: &Session<T>,
    guest: &str,
    name: &str,
    mut selection: RelocationSelection,
    location: &str,
    room: &str,
) -> anyhow::Result<String> {
    let locations: Vec<Location> = collection_of(session.fetch(&QueryKey::Locations).await?);
    if !selection
        .locations(&locations)
        .iter()
        .any(|l| l.id.as_deref() == Some(location))
    {
        bail!("Location {} does not belong to branch {}", location, selection.branch_id);
    }
    selection.select_location(location);
    selection.select_room(room);

    let rooms = capacity_rooms(
        session
            .fetch(&QueryKey::CapacityRooms(selection.branch_id.clone()))
            .await?,
    );
    notified(session.relocate(guest, name, &mut selection, &rooms).await)
}

fn signature_url(data_url: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    match (data_url, file) {
        (Some(url), _) => Ok(url),
        (None, Some(path)) => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read signature file {}", path.display()))?;
            Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
        }
        (None, None) => bail!("Provide the signature with --data-url or --file"),
    }
}

/// Runs one command and returns what to print on stdout.
pub async fn run<T: Transport>(session: &Session<T>, command: Command) -> anyhow::Result<String> {
    match command {
        Command::List { resource, args } => list(session, resource, &args).await,
        Command::Branches { company } => branches(session, company.as_deref()).await,
        Command::ApproveTransfer {
            guest,
            company,
            current_branch,
            branch,
            room,
            notes,
        } => {
            let selection = TransferSelection::open(guest, company, current_branch);
            approve_transfer(session, selection, &branch, &room, notes).await
        }
        Command::RejectTransfer { guest, reason } => {
            notified(session.reject_transfer(&guest, reason).await)
        }
        Command::ApproveRemoval { guest, notes } => {
            notified(session.approve_removal(&guest, notes).await)
        }
        Command::RejectRemoval { guest, reason } => {
            notified(session.reject_removal(&guest, reason).await)
        }
        Command::ResolveIncident { id, status } => {
            let parsed = status.as_deref().and_then(ResolveStatus::parse);
            if let (Some(raw), None) = (&status, parsed) {
                bail!("Unknown status {:?}, expected Resolved or Closed", raw);
            }
            notified(session.resolve_incident(&id, parsed).await)
        }
        Command::Relocate {
            guest,
            name,
            branch,
            current_room,
            location,
            room,
        } => {
            let selection = RelocationSelection::new(branch, current_room);
            relocate(session, &guest, &name, selection, &location, &room).await
        }
        Command::UpdateRoom { id, file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read room file {}", file.display()))?;
            let room: Value = serde_json::from_str(&text)
                .with_context(|| format!("Room file {} is not valid JSON", file.display()))?;
            notified(session.update_room(&id, &room).await)
        }
        Command::SaveSignature {
            guest,
            role,
            data_url,
            file,
        } => {
            let url = signature_url(data_url, file)?;
            notified(session.save_signature(&guest, role.into(), &url).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::api::HttpMethod;
    use crate::session::test_support::session;
    use serde_json::json;

    #[test]
    fn test_parse_list_command() {
        let cli = Cli::try_parse_from([
            "dashboard", "list", "service-users", "--company", "c1", "--page", "2", "--from",
            "2024-01-01", "--to", "bad",
        ])
        .unwrap();
        let Command::List { resource, args } = cli.command else {
            panic!("expected list");
        };
        assert_eq!(resource, Resource::ServiceUsers);
        let filters = args.filters();
        assert_eq!(filters.page, Some(2));
        assert_eq!(filters.categories, vec![("company", "c1".to_string())]);
        assert!(filters.from.is_some());
        assert!(filters.to.is_none());
    }

    #[test]
    fn test_signature_needs_input() {
        assert!(signature_url(None, None).is_err());
        assert_eq!(signature_url(Some("data:x".into()), None).unwrap(), "data:x");
    }

    #[tokio::test]
    async fn test_list_meals_prints_stats() {
        let mock = MockTransport::new();
        mock.respond(
            "/meal-marking",
            Ok(json!({"data": [{
                "_id": "m1",
                "guestId": {"userId": {"fullName": "Jane Doe"}},
                "details": [{"meals": {"breakfast": {"taken": true}, "lunch": {"taken": true}}}]
            }]})),
        );
        let s = session(mock);
        let command = Command::List {
            resource: Resource::Meals,
            args: ListArgs::default(),
        };
        let out = run(&s, command).await.unwrap();
        assert!(out.starts_with("Residents: 1 | Breakfast: 1 | Lunch: 1 | Dinner: 0"));
        assert!(out.contains("Jane Doe"));
        assert!(out.contains("Page 1 / 1"));
    }

    #[tokio::test]
    async fn test_list_baskets_prints_choices() {
        let mock = MockTransport::new();
        mock.respond(
            "/su-basket",
            Ok(json!({"data": [
                {"_id": "k1", "status": "Requested", "branchId": {"name": "North"},
                 "guestId": {"userId": {"fullName": "Mira"}}},
                {"_id": "k2", "status": "In Progress", "branchId": {"name": "South"},
                 "guestId": {"userId": {"fullName": "Omar"}}}
            ]})),
        );
        let s = session(mock);
        let command = Command::List {
            resource: Resource::Baskets,
            args: ListArgs {
                status: Some("Requested".into()),
                ..ListArgs::default()
            },
        };
        let out = run(&s, command).await.unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "Branches: North, South | Statuses: all, Out Of Stock, Requested, In Progress"
        );
        assert_eq!(lines[1], "Filters: status=Requested");
        assert!(out.contains("Mira"));
        assert!(!out.contains("Omar"));
    }

    #[tokio::test]
    async fn test_resolve_rejects_unknown_status() {
        let s = session(MockTransport::new());
        let command = Command::ResolveIncident {
            id: "i1".into(),
            status: Some("Reopened".into()),
        };
        assert!(run(&s, command).await.is_err());
        assert!(s.transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_approve_transfer_flow() {
        let mock = MockTransport::new();
        mock.respond(
            "/branch/list/by-company?companyId=c1",
            Ok(json!({"branches": [{"_id": "b1"}, {"_id": "b2"}]})),
        );
        mock.respond(
            "/guest/rooms/capacity?capacity=1&kids=0&branchId=b2",
            Ok(json!({"success": true, "data": [{"id": "r5", "locationId": "l2"}]})),
        );
        let s = session(mock);
        let command = Command::ApproveTransfer {
            guest: "g1".into(),
            company: "c1".into(),
            current_branch: "b1".into(),
            branch: "b2".into(),
            room: "r5".into(),
            notes: None,
        };
        let out = run(&s, command).await.unwrap();
        assert!(out.starts_with("Transfer Approved"));
        let calls = s.transport.calls();
        let post = calls.last().unwrap();
        assert_eq!(post.method, HttpMethod::Post);
        assert_eq!(post.body["targetLocationId"], "l2");
    }

    #[tokio::test]
    async fn test_transfer_to_current_branch_refused() {
        let mock = MockTransport::new();
        mock.respond(
            "/branch/list/by-company?companyId=c1",
            Ok(json!({"branches": [{"_id": "b1"}, {"_id": "b2"}]})),
        );
        let s = session(mock);
        let command = Command::ApproveTransfer {
            guest: "g1".into(),
            company: "c1".into(),
            current_branch: "b1".into(),
            branch: "b1".into(),
            room: "r5".into(),
            notes: None,
        };
        assert!(run(&s, command).await.is_err());
        assert_eq!(s.transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_relocate_flow() {
        let mock = MockTransport::new();
        mock.respond(
            "/location",
            Ok(json!({"data": [{"_id": "l1", "branchId": "b1"}, {"_id": "l9", "branchId": "b9"}]})),
        );
        mock.respond(
            "/guest/rooms/capacity?capacity=1&kids=0&branchId=b1",
            Ok(json!({"data": [{"id": "r2", "locationId": "l1"}]})),
        );
        let s = session(mock);
        let command = Command::Relocate {
            guest: "g1".into(),
            name: "Jane".into(),
            branch: "b1".into(),
            current_room: Some("r1".into()),
            location: "l1".into(),
            room: "r2".into(),
        };
        let out = run(&s, command).await.unwrap();
        assert_eq!(out, "Success: Jane has been successfully relocated.\n");

        let wrong = Command::Relocate {
            guest: "g1".into(),
            name: "Jane".into(),
            branch: "b1".into(),
            current_room: None,
            location: "l9".into(),
            room: "r2".into(),
        };
        assert!(run(&s, wrong).await.is_err());
    }

    #[tokio::test]
    async fn test_branches_of_company() {
        let mock = MockTransport::new();
        mock.respond(
            "/company",
            Ok(json!({"data": [{"_id": "c1", "name": "Acme", "branches": [{"_id": "b1", "name": "North"}]}]})),
        );
        let s = session(mock);
        let out = run(&s, Command::Branches { company: Some("c1".into()) }).await.unwrap();
        assert_eq!(out, "b1  North\n");
        let none = run(&s, Command::Branches { company: Some("c2".into()) }).await.unwrap();
        assert_eq!(none, "No records found.\n");
    }
}
