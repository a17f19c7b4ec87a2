//! Textual rendering of the console views.
//!
//! Renderers only read: they take the store's state (or an already selected
//! sequence) plus derived views and write text. No store mutation happens
//! here.

use crate::configuration::types::Locale;
use crate::error_handling::types::ConsoleError;
use crate::mission_management::types::{Mission, MissionStatus};
use crate::query::types::{MissionQuery, SortDirection, SortField, StatusFilter};
use crate::reporting;
use std::io::Write;

fn short_id(mission: &Mission) -> String {
    mission.id.to_string()[..8].to_string()
}

fn long_date(mission_date: chrono::NaiveDate, locale: Locale) -> String {
    mission_date
        .format_localized("%-d %B %Y", locale.chrono_locale())
        .to_string()
}

fn section(output: &mut impl Write, title: &str) -> Result<(), ConsoleError> {
    writeln!(output)?;
    writeln!(output, "=== {} ===", title)?;
    Ok(())
}

/// Clamps a page index to the collection and returns the slice bounds plus
/// the page actually shown and the page count.
fn page_bounds(total: usize, page: usize, page_size: usize) -> (usize, usize, usize, usize) {
    let pages = total.div_ceil(page_size).max(1);
    let page = page.min(pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total);
    (start, end, page, pages)
}

fn page_footer(
    output: &mut impl Write,
    total: usize,
    page: usize,
    pages: usize,
) -> Result<(), ConsoleError> {
    writeln!(output)?;
    write!(output, "Page {}/{} — {} mission(s)", page + 1, pages, total)?;
    if pages > 1 {
        write!(output, " (page <n> pour naviguer)")?;
    }
    writeln!(output)?;
    Ok(())
}

/// Dashboard: status counters plus missions grouped by month.
pub fn render_dashboard(
    output: &mut impl Write,
    missions: &[Mission],
    locale: Locale,
) -> Result<(), ConsoleError> {
    section(output, "Tableau de bord")?;
    writeln!(output, "Vue d'ensemble des missions de contrôle")?;
    writeln!(output)?;

    let breakdown = reporting::status_breakdown(missions);
    writeln!(output, "Total des missions : {}", breakdown.total())?;
    writeln!(output, "En cours           : {}", breakdown.in_progress)?;
    writeln!(output, "Planifiées         : {}", breakdown.planned)?;
    writeln!(output, "Terminées          : {}", breakdown.completed)?;
    writeln!(output, "Annulées           : {}", breakdown.cancelled)?;

    for group in reporting::missions_by_month(missions, locale.chrono_locale()) {
        writeln!(output)?;
        writeln!(output, "--- {} ---", group.label)?;
        for mission in &group.missions {
            writeln!(
                output,
                "  [{}] {} — {} ({})",
                mission.status.label(),
                mission.title,
                mission.organization,
                mission.mission_type.label()
            )?;
            writeln!(
                output,
                "      Du {} au {}",
                long_date(mission.start_date, locale),
                long_date(mission.end_date, locale)
            )?;
        }
    }
    Ok(())
}

/// Mission list: one block per mission with its children counts, paginated.
pub fn render_mission_list(
    output: &mut impl Write,
    missions: &[Mission],
    locale: Locale,
    page: usize,
    page_size: usize,
) -> Result<(), ConsoleError> {
    section(output, "Missions de contrôle")?;
    writeln!(
        output,
        "Gérez et suivez toutes vos missions de contrôle de protection des données"
    )?;

    if missions.is_empty() {
        writeln!(output)?;
        writeln!(output, "Aucune mission")?;
        return Ok(());
    }

    let (start, end, page, pages) = page_bounds(missions.len(), page, page_size);
    for mission in &missions[start..end] {
        writeln!(output)?;
        writeln!(
            output,
            "[{}] {} — {}",
            short_id(mission),
            mission.organization,
            mission.title
        )?;
        writeln!(output, "    Statut    : {}", mission.status.label())?;
        writeln!(
            output,
            "    Début     : {}",
            long_date(mission.start_date, locale)
        )?;
        writeln!(output, "    Adresse   : {}", mission.address)?;
        writeln!(output, "    Équipe    : {}", mission.team_members.join(", "))?;
        if !mission.findings.is_empty() {
            writeln!(output, "    {} manquement(s)", mission.findings.len())?;
        }
        if !mission.remarks.is_empty() {
            writeln!(output, "    {} remarque(s)", mission.remarks.len())?;
        }
        if !mission.sanctions.is_empty() {
            writeln!(output, "    {} sanction(s)", mission.sanctions.len())?;
        }
    }
    page_footer(output, missions.len(), page, pages)?;
    Ok(())
}

fn describe_query(query: &MissionQuery) -> String {
    let status = match query.status {
        StatusFilter::All => "tous les statuts".to_string(),
        StatusFilter::Only(s) => s.label().to_string(),
    };
    let sort = match (query.sort_field, query.direction) {
        (SortField::StartDate, SortDirection::Descending) => "plus récent",
        (SortField::StartDate, SortDirection::Ascending) => "plus ancien",
        (SortField::Title, SortDirection::Ascending) => "titre A-Z",
        (SortField::Title, SortDirection::Descending) => "titre Z-A",
    };
    if query.search.trim().is_empty() {
        format!("{}, tri: {}", status, sort)
    } else {
        format!("{}, tri: {}, recherche: \"{}\"", status, sort, query.search.trim())
    }
}

/// Combined missions/sanctions view over an already selected sequence,
/// paginated.
pub fn render_missions_sanctions(
    output: &mut impl Write,
    selected: &[Mission],
    query: &MissionQuery,
    page: usize,
    page_size: usize,
) -> Result<(), ConsoleError> {
    section(output, "Missions et Sanctions")?;
    writeln!(output, "Liste des missions et leurs sanctions associées")?;
    writeln!(output, "Critères : {}", describe_query(query))?;

    if selected.is_empty() {
        writeln!(output)?;
        writeln!(output, "Aucune mission ne correspond à vos critères")?;
        return Ok(());
    }

    let (start, end, page, pages) = page_bounds(selected.len(), page, page_size);
    for mission in &selected[start..end] {
        writeln!(output)?;
        writeln!(output, "[{}] {}", short_id(mission), mission.title)?;
        writeln!(output, "    {}", mission.description)?;
        writeln!(output, "    Statut : {}", mission.status.label())?;
        if mission.sanctions.is_empty() {
            writeln!(output, "    Aucune sanction")?;
        } else {
            for sanction in &mission.sanctions {
                writeln!(
                    output,
                    "    - {} : {} ({})",
                    sanction.sanction_type.label(),
                    sanction.description,
                    sanction.decision_date.format("%d/%m/%Y")
                )?;
                if let Some(amount) = sanction.amount {
                    writeln!(output, "      Montant : {:.0} FCFA", amount)?;
                }
            }
        }
    }
    page_footer(output, selected.len(), page, pages)?;
    Ok(())
}

/// Statistics view: status breakdown plus sanction and finding totals.
pub fn render_statistics(
    output: &mut impl Write,
    missions: &[Mission],
) -> Result<(), ConsoleError> {
    section(output, "Statistiques")?;

    let breakdown = reporting::status_breakdown(missions);
    writeln!(output, "Missions par statut :")?;
    for status in MissionStatus::ALL {
        writeln!(
            output,
            "  {:<12} {}",
            status.label(),
            breakdown.count_for(status)
        )?;
    }
    writeln!(output, "  {:<12} {}", "Total", breakdown.total())?;

    let sanction_count: usize = missions.iter().map(|m| m.sanctions.len()).sum();
    let finding_count: usize = missions.iter().map(|m| m.findings.len()).sum();
    let remark_count: usize = missions.iter().map(|m| m.remarks.len()).sum();
    let fines_total: f64 = missions
        .iter()
        .flat_map(|m| &m.sanctions)
        .filter_map(|s| s.amount)
        .sum();

    writeln!(output)?;
    writeln!(output, "Sanctions prononcées : {}", sanction_count)?;
    writeln!(output, "Manquements constatés : {}", finding_count)?;
    writeln!(output, "Remarques : {}", remark_count)?;
    writeln!(output, "Montant total des amendes : {:.0} FCFA", fines_total)?;
    Ok(())
}

/// Details of one mission with all its children.
pub fn render_mission_details(
    output: &mut impl Write,
    mission: &Mission,
    locale: Locale,
) -> Result<(), ConsoleError> {
    section(output, &mission.title)?;
    writeln!(output, "Référence : {}", mission.reference)?;
    writeln!(output, "Organisme : {}", mission.organization)?;
    writeln!(output, "Type      : {}", mission.mission_type.label())?;
    writeln!(output, "Statut    : {}", mission.status.label())?;
    writeln!(
        output,
        "Période   : du {} au {}",
        long_date(mission.start_date, locale),
        long_date(mission.end_date, locale)
    )?;
    writeln!(output, "Motif     : {}", mission.control_rationale)?;
    if let Some(number) = &mission.decision_number {
        writeln!(output, "Décision  : {}", number)?;
    }
    if !mission.objectives.is_empty() {
        writeln!(output, "Objectifs :")?;
        for objective in &mission.objectives {
            writeln!(output, "  - {}", objective)?;
        }
    }

    writeln!(output, "Manquements ({}) :", mission.findings.len())?;
    for finding in &mission.findings {
        writeln!(
            output,
            "  - {} : {}",
            finding.finding_type.label(),
            finding.description
        )?;
        if let Some(reference) = &finding.legal_reference {
            writeln!(output, "    Référence légale : {}", reference)?;
        }
        if let Some(delay) = finding.correction_delay_days {
            writeln!(output, "    Délai de correction : {} jours", delay)?;
        }
    }

    writeln!(output, "Remarques ({}) :", mission.remarks.len())?;
    for remark in &mission.remarks {
        writeln!(output, "  - {}", remark.content)?;
    }

    writeln!(output, "Sanctions ({}) :", mission.sanctions.len())?;
    for sanction in &mission.sanctions {
        writeln!(
            output,
            "  - {} : {}",
            sanction.sanction_type.label(),
            sanction.description
        )?;
        if let Some(amount) = sanction.amount {
            writeln!(output, "    Montant : {:.0} FCFA", amount)?;
        }
    }
    Ok(())
}

pub fn render_help(output: &mut impl Write) -> Result<(), ConsoleError> {
    section(output, "Commandes")?;
    writeln!(output, "  dashboard | missions | new | sanctions | stats")?;
    writeln!(output, "  details <id>            afficher une mission")?;
    writeln!(output, "  status <id> <STATUT>    changer le statut")?;
    writeln!(output, "  delete <id>             supprimer une mission")?;
    writeln!(output, "  remark <id>             ajouter une remarque")?;
    writeln!(output, "  sanction <id>           ajouter une sanction")?;
    writeln!(output, "  finding <id>            ajouter un manquement")?;
    writeln!(output, "  filter <STATUT|all>     filtrer la vue sanctions")?;
    writeln!(output, "  search <terme>          rechercher (vide: effacer)")?;
    writeln!(output, "  sort <date|titre> <asc|desc>")?;
    writeln!(output, "  page <n>                changer de page")?;
    writeln!(output, "  help | quit")?;
    Ok(())
}
