use crate::configuration::config::Config;
use crate::console::{forms, render};
use crate::error_handling::types::{ConsoleError, StoreError};
use crate::mission_management::mission_store::MissionStore;
use crate::mission_management::types::{MissionStatus, MissionUpdate};
use crate::query::pipeline::select;
use crate::query::types::{MissionQuery, SortDirection, SortField, StatusFilter};
use log::{debug, info, warn};
use std::io::{BufRead, Write};
use uuid::Uuid;

/// The persistent views of the console. The creation form is not one of
/// them: `new` runs the form to completion and lands on the mission list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Missions,
    MissionsSanctions,
    Statistics,
}

impl View {
    pub fn parse(input: &str) -> Option<View> {
        match input {
            "dashboard" | "tableau" => Some(View::Dashboard),
            "missions" | "liste" => Some(View::Missions),
            "sanctions" => Some(View::MissionsSanctions),
            "stats" | "statistics" | "statistiques" => Some(View::Statistics),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

/// The structure driving one console session.
///
/// The console owns the store for the lifetime of the session: it reads
/// commands line by line, runs each one to completion against the store, and
/// re-renders the active view whenever store state or query criteria change.
///
/// # Fields Overview
///
/// - `store`: the mission collection, sole owner of all mutable state
/// - `config`: display locale and list settings
/// - `query`: current criteria of the missions/sanctions view
/// - `view`: the view rendered on the next refresh
/// - `page`: current page of the list views, reset on any criteria change
pub struct Console {
    store: MissionStore,
    config: Config,
    query: MissionQuery,
    view: View,
    page: usize,
}

impl Console {
    pub fn new(store: MissionStore, config: Config) -> Self {
        Self {
            store,
            config,
            query: MissionQuery::default(),
            view: View::Dashboard,
            page: 0,
        }
    }

    pub fn store(&self) -> &MissionStore {
        &self.store
    }

    /// Runs the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), ConsoleError> {
        info!("console session started with {} mission(s)", self.store.len());
        let mut dirty = true;

        loop {
            if dirty {
                self.render(output)?;
                dirty = false;
            }

            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input, leaving console");
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.dispatch(line, input, output, &mut dirty)? {
                Flow::Continue => {}
                Flow::Quit => break,
            }
        }

        info!("console session ended with {} mission(s)", self.store.len());
        Ok(())
    }

    fn render<W: Write>(&self, output: &mut W) -> Result<(), ConsoleError> {
        match self.view {
            View::Dashboard => {
                render::render_dashboard(output, self.store.missions(), self.config.locale)
            }
            View::Missions => render::render_mission_list(
                output,
                self.store.missions(),
                self.config.locale,
                self.page,
                self.config.page_size,
            ),
            View::MissionsSanctions => {
                let selected = select(self.store.missions(), &self.query);
                render::render_missions_sanctions(
                    output,
                    &selected,
                    &self.query,
                    self.page,
                    self.config.page_size,
                )
            }
            View::Statistics => render::render_statistics(output, self.store.missions()),
        }
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        output: &mut W,
        dirty: &mut bool,
    ) -> Result<Flow, ConsoleError> {
        let mut parts = line.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default().to_lowercase();
        let rest = parts.next().unwrap_or("").trim();

        match command.as_str() {
            "quit" | "exit" | "q" => return Ok(Flow::Quit),
            "help" | "?" => render::render_help(output)?,
            "new" | "nouvelle" => {
                writeln!(output)?;
                writeln!(output, "=== Nouvelle mission ===")?;
                if let Some(draft) = forms::read_mission_form(input, output)? {
                    let mission = self.store.create_mission(draft);
                    writeln!(
                        output,
                        "Mission créée : {} [{}]",
                        mission.reference,
                        &mission.id.to_string()[..8]
                    )?;
                    self.view = View::Missions;
                    self.page = 0;
                    *dirty = true;
                }
            }
            "details" | "detail" => {
                if let Some(id) = self.resolve_mission(rest, output)? {
                    // resolve_mission guarantees presence
                    if let Some(mission) = self.store.get(id) {
                        render::render_mission_details(output, mission, self.config.locale)?;
                    }
                }
            }
            "status" | "statut" => {
                let mut args = rest.split_whitespace();
                let id_part = args.next().unwrap_or("");
                let status_part = args.next().unwrap_or("");
                match MissionStatus::parse(status_part) {
                    None => writeln!(output, "Statut inconnu : {}", status_part)?,
                    Some(status) => {
                        if let Some(id) = self.resolve_mission(id_part, output)? {
                            let update = MissionUpdate {
                                status: Some(status),
                                ..Default::default()
                            };
                            match self.store.update_mission(id, update) {
                                Ok(mission) => {
                                    writeln!(
                                        output,
                                        "Statut de {} : {}",
                                        mission.reference,
                                        mission.status.label()
                                    )?;
                                    *dirty = true;
                                }
                                Err(e) => self.report_store_error(output, e)?,
                            }
                        }
                    }
                }
            }
            "delete" | "supprimer" => {
                if let Some(id) = self.resolve_mission(rest, output)? {
                    match self.store.delete_mission(id) {
                        Ok(removed) => {
                            writeln!(output, "Mission supprimée : {}", removed.reference)?;
                            *dirty = true;
                        }
                        Err(e) => self.report_store_error(output, e)?,
                    }
                }
            }
            "remark" | "remarque" => {
                if let Some(id) = self.resolve_mission(rest, output)? {
                    if let Some(content) = forms::read_remark(input, output)? {
                        match self.store.append_remark(id, content) {
                            Ok(_) => {
                                writeln!(output, "Remarque ajoutée")?;
                                *dirty = true;
                            }
                            Err(e) => self.report_store_error(output, e)?,
                        }
                    }
                }
            }
            "sanction" => {
                if let Some(id) = self.resolve_mission(rest, output)? {
                    if let Some(draft) = forms::read_sanction_form(input, output)? {
                        match self.store.append_sanction(id, draft) {
                            Ok(sanction) => {
                                writeln!(
                                    output,
                                    "Sanction ajoutée : {}",
                                    sanction.sanction_type.label()
                                )?;
                                *dirty = true;
                            }
                            Err(e) => self.report_store_error(output, e)?,
                        }
                    }
                }
            }
            "finding" | "manquement" => {
                if let Some(id) = self.resolve_mission(rest, output)? {
                    if let Some(draft) = forms::read_finding_form(input, output)? {
                        match self.store.append_finding(id, draft) {
                            Ok(finding) => {
                                writeln!(
                                    output,
                                    "Manquement ajouté : {}",
                                    finding.finding_type.label()
                                )?;
                                *dirty = true;
                            }
                            Err(e) => self.report_store_error(output, e)?,
                        }
                    }
                }
            }
            "filter" | "filtre" => {
                if rest.is_empty() || rest.eq_ignore_ascii_case("all") {
                    self.query.status = StatusFilter::All;
                    self.view = View::MissionsSanctions;
                    self.page = 0;
                    *dirty = true;
                } else {
                    match MissionStatus::parse(rest) {
                        Some(status) => {
                            self.query.status = StatusFilter::Only(status);
                            self.view = View::MissionsSanctions;
                            self.page = 0;
                            *dirty = true;
                        }
                        None => writeln!(output, "Statut inconnu : {}", rest)?,
                    }
                }
            }
            "search" | "recherche" => {
                self.query.search = rest.to_string();
                self.view = View::MissionsSanctions;
                self.page = 0;
                *dirty = true;
            }
            "sort" | "tri" => {
                let mut args = rest.split_whitespace();
                let field = match args.next().unwrap_or("") {
                    "date" => Some(SortField::StartDate),
                    "titre" | "title" => Some(SortField::Title),
                    other => {
                        writeln!(output, "Champ de tri inconnu : {}", other)?;
                        None
                    }
                };
                if let Some(field) = field {
                    let direction = match args.next().unwrap_or("asc") {
                        "desc" => SortDirection::Descending,
                        _ => SortDirection::Ascending,
                    };
                    self.query.sort_field = field;
                    self.query.direction = direction;
                    self.view = View::MissionsSanctions;
                    self.page = 0;
                    *dirty = true;
                }
            }
            "page" => match rest.parse::<usize>() {
                Ok(number) if number >= 1 => {
                    // Out-of-range pages are clamped to the last one when
                    // the view renders.
                    self.page = number - 1;
                    *dirty = true;
                }
                _ => writeln!(output, "Numéro de page invalide : {}", rest)?,
            },
            other => match View::parse(other) {
                Some(view) => {
                    self.view = view;
                    self.page = 0;
                    *dirty = true;
                }
                None => {
                    warn!("unknown command: {}", other);
                    writeln!(output, "Commande inconnue : {} (help pour l'aide)", other)?;
                }
            },
        }

        Ok(Flow::Continue)
    }

    fn report_store_error<W: Write>(
        &self,
        output: &mut W,
        error: StoreError,
    ) -> Result<(), ConsoleError> {
        // Store errors are never fatal for the session
        match error {
            StoreError::MissionNotFound(id) => {
                writeln!(output, "Mission introuvable : {}", id)?;
            }
        }
        Ok(())
    }

    /// Resolves a user-typed identifier: a full UUID or an unambiguous
    /// prefix of one. Prints a message and returns `None` when nothing (or
    /// more than one mission) matches.
    fn resolve_mission<W: Write>(
        &self,
        input: &str,
        output: &mut W,
    ) -> Result<Option<Uuid>, ConsoleError> {
        let wanted = input.trim();
        if wanted.is_empty() {
            writeln!(output, "Identifiant de mission requis")?;
            return Ok(None);
        }

        if let Ok(id) = Uuid::parse_str(wanted) {
            if self.store.get(id).is_some() {
                return Ok(Some(id));
            }
            writeln!(output, "Mission introuvable : {}", wanted)?;
            return Ok(None);
        }

        let needle = wanted.to_lowercase();
        let matches: Vec<Uuid> = self
            .store
            .missions()
            .iter()
            .filter(|m| m.id.to_string().starts_with(&needle))
            .map(|m| m.id)
            .collect();

        match matches.as_slice() {
            [id] => Ok(Some(*id)),
            [] => {
                writeln!(output, "Mission introuvable : {}", wanted)?;
                Ok(None)
            }
            _ => {
                writeln!(output, "Identifiant ambigu : {}", wanted)?;
                Ok(None)
            }
        }
    }
}
