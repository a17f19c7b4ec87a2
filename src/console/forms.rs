//! Prompted input flows.
//!
//! All validation of user input happens here, before the store is invoked:
//! required text fields must be non-empty, calendar dates must parse. The
//! store itself never re-validates. A failed form aborts cleanly (`Ok(None)`)
//! without touching the store.

use crate::error_handling::types::ConsoleError;
use crate::mission_management::types::{
    FindingDraft, FindingType, MissionDraft, MissionStatus, MissionType, SanctionDraft,
    SanctionType,
};
use chrono::{NaiveDate, Utc};
use std::io::{BufRead, Write};

/// Lenient parse of a monetary amount: anything that is not a non-negative
/// number means "no amount provided". Never an error.
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim().replace(' ', "");
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value >= 0.0 && value.is_finite() => Some(value),
        _ => None,
    }
}

/// Lenient parse of a day count (finding correction delay).
pub fn parse_delay(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok()
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String, ConsoleError> {
    write!(output, "{}: ", label)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn required<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>, ConsoleError> {
    let value = prompt_line(input, output, label)?;
    if value.is_empty() {
        writeln!(output, "Champ obligatoire manquant: {}", label)?;
        return Ok(None);
    }
    Ok(Some(value))
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn date_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<NaiveDate>, ConsoleError> {
    let value = prompt_line(input, output, label)?;
    match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        Ok(date) => Ok(Some(date)),
        Err(_) => {
            writeln!(output, "Date invalide (format attendu: AAAA-MM-JJ): {}", value)?;
            Ok(None)
        }
    }
}

fn date_field_or_today<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<NaiveDate, ConsoleError> {
    let value = prompt_line(input, output, label)?;
    if value.is_empty() {
        return Ok(Utc::now().date_naive());
    }
    match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => {
            writeln!(output, "Date invalide, date du jour utilisée")?;
            Ok(Utc::now().date_naive())
        }
    }
}

/// Reads a full mission creation form. Returns `Ok(None)` when a required
/// field is missing or a date does not parse.
pub fn read_mission_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<MissionDraft>, ConsoleError> {
    let Some(reference) = required(input, output, "Référence")? else {
        return Ok(None);
    };
    let Some(title) = required(input, output, "Titre")? else {
        return Ok(None);
    };
    let Some(description) = required(input, output, "Description")? else {
        return Ok(None);
    };

    let type_value = prompt_line(input, output, "Type (place/pièces/ligne)")?;
    let mission_type = match MissionType::parse(&type_value) {
        Some(t) => t,
        None => {
            writeln!(output, "Type de mission inconnu: {}", type_value)?;
            return Ok(None);
        }
    };

    let Some(organization) = required(input, output, "Organisme")? else {
        return Ok(None);
    };
    let Some(address) = required(input, output, "Adresse")? else {
        return Ok(None);
    };
    let Some(start_date) = date_field(input, output, "Date de début (AAAA-MM-JJ)")? else {
        return Ok(None);
    };
    let Some(end_date) = date_field(input, output, "Date de fin (AAAA-MM-JJ)")? else {
        return Ok(None);
    };
    let Some(control_rationale) = required(input, output, "Motif du contrôle")? else {
        return Ok(None);
    };

    let decision_number = optional(prompt_line(input, output, "Numéro de décision (optionnel)")?);
    let decision_date = match optional(prompt_line(input, output, "Date de décision (optionnel)")?) {
        Some(value) => match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                writeln!(output, "Date de décision ignorée (format invalide)")?;
                None
            }
        },
        None => None,
    };

    let team_value = prompt_line(input, output, "Équipe (noms séparés par ',')")?;
    let team_members: Vec<String> = team_value
        .split(',')
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect();

    let objectives_value = prompt_line(input, output, "Objectifs (séparés par ';')")?;
    let objectives: Vec<String> = objectives_value
        .split(';')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();

    Ok(Some(MissionDraft {
        reference,
        title,
        description,
        mission_type,
        organization,
        address,
        start_date,
        end_date,
        status: MissionStatus::Planned,
        control_rationale,
        decision_number,
        decision_date,
        team_members,
        objectives,
    }))
}

/// Reads a remark; an empty remark is rejected without touching the store.
pub fn read_remark<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>, ConsoleError> {
    let content = prompt_line(input, output, "Nouvelle remarque")?;
    if content.is_empty() {
        writeln!(output, "Remarque vide ignorée")?;
        return Ok(None);
    }
    Ok(Some(content))
}

/// Reads a sanction form. The amount is optional and parsed leniently.
pub fn read_sanction_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<SanctionDraft>, ConsoleError> {
    let type_value = prompt_line(
        input,
        output,
        "Type (AVERTISSEMENT/MISE_EN_DEMEURE/AMENDE/INJONCTION/RESTRICTION_TRAITEMENT)",
    )?;
    let sanction_type = if type_value.is_empty() {
        SanctionType::Warning
    } else {
        match SanctionType::parse(&type_value) {
            Some(t) => t,
            None => {
                writeln!(output, "Type de sanction inconnu: {}", type_value)?;
                return Ok(None);
            }
        }
    };

    let Some(description) = required(input, output, "Description")? else {
        return Ok(None);
    };
    let amount = parse_amount(&prompt_line(input, output, "Montant FCFA (optionnel)")?);
    let decision_date =
        date_field_or_today(input, output, "Date de décision (défaut: aujourd'hui)")?;

    Ok(Some(SanctionDraft {
        sanction_type,
        description,
        amount,
        decision_date,
    }))
}

/// Reads a finding form.
pub fn read_finding_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<FindingDraft>, ConsoleError> {
    let type_value = prompt_line(
        input,
        output,
        "Type (MAJEURE/MINEURE/OBSERVATION/CONFORME)",
    )?;
    let finding_type = match FindingType::parse(&type_value) {
        Some(t) => t,
        None => {
            writeln!(output, "Type de manquement inconnu: {}", type_value)?;
            return Ok(None);
        }
    };

    let Some(description) = required(input, output, "Description")? else {
        return Ok(None);
    };
    let legal_reference = optional(prompt_line(input, output, "Référence légale (optionnel)")?);
    let recommendation = optional(prompt_line(input, output, "Recommandation (optionnel)")?);
    let correction_delay_days =
        parse_delay(&prompt_line(input, output, "Délai de correction en jours (optionnel)")?);
    let observed_on = date_field_or_today(input, output, "Date du constat (défaut: aujourd'hui)")?;

    Ok(Some(FindingDraft {
        finding_type,
        description,
        legal_reference,
        recommendation,
        correction_delay_days,
        observed_on,
    }))
}
