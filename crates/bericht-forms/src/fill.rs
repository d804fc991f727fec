//! Template-schema-driven field writing.

use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use bericht_files::atomic_swap;
use bericht_model::Gender;
use bericht_standards::{FieldRole, TemplateKind, field_schema};

use crate::error::FormError;
use crate::pdf::PdfForm;

/// A fillable document: named fields, text and on/off writes, and
/// persistence to a path.
pub trait FormDocument {
    fn field_names(&self) -> Vec<String>;
    fn set_text(&mut self, name: &str, value: &str) -> Result<(), FormError>;
    /// Sets one half of a radio pair to "On"/"Off".
    fn set_state(&mut self, name: &str, on: bool) -> Result<(), FormError>;
    fn save(&mut self, path: &Path) -> Result<(), FormError>;
}

/// The values a template draws its fields from.
#[derive(Debug, Clone)]
pub struct FormValues {
    /// "First Last" display name.
    pub kid: String,
    pub group: String,
    /// dd.MM.yyyy, may be empty when the sheet had no birth date.
    pub birth_date: String,
    pub gender: Gender,
    /// Written into date fields as dd.MM.yyyy.
    pub today: NaiveDate,
}

impl FormValues {
    /// Values dated with the current day.
    pub fn dated_today(kid: String, group: String, birth_date: String, gender: Gender) -> Self {
        Self {
            kid,
            group,
            birth_date,
            gender,
            today: Local::now().date_naive(),
        }
    }
}

/// Writes the field set of `kind` into `doc`.
///
/// Every schema field must exist in the document; validation runs before
/// the first write so a half-filled document never hits disk. Returns
/// warnings for fields that were deliberately left untouched.
pub fn fill(
    doc: &mut dyn FormDocument,
    kind: TemplateKind,
    values: &FormValues,
) -> Result<Vec<String>, FormError> {
    let present = doc.field_names();
    if present.is_empty() {
        return Err(FormError::NoFormFields);
    }
    let schema = field_schema(kind);
    for spec in schema {
        if !present.iter().any(|name| name == spec.name) {
            return Err(FormError::FieldMissing {
                name: spec.name.to_string(),
            });
        }
    }

    let today = values.today.format("%d.%m.%Y").to_string();
    let mut warnings = Vec::new();

    for spec in schema {
        match spec.role {
            FieldRole::KidName => doc.set_text(spec.name, &values.kid)?,
            FieldRole::Group => doc.set_text(spec.name, &values.group)?,
            FieldRole::BirthDate => doc.set_text(spec.name, &values.birth_date)?,
            FieldRole::Today => doc.set_text(spec.name, &today)?,
            FieldRole::GenderMale | FieldRole::GenderFemale => {
                if values.gender == Gender::Unknown {
                    // Exactly one half must end up "On"; without a known
                    // gender the pair stays untouched.
                    if spec.role == FieldRole::GenderMale {
                        warn!(?kind, "gender unknown, radio pair left unset");
                        warnings.push(
                            "Das Geschlecht ist nicht hinterlegt; die Auswahl im Protokollbogen bleibt leer."
                                .to_string(),
                        );
                    }
                    continue;
                }
                let on = match spec.role {
                    FieldRole::GenderMale => values.gender == Gender::Male,
                    _ => values.gender == Gender::Female,
                };
                doc.set_state(spec.name, on)?;
            }
        }
    }

    Ok(warnings)
}

/// Fills a PDF in place: load, write fields, save to a temp sibling, and
/// swap atomically. On any failure after the temp write the temp file is
/// cleaned up and the original stays complete.
pub fn fill_pdf_file(
    path: &Path,
    kind: TemplateKind,
    values: &FormValues,
) -> Result<Vec<String>, FormError> {
    let mut doc = PdfForm::load(path)?;
    let warnings = fill(&mut doc, kind, values)?;

    let temp = temp_sibling(path);
    if let Err(e) = doc.save(&temp) {
        let _ = std::fs::remove_file(&temp);
        return Err(e);
    }
    atomic_swap(path, &temp)?;
    info!(path = %path.display(), ?kind, "form filled");
    Ok(warnings)
}

fn temp_sibling(path: &Path) -> std::path::PathBuf {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("dokument");
    path.with_file_name(format!("{name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::{FormDocument, FormValues, fill};
    use crate::error::FormError;
    use bericht_model::Gender;
    use bericht_standards::TemplateKind;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use std::path::Path;

    /// In-memory double recording every write.
    #[derive(Default)]
    struct MemoryForm {
        names: Vec<String>,
        texts: BTreeMap<String, String>,
        states: BTreeMap<String, bool>,
    }

    impl MemoryForm {
        fn with_fields(names: &[&str]) -> Self {
            Self {
                names: names.iter().map(|n| (*n).to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl FormDocument for MemoryForm {
        fn field_names(&self) -> Vec<String> {
            self.names.clone()
        }

        fn set_text(&mut self, name: &str, value: &str) -> Result<(), FormError> {
            self.texts.insert(name.to_string(), value.to_string());
            Ok(())
        }

        fn set_state(&mut self, name: &str, on: bool) -> Result<(), FormError> {
            self.states.insert(name.to_string(), on);
            Ok(())
        }

        fn save(&mut self, _path: &Path) -> Result<(), FormError> {
            Ok(())
        }
    }

    fn values(gender: Gender) -> FormValues {
        FormValues {
            kid: "Anna Müller".to_string(),
            group: "Bären".to_string(),
            birth_date: "14.05.2022".to_string(),
            gender,
            today: NaiveDate::from_ymd_opt(2026, 1, 15).expect("date"),
        }
    }

    const PROTOKOLL_FIELDS: &[&str] =
        &["Name_Kind", "Gruppe", "Geburtsdatum", "Datum", "Junge", "Maedchen"];

    #[test]
    fn fills_protokollbogen_with_male_radio() {
        let mut doc = MemoryForm::with_fields(PROTOKOLL_FIELDS);
        let warnings = fill(&mut doc, TemplateKind::Protokollbogen, &values(Gender::Male))
            .expect("fill");
        assert!(warnings.is_empty());
        assert_eq!(doc.texts.get("Name_Kind").map(String::as_str), Some("Anna Müller"));
        assert_eq!(doc.texts.get("Gruppe").map(String::as_str), Some("Bären"));
        assert_eq!(
            doc.texts.get("Geburtsdatum").map(String::as_str),
            Some("14.05.2022")
        );
        assert_eq!(doc.texts.get("Datum").map(String::as_str), Some("15.01.2026"));
        assert_eq!(doc.states.get("Junge"), Some(&true));
        assert_eq!(doc.states.get("Maedchen"), Some(&false));
    }

    #[test]
    fn female_flips_the_radio_pair() {
        let mut doc = MemoryForm::with_fields(PROTOKOLL_FIELDS);
        fill(&mut doc, TemplateKind::Protokollbogen, &values(Gender::Female)).expect("fill");
        assert_eq!(doc.states.get("Junge"), Some(&false));
        assert_eq!(doc.states.get("Maedchen"), Some(&true));
    }

    #[test]
    fn unknown_gender_leaves_the_pair_unset_with_a_warning() {
        let mut doc = MemoryForm::with_fields(PROTOKOLL_FIELDS);
        let warnings = fill(
            &mut doc,
            TemplateKind::Protokollbogen,
            &values(Gender::Unknown),
        )
        .expect("fill");
        assert_eq!(warnings.len(), 1);
        assert!(doc.states.is_empty());
        // Text fields are still written.
        assert_eq!(doc.texts.len(), 4);
    }

    #[test]
    fn allgemein_writes_its_four_fields() {
        let mut doc =
            MemoryForm::with_fields(&["Name_Kind", "Gruppe", "Geburtsdatum", "Datum", "Extra"]);
        fill(
            &mut doc,
            TemplateKind::AllgemeinerEntwicklungsbericht,
            &values(Gender::Male),
        )
        .expect("fill");
        assert_eq!(doc.texts.len(), 4);
        assert!(!doc.texts.contains_key("Extra"));
    }

    #[test]
    fn empty_document_reports_no_form_fields() {
        let mut doc = MemoryForm::default();
        let error = fill(
            &mut doc,
            TemplateKind::ProtokollElterngespraech,
            &values(Gender::Male),
        )
        .expect_err("no fields");
        assert!(matches!(error, FormError::NoFormFields));
    }

    #[test]
    fn missing_schema_field_fails_before_any_write() {
        let mut doc = MemoryForm::with_fields(&["Name_Kind"]);
        let error = fill(
            &mut doc,
            TemplateKind::ProtokollElterngespraech,
            &values(Gender::Male),
        )
        .expect_err("missing Datum");
        assert!(matches!(error, FormError::FieldMissing { ref name } if name == "Datum"));
        assert!(doc.texts.is_empty());
    }
}
