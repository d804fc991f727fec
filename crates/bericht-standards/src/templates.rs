//! Template registry: the document kinds the pipeline produces and the
//! named form fields each one carries.
//!
//! The field lists are data, not code: the filler walks the schema and
//! dispatches on [`FieldRole`], and validates every schema name against
//! the fields actually present in the document before writing.

/// The five document kinds with a fixed field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Age-banded assessment form, selected by the band resolver.
    Protokollbogen,
    AllgemeinerEntwicklungsbericht,
    VorschulEntwicklungsbericht,
    ProtokollElterngespraech,
    KrippeUebergangsbericht,
}

impl TemplateKind {
    /// Source file name of the fixed general-purpose templates under
    /// `<home>/Entwicklungsboegen/`. The Protokollbogen source lives in a
    /// band-specific directory instead, see `AgeBand::template_file_name`.
    pub fn source_file_name(self) -> Option<&'static str> {
        match self {
            Self::Protokollbogen => None,
            Self::AllgemeinerEntwicklungsbericht => Some("Allgemeiner-Entwicklungsbericht.pdf"),
            Self::VorschulEntwicklungsbericht => Some("Vorschul-Entwicklungsbericht.pdf"),
            Self::ProtokollElterngespraech => Some("Protokoll-Elterngespraech.pdf"),
            Self::KrippeUebergangsbericht => Some("Krippe-Uebergangsbericht.pdf"),
        }
    }
}

/// What value a form field receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// "First Last" display name.
    KidName,
    Group,
    /// Birth date from the lookup, dd.MM.yyyy.
    BirthDate,
    /// Today's date, dd.MM.yyyy.
    Today,
    /// Radio half set "On" for boys, "Off" otherwise.
    GenderMale,
    /// Radio half set "On" for girls, "Off" otherwise.
    GenderFemale,
}

/// One named field of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub role: FieldRole,
}

const fn field(name: &'static str, role: FieldRole) -> FieldSpec {
    FieldSpec { name, role }
}

const PROTOKOLLBOGEN_FIELDS: &[FieldSpec] = &[
    field("Name_Kind", FieldRole::KidName),
    field("Gruppe", FieldRole::Group),
    field("Geburtsdatum", FieldRole::BirthDate),
    field("Datum", FieldRole::Today),
    field("Junge", FieldRole::GenderMale),
    field("Maedchen", FieldRole::GenderFemale),
];

const ALLGEMEIN_FIELDS: &[FieldSpec] = &[
    field("Name_Kind", FieldRole::KidName),
    field("Gruppe", FieldRole::Group),
    field("Geburtsdatum", FieldRole::BirthDate),
    field("Datum", FieldRole::Today),
];

const VORSCHUL_FIELDS: &[FieldSpec] = &[
    field("Name_Kind", FieldRole::KidName),
    field("Gruppe", FieldRole::Group),
    field("Datum", FieldRole::Today),
];

const ELTERNGESPRAECH_FIELDS: &[FieldSpec] = &[
    field("Name_Kind", FieldRole::KidName),
    field("Datum", FieldRole::Today),
];

const UEBERGANG_FIELDS: &[FieldSpec] = &[
    field("Name_Kind", FieldRole::KidName),
    field("Datum", FieldRole::Today),
];

/// The fixed field set written for a template kind.
pub fn field_schema(kind: TemplateKind) -> &'static [FieldSpec] {
    match kind {
        TemplateKind::Protokollbogen => PROTOKOLLBOGEN_FIELDS,
        TemplateKind::AllgemeinerEntwicklungsbericht => ALLGEMEIN_FIELDS,
        TemplateKind::VorschulEntwicklungsbericht => VORSCHUL_FIELDS,
        TemplateKind::ProtokollElterngespraech => ELTERNGESPRAECH_FIELDS,
        TemplateKind::KrippeUebergangsbericht => UEBERGANG_FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldRole, TemplateKind, field_schema};

    #[test]
    fn field_counts_per_template() {
        assert_eq!(field_schema(TemplateKind::Protokollbogen).len(), 6);
        assert_eq!(
            field_schema(TemplateKind::AllgemeinerEntwicklungsbericht).len(),
            4
        );
        assert_eq!(field_schema(TemplateKind::VorschulEntwicklungsbericht).len(), 3);
        assert_eq!(field_schema(TemplateKind::ProtokollElterngespraech).len(), 2);
        assert_eq!(field_schema(TemplateKind::KrippeUebergangsbericht).len(), 2);
    }

    #[test]
    fn only_protokollbogen_has_the_gender_pair() {
        let has_pair = |kind| {
            let schema = field_schema(kind);
            schema.iter().any(|f| f.role == FieldRole::GenderMale)
                && schema.iter().any(|f| f.role == FieldRole::GenderFemale)
        };
        assert!(has_pair(TemplateKind::Protokollbogen));
        assert!(!has_pair(TemplateKind::AllgemeinerEntwicklungsbericht));
        assert!(!has_pair(TemplateKind::VorschulEntwicklungsbericht));
        assert!(!has_pair(TemplateKind::ProtokollElterngespraech));
        assert!(!has_pair(TemplateKind::KrippeUebergangsbericht));
    }

    #[test]
    fn schema_names_are_unique_within_a_template() {
        for kind in [
            TemplateKind::Protokollbogen,
            TemplateKind::AllgemeinerEntwicklungsbericht,
            TemplateKind::VorschulEntwicklungsbericht,
            TemplateKind::ProtokollElterngespraech,
            TemplateKind::KrippeUebergangsbericht,
        ] {
            let schema = field_schema(kind);
            let mut names: Vec<&str> = schema.iter().map(|f| f.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), schema.len(), "{kind:?}");
        }
    }
}
