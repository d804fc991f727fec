//! lopdf-backed AcroForm adapter.
//!
//! Fields are collected by scanning the object table for dictionaries
//! carrying both `T` (name) and `FT` (type); writes go to the `V` value
//! (and `AS` for button states). `NeedAppearances` is set on save so
//! viewers regenerate the field appearance streams.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::FormError;
use crate::fill::FormDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Button,
    Other,
}

/// An opened PDF with its AcroForm field index.
pub struct PdfForm {
    doc: Document,
    fields: BTreeMap<String, (ObjectId, FieldKind)>,
}

impl PdfForm {
    pub fn load(path: &Path) -> Result<Self, FormError> {
        let doc = Document::load(path)?;
        Ok(Self::from_document(doc))
    }

    /// Wraps an already-built document. Used by tests.
    pub fn from_document(doc: Document) -> Self {
        let fields = collect_fields(&doc);
        Self { doc, fields }
    }

    /// Current `V` value of a text field.
    pub fn field_value(&self, name: &str) -> Option<String> {
        let (id, _) = *self.fields.get(name)?;
        let dict = self.doc.get_object(id).ok()?.as_dict().ok()?;
        object_text(dict.get(b"V").ok()?)
    }

    /// Current `V` state name of a button field ("On"/"Off").
    pub fn field_state(&self, name: &str) -> Option<String> {
        let (id, _) = *self.fields.get(name)?;
        let dict = self.doc.get_object(id).ok()?.as_dict().ok()?;
        match dict.get(b"V").ok()? {
            Object::Name(state) => Some(String::from_utf8_lossy(state).into_owned()),
            _ => None,
        }
    }

    fn field_dict_mut(&mut self, name: &str) -> Result<(&mut Dictionary, FieldKind), FormError> {
        let (id, kind) = *self
            .fields
            .get(name)
            .ok_or_else(|| FormError::FieldMissing {
                name: name.to_string(),
            })?;
        let dict = self.doc.get_object_mut(id)?.as_dict_mut()?;
        Ok((dict, kind))
    }
}

impl FormDocument for PdfForm {
    fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    fn set_text(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let (dict, _) = self.field_dict_mut(name)?;
        dict.set("V", Object::string_literal(value));
        Ok(())
    }

    fn set_state(&mut self, name: &str, on: bool) -> Result<(), FormError> {
        let (dict, kind) = self.field_dict_mut(name)?;
        if kind != FieldKind::Button {
            return Err(FormError::NotAButton {
                name: name.to_string(),
            });
        }
        let state: &[u8] = if on { b"On" } else { b"Off" };
        dict.set("V", Object::Name(state.to_vec()));
        dict.set("AS", Object::Name(state.to_vec()));
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), FormError> {
        ensure_need_appearances(&mut self.doc);
        self.doc.save(path).map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

fn collect_fields(doc: &Document) -> BTreeMap<String, (ObjectId, FieldKind)> {
    let mut fields = BTreeMap::new();
    for (id, object) in &doc.objects {
        let Ok(dict) = object.as_dict() else {
            continue;
        };
        let kind = match dict.get(b"FT") {
            Ok(Object::Name(ft)) => match ft.as_slice() {
                b"Tx" => FieldKind::Text,
                b"Btn" => FieldKind::Button,
                _ => FieldKind::Other,
            },
            _ => continue,
        };
        let Some(name) = dict.get(b"T").ok().and_then(object_text) else {
            continue;
        };
        fields.insert(name, (*id, kind));
    }
    fields
}

fn object_text(object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) | Object::Name(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
        _ => None,
    }
}

/// Flags the AcroForm dictionary so viewers rebuild appearances for the
/// values written here. Handles both a referenced and an inline form
/// dictionary; a document without one is left alone.
fn ensure_need_appearances(doc: &mut Document) {
    let Some(root_id) = doc
        .trailer
        .get(b"Root")
        .ok()
        .and_then(|root| root.as_reference().ok())
    else {
        return;
    };
    let form_ref = doc
        .get_object(root_id)
        .ok()
        .and_then(|catalog| catalog.as_dict().ok())
        .and_then(|catalog| match catalog.get(b"AcroForm") {
            Ok(Object::Reference(id)) => Some(*id),
            _ => None,
        });
    if let Some(form_id) = form_ref {
        if let Ok(form) = doc
            .get_object_mut(form_id)
            .and_then(Object::as_dict_mut)
        {
            form.set("NeedAppearances", Object::Boolean(true));
        }
        return;
    }
    // Inline AcroForm dictionary directly inside the catalog.
    if let Ok(catalog) = doc.get_object_mut(root_id).and_then(Object::as_dict_mut) {
        if let Ok(form) = catalog.get_mut(b"AcroForm").and_then(Object::as_dict_mut) {
            form.set("NeedAppearances", Object::Boolean(true));
        }
    }
}
