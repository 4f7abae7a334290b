//! Access to the problem form's named controls.

use std::cell::RefCell;
use std::collections::BTreeMap;

use lpform_catalog::Method;
use serde::{Deserialize, Serialize};

/// Names of the controls the method pages carry
pub mod field {
    pub const C: &str = "c";
    pub const A: &str = "A";
    pub const B: &str = "b";
    pub const MINIMIZE: &str = "minimize";
    pub const EQ_CONSTRAINTS: &str = "eq_constraints";
    pub const GE_CONSTRAINTS: &str = "ge_constraints";
    pub const PENALTY: &str = "M";
    pub const TRACK_ITERATIONS: &str = "track_iterations";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Text or number input, or a textarea
    Text,
    Checkbox,
    /// Select element
    Choice,
}

/// Value of a single control as stored in the saved form state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Checked(bool),
    Text(String),
}

/// Snapshot of every named control, as persisted
pub type FormState = BTreeMap<String, FieldValue>;

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Empty text or an unchecked box
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Checked(b) => !b,
            FieldValue::Text(s) => s.is_empty(),
        }
    }

    /// Convert to the shape a control of `kind` accepts
    pub fn coerce(self, kind: FieldKind) -> FieldValue {
        match (kind, self) {
            (FieldKind::Checkbox, FieldValue::Text(s)) => {
                FieldValue::Checked(matches!(s.trim(), "true" | "on" | "1"))
            }
            (FieldKind::Text | FieldKind::Choice, FieldValue::Checked(b)) => {
                FieldValue::Text(b.to_string())
            }
            (_, value) => value,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Checked(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Checked(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

/// Read/write access to the named controls of a form
pub trait FormAccess {
    /// Named controls in document order
    fn fields(&self) -> Vec<(String, FieldKind)>;

    fn kind(&self, name: &str) -> Option<FieldKind> {
        self.fields()
            .into_iter()
            .find(|(n, _)| n == name)
            .map(|(_, kind)| kind)
    }

    fn value(&self, name: &str) -> Option<FieldValue>;

    /// Write a control's value. Returns `false` when no control has that name.
    fn set_value(&self, name: &str, value: FieldValue) -> bool;
}

/// Read every named control into a [`FormState`]
pub fn snapshot(form: &dyn FormAccess) -> FormState {
    form.fields()
        .into_iter()
        .filter_map(|(name, _)| form.value(&name).map(|v| (name, v)))
        .collect()
}

/// Blank every text control and uncheck every checkbox, then restore the
/// penalty default. Select elements keep their current choice.
pub fn reset(form: &dyn FormAccess, penalty_default: &str) {
    for (name, kind) in form.fields() {
        match kind {
            FieldKind::Text => {
                form.set_value(&name, FieldValue::text(""));
            }
            FieldKind::Checkbox => {
                form.set_value(&name, FieldValue::Checked(false));
            }
            FieldKind::Choice => {}
        }
    }
    form.set_value(field::PENALTY, FieldValue::text(penalty_default));
}

/// Text content of a control, empty when it is missing
pub fn text_value(form: &dyn FormAccess, name: &str) -> String {
    match form.value(name) {
        Some(FieldValue::Text(s)) => s,
        _ => String::new(),
    }
}

/// In-memory form used for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryForm {
    controls: RefCell<Vec<(String, FieldKind, FieldValue)>>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The controls rendered on the page for `method`
    pub fn for_method(method: Method) -> Self {
        let mut form = Self::new()
            .with_text(field::C, "")
            .with_text(field::A, "")
            .with_text(field::B, "")
            .with_checkbox(field::MINIMIZE, false);
        if method != Method::Simplex {
            form = form
                .with_text(field::EQ_CONSTRAINTS, "")
                .with_text(field::GE_CONSTRAINTS, "");
        }
        if method.uses_penalty() {
            form = form.with_text(field::PENALTY, "1000");
        }
        form.with_checkbox(field::TRACK_ITERATIONS, false)
    }

    pub fn with_text(self, name: &str, value: &str) -> Self {
        self.push(name, FieldKind::Text, FieldValue::text(value))
    }

    pub fn with_checkbox(self, name: &str, checked: bool) -> Self {
        self.push(name, FieldKind::Checkbox, FieldValue::Checked(checked))
    }

    pub fn with_choice(self, name: &str, value: &str) -> Self {
        self.push(name, FieldKind::Choice, FieldValue::text(value))
    }

    fn push(self, name: &str, kind: FieldKind, value: FieldValue) -> Self {
        self.controls.borrow_mut().push((name.to_string(), kind, value));
        self
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.value(name).and_then(|v| v.as_text().map(str::to_string))
    }

    pub fn checked(&self, name: &str) -> Option<bool> {
        self.value(name).and_then(|v| v.as_bool())
    }
}

impl FormAccess for MemoryForm {
    fn fields(&self) -> Vec<(String, FieldKind)> {
        self.controls
            .borrow()
            .iter()
            .map(|(name, kind, _)| (name.clone(), *kind))
            .collect()
    }

    fn value(&self, name: &str) -> Option<FieldValue> {
        self.controls
            .borrow()
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, _, v)| v.clone())
    }

    fn set_value(&self, name: &str, value: FieldValue) -> bool {
        let mut controls = self.controls.borrow_mut();
        match controls.iter_mut().find(|(n, _, _)| n == name) {
            Some((_, kind, slot)) => {
                *slot = value.coerce(*kind);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_to_control_kind() {
        assert_eq!(
            FieldValue::text("on").coerce(FieldKind::Checkbox),
            FieldValue::Checked(true)
        );
        assert_eq!(
            FieldValue::text("").coerce(FieldKind::Checkbox),
            FieldValue::Checked(false)
        );
        assert_eq!(
            FieldValue::Checked(true).coerce(FieldKind::Text),
            FieldValue::text("true")
        );
        assert_eq!(
            FieldValue::text("3,5").coerce(FieldKind::Text),
            FieldValue::text("3,5")
        );
    }

    #[test]
    fn test_state_serializes_as_plain_json() {
        let mut state = FormState::new();
        state.insert("c".to_string(), FieldValue::text("3,5"));
        state.insert("minimize".to_string(), FieldValue::Checked(true));
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"c":"3,5","minimize":true}"#);

        let back: FormState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_reset_is_generic_over_controls() {
        let form = MemoryForm::for_method(Method::BigM)
            .with_text("extra_note", "keep me?")
            .with_checkbox("show_steps", true)
            .with_choice("solver", "dense");
        form.set_value(field::C, FieldValue::text("1,2"));
        form.set_value(field::PENALTY, FieldValue::text("50"));
        form.set_value(field::MINIMIZE, FieldValue::Checked(true));

        reset(&form, "1000");

        assert_eq!(form.text(field::C).as_deref(), Some(""));
        assert_eq!(form.text("extra_note").as_deref(), Some(""));
        assert_eq!(form.checked("show_steps"), Some(false));
        assert_eq!(form.checked(field::MINIMIZE), Some(false));
        assert_eq!(form.text(field::PENALTY).as_deref(), Some("1000"));
        assert_eq!(form.text("solver").as_deref(), Some("dense"));
    }

    #[test]
    fn test_reset_without_penalty_field() {
        let form = MemoryForm::for_method(Method::Simplex);
        reset(&form, "1000");
        assert!(form.value(field::PENALTY).is_none());
    }

    #[test]
    fn test_set_missing_control() {
        let form = MemoryForm::for_method(Method::Simplex);
        assert!(!form.set_value(field::EQ_CONSTRAINTS, FieldValue::text("0")));
        assert!(form.set_value(field::C, FieldValue::text("0")));
    }
}
