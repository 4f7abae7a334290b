//! Saving and restoring form contents per method.

use std::rc::Rc;
use std::time::Duration;

use lpform_catalog::Method;

use crate::config::UiConfig;
use crate::error::UiError;
use crate::form::{self, FieldValue, FormAccess, FormState, field};
use crate::storage::Storage;
use crate::timer::{Debouncer, Scheduler};

/// Storage key holding a method page's saved form
pub fn storage_key(method: Method) -> String {
    format!("{}_form_data", method.id())
}

/// Outcome of restoring saved form data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Controls that received a stored value
    pub restored: usize,
    /// Whether any restored value differs from a blank form
    pub has_content: bool,
}

pub struct FormPersistence {
    form: Rc<dyn FormAccess>,
    storage: Rc<dyn Storage>,
    penalty_default: String,
}

impl FormPersistence {
    pub fn new(form: Rc<dyn FormAccess>, storage: Rc<dyn Storage>, config: &UiConfig) -> Self {
        Self {
            form,
            storage,
            penalty_default: config.penalty_default.clone(),
        }
    }

    pub fn save_form_data(&self, method: Method) -> Result<(), UiError> {
        let state = form::snapshot(self.form.as_ref());
        let json = serde_json::to_string(&state).map_err(UiError::Serialize)?;
        self.storage.set_item(&storage_key(method), &json)?;
        log::debug!("saved {} fields for {method}", state.len());
        Ok(())
    }

    /// Read the saved state without touching the form
    pub fn read_saved(&self, method: Method) -> Result<Option<FormState>, UiError> {
        let key = storage_key(method);
        let Some(raw) = self.storage.get_item(&key)? else {
            return Ok(None);
        };
        let state =
            serde_json::from_str(&raw).map_err(|source| UiError::CorruptState { key, source })?;
        Ok(Some(state))
    }

    /// Write saved values back into the form.
    ///
    /// Stored names without a matching control are skipped. Unreadable or
    /// corrupt data is logged and leaves the form as it was.
    pub fn load_form_data(&self, method: Method) -> RestoreReport {
        let state = match self.read_saved(method) {
            Ok(Some(state)) => state,
            Ok(None) => return RestoreReport::default(),
            Err(e) => {
                log::warn!("ignoring saved form data for {method}: {e}");
                return RestoreReport::default();
            }
        };

        let mut report = RestoreReport::default();
        for (name, value) in state {
            let Some(kind) = self.form.kind(&name) else {
                continue;
            };
            let value = value.coerce(kind);
            if self.is_content(&name, &value) {
                report.has_content = true;
            }
            if self.form.set_value(&name, value) {
                report.restored += 1;
            }
        }
        log::debug!("restored {} fields for {method}", report.restored);
        report
    }

    /// Forget the saved entry and blank the live form
    pub fn clear_form_data(&self, method: Method) -> Result<(), UiError> {
        self.storage.remove_item(&storage_key(method))?;
        form::reset(self.form.as_ref(), &self.penalty_default);
        Ok(())
    }

    /// Save, logging instead of returning failures
    pub fn save_logged(&self, method: Method) {
        if let Err(e) = self.save_form_data(method) {
            log::warn!("form data for {method} not saved: {e}");
        }
    }

    fn is_content(&self, name: &str, value: &FieldValue) -> bool {
        if value.is_blank() {
            return false;
        }
        !(name == field::PENALTY && value.as_text() == Some(self.penalty_default.as_str()))
    }
}

/// Saves the form as the user edits it.
///
/// Typing is debounced; discrete changes save at once and supersede any
/// pending debounced save.
pub struct AutoSave {
    method: Method,
    persistence: Rc<FormPersistence>,
    debouncer: Debouncer,
}

impl AutoSave {
    pub fn new(
        method: Method,
        persistence: Rc<FormPersistence>,
        scheduler: Rc<dyn Scheduler>,
        delay: Duration,
    ) -> Self {
        Self {
            method,
            persistence,
            debouncer: Debouncer::new(scheduler, delay),
        }
    }

    pub fn on_input(&self) {
        let persistence = Rc::clone(&self.persistence);
        let method = self.method;
        self.debouncer.call(move || persistence.save_logged(method));
    }

    pub fn on_change(&self) {
        self.save_now();
    }

    pub fn save_now(&self) {
        self.debouncer.cancel();
        self.persistence.save_logged(self.method);
    }

    /// Drop a pending debounced save
    pub fn cancel(&self) {
        self.debouncer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}
