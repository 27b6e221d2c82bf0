//! Form binding for the preference table.
//!
//! Handles interaction between the host form and the preference store.
//! Hydration pushes stored values into the bound fields once per load;
//! change events flow back through `field_changed` and are persisted
//! under the preference key bound to the field.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::PreferencesResult;
use crate::preferences::{descriptor_for_field, PrefValue, PreferenceStore, PREFERENCES};

/// Host form the preference layer writes into. Numeric fields mirror the
/// displayed value, checkboxes the checked state.
pub trait FormBinding {
    /// Set the displayed value of a numeric field.
    fn set_value(&mut self, field: &str, value: i64);

    /// Set the checked state of a checkbox field.
    fn set_checked(&mut self, field: &str, checked: bool);
}

/// Controller synchronizing the bound form with the preference store.
pub struct PreferencesController {
    store: Rc<RefCell<PreferenceStore>>,
    #[allow(clippy::type_complexity)]
    listeners: Rc<RefCell<Vec<Box<dyn Fn(&str, &str)>>>>,
}

impl PreferencesController {
    /// Create a controller over a shared preference store.
    pub fn new(store: Rc<RefCell<PreferenceStore>>) -> Self {
        Self {
            store,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Register a callback to be notified when a preference changes.
    /// Callbacks receive the preference key and the raw field value.
    pub fn on_preference_changed<F>(&self, callback: F)
    where
        F: Fn(&str, &str) + 'static,
    {
        self.listeners.borrow_mut().push(Box::new(callback));
    }

    /// Push every stored (or default) preference into its bound field.
    /// Runs once per load, before the form is used interactively.
    pub fn hydrate(&self, form: &mut dyn FormBinding) {
        let store = self.store.borrow();
        for desc in &PREFERENCES {
            match store.read(desc) {
                PrefValue::Integer(value) => form.set_value(desc.field, value),
                PrefValue::Boolean(checked) => form.set_checked(desc.field, checked),
            }
        }
        debug!(fields = PREFERENCES.len(), "hydrated preference fields");
    }

    /// Change-event entry point for a bound field. `raw` is the field's
    /// new value: a decimal string for numeric fields, `"true"`/`"false"`
    /// (or `"1"`/`"0"`) for checkboxes.
    pub fn field_changed(&self, field: &str, raw: &str) -> PreferencesResult<()> {
        let Some(desc) = descriptor_for_field(field) else {
            warn!(field, "change event for unbound field ignored");
            return Ok(());
        };

        let value = match desc.default {
            PrefValue::Integer(_) => match raw.parse() {
                Ok(parsed) => PrefValue::Integer(parsed),
                Err(_) => {
                    warn!(field, raw, "non-numeric field input ignored");
                    return Ok(());
                }
            },
            PrefValue::Boolean(_) => PrefValue::Boolean(raw == "true" || raw == "1"),
        };

        self.store.borrow_mut().write(desc, value)?;

        let listeners = self.listeners.borrow();
        for listener in listeners.iter() {
            listener(desc.key, raw);
        }
        Ok(())
    }

    /// Write every default back to the store and re-hydrate the form.
    pub fn restore_defaults(&self, form: &mut dyn FormBinding) -> PreferencesResult<()> {
        {
            let mut store = self.store.borrow_mut();
            for desc in &PREFERENCES {
                store.write(desc, desc.default)?;
            }
        }
        self.hydrate(form);
        Ok(())
    }
}
