use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::fields::{CardField, FIELD_ORDER};

/// The five entered values under their fixed emission keys. `card_number`
/// and `expiration` hold the formatted display strings.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub holder_name: String,
    pub card_number: String,
    pub expiration: String,
    pub cvv: String,
    pub zip_code: String,
}

impl CardDetails {
    pub fn value(&self, field: CardField) -> &str {
        match field {
            CardField::CardNumber => &self.card_number,
            CardField::HolderName => &self.holder_name,
            CardField::Expiration => &self.expiration,
            CardField::Cvv => &self.cvv,
            CardField::ZipCode => &self.zip_code,
        }
    }

    pub fn set_value(&mut self, field: CardField, value: String) {
        match field {
            CardField::CardNumber => self.card_number = value,
            CardField::HolderName => self.holder_name = value,
            CardField::Expiration => self.expiration = value,
            CardField::Cvv => self.cvv = value,
            CardField::ZipCode => self.zip_code = value,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldMeta {
    pub dirty: bool,
    pub touched: bool,
    pub errors: Vec<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug)]
pub struct FormSnapshot {
    pub model: CardDetails,
    pub submit_state: SubmitState,
    pub submit_count: u32,
    pub is_dirty: bool,
    pub is_valid: bool,
    pub field_meta: BTreeMap<CardField, FieldMeta>,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FormError {
    #[error("form state lock poisoned while {0}")]
    StatePoisoned(&'static str),
    #[error("invalid submit state transition: {from:?} -> {to:?}")]
    InvalidStateTransition { from: SubmitState, to: SubmitState },
    #[error("form submit is already in progress")]
    AlreadySubmitting,
}

pub type FormResult<T> = Result<T, FormError>;

struct FormState {
    model: CardDetails,
    submit_state: SubmitState,
    submit_count: u32,
    field_meta: BTreeMap<CardField, FieldMeta>,
}

impl FormState {
    fn ensure_meta(&mut self, field: CardField) -> &mut FieldMeta {
        self.field_meta.entry(field).or_default()
    }
}

/// Owner of the per-field values and metadata. Clones share one state so the
/// controller can be captured by host event closures.
#[derive(Clone)]
pub struct CardFormController {
    state: Arc<RwLock<FormState>>,
}

impl Default for CardFormController {
    fn default() -> Self {
        Self::new()
    }
}

impl CardFormController {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(FormState {
                model: CardDetails::default(),
                submit_state: SubmitState::Idle,
                submit_count: 0,
                field_meta: BTreeMap::new(),
            })),
        }
    }

    pub fn value(&self, field: CardField) -> FormResult<String> {
        Ok(read_lock(&self.state, "reading field value")?
            .model
            .value(field)
            .to_string())
    }

    pub fn set_value(&self, field: CardField, value: String) -> FormResult<()> {
        let mut state = write_lock(&self.state, "writing field value")?;
        let dirty = !value.is_empty();
        state.model.set_value(field, value);
        state.ensure_meta(field).dirty = dirty;
        Ok(())
    }

    pub fn touch(&self, field: CardField) -> FormResult<()> {
        let mut state = write_lock(&self.state, "touching field")?;
        state.ensure_meta(field).touched = true;
        Ok(())
    }

    pub fn record_errors(&self, field: CardField, errors: Vec<String>) -> FormResult<()> {
        let mut state = write_lock(&self.state, "recording field errors")?;
        state.ensure_meta(field).errors = errors;
        Ok(())
    }

    pub fn clear_field_errors(&self, field: CardField) -> FormResult<()> {
        self.record_errors(field, Vec::new())
    }

    pub fn field_meta(&self, field: CardField) -> FormResult<Option<FieldMeta>> {
        Ok(read_lock(&self.state, "reading field meta")?
            .field_meta
            .get(&field)
            .cloned())
    }

    /// Error string shown next to a field. Errors stay hidden until the
    /// field was touched or a submit was attempted.
    pub fn display_error(&self, field: CardField) -> FormResult<Option<String>> {
        let state = read_lock(&self.state, "reading display error")?;
        let Some(meta) = state.field_meta.get(&field) else {
            return Ok(None);
        };
        if !meta.touched && state.submit_count == 0 {
            return Ok(None);
        }
        Ok(meta.errors.first().cloned())
    }

    pub fn snapshot(&self) -> FormResult<FormSnapshot> {
        let state = read_lock(&self.state, "creating form snapshot")?;
        let is_valid = state.field_meta.values().all(|meta| meta.errors.is_empty());
        let is_dirty = state.field_meta.values().any(|meta| meta.dirty);
        Ok(FormSnapshot {
            model: state.model.clone(),
            submit_state: state.submit_state,
            submit_count: state.submit_count,
            is_dirty,
            is_valid,
            field_meta: state.field_meta.clone(),
        })
    }

    pub fn reset(&self) -> FormResult<()> {
        let mut state = write_lock(&self.state, "resetting form")?;
        state.model = CardDetails::default();
        state.submit_state = SubmitState::Idle;
        state.submit_count = 0;
        state.field_meta.clear();
        Ok(())
    }

    pub(super) fn begin_submit(&self) -> FormResult<()> {
        let mut state = write_lock(&self.state, "preparing submit")?;
        if state.submit_state == SubmitState::Submitting {
            return Err(FormError::AlreadySubmitting);
        }
        transition_submit_state(&mut state, SubmitState::Validating)?;
        state.submit_count = state.submit_count.saturating_add(1);
        for field in FIELD_ORDER {
            state.ensure_meta(field).touched = true;
        }
        Ok(())
    }

    pub(super) fn transition(&self, next: SubmitState) -> FormResult<()> {
        let mut state = write_lock(&self.state, "transitioning submit state")?;
        transition_submit_state(&mut state, next)
    }
}

fn transition_submit_state(state: &mut FormState, next: SubmitState) -> FormResult<()> {
    let current = state.submit_state;
    if current == next {
        return Ok(());
    }

    let allowed = matches!(
        (current, next),
        (SubmitState::Idle, SubmitState::Validating)
            | (SubmitState::Validating, SubmitState::Submitting)
            | (SubmitState::Validating, SubmitState::Failed)
            | (SubmitState::Submitting, SubmitState::Succeeded)
            | (SubmitState::Submitting, SubmitState::Failed)
            | (SubmitState::Succeeded, SubmitState::Validating)
            | (SubmitState::Failed, SubmitState::Validating)
            | (_, SubmitState::Idle)
    );
    if !allowed {
        return Err(FormError::InvalidStateTransition {
            from: current,
            to: next,
        });
    }
    debug!(from = ?current, to = ?next, "submit state transition");
    state.submit_state = next;
    Ok(())
}

fn read_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| FormError::StatePoisoned(context))
}

fn write_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| FormError::StatePoisoned(context))
}
