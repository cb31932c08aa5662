use std::sync::Arc;

use tracing::{debug, trace};

use crate::brand::{self, BrandProfile, CardBrand};
use crate::fields::{CardField, FIELD_ORDER};
use crate::format;
use crate::options::{CardFormOptions, ResolvedFonts, ResolvedInputColors, StyleOverrides};
use crate::translations::TranslationTable;
use crate::validate::{BuiltinValidator, CardValidator, Validity};

use super::controller::{CardDetails, CardFormController, FormResult, FormSnapshot, SubmitState};
use super::sequencer::{FocusSequencer, SequencerCommand};

/// The credit-card entry engine.
///
/// The host renderer drives it with discrete UI events (`input`, `focus`,
/// `submit_field`, `scroll_completed`) and executes the returned
/// [`SequencerCommand`]s. Formatting is applied and stored before any
/// validation reads the value for the same keystroke, and focus only moves
/// after both formatting and validation of the field being left.
pub struct CreditCardForm {
    controller: CardFormController,
    sequencer: FocusSequencer,
    validator: Arc<dyn CardValidator>,
    translations: TranslationTable,
    input_colors: ResolvedInputColors,
    fonts: ResolvedFonts,
    overrides: StyleOverrides,
}

impl CreditCardForm {
    pub fn new(options: CardFormOptions) -> Self {
        Self::with_validator(options, Arc::new(BuiltinValidator::new()))
    }

    /// Builds the form with a caller-supplied validation collaborator.
    pub fn with_validator(options: CardFormOptions, validator: Arc<dyn CardValidator>) -> Self {
        let paged = options.starts_paged();
        debug!(paged, "mounting credit card form");
        Self {
            controller: CardFormController::new(),
            sequencer: FocusSequencer::new(paged),
            validator,
            translations: options.translations.resolve(),
            input_colors: options.input_colors.resolve(),
            fonts: options.fonts.resolve(),
            overrides: options.overrides,
        }
    }

    /// Commands the host runs right after mounting: focus the first field.
    pub fn mount_commands(&self) -> Vec<SequencerCommand> {
        match self.sequencer.focused() {
            Some(field) => vec![SequencerCommand::Focus(field)],
            None => Vec::new(),
        }
    }

    /// Handles a keystroke in `field`: formats the input, stores the display
    /// value and, once the field reaches its target length, validates it and
    /// advances focus.
    pub fn input(&mut self, field: CardField, text: &str) -> FormResult<Vec<SequencerCommand>> {
        let profile = self.brand_profile_for(field, text)?;
        let previous = self.controller.value(field)?;
        let formatted = format::format_field(field, profile, &previous, text);
        trace!(%field, display = %formatted, "formatted keystroke");
        self.controller.set_value(field, formatted.clone())?;

        let reached_target = field
            .profile(profile)
            .advance_len
            .is_some_and(|target| formatted.chars().count() == target);
        if reached_target && self.sequencer.focused() == Some(field) {
            return self.try_advance(field);
        }
        Ok(Vec::new())
    }

    /// Explicit submit of a single field (return key / next button).
    pub fn submit_field(&mut self, field: CardField) -> FormResult<Vec<SequencerCommand>> {
        self.controller.touch(field)?;
        if self.sequencer.focused() != Some(field) {
            return Ok(Vec::new());
        }
        self.try_advance(field)
    }

    /// Focus-gained event from the host. Never triggers validation.
    pub fn focus(&mut self, field: CardField) {
        self.sequencer.focus_gained(field);
    }

    /// Focus-lost event from the host; marks the field as touched so its
    /// errors become visible.
    pub fn blur(&mut self, field: CardField) -> FormResult<()> {
        self.controller.touch(field)?;
        self.sequencer.focus_lost(field);
        Ok(())
    }

    /// Host acknowledgment that a requested paged scroll finished.
    pub fn scroll_completed(&mut self) -> Vec<SequencerCommand> {
        self.sequencer.scroll_completed()
    }

    /// Validates the whole form and, if every field holds up, hands the
    /// entered values to `deliver`.
    pub fn submit<F>(&mut self, deliver: F) -> FormResult<()>
    where
        F: FnOnce(&CardDetails) -> FormResult<()>,
    {
        self.controller.begin_submit()?;
        if !self.validate_all()? {
            debug!("submit rejected by validation");
            self.controller.transition(SubmitState::Failed)?;
            return Ok(());
        }
        self.controller.transition(SubmitState::Submitting)?;
        let model = self.controller.snapshot()?.model;
        let result = deliver(&model);
        match result {
            Ok(()) => self.controller.transition(SubmitState::Succeeded)?,
            Err(_) => self.controller.transition(SubmitState::Failed)?,
        }
        result
    }

    /// Final values under the fixed keys; `cardNumber` and `expiration` are
    /// the displayed, formatted strings.
    pub fn values(&self) -> FormResult<CardDetails> {
        Ok(self.controller.snapshot()?.model)
    }

    pub fn snapshot(&self) -> FormResult<FormSnapshot> {
        self.controller.snapshot()
    }

    /// Brand detected from the current card-number value.
    pub fn brand(&self) -> FormResult<CardBrand> {
        Ok(brand::resolve(&self.controller.value(CardField::CardNumber)?).brand)
    }

    pub fn focused(&self) -> Option<CardField> {
        self.sequencer.focused()
    }

    pub fn is_paged(&self) -> bool {
        self.sequencer.is_paged()
    }

    pub fn display_error(&self, field: CardField) -> FormResult<Option<String>> {
        self.controller.display_error(field)
    }

    pub fn controller(&self) -> &CardFormController {
        &self.controller
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    pub fn input_colors(&self) -> &ResolvedInputColors {
        &self.input_colors
    }

    pub fn fonts(&self) -> &ResolvedFonts {
        &self.fonts
    }

    pub fn style_overrides(&self) -> &StyleOverrides {
        &self.overrides
    }

    /// Validates `field`, records its error state and, when valid, advances
    /// the sequencer. In paged mode the returned commands start with the
    /// scroll request; focus follows only after [`Self::scroll_completed`].
    fn try_advance(&mut self, field: CardField) -> FormResult<Vec<SequencerCommand>> {
        if !self.validate_field(field)? {
            debug!(%field, "validation failed, staying put");
            return Ok(Vec::new());
        }
        Ok(self.sequencer.advance())
    }

    fn validate_field(&mut self, field: CardField) -> FormResult<bool> {
        let value = self.controller.value(field)?;
        let verdict = self.check(field, &value)?;
        let errors = if verdict.is_valid {
            Vec::new()
        } else {
            vec![self.translations.invalid_message(field).to_string()]
        };
        self.controller.record_errors(field, errors)?;
        Ok(verdict.is_valid)
    }

    fn check(&self, field: CardField, value: &str) -> FormResult<Validity> {
        Ok(match field {
            CardField::CardNumber => self.validator.card_number(value),
            CardField::HolderName => self.validator.holder_name(value),
            CardField::Expiration => self.validator.expiration(value),
            CardField::Cvv => {
                let profile = brand::resolve(&self.controller.value(CardField::CardNumber)?);
                self.validator.cvv(value, profile.cvv_len)
            }
            CardField::ZipCode => self.validator.zip_code(value),
        })
    }

    fn validate_all(&mut self) -> FormResult<bool> {
        let mut all_valid = true;
        for field in FIELD_ORDER {
            let value = self.controller.value(field)?;
            let errors = if value.is_empty() {
                vec![self.translations.required_message(field).to_string()]
            } else if self.check(field, &value)?.is_valid {
                Vec::new()
            } else {
                vec![self.translations.invalid_message(field).to_string()]
            };
            all_valid &= errors.is_empty();
            self.controller.record_errors(field, errors)?;
        }
        Ok(all_valid)
    }

    fn brand_profile_for(&self, field: CardField, text: &str) -> FormResult<BrandProfile> {
        if field == CardField::CardNumber {
            Ok(brand::resolve(text))
        } else {
            Ok(brand::resolve(&self.controller.value(CardField::CardNumber)?))
        }
    }
}
