mod card_form;
mod controller;
mod sequencer;


pub use card_form::CreditCardForm;
pub use controller::{
    CardDetails, CardFormController, FieldMeta, FormError, FormResult, FormSnapshot, SubmitState,
};
pub use sequencer::{FocusSequencer, SequencerCommand};
