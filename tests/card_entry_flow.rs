//! End-to-end entry flows driven through the public API only.

use std::sync::Arc;

use chrono::NaiveDate;

use cardform::prelude::*;

fn validator() -> Arc<BuiltinValidator> {
    let date = NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid test date");
    Arc::new(BuiltinValidator::with_reference_date(date))
}

/// Replays a keystroke-by-keystroke append into the field, the way a host
/// text input reports its changed contents.
fn type_into(form: &mut CreditCardForm, field: CardField, text: &str) -> Vec<SequencerCommand> {
    let mut commands = Vec::new();
    for ch in text.chars() {
        let current = form.values().expect("values").value(field).to_string();
        commands.extend(
            form.input(field, &format!("{current}{ch}"))
                .expect("input accepted"),
        );
    }
    commands
}

fn ack_scroll(form: &mut CreditCardForm, expected: CardField) {
    let commands = form.scroll_completed();
    assert_eq!(commands, vec![SequencerCommand::Focus(expected)]);
}

#[test]
fn ios_host_walks_the_paged_flow_and_submits() {
    let options: CardFormOptions = serde_json::from_str(
        r##"{
            "platform": "ios",
            "inputColors": { "focused": "#112233" },
            "translations": { "next": "Weiter" }
        }"##,
    )
    .expect("valid options json");
    let mut form = CreditCardForm::with_validator(options, validator());

    assert!(form.is_paged());
    assert_eq!(
        form.mount_commands(),
        vec![SequencerCommand::Focus(CardField::CardNumber)]
    );
    assert_eq!(form.translations().next, "Weiter");
    assert_eq!(form.input_colors().focused, "#112233");

    let commands = type_into(&mut form, CardField::CardNumber, "5555555555554444");
    assert_eq!(form.brand().expect("brand"), CardBrand::Mastercard);
    assert_eq!(commands, vec![SequencerCommand::Scroll { page: 1 }]);
    ack_scroll(&mut form, CardField::HolderName);

    type_into(&mut form, CardField::HolderName, "Grace Hopper");
    let commands = form.submit_field(CardField::HolderName).expect("submit");
    assert_eq!(commands, vec![SequencerCommand::Scroll { page: 2 }]);
    ack_scroll(&mut form, CardField::Expiration);

    let commands = type_into(&mut form, CardField::Expiration, "0630");
    assert_eq!(
        form.values().expect("values").expiration,
        "06/30"
    );
    assert_eq!(commands, vec![SequencerCommand::Scroll { page: 3 }]);
    ack_scroll(&mut form, CardField::Cvv);

    let commands = type_into(&mut form, CardField::Cvv, "321");
    assert_eq!(commands, vec![SequencerCommand::Scroll { page: 4 }]);
    ack_scroll(&mut form, CardField::ZipCode);

    type_into(&mut form, CardField::ZipCode, "94103");
    let commands = form.submit_field(CardField::ZipCode).expect("submit");
    assert_eq!(commands, vec![SequencerCommand::DismissKeyboard]);
    assert!(!form.is_paged());
    assert_eq!(form.focused(), None);

    let mut delivered = None;
    form.submit(|model| {
        delivered = Some(model.clone());
        Ok(())
    })
    .expect("submit succeeds");
    let model = delivered.expect("values delivered");
    assert_eq!(model.card_number, "5555 5555 5555 4444");
    assert_eq!(model.holder_name, "Grace Hopper");
    assert_eq!(model.expiration, "06/30");
    assert_eq!(model.cvv, "321");
    assert_eq!(model.zip_code, "94103");
    assert_eq!(
        form.snapshot().expect("snapshot").submit_state,
        SubmitState::Succeeded
    );
}

#[test]
fn android_host_gets_direct_focus_moves_and_edits_freely() {
    let options = CardFormOptions::new().platform(Platform::Android);
    let mut form = CreditCardForm::with_validator(options, validator());
    assert!(!form.is_paged());

    let commands = type_into(&mut form, CardField::CardNumber, "4111111111111111");
    assert_eq!(
        commands,
        vec![SequencerCommand::Focus(CardField::HolderName)]
    );

    // The user jumps back and shortens the number by one digit; the
    // grouping re-flows and the shorter value is simply invalid, no
    // advance fires while editing below the target length.
    form.focus(CardField::CardNumber);
    let commands = form
        .input(CardField::CardNumber, "4111 1111 1111 111")
        .expect("input");
    assert!(commands.is_empty());
    assert_eq!(
        form.values().expect("values").card_number,
        "4111 1111 1111 111"
    );

    // Retyping the digit completes and advances again.
    let commands = form
        .input(CardField::CardNumber, "4111 1111 1111 1111")
        .expect("input");
    assert_eq!(
        commands,
        vec![SequencerCommand::Focus(CardField::HolderName)]
    );
}

#[test]
fn amex_numbers_reshape_the_cvv_and_display_length() {
    let options = CardFormOptions::new().platform(Platform::Android);
    let mut form = CreditCardForm::with_validator(options, validator());

    let commands = type_into(&mut form, CardField::CardNumber, "371449635398431");
    assert_eq!(form.brand().expect("brand"), CardBrand::AmericanExpress);
    assert_eq!(
        form.values().expect("values").card_number,
        "3714 4963 5398 431"
    );
    assert_eq!(
        commands,
        vec![SequencerCommand::Focus(CardField::HolderName)]
    );

    form.focus(CardField::Cvv);
    assert!(type_into(&mut form, CardField::Cvv, "123").is_empty());
    let commands = type_into(&mut form, CardField::Cvv, "4");
    assert_eq!(commands, vec![SequencerCommand::Focus(CardField::ZipCode)]);
}

#[test]
fn expired_dates_are_rejected_until_corrected() {
    let options = CardFormOptions::new().platform(Platform::Android);
    let mut form = CreditCardForm::with_validator(options, validator());

    form.focus(CardField::Expiration);
    // July 2026 is in the past relative to the injected reference date.
    let commands = type_into(&mut form, CardField::Expiration, "0726");
    assert!(commands.is_empty());
    assert_eq!(form.focused(), Some(CardField::Expiration));
    form.blur(CardField::Expiration).expect("blur");
    assert_eq!(
        form.display_error(CardField::Expiration).expect("error"),
        Some("This expiration date looks invalid.".into())
    );

    form.focus(CardField::Expiration);
    let commands = form.input(CardField::Expiration, "").expect("clear");
    assert!(commands.is_empty());
    let commands = type_into(&mut form, CardField::Expiration, "0826");
    assert_eq!(commands, vec![SequencerCommand::Focus(CardField::Cvv)]);
    assert_eq!(
        form.display_error(CardField::Expiration).expect("error"),
        None
    );
}

#[test]
fn custom_validator_replaces_the_builtin_rules() {
    struct AcceptEverything;

    impl CardValidator for AcceptEverything {
        fn card_number(&self, _value: &str) -> Validity {
            Validity::VALID
        }
        fn holder_name(&self, _value: &str) -> Validity {
            Validity::VALID
        }
        fn expiration(&self, _value: &str) -> Validity {
            Validity::VALID
        }
        fn cvv(&self, _value: &str, _expected_len: usize) -> Validity {
            Validity::VALID
        }
        fn zip_code(&self, _value: &str) -> Validity {
            Validity::VALID
        }
    }

    let options = CardFormOptions::new().platform(Platform::Android);
    let mut form = CreditCardForm::with_validator(options, Arc::new(AcceptEverything));

    // A checksum-failing number now advances: the collaborator decides.
    let commands = type_into(&mut form, CardField::CardNumber, "4111111111111112");
    assert_eq!(
        commands,
        vec![SequencerCommand::Focus(CardField::HolderName)]
    );
}
