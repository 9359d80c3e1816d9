// Contact form state machine with simulated submission.

use folio_core::contact::FIELDS;
use folio_core::{ContactForm, Field, SubmitPhase};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn filled() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, "Ada");
    form.set_field(Field::Email, "ada@example.com");
    form.set_field(Field::Subject, "Hello");
    form.set_field(Field::Message, "Let's build something.");
    form
}

#[test]
fn incomplete_form_does_not_submit() {
    let mut form = filled();
    form.set_field(Field::Subject, "   ");
    assert!(!form.is_complete());
    assert!(!form.submit());
    assert_eq!(form.phase(), SubmitPhase::Idle);

    let mut form = filled();
    form.set_field(Field::Email, "not-an-email");
    assert!(!form.submit());
}

#[test]
fn submission_runs_through_every_phase() {
    let mut form = filled();
    assert!(form.submit());
    assert_eq!(form.phase(), SubmitPhase::Submitting);
    assert!(!form.submit(), "second submit while sending is ignored");

    assert!(!form.tick(ms(999)));
    assert!(form.tick(ms(1)));
    assert_eq!(form.phase(), SubmitPhase::Submitted);
    assert_eq!(form.revision(), 1);
    for f in FIELDS {
        assert_eq!(form.field(f), "");
    }

    assert!(!form.tick(ms(2999)));
    assert!(form.tick(ms(1)));
    assert_eq!(form.phase(), SubmitPhase::Idle);
    assert!(!form.tick(ms(10_000)));
}

#[test]
fn fields_map_to_control_names() {
    for f in FIELDS {
        assert_eq!(Field::from_name(f.name()), Some(f));
    }
    assert_eq!(Field::from_name("phone"), None);
    let mut form = ContactForm::default();
    form.set_field(Field::Message, "first");
    form.set_field(Field::Message, "second");
    assert_eq!(form.field(Field::Message), "second");
}
