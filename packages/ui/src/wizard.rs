//! Three-step registration form driving [`registration::Wizard`].
//!
//! Remote calls run on a copy of the wizard inside a spawned task. The copy
//! shown on screen is marked pending until the task writes its result back,
//! which disables the controls and turns repeated clicks or Enter presses into
//! no-ops.

use dioxus::prelude::*;
use registration::{Advance, Category, Field, Step, SubmissionMode, Wizard, WizardState};

use crate::icons::FaCircleExclamation;
use crate::session::{use_registrar, use_session};
use crate::views::ConfirmationDialog;
use crate::{BackButton, FormField, Icon};

#[derive(Clone, Copy, Debug, PartialEq)]
enum WizardAction {
    Next,
    ConfirmTypeChange,
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your name",
        Field::Phone => "010-0000-0000",
        Field::Email => "you@example.com",
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Name => "text",
        Field::Phone => "tel",
        Field::Email => "email",
    }
}

#[component]
pub fn RegistrationWizard(
    category: Category,
    title: String,
    description: String,
    #[props(default = "Next".to_string())] finish_label: String,
    on_complete: EventHandler<SubmissionMode>,
    on_exit: EventHandler<()>,
) -> Element {
    let mut wizard = use_signal(move || Wizard::new(category));
    let mut session = use_session();
    let registrar = use_registrar();

    let run = use_callback(move |action: WizardAction| {
        if wizard.peek().is_in_flight() {
            return;
        }
        let mut working = wizard.peek().clone();
        wizard.write().mark_pending();
        let registrar = registrar.clone();

        spawn(async move {
            let mut current = session.peek().clone();
            let result = match action {
                WizardAction::Next => working.advance(&registrar, &mut current).await,
                WizardAction::ConfirmTypeChange => {
                    working.confirm_type_change(&registrar, &mut current).await
                }
            };
            session.set(current);
            wizard.set(working);

            if let Advance::Finalized(mode) = result {
                on_complete.call(mode);
            }
        });
    });

    let handle_back = move |_| {
        let at_start = wizard.peek().state() == &WizardState::Editing(Step::Name);
        if at_start && !wizard.peek().is_in_flight() {
            on_exit.call(());
        } else {
            wizard.write().retreat();
        }
    };

    let handle_key = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && wizard.peek().can_advance() {
            evt.prevent_default();
            run.call(WizardAction::Next);
        }
    };

    let current = wizard();
    let busy = current.is_in_flight();
    let step = current.step().unwrap_or(Step::Email);
    let field = step.field();
    let error = current
        .field_error()
        .filter(|e| e.field == field)
        .map(|e| e.message.clone());
    let next_label = if busy {
        "Please wait...".to_string()
    } else if step.is_last() {
        finish_label.clone()
    } else {
        "Next".to_string()
    };

    rsx! {
        div {
            class: "wizard",
            BackButton { disabled: busy, onclick: handle_back }

            header {
                class: "wizard__header",
                h1 { class: "wizard__title", "{title}" }
                p { class: "wizard__description", "{description}" }
            }

            ol {
                class: "wizard__steps",
                for s in Step::ALL {
                    li {
                        key: "{s.index()}",
                        class: if s.index() <= step.index() { "wizard__step wizard__step--done" } else { "wizard__step" },
                        "{s.field().label()}"
                    }
                }
            }

            if let Some(notice) = current.notice() {
                div {
                    class: "banner banner--error",
                    role: "alert",
                    Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                    span { "{notice}" }
                }
            }

            FormField {
                key: "{step.index()}",
                id: "wizard-field-{step.index()}",
                label: field.label().to_string(),
                value: current.value(field).to_string(),
                input_type: input_type(field).to_string(),
                placeholder: placeholder(field).to_string(),
                error,
                disabled: busy,
                oninput: move |value: String| wizard.write().set_value(field, &value),
                onkeydown: handle_key,
                onblur: move |_| wizard.write().blur(),
            }

            button {
                class: "button button--primary wizard__next",
                r#type: "button",
                disabled: busy,
                onclick: move |_| run.call(WizardAction::Next),
                "{next_label}"
            }

            if let WizardState::ConfirmingTypeChange(existing) = current.state() {
                ConfirmationDialog {
                    title: "Already signed up".to_string(),
                    message: existing.prompt(category),
                    confirm_label: "Change".to_string(),
                    busy,
                    on_confirm: move |_| run.call(WizardAction::ConfirmTypeChange),
                    on_cancel: move |_| wizard.write().cancel_type_change(),
                }
            }
        }
    }
}
