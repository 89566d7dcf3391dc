use dioxus::prelude::*;

use services::GenerationOptions;

use crate::context::AppContext;
use crate::vm::{TutorAnswerVm, map_tutor_answer};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum AskState {
    Idle,
    EmptyInput,
    Busy,
    Ready(TutorAnswerVm),
    Failed(String),
}

#[component]
pub fn TutorView() -> Element {
    let ctx = use_context::<AppContext>();
    let tutor = ctx.tutor_service();
    let mut show_box = use_signal(|| false);
    let mut question = use_signal(String::new);
    let ask_state = use_signal(|| AskState::Idle);

    let ask = {
        let tutor = tutor.clone();
        use_callback(move |()| {
            let mut ask_state = ask_state;
            if ask_state() == AskState::Busy {
                return;
            }
            let text = question();
            if text.trim().is_empty() {
                // User-input error: warn inline, never invoke the model.
                ask_state.set(AskState::EmptyInput);
                return;
            }
            let tutor = tutor.clone();
            spawn(async move {
                ask_state.set(AskState::Busy);
                match tutor.ask(&text, GenerationOptions::streamed()).await {
                    Ok(reply) => ask_state.set(AskState::Ready(map_tutor_answer(&reply))),
                    Err(err) => ask_state.set(AskState::Failed(format!("Error: {err}"))),
                }
            });
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<TutorTestHandles>() {
                handles.register(ask, question, show_box);
            }
        }
    }

    rsx! {
        div { class: "page tutor-page",
            header { class: "view-header",
                h2 { class: "view-title", "AI Coding Tutor" }
                p { class: "view-subtitle", "Ask a coding question and get a worked answer." }
            }
            div { class: "view-divider" }

            div { class: "tutor-toggle-row",
                button {
                    class: "tutor-toggle",
                    r#type: "button",
                    role: "switch",
                    aria_checked: "{show_box()}",
                    onclick: move |_| show_box.set(!show_box()),
                }
                span { class: "tutor-toggle-label", "Ask Tutor" }
            }

            if show_box() {
                div { class: "tutor-form",
                    textarea {
                        class: "tutor-question",
                        rows: "8",
                        placeholder: "Ask your coding question...",
                        value: "{question()}",
                        oninput: move |evt| question.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: ask_state() == AskState::Busy,
                        onclick: move |_| ask.call(()),
                        "Ask Tutor"
                    }
                }
                match ask_state() {
                    AskState::Idle => rsx! {},
                    AskState::EmptyInput => rsx! {
                        p { class: "tutor-warning", "Please enter a valid question." }
                    },
                    AskState::Busy => rsx! {
                        p { class: "tutor-busy", "Tutor is solving..." }
                    },
                    AskState::Failed(message) => rsx! {
                        p { class: "tutor-error", "{message}" }
                    },
                    AskState::Ready(answer) => rsx! {
                        section { class: "tutor-answer",
                            h3 { "Solution" }
                            pre { class: "tutor-code",
                                code { "{answer.solution}" }
                            }
                            h3 { "Explanation" }
                            div {
                                class: "tutor-markdown",
                                dangerous_inner_html: "{answer.explanation_html}",
                            }
                            h3 { "Related Questions" }
                            div {
                                class: "tutor-markdown",
                                dangerous_inner_html: "{answer.related_html}",
                            }
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct TutorTestHandles {
    ask: Rc<RefCell<Option<Callback<()>>>>,
    question: Rc<RefCell<Option<Signal<String>>>>,
    show_box: Rc<RefCell<Option<Signal<bool>>>>,
}

#[cfg(test)]
impl TutorTestHandles {
    pub(crate) fn register(
        &self,
        ask: Callback<()>,
        question: Signal<String>,
        show_box: Signal<bool>,
    ) {
        *self.ask.borrow_mut() = Some(ask);
        *self.question.borrow_mut() = Some(question);
        *self.show_box.borrow_mut() = Some(show_box);
    }

    pub(crate) fn ask(&self) -> Callback<()> {
        (*self.ask.borrow()).expect("tutor ask registered")
    }

    pub(crate) fn question(&self) -> Signal<String> {
        (*self.question.borrow()).expect("tutor question registered")
    }

    pub(crate) fn show_box(&self) -> Signal<bool> {
        (*self.show_box.borrow()).expect("tutor toggle registered")
    }
}
