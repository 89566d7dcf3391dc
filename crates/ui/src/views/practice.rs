use dioxus::prelude::*;

use prep_core::model::Company;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState};
use crate::vm::{QuestionItemVm, map_question_item, markdown_to_html};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Per-item solution panel state, reset whenever a new batch is sampled.
#[derive(Clone, Debug, PartialEq)]
enum PanelState {
    Closed,
    Loading,
    Open(String),
    Failed(String),
}

/// The single mutation path for practice state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PracticeIntent {
    Sample,
    ShowSolution(usize),
}

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let questions = ctx.question_service();
    let tutor = ctx.tutor_service();
    let mut company = use_signal(|| Company::ALL[0]);
    let batch = use_signal(|| ViewState::<Vec<QuestionItemVm>>::Idle);
    let panels = use_signal(Vec::<PanelState>::new);

    let dispatch = {
        let questions = questions.clone();
        let tutor = tutor.clone();
        use_callback(move |intent: PracticeIntent| {
            let mut batch = batch;
            let mut panels = panels;
            match intent {
                PracticeIntent::Sample => {
                    let questions = questions.clone();
                    let selected = company();
                    spawn(async move {
                        batch.set(ViewState::Loading);
                        panels.set(Vec::new());
                        match questions.sample(selected).await {
                            Ok(sampled) => {
                                let items = sampled
                                    .questions()
                                    .iter()
                                    .map(map_question_item)
                                    .collect::<Vec<_>>();
                                panels.set(vec![PanelState::Closed; items.len()]);
                                batch.set(ViewState::Ready(items));
                            }
                            // Data-load errors fail this pass; no retry.
                            Err(_) => batch.set(ViewState::Error(ViewError::TableUnavailable)),
                        }
                    });
                }
                PracticeIntent::ShowSolution(ix) => {
                    let triggered = matches!(
                        panels().get(ix),
                        Some(PanelState::Loading | PanelState::Open(_))
                    );
                    if triggered {
                        return;
                    }
                    let title = match batch() {
                        ViewState::Ready(items) => items.get(ix).map(|item| item.title.clone()),
                        _ => None,
                    };
                    let Some(title) = title else {
                        return;
                    };
                    let tutor = tutor.clone();
                    spawn(async move {
                        set_panel(&mut panels, ix, PanelState::Loading);
                        match tutor.solve(&title).await {
                            Ok(text) => {
                                set_panel(&mut panels, ix, PanelState::Open(markdown_to_html(&text)));
                            }
                            Err(err) => {
                                set_panel(&mut panels, ix, PanelState::Failed(format!("Error: {err}")));
                            }
                        }
                    });
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PracticeTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    rsx! {
        div { class: "page practice-page",
            header { class: "view-header",
                h2 { class: "view-title", "Company OA Practice" }
                p { class: "view-subtitle", "Pick a company and drill a random batch of questions." }
            }
            div { class: "view-divider" }

            div { class: "practice-controls",
                label { class: "practice-company-label", "Select a company:" }
                select {
                    class: "practice-company",
                    onchange: move |evt| {
                        if let Ok(picked) = evt.value().parse::<Company>() {
                            company.set(picked);
                        }
                    },
                    {Company::ALL.iter().map(|&option_company| rsx! {
                        option {
                            key: "{option_company.label()}",
                            value: "{option_company.label()}",
                            selected: option_company == company(),
                            "{option_company.label()}"
                        }
                    })}
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: batch() == ViewState::Loading,
                    onclick: move |_| dispatch.call(PracticeIntent::Sample),
                    "Show 10 Random OA Questions"
                }
            }

            match batch() {
                ViewState::Idle => rsx! {
                    p { class: "practice-empty", "Sample a batch to get started." }
                },
                ViewState::Loading => rsx! {
                    p { class: "practice-busy", "Loading questions..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "practice-error", "{err.message()}" }
                },
                ViewState::Ready(items) => {
                    let panel_states = panels();
                    let rendered = items.iter().enumerate().map(|(ix, item)| {
                        let panel = panel_states
                            .get(ix)
                            .cloned()
                            .unwrap_or(PanelState::Closed);
                        rsx! {
                            details { class: "practice-item", key: "{item.id}",
                                summary { class: "practice-item-title", "{item.title}" }
                                p { class: "practice-item-link",
                                    a { href: "{item.link}", target: "_blank", "View on LeetCode" }
                                }
                                match panel {
                                    PanelState::Closed => rsx! {
                                        button {
                                            class: "btn btn-secondary",
                                            r#type: "button",
                                            onclick: move |_| dispatch.call(PracticeIntent::ShowSolution(ix)),
                                            "Show Solution & Explanation"
                                        }
                                    },
                                    PanelState::Loading => rsx! {
                                        p { class: "practice-busy", "Solving..." }
                                    },
                                    PanelState::Open(html) => rsx! {
                                        div {
                                            class: "practice-solution tutor-markdown",
                                            dangerous_inner_html: "{html}",
                                        }
                                    },
                                    PanelState::Failed(message) => rsx! {
                                        p { class: "practice-error", "{message}" }
                                    },
                                }
                            }
                        }
                    });
                    rsx! {
                        div { class: "practice-items", {rendered} }
                    }
                }
            }
        }
    }
}

fn set_panel(panels: &mut Signal<Vec<PanelState>>, ix: usize, state: PanelState) {
    let mut guard = panels.write();
    if let Some(slot) = guard.get_mut(ix) {
        *slot = state;
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PracticeTestHandles {
    dispatch: Rc<RefCell<Option<Callback<PracticeIntent>>>>,
}

#[cfg(test)]
impl PracticeTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<PracticeIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<PracticeIntent> {
        (*self.dispatch.borrow()).expect("practice dispatch registered")
    }
}
