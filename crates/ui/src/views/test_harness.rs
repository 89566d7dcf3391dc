use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use prep_core::model::{Company, PracticeQuestion, QuestionId};
use services::{
    GenerationOptions, ModelClient, QuestionService, TutorError, TutorService,
};
use storage::repository::InMemoryQuestionBank;

use crate::context::{UiApp, build_app_context};
use crate::views::practice::PracticeTestHandles;
use crate::views::tutor::TutorTestHandles;
use crate::views::{PracticeView, TutorView};

/// Model double that records every prompt and answers from a script.
pub struct ScriptedModelClient {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModelClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn invocations(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedModelClient {
    async fn generate(
        &self,
        prompt: &str,
        _options: GenerationOptions,
    ) -> Result<String, TutorError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

struct TestApp {
    question_service: Arc<QuestionService>,
    tutor_service: Arc<TutorService>,
}

impl UiApp for TestApp {
    fn question_service(&self) -> Arc<QuestionService> {
        Arc::clone(&self.question_service)
    }

    fn tutor_service(&self) -> Arc<TutorService> {
        Arc::clone(&self.tutor_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Tutor,
    Practice,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    practice_handles: PracticeTestHandles,
    tutor_handles: TutorTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.practice_handles.clone());
    use_context_provider(|| props.tutor_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Tutor => rsx! { TutorView {} },
        ViewKind::Practice => rsx! { PracticeView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub bank: InMemoryQuestionBank,
    pub model: Arc<ScriptedModelClient>,
    pub practice: PracticeTestHandles,
    pub tutor: TutorTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Bank with `count` valid rows for one company, titled `Question {n}`.
pub fn seeded_bank(company: Company, count: u64) -> InMemoryQuestionBank {
    let bank = InMemoryQuestionBank::new();
    let rows = (1..=count)
        .map(|id| {
            PracticeQuestion::new(
                QuestionId::new(id),
                format!("Question {id}"),
                format!("https://leetcode.com/problems/question-{id}/"),
            )
            .expect("valid seed question")
        })
        .collect();
    bank.seed(company, rows);
    bank
}

pub fn setup_view_harness(
    view: ViewKind,
    bank: InMemoryQuestionBank,
    reply: &str,
) -> ViewHarness {
    let model = Arc::new(ScriptedModelClient::new(reply));
    let question_service = Arc::new(QuestionService::new(Arc::new(bank.clone())));
    let tutor_service = Arc::new(TutorService::new(Some(
        Arc::clone(&model) as Arc<dyn ModelClient>
    )));

    let practice_handles = PracticeTestHandles::default();
    let tutor_handles = TutorTestHandles::default();

    let app = Arc::new(TestApp {
        question_service,
        tutor_service,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            practice_handles: practice_handles.clone(),
            tutor_handles: tutor_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        bank,
        model,
        practice: practice_handles,
        tutor: tutor_handles,
    }
}
