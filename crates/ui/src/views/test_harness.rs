use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Question, QuestionBank, SessionKey};
use quiz_core::time::fixed_now;
use services::{Clock, QuestionSource, QuizLoopService};
use storage::default_questions;
use storage::repository::{InMemorySessionStore, SessionStore};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

#[derive(Clone)]
struct TestApp {
    session_key: SessionKey,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn session_key(&self) -> SessionKey {
        self.session_key
    }

    fn question_source(&self) -> QuestionSource {
        QuestionSource::BuiltIn
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
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
    use_context_provider(|| props.handles.clone());
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
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub session_key: SessionKey,
    pub quiz_loop: Arc<QuizLoopService>,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Fire `intent` through the view's dispatcher and settle the DOM.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
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

pub fn setup_view_harness() -> ViewHarness {
    setup_view_harness_with_questions(default_questions().unwrap())
}

pub fn setup_view_harness_with_questions(questions: Vec<Question>) -> ViewHarness {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    setup_view_harness_with_store(questions, store)
}

pub fn setup_view_harness_with_store(
    questions: Vec<Question>,
    store: Arc<dyn SessionStore>,
) -> ViewHarness {
    let bank = QuestionBank::new(questions).expect("non-empty bank");
    let quiz_loop = Arc::new(QuizLoopService::new(Clock::fixed(fixed_now()), bank, store));
    let session_key = SessionKey::generate();
    let handles = QuizTestHandles::default();

    let app = Arc::new(TestApp {
        session_key,
        quiz_loop: Arc::clone(&quiz_loop),
    });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        session_key,
        quiz_loop,
        handles,
    }
}
