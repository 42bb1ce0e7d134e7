use dioxus::document::eval;
use dioxus::prelude::*;

use quiz_core::model::{COUNTDOWN_CYCLE_SECS, SessionKey};
use services::{QuizAction, QuizLoopService, QuizSession};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{OptionVm, QuizIntent, QuizScreen, render};

use super::results::ResultsPanel;
use super::scripts::countdown_script;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let key = ctx.session_key();

    let mut session = {
        let quiz_loop = quiz_loop.clone();
        use_signal(move || load_session(&quiz_loop, key))
    };
    let mut selected = use_signal(|| 0_usize);
    let mut notice = use_signal(|| None::<ViewError>);

    let dispatch_intent = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |intent: QuizIntent| {
            let action = match intent {
                QuizIntent::Select(index) => {
                    selected.set(index);
                    return;
                }
                QuizIntent::Submit => {
                    let choice = session.read().as_ref().ok().and_then(|session| {
                        session
                            .current_question()
                            .and_then(|question| question.options().get(selected()).cloned())
                    });
                    let Some(choice) = choice else {
                        return;
                    };
                    QuizAction::Submit(choice)
                }
                QuizIntent::Restart => QuizAction::Restart,
            };

            match quiz_loop.dispatch(key, action) {
                Ok(next) => {
                    session.set(Ok(next));
                    selected.set(0);
                    notice.set(None);
                }
                Err(err) => notice.set(Some(ViewError::from(&err))),
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, selected);
            }
        }
    }

    let retry_load = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |()| {
            session.set(load_session(&quiz_loop, key));
        })
    };

    let on_key = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |evt: KeyboardEvent| {
            let intent = {
                let guard = session.read();
                let Ok(current) = guard.as_ref() else {
                    return;
                };
                let vm = render(current, quiz_loop.now());
                match evt.data.key() {
                    Key::Enter if vm.is_complete() => Some(QuizIntent::Restart),
                    Key::Enter => Some(QuizIntent::Submit),
                    Key::Character(value) => vm
                        .question()
                        .and_then(|question| question.option_for_key(&value))
                        .map(QuizIntent::Select),
                    _ => None,
                }
            };
            if let Some(intent) = intent {
                evt.prevent_default();
                dispatch_intent.call(intent);
            }
        })
    };

    {
        let quiz_loop = quiz_loop.clone();
        use_effect(move || {
            let guard = session.read();
            let (active, start) = guard.as_ref().ok().map_or((false, 0), |current| {
                (!current.is_complete(), current.countdown_secs(quiz_loop.now()))
            });
            let js = countdown_script(active, start, COUNTDOWN_CYCLE_SECS);
            let _ = eval(&js);
        });
    }

    let guard = session.read();
    let (vm, load_error) = match guard.as_ref() {
        Ok(current) => (Some(render(current, quiz_loop.now())), None),
        Err(err) => (None, Some(*err)),
    };
    drop(guard);
    let selected_index = selected();

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            if let Some(err) = load_error {
                div { class: "quiz-error",
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| retry_load.call(()),
                        "Retry"
                    }
                }
            }
            if let Some(vm) = vm {
                header { class: "quiz-status",
                    span { class: "quiz-status__score", "{vm.score_label()}" }
                    if !vm.is_complete() {
                        span {
                            class: "quiz-status__timer",
                            id: "quiz-countdown",
                            "{vm.countdown_label()}"
                        }
                    }
                }
                div {
                    class: "quiz-progress",
                    role: "progressbar",
                    aria_valuemin: "0",
                    aria_valuemax: "100",
                    aria_valuenow: "{vm.progress_percent}",
                    div {
                        class: "quiz-progress__fill",
                        style: "width: {vm.progress_percent}%;",
                    }
                }
                p { class: "quiz-progress__label", "{vm.progress_label()}" }
                if let Some(err) = *notice.read() {
                    p { class: "quiz-notice", "{err.message()}" }
                }
                match vm.screen.clone() {
                    QuizScreen::Question(question) => rsx! {
                        section { class: "quiz-question",
                            h2 { class: "quiz-question__heading", "{question.heading()}" }
                            if let Some(category) = question.category {
                                p { class: "quiz-question__category", "{category}" }
                            }
                            p { class: "quiz-question__prompt", "{question.prompt}" }
                            div { class: "quiz-options", role: "radiogroup",
                                for option in question.options {
                                    OptionRow {
                                        key: "{option.index}",
                                        checked: option.index == selected_index,
                                        option: option.clone(),
                                        on_intent: dispatch_intent,
                                    }
                                }
                            }
                            button {
                                class: "btn btn-primary quiz-submit",
                                id: "quiz-submit",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(QuizIntent::Submit),
                                "Answer"
                            }
                            p { class: "quiz-hint", "Press a letter to choose, Enter to answer." }
                        }
                    },
                    QuizScreen::Results(summary) => rsx! {
                        ResultsPanel { summary, on_intent: dispatch_intent }
                    },
                }
            }
        }
    }
}

fn load_session(quiz_loop: &QuizLoopService, key: SessionKey) -> Result<QuizSession, ViewError> {
    quiz_loop.load_or_start(key).map_err(|err| {
        tracing::error!(%key, error = %err, "failed to load quiz session");
        ViewError::from(&err)
    })
}

#[component]
fn OptionRow(option: OptionVm, checked: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = option.index;
    let class = if checked {
        "quiz-option quiz-option--selected"
    } else {
        "quiz-option"
    };
    rsx! {
        label { class: "{class}", r#for: "quiz-option-{index}",
            input {
                r#type: "radio",
                name: "quiz-option",
                id: "quiz-option-{index}",
                checked: checked,
                onchange: move |_| on_intent.call(QuizIntent::Select(index)),
            }
            span { class: "quiz-option__label", "{option.label()}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    selected: Rc<RefCell<Option<Signal<usize>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, selected: Signal<usize>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.selected.borrow_mut() = Some(selected);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn selected(&self) -> Signal<usize> {
        (*self.selected.borrow()).expect("quiz selection registered")
    }
}
