use dioxus::prelude::*;

use crate::vm::{QuizIntent, SummaryVm};

#[component]
pub(super) fn ResultsPanel(summary: SummaryVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let correct_pct = summary.correct_percent();
    let incorrect_pct = summary.incorrect_percent();

    rsx! {
        section { class: "quiz-results",
            h2 { class: "quiz-results__title", "Quiz complete!" }
            p { class: "quiz-results__score", "{summary.score_label()}" }

            div { class: "quiz-results__chart",
                div { class: "quiz-bar",
                    span { class: "quiz-bar__label", "{summary.correct_label()}" }
                    div { class: "quiz-bar__track",
                        div {
                            class: "quiz-bar__fill quiz-bar__fill--correct",
                            style: "width: {correct_pct}%;",
                        }
                    }
                }
                div { class: "quiz-bar",
                    span { class: "quiz-bar__label", "{summary.incorrect_label()}" }
                    div { class: "quiz-bar__track",
                        div {
                            class: "quiz-bar__fill quiz-bar__fill--incorrect",
                            style: "width: {incorrect_pct}%;",
                        }
                    }
                }
            }

            p { class: "quiz-results__mean", "Average time per answer: {summary.mean_time_label}" }

            if !summary.categories.is_empty() {
                table { class: "quiz-results__categories",
                    thead {
                        tr {
                            th { "Category" }
                            th { "Score" }
                            th { "%" }
                        }
                    }
                    tbody {
                        for row in summary.categories.iter() {
                            tr { key: "{row.label}",
                                td { "{row.label}" }
                                td { "{row.score_label()}" }
                                td { "{row.percent}%" }
                            }
                        }
                    }
                }
            }

            details { class: "quiz-results__review",
                summary { "Review answers" }
                ol {
                    for row in summary.answers.iter() {
                        li {
                            key: "{row.number}",
                            class: if row.is_correct { "quiz-review quiz-review--correct" } else { "quiz-review quiz-review--incorrect" },
                            p { class: "quiz-review__prompt", "{row.prompt}" }
                            p { "Your answer: {row.selected}" }
                            if !row.is_correct {
                                p { "Correct answer: {row.correct_answer}" }
                            }
                            p { class: "quiz-review__time", "{row.elapsed_label}" }
                        }
                    }
                }
            }

            button {
                class: "btn btn-primary quiz-restart",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Restart Quiz"
            }
        }
    }
}
