/// Ticks the countdown label once per second between renders.
///
/// Each render passes the server-side value so the label never drifts far from
/// `30 - (elapsed mod 30)`. The label shows 0 for one tick, then wraps to the
/// full cycle.
pub(super) fn countdown_script(active: bool, start_secs: u32, cycle_secs: u32) -> String {
    format!(
        r#"(function() {{
                    const root = document.getElementById("quiz-root");
                    const state = window.__quizCountdown || (window.__quizCountdown = {{
                        remaining: 0,
                        id: null,
                    }});
                    const stop = () => {{
                        if (state.id) {{
                            clearInterval(state.id);
                            state.id = null;
                        }}
                    }};
                    if (!root) {{
                        stop();
                        return;
                    }}
                    const active = {active};
                    const cycle = {cycle_secs};
                    state.remaining = {start_secs};
                    const updateUi = () => {{
                        const label = document.getElementById("quiz-countdown");
                        if (label) {{
                            label.textContent = "Time left: " + state.remaining + "s";
                        }}
                    }};
                    updateUi();
                    if (!active) {{
                        stop();
                        return;
                    }}
                    if (!state.id) {{
                        state.id = setInterval(() => {{
                            if (!document.getElementById("quiz-root")) {{
                                stop();
                                return;
                            }}
                            state.remaining -= 1;
                            if (state.remaining < 0) {{
                                state.remaining = cycle;
                            }}
                            updateUi();
                        }}, 1000);
                    }}
                }})();"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_embeds_start_and_cycle() {
        let js = countdown_script(true, 18, 30);
        assert!(js.contains("state.remaining = 18;"));
        assert!(js.contains("const cycle = 30;"));
        assert!(js.contains("const active = true;"));
    }

    #[test]
    fn script_wraps_only_after_showing_zero() {
        let js = countdown_script(true, 0, 30);
        assert!(js.contains("if (state.remaining < 0)"));
        assert!(!js.contains("state.remaining <= 0"));
    }
}
