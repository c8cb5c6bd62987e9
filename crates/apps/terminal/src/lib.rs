//! Terminal portfolio UI: binds a [`Session`] to an input line and a scrolling log.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use leptos::ev::KeyboardEvent;
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use portfolio_shell::{
    quote_all, Clock, EntryKind, KonamiTracker, LogEntry, Session, SessionConfig, SessionEffect,
    SystemClock, KONAMI_MESSAGE, TICKER_REFRESH_MS,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::Value;

/// What a key pressed in the input line asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKey {
    Submit,
    RecallPrevious,
    RecallNext,
}

impl InputKey {
    /// Session transition bound to this key.
    fn change(self) -> fn(&mut Session) -> Vec<SessionEffect> {
        match self {
            InputKey::Submit => Session::submit_input,
            InputKey::RecallPrevious => |session| {
                session.recall_previous();
                Vec::new()
            },
            InputKey::RecallNext => |session| {
                session.recall_next();
                Vec::new()
            },
        }
    }

    /// Arrow keys would otherwise move the caret.
    fn suppresses_default(self) -> bool {
        !matches!(self, InputKey::Submit)
    }
}

fn input_key(key: &str) -> Option<InputKey> {
    match key {
        "Enter" => Some(InputKey::Submit),
        "ArrowUp" => Some(InputKey::RecallPrevious),
        "ArrowDown" => Some(InputKey::RecallNext),
        _ => None,
    }
}

const TYPEWRITER_CURSOR: char = '|';

/// First `ticks` characters of `text`, followed by a cursor until the text is complete.
fn typewriter_frame(text: &str, ticks: usize) -> String {
    let mut frame = text.chars().take(ticks).collect::<String>();
    if ticks < text.chars().count() {
        frame.push(TYPEWRITER_CURSOR);
    }
    frame
}

fn session_config(launch_params: &Value) -> SessionConfig {
    SessionConfig::from_launch_params(launch_params).unwrap_or_else(|err| {
        logging::warn!("{err}; falling back to default terminal config");
        SessionConfig::default()
    })
}

/// Reactive view of one [`Session`] plus the effect executor for its transitions.
#[derive(Clone, Copy)]
struct TerminalHandle {
    session: StoredValue<Session>,
    entries: RwSignal<Vec<LogEntry>>,
    input: RwSignal<String>,
    screen: NodeRef<html::Div>,
}

impl TerminalHandle {
    fn new(config: SessionConfig) -> Self {
        Self {
            session: store_value(Session::new(config)),
            entries: create_rw_signal(Vec::new()),
            input: create_rw_signal(String::new()),
            screen: create_node_ref(),
        }
    }

    /// Applies one session transition and publishes the new state. Returns the effects to run.
    fn publish(
        self,
        change: impl FnOnce(&mut Session) -> Vec<SessionEffect>,
    ) -> Option<Vec<SessionEffect>> {
        let (effects, entries, input) = self.session.try_update_value(|session| {
            let effects = change(session);
            (
                effects,
                session.entries().to_vec(),
                session.input().to_string(),
            )
        })?;
        self.entries.set(entries);
        self.input.set(input);
        Some(effects)
    }

    /// Publishes one session transition and runs its effects.
    fn transition(self, change: impl FnOnce(&mut Session) -> Vec<SessionEffect>) {
        let Some(effects) = self.publish(change) else {
            logging::warn!("terminal session disposed before transition");
            return;
        };
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn edit(self, text: String) {
        self.session
            .update_value(|session| session.set_input(text.clone()));
        self.input.set(text);
    }

    fn run_effect(self, effect: SessionEffect) {
        match effect {
            SessionEffect::ScrollToBottom => {
                let screen = self.screen;
                request_animation_frame(move || {
                    if let Some(screen) = screen.get_untracked() {
                        screen.set_scroll_top(screen.scroll_height());
                    }
                });
            }
            SessionEffect::Schedule { task, delay_ms } => set_timeout(
                move || self.transition(|session| session.complete_task(task)),
                Duration::from_millis(delay_ms.into()),
            ),
        }
    }
}

fn focus(input: NodeRef<html::Input>) {
    if let Some(input) = input.get_untracked() {
        let _ = input.focus();
    }
}

#[component]
/// Interactive terminal window.
///
/// `launch_params` is decoded into a [`SessionConfig`]; malformed params fall back to defaults.
pub fn TerminalApp(
    /// Session configuration overrides (prompt identity, banner, timing).
    #[prop(optional)]
    launch_params: Value,
) -> impl IntoView {
    let handle = TerminalHandle::new(session_config(&launch_params));
    let (title, prompt, typewriter_interval_ms) = handle.session.with_value(|session| {
        let config = session.config();
        (
            format!("{}@{}: {}", config.user, config.host, session.cwd()),
            session.prompt(),
            config.typewriter_interval_ms,
        )
    });
    let screen = handle.screen;
    let input_ref = create_node_ref::<html::Input>();

    handle.transition(Session::boot);
    input_ref.on_load(|input| {
        let _ = input.focus();
    });

    let konami = store_value(KonamiTracker::default());
    let konami_listener = window_event_listener(ev::keydown, move |ev| {
        let code = ev.code();
        if konami
            .try_update_value(|tracker| tracker.observe(&code))
            .unwrap_or(false)
        {
            logging::log!("{KONAMI_MESSAGE}");
        }
    });
    on_cleanup(move || konami_listener.remove());

    view! {
        <div class="terminal" on:click=move |_| focus(input_ref)>
            <div class="terminal-header">
                <span class="terminal-button close"></span>
                <span class="terminal-button minimize"></span>
                <span class="terminal-button maximize"></span>
                <span class="terminal-title">{title}</span>
            </div>

            <div class="terminal-body" node_ref=screen role="log" aria-live="polite">
                <For each=move || handle.entries.get() key=|entry| entry.id let:entry>
                    {render_entry(entry, typewriter_interval_ms)}
                </For>

                <div class="input-line">
                    <span class="prompt">{prompt}</span>
                    <input
                        node_ref=input_ref
                        class="terminal-input"
                        type="text"
                        prop:value=move || handle.input.get()
                        on:input=move |ev| handle.edit(event_target_value(&ev))
                        on:keydown=move |ev: KeyboardEvent| {
                            let Some(key) = input_key(&ev.key()) else {
                                return;
                            };
                            if key.suppresses_default() {
                                ev.prevent_default();
                            }
                            handle.transition(key.change());
                        }
                        autocomplete="off"
                        spellcheck="false"
                        aria-label="Terminal command"
                    />
                </div>
            </div>
        </div>
    }
}

fn render_entry(entry: LogEntry, typewriter_interval_ms: u32) -> View {
    let class = entry.css_class();
    let LogEntry { kind, markup, .. } = entry;
    match kind {
        EntryKind::Banner => view! {
            <TypewriterLine text=markup interval_ms=typewriter_interval_ms />
        }
        .into_view(),
        EntryKind::Input | EntryKind::Output => {
            view! { <div class=class inner_html=markup></div> }.into_view()
        }
    }
}

#[component]
/// Plain text revealed one character per `interval_ms`.
fn TypewriterLine(text: String, interval_ms: u32) -> impl IntoView {
    let total = text.chars().count();
    let ticks = create_rw_signal(0usize);
    let interval = store_value(None::<IntervalHandle>);
    let stop = move || {
        interval.try_update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
    };

    match set_interval_with_handle(
        move || {
            ticks.update(|ticks| *ticks += 1);
            if ticks.get_untracked() >= total {
                stop();
            }
        },
        Duration::from_millis(interval_ms.into()),
    ) {
        Ok(handle) => interval.set_value(Some(handle)),
        Err(err) => {
            logging::warn!("typewriter interval failed: {err:?}");
            ticks.set(total);
        }
    }
    on_cleanup(stop);

    view! { <div class="response typing">{move || typewriter_frame(&text, ticks.get())}</div> }
}

#[component]
/// Decorative ticker tape, refreshed every ten seconds.
pub fn PortfolioTicker() -> impl IntoView {
    let rng = store_value(SmallRng::seed_from_u64(SystemClock.now_ms()));
    let quotes = create_rw_signal(Vec::new());
    let refresh = move || {
        if let Some(next) = rng.try_update_value(|rng| quote_all(rng)) {
            quotes.set(next);
        }
    };

    refresh();
    if let Ok(interval) =
        set_interval_with_handle(refresh, Duration::from_millis(TICKER_REFRESH_MS))
    {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="ticker" id="ticker" aria-hidden="true">
            {move || {
                quotes
                    .get()
                    .into_iter()
                    .map(|quote| {
                        let markup = quote.markup();
                        view! { <span class="ticker-item" inner_html=markup></span> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn only_enter_and_vertical_arrows_are_bound() {
        assert_eq!(input_key("Enter"), Some(InputKey::Submit));
        assert_eq!(input_key("ArrowUp"), Some(InputKey::RecallPrevious));
        assert_eq!(input_key("ArrowDown"), Some(InputKey::RecallNext));
        for key in ["ArrowLeft", "Tab", "Escape", "a", "enter"] {
            assert_eq!(input_key(key), None, "{key}");
        }
    }

    #[test]
    fn bound_keys_drive_the_session_and_mirror_its_state() {
        let _ = leptos::create_runtime();
        let handle = TerminalHandle::new(SessionConfig {
            boot_banner: None,
            ..SessionConfig::default()
        });

        handle.edit("whoami".to_string());
        assert_eq!(handle.session.with_value(|session| session.input().to_string()), "whoami");

        let effects = handle
            .publish(InputKey::Submit.change())
            .expect("live session");
        assert_eq!(effects, vec![SessionEffect::ScrollToBottom]);
        assert_eq!(handle.entries.get_untracked().len(), 3);
        assert_eq!(handle.entries.get_untracked()[0].kind, EntryKind::Input);
        assert_eq!(handle.input.get_untracked(), "");

        let effects = handle
            .publish(InputKey::RecallPrevious.change())
            .expect("live session");
        assert!(effects.is_empty());
        assert_eq!(handle.input.get_untracked(), "whoami");

        handle
            .publish(InputKey::RecallNext.change())
            .expect("live session");
        assert_eq!(handle.input.get_untracked(), "");
        assert_eq!(handle.entries.get_untracked().len(), 3);

    }

    #[test]
    fn only_arrows_suppress_the_default_action() {
        assert!(!InputKey::Submit.suppresses_default());
        assert!(InputKey::RecallPrevious.suppresses_default());
        assert!(InputKey::RecallNext.suppresses_default());
    }

    #[test]
    fn typewriter_frame_counts_characters_and_drops_cursor_when_done() {
        let banner = "System initialized successfully! 🚀";
        assert_eq!(typewriter_frame(banner, 0), "|");
        assert_eq!(typewriter_frame(banner, 6), "System|");
        assert_eq!(typewriter_frame(banner, banner.chars().count()), banner);
        assert_eq!(typewriter_frame(banner, 1_000), banner);
    }

    #[test]
    fn malformed_launch_params_fall_back_to_defaults() {
        assert_eq!(
            session_config(&json!({ "user": 42 })),
            SessionConfig::default()
        );
        assert_eq!(session_config(&json!({ "user": "ada" })).user, "ada");
    }
}
