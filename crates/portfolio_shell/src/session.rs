//! The per-page terminal session: input buffer, history, log and delayed output.

use std::collections::BTreeMap;

use leptos::logging;
use rand::{rngs::SmallRng, RngCore, SeedableRng};
use terminal_contract::{EntryKind, LogEntry, SessionEffect, TaskId};

use crate::{
    clock::{Clock, SystemClock},
    commands,
    config::SessionConfig,
    error::DispatchError,
    history::CommandHistory,
    log::SessionLog,
    markup,
    registry::{CommandContext, CommandRegistry, HandlerOutput},
};

const HELP_HINT: &str = r#"Type "help" to see available commands."#;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingOutput {
    kind: EntryKind,
    lines: Vec<String>,
}

/// All mutable terminal state for one page view.
///
/// Transitions return [`SessionEffect`]s; the host scrolls on `ScrollToBottom` and calls
/// [`Session::complete_task`] when a `Schedule` timer fires.
pub struct Session {
    config: SessionConfig,
    registry: CommandRegistry,
    history: CommandHistory,
    log: SessionLog,
    input: String,
    cwd: String,
    pending: BTreeMap<TaskId, PendingOutput>,
    next_task: u64,
    rng: Box<dyn RngCore>,
    clock: Box<dyn Clock>,
}

impl Session {
    /// Creates a session with the built-in commands, the host clock and a time-seeded RNG.
    pub fn new(config: SessionConfig) -> Self {
        let clock = SystemClock;
        let rng = SmallRng::seed_from_u64(clock.now_ms());
        Self::with_parts(
            config,
            commands::portfolio_registry(),
            Box::new(rng),
            Box::new(clock),
        )
    }

    /// Creates a session from explicit parts.
    pub fn with_parts(
        config: SessionConfig,
        registry: CommandRegistry,
        rng: Box<dyn RngCore>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            cwd: config.cwd.clone(),
            config,
            registry,
            history: CommandHistory::default(),
            log: SessionLog::default(),
            input: String::new(),
            pending: BTreeMap::new(),
            next_task: 0,
            rng,
            clock,
        }
    }

    /// Replaces the randomness source.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Replaces the clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Schedules the startup banner, if one is configured.
    pub fn boot(&mut self) -> Vec<SessionEffect> {
        let Some(banner) = self.config.boot_banner.clone() else {
            return Vec::new();
        };
        let delay_ms = self.config.boot_delay_ms;
        vec![self.schedule(EntryKind::Banner, delay_ms, vec![banner])]
    }

    /// Live input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the live input buffer.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submits the live input buffer.
    pub fn submit_input(&mut self) -> Vec<SessionEffect> {
        let line = std::mem::take(&mut self.input);
        self.submit(&line)
    }

    /// Echoes, records and dispatches one line.
    ///
    /// Blank lines only clear the input buffer. Everything else appends exactly one input entry
    /// before any output, then runs the matching handler or reports the miss.
    pub fn submit(&mut self, raw_line: &str) -> Vec<SessionEffect> {
        self.input.clear();
        let line = raw_line.trim();
        if line.is_empty() {
            return Vec::new();
        }

        let echo = format!(
            r#"<span class="prompt">{}</span> {}"#,
            markup::escape_html(&self.prompt()),
            markup::escape_html(line)
        );
        self.log.push(EntryKind::Input, echo);
        self.history.push(line);

        let mut tokens = line.split_whitespace();
        let command = tokens.next().unwrap_or_default().to_lowercase();
        let args = tokens.map(str::to_string).collect::<Vec<_>>();

        let resolved = self.registry.resolve(&command).and_then(|registered| {
            registered.check_arity(&args)?;
            Ok(registered.handler)
        });
        let output = match resolved {
            Ok(handler) => self.run(&args, handler),
            Err(err) => self.report(err),
        };
        self.apply(output)
    }

    /// Recalls the previous history entry into the input buffer.
    pub fn recall_previous(&mut self) {
        if let Some(entry) = self.history.previous() {
            self.input = entry.to_string();
        }
    }

    /// Recalls the next history entry, or empties the input past the newest one.
    pub fn recall_next(&mut self) {
        match self.history.next() {
            Some(entry) => self.input = entry.to_string(),
            None => self.input.clear(),
        }
    }

    /// Empties the log (history is kept) and appends a confirmation.
    pub fn clear(&mut self) -> Vec<SessionEffect> {
        let output = self.run(&[], commands::clear);
        self.apply(output)
    }

    /// Appends the output held by `task`. Unknown or already completed tasks are ignored.
    pub fn complete_task(&mut self, task: TaskId) -> Vec<SessionEffect> {
        let Some(pending) = self.pending.remove(&task) else {
            logging::debug_warn!("delayed output {task:?} was already dropped");
            return Vec::new();
        };
        for markup in pending.lines {
            self.log.push(pending.kind, markup);
        }
        vec![SessionEffect::ScrollToBottom]
    }

    /// Prompt prefix for the current working path.
    pub fn prompt(&self) -> String {
        self.config.prompt(&self.cwd)
    }

    /// Log entries in display order.
    pub fn entries(&self) -> &[LogEntry] {
        self.log.entries()
    }

    /// Submitted-line history.
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Cosmetic working path.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of delayed outputs still waiting for their timer.
    pub fn pending_tasks(&self) -> usize {
        self.pending.len()
    }

    fn run(&mut self, args: &[String], body: impl FnOnce(&mut CommandContext<'_>)) -> HandlerOutput {
        let mut context = CommandContext::new(
            args,
            &self.cwd,
            &self.config,
            &self.registry,
            self.rng.as_mut(),
            self.clock.as_ref(),
        );
        body(&mut context);
        context.into_output()
    }

    fn report(&mut self, err: DispatchError) -> HandlerOutput {
        let message = markup::escape_html(&err.to_string());
        match err {
            DispatchError::UnknownCommand(_) => self.run(&[], |ctx| {
                ctx.print(message);
                ctx.flavor_comment();
                ctx.print(HELP_HINT);
            }),
            DispatchError::MissingArguments { .. } => HandlerOutput {
                lines: vec![message],
                ..HandlerOutput::default()
            },
        }
    }

    fn apply(&mut self, output: HandlerOutput) -> Vec<SessionEffect> {
        if output.clear_log {
            self.reset_log();
        }
        for markup in output.lines {
            self.log.push(EntryKind::Output, markup);
        }
        let mut effects = vec![SessionEffect::ScrollToBottom];
        for delayed in output.delayed {
            effects.push(self.schedule(EntryKind::Output, delayed.delay_ms, delayed.lines));
        }
        effects
    }

    fn reset_log(&mut self) {
        self.log.clear();
        if self.config.cancel_pending_on_clear {
            self.pending.clear();
        }
    }

    fn schedule(&mut self, kind: EntryKind, delay_ms: u32, lines: Vec<String>) -> SessionEffect {
        self.next_task = self.next_task.saturating_add(1);
        let task = TaskId(self.next_task);
        self.pending.insert(task, PendingOutput { kind, lines });
        SessionEffect::Schedule { task, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        clock::tests::FixedClock,
        commands::CLEARED_MESSAGE,
        content::{FLAVOR_COMMENTS, FORECASTS, JOKES, SUDO_RESPONSES, WHOAMI_RESPONSES},
    };

    fn session_with(config: SessionConfig) -> Session {
        Session::with_parts(
            config,
            commands::portfolio_registry(),
            Box::new(SmallRng::seed_from_u64(42)),
            Box::new(FixedClock),
        )
    }

    fn session() -> Session {
        session_with(SessionConfig::default())
    }

    fn markups(session: &Session) -> Vec<String> {
        session
            .entries()
            .iter()
            .map(|entry| entry.markup.clone())
            .collect()
    }

    fn scheduled(effects: &[SessionEffect]) -> Vec<TaskId> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                SessionEffect::Schedule { task, .. } => Some(*task),
                SessionEffect::ScrollToBottom => None,
            })
            .collect()
    }

    fn run_delayed(session: &mut Session, effects: &[SessionEffect]) {
        for task in scheduled(effects) {
            session.complete_task(task);
        }
    }

    #[test]
    fn submit_echoes_once_before_output_and_clears_input() {
        let mut session = session();
        session.set_input("whoami");
        let effects = session.submit_input();

        let entries = session.entries();
        assert_eq!(entries[0].kind, EntryKind::Input);
        assert!(entries[0].markup.contains("jonathan@portfolio:~$"));
        assert!(entries[0].markup.ends_with(" whoami"));
        assert!(entries[1..]
            .iter()
            .all(|entry| entry.kind == EntryKind::Output));
        assert_eq!(entries.len(), 3);
        assert_eq!(session.input(), "");
        assert_eq!(effects, vec![SessionEffect::ScrollToBottom]);
    }

    #[test]
    fn blank_submissions_are_noops() {
        let mut session = session();
        for line in ["", "   ", "\t \n"] {
            session.set_input(line);
            assert!(session.submit_input().is_empty());
        }
        assert!(session.entries().is_empty());
        assert!(session.history().is_empty());
        assert_eq!(session.input(), "");
    }

    #[test]
    fn cursor_tracks_submission_count() {
        let mut session = session();
        for (n, line) in ["help", "ls", "help", "pwd"].into_iter().enumerate() {
            session.submit(line);
            assert_eq!(session.history().cursor(), n + 1);
        }
        assert_eq!(session.history().len(), 4);
    }

    #[test]
    fn recall_walks_history_without_mutating_it() {
        let mut session = session();
        session.submit("help");
        session.submit("cat about.txt");
        let before = session.history().clone();

        session.recall_previous();
        assert_eq!(session.input(), "cat about.txt");
        session.recall_previous();
        assert_eq!(session.input(), "help");
        session.recall_previous();
        assert_eq!(session.input(), "help");
        assert_eq!(session.history().cursor(), 0);

        session.recall_next();
        assert_eq!(session.input(), "cat about.txt");
        session.recall_next();
        assert_eq!(session.input(), "");
        assert_eq!(session.history().cursor(), 2);

        assert_eq!(session.history().entries(), before.entries());
    }

    #[test]
    fn recall_next_past_end_keeps_input_empty() {
        let mut session = session();
        session.submit("ls");
        session.recall_next();
        assert_eq!(session.input(), "");
        assert_eq!(session.history().cursor(), 1);
        session.set_input("draft");
        session.recall_next();
        assert_eq!(session.input(), "");
        assert_eq!(session.history().cursor(), 1);
    }

    #[test]
    fn clear_empties_log_but_keeps_history() {
        let mut session = session();
        session.submit("help");
        session.submit("whoami");
        session.clear();

        let markups = markups(&session);
        assert_eq!(markups.len(), 2);
        assert_eq!(markups[0], CLEARED_MESSAGE);
        assert!(FLAVOR_COMMENTS
            .iter()
            .any(|comment| markups[1].contains(comment)));
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn clear_command_wipes_its_own_echo() {
        let mut session = session();
        session.submit("whoami");
        session.submit("CLEAR");
        let entries = session.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| entry.kind == EntryKind::Output));
        assert_eq!(session.history().entries(), ["whoami", "CLEAR"]);
    }

    #[test]
    fn unknown_command_reports_and_points_to_help() {
        let mut session = session();
        session.submit("frobnicate --now");
        let markups = markups(&session);
        assert_eq!(markups.len(), 4);
        assert_eq!(markups[1], "Command not found: frobnicate");
        assert!(markups[2].starts_with(r#"<span class="comment">"#));
        assert_eq!(markups[3], HELP_HINT);
        assert!(markups[3].contains("help"));
    }

    #[test]
    fn unknown_command_token_is_case_folded_and_escaped() {
        let mut session = session();
        session.submit("<B>");
        let markups = markups(&session);
        assert!(markups[0].contains("&lt;B&gt;"));
        assert_eq!(markups[1], "Command not found: &lt;b&gt;");
    }

    #[test]
    fn commands_match_case_insensitively() {
        let mut session = session();
        session.submit("PwD");
        assert_eq!(markups(&session)[1], "/home/jonathan");
    }

    #[test]
    fn cat_reads_virtual_files() {
        let mut session = session();
        session.submit("cat nonexistent.txt");
        session.submit("cat coffee_recipes.txt");
        let markups = markups(&session);
        assert_eq!(markups[1], "cat: nonexistent.txt: No such file or directory");
        assert_eq!(
            markups[4],
            "CLASSIFIED: Level 5 Coffee Security Clearance Required ☕🔒"
        );
    }

    #[test]
    fn argument_commands_print_usage_when_called_bare() {
        let mut session = session();
        session.submit("cat");
        session.submit("sudo");
        let markups = markups(&session);
        assert_eq!(markups[1], "Usage: cat &lt;filename&gt;");
        assert_eq!(markups[3], "sudo: no command specified");
        assert_eq!(markups.len(), 4);
    }

    #[test]
    fn delayed_output_lands_only_when_task_completes() {
        let mut session = session();
        let effects = session.submit("about");
        let tasks = scheduled(&effects);
        assert_eq!(tasks.len(), 1);
        assert_eq!(effects, vec![
            SessionEffect::ScrollToBottom,
            SessionEffect::Schedule {
                task: tasks[0],
                delay_ms: 1500,
            },
        ]);
        assert_eq!(session.entries().len(), 3);

        // Input stays responsive while the task is pending.
        session.submit("pwd");
        assert_eq!(session.entries().len(), 5);

        assert_eq!(session.complete_task(tasks[0]), vec![SessionEffect::ScrollToBottom]);
        assert!(session.entries()[5].markup.starts_with("About Jonathan:"));
        assert!(session.complete_task(tasks[0]).is_empty());
        assert_eq!(session.pending_tasks(), 0);
    }

    #[test]
    fn delayed_output_survives_clear_by_default() {
        let mut session = session();
        let effects = session.submit("ls");
        session.clear();
        run_delayed(&mut session, &effects);
        assert_eq!(session.entries().len(), 3);
        assert!(session.entries()[2].markup.contains("coffee_recipes.txt"));
    }

    #[test]
    fn clear_can_drop_pending_output() {
        let mut session = session_with(SessionConfig {
            cancel_pending_on_clear: true,
            ..SessionConfig::default()
        });
        let effects = session.submit("ls");
        session.clear();
        assert_eq!(session.pending_tasks(), 0);
        run_delayed(&mut session, &effects);
        assert_eq!(session.entries().len(), 2);
    }

    fn owned(set: &[&str]) -> Vec<String> {
        set.iter().map(|text| text.to_string()).collect()
    }

    #[test]
    fn random_picks_cover_their_candidate_sets_and_nothing_else() {
        let flavor = FLAVOR_COMMENTS
            .iter()
            .map(|text| markup::comment(text))
            .collect::<Vec<_>>();
        // (line, index of the random entry among the entries it appends, candidates)
        let cases = [
            ("joke", 2, owned(&JOKES[..])),
            ("whoami", 1, owned(&WHOAMI_RESPONSES[..])),
            ("weather", 2, owned(&FORECASTS[..])),
            ("sudo make coffee", 1, owned(&SUDO_RESPONSES[..])),
            ("frobnicate", 2, flavor),
        ];

        let mut session = session();
        for (line, index, candidates) in cases {
            let mut seen = BTreeSet::new();
            for _ in 0..500 {
                let start = session.entries().len();
                let effects = session.submit(line);
                run_delayed(&mut session, &effects);
                let pick = session.entries()[start + index].markup.clone();
                assert!(candidates.contains(&pick), "{line}: unexpected {pick}");
                seen.insert(pick);
            }
            assert_eq!(seen.len(), candidates.len(), "{line} missed a candidate");
            session.clear();
        }
    }

    #[test]
    fn matrix_renders_five_rows_of_bits() {
        let mut session = session();
        let effects = session.submit("matrix");
        run_delayed(&mut session, &effects);
        let block = session
            .entries()
            .iter()
            .find(|entry| entry.markup.starts_with("<pre"))
            .expect("matrix block")
            .markup
            .clone();
        let inner = block
            .trim_start_matches(r#"<pre class="matrix">"#)
            .trim_end_matches("</pre>");
        let rows = inner.lines().collect::<Vec<_>>();
        assert_eq!(rows.len(), 5);
        assert!(rows
            .iter()
            .all(|row| row.len() == 50 && row.chars().all(|ch| ch == '0' || ch == '1')));
    }

    #[test]
    fn date_uses_injected_clock() {
        let mut session = session();
        session.submit("date");
        assert_eq!(markups(&session)[1], FixedClock.now_text());
    }

    #[test]
    fn help_lists_public_commands_only() {
        let mut session = session();
        session.submit("help");
        let help = &markups(&session)[1];
        assert!(help.contains(r#"<span class="link">about</span>      - Learn more about me"#));
        assert!(help.contains(r#"<span class="link">matrix</span>"#));
        assert!(!help.contains(r#"<span class="link">sudo</span>"#));
        assert!(!help.contains(r#"<span class="link">weather</span>"#));
    }

    #[test]
    fn help_rows_follow_display_order() {
        let mut session = session();
        session.submit("help");
        let help = markups(&session)[1].clone();
        let listed = help
            .split(r#"<span class="link">"#)
            .skip(1)
            .filter_map(|row| row.split("</span>").next())
            .collect::<Vec<_>>();
        assert_eq!(listed, vec![
            "about",
            "skills",
            "experience",
            "projects",
            "education",
            "contact",
            "links",
            "clear",
            "whoami",
            "ls",
            "cat",
            "pwd",
            "date",
            "coffee",
            "joke",
            "matrix",
        ]);
    }

    #[test]
    fn cwd_and_config_come_from_launch_config() {
        let session = session_with(SessionConfig {
            cwd: "~/projects".to_string(),
            ..SessionConfig::default()
        });
        assert_eq!(session.cwd(), "~/projects");
        assert_eq!(session.config().home, "/home/jonathan");
        assert_eq!(session.prompt(), "jonathan@portfolio:~/projects$");
    }

    #[test]
    fn boot_schedules_banner_entry() {
        let mut session = session();
        let effects = session.boot();
        assert_eq!(effects.len(), 1);
        assert!(matches!(
            effects[0],
            SessionEffect::Schedule { delay_ms: 1000, .. }
        ));
        run_delayed(&mut session, &effects);
        assert_eq!(session.entries()[0].kind, EntryKind::Banner);
        assert_eq!(
            session.entries()[0].markup,
            crate::config::DEFAULT_BOOT_BANNER
        );

        let mut quiet = session_with(SessionConfig {
            boot_banner: None,
            ..SessionConfig::default()
        });
        assert!(quiet.boot().is_empty());
    }
}
