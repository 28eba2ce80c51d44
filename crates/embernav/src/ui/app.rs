//! Event loop for the interactive picker.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::domain::model::RelatedCandidate;
use crate::infra::config::Config;
use crate::ui::components::candidate_list::{CandidateList, CandidateListState};

const TICK_RATE: Duration = Duration::from_millis(120);

/// Interactive picker over a list of related-file candidates.
///
/// Runs to a single resolution: the chosen candidate, or `None` when the user
/// cancels. Callers treat `None` exactly like an unclassified input path.
pub struct PickerApp {
    config: Config,
    state: CandidateListState,
    component: CandidateList,
}

impl PickerApp {
    pub fn new(config: Config, candidates: Vec<RelatedCandidate>) -> Self {
        Self {
            config,
            state: CandidateListState::new(candidates),
            component: CandidateList,
        }
    }

    /// Launch the terminal UI and block until a choice or cancellation.
    pub fn run(mut self) -> Result<Option<RelatedCandidate>> {
        if self.state.is_empty() {
            return Ok(None);
        }

        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to initialize terminal")?;
        terminal.hide_cursor().ok();

        let outcome = self.event_loop(&mut terminal);

        disable_raw_mode().ok();
        let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        outcome
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<Option<RelatedCandidate>> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(TICK_RATE)?
                && let Event::Key(key) = event::read()?
                && let Some(outcome) = self.handle_key(key)
            {
                return Ok(outcome.into_candidate(&self.state));
            }
        }
    }

    fn render(&self, frame: &mut Frame<'_>) {
        let area = frame.size();
        self.component
            .render(frame, area, &self.state, self.config.picker.show_hints());
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<KeyOutcome> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(KeyOutcome::Cancel);
        }

        let bindings = &self.config.keybindings;
        if key.code == KeyCode::Up || binding_matches(&bindings.up, key.code) {
            self.state.select_previous();
        } else if key.code == KeyCode::Down || binding_matches(&bindings.down, key.code) {
            self.state.select_next();
        } else if binding_matches(&bindings.select, key.code) {
            return Some(KeyOutcome::Select);
        } else if key.code == KeyCode::Char('q') || binding_matches(&bindings.cancel, key.code) {
            return Some(KeyOutcome::Cancel);
        }

        None
    }
}

enum KeyOutcome {
    Select,
    Cancel,
}

impl KeyOutcome {
    fn into_candidate(self, state: &CandidateListState) -> Option<RelatedCandidate> {
        match self {
            KeyOutcome::Select => state.selected_candidate().cloned(),
            KeyOutcome::Cancel => None,
        }
    }
}

/// Match a configured key name against a pressed key. Names are either a
/// single character or one of `enter`, `esc`, `space`, `up`, `down`.
fn binding_matches(binding: &str, code: KeyCode) -> bool {
    match code {
        KeyCode::Enter => binding.eq_ignore_ascii_case("enter"),
        KeyCode::Esc => binding.eq_ignore_ascii_case("esc"),
        KeyCode::Up => binding.eq_ignore_ascii_case("up"),
        KeyCode::Down => binding.eq_ignore_ascii_case("down"),
        KeyCode::Char(' ') => binding.eq_ignore_ascii_case("space"),
        KeyCode::Char(ch) => {
            let mut chars = binding.chars();
            chars.next() == Some(ch) && chars.next().is_none()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_bindings_match_their_keys() {
        assert!(binding_matches("enter", KeyCode::Enter));
        assert!(binding_matches("esc", KeyCode::Esc));
        assert!(binding_matches("space", KeyCode::Char(' ')));
        assert!(binding_matches("k", KeyCode::Char('k')));
    }

    #[test]
    fn mismatches_are_rejected() {
        assert!(!binding_matches("enter", KeyCode::Esc));
        assert!(!binding_matches("k", KeyCode::Char('j')));
        assert!(!binding_matches("kk", KeyCode::Char('k')));
    }
}
