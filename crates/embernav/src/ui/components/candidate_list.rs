//! Candidate list component and selection state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::domain::model::RelatedCandidate;

/// Maintains the navigable state of the candidate list.
#[derive(Debug, Default, Clone)]
pub struct CandidateListState {
    candidates: Vec<RelatedCandidate>,
    selected: usize,
}

impl CandidateListState {
    /// Construct state over the candidates to offer, preserving their order.
    pub fn new(candidates: Vec<RelatedCandidate>) -> Self {
        Self {
            candidates,
            selected: 0,
        }
    }

    /// Advance selection to the next candidate if possible.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.candidates.len() {
            self.selected += 1;
        }
    }

    /// Move selection to the previous candidate if possible.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Currently highlighted candidate, if any.
    pub fn selected_candidate(&self) -> Option<&RelatedCandidate> {
        self.candidates.get(self.selected)
    }

    /// Index of the highlighted candidate within the list.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Number of candidates offered.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether there is anything to pick from.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Iterate over the candidates in display order.
    pub fn candidates(&self) -> &[RelatedCandidate] {
        &self.candidates
    }

    fn label_width(&self) -> usize {
        self.candidates
            .iter()
            .map(|candidate| candidate.category.key().len())
            .max()
            .unwrap_or(0)
    }
}

/// Ratatui component responsible for rendering the candidate list.
#[derive(Debug, Default)]
pub struct CandidateList;

impl CandidateList {
    /// Render the picker to the provided frame.
    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        state: &CandidateListState,
        show_hints: bool,
    ) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(if show_hints {
                vec![Constraint::Min(3), Constraint::Length(1)]
            } else {
                vec![Constraint::Min(3)]
            })
            .split(area);

        let block = Block::default().title("Select File").borders(Borders::ALL);
        frame.render_widget(block.clone(), layout[0]);
        let inner = block.inner(layout[0]);

        let width = state.label_width();
        let items: Vec<ListItem> = state
            .candidates()
            .iter()
            .map(|candidate| {
                let line = Line::from(vec![
                    Span::styled(
                        format!("{:width$}", candidate.category.key(), width = width),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw("  "),
                    Span::raw(candidate.path.clone()),
                ]);
                ListItem::new(line)
            })
            .collect();

        let mut list_state = ListState::default();
        if !state.is_empty() {
            list_state.select(Some(state.selected_index()));
        }

        let list = List::new(items)
            .block(Block::default())
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        frame.render_stateful_widget(list, inner, &mut list_state);

        if show_hints {
            let hints = Paragraph::new(Line::from(vec![
                Span::styled("j/k", Style::default().fg(Color::Cyan)),
                Span::raw(" move · "),
                Span::styled("↵", Style::default().fg(Color::Cyan)),
                Span::raw(" open · "),
                Span::styled("esc", Style::default().fg(Color::Cyan)),
                Span::raw(" cancel"),
            ]))
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Gray));
            frame.render_widget(hints, layout[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::app::relate::related_files;

    #[test]
    fn selection_stays_within_bounds() {
        let mut state = CandidateListState::new(related_files("app/components/widget.js"));
        assert_eq!(state.len(), 2);

        state.select_previous();
        assert_eq!(state.selected_index(), 0);

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_index(), 1);
    }

    #[test]
    fn selected_candidate_follows_navigation() {
        let mut state = CandidateListState::new(related_files("app/routes/users/edit.js"));
        assert_eq!(
            state.selected_candidate().map(|c| c.path.as_str()),
            Some("app/controllers/users/edit.js")
        );

        state.select_next();
        assert_eq!(
            state.selected_candidate().map(|c| c.path.as_str()),
            Some("app/templates/users/edit.hbs")
        );
    }

    #[test]
    fn empty_state_has_no_selection() {
        let state = CandidateListState::new(Vec::new());
        assert!(state.is_empty());
        assert_eq!(state.selected_candidate(), None);
    }

    #[test]
    fn renders_candidate_list() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        let state = CandidateListState::new(related_files("app/components/widget.js"));
        let component = CandidateList;

        terminal
            .draw(|frame| {
                let area = frame.size();
                component.render(frame, area, &state, true);
            })
            .unwrap();
    }
}
