use crate::classify::{
    merge_classifications, save_classification, split_code_path, ClassificationStore,
};
use crate::model::{
    AggregateGroup, ClassificationRecord, ClassifiedRow, GroupKey, TakeoffModel,
};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Dashboard,
    RowDetail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Categories,
    Rows,
}

/// Which classification field the input buffer is editing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditField {
    CodePath,
    CustomName,
}

pub struct App {
    pub model_name: String,
    pub scope_id: String,
    pub total_elements: usize,
    store: Box<dyn ClassificationStore>,
    groups: HashMap<GroupKey, AggregateGroup>,
    pub rows: Vec<ClassifiedRow>,
    pub categories: Vec<String>,
    pub view: View,
    pub focus_panel: FocusPanel,
    pub selected_category: usize, // 0 = "All"
    pub selected_row: usize,
    pub draft: Option<ClassificationRecord>,
    pub edit: Option<EditField>,
    pub input: String,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(
        model: &TakeoffModel,
        groups: HashMap<GroupKey, AggregateGroup>,
        store: impl ClassificationStore + 'static,
    ) -> Self {
        let mut app = Self {
            model_name: model.name.clone(),
            scope_id: model.scope_id.clone(),
            total_elements: model.total_elements(),
            store: Box::new(store),
            groups,
            rows: Vec::new(),
            categories: Vec::new(),
            view: View::Dashboard,
            focus_panel: FocusPanel::Rows,
            selected_category: 0, // 0 = "All"
            selected_row: 0,
            draft: None,
            edit: None,
            input: String::new(),
            status: None,
            should_quit: false,
        };
        app.refresh_rows();
        app
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => super::dashboard::draw_dashboard(frame, self),
            View::RowDetail => super::dashboard::draw_row_detail(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.view {
                View::Dashboard => self.handle_dashboard_keys(key.code),
                View::RowDetail => self.handle_detail_keys(key.code),
            }
        }
        Ok(())
    }

    /// Rebuild the merged table from current store state.
    fn refresh_rows(&mut self) {
        match self.store.list(&self.scope_id) {
            Ok(records) => {
                self.rows = merge_classifications(&self.groups, &records);
            }
            Err(e) => {
                self.status = Some(format!("store error: {e}"));
            }
        }

        let mut categories: Vec<String> =
            self.rows.iter().map(|r| r.category.clone()).collect();
        categories.sort();
        categories.dedup();
        self.categories = categories;

        if self.selected_category > self.categories.len() {
            self.selected_category = 0;
        }
        let count = self.filtered_rows().len();
        if self.selected_row >= count {
            self.selected_row = count.saturating_sub(1);
        }
    }

    fn handle_dashboard_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Left | KeyCode::Char('h') => self.focus_panel = FocusPanel::Categories,
            KeyCode::Right | KeyCode::Char('l') => self.focus_panel = FocusPanel::Rows,
            KeyCode::Enter => self.enter_row_detail(),
            _ => {}
        }
    }

    fn navigate_up(&mut self) {
        match self.focus_panel {
            FocusPanel::Categories => self.previous_category(),
            FocusPanel::Rows => {
                if self.selected_row > 0 {
                    self.selected_row -= 1;
                }
            }
        }
    }

    fn navigate_down(&mut self) {
        match self.focus_panel {
            FocusPanel::Categories => self.next_category(),
            FocusPanel::Rows => {
                if self.selected_row < self.filtered_rows().len().saturating_sub(1) {
                    self.selected_row += 1;
                }
            }
        }
    }

    fn previous_category(&mut self) {
        if self.selected_category > 0 {
            self.selected_category -= 1;
            self.selected_row = 0;
        }
    }

    fn next_category(&mut self) {
        // 0 = "All", then categories
        if self.selected_category < self.categories.len() {
            self.selected_category += 1;
            self.selected_row = 0;
        }
    }

    fn enter_row_detail(&mut self) {
        if self.focus_panel != FocusPanel::Rows {
            return;
        }
        let Some(row) = self.selected_row_data() else {
            return;
        };
        let category = row.category.clone();
        let type_name = row.type_name.clone();

        let draft = match self.store.get(&self.scope_id, &category, &type_name) {
            Ok(Some(existing)) => existing,
            Ok(None) => ClassificationRecord::new(&self.scope_id, &category, &type_name),
            Err(e) => {
                self.status = Some(format!("store error: {e}"));
                return;
            }
        };

        self.draft = Some(draft);
        self.view = View::RowDetail;
        self.edit = None;
        self.input.clear();
        self.status = None;
    }

    fn handle_detail_keys(&mut self, code: KeyCode) {
        if self.edit.is_some() {
            self.handle_edit_keys(code);
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => {
                self.view = View::Dashboard;
                self.draft = None;
            }
            KeyCode::Char('u') => self.cycle_unit(),
            KeyCode::Char('e') => self.start_code_edit(),
            KeyCode::Char('n') => self.start_name_edit(),
            KeyCode::Char('s') => self.save_draft(),
            _ => {}
        }
    }

    fn handle_edit_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.edit = None;
                self.input.clear();
            }
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn cycle_unit(&mut self) {
        if let Some(draft) = &mut self.draft {
            draft.preferred_unit = draft.preferred_unit.next();
        }
    }

    fn start_code_edit(&mut self) {
        let Some(draft) = &self.draft else { return };
        self.input = draft
            .subsubchapter_code
            .clone()
            .or_else(|| draft.subchapter_code.clone())
            .or_else(|| draft.chapter_code.clone())
            .unwrap_or_default();
        self.edit = Some(EditField::CodePath);
    }

    fn start_name_edit(&mut self) {
        let Some(draft) = &self.draft else { return };
        self.input = draft.custom_name.clone().unwrap_or_default();
        self.edit = Some(EditField::CustomName);
    }

    fn commit_edit(&mut self) {
        let Some(field) = self.edit else { return };
        if let Some(draft) = &mut self.draft {
            match field {
                EditField::CodePath => {
                    let (chapter, subchapter, subsubchapter) = split_code_path(&self.input);
                    draft.chapter_code = chapter;
                    draft.subchapter_code = subchapter;
                    draft.subsubchapter_code = subsubchapter;
                }
                EditField::CustomName => {
                    let trimmed = self.input.trim();
                    draft.custom_name = if trimmed.is_empty() {
                        None
                    } else {
                        Some(trimmed.to_string())
                    };
                }
            }
        }
        self.edit = None;
        self.input.clear();
    }

    fn save_draft(&mut self) {
        let Some(draft) = self.draft.clone() else {
            return;
        };
        match save_classification(self.store.as_mut(), draft) {
            Ok(saved) => {
                self.status = Some(format!(
                    "Saved: code {} order {}",
                    saved.full_code.as_deref().unwrap_or("-"),
                    saved.display_order
                ));
                self.draft = Some(saved);
                self.refresh_rows();
            }
            Err(e) => {
                // surfaced, not retried; recovery is the user's call
                self.status = Some(format!("save failed: {e}"));
            }
        }
    }

    /// Rows filtered by the selected category.
    #[must_use]
    pub fn filtered_rows(&self) -> Vec<&ClassifiedRow> {
        if self.selected_category == 0 {
            // "All" - no filtering
            return self.rows.iter().collect();
        }

        let category = match self.categories.get(self.selected_category - 1) {
            Some(c) => c,
            None => return self.rows.iter().collect(),
        };

        self.rows
            .iter()
            .filter(|r| &r.category == category)
            .collect()
    }

    #[must_use]
    pub fn selected_row_data(&self) -> Option<&ClassifiedRow> {
        let filtered = self.filtered_rows();
        filtered.get(self.selected_row).copied()
    }

    /// Total instances across all groups in a category.
    #[must_use]
    pub fn category_instance_count(&self, category: &str) -> usize {
        self.rows
            .iter()
            .filter(|r| r.category == category)
            .map(|r| r.instance_count)
            .sum()
    }

    #[must_use]
    pub fn selected_category_name(&self) -> String {
        if self.selected_category == 0 {
            "All".to_string()
        } else {
            self.categories
                .get(self.selected_category - 1)
                .cloned()
                .unwrap_or_else(|| "-".to_string())
        }
    }
}
