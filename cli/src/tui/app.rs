use std::fs;
use std::path::PathBuf;

use roi_ledger_core::{Ledger, SeriesRepository};

use crate::format::format_number;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Tests,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Adding(Field),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

/// One text field of the add-entry form.
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    pub value: String,
    pub cursor_position: usize,
}

impl TextInput {
    pub fn insert(&mut self, c: char) {
        let byte_index = self.byte_index(self.cursor_position);
        self.value.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete(&mut self) {
        if self.cursor_position > 0 {
            let byte_index = self.byte_index(self.cursor_position - 1);
            self.value.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_position < self.value.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_position = 0;
    }

    /// Text left of the cursor, for placing the terminal cursor.
    pub fn before_cursor(&self) -> &str {
        &self.value[..self.byte_index(self.cursor_position)]
    }

    fn byte_index(&self, chars: usize) -> usize {
        self.value.chars().take(chars).map(|c| c.len_utf8()).sum()
    }
}

pub struct App<R: SeriesRepository> {
    pub ledger: Ledger<R>,
    pub input_mode: InputMode,
    pub tests_input: TextInput,
    pub time_input: TextInput,
    pub status: Option<StatusLine>,
    pub export_path: PathBuf,
}

impl<R: SeriesRepository> App<R> {
    pub fn new(ledger: Ledger<R>, export_path: PathBuf) -> Self {
        App {
            ledger,
            input_mode: InputMode::Normal,
            tests_input: TextInput::default(),
            time_input: TextInput::default(),
            status: None,
            export_path,
        }
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding(Field::Tests);
        self.status = None;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn next_field(&mut self) {
        if let InputMode::Adding(field) = self.input_mode {
            self.input_mode = InputMode::Adding(match field {
                Field::Tests => Field::Time,
                Field::Time => Field::Tests,
            });
        }
    }

    pub fn active_input(&mut self) -> Option<&mut TextInput> {
        match self.input_mode {
            InputMode::Adding(Field::Tests) => Some(&mut self.tests_input),
            InputMode::Adding(Field::Time) => Some(&mut self.time_input),
            InputMode::Normal => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(input) = self.active_input() {
            input.insert(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(input) = self.active_input() {
            input.delete();
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(input) = self.active_input() {
            input.move_left();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(input) = self.active_input() {
            input.move_right();
        }
    }

    /// Enter on the first field moves on; on the second it records the entry.
    /// Rejected input keeps the form open with both values intact.
    pub fn submit(&mut self) {
        if self.input_mode == InputMode::Adding(Field::Tests) {
            self.next_field();
            return;
        }

        let result = self
            .ledger
            .submit(&self.tests_input.value, &self.time_input.value)
            .map(|p| {
                format!(
                    "Added {}: {} tests, {} hours saved",
                    p.month,
                    p.tests,
                    format_number(p.hours_saved)
                )
            });

        match result {
            Ok(text) => {
                self.status = Some(StatusLine { text, is_error: false });
                self.tests_input.clear();
                self.time_input.clear();
                self.exit_input_mode();
            }
            Err(e) => {
                self.status = Some(StatusLine { text: e.to_string(), is_error: true });
            }
        }
    }

    pub fn export(&mut self) {
        let result = self
            .ledger
            .export_series()
            .map_err(anyhow::Error::from)
            .and_then(|bytes| fs::write(&self.export_path, bytes).map_err(anyhow::Error::from));

        self.status = Some(match result {
            Ok(()) => StatusLine {
                text: format!("Exported to {}", self.export_path.display()),
                is_error: false,
            },
            Err(e) => StatusLine {
                text: format!("Export failed: {}", e),
                is_error: true,
            },
        });
    }
}
