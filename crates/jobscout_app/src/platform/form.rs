use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use jobscout_core::Msg;
use tui_input::{Input, InputRequest};

use super::ui::constants::{FIELD_DESCRIPTION, FIELD_FULL_TIME, FIELD_LOCATION};

/// Which form control owns keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Location,
    FullTime,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Description => FormField::Location,
            FormField::Location => FormField::FullTime,
            FormField::FullTime => FormField::Description,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Description => FormField::FullTime,
            FormField::Location => FormField::Description,
            FormField::FullTime => FormField::Location,
        }
    }
}

/// What a keystroke amounted to.
pub enum FormOutcome {
    /// Send this message through the state machine.
    Dispatch(Msg),
    /// Consumed by the form (or irrelevant); nothing to dispatch.
    Handled,
    /// User asked to leave.
    Quit,
}

/// Search form state. The form owns widget-level editing only; the
/// canonical query lives in the core and every edit is reported as a
/// (field, value) pair.
pub struct SearchForm {
    pub description: Input,
    pub location: Input,
    pub full_time: bool,
    pub focus: FormField,
    dirty: bool,
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            description: Input::default(),
            location: Input::default(),
            full_time: false,
            focus: FormField::Description,
            dirty: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return FormOutcome::Quit;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                self.dirty = true;
                FormOutcome::Handled
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                self.dirty = true;
                FormOutcome::Handled
            }
            // Arrow keys belong to the focused text input, so paging gets
            // its own keys.
            KeyCode::PageUp => FormOutcome::Dispatch(Msg::PrevPageClicked),
            KeyCode::PageDown => FormOutcome::Dispatch(Msg::NextPageClicked),
            _ => self.edit_focused(key),
        }
    }

    fn edit_focused(&mut self, key: KeyEvent) -> FormOutcome {
        match self.focus {
            FormField::FullTime => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.full_time = !self.full_time;
                    self.dirty = true;
                    FormOutcome::Dispatch(Msg::FieldEdited {
                        name: FIELD_FULL_TIME.to_string(),
                        value: if self.full_time {
                            "true".to_string()
                        } else {
                            String::new()
                        },
                    })
                }
                _ => FormOutcome::Handled,
            },
            FormField::Description => {
                edit_input(&mut self.description, &mut self.dirty, FIELD_DESCRIPTION, key)
            }
            FormField::Location => {
                edit_input(&mut self.location, &mut self.dirty, FIELD_LOCATION, key)
            }
        }
    }

    /// Cursor column of the focused text input, if any.
    pub fn focused_cursor(&self) -> Option<usize> {
        match self.focus {
            FormField::Description => Some(self.description.visual_cursor()),
            FormField::Location => Some(self.location.visual_cursor()),
            FormField::FullTime => None,
        }
    }
}

fn edit_input(input: &mut Input, dirty: &mut bool, field: &str, key: KeyEvent) -> FormOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return FormOutcome::Handled;
    }
    let request = match key.code {
        KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    };
    let Some(request) = request else {
        return FormOutcome::Handled;
    };

    let before = input.value().to_string();
    input.handle(request);
    *dirty = true;

    if input.value() != before {
        FormOutcome::Dispatch(Msg::FieldEdited {
            name: field.to_string(),
            value: input.value().to_string(),
        })
    } else {
        FormOutcome::Handled
    }
}
