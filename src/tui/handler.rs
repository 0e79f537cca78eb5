//! Event handling logic
//!
//! Translates key presses into ledger mutations and UI state changes.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs::expense::{ExpenseField, ExpenseFormState};
use super::event::Event;
use crate::models::Category;

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            if app.has_dialog() {
                handle_dialog_key(app, key);
            } else {
                handle_dashboard_key(app, key);
            }
        }
    }
    Ok(())
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('a') => {
            app.expense_form = ExpenseFormState::new();
            app.active_dialog = ActiveDialog::AddExpense;
        }
        KeyCode::Left | KeyCode::Char('h') => app.highlight_prev_category(),
        KeyCode::Right | KeyCode::Char('l') => app.highlight_next_category(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let category = app.highlighted_category();
            app.ledger.toggle_filter(category);
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            app.category_cursor = index;
            app.ledger.toggle_filter(Category::ALL[index]);
        }
        KeyCode::Esc => app.ledger.clear_filter(),
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_offset = app.scroll_offset.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.scroll_offset + 1 < app.ledger.visible().len() {
                app.scroll_offset += 1;
            }
        }
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.active_dialog = ActiveDialog::None,
        KeyCode::Tab => app.expense_form.next_field(),
        KeyCode::BackTab => app.expense_form.prev_field(),
        KeyCode::Enter => submit_expense(app),
        KeyCode::Left => match app.expense_form.focused_field {
            ExpenseField::Category => app.expense_form.prev_category(),
            _ => {
                if let Some(input) = app.expense_form.focused_input() {
                    input.move_left();
                }
            }
        },
        KeyCode::Right => match app.expense_form.focused_field {
            ExpenseField::Category => app.expense_form.next_category(),
            _ => {
                if let Some(input) = app.expense_form.focused_input() {
                    input.move_right();
                }
            }
        },
        KeyCode::Backspace => {
            if let Some(input) = app.expense_form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                if let Some(input) = app.expense_form.focused_input() {
                    input.insert(c);
                }
            }
        }
        _ => {}
    }
}

fn submit_expense(app: &mut App) {
    match app.expense_form.to_form().submit(&mut app.ledger) {
        Ok(_) => app.active_dialog = ActiveDialog::None,
        Err(err) => app.expense_form.error_message = Some(err.to_string()),
    }
}
