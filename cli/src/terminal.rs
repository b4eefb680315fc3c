//! Terminal rendering of the board and its alerts.

use std::io::{self, Write};

use colored::Colorize;
use todo_core::view::{TodoItem, UserSelect};
use todo_core::{Alert, Field, View};

/// Prints every alert to stderr.
#[derive(Debug, Default)]
pub struct TerminalAlert;

impl Alert for TerminalAlert {
    fn alert(&self, message: &str) {
        eprintln!("{} {}", "alert:".red().bold(), message.red());
    }
}

pub fn write_board(out: &mut impl Write, view: &View) -> io::Result<()> {
    if view.items().is_empty() {
        writeln!(out, "{}", "(no todos)".dimmed())?;
    }
    for item in view.items() {
        writeln!(out, "{}", item_line(item))?;
    }
    Ok(())
}

pub fn write_users(out: &mut impl Write, users: &UserSelect) -> io::Result<()> {
    for option in users.options().iter().skip(1) {
        writeln!(out, "{:>4}  {}", option.value, option.text)?;
    }
    Ok(())
}

/// Hint for a field that failed validation, on the `#fdd` flash background.
pub fn write_flash(out: &mut impl Write, field: Field) -> io::Result<()> {
    let hint = match field {
        Field::Title => " title must not be empty ",
        Field::User => " select a user ",
    };
    writeln!(out, "{}", hint.black().on_truecolor(0xff, 0xdd, 0xdd))
}

fn item_line(item: &TodoItem) -> String {
    let mark = if item.checked {
        "[x]".green().to_string()
    } else {
        "[ ]".to_string()
    };
    let title = if item.checked {
        item.title.dimmed().to_string()
    } else {
        item.title.clone()
    };
    format!(
        "{mark} {:>4}  {title} {} {}  {}",
        item.todo_id,
        "by".italic(),
        item.owner.bold(),
        "\u{d7}".red()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::{Todo, User};

    #[test]
    fn board_lists_items_top_to_bottom() {
        colored::control::set_override(false);
        let mut view = View::new();
        for id in 1..=2 {
            view.render_todo(
                &Todo {
                    id,
                    user_id: 1,
                    title: format!("task {id}"),
                    completed: id == 2,
                },
                "Ann",
            );
        }
        let mut out = Vec::new();
        write_board(&mut out, &view).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[x]"));
        assert!(lines[0].contains("task 2 by Ann"));
        assert!(lines[1].starts_with("[ ]"));
    }

    #[test]
    fn users_skip_placeholder() {
        colored::control::set_override(false);
        let mut view = View::new();
        view.render_user(&User {
            id: 7,
            name: "Gus".to_string(),
        });
        let mut out = Vec::new();
        write_users(&mut out, view.users()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "   7  Gus\n");
    }
}
