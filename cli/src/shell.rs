//! Line-based command loop that stands in for the page's form and list.
//!
//! `add` fills the form and submits it, `toggle` and `rm` fire the change and
//! click events of a rendered item. Everything else is read-only.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use todo_core::{Alert, App, Event, SubmitOutcome, Transport};

use crate::terminal;

const HELP: &str = "\
commands:
  add <user-id> <title>   create a todo
  toggle <id>             flip completion
  rm <id>                 delete a todo
  list                    show the board
  users                   show selectable users
  help                    show this text
  quit                    leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { user_id: u64, title: String },
    Toggle(u64),
    Remove(u64),
    List,
    Users,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let command = match word {
            "add" => {
                let (user, title) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Command::Add {
                    user_id: parse_id(user)?,
                    title: title.trim().to_string(),
                }
            }
            "toggle" => Command::Toggle(parse_id(rest)?),
            "rm" | "delete" => Command::Remove(parse_id(rest)?),
            "list" | "ls" => Command::List,
            "users" => Command::Users,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("unknown command `{other}`, try `help`")),
        };
        Ok(Some(command))
    }
}

fn parse_id(raw: &str) -> Result<u64, String> {
    raw.parse()
        .map_err(|_| format!("expected a numeric id, got `{raw}`"))
}

/// Reads commands from `input` until EOF or `quit`.
pub fn run<T, A>(app: &mut App<T, A>, input: impl BufRead, out: &mut impl Write) -> io::Result<()>
where
    T: Transport,
    A: Alert,
{
    terminal::write_board(out, app.view())?;
    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{}", message.yellow())?;
                continue;
            }
        };
        if !execute(app, command, out)? {
            break;
        }
    }
    Ok(())
}

/// Returns `false` once the session should end.
fn execute<T, A>(app: &mut App<T, A>, command: Command, out: &mut impl Write) -> io::Result<bool>
where
    T: Transport,
    A: Alert,
{
    match command {
        Command::Add { user_id, title } => {
            let view = app.view_mut();
            view.set_title(title);
            view.users_mut().reset();
            view.users_mut().select(user_id);
            match app.submit() {
                SubmitOutcome::Created(todo) => {
                    writeln!(out, "created #{}", todo.id)?;
                    terminal::write_board(out, app.view())?;
                }
                SubmitOutcome::Rejected(field) => terminal::write_flash(out, field)?,
                SubmitOutcome::Failed => {}
            }
        }
        Command::Toggle(id) => {
            if app.dispatch(Event::Change(id)) {
                terminal::write_board(out, app.view())?;
            } else {
                writeln!(out, "no todo #{id}")?;
            }
        }
        Command::Remove(id) => {
            if app.dispatch(Event::Click(id)) {
                terminal::write_board(out, app.view())?;
            } else {
                writeln!(out, "no todo #{id}")?;
            }
        }
        Command::List => terminal::write_board(out, app.view())?,
        Command::Users => terminal::write_users(out, app.view().users())?,
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}
