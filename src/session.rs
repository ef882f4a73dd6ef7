//! Interactive prompt loop.
//!
//! The session reads one action at a time and runs it to completion against a
//! borrowed `TaskStore`. Input and output are generic so the loop can be driven
//! by a terminal or by in-memory buffers.

use std::io::{BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::db::TaskStore;
use crate::due::{normalise_date_input, normalise_time_input, today_utc};
use crate::error::SessionError;
use crate::fields::*;
use crate::table::TableRenderer;
use crate::task::Task;

const NO_TASKS: &str = "No tasks have been input";

pub struct Session<'a, R, W> {
    store: &'a mut TaskStore,
    path: &'a Path,
    renderer: TableRenderer,
    clock: fn() -> NaiveDate,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut TaskStore, path: &'a Path, renderer: TableRenderer, input: R, output: W) -> Self {
        Session { store, path, renderer, clock: today_utc, input, output }
    }

    /// Replace the source of "today" used for due tags.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Process actions until `end` or the input closes. Both save the store.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            let result = match self.read_action() {
                Ok(action) => {
                    debug!(?action, "running action");
                    self.dispatch(action).map(|()| action)
                }
                Err(e) => Err(e),
            };
            match result {
                Ok(UserAction::End) => return Ok(()),
                Ok(_) => {}
                Err(SessionError::InputClosed) => {
                    warn!("input closed, ending session");
                    return self.end();
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn dispatch(&mut self, action: UserAction) -> Result<(), SessionError> {
        match action {
            UserAction::Add => self.add(),
            UserAction::Print => self.print_tasks(),
            UserAction::Edit => self.edit(),
            UserAction::Delete => self.delete(),
            UserAction::End => self.end(),
        }
    }

    fn say(&mut self, msg: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// Read one line without its terminator. End of input is an error.
    fn read_line(&mut self) -> Result<String, SessionError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn prompt(&mut self, msg: &str) -> Result<String, SessionError> {
        self.say(msg)?;
        self.read_line()
    }

    fn read_action(&mut self) -> Result<UserAction, SessionError> {
        loop {
            let input = self.prompt("Input an action (add, print, edit, delete, end):")?;
            match UserAction::parse(input.trim()) {
                Some(action) => return Ok(action),
                None => self.say("The input action is invalid")?,
            }
        }
    }

    fn read_priority(&mut self) -> Result<TaskPriority, SessionError> {
        loop {
            let input = self.prompt("Input the task priority (C, H, N, L):")?;
            let mut chars = input.trim().chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if let Some(priority) = TaskPriority::from_tag(c) {
                    return Ok(priority);
                }
            }
        }
    }

    fn read_date(&mut self) -> Result<String, SessionError> {
        loop {
            let input = self.prompt("Input the date (yyyy-mm-dd):")?;
            match normalise_date_input(&input) {
                Ok(date) => return Ok(date),
                Err(_) => self.say("The input date is invalid")?,
            }
        }
    }

    fn read_time(&mut self) -> Result<String, SessionError> {
        loop {
            let input = self.prompt("Input the time (hh:mm):")?;
            match normalise_time_input(&input) {
                Ok(time) => return Ok(time),
                Err(_) => self.say("The input time is invalid")?,
            }
        }
    }

    /// Collect trimmed lines up to the first blank one. `None` if nothing was entered.
    fn read_content(&mut self) -> Result<Option<Vec<String>>, SessionError> {
        self.say("Input a new task (enter a blank line to end):")?;
        let mut lines = Vec::new();
        loop {
            let input = self.read_line()?;
            let input = input.trim();
            if input.is_empty() {
                break;
            }
            lines.push(input.to_string());
        }
        if lines.is_empty() {
            self.say("The task is blank")?;
            return Ok(None);
        }
        Ok(Some(lines))
    }

    fn add(&mut self) -> Result<(), SessionError> {
        let priority = self.read_priority()?;
        let date = self.read_date()?;
        let time = self.read_time()?;
        let Some(content) = self.read_content()? else {
            return Ok(());
        };
        self.store.add(Task::new(content, priority, date, time));
        Ok(())
    }

    fn print_tasks(&mut self) -> Result<(), SessionError> {
        if self.store.is_empty() {
            return self.say(NO_TASKS);
        }
        let lines = self.renderer.render(self.store.list(), (self.clock)())?;
        for line in lines {
            self.say(&line)?;
        }
        Ok(())
    }

    /// Show the table and ask for a 1-based task number. Returns the 0-based position.
    fn choose_task(&mut self) -> Result<usize, SessionError> {
        self.print_tasks()?;
        let count = self.store.len();
        loop {
            let input = self.prompt(&format!("Input the task number (1-{count}):"))?;
            match input.trim().parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(n - 1),
                _ => self.say("Invalid task number")?,
            }
        }
    }

    fn delete(&mut self) -> Result<(), SessionError> {
        if self.store.is_empty() {
            return self.say(NO_TASKS);
        }
        let index = self.choose_task()?;
        self.store.remove(index);
        self.say("The task is deleted")
    }

    fn edit(&mut self) -> Result<(), SessionError> {
        if self.store.is_empty() {
            return self.say(NO_TASKS);
        }
        let index = self.choose_task()?;
        let field = loop {
            let input = self.prompt("Input a field to edit (priority, date, time, task):")?;
            match EditField::parse(input.trim()) {
                Some(field) => break field,
                None => self.say("Invalid field")?,
            }
        };

        match field {
            EditField::Priority => {
                let priority = self.read_priority()?;
                self.update_task(index, |t| t.priority = priority);
            }
            EditField::Date => {
                let date = self.read_date()?;
                self.update_task(index, |t| t.task_date = date);
            }
            EditField::Time => {
                let time = self.read_time()?;
                self.update_task(index, |t| t.task_time = time);
            }
            EditField::Task => {
                let Some(content) = self.read_content()? else {
                    return Ok(());
                };
                self.update_task(index, |t| t.content = content);
            }
        }
        debug!(index, ?field, "task edited");
        self.say("The task is changed")
    }

    fn update_task(&mut self, index: usize, apply: impl FnOnce(&mut Task)) {
        if let Some(task) = self.store.get_mut(index) {
            apply(task);
        }
    }

    fn end(&mut self) -> Result<(), SessionError> {
        self.store.save(self.path)?;
        self.say("Tasklist exiting!")?;
        self.output.flush()?;
        Ok(())
    }
}
