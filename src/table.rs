//! Bordered table rendering of the task list.
//!
//! Each task occupies one or more rows. Content lines are wrapped to the task
//! column width; only the first row of a task carries its number, date, time
//! and markers. Markers are pre-rendered one-cell tokens and are never padded
//! or measured, so colour escape sequences do not disturb the layout.

use std::io::{self, Write};

use chrono::NaiveDate;

use crate::error::ParseError;
use crate::fields::MarkerStyle;
use crate::task::Task;
use crate::wrap::wrap;

pub const INDEX_WIDTH: usize = 2;
pub const DATE_WIDTH: usize = 10;
pub const TIME_WIDTH: usize = 5;
pub const CONTENT_WIDTH: usize = 44;

const HEADER: &str = "| N  |    Date    | Time  | P | D |                   Task                     |";

/// Full-width horizontal border.
pub fn separator() -> String {
    format!(
        "+{}+{}+{}+{}+{}+{}+",
        "-".repeat(INDEX_WIDTH + 2),
        "-".repeat(DATE_WIDTH + 2),
        "-".repeat(TIME_WIDTH + 2),
        "-".repeat(3),
        "-".repeat(3),
        "-".repeat(CONTENT_WIDTH),
    )
}

/// Cells of a single table row.
#[derive(Debug, Default)]
struct Row<'a> {
    index: String,
    date: &'a str,
    time: &'a str,
    priority: Option<String>,
    due: Option<String>,
    content: &'a str,
}

impl Row<'_> {
    fn format(&self) -> String {
        format!(
            "| {:<iw$} | {:<dw$} | {:<tw$} | {} | {} |{:<cw$}|",
            self.index,
            self.date,
            self.time,
            self.priority.as_deref().unwrap_or(" "),
            self.due.as_deref().unwrap_or(" "),
            self.content,
            iw = INDEX_WIDTH,
            dw = DATE_WIDTH,
            tw = TIME_WIDTH,
            cw = CONTENT_WIDTH,
        )
    }
}

/// Lays out tasks as a bordered, fixed-column table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer {
    pub style: MarkerStyle,
}

impl TableRenderer {
    pub fn new(style: MarkerStyle) -> Self {
        TableRenderer { style }
    }

    /// Render `tasks` as printable lines, classifying due dates against `today`.
    ///
    /// An empty list renders nothing at all. A stored date that cannot be parsed
    /// fails the whole render.
    pub fn render(&self, tasks: &[Task], today: NaiveDate) -> Result<Vec<String>, ParseError> {
        let mut out = Vec::new();
        if tasks.is_empty() {
            return Ok(out);
        }

        let border = separator();
        out.push(border.clone());
        out.push(HEADER.to_string());
        out.push(border.clone());

        for (i, task) in tasks.iter().enumerate() {
            let due = task.due_tag(today)?;
            let mut first = true;
            for line in &task.content {
                for segment in wrap(line, CONTENT_WIDTH) {
                    let row = if first {
                        first = false;
                        Row {
                            index: (i + 1).to_string(),
                            date: &task.task_date,
                            time: &task.task_time,
                            priority: Some(task.priority.marker(self.style)),
                            due: Some(due.marker(self.style)),
                            content: segment,
                        }
                    } else {
                        Row { content: segment, ..Row::default() }
                    };
                    out.push(row.format());
                }
            }
            out.push(border.clone());
        }
        Ok(out)
    }

    /// Render and write the table to `w`, one line per row.
    pub fn print_to<W: Write>(&self, w: &mut W, tasks: &[Task], today: NaiveDate) -> io::Result<()> {
        let lines = self
            .render(tasks, today)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        for line in lines {
            writeln!(w, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::due::parse_date;
    use crate::fields::TaskPriority;

    fn today() -> NaiveDate {
        parse_date("2023-06-15").unwrap()
    }

    fn task(lines: &[&str], priority: TaskPriority, date: &str) -> Task {
        Task::new(
            lines.iter().map(|s| s.to_string()).collect(),
            priority,
            date.into(),
            "09:30".into(),
        )
    }

    fn letters() -> TableRenderer {
        TableRenderer::new(MarkerStyle::Letter)
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert!(letters().render(&[], today()).unwrap().is_empty());
        assert!(TableRenderer::default().render(&[], today()).unwrap().is_empty());
    }

    #[test]
    fn test_borders_match_header_width() {
        let border = separator();
        assert_eq!(
            border,
            "+----+------------+-------+---+---+--------------------------------------------+"
        );
        assert_eq!(border.len(), HEADER.len());
    }

    #[test]
    fn test_single_short_task() {
        let lines = letters()
            .render(&[task(&["Buy milk"], TaskPriority::Normal, "2023-06-15")], today())
            .unwrap();
        assert_eq!(
            lines,
            vec![
                separator(),
                HEADER.to_string(),
                separator(),
                "| 1  | 2023-06-15 | 09:30 | N | T |Buy milk                                    |".to_string(),
                separator(),
            ]
        );
    }

    #[test]
    fn test_long_line_wraps_with_blank_continuations() {
        let long: String = "x".repeat(90);
        let lines = letters()
            .render(&[task(&[&long], TaskPriority::Critical, "2023-06-15")], today())
            .unwrap();
        assert_eq!(lines.len(), 3 + 3 + 1);
        assert!(lines[3].starts_with("| 1  | 2023-06-15 | 09:30 | C | T |"));
        assert_eq!(lines[4], format!("|    |            |       |   |   |{}|", "x".repeat(44)));
        assert_eq!(lines[5], format!("|    |            |       |   |   |xx{}|", " ".repeat(42)));
        assert_eq!(lines[6], separator());
        assert!(lines.iter().all(|l| l.len() == HEADER.len()));
    }

    #[test]
    fn test_multiple_tasks_and_lines() {
        let tasks = vec![
            task(&["first", "", "third"], TaskPriority::High, "2023-06-20"),
            task(&["overdue"], TaskPriority::Low, "2023-06-01"),
        ];
        let lines = letters().render(&tasks, today()).unwrap();
        assert_eq!(lines.len(), 3 + 3 + 1 + 1 + 1);
        assert!(lines[3].starts_with("| 1  | 2023-06-20 | 09:30 | H | I |first"));
        assert_eq!(lines[4], format!("|    |            |       |   |   |{}|", " ".repeat(44)));
        assert!(lines[5].ends_with(&format!("|third{}|", " ".repeat(39))));
        assert_eq!(lines[6], separator());
        assert!(lines[7].starts_with("| 2  | 2023-06-01 | 09:30 | L | O |overdue"));
        assert_eq!(lines[8], separator());
    }

    #[test]
    fn test_colour_markers_do_not_shift_columns() {
        let t = task(&["colour"], TaskPriority::Critical, "2023-06-15");
        let line = &TableRenderer::new(MarkerStyle::Color).render(&[t], today()).unwrap()[3];
        let expected = format!(
            "| 1  | 2023-06-15 | 09:30 | {} | {} |colour{}|",
            TaskPriority::Critical.marker(MarkerStyle::Color),
            crate::fields::DueTag::Today.marker(MarkerStyle::Color),
            " ".repeat(38)
        );
        assert_eq!(line, &expected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let tasks = vec![task(&["a".repeat(50).as_str()], TaskPriority::Normal, "2023-07-01")];
        let r = letters();
        assert_eq!(r.render(&tasks, today()).unwrap(), r.render(&tasks, today()).unwrap());
    }

    #[test]
    fn test_bad_stored_date_fails_render() {
        let tasks = vec![
            task(&["ok"], TaskPriority::Normal, "2023-06-15"),
            task(&["broken"], TaskPriority::Normal, "not-a-date"),
        ];
        assert_eq!(
            letters().render(&tasks, today()),
            Err(ParseError::InvalidDate("not-a-date".into()))
        );
    }

    #[test]
    fn test_print_to_writes_lines() {
        let mut out = Vec::new();
        letters()
            .print_to(&mut out, &[task(&["a"], TaskPriority::Low, "2023-06-15")], today())
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.ends_with('\n'));
    }
}
