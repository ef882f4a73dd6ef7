//! Enumerations and field types for task management.
//!
//! This module defines the fixed lookup tables attached to a task: its priority and
//! the derived due tag, each pairing a single-letter tag with a display colour, plus
//! the actions and editable fields understood by the interactive session.

use clap::ValueEnum;
use crossterm::style::{Color, Stylize};
use serde::{Deserialize, Serialize};

/// How the one-cell priority and due markers are drawn in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerStyle {
    /// A blank cell with a coloured background.
    #[default]
    Color,
    /// The variant's single-letter tag.
    Letter,
}

/// Colour selection for the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Draw a single display cell for a tag/colour pair.
fn marker(tag: char, color: Color, style: MarkerStyle) -> String {
    match style {
        MarkerStyle::Color => " ".on(color).to_string(),
        MarkerStyle::Letter => tag.to_string(),
    }
}

/// User-assigned importance of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    #[serde(alias = "C")]
    Critical,
    #[serde(alias = "H")]
    High,
    #[default]
    #[serde(alias = "N")]
    Normal,
    #[serde(alias = "L")]
    Low,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Critical,
        TaskPriority::High,
        TaskPriority::Normal,
        TaskPriority::Low,
    ];

    pub fn tag(self) -> char {
        match self {
            TaskPriority::Critical => 'C',
            TaskPriority::High => 'H',
            TaskPriority::Normal => 'N',
            TaskPriority::Low => 'L',
        }
    }

    pub fn color(self) -> Color {
        match self {
            TaskPriority::Critical => Color::Red,
            TaskPriority::High => Color::Yellow,
            TaskPriority::Normal => Color::Green,
            TaskPriority::Low => Color::Blue,
        }
    }

    /// Look up a priority by its tag letter, ignoring case.
    pub fn from_tag(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        Self::ALL.into_iter().find(|p| p.tag() == c)
    }

    pub fn marker(self, style: MarkerStyle) -> String {
        marker(self.tag(), self.color(), style)
    }
}

/// Urgency of a task relative to today. Derived on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueTag {
    InTime,
    Today,
    Overdue,
}

impl DueTag {
    pub fn tag(self) -> char {
        match self {
            DueTag::InTime => 'I',
            DueTag::Today => 'T',
            DueTag::Overdue => 'O',
        }
    }

    pub fn color(self) -> Color {
        match self {
            DueTag::InTime => Color::Green,
            DueTag::Today => Color::Yellow,
            DueTag::Overdue => Color::Red,
        }
    }

    pub fn marker(self, style: MarkerStyle) -> String {
        marker(self.tag(), self.color(), style)
    }
}

/// Actions accepted at the top-level session prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Add,
    Print,
    Edit,
    Delete,
    End,
}

impl UserAction {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "add" => Some(UserAction::Add),
            "print" => Some(UserAction::Print),
            "edit" => Some(UserAction::Edit),
            "delete" => Some(UserAction::Delete),
            "end" => Some(UserAction::End),
            _ => None,
        }
    }
}

/// Task fields that can be replaced by the `edit` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Priority,
    Date,
    Time,
    Task,
}

impl EditField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "priority" => Some(EditField::Priority),
            "date" => Some(EditField::Date),
            "time" => Some(EditField::Time),
            "task" => Some(EditField::Task),
            _ => None,
        }
    }
}
