use std::fmt::Display;

use crossterm::style::{Color, ContentStyle, Stylize};

use crate::utils::{DisplayCategory, Formatted};

/// Every styled element the views print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Header,
    Border,
    Pid,
    User,
    Command,
    Prompt,
    Info,
    Error,
    Success,
    CpuNormal,
    CpuWarning,
    CpuCritical,
    MemNormal,
    MemCritical,
}

impl Paint {
    fn style(self) -> ContentStyle {
        let style = ContentStyle::new();
        match self {
            Paint::Header => style.with(Color::Cyan).on(Color::DarkBlue).bold(),
            Paint::Border => style.with(Color::Blue).bold(),
            Paint::Pid => style.with(Color::White).bold(),
            Paint::User => style.with(Color::Cyan),
            Paint::Command | Paint::MemNormal => style.with(Color::Grey),
            Paint::Prompt => style.with(Color::Green).bold(),
            Paint::Info => style.with(Color::Blue).bold(),
            Paint::Error => style.with(Color::Red).on(Color::Black).bold(),
            Paint::Success => style.with(Color::Green).on(Color::Black).bold(),
            Paint::CpuNormal => style.with(Color::Green),
            Paint::CpuWarning => style.with(Color::Yellow).bold(),
            Paint::CpuCritical => style.with(Color::Red).bold(),
            Paint::MemCritical => style.with(Color::Magenta).bold(),
        }
    }

    pub fn for_cpu(category: DisplayCategory) -> Self {
        match category {
            DisplayCategory::Normal => Paint::CpuNormal,
            DisplayCategory::Warning => Paint::CpuWarning,
            DisplayCategory::Critical => Paint::CpuCritical,
        }
    }

    pub fn for_memory(category: DisplayCategory) -> Self {
        match category {
            DisplayCategory::Normal => Paint::MemNormal,
            DisplayCategory::Warning => Paint::CpuWarning,
            DisplayCategory::Critical => Paint::MemCritical,
        }
    }
}

/// Owns all presentation decisions; a disabled theme prints text untouched.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, paint: Paint, text: impl Display) -> String {
        if self.enabled {
            paint.style().apply(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn cpu(&self, formatted: &Formatted) -> String {
        match formatted.category {
            Some(category) => self.paint(Paint::for_cpu(category), &formatted.text),
            None => formatted.text.clone(),
        }
    }

    pub fn memory(&self, formatted: &Formatted) -> String {
        match formatted.category {
            Some(category) => self.paint(Paint::for_memory(category), &formatted.text),
            None => formatted.text.clone(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true)
    }
}
