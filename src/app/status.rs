use crate::ui::Paint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

impl StatusLevel {
    pub fn paint(self) -> Paint {
        match self {
            StatusLevel::Info => Paint::Info,
            StatusLevel::Success => Paint::Success,
            StatusLevel::Error => Paint::Error,
        }
    }
}

/// Result of dispatching one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands
    Continue,
    /// Leave the session
    Exit,
}

impl Flow {
    pub fn should_exit(self) -> bool {
        matches!(self, Flow::Exit)
    }
}
