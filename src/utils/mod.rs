mod ansi;
mod format;

pub use ansi::{Segment, Segments, segments, strip_markers, visible_len};
pub use format::{
    COMMAND_MAX_LEN, DisplayCategory, Formatted, cpu_category, format_command, format_cpu,
    format_cpu_value, format_memory, format_memory_value, memory_category, take_chars,
};
