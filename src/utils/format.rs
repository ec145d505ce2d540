pub const COMMAND_MAX_LEN: usize = 25;
const ELLIPSIS: &str = "...";

const CPU_CRITICAL: f64 = 50.0;
const CPU_WARNING: f64 = 20.0;
const MEM_CRITICAL: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayCategory {
    Normal,
    Warning,
    Critical,
}

/// Display text plus the tier it falls in. Untagged text is shown as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct Formatted {
    pub text: String,
    pub category: Option<DisplayCategory>,
}

impl Formatted {
    fn tagged(text: String, category: DisplayCategory) -> Self {
        Self {
            text,
            category: Some(category),
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }
}

pub fn cpu_category(value: f64) -> DisplayCategory {
    if value > CPU_CRITICAL {
        DisplayCategory::Critical
    } else if value > CPU_WARNING {
        DisplayCategory::Warning
    } else {
        DisplayCategory::Normal
    }
}

pub fn memory_category(value: f64) -> DisplayCategory {
    if value > MEM_CRITICAL {
        DisplayCategory::Critical
    } else {
        DisplayCategory::Normal
    }
}

pub fn format_cpu(raw: &str) -> Formatted {
    match parse_metric(raw) {
        Some(value) => format_cpu_value(value),
        None => Formatted::plain(raw),
    }
}

pub fn format_cpu_value(value: f64) -> Formatted {
    if !value.is_finite() {
        return Formatted::plain(value.to_string());
    }
    Formatted::tagged(percent_text(value), cpu_category(value))
}

pub fn format_memory(raw: &str) -> Formatted {
    match parse_metric(raw) {
        Some(value) => format_memory_value(value),
        None => Formatted::plain(raw),
    }
}

pub fn format_memory_value(value: f64) -> Formatted {
    if !value.is_finite() {
        return Formatted::plain(value.to_string());
    }
    Formatted::tagged(percent_text(value), memory_category(value))
}

/// Cuts long commands to 22 characters followed by "...". Not word-aware.
pub fn format_command(text: &str) -> String {
    if text.chars().count() <= COMMAND_MAX_LEN {
        return text.to_string();
    }
    let mut trimmed = take_chars(text, COMMAND_MAX_LEN - ELLIPSIS.len());
    trimmed.push_str(ELLIPSIS);
    trimmed
}

pub fn take_chars(value: &str, count: usize) -> String {
    value.chars().take(count).collect()
}

fn parse_metric(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn percent_text(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_thresholds_are_strict() {
        assert_eq!(format_cpu("50.0").category, Some(DisplayCategory::Warning));
        assert_eq!(format_cpu("50.1").category, Some(DisplayCategory::Critical));
        assert_eq!(format_cpu("20.0").category, Some(DisplayCategory::Normal));
        assert_eq!(format_cpu("20.1").category, Some(DisplayCategory::Warning));
        assert_eq!(format_cpu("0").category, Some(DisplayCategory::Normal));
    }

    #[test]
    fn cpu_may_exceed_one_hundred() {
        let formatted = format_cpu_value(350.27);
        assert_eq!(formatted.text, "350.3%");
        assert_eq!(formatted.category, Some(DisplayCategory::Critical));
    }

    #[test]
    fn memory_thresholds_are_strict() {
        assert_eq!(format_memory("10.0").category, Some(DisplayCategory::Normal));
        assert_eq!(
            format_memory("10.1").category,
            Some(DisplayCategory::Critical)
        );
        assert_eq!(format_memory("3.14159").text, "3.1%");
    }

    #[test]
    fn unparsable_metrics_fall_back_to_raw_text() {
        assert_eq!(format_cpu("n/a"), Formatted::plain("n/a"));
        assert_eq!(format_memory(""), Formatted::plain(""));
        assert_eq!(format_cpu("NaN").category, None);
    }

    #[test]
    fn command_is_truncated_past_twenty_five_chars() {
        let long = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(long.len(), 26);
        let out = format_command(long);
        assert_eq!(out, "abcdefghijklmnopqrstuv...");
        assert_eq!(out.chars().count(), 25);

        let exact = &long[..25];
        assert_eq!(format_command(exact), exact);
    }

    #[test]
    fn command_truncation_counts_characters() {
        let cyrillic = "процесс-с-длинным-названием";
        let out = format_command(cyrillic);
        assert_eq!(out.chars().count(), 25);
        assert!(out.ends_with("..."));
    }
}
