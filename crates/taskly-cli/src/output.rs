//! Terminal output formatting.

use colored::Colorize;
use taskly_core::task::Task;
use unicode_width::UnicodeWidthStr;

/// Print tasks as a table.
pub fn print_tasks_table(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("{}", "No tasks found.".dimmed());
        return;
    }

    // Deadline and priority columns are fixed; the name takes what is left.
    let name_width = term_width().saturating_sub(24).clamp(12, 40);

    println!(
        "{} {:<10} {:<12}",
        pad_right("Name", name_width),
        "Priority",
        "Deadline"
    );
    println!("{}", "─".repeat(name_width + 24));

    for task in tasks {
        println!(
            "{} {:<10} {:<12}",
            pad_right(&truncate_visual(&task.name, name_width), name_width),
            task.priority,
            task.deadline.format("%Y-%m-%d")
        );
    }

    println!();
    println!("{} task(s) total", tasks.len());
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_visual() {
        assert_eq!(truncate_visual("short", 10), "short");
        assert_eq!(truncate_visual("a rather long task name", 10), "a rather..");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("abcd", 2), "abcd");
    }
}
