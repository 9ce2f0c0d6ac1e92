//! Label and status-line formatting for terminal output.

use harvest::TimeEntry;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

const NOTES_DISPLAY_LIMIT: usize = 60;

/// Split decimal hours into whole hours and minutes, rounding the minutes up
/// and carrying a full 60 into the hour.
pub fn split_hours(total_hours: f64) -> (i64, i64) {
    let mut hours = total_hours as i64;
    let mut minutes = ((total_hours - hours as f64) * 60.0).ceil() as i64;
    if minutes >= 60 {
        hours += 1;
        minutes = 0;
    }
    (hours, minutes)
}

pub fn clock(total_hours: f64) -> String {
    let (hours, minutes) = split_hours(total_hours);
    format!("[{:02}:{:02}]", hours, minutes)
}

/// Single-line rendering of possibly multi-line notes, truncated so long
/// notes don't wrap the selection list.
pub fn condense_notes(notes: &str) -> String {
    let flat = notes.replace(['\n', '\r'], " | ");
    let mut flat = flat.trim().to_string();
    if flat.chars().count() > NOTES_DISPLAY_LIMIT {
        flat = flat.chars().take(NOTES_DISPLAY_LIMIT - 3).collect();
        flat.push_str("...");
    }
    flat
}

/// `<project> - <task> (<status>) [HH:MM]<notes>` for the restart picker.
pub fn entry_label(entry: &TimeEntry) -> String {
    let status = if entry.is_running {
        format!("{GREEN}Running{RESET}")
    } else {
        format!("{YELLOW}Stopped{RESET}")
    };

    let notes = entry
        .notes
        .as_deref()
        .map(condense_notes)
        .filter(|notes| !notes.is_empty())
        .map(|notes| format!("  {CYAN}{notes}{RESET}"))
        .unwrap_or_default();

    format!(
        "{} - {} ({}) {}{}",
        entry.project.name,
        entry.task.name,
        status,
        clock(entry.hours),
        notes
    )
}

/// First word of the first notes line, with a leading space for direct
/// concatenation after the clock.
fn notes_word(notes: Option<&str>) -> String {
    let Some(notes) = notes else {
        return String::new();
    };
    let first_line = notes.lines().next().unwrap_or("").trim();
    match first_line.split_whitespace().next() {
        Some(word) => format!(" {}", word),
        None => String::new(),
    }
}

/// Status line for the current day: the running timer's clock and first
/// notes word, or the billable total marked as paused. `bar` selects the
/// plain status-bar format over the tmux-colored one.
pub fn status_line(entries: &[TimeEntry], bar: bool) -> String {
    match entries.iter().find(|entry| entry.is_running) {
        Some(running) => {
            let clock = clock(running.hours);
            let word = notes_word(running.notes.as_deref());
            if bar {
                format!("{}{}", clock, word)
            } else {
                format!("#[fg=colour46]{}#[default]{}", clock, word)
            }
        }
        None => {
            let total: f64 = entries
                .iter()
                .filter(|entry| entry.billable)
                .map(|entry| entry.hours)
                .sum();
            let clock = clock(total);
            if bar {
                format!("{} paused", clock)
            } else {
                format!("#[fg=colour46]{}#[default] paused", clock)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(hours: f64, is_running: bool, billable: bool, notes: Option<&str>) -> TimeEntry {
        TimeEntry {
            hours,
            is_running,
            billable,
            notes: notes.map(String::from),
            ..TimeEntry::default()
        }
    }

    #[test]
    fn splits_hours_with_minute_ceil() {
        assert_eq!(split_hours(0.0), (0, 0));
        assert_eq!(split_hours(1.5), (1, 30));
        // 1/60 of an hour is a shade over one minute in binary; it must not
        // round down to zero.
        assert_eq!(split_hours(2.02), (2, 2));
    }

    #[test]
    fn carries_sixty_minutes_into_the_hour() {
        assert_eq!(split_hours(1.9999), (2, 0));
        assert_eq!(clock(1.9999), "[02:00]");
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(clock(9.25), "[09:15]");
    }

    #[test]
    fn condenses_newlines_into_separators() {
        assert_eq!(condense_notes("fix login\nreview PR"), "fix login | review PR");
    }

    #[test]
    fn truncates_long_notes() {
        let long = "x".repeat(80);
        let condensed = condense_notes(&long);
        assert_eq!(condensed.chars().count(), 60);
        assert!(condensed.ends_with("..."));
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let long = "\u{e9}".repeat(80);
        let condensed = condense_notes(&long);
        assert_eq!(condensed.chars().count(), 60);
    }

    #[test]
    fn entry_label_shows_status_and_clock() {
        let mut e = entry(1.5, true, true, Some("standup notes"));
        e.project.name = "Website".to_string();
        e.task.name = "Design".to_string();

        let label = entry_label(&e);
        assert!(label.starts_with("Website - Design ("));
        assert!(label.contains("Running"));
        assert!(label.contains("[01:30]"));
        assert!(label.contains("standup"));
    }

    #[test]
    fn status_line_prefers_the_running_entry() {
        let entries = vec![
            entry(3.0, false, true, None),
            entry(0.5, true, true, Some("deploy release\nextra")),
        ];
        assert_eq!(status_line(&entries, true), "[00:30] deploy");
        assert_eq!(
            status_line(&entries, false),
            "#[fg=colour46][00:30]#[default] deploy"
        );
    }

    #[test]
    fn status_line_sums_billable_hours_when_paused() {
        let entries = vec![
            entry(1.0, false, true, None),
            entry(2.0, false, false, None),
            entry(0.5, false, true, None),
        ];
        assert_eq!(status_line(&entries, true), "[01:30] paused");
        assert_eq!(
            status_line(&entries, false),
            "#[fg=colour46][01:30]#[default] paused"
        );
    }
}
