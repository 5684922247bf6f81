use task_core::entities::Task;

const MIN_COLUMN_WIDTH: usize = 4;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

impl TableOptions {
    /// Width from `COLUMNS`, color only on a terminal without `NO_COLOR`.
    #[must_use]
    pub fn from_env() -> Self {
        use std::io::IsTerminal;

        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self { max_width, color }
    }
}

/// Render tasks as an aligned table, one row per task.
#[must_use]
pub fn render_task_table(tasks: &[Task], options: TableOptions) -> String {
    let headers = ["ID", "STATUS", "DESCRIPTION", "DUE", "CREATED", "UPDATED"];
    let rows = tasks.iter().map(task_row).collect::<Vec<_>>();
    render_rows(&headers, &rows, options)
}

fn task_row(task: &Task) -> Vec<String> {
    vec![
        task.id.to_string(),
        task.status.to_string(),
        task.description.to_string(),
        task.due_date
            .map_or_else(|| "-".to_string(), |date| date.format("%Y-%m-%d").to_string()),
        task.created_at.format(TIMESTAMP_FORMAT).to_string(),
        task.updated_at
            .map_or_else(|| "-".to_string(), |at| at.format(TIMESTAMP_FORMAT).to_string()),
    ]
}

fn render_rows(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.trim_end().chars().count());

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(value, *width);
                let padded = pad(&text, *width, index == 0);
                if options.color {
                    colorize_status(&padded, text.trim())
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Shrink the widest columns until the table fits `max_width`.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn colorize_status(cell: &str, text: &str) -> String {
    let code = match text {
        "done" => "32",
        "in-progress" => "33",
        _ => return cell.to_string(),
    };
    format!("\u{1b}[{code}m{cell}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use task_core::enums::TaskStatus;
    use task_core::ids::{Description, TaskId};

    use super::*;

    fn task(id: u64, description: &str, status: TaskStatus) -> Task {
        Task {
            id: TaskId::new(id),
            description: Description::new(description).unwrap(),
            status,
            due_date: None,
            created_at: Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn table_has_header_divider_and_rows() {
        let mut second = task(12, "Ship release", TaskStatus::InProgress);
        second.due_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        let tasks = vec![task(1, "Write report", TaskStatus::Todo), second];

        let table = render_task_table(&tasks, TableOptions::default());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID  STATUS       DESCRIPTION"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[1].len(), lines[0].len());
        assert_eq!(
            lines[2],
            " 1  todo         Write report  -           2025-05-01 08:00  -"
        );
        assert!(lines[3].contains("2025-06-01"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let tasks = vec![task(1, &"long words ".repeat(10), TaskStatus::Done)];
        let options = TableOptions {
            max_width: Some(80),
            color: false,
        };

        let table = render_task_table(&tasks, options);
        for line in table.lines() {
            assert!(line.chars().count() <= 80, "line too wide: {line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn color_marks_only_known_statuses() {
        let tasks = vec![
            task(1, "a", TaskStatus::Done),
            task(2, "b", TaskStatus::Todo),
        ];
        let options = TableOptions {
            max_width: None,
            color: true,
        };

        let table = render_task_table(&tasks, options);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].contains("\u{1b}[32mdone"));
        assert!(!lines[3].contains('\u{1b}'));
    }
}
