/*
[INPUT]:  Task records fetched from the service
[OUTPUT]: Display lines for a rendering surface
[POS]:    Presentation layer - pure projection, no I/O
[UPDATE]: When the line format changes
*/

use crate::types::Task;

/// Marker appended to completed tasks
const COMPLETION_MARKER: &str = "✅";

/// Project one task into its display line.
///
/// Format: `{title} — {description or empty} {marker or empty}`. The trailing
/// segment is always present so completed and pending lines align.
pub fn task_line(task: &Task) -> String {
    let description = task.description.as_deref().unwrap_or("");
    let marker = if task.completed { COMPLETION_MARKER } else { "" };
    format!("{} — {} {}", task.title, description, marker)
}

/// Project a full task list into display lines, preserving server order.
pub fn render_lines(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(task_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, description: Option<&str>, completed: bool) -> Task {
        Task {
            id: None,
            title: title.to_string(),
            description: description.map(str::to_string),
            completed,
        }
    }

    #[test]
    fn test_pending_task_with_description() {
        let line = task_line(&task("Buy milk", Some("2%"), false));
        assert_eq!(line, "Buy milk — 2% ");
    }

    #[test]
    fn test_completed_task_without_description() {
        let line = task_line(&task("Done task", None, true));
        assert_eq!(line, "Done task —  ✅");
        assert!(line.ends_with(COMPLETION_MARKER));
    }

    #[test]
    fn test_render_preserves_order() {
        let tasks = vec![
            task("first", None, false),
            task("second", Some("later"), true),
        ];
        let lines = render_lines(&tasks);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "first —  ");
        assert_eq!(lines[1], "second — later ✅");
    }

    #[test]
    fn test_render_empty_list() {
        assert!(render_lines(&[]).is_empty());
    }
}
