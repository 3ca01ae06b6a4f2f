use super::messages::Message;
use super::task::Task;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Title block of the task screen.
    pub fn header(sqlite_version: Option<&str>) {
        println!("\n{}", Message::TaskScreenTitle);
        if let Some(version) = sqlite_version {
            println!("{}", Message::SqliteVersion(version.to_string()));
        }
    }

    pub fn tasks(tasks: &[Task]) {
        if tasks.is_empty() {
            println!("{}", Message::TasksNotFound);
            return;
        }
        Self::tasks_table(tasks).printstd();
    }

    pub fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["ID", "TASK"]);
        for task in tasks {
            table.add_row(row![task.id, task.text]);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_row_per_task() {
        let tasks = vec![Task::new(1, "Buy milk"), Task::new(2, "Walk dog")];
        let table = View::tasks_table(&tasks);

        assert_eq!(table.len(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("Buy milk"));
        assert!(rendered.contains("Walk dog"));
    }
}
