#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub text: String,
}

impl Task {
    pub fn new(id: i64, text: &str) -> Self {
        Task { id, text: text.to_string() }
    }
}

/// Input accepted by the store: anything with visible characters.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// In-memory copy of the task list shown on the task screen.
///
/// The screen applies the rows returned by create/delete here instead of
/// re-listing after every mutation. When a storage call fails the last good
/// copy stays on screen.
#[derive(Debug, Default, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Drops the row with `id`, returning whether it was present.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_trims_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" Buy milk "));
    }

    #[test]
    fn task_list_tracks_mutations() {
        let mut list = TaskList::new();
        list.replace(vec![Task::new(1, "Buy milk")]);
        list.push(Task::new(2, "Walk dog"));

        assert!(list.remove(1));
        assert!(!list.remove(1));
        assert_eq!(list.tasks(), &[Task::new(2, "Walk dog")]);
    }
}
