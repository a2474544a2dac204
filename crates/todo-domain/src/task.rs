/// One entry in the list. Completion is a flag; the marker shown in front of
/// done tasks is only added by [`Task::row`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    pub done: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    /// Display row: `marker` followed by the text for done tasks, the bare
    /// text otherwise.
    pub fn row(&self, marker: &str) -> String {
        if self.done {
            format!("{}{}", marker, self.text)
        } else {
            self.text.clone()
        }
    }
}
