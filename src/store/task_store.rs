use std::path::{Path, PathBuf};

use regex::Regex;

use crate::model::task::Task;

use super::file_io::{self, StoreError};

/// Counters for the status row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub done: usize,
}

/// The authoritative in-memory task collection and its backing file.
///
/// Owns the full ordered list (most recently added first) and the path it
/// loads from and saves to. Validation lives here; the UI repeats the cheap
/// checks only for responsiveness, never as the source of truth.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open a store against `path`, loading the existing collection.
    /// A missing file is the expected first-run state: empty list, no error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let tasks = file_io::read_tasks(&path)?;
        Ok(TaskStore { path, tasks })
    }

    /// A store with an empty collection, used when the caller chooses to
    /// keep the session running after a failed load.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        TaskStore {
            path: path.into(),
            tasks: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::TaskNotFound(id.to_string()))
    }

    /// Persist the collection, backing up the previous file content first.
    pub fn save(&self) -> Result<(), StoreError> {
        file_io::write_tasks(&self.path, &self.tasks)
    }

    /// Add a task to the front of the list (most recent first).
    /// The trimmed title must be non-empty.
    pub fn add(&mut self, title: &str) -> Result<&Task, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        self.tasks.insert(0, Task::new(title));
        Ok(&self.tasks[0])
    }

    /// Replace a task's title in place; its position does not change.
    pub fn rename(&mut self, id: &str, new_title: &str) -> Result<(), StoreError> {
        let new_title = new_title.trim();
        if new_title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let task = self.get_mut(id)?;
        task.title = new_title.to_string();
        task.touch();
        Ok(())
    }

    /// Remove a task; the order of the remaining tasks is preserved.
    pub fn remove(&mut self, id: &str) -> Result<Task, StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::TaskNotFound(id.to_string()))?;
        Ok(self.tasks.remove(idx))
    }

    /// Flip a task's completion flag. Returns the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool, StoreError> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        task.touch();
        Ok(task.completed)
    }

    /// Remove every completed task, preserving the order of the rest.
    /// Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    /// Tasks whose title contains `query` as a case-insensitive substring,
    /// in collection order. An empty (or all-whitespace) query matches
    /// everything. Pure read; never mutates.
    pub fn search(&self, query: &str) -> Vec<&Task> {
        match Self::search_matcher(query) {
            Some(re) => self
                .tasks
                .iter()
                .filter(|t| re.is_match(&t.title))
                .collect(),
            None => self.tasks.iter().collect(),
        }
    }

    /// Compile a query into the matcher `search` uses: the query is taken
    /// literally (metacharacters escaped) and matched case-insensitively.
    /// None for a blank query, i.e. no filtering.
    pub fn search_matcher(query: &str) -> Option<Regex> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(query))).ok()
    }

    /// Total / pending / done counters.
    pub fn stats(&self) -> Stats {
        let done = self.tasks.iter().filter(|t| t.completed).count();
        Stats {
            total: self.tasks.len(),
            pending: self.tasks.len() - done,
            done,
        }
    }
}
