//! Task state manager: the single owner of the session's task list.
//!
//! Every mutation follows the same order:
//!
//! 1. validate the input,
//! 2. compute the list as it will look afterwards,
//! 3. hand the change to the backend,
//! 4. commit to memory only once the backend succeeded.
//!
//! A failed backend call therefore leaves the in-memory list exactly as it was.
//! Mutations take `&mut self`, so two of them can never interleave.
//!
//! ```rust,no_run
//! use taskmate::libs::config::Config;
//! use taskmate::libs::data_storage::DataStorage;
//! use taskmate::libs::manager::TaskManager;
//! use taskmate::libs::task::TaskFilter;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut manager = TaskManager::initialize(&Config::read()?, &DataStorage::new()).await;
//! let task = manager.add_task("Buy milk").await?;
//! manager.toggle_task(task.id).await?;
//! for task in manager.list_tasks(TaskFilter::Completed) {
//!     println!("{}", task.text);
//! }
//! # Ok(())
//! # }
//! ```

use super::backend::{SessionBackend, TaskBackend};
use super::config::Config;
use super::data_storage::DataStorage;
use super::error::TaskResult;
use super::store::LocalStore;
use super::task::{validate_text, NewTask, Task, TaskFilter, TaskPatch, TaskStats};
use crate::api::tasks::TasksApi;
use chrono::Utc;
use tracing::{info, warn};

#[derive(Debug)]
pub struct TaskManager<B: TaskBackend = SessionBackend> {
    backend: B,
    tasks: Vec<Task>,
}

impl TaskManager<SessionBackend> {
    /// Opens a session.
    ///
    /// Probes the task service once. When it answers, the remote list becomes the
    /// session's list and every mutation goes to the service. When the probe or
    /// the initial fetch fails, the session falls back to the local slots. No
    /// error escapes: the worst case is an empty local list.
    pub async fn initialize(config: &Config, storage: &DataStorage) -> Self {
        let api = TasksApi::new(&config.api_url());
        let store = LocalStore::from_config(storage, &config.storage());

        if api.probe().await {
            match api.fetch_all().await {
                Ok(tasks) => {
                    info!(url = api.base_url(), count = tasks.len(), "task service connected");
                    return Self::with_tasks(SessionBackend::Remote(api), tasks);
                }
                Err(err) => warn!(error = %err, "failed to fetch remote tasks, using local storage"),
            }
        } else {
            warn!(url = api.base_url(), "task service not available, using local storage");
        }

        let tasks = store.load();
        Self::with_tasks(SessionBackend::Local(store), tasks)
    }

    pub fn local_store(&self) -> Option<&LocalStore> {
        self.backend.local_store()
    }
}

impl<B: TaskBackend> TaskManager<B> {
    pub fn with_tasks(backend: B, tasks: Vec<Task>) -> Self {
        Self { backend, tasks }
    }

    /// Builds a manager over `backend`, hydrated from [`TaskBackend::load`].
    pub async fn open(backend: B) -> TaskResult<Self> {
        let tasks = backend.load().await?;
        Ok(Self::with_tasks(backend, tasks))
    }

    /// Session mode: `true` when the remote service is authoritative.
    pub fn backend_available(&self) -> bool {
        self.backend.is_remote()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Filtered view over the list in insertion order. Never mutates.
    pub fn list_tasks(&self, filter: TaskFilter) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| task.matches(filter))
    }

    pub async fn add_task(&mut self, text: &str) -> TaskResult<Task> {
        self.add(NewTask::new(text)).await
    }

    /// Creates a task and appends it to the list.
    pub async fn add(&mut self, mut draft: NewTask) -> TaskResult<Task> {
        validate_text(&draft.text)?;
        draft.text = draft.text.trim().to_string();

        let task = self.backend.create(draft, &self.tasks).await?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Flips completion of task `id`. Unknown ids are a silent no-op (`Ok(None)`).
    pub async fn toggle_task(&mut self, id: i64) -> TaskResult<Option<Task>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let updated = self.tasks[index].toggled();
        let patch = TaskPatch::status(updated.status);
        self.commit_update(index, updated, &patch).await.map(Some)
    }

    /// Replaces the text of task `id`. Unknown ids are a no-op (`Ok(None)`).
    pub async fn rename_task(&mut self, id: i64, new_text: &str) -> TaskResult<Option<Task>> {
        validate_text(new_text)?;
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let text = new_text.trim();
        let mut updated = self.tasks[index].clone();
        updated.text = text.to_string();
        let patch = TaskPatch::title(text);
        self.commit_update(index, updated, &patch).await.map(Some)
    }

    /// Removes task `id`. Returns `false` when no such task is in the list.
    pub async fn delete_task(&mut self, id: i64) -> TaskResult<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        let mut snapshot = self.tasks.clone();
        snapshot.remove(index);

        self.backend.delete(id, &snapshot).await?;
        self.tasks = snapshot;
        Ok(true)
    }

    /// Deletes every completed task, in list order.
    ///
    /// Stops at the first failure; tasks deleted before it stay deleted.
    /// Returns how many were removed.
    pub async fn clear_completed(&mut self) -> TaskResult<usize> {
        let ids: Vec<i64> = self.list_tasks(TaskFilter::Completed).map(|task| task.id).collect();
        let mut removed = 0;
        for id in ids {
            if self.delete_task(id).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Returns the freshest copy of task `id` and refreshes the in-memory entry.
    pub async fn get_task(&mut self, id: i64) -> TaskResult<Option<Task>> {
        let Some(mut fresh) = self.backend.fetch(id, &self.tasks).await? else {
            return Ok(None);
        };
        if let Some(index) = self.position(id) {
            fresh.category = self.tasks[index].category.clone();
            self.tasks[index] = fresh.clone();
        }
        Ok(Some(fresh))
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    async fn commit_update(&mut self, index: usize, mut updated: Task, patch: &TaskPatch) -> TaskResult<Task> {
        updated.updated_at = Some(Utc::now());
        let mut snapshot = self.tasks.clone();
        snapshot[index] = updated.clone();

        if let Some(server) = self.backend.update(updated.id, patch, &snapshot).await? {
            updated.updated_at = server.updated_at.or(updated.updated_at);
        }
        self.tasks[index] = updated.clone();
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::error::TaskError;
    use crate::libs::task::TaskStatus;
    use std::cell::Cell;

    /// In-memory backend that can be told to fail every mutation.
    #[derive(Default)]
    struct FlakyBackend {
        fail: Cell<bool>,
        calls: Cell<usize>,
    }

    impl FlakyBackend {
        fn check(&self) -> TaskResult<()> {
            self.calls.set(self.calls.get() + 1);
            if self.fail.get() {
                return Err(TaskError::Backend("service down".to_string()));
            }
            Ok(())
        }
    }

    impl TaskBackend for FlakyBackend {
        fn is_remote(&self) -> bool {
            true
        }

        async fn load(&self) -> TaskResult<Vec<Task>> {
            Ok(Vec::new())
        }

        async fn create(&self, draft: NewTask, current: &[Task]) -> TaskResult<Task> {
            self.check()?;
            Ok(draft.into_task(current.len() as i64 + 1))
        }

        async fn update(&self, _id: i64, _patch: &TaskPatch, _snapshot: &[Task]) -> TaskResult<Option<Task>> {
            self.check()?;
            Ok(None)
        }

        async fn delete(&self, _id: i64, _snapshot: &[Task]) -> TaskResult<()> {
            self.check()
        }

        async fn fetch(&self, id: i64, current: &[Task]) -> TaskResult<Option<Task>> {
            Ok(current.iter().find(|t| t.id == id).cloned())
        }
    }

    async fn manager_with(texts: &[&str]) -> TaskManager<FlakyBackend> {
        let mut manager = TaskManager::open(FlakyBackend::default()).await.unwrap();
        for text in texts {
            manager.add_task(text).await.unwrap();
        }
        manager
    }

    #[tokio::test]
    async fn add_appends_pending_task() {
        let mut manager = manager_with(&["one"]).await;
        let task = manager.add_task("  two  ").await.unwrap();
        assert_eq!(manager.tasks().len(), 2);
        assert_eq!(task.text, "two");
        assert!(!task.completed);
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn add_rejects_blank_text_without_calling_backend() {
        let mut manager = manager_with(&[]).await;
        assert!(manager.add_task("").await.unwrap_err().is_validation());
        assert!(manager.add_task("   ").await.unwrap_err().is_validation());
        assert!(manager.tasks().is_empty());
        assert_eq!(manager.backend().calls.get(), 0);
    }

    #[tokio::test]
    async fn toggle_twice_restores_completion() {
        let mut manager = manager_with(&["one"]).await;
        let id = manager.tasks()[0].id;

        let once = manager.toggle_task(id).await.unwrap().unwrap();
        assert!(once.completed);
        assert_eq!(once.status, TaskStatus::Completed);

        let twice = manager.toggle_task(id).await.unwrap().unwrap();
        assert!(!twice.completed);
        assert_eq!(twice.status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn toggle_unknown_id_is_noop() {
        let mut manager = manager_with(&["one"]).await;
        let calls = manager.backend().calls.get();
        assert!(manager.toggle_task(999).await.unwrap().is_none());
        assert_eq!(manager.backend().calls.get(), calls);
    }

    #[tokio::test]
    async fn failed_backend_leaves_memory_unchanged() {
        let mut manager = manager_with(&["one"]).await;
        let before = manager.tasks().to_vec();
        let id = before[0].id;
        manager.backend().fail.set(true);

        assert!(manager.toggle_task(id).await.unwrap_err().is_backend());
        assert!(manager.rename_task(id, "renamed").await.unwrap_err().is_backend());
        assert!(manager.delete_task(id).await.unwrap_err().is_backend());
        assert!(manager.add_task("two").await.unwrap_err().is_backend());
        assert_eq!(manager.tasks(), before.as_slice());
    }

    #[tokio::test]
    async fn rename_rejects_blank_text() {
        let mut manager = manager_with(&["one"]).await;
        let id = manager.tasks()[0].id;
        assert!(manager.rename_task(id, "").await.unwrap_err().is_validation());
        assert_eq!(manager.find(id).unwrap().text, "one");

        let renamed = manager.rename_task(id, "uno").await.unwrap().unwrap();
        assert_eq!(renamed.text, "uno");
        assert!(renamed.updated_at.is_some());
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let mut manager = manager_with(&["one", "two"]).await;
        let id = manager.tasks()[0].id;
        assert!(manager.delete_task(id).await.unwrap());
        assert!(manager.list_tasks(TaskFilter::All).all(|t| t.id != id));
        assert!(!manager.delete_task(id).await.unwrap());
    }

    #[tokio::test]
    async fn list_filters_preserve_order() {
        let mut manager = manager_with(&["a", "b", "c"]).await;
        let ids: Vec<i64> = manager.tasks().iter().map(|t| t.id).collect();
        manager.toggle_task(ids[1]).await.unwrap();

        let active: Vec<&str> = manager.list_tasks(TaskFilter::Active).map(|t| t.text.as_str()).collect();
        assert_eq!(active, vec!["a", "c"]);
        let done: Vec<i64> = manager.list_tasks(TaskFilter::Completed).map(|t| t.id).collect();
        assert_eq!(done, vec![ids[1]]);
        assert_eq!(manager.list_tasks(TaskFilter::All).count(), 3);
        assert_eq!(manager.list_tasks(TaskFilter::All).count(), 3);
    }

    #[tokio::test]
    async fn clear_completed_keeps_active_tasks() {
        let mut manager = manager_with(&["a", "b", "c"]).await;
        let ids: Vec<i64> = manager.tasks().iter().map(|t| t.id).collect();
        manager.toggle_task(ids[0]).await.unwrap();
        manager.toggle_task(ids[2]).await.unwrap();

        assert_eq!(manager.clear_completed().await.unwrap(), 2);
        let left: Vec<&str> = manager.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(left, vec!["b"]);
        assert_eq!(manager.stats(), TaskStats { total: 1, completed: 0, active: 1 });
    }
}
