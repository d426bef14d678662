//! Storage backends behind the task manager.
//!
//! A session is served by exactly one backend, picked at startup:
//!
//! - [`SessionBackend::Remote`]: every mutation goes to the task service.
//! - [`SessionBackend::Local`]: every mutation rewrites the local slots.
//!
//! The manager hands each call the list as it will look once the mutation is
//! committed (`snapshot`). The remote backend ignores it and sends only the
//! changed fields; the local backend persists it whole.
//!
//! Local write failures are logged and swallowed: the session keeps working from
//! memory and the next successful save catches the slots up.

use super::error::TaskResult;
use super::store::LocalStore;
use super::task::{NewTask, Task, TaskPatch};
use crate::api::tasks::TasksApi;
use chrono::Utc;
use tracing::warn;

#[allow(async_fn_in_trait)]
pub trait TaskBackend {
    /// `true` when mutations are sent to the remote task service.
    fn is_remote(&self) -> bool;

    /// Reads the authoritative list for a new session.
    async fn load(&self) -> TaskResult<Vec<Task>>;

    /// Creates a task from `draft`. `current` is the list before the insert.
    async fn create(&self, draft: NewTask, current: &[Task]) -> TaskResult<Task>;

    /// Applies `patch` to task `id`. Returns the service's copy when there is one.
    async fn update(&self, id: i64, patch: &TaskPatch, snapshot: &[Task]) -> TaskResult<Option<Task>>;

    /// Removes task `id`. `snapshot` no longer contains it.
    async fn delete(&self, id: i64, snapshot: &[Task]) -> TaskResult<()>;

    /// Looks up a single task. `current` is the in-memory list.
    async fn fetch(&self, id: i64, current: &[Task]) -> TaskResult<Option<Task>>;
}

/// Next local id: the current time in milliseconds, bumped past the largest id
/// already in the list so two tasks created in the same millisecond never collide.
/// When the largest id is `i64::MAX` the search restarts from the clock.
pub fn next_local_id(current: &[Task]) -> i64 {
    let now = Utc::now().timestamp_millis();
    let start = match current.iter().map(|task| task.id).max() {
        Some(max) if max >= now => max.checked_add(1).unwrap_or(now),
        _ => now,
    };
    (start..=i64::MAX)
        .find(|id| current.iter().all(|task| task.id != *id))
        .unwrap_or(start)
}

#[derive(Debug, Clone)]
pub enum SessionBackend {
    Remote(TasksApi),
    Local(LocalStore),
}

impl SessionBackend {
    pub fn local_store(&self) -> Option<&LocalStore> {
        match self {
            SessionBackend::Local(store) => Some(store),
            SessionBackend::Remote(_) => None,
        }
    }
}

fn persist(store: &LocalStore, snapshot: &[Task]) {
    if let Err(err) = store.save(snapshot) {
        warn!(error = %err, "could not persist tasks locally, continuing from memory");
    }
}

impl TaskBackend for SessionBackend {
    fn is_remote(&self) -> bool {
        matches!(self, SessionBackend::Remote(_))
    }

    async fn load(&self) -> TaskResult<Vec<Task>> {
        match self {
            SessionBackend::Remote(api) => api.fetch_all().await,
            SessionBackend::Local(store) => Ok(store.load()),
        }
    }

    async fn create(&self, draft: NewTask, current: &[Task]) -> TaskResult<Task> {
        match self {
            SessionBackend::Remote(api) => api.create(&draft).await,
            SessionBackend::Local(store) => {
                let task = draft.into_task(next_local_id(current));
                let mut snapshot = current.to_vec();
                snapshot.push(task.clone());
                persist(store, &snapshot);
                Ok(task)
            }
        }
    }

    async fn update(&self, id: i64, patch: &TaskPatch, snapshot: &[Task]) -> TaskResult<Option<Task>> {
        match self {
            SessionBackend::Remote(api) => api.update(id, patch).await.map(Some),
            SessionBackend::Local(store) => {
                persist(store, snapshot);
                Ok(None)
            }
        }
    }

    async fn delete(&self, id: i64, snapshot: &[Task]) -> TaskResult<()> {
        match self {
            SessionBackend::Remote(api) => api.delete(id).await,
            SessionBackend::Local(store) => {
                persist(store, snapshot);
                Ok(())
            }
        }
    }

    async fn fetch(&self, id: i64, current: &[Task]) -> TaskResult<Option<Task>> {
        match self {
            SessionBackend::Remote(api) => api.fetch(id).await.map(Some),
            SessionBackend::Local(_) => Ok(current.iter().find(|task| task.id == id).cloned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_id_is_time_derived_for_empty_list() {
        let before = Utc::now().timestamp_millis();
        let id = next_local_id(&[]);
        assert!(id >= before);
    }

    #[test]
    fn local_id_skips_past_future_ids() {
        let far_future = Utc::now().timestamp_millis() + 60_000;
        let existing = NewTask::new("later").into_task(far_future);
        assert_eq!(next_local_id(&[existing]), far_future + 1);
    }

    #[test]
    fn local_id_does_not_overflow() {
        let before = Utc::now().timestamp_millis();
        let existing = NewTask::new("edited by hand").into_task(i64::MAX);
        let id = next_local_id(&[existing]);
        assert_ne!(id, i64::MAX);
        assert!(id >= before);
    }
}
