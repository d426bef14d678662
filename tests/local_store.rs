#[cfg(test)]
mod tests {
    use std::fs;
    use taskmate::libs::store::LocalStore;
    use taskmate::libs::task::{NewTask, Task, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            StoreTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl StoreTestContext {
        fn store(&self) -> LocalStore {
            LocalStore::new(self.temp_dir.path().join("tasks.json"), self.temp_dir.path().join("tasks.mirror.json"))
        }
    }

    fn sample(texts: &[&str]) -> Vec<Task> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| NewTask::new(text).into_task(i as i64 + 1))
            .collect()
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_without_slots_is_empty(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        assert!(store.load().is_empty());
        assert!(store.last_saved().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_then_load(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        let tasks = sample(&["Buy milk", "Call mom"]);
        store.save(&tasks).unwrap();

        assert_eq!(store.load(), tasks);
        assert!(store.last_saved().is_some());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_both_slots_hold_the_same_snapshot(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.save(&sample(&["Buy milk"])).unwrap();

        let primary: serde_json::Value = serde_json::from_str(&fs::read_to_string(store.primary_path()).unwrap()).unwrap();
        let mirror: serde_json::Value = serde_json::from_str(&fs::read_to_string(store.mirror_path()).unwrap()).unwrap();

        assert_eq!(primary, mirror);
        assert_eq!(primary["tasks"][0]["text"], "Buy milk");
        assert_eq!(primary["tasks"][0]["category"], "General");
        assert!(primary["lastSaved"].is_string());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_corrupt_primary_falls_back_to_mirror(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        let tasks = sample(&["Buy milk"]);
        store.save(&tasks).unwrap();
        fs::write(store.primary_path(), "{ not json").unwrap();

        assert_eq!(store.load(), tasks);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_corrupt_slots_load_empty(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        fs::write(store.primary_path(), "[]").unwrap();
        fs::write(store.mirror_path(), "garbage").unwrap();

        assert!(store.load().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_overwrites_previous_snapshot(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.save(&sample(&["one", "two"])).unwrap();
        store.save(&sample(&["three"])).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "three");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_creates_missing_directory(ctx: &mut StoreTestContext) {
        let nested = ctx.temp_dir.path().join("nested").join("dir");
        let store = LocalStore::new(nested.join("tasks.json"), nested.join("tasks.mirror.json"));
        store.save(&sample(&["Buy milk"])).unwrap();

        assert!(store.primary_path().exists());
        assert!(store.mirror_path().exists());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_legacy_records_load_with_matching_status(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        let legacy = r#"{
            "tasks": [
                { "id": 1, "text": "a", "completed": true, "createdAt": "2025-01-15T09:30:00.000Z" },
                { "id": 2, "text": "b", "category": "Home", "completed": false, "createdAt": "2025-01-15T09:31:00.000Z" }
            ],
            "lastSaved": "2025-01-15T09:31:00.000Z"
        }"#;
        fs::write(store.primary_path(), legacy).unwrap();

        let tasks = store.load();
        assert_eq!(tasks.len(), 2);
        assert!(tasks[0].completed);
        assert_eq!(tasks[0].status, TaskStatus::Completed);
        assert_eq!(tasks[0].category, "General");
        assert!(!tasks[1].completed);
        assert_eq!(tasks[1].status, TaskStatus::Pending);
        assert_eq!(tasks[1].category, "Home");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_conflicting_fields_follow_completed_flag(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        let slot = r#"{
            "tasks": [
                { "id": 1, "text": "a", "completed": false, "status": "completed", "createdAt": "2025-01-15T09:30:00Z" },
                { "id": 2, "text": "b", "completed": false, "status": "someday", "createdAt": "2025-01-15T09:30:00Z" }
            ],
            "lastSaved": "2025-01-15T09:30:00Z"
        }"#;
        fs::write(store.primary_path(), slot).unwrap();

        for task in store.load() {
            assert_eq!(task.completed, task.status == TaskStatus::Completed);
            assert_eq!(task.status, TaskStatus::Pending);
        }
    }
}
