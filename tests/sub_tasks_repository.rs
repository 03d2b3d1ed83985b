#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::rstest;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo_list::db::db::Db;
    use todo_list::db::error::RepositoryError;
    use todo_list::db::sub_tasks::SubTasks;
    use todo_list::db::tasks::Tasks;
    use todo_list::libs::clock::FixedClock;
    use todo_list::libs::task::{Priority, SubTask, Task};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 14, 10, 0, 0).unwrap()
    }

    struct SubTaskTestContext {
        _temp_dir: TempDir,
        db: Db,
        clock: FixedClock,
        task_id: i64,
    }

    impl TestContext for SubTaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("sub_tasks.db")).unwrap();
            let clock = FixedClock::new(now());
            let task_id = Tasks::new(&db.conn, &clock).insert(&Task::new("Parent", now(), now())).unwrap().id;
            SubTaskTestContext {
                _temp_dir: temp_dir,
                db,
                clock,
                task_id,
            }
        }
    }

    impl SubTaskTestContext {
        fn sub_tasks(&self) -> SubTasks<'_> {
            SubTasks::new(&self.db.conn, &self.clock)
        }

        fn add(&self, title: &str) -> SubTask {
            self.sub_tasks().insert(&SubTask::new(self.task_id, title, now(), now())).unwrap()
        }
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_insert_and_get_by_id(ctx: &mut SubTaskTestContext) {
        let created = ctx.add("Step one");
        assert!(created.id > 0);
        assert_eq!(created.task_id, ctx.task_id);

        let fetched = ctx.sub_tasks().get_by_id(created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_get_all_by_task_id(ctx: &mut SubTaskTestContext) {
        ctx.add("A");
        ctx.add("B");

        let all = ctx.sub_tasks().get_all_by_task_id(ctx.task_id).unwrap();
        let titles: Vec<&str> = all.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-1)]
    #[case::unmatched(12345)]
    fn test_get_all_by_unknown_task_id_is_empty(#[case] task_id: i64) {
        let db = Db::in_memory().unwrap();
        let clock = FixedClock::new(now());
        let mut parent = Task::new("Parent", now(), now());
        parent.sub_tasks = vec![SubTask::new(0, "Child", now(), now())];
        Tasks::new(&db.conn, &clock).insert(&parent).unwrap();

        let sub_tasks = SubTasks::new(&db.conn, &clock);
        assert!(sub_tasks.get_all_by_task_id(task_id).unwrap().is_empty());
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_delete_middle_sub_task_leaves_the_others(ctx: &mut SubTaskTestContext) {
        let first = ctx.add("First");
        let second = ctx.add("Second");
        let third = ctx.add("Third");

        assert_eq!(ctx.sub_tasks().delete(second.id).unwrap(), Some(second.id));

        let remaining: Vec<i64> = ctx
            .sub_tasks()
            .get_all_by_task_id(ctx.task_id)
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(remaining, vec![first.id, third.id]);
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_delete_unknown_returns_none(ctx: &mut SubTaskTestContext) {
        ctx.add("Only");
        assert_eq!(ctx.sub_tasks().delete(0).unwrap(), None);
        assert_eq!(ctx.sub_tasks().delete(-3).unwrap(), None);
        assert_eq!(ctx.sub_tasks().delete(99).unwrap(), None);
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_update_changes_mutable_fields_only(ctx: &mut SubTaskTestContext) {
        let created = ctx.add("Draft");

        let mut changes = created.clone();
        changes.title = "Done".to_string();
        changes.is_completed = true;
        changes.priority = Priority::Medium;
        changes.task_id = ctx.task_id + 100;
        changes.due_date = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        let updated = ctx.sub_tasks().update(&changes).unwrap();
        assert_eq!(updated.title, "Done");
        assert!(updated.is_completed);
        assert_eq!(updated.priority, Priority::Medium);
        assert_eq!(updated.task_id, ctx.task_id);
        assert_eq!(updated.due_date, created.due_date);
        assert_eq!(updated.updated_at, Some(now()));
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_update_missing_is_not_found(ctx: &mut SubTaskTestContext) {
        let mut ghost = SubTask::new(ctx.task_id, "Ghost", now(), now());
        ghost.id = 77;

        let err = ctx.sub_tasks().update(&ghost).unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { entity: "SubTask", id: 77 }));
    }

    #[test_context(SubTaskTestContext)]
    #[test]
    fn test_insert_with_dangling_task_id_is_rejected_by_storage(ctx: &mut SubTaskTestContext) {
        let orphan = SubTask::new(ctx.task_id + 1, "Orphan", now(), now());
        let err = ctx.sub_tasks().insert(&orphan).unwrap_err();
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
