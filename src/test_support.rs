use crate::plan::{DayPlan, Plan};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A small deterministic plan for materialization tests.
pub(crate) fn sample_plan(days: usize) -> Plan {
    let days = (1..=days)
        .map(|i| DayPlan {
            title: format!("Sample Day {}", i),
            area: Some("practice".to_string()),
            focus: format!("Work through exercise {}.", i),
            timebox: Some("~1 hour".to_string()),
            build: vec![format!("Complete step {}.", i)],
            dod: vec!["Exercise compiles.".to_string()],
            commit_msg: format!("feat(day-{:02}): complete exercise", i),
            ..Default::default()
        })
        .collect();

    Plan { days }
}
