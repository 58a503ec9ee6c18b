/*
[INPUT]:  User-level operations (refresh, add, generate) and a display surface
[OUTPUT]: Server state mirrored onto the surface, typed results for callers
[POS]:    Facade layer - mediates between HTTP client and rendering surface
[UPDATE]: When adding panel operations or changing the surface contract
*/

use crate::http::{Result, TasklistClient, TasklistError};
use crate::render::render_lines;
use crate::types::{AutogenRequest, CreateTaskRequest, Task};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Display capability injected into a panel.
///
/// `render` replaces the whole surface contents at once; `set_busy` disables or
/// re-enables the control that triggers generation. Implementors own their
/// interior mutability so panel operations can take `&self`.
pub trait PanelSurface {
    fn render(&self, lines: &[String]);
    fn set_busy(&self, busy: bool);
}

/// Stateless facade over the task service plus one rendering surface.
///
/// The panel never caches tasks between operations; every mutation is followed
/// by a full list refresh so the surface always shows server-assigned fields.
#[derive(Debug)]
pub struct TaskPanel<S: PanelSurface> {
    client: TasklistClient,
    surface: S,
    generating: AtomicBool,
}

impl<S: PanelSurface> TaskPanel<S> {
    pub fn new(client: TasklistClient, surface: S) -> Self {
        Self {
            client,
            surface,
            generating: AtomicBool::new(false),
        }
    }

    /// Underlying HTTP client
    pub fn client(&self) -> &TasklistClient {
        &self.client
    }

    /// The injected rendering surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Whether an autogeneration call is currently in flight
    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Acquire)
    }

    /// Fetch the raw task list without touching the surface
    pub async fn tasks(&self) -> Result<Vec<Task>> {
        self.client.list_tasks().await
    }

    /// Fetch the full task list and re-render the surface.
    ///
    /// On any error the previous rendering is left untouched.
    pub async fn refresh(&self) -> Result<Vec<Task>> {
        let tasks = self.client.list_tasks().await?;
        self.surface.render(&render_lines(&tasks));
        debug!(count = tasks.len(), "task list refreshed");
        Ok(tasks)
    }

    /// Create a task, then refresh so the surface shows server-assigned fields.
    ///
    /// An empty or whitespace-only title fails fast with a validation error
    /// before any request is sent.
    pub async fn add_task(&self, title: &str, description: Option<&str>) -> Result<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TasklistError::validation("title must not be empty"));
        }

        let req = CreateTaskRequest {
            title: title.to_string(),
            description: description.map(str::to_string),
        };
        let created = self.client.create_task(&req).await?;
        debug!(id = ?created.id, "task created");
        self.refresh().await?;
        Ok(created)
    }

    /// Ask the server to generate `count` tasks from a prompt.
    ///
    /// Returns the number of tasks the server actually created (taken from the
    /// response payload). Only one generation may be in flight per panel; a
    /// second call while one is pending fails with `Busy`. The busy state is
    /// released on every exit path, including errors.
    pub async fn generate_tasks(&self, prompt: &str, count: u32) -> Result<usize> {
        if count == 0 {
            return Err(TasklistError::validation(
                "count must be a positive integer",
            ));
        }

        let mut guard = BusyGuard::acquire(&self.generating, &self.surface)?;

        let req = AutogenRequest {
            prompt: prompt.to_string(),
            n: count,
        };
        let created = self.client.autogen_tasks(&req).await?;
        let generated = created.len();
        info!(requested = count, generated, "tasks autogenerated");

        self.refresh().await?;
        guard.release();
        Ok(generated)
    }
}

/// Scoped busy state: flag plus surface control, released exactly once.
struct BusyGuard<'a, S: PanelSurface> {
    flag: &'a AtomicBool,
    surface: &'a S,
    released: bool,
}

impl<'a, S: PanelSurface> BusyGuard<'a, S> {
    fn acquire(flag: &'a AtomicBool, surface: &'a S) -> Result<Self> {
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(TasklistError::Busy);
        }
        surface.set_busy(true);
        Ok(Self {
            flag,
            surface,
            released: false,
        })
    }

    /// Idempotent: a second call has no further effect.
    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.flag.store(false, Ordering::Release);
        self.surface.set_busy(false);
    }
}

impl<S: PanelSurface> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Minimal surface double: the guard tests only care about busy transitions
    #[derive(Debug, Default)]
    struct BusyRecorder {
        busy_calls: Mutex<Vec<bool>>,
    }

    impl PanelSurface for BusyRecorder {
        fn render(&self, _lines: &[String]) {}

        fn set_busy(&self, busy: bool) {
            self.busy_calls.lock().unwrap().push(busy);
        }
    }

    #[test]
    fn test_busy_guard_release_is_idempotent() {
        let flag = AtomicBool::new(false);
        let surface = BusyRecorder::default();

        let mut guard = BusyGuard::acquire(&flag, &surface).expect("acquire");
        assert!(flag.load(Ordering::Acquire));

        guard.release();
        guard.release();
        drop(guard);

        assert!(!flag.load(Ordering::Acquire));
        assert_eq!(*surface.busy_calls.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_busy_guard_rejects_second_acquire() {
        let flag = AtomicBool::new(false);
        let surface = BusyRecorder::default();

        let _held = BusyGuard::acquire(&flag, &surface).expect("first acquire");
        let second = BusyGuard::acquire(&flag, &surface);
        assert!(matches!(second, Err(TasklistError::Busy)));
    }

    #[test]
    fn test_busy_guard_releases_on_drop() {
        let flag = AtomicBool::new(false);
        let surface = BusyRecorder::default();

        {
            let _guard = BusyGuard::acquire(&flag, &surface).expect("acquire");
            assert!(flag.load(Ordering::Acquire));
        }
        assert!(!flag.load(Ordering::Acquire));
        assert_eq!(*surface.busy_calls.lock().unwrap(), vec![true, false]);
    }
}
