use crate::config::{Config, ToolCommand};
use std::num::NonZeroUsize;
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

/// Stand-in compositing tool: writes its arguments, one per line, to the last
/// argument (the output path). Fails with exit code 7 when the output path
/// contains "fail".
const FAKE_TOOL_SCRIPT: &str = r#"for last; do :; done
case "$last" in
  *fail*) echo "simulated failure" >&2; exit 7 ;;
esac
printf '%s\n' "$@" > "$last""#;

fn fake_tool() -> ToolCommand {
    ToolCommand {
        program: "sh".to_string(),
        args: vec![
            "-c".to_string(),
            FAKE_TOOL_SCRIPT.to_string(),
            "fake-magick".to_string(),
        ],
    }
}

pub(crate) fn fake_config(jobs: usize) -> Config {
    Config {
        tool: fake_tool(),
        jobs: NonZeroUsize::new(jobs).unwrap(),
        ..Config::default()
    }
}

/// Create empty files named `names` inside `dir`, creating `dir` if needed.
pub(crate) fn touch_files(dir: &Path, names: &[&str]) {
    std::fs::create_dir_all(dir).unwrap();
    for name in names {
        std::fs::write(dir.join(name), b"").unwrap();
    }
}
