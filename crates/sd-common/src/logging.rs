use std::panic;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install a global panic hook that reports panics through `tracing`.
/// Safe to call multiple times; the hook is installed once per process.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();
        let include_backtrace = std::env::var("SD_LOG_INCLUDE_BACKTRACE")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic payload not string".into());

            tracing::error!(
                application = app_name,
                location = location.as_deref().unwrap_or("unknown"),
                panic_message = %message,
                "panic captured"
            );

            if include_backtrace {
                default_hook(info);
            }
        }));
    });
}

fn rotating_file_writer(app_name: &'static str) -> Option<BoxMakeWriter> {
    let dir = PathBuf::from(std::env::var_os("SD_LOG_DIR")?);
    file_writer_in(&dir, app_name)
}

fn file_writer_in(dir: &Path, app_name: &'static str) -> Option<BoxMakeWriter> {
    if let Err(err) = std::fs::create_dir_all(dir) {
        tracing::warn!(
            log_dir = %dir.display(),
            error = %err,
            "failed to create SD_LOG_DIR; logging to stderr"
        );
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(non_blocking))
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` controls filtering (default `info`). When `SD_LOG_DIR` is set, logs go to
/// `<SD_LOG_DIR>/<app>.log` with daily rotation; otherwise they go to stderr so that
/// CLI output on stdout stays machine-readable.
pub fn init_tracing_subscriber(app_name: &'static str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    if let Some(writer) = rotating_file_writer(app_name) {
        let _ = builder.with_ansi(false).with_writer(writer).try_init();
    } else {
        let _ = builder.with_writer(std::io::stderr).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unusable_log_dir_falls_back_to_stderr() {
        // 既存ファイルの下にはディレクトリを作れない
        let blocker = std::env::temp_dir().join(format!("sd-log-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"").unwrap();

        let writer = file_writer_in(&blocker.join("logs"), "sd-test");

        std::fs::remove_file(&blocker).unwrap();
        assert!(writer.is_none());
        assert!(LOG_GUARD.get().is_none());
    }
}
