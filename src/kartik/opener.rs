use crate::error::{CardError, Result};
use std::process::{Command, Stdio};

/// Hands a URL (or `mailto:` target) to whatever the user has registered for it.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Opens links with the platform's launcher.
/// - macOS: uses open
/// - Linux: uses xdg-open, falling back to gio
/// - Windows: uses cmd /C start
#[derive(Debug, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        log::debug!("opening {}", url);

        #[cfg(target_os = "macos")]
        {
            run_launcher(url, &mut [launcher("open", &[url])])
        }

        #[cfg(target_os = "linux")]
        {
            run_launcher(
                url,
                &mut [launcher("xdg-open", &[url]), launcher("gio", &["open", url])],
            )
        }

        #[cfg(target_os = "windows")]
        {
            // The empty string is the window title `start` expects before the target
            run_launcher(url, &mut [launcher("cmd", &["/C", "start", "", url])])
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            Err(CardError::link_open(
                url,
                "opening links is not supported on this platform",
            ))
        }
    }
}

fn launcher(program: &str, args: &[&str]) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd
}

/// Tries each launcher in turn until one spawns and exits successfully.
/// The error from the last candidate tried is reported if none does.
fn run_launcher(url: &str, candidates: &mut [Command]) -> Result<()> {
    let mut last_error = None;

    for cmd in candidates.iter_mut() {
        let program = cmd.get_program().to_string_lossy().into_owned();
        let spawned = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                log::debug!("{} unavailable: {}", program, e);
                last_error = Some(format!("failed to spawn {}: {}", program, e));
                continue;
            }
        };

        match child.wait() {
            Ok(status) if status.success() => return Ok(()),
            Ok(status) => {
                log::debug!("{} exited with {}", program, status);
                last_error = Some(format!("{} exited with {}", program, status));
            }
            Err(e) => {
                last_error = Some(format!("failed to wait for {}: {}", program, e));
            }
        }
    }

    Err(CardError::link_open(
        url,
        last_error.unwrap_or_else(|| "no launcher available".to_string()),
    ))
}
