//! Mock session for testing.
//!
//! `MockSession` behaves like a tiny fake host: it knows which executables
//! are on PATH and which executable files exist, answers `which` and
//! `test -x` accordingly, and can be told that some command (say
//! `make install`) puts a new executable there. Every command is recorded
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use biorecipe::remote::{MockSession, Session};
//!
//! let host = MockSession::new();
//! host.installs("make install", "embossversion");
//!
//! assert!(!host.exec("which embossversion").unwrap().success);
//! host.exec("cd /tmp/EMBOSS-6.3.1 && sudo -n make install").unwrap();
//! assert!(host.exec("which embossversion").unwrap().success);
//! ```

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::Duration;

use crate::error::Result;
use crate::shell::CommandResult;

use super::Session;

#[derive(Debug, Clone)]
struct Rule {
    pattern: String,
    exit_code: i32,
    stdout: String,
    stderr: String,
}

#[derive(Debug, Clone)]
enum Placement {
    OnPath(String),
    File(String),
}

#[derive(Debug, Default)]
struct State {
    rules: Vec<Rule>,
    triggers: Vec<(String, Placement)>,
    installed: BTreeSet<String>,
    files: BTreeSet<String>,
    commands: Vec<String>,
}

/// Scriptable fake host.
///
/// Clones share state, so a test can keep one handle while the other is
/// boxed into a [`RemoteEnv`](super::RemoteEnv).
#[derive(Debug, Clone, Default)]
pub struct MockSession {
    state: Rc<RefCell<State>>,
}

impl MockSession {
    /// Create a fake host with nothing installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer any command containing `pattern` with a fixed result.
    ///
    /// Rules are checked in the order they were added, before anything else.
    pub fn respond(&self, pattern: &str, exit_code: i32, stdout: &str) {
        self.state.borrow_mut().rules.push(Rule {
            pattern: pattern.to_string(),
            exit_code,
            stdout: stdout.to_string(),
            stderr: String::new(),
        });
    }

    /// Make any command containing `pattern` exit with `exit_code`.
    pub fn fail_on(&self, pattern: &str, exit_code: i32, stderr: &str) {
        self.state.borrow_mut().rules.push(Rule {
            pattern: pattern.to_string(),
            exit_code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        });
    }

    /// Put `executable` on the fake PATH.
    pub fn mark_installed(&self, executable: &str) {
        self.state
            .borrow_mut()
            .installed
            .insert(executable.to_string());
    }

    /// Create an executable file at `path`, visible to `test -x` only.
    pub fn add_file(&self, path: &str) {
        self.state.borrow_mut().files.insert(path.to_string());
    }

    /// Running a command containing `pattern` puts `executable` on PATH.
    pub fn installs(&self, pattern: &str, executable: &str) {
        self.state.borrow_mut().triggers.push((
            pattern.to_string(),
            Placement::OnPath(executable.to_string()),
        ));
    }

    /// Running a command containing `pattern` creates the executable `path`.
    pub fn installs_file(&self, pattern: &str, path: &str) {
        self.state
            .borrow_mut()
            .triggers
            .push((pattern.to_string(), Placement::File(path.to_string())));
    }

    /// Whether `executable` is currently on the fake PATH.
    pub fn is_installed(&self, executable: &str) -> bool {
        self.state.borrow().installed.contains(executable)
    }

    /// All commands executed so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.state.borrow().commands.clone()
    }

    /// Executed commands containing `pattern`.
    pub fn commands_matching(&self, pattern: &str) -> Vec<String> {
        self.state
            .borrow()
            .commands
            .iter()
            .filter(|c| c.contains(pattern))
            .cloned()
            .collect()
    }

    /// Forget recorded commands, keeping rules and installed executables.
    pub fn clear_commands(&self) {
        self.state.borrow_mut().commands.clear();
    }
}

impl Session for MockSession {
    fn exec(&self, command: &str) -> Result<CommandResult> {
        let mut state = self.state.borrow_mut();
        state.commands.push(command.to_string());

        if let Some(rule) = state.rules.iter().find(|r| command.contains(&r.pattern)) {
            let rule = rule.clone();
            return Ok(if rule.exit_code == 0 {
                CommandResult::success(rule.stdout, rule.stderr, Duration::ZERO)
            } else {
                CommandResult::failure(Some(rule.exit_code), rule.stdout, rule.stderr, Duration::ZERO)
            });
        }

        if let Some(executable) = command.strip_prefix("which ") {
            let executable = executable.trim().trim_matches('\'');
            return Ok(if state.installed.contains(executable) {
                CommandResult::success(
                    format!("/usr/local/bin/{}\n", executable),
                    String::new(),
                    Duration::ZERO,
                )
            } else {
                CommandResult::failure(Some(1), String::new(), String::new(), Duration::ZERO)
            });
        }

        if let Some(path) = command.strip_prefix("test -x ") {
            let path = path.trim().trim_matches('\'');
            return Ok(if state.files.contains(path) {
                CommandResult::success(String::new(), String::new(), Duration::ZERO)
            } else {
                CommandResult::failure(Some(1), String::new(), String::new(), Duration::ZERO)
            });
        }

        let placed: Vec<Placement> = state
            .triggers
            .iter()
            .filter(|(pattern, _)| command.contains(pattern.as_str()))
            .map(|(_, placement)| placement.clone())
            .collect();
        for placement in placed {
            match placement {
                Placement::OnPath(exe) => state.installed.insert(exe),
                Placement::File(path) => state.files.insert(path),
            };
        }

        Ok(CommandResult::success(
            String::new(),
            String::new(),
            Duration::ZERO,
        ))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn which_follows_installed_set() {
        let host = MockSession::new();
        assert!(!host.exec("which samtools").unwrap().success);

        host.mark_installed("samtools");
        let result = host.exec("which samtools").unwrap();
        assert!(result.success);
        assert_eq!(result.stdout.trim(), "/usr/local/bin/samtools");
    }

    #[test]
    fn which_accepts_quoted_names() {
        let host = MockSession::new();
        host.mark_installed("my tool");
        assert!(host.exec("which 'my tool'").unwrap().success);
    }

    #[test]
    fn rules_win_over_builtin_behavior() {
        let host = MockSession::new();
        host.fail_on("wget", 4, "network unreachable");
        let result = host.exec("cd /tmp && wget -O a.zip http://x/a.zip").unwrap();
        assert_eq!(result.exit_code, Some(4));
        assert_eq!(result.stderr, "network unreachable");
    }

    #[test]
    fn triggers_install_executables() {
        let host = MockSession::new();
        host.installs("mv PGDSpider2.sh", "PGDSpider2.sh");
        host.exec("cd /tmp/x && sudo -n mv PGDSpider2.sh /usr/local/bin")
            .unwrap();
        assert!(host.is_installed("PGDSpider2.sh"));
    }

    #[test]
    fn test_x_follows_files() {
        let host = MockSession::new();
        host.installs_file("make install", "/opt/bio/bin/bedtools");
        assert!(!host.exec("test -x /opt/bio/bin/bedtools").unwrap().success);

        host.exec("sudo -n make install").unwrap();
        assert!(host.exec("test -x /opt/bio/bin/bedtools").unwrap().success);
        assert!(!host.exec("which bedtools").unwrap().success);
    }

    #[test]
    fn clones_share_recorded_commands() {
        let host = MockSession::new();
        let boxed: Box<dyn Session> = Box::new(host.clone());
        boxed.exec("echo one").unwrap();
        assert_eq!(host.commands(), vec!["echo one"]);
        assert_eq!(host.commands_matching("one").len(), 1);

        host.clear_commands();
        assert!(host.commands().is_empty());
    }
}
