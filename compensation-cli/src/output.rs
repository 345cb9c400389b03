//! Where command results go
//!
//! Handlers never print directly; they write through [`Output`] so a run can
//! be captured and inspected in tests.

use crate::error::CliResult;

pub trait Output: Send + Sync {
    /// Report text on stdout
    fn print(&self, msg: &str) -> CliResult<()>;

    /// Diagnostic text on stderr
    fn error(&self, msg: &str) -> CliResult<()>;

    /// Non-fatal notice, such as a participant who earns nothing
    fn warning(&self, msg: &str) -> CliResult<()> {
        self.print(&format!("warning: {}", msg))
    }

    fn print_json(&self, data: &serde_json::Value) -> CliResult<()> {
        self.print(&serde_json::to_string_pretty(data)?)
    }

    /// Title underlined to its own width
    fn header(&self, title: &str) -> CliResult<()> {
        let underline = "=".repeat(title.chars().count());
        self.print(&format!("\n{}\n{}", title, underline))
    }
}

/// Writes to the process's stdout and stderr
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn print(&self, msg: &str) -> CliResult<()> {
        println!("{}", msg);
        Ok(())
    }

    fn error(&self, msg: &str) -> CliResult<()> {
        eprintln!("error: {}", msg);
        Ok(())
    }
}

pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Captured {
        Stdout(String),
        Stderr(String),
    }

    /// Records every line a command emits, in order
    #[derive(Clone, Default)]
    pub struct MockOutput {
        lines: Arc<Mutex<Vec<Captured>>>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        fn push(&self, line: Captured) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(line);
            }
        }

        pub fn captured(&self) -> Vec<Captured> {
            self.lines.lock().map(|l| l.clone()).unwrap_or_default()
        }

        pub fn stdout(&self) -> Vec<String> {
            self.captured()
                .into_iter()
                .filter_map(|line| match line {
                    Captured::Stdout(text) => Some(text),
                    Captured::Stderr(_) => None,
                })
                .collect()
        }

        pub fn stderr(&self) -> Vec<String> {
            self.captured()
                .into_iter()
                .filter_map(|line| match line {
                    Captured::Stderr(text) => Some(text),
                    Captured::Stdout(_) => None,
                })
                .collect()
        }

        /// Stdout joined into what a terminal would have shown
        pub fn transcript(&self) -> String {
            self.stdout().join("\n")
        }

        pub fn assert_printed(&self, needle: &str) {
            let transcript = self.transcript();
            assert!(
                transcript.contains(needle),
                "stdout does not contain {:?}:\n{}",
                needle,
                transcript
            );
        }
    }

    impl Output for MockOutput {
        fn print(&self, msg: &str) -> CliResult<()> {
            self.push(Captured::Stdout(msg.to_string()));
            Ok(())
        }

        fn error(&self, msg: &str) -> CliResult<()> {
            self.push(Captured::Stderr(msg.to_string()));
            Ok(())
        }
    }
}
