#![allow(dead_code)]

use initpyproj::error::Result;
use initpyproj::process::{ProcessOutput, ProcessRunner};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// One command seen by the [`ScriptedRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Call {
    /// `program` followed by its first argument, e.g. `git init`.
    pub fn verb(&self) -> String {
        match self.args.first() {
            Some(arg) => format!("{} {}", self.program, arg),
            None => self.program.clone(),
        }
    }
}

/// Records every command and answers with scripted outputs, in order.
/// Once the script runs out every command succeeds with empty output.
#[derive(Default)]
pub struct ScriptedRunner {
    calls: RefCell<Vec<Call>>,
    script: RefCell<VecDeque<ProcessOutput>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(self, output: ProcessOutput) -> Self {
        self.script.borrow_mut().push_back(output);
        self
    }

    pub fn then_ok(self, stdout: &str) -> Self {
        self.then(ok(stdout))
    }

    pub fn then_fail(self, code: i32, stderr: &str) -> Self {
        self.then(ProcessOutput {
            stdout: String::new(),
            stderr: stderr.to_string(),
            code: Some(code),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn verbs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(Call::verb).collect()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<ProcessOutput> {
        self.calls.borrow_mut().push(Call {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        });
        Ok(self.script.borrow_mut().pop_front().unwrap_or_else(|| ok("")))
    }
}

pub fn ok(stdout: &str) -> ProcessOutput {
    ProcessOutput { stdout: stdout.to_string(), stderr: String::new(), code: Some(0) }
}
