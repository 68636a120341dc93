//! Usage: In-memory command runner and host probe for exercising DND strategies in tests.

use super::{CommandRunner, DndError, HostProbe, ShellCommand};
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct FakeRunner {
    failing_programs: HashSet<String>,
    calls: Mutex<Vec<ShellCommand>>,
}

impl FakeRunner {
    pub(crate) fn failing(programs: &[&str]) -> Self {
        Self {
            failing_programs: programs.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<ShellCommand> {
        self.calls.lock().expect("lock calls").clone()
    }

    pub(crate) fn programs(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.program).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, cmd: &ShellCommand) -> Result<(), DndError> {
        self.calls.lock().expect("lock calls").push(cmd.clone());
        if self.failing_programs.contains(&cmd.program) {
            return Err(DndError::CommandFailed {
                command: cmd.to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeHost {
    binaries: HashSet<String>,
    desktop: Option<String>,
}

impl FakeHost {
    pub(crate) fn new(binaries: &[&str], desktop: Option<&str>) -> Self {
        Self {
            binaries: binaries.iter().map(|b| b.to_string()).collect(),
            desktop: desktop.map(str::to_string),
        }
    }
}

impl HostProbe for FakeHost {
    fn has_binary(&self, name: &str) -> bool {
        self.binaries.contains(name)
    }

    fn current_desktop(&self) -> Option<String> {
        self.desktop.clone()
    }
}
