use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn failure(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    /// A report on stdout whose exit code reflects `succeeded`.
    pub fn report(succeeded: bool, fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE },
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }
}
