use std::process::Command;

/// Returned when a tool cannot be spawned or exits without a status code.
const FAIL_ERROR_CODE: i32 = 2;

/// Run an external conversion tool with positional input and output path
/// arguments, blocking until it exits.
///
/// # Arguments
///
/// * `tool` - The command to run, either a name on the PATH or a relative
///   script path.
/// * `file_in` - The path to the input file.
/// * `file_out` - The path to the output file.
///
/// # Returns
///
/// The exit code of the tool. The batch loop records this but never acts
/// on it; the run continues regardless of the outcome.
pub fn run_tool(tool: &str, file_in: &str, file_out: &str) -> i32 {
    let r = Command::new(tool).arg(file_in).arg(file_out).output();

    if let Ok(exit) = r {
        if let Some(code) = exit.status.code() {
            code
        } else {
            FAIL_ERROR_CODE
        }
    } else {
        FAIL_ERROR_CODE
    }
}
