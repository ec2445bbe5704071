use std::process::Stdio;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::process::Command;

use crate::config::AppConfig;
use crate::errors::ScriptError;

pub const RACE_DATA_SCRIPT: &str = "get_replay_data.py";
pub const LOCATION_DATA_SCRIPT: &str = "get_location_data.py";

/// # Race timing result
/// what the replay data script prints for the `race_times` task. the
/// race control messages ride along for the front end (dnf markers etc).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RaceTiming {
    pub race_start_date: String,
    pub race_end_date: String,
    #[serde(default)]
    pub all_messages: Vec<Value>,
}

/// Run one of the data scripts and hand back its stdout.
///
/// Exit code zero resolves with stdout. Stderr output alone is only
/// logged; paired with a non-zero exit code it becomes the error text.
pub async fn run_script(config: &AppConfig, script: &str, args: &[String]) -> Result<String, ScriptError> {
    let script_path = config.scripts_dir.join(script);
    info!(target: "replay_api:run_script", "Running {} {}", script_path.display(), args.join(" "));

    let output = Command::new(&config.python_bin)
        .arg(&script_path)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|error| ScriptError::new(format!("failed to start {script}: {error}")))?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        warn!(target: "replay_api:run_script", "{} wrote to stderr: {}", script, stderr.trim());
    }

    if !output.status.success() {
        let message = if stderr.trim().is_empty() {
            format!("{} exited with code {}", script, output.status.code().unwrap_or(-1))
        } else {
            stderr.trim().to_string()
        };
        return Err(ScriptError::new(message));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Fetch the race start/end times and race control messages for a
/// session. The script reports its own failures through an `error`
/// field, which counts as a failure even on a clean exit.
pub async fn get_race_times(
    config: &AppConfig,
    year: &str,
    event: &str,
    session: &str,
) -> Result<RaceTiming, ScriptError> {
    let args = vec![
        "race_times".to_string(),
        year.to_string(),
        event.to_string(),
        session.to_string(),
    ];
    let stdout = run_script(config, RACE_DATA_SCRIPT, &args).await?;
    parse_race_times(&stdout)
}

pub fn parse_race_times(raw: &str) -> Result<RaceTiming, ScriptError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|error| ScriptError::new(format!("malformed race data: {error}")))?;

    if let Some(error) = value.get("error").and_then(Value::as_str) {
        return Err(ScriptError::new(error.to_string()));
    }

    serde_json::from_value(value)
        .map_err(|error| ScriptError::new(format!("unexpected race data shape: {error}")))
}

/// Fetch a chunk of driver location telemetry. The output is passed
/// through to the caller as-is.
pub async fn get_location_data(
    config: &AppConfig,
    year: &str,
    event: &str,
    session: &str,
    start_time: &str,
    end_time: &str,
) -> Result<Value, ScriptError> {
    let args = vec![
        year.to_string(),
        event.to_string(),
        session.to_string(),
        start_time.to_string(),
        end_time.to_string(),
    ];
    let stdout = run_script(config, LOCATION_DATA_SCRIPT, &args).await?;

    serde_json::from_str(&stdout)
        .map_err(|error| ScriptError::new(format!("malformed location data: {error}")))
}
