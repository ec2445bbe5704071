use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub struct ScriptError {
    details: String,
}

impl ScriptError {
    pub fn new(msg: String) -> ScriptError {
        ScriptError { details: msg }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl Error for ScriptError {
    fn description(&self) -> &str {
        &self.details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_error_displays_its_details() {
        let error = ScriptError::new("script exited with code 2".to_string());
        assert_eq!(error.to_string(), "script exited with code 2");
    }
}
