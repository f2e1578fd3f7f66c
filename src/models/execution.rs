// src/models/execution.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the remote execution service accepts.
/// Serialized with the identifiers the backend and the editor widget use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Javascript,
    Python,
    Java,
    #[serde(alias = "c++")]
    Cpp,
    C,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Javascript,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::C,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Javascript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::C => "C",
        }
    }

    /// Guesses the language from a file extension, used by the CLI `load`/`run`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "mjs" => Some(Language::Javascript),
            "py" => Some(Language::Python),
            "java" => Some(Language::Java),
            "cpp" | "cc" | "cxx" => Some(Language::Cpp),
            "c" => Some(Language::C),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Language::Javascript),
            "python" | "py" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "cpp" | "c++" => Ok(Language::Cpp),
            "c" => Ok(Language::C),
            other => Err(format!("unsupported language '{}'", other)),
        }
    }
}

/// Body of `POST /code/run`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRequest {
    pub language: Language,
    pub code: String,
    pub stdin: String,
}

/// Whatever the execution service reports. Every field is optional and
/// the backend uses both camelCase and snake_case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default, alias = "compile_stdout")]
    pub compile_stdout: Option<String>,
    #[serde(default, alias = "compile_stderr")]
    pub compile_stderr: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Milliseconds, or a preformatted string such as `"0.12s"`.
    #[serde(default, alias = "execution_time", alias = "time")]
    pub execution_time: Option<serde_json::Value>,
}

impl ExecutionResult {
    /// Joins every non-empty stream into the single string the console shows.
    /// Order: compile stdout, compile stderr, stdout, stderr, error.
    pub fn to_display(&self) -> String {
        let parts: Vec<&str> = [
            &self.compile_stdout,
            &self.compile_stderr,
            &self.stdout,
            &self.stderr,
            &self.error,
        ]
        .into_iter()
        .filter_map(|p| p.as_deref())
        .map(|p| p.trim_end_matches('\n'))
        .filter(|p| !p.trim().is_empty())
        .collect();

        let mut out = if parts.is_empty() {
            "No output".to_string()
        } else {
            parts.join("\n")
        };

        if let Some(time) = self.execution_time_label() {
            out.push_str("\n\nExecution time: ");
            out.push_str(&time);
        }
        out
    }

    fn execution_time_label(&self) -> Option<String> {
        match self.execution_time.as_ref()? {
            serde_json::Value::Number(n) => Some(format!("{} ms", n)),
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_concatenates_streams_in_order() {
        let result = ExecutionResult {
            compile_stderr: Some("warning: unused variable\n".to_string()),
            stdout: Some("42\n".to_string()),
            stderr: Some(String::new()),
            execution_time: Some(serde_json::json!(17)),
            ..Default::default()
        };
        assert_eq!(
            result.to_display(),
            "warning: unused variable\n42\n\nExecution time: 17 ms"
        );
    }

    #[test]
    fn display_without_output_says_so() {
        assert_eq!(ExecutionResult::default().to_display(), "No output");
    }

    #[test]
    fn snake_case_payload_is_accepted() {
        let result: ExecutionResult = serde_json::from_str(
            r#"{"compile_stdout":"ok","stdout":"hi","execution_time":"0.03s"}"#,
        )
        .unwrap();
        assert_eq!(result.to_display(), "ok\nhi\n\nExecution time: 0.03s");
    }

    #[test]
    fn language_round_trips_through_wire_names() {
        assert_eq!(serde_json::to_string(&Language::Cpp).unwrap(), "\"cpp\"");
        assert_eq!("C++".parse::<Language>(), Ok(Language::Cpp));
        assert_eq!(Language::from_extension("PY"), Some(Language::Python));
    }
}
