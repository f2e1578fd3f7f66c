// src/models/question.rs

use serde::{Deserialize, Serialize};

use super::string_or_number;

/// A coding problem as served to the candidate. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,

    pub title: String,

    /// Problem statement. May contain HTML from the authoring form.
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub constraints: String,

    #[serde(default, alias = "marks")]
    pub points: u32,

    /// Sample cases shown to the candidate. Hidden cases never reach the client.
    #[serde(default, alias = "public_test_cases", alias = "testCases")]
    pub public_test_cases: Vec<TestCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(default)]
    pub input: String,
    #[serde(default, alias = "expected_output", alias = "output")]
    pub expected_output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_accepts_numeric_id_and_snake_case_cases() {
        let q: Question = serde_json::from_str(
            r#"{
                "id": 12,
                "title": "Two Sum",
                "description": "<p>Find two numbers</p>",
                "points": 10,
                "public_test_cases": [{"input": "1 2", "expected_output": "3"}]
            }"#,
        )
        .unwrap();
        assert_eq!(q.id, "12");
        assert_eq!(q.constraints, "");
        assert_eq!(q.public_test_cases[0].expected_output, "3");
    }
}
