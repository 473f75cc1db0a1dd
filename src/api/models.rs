use serde::{Deserialize, Serialize};
use std::fmt;

/// Request body for the remote `/query` endpoint. Field names are fixed by
/// the service contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    #[serde(rename = "openAIAPIKey")]
    pub openai_api_key: String,
    #[serde(rename = "numberOfQuestions")]
    pub number_of_questions: usize,
}

/// One practice problem as returned by the service. Records are immutable
/// once received; `id` uniqueness within a response is a server invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub url: String,
    pub difficulty: Difficulty,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_request_wire_format() {
        let request = QueryRequest {
            query: "binary search in rotated array".to_string(),
            openai_api_key: "sk-test".to_string(),
            number_of_questions: 5,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "query": "binary search in rotated array",
                "openAIAPIKey": "sk-test",
                "numberOfQuestions": 5
            })
        );
    }

    #[test]
    fn test_question_deserialization() {
        let body = r#"{
            "id": "704",
            "title": "Binary Search",
            "url": "https://leetcode.com/problems/binary-search/",
            "difficulty": "Easy",
            "description": "Given a sorted array of integers...",
            "tags": ["Array", "Binary Search"]
        }"#;

        let question: Question = serde_json::from_str(body).unwrap();
        assert_eq!(question.id, "704");
        assert_eq!(question.difficulty, Difficulty::Easy);
        assert_eq!(
            question.tags,
            Some(vec!["Array".to_string(), "Binary Search".to_string()])
        );
    }

    #[test]
    fn test_question_tags_are_optional() {
        let body = r#"{
            "id": "1",
            "title": "Two Sum",
            "url": "https://leetcode.com/problems/two-sum/",
            "difficulty": "Medium",
            "description": "..."
        }"#;

        let question: Question = serde_json::from_str(body).unwrap();
        assert_eq!(question.tags, None);
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let body = r#"{
            "id": "1",
            "title": "Two Sum",
            "url": "https://leetcode.com/problems/two-sum/",
            "difficulty": "Impossible",
            "description": "..."
        }"#;

        assert!(serde_json::from_str::<Question>(body).is_err());
    }
}
