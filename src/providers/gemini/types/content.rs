//! Content and part types for the Gemini REST surface

use serde::{Deserialize, Serialize};

/// The base structured datatype containing multi-part content of a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    /// The producer of the content. Omitted for system instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered parts that constitute a single message.
    pub parts: Vec<Part>,
}

/// A datatype containing media that is part of a multi-part `Content` message.
///
/// Exactly one payload field is set per part; the wire format distinguishes
/// parts by which key is present, hence the untagged representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Part {
    /// Inline text.
    Text {
        text: String,
        /// Indicates the part is a thought summary from a thinking model.
        #[serde(skip_serializing_if = "Option::is_none")]
        thought: Option<bool>,
    },
    /// Inline media bytes.
    InlineData {
        #[serde(rename = "inlineData", alias = "inline_data")]
        inline_data: Blob,
    },
    /// URI-based data reference.
    FileData {
        #[serde(rename = "fileData", alias = "file_data")]
        file_data: FileData,
    },
    /// A predicted function call returned by the model.
    FunctionCall {
        #[serde(rename = "functionCall", alias = "function_call")]
        function_call: FunctionCall,
    },
    /// The result of a function call, echoed back to the model.
    FunctionResponse {
        #[serde(rename = "functionResponse", alias = "function_response")]
        function_response: FunctionResponse,
    },
}

/// Raw media bytes, base64-encoded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Blob {
    /// The IANA standard MIME type of the source data
    #[serde(rename = "mimeType", alias = "mime_type")]
    pub mime_type: String,
    /// Base64-encoded raw bytes
    pub data: String,
}

/// URI-based data reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileData {
    /// Optional MIME type of the referenced data
    #[serde(
        rename = "mimeType",
        alias = "mime_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub mime_type: Option<String>,
    /// URI of the referenced data
    #[serde(rename = "fileUri", alias = "file_uri")]
    pub file_uri: String,
}

/// A function call predicted by the model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionCall {
    /// Name of the function to call
    pub name: String,
    /// The function arguments as a JSON object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<serde_json::Value>,
}

/// The result output from a function call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionResponse {
    /// Name of the function the response belongs to
    pub name: String,
    /// The function output as a JSON object
    pub response: serde_json::Value,
}

/// A tool the model may use to generate a response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeminiTool {
    /// A list of function declarations the model can call
    FunctionDeclarations {
        #[serde(rename = "functionDeclarations")]
        function_declarations: Vec<FunctionDeclaration>,
    },
}

/// Structured description of a function the model can generate calls for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// Function name
    pub name: String,
    /// Function description
    pub description: String,
    /// Parameter schema (OpenAPI-style object schema)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
    /// Response schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
}

/// Safety setting affecting a single harm category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SafetySetting {
    /// The category this setting applies to
    pub category: HarmCategory,
    /// The probability threshold at which content is blocked
    pub threshold: HarmBlockThreshold,
}

/// Harm categories recognized by the safety filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
    #[serde(rename = "HARM_CATEGORY_CIVIC_INTEGRITY")]
    CivicIntegrity,
}

/// Blocking threshold for a harm category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HarmBlockThreshold {
    #[serde(rename = "HARM_BLOCK_THRESHOLD_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "BLOCK_LOW_AND_ABOVE")]
    BlockLowAndAbove,
    #[serde(rename = "BLOCK_MEDIUM_AND_ABOVE")]
    BlockMediumAndAbove,
    #[serde(rename = "BLOCK_ONLY_HIGH")]
    BlockOnlyHigh,
    #[serde(rename = "BLOCK_NONE")]
    BlockNone,
    #[serde(rename = "OFF")]
    Off,
}

/// Probability that a piece of content falls into a harm category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HarmProbability {
    #[serde(rename = "HARM_PROBABILITY_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "NEGLIGIBLE")]
    Negligible,
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "HIGH")]
    High,
}

/// Safety rating attached to a response candidate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SafetyRating {
    /// The category this rating applies to
    pub category: HarmCategory,
    /// Probability of harm for this content
    pub probability: HarmProbability,
    /// Whether this content was blocked because of this rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
}

/// A response candidate generated from the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Generated content returned from the model. Absent when the candidate
    /// was cut off before producing any parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// The reason the model stopped generating tokens
    #[serde(skip_serializing_if = "Option::is_none", rename = "finishReason")]
    pub finish_reason: Option<FinishReason>,
    /// Ratings for the safety of the candidate
    #[serde(skip_serializing_if = "Option::is_none", rename = "safetyRatings")]
    pub safety_ratings: Option<Vec<SafetyRating>>,
    /// Index of the candidate in the list of candidates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
}

/// Reason the model stopped generating tokens
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FinishReason {
    #[serde(rename = "FINISH_REASON_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "STOP")]
    Stop,
    #[serde(rename = "MAX_TOKENS")]
    MaxTokens,
    #[serde(rename = "SAFETY")]
    Safety,
    #[serde(rename = "RECITATION")]
    Recitation,
    #[serde(rename = "LANGUAGE")]
    Language,
    #[serde(rename = "OTHER")]
    Other,
    #[serde(rename = "BLOCKLIST")]
    Blocklist,
    #[serde(rename = "PROHIBITED_CONTENT")]
    ProhibitedContent,
    #[serde(rename = "SPII")]
    Spii,
    #[serde(rename = "MALFORMED_FUNCTION_CALL")]
    MalformedFunctionCall,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_serialize_with_rest_camel_case_keys() {
        let parts = vec![
            Part::Text {
                text: "hello".to_string(),
                thought: None,
            },
            Part::InlineData {
                inline_data: Blob {
                    mime_type: "image/jpeg".to_string(),
                    data: "aGk=".to_string(),
                },
            },
            Part::FileData {
                file_data: FileData {
                    mime_type: Some("image/png".to_string()),
                    file_uri: "gs://bucket/pic.png".to_string(),
                },
            },
            Part::FunctionResponse {
                function_response: FunctionResponse {
                    name: "lookup".to_string(),
                    response: serde_json::json!({"q": "x"}),
                },
            },
        ];

        let json = serde_json::to_value(&parts).unwrap();
        assert_eq!(json[0], serde_json::json!({"text": "hello"}));
        assert_eq!(
            json[1],
            serde_json::json!({"inlineData": {"mimeType": "image/jpeg", "data": "aGk="}})
        );
        assert_eq!(
            json[2],
            serde_json::json!({"fileData": {"mimeType": "image/png", "fileUri": "gs://bucket/pic.png"}})
        );
        assert_eq!(
            json[3],
            serde_json::json!({"functionResponse": {"name": "lookup", "response": {"q": "x"}}})
        );
    }

    #[test]
    fn response_parts_deserialize_from_snake_case_aliases() {
        let json = serde_json::json!({
            "inline_data": {"mime_type": "image/png", "data": "aGk="}
        });
        let part: Part = serde_json::from_value(json).unwrap();
        assert!(matches!(
            part,
            Part::InlineData { inline_data: Blob { ref mime_type, .. } } if mime_type == "image/png"
        ));
    }

    #[test]
    fn function_call_part_does_not_match_text_variant() {
        let json = serde_json::json!({
            "functionCall": {"name": "lookup", "args": {"q": "x"}}
        });
        let part: Part = serde_json::from_value(json).unwrap();
        assert!(matches!(
            part,
            Part::FunctionCall { function_call: FunctionCall { ref name, .. } } if name == "lookup"
        ));
    }

    #[test]
    fn safety_setting_uses_rest_enum_spellings() {
        let setting = SafetySetting {
            category: HarmCategory::DangerousContent,
            threshold: HarmBlockThreshold::BlockOnlyHigh,
        };
        assert_eq!(
            serde_json::to_value(&setting).unwrap(),
            serde_json::json!({
                "category": "HARM_CATEGORY_DANGEROUS_CONTENT",
                "threshold": "BLOCK_ONLY_HIGH"
            })
        );
    }
}
