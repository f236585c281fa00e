use super::LessonKind;
use serde::{Deserialize, Serialize};

/// Lesson payload, discriminated by the `type` tag on the wire. Using a sum
/// type here means a lesson's kind and its payload cannot disagree in memory;
/// consumers switching on the content are forced to handle all four variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LessonContent {
    Theory {
        blocks: Vec<ContentBlock>,
    },
    Exercise {
        instruction: String,
        #[serde(alias = "starterCode")]
        starter_code: String,
        solution: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
        #[serde(default, alias = "exampleCode", skip_serializing_if = "Option::is_none")]
        example_code: Option<String>,
        #[serde(
            default,
            alias = "exampleDescription",
            skip_serializing_if = "Option::is_none"
        )]
        example_description: Option<String>,
        #[serde(default, alias = "testCases")]
        test_cases: Vec<TestCase>,
    },
    Quiz {
        question: String,
        options: Vec<QuizOption>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
    Project {
        title: String,
        description: String,
        requirements: Vec<String>,
        #[serde(default, alias = "starterCode", skip_serializing_if = "Option::is_none")]
        starter_code: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hints: Option<Vec<String>>,
    },
}

impl LessonContent {
    pub fn kind(&self) -> LessonKind {
        match self {
            LessonContent::Theory { .. } => LessonKind::Theory,
            LessonContent::Exercise { .. } => LessonKind::Exercise,
            LessonContent::Quiz { .. } => LessonKind::Quiz,
            LessonContent::Project { .. } => LessonKind::Project,
        }
    }

    /// Well-formedness beyond what the type system carries: a quiz must mark
    /// exactly one option correct. Everything else is well-formed by shape.
    pub fn well_formed(&self) -> bool {
        match self {
            LessonContent::Quiz { options, .. } => {
                options.iter().filter(|o| o.is_correct).count() == 1
            }
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Code,
    Tip,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestCase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(alias = "expectedOutput")]
    pub expected_output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizOption {
    pub text: String,
    #[serde(alias = "isCorrect")]
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}
