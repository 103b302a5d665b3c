use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Choice fields
// ============================================================================

/// Target language for the generated test script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Java,
    Python,
    JavaScript,
    #[serde(rename = "C#")]
    CSharp,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Java,
        Language::Python,
        Language::JavaScript,
        Language::CSharp,
    ];

    /// The label sent on the wire and shown to the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::CSharp => "C#",
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
        match s.trim().to_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            "c#" | "csharp" | "cs" => Ok(Language::CSharp),
            other => Err(format!(
                "unknown language '{}' (expected Java, Python, JavaScript or C#)",
                other
            )),
        }
    }
}

/// Browser automation tool the script is written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Selenium,
    Playwright,
    Cypress,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Selenium, Tool::Playwright, Tool::Cypress];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Selenium => "Selenium",
            Tool::Playwright => "Playwright",
            Tool::Cypress => "Cypress",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "selenium" => Ok(Tool::Selenium),
            "playwright" => Ok(Tool::Playwright),
            "cypress" => Ok(Tool::Cypress),
            other => Err(format!(
                "unknown tool '{}' (expected Selenium, Playwright or Cypress)",
                other
            )),
        }
    }
}

// ============================================================================
// Field names
// ============================================================================

/// Names of the editable form fields, as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Url,
    Html,
    TestCase,
    TestData,
    TestSteps,
    SelectedLanguage,
    SelectedTool,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Url => "url",
            FieldName::Html => "html",
            FieldName::TestCase => "testCase",
            FieldName::TestData => "testData",
            FieldName::TestSteps => "testSteps",
            FieldName::SelectedLanguage => "selectedLanguage",
            FieldName::SelectedTool => "selectedTool",
        }
    }

    /// Resolve a wire name. Returns `None` for empty or unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "url" => Some(FieldName::Url),
            "html" => Some(FieldName::Html),
            "testCase" => Some(FieldName::TestCase),
            "testData" => Some(FieldName::TestData),
            "testSteps" => Some(FieldName::TestSteps),
            "selectedLanguage" => Some(FieldName::SelectedLanguage),
            "selectedTool" => Some(FieldName::SelectedTool),
            _ => None,
        }
    }
}

// ============================================================================
// Form fields
// ============================================================================

/// The configuration the user is editing. Every field is always present;
/// text fields may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    /// A page URL or raw HTML markup
    pub url: String,
    pub html: String,
    pub test_case: String,
    pub test_data: String,
    pub test_steps: String,
    pub selected_language: Language,
    pub selected_tool: Tool,
}
