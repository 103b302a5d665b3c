use crate::form::form_model::{FieldName, FormFields, Language, Tool};
use crate::service::service_model::GenerateRequest;

/// Holds the form the user is editing. Fields survive across submissions.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: FormFields,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from configured language/tool choices instead of Java/Selenium.
    pub fn with_defaults(language: Option<Language>, tool: Option<Tool>) -> Self {
        let mut state = Self::default();
        if let Some(language) = language {
            state.set_language(language);
        }
        if let Some(tool) = tool {
            state.set_tool(tool);
        }
        state
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Set one field by its wire name.
    ///
    /// Empty or unknown names leave the form untouched, as does a language or
    /// tool value that does not name a known choice. Text fields accept any
    /// value, including the empty string.
    pub fn update(&mut self, field_name: &str, value: impl Into<String>) {
        let Some(field) = FieldName::parse(field_name) else {
            tracing::trace!(field_name, "ignoring update for unresolvable field");
            return;
        };
        let value = value.into();

        match field {
            FieldName::Url => self.fields.url = value,
            FieldName::Html => self.fields.html = value,
            FieldName::TestCase => self.fields.test_case = value,
            FieldName::TestData => self.fields.test_data = value,
            FieldName::TestSteps => self.fields.test_steps = value,
            FieldName::SelectedLanguage => match value.parse::<Language>() {
                Ok(language) => self.fields.selected_language = language,
                Err(e) => tracing::trace!("ignoring language update: {}", e),
            },
            FieldName::SelectedTool => match value.parse::<Tool>() {
                Ok(tool) => self.fields.selected_tool = tool,
                Err(e) => tracing::trace!("ignoring tool update: {}", e),
            },
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.fields.selected_language = language;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.fields.selected_tool = tool;
    }

    /// Copy the current fields into a request payload. Later edits to the
    /// form do not reach a payload that was already taken.
    pub fn snapshot(&self) -> GenerateRequest {
        GenerateRequest::from(&self.fields)
    }
}
