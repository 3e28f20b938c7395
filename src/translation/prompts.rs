/*!
 * Prompt templates for literary translation.
 */

use crate::language_utils::TargetLanguage;

/// Marker line that precedes the chunk text in the user prompt
pub const TEXT_MARKER: &str = "Text to translate:";

/// Prompt template with a `{target_language}` placeholder.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// System instruction for the translator role.
    pub const LITERARY_TRANSLATOR: &'static str = "You are a professional translator specialising in literary translation to {target_language}. Maintain the original style and meaning while producing natural, fluent translations.";

    /// Instruction placed before the chunk text in the user turn.
    pub const TRANSLATE_INSTRUCTION: &'static str = "Please translate the following English text to {target_language}.
Maintain the original formatting, paragraph structure, and literary style.
Preserve proper nouns and character names appropriately.";

    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Render the template for a language.
    pub fn render(&self, target_language: &str) -> String {
        self.template.replace("{target_language}", target_language)
    }
}

/// Builds the system and user prompts for one chunk
#[derive(Debug, Clone)]
pub struct TranslationPromptBuilder {
    system: PromptTemplate,
    instruction: PromptTemplate,
}

impl Default for TranslationPromptBuilder {
    fn default() -> Self {
        Self {
            system: PromptTemplate::new(PromptTemplate::LITERARY_TRANSLATOR),
            instruction: PromptTemplate::new(PromptTemplate::TRANSLATE_INSTRUCTION),
        }
    }
}

impl TranslationPromptBuilder {
    /// Replace the system template
    pub fn with_system_template(mut self, template: &str) -> Self {
        self.system = PromptTemplate::new(template);
        self
    }

    pub fn system_prompt(&self, language: TargetLanguage) -> String {
        self.system.render(language.display_name())
    }

    /// Instruction followed by the literal chunk text
    pub fn user_prompt(&self, language: TargetLanguage, text: &str) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            self.instruction.render(language.display_name()),
            TEXT_MARKER,
            text
        )
    }
}
