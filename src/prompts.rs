//! Canned system prompts
//!
//! The prompt selection is a named-variant lookup so additional personas can
//! be added without widening a boolean flag.

const DEFAULT_PROMPT: &str = "You are a helpful, harmless, and honest AI assistant.";

const CODER_PROMPT: &str = "\
You are an expert web developer specializing in creating clean, efficient, and modern web applications.
Your task is to write complete, self-contained HTML files that include all necessary CSS and JavaScript.
Focus on:
- Writing clear, maintainable code
- Following best practices
- Creating responsive designs
- Adding appropriate styling and interactivity
Return only the complete HTML code without any additional explanation.";

/// System prompt persona used for a chat interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PromptVariant {
    /// General-purpose assistant persona
    #[default]
    Default,
    /// Web-developer persona constrained to emit single self-contained HTML documents
    Coder,
}

impl PromptVariant {
    /// Map the legacy boolean "coder" flag onto a variant.
    pub fn from_coder_flag(coder: bool) -> Self {
        if coder { Self::Coder } else { Self::Default }
    }

    /// The canned system prompt for this variant.
    pub fn system_prompt(self) -> &'static str {
        match self {
            Self::Default => DEFAULT_PROMPT,
            Self::Coder => CODER_PROMPT,
        }
    }

    /// Stable name of this variant.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Coder => "coder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coder_flag_mapping() {
        assert_eq!(PromptVariant::from_coder_flag(false), PromptVariant::Default);
        assert_eq!(PromptVariant::from_coder_flag(true), PromptVariant::Coder);
    }

    #[test]
    fn prompts_differ_per_variant() {
        assert!(
            PromptVariant::Default
                .system_prompt()
                .contains("helpful, harmless, and honest")
        );
        assert!(PromptVariant::Coder.system_prompt().contains("HTML"));
        assert_ne!(
            PromptVariant::Default.system_prompt(),
            PromptVariant::Coder.system_prompt()
        );
    }
}
