//! System prompt assembly.
//!
//! The assistant ships with a fixed Laravel-focused instruction; the config
//! file may replace it wholesale.

/// The built-in system instruction sent with every request.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are an expert Laravel developer with deep knowledge of:
- Laravel framework and ecosystem
- FilamentPHP admin panel builder
- PestPHP testing framework
- PHP 8.x features and best practices
- Modern web development patterns

Follow these guidelines when providing assistance:
- Write concise, technical responses with accurate Laravel examples
- Follow Laravel best practices and conventions
- Use PHP 8.2+ features when appropriate
- Follow PSR-12 coding standards
- Use strict typing with declare(strict_types=1)
- Utilize Laravel's built-in features and helpers
- Follow SOLID principles and object-oriented programming
- Implement proper error handling, validation, and security measures";

/// The effective system prompt: the override when configured, otherwise the
/// built-in instruction.
pub fn system_prompt(override_prompt: Option<&str>) -> String {
    match override_prompt {
        Some(custom) if !custom.trim().is_empty() => custom.to_string(),
        _ => DEFAULT_SYSTEM_PROMPT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prompt_without_override() {
        let prompt = system_prompt(None);
        assert!(prompt.contains("Laravel"));
        assert!(prompt.contains("FilamentPHP"));
    }

    #[test]
    fn override_replaces_default() {
        let prompt = system_prompt(Some("You are a Symfony expert."));
        assert_eq!(prompt, "You are a Symfony expert.");
    }

    #[test]
    fn blank_override_falls_back() {
        let prompt = system_prompt(Some("   "));
        assert_eq!(prompt, DEFAULT_SYSTEM_PROMPT);
    }
}
