use crate::api::models::{Difficulty, Question};

const DESCRIPTION_PREVIEW_LENGTH: usize = 150;

/// Formats one question for the text output mode.
pub fn format_question(question: &Question, use_color: bool, full_text: bool) -> String {
    use colored::Colorize;

    let description = if full_text {
        question.description.clone()
    } else {
        truncate(&question.description, DESCRIPTION_PREVIEW_LENGTH)
    };

    let tags = question
        .tags
        .as_deref()
        .filter(|tags| !tags.is_empty())
        .map(|tags| format!("\n  tags: {}", tags.join(", ")))
        .unwrap_or_default();

    if use_color {
        let difficulty = match question.difficulty {
            Difficulty::Easy => question.difficulty.as_str().green(),
            Difficulty::Medium => question.difficulty.as_str().yellow(),
            Difficulty::Hard => question.difficulty.as_str().red(),
        };
        format!(
            "{} {} [{}]\n  {}\n  {}{}",
            format!("#{}", question.id).dimmed(),
            question.title.bold(),
            difficulty,
            question.url.bright_blue(),
            description,
            tags.dimmed(),
        )
    } else {
        format!(
            "#{} {} [{}]\n  {}\n  {}{}",
            question.id, question.title, question.difficulty, question.url, description, tags,
        )
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
