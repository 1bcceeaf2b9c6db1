use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::assessment::AssessmentOutcome;
use crate::bank::Question;
use crate::scoring::{ConfidenceLabel, Quadrant};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Fixed-width bar for a 0-100 score: 20 cells, one per 5 points
pub fn score_bar(score: u8) -> String {
    let filled = usize::from(score.min(100)) / 5;
    format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled))
}

fn quadrant_text(quadrant: Quadrant, use_colors: bool) -> String {
    let label = quadrant.to_string();
    if !use_colors {
        return label;
    }
    match quadrant {
        Quadrant::Secure => label.green().to_string(),
        Quadrant::Anxious => label.yellow().to_string(),
        Quadrant::Avoidant => label.cyan().to_string(),
        Quadrant::DisorganizedLean => label.magenta().to_string(),
        Quadrant::Mixed => label.dimmed().to_string(),
    }
}

fn confidence_text(label: ConfidenceLabel, use_colors: bool) -> String {
    let text = label.to_string();
    if !use_colors {
        return text;
    }
    match label {
        ConfidenceLabel::High => text.green().to_string(),
        ConfidenceLabel::Moderate => text.yellow().to_string(),
        ConfidenceLabel::Cautious => text.red().to_string(),
    }
}

/// Multi-line summary of one assessment.
pub fn format_outcome(outcome: &AssessmentOutcome, use_colors: bool) -> String {
    let s = &outcome.scores;
    let r = &outcome.routing;

    let tags = if r.route_tags.is_empty() {
        "(none)".to_string()
    } else {
        r.route_tags.iter().cloned().collect::<Vec<_>>().join(", ")
    };

    let gate = if outcome.gates_recommendations() {
        if use_colors {
            "held back".red().to_string()
        } else {
            "held back".to_string()
        }
    } else {
        "ok".to_string()
    };

    let heading = if use_colors {
        "Attachment profile".bold().to_string()
    } else {
        "Attachment profile".to_string()
    };

    format!(
        "{}\n  Anxiety:    {:>3} {}\n  Avoidance:  {:>3} {}\n  Quadrant:   {}\n  Confidence: {} (reliability {:.2})\n  Attention:  {}\n  Social desirability: {:.2}\n  Profile:    {} [{}]\n  Recommendations: {}",
        heading,
        s.anxiety,
        score_bar(s.anxiety),
        s.avoidance,
        score_bar(s.avoidance),
        quadrant_text(s.quadrant, use_colors),
        confidence_text(s.confidence_label, use_colors),
        s.reliability,
        if s.attention_passed { "passed" } else { "failed" },
        s.social_desirability,
        r.primary_profile,
        tags,
        gate,
    )
}

/// Numbered list of questions: "{n}. {id}  {prompt}", prompts truncated to the terminal
pub fn format_question_list(items: &[&Question], use_colors: bool) -> String {
    if items.is_empty() {
        return "No questions.".to_string();
    }

    let term_width = get_terminal_width();
    let id_width = items.iter().map(|q| q.id.len()).max().unwrap_or(0);

    items
        .iter()
        .enumerate()
        .map(|(idx, q)| {
            let index_str = format!("{:>2}.", idx + 1);
            let id_padded = format!("{:<width$}", q.id, width = id_width);
            let fixed_width = index_str.len() + 1 + id_width + 2;

            let prompt = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_text(&q.prompt, width - fixed_width),
                Some(_) => truncate_text(&q.prompt, 20),
                None => q.prompt.clone(),
            };

            if use_colors {
                format!("{} {}  {}", index_str.dimmed(), id_padded.cyan(), prompt)
            } else {
                format!("{} {}  {}", index_str, id_padded, prompt)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One question with its answer options.
pub fn format_question_detail(question: &Question, use_colors: bool) -> String {
    let options = question
        .options
        .iter()
        .map(|o| format!("    {} = {}", o.value, o.text))
        .collect::<Vec<_>>()
        .join("\n");

    if use_colors {
        format!("{}  {}\n{}", question.id.cyan(), question.prompt.bold(), options)
    } else {
        format!("{}  {}\n{}", question.id, question.prompt, options)
    }
}
