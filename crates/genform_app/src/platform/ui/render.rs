use genform_core::{AppViewModel, FormStatus, SuccessCardView};

use crate::platform::input::{DISMISS_COMMAND, DOWNLOAD_COMMAND, HELP_COMMAND, QUIT_COMMAND};

const RULE_WIDTH: usize = 64;

/// Static page header plus the "How it works" panel.
pub fn header() -> Vec<String> {
    vec![
        "AI Content Generator".to_string(),
        "Generate high-quality articles and content using AI research and writing agents"
            .to_string(),
        String::new(),
        "How it works".to_string(),
        "  1. Research Phase: an AI research agent gathers information about your topic."
            .to_string(),
        "  2. Writing Phase: an AI writing agent creates structured content from the research."
            .to_string(),
        "  3. Output: the final content is formatted as a PDF document ready for download."
            .to_string(),
        String::new(),
    ]
    .into_iter()
    .chain(help())
    .collect()
}

pub fn help() -> Vec<String> {
    vec![
        "Type a topic and press Enter to generate content.".to_string(),
        format!(
            "Commands: {DOWNLOAD_COMMAND} save the PDF, {DISMISS_COMMAND} close the error, \
             {HELP_COMMAND} show this help, {QUIT_COMMAND} or exit to leave."
        ),
    ]
}

/// Renders the whole form for the current view.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec!["=".repeat(RULE_WIDTH)];

    let topic = if view.topic.trim().is_empty() {
        "(empty)"
    } else {
        view.topic.as_str()
    };
    lines.push(format!("Topic: {topic}"));

    let submit_state = if view.can_submit { "" } else { " (disabled)" };
    let busy = if view.status == FormStatus::Generating {
        "[...] "
    } else {
        ""
    };
    lines.push(format!("{busy}[{}]{submit_state}", view.submit_label));
    if !view.input_enabled {
        lines.push("Input is locked until the current request finishes.".to_string());
    }

    if let Some(error) = &view.error {
        lines.push(String::new());
        lines.push(format!("[!] {error}"));
        lines.push(format!("    ({DISMISS_COMMAND} to close)"));
    }

    if let Some(card) = &view.success {
        lines.push(String::new());
        lines.extend(render_success_card(card));
    }

    if let Some(path) = &view.saved_download {
        lines.push(format!("Saved PDF to {}", path.display()));
    }

    lines.push("=".repeat(RULE_WIDTH));
    lines
}

fn render_success_card(card: &SuccessCardView) -> Vec<String> {
    let mut lines = vec![
        "[ok] Content Generated Successfully!".to_string(),
        card.message.clone(),
    ];
    if let Some(article) = &card.article_content {
        lines.push("-".repeat(RULE_WIDTH));
        lines.extend(article.lines().map(ToOwned::to_owned));
        lines.push("-".repeat(RULE_WIDTH));
    }
    lines.push("Your content has been generated and saved as a PDF file.".to_string());
    if card.can_download() {
        lines.push(format!("[Download PDF] type {DOWNLOAD_COMMAND}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use genform_core::{update, AppState, GeneratedContent, Msg};
    use pretty_assertions::assert_eq;

    use super::*;

    fn after(msgs: Vec<Msg>) -> AppViewModel {
        let mut state = AppState::new();
        for msg in msgs {
            state = update(state, msg).0;
        }
        state.view()
    }

    fn submitted(topic: &str) -> Vec<Msg> {
        vec![Msg::InputChanged(topic.to_string()), Msg::TopicSubmitted]
    }

    #[test]
    fn idle_form_has_disabled_submit() {
        let lines = render(&AppState::new().view());

        assert!(lines.contains(&"Topic: (empty)".to_string()));
        assert!(lines.contains(&"[Generate Content] (disabled)".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("[!]")));
    }

    #[test]
    fn generating_shows_busy_indicator() {
        let lines = render(&after(submitted("Digital Marketing Trends")));

        assert!(lines.contains(&"[...] [Generating Content...] (disabled)".to_string()));
        assert!(lines.contains(&"Input is locked until the current request finishes.".to_string()));
    }

    #[test]
    fn success_shows_message_article_and_download_control() {
        let mut msgs = submitted("Climate Change Solutions");
        msgs.push(Msg::GenerationSucceeded {
            request_id: 1,
            result: GeneratedContent {
                status: "success".to_string(),
                message: "Content generated successfully".to_string(),
                download_url: Some("/api/download/test.pdf".to_string()),
                file_path: None,
                article_content: Some("First paragraph.\n\nSecond paragraph.".to_string()),
            },
        });
        let lines = render(&after(msgs));

        let card_start = lines
            .iter()
            .position(|l| l == "[ok] Content Generated Successfully!")
            .expect("card");
        assert_eq!(lines[card_start + 1], "Content generated successfully");
        assert!(lines.contains(&"First paragraph.".to_string()));
        assert!(lines.contains(&"Second paragraph.".to_string()));
        assert!(lines.contains(&"[Download PDF] type /download".to_string()));
        assert!(lines.contains(&"[Generate Content]".to_string()));
    }

    #[test]
    fn failure_shows_banner_without_card() {
        let mut msgs = submitted("Topic");
        msgs.push(Msg::GenerationFailed {
            request_id: 1,
            detail: None,
        });
        let lines = render(&after(msgs));

        assert!(lines.contains(&"[!] Failed to generate content. Please try again.".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("[ok]")));
    }

    #[test]
    fn saved_download_is_reported() {
        let view = AppViewModel {
            saved_download: Some(PathBuf::from("downloads/generated-content.pdf")),
            ..AppState::new().view()
        };
        let lines = render(&view);

        assert!(lines.contains(&"Saved PDF to downloads/generated-content.pdf".to_string()));
    }

    #[test]
    fn header_lists_commands() {
        let text = header().join("\n");
        assert!(text.starts_with("AI Content Generator"));
        assert!(text.contains("/download"));
        assert!(text.contains("exit"));
    }
}
