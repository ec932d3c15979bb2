//! Maps lines typed on stdin to form actions.

use genform_core::Msg;

pub const DOWNLOAD_COMMAND: &str = "/download";
pub const DISMISS_COMMAND: &str = "/dismiss";
pub const QUIT_COMMAND: &str = "/quit";
pub const HELP_COMMAND: &str = "/help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the topic with the line and press submit.
    Submit(String),
    Download,
    Dismiss,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case(QUIT_COMMAND) {
        return Command::Quit;
    }
    match trimmed {
        DOWNLOAD_COMMAND => Command::Download,
        DISMISS_COMMAND => Command::Dismiss,
        HELP_COMMAND => Command::Help,
        _ => Command::Submit(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

impl Command {
    /// Messages for the form; empty for commands the app handles itself.
    pub fn into_msgs(self) -> Vec<Msg> {
        match self {
            Command::Submit(topic) => vec![Msg::InputChanged(topic), Msg::TopicSubmitted],
            Command::Download => vec![Msg::DownloadClicked],
            Command::Dismiss => vec![Msg::ErrorDismissed],
            Command::Help | Command::Quit => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_topic_submission() {
        assert_eq!(
            parse_line("Climate Change Solutions\n"),
            Command::Submit("Climate Change Solutions".to_string())
        );
        assert_eq!(
            parse_line("Climate Change Solutions").into_msgs(),
            vec![
                Msg::InputChanged("Climate Change Solutions".to_string()),
                Msg::TopicSubmitted
            ]
        );
    }

    #[test]
    fn blank_line_still_submits() {
        assert_eq!(parse_line("   \n"), Command::Submit("   ".to_string()));
    }

    #[test]
    fn commands_are_recognized() {
        assert_eq!(parse_line("/download"), Command::Download);
        assert_eq!(parse_line("  /dismiss "), Command::Dismiss);
        assert_eq!(parse_line("/help"), Command::Help);
        assert_eq!(parse_line("EXIT"), Command::Quit);
        assert_eq!(parse_line("/quit"), Command::Quit);
        assert!(Command::Quit.into_msgs().is_empty());
    }
}
