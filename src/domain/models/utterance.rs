#[cfg(test)]
#[path = "utterance_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Speaker;

/// One recorded turn of dialogue. Fields are private so a committed utterance
/// can't be edited after the fact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    speaker: Speaker,
    text: String,
}

impl Utterance {
    pub fn new(speaker: Speaker, text: &str) -> Utterance {
        return Utterance {
            speaker,
            text: text.to_string(),
        };
    }

    pub fn speaker(&self) -> Speaker {
        return self.speaker;
    }

    pub fn text(&self) -> &str {
        return &self.text;
    }

    pub fn is_blank(&self) -> bool {
        return self.text.trim().is_empty();
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.text.replace('\t', "  ").split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_lines: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                if !current_lines.is_empty() && word.len() + char_count + 1 > line_max_width {
                    lines.push(current_lines.join(" ").trim_end().to_string());
                    current_lines = vec![word];
                    char_count = word.len() + 1;
                } else {
                    current_lines.push(word);
                    char_count += word.len() + 1;
                }
            }
            if !current_lines.is_empty() {
                lines.push(current_lines.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}
