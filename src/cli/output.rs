//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenType};
use crate::cli::args::{MilonArgs, OutputFormat};
use crate::error::Result;
use crate::vocabulary::{IndexStats, MatchResult, Segment, SegmentKind, VocabularyEntry};

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// A token with its byte span in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOutput {
    pub text: String,
    pub start: usize,
    pub end: usize,
    /// Text as written when it carried niqqud.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    /// Candidate form of the preceding token rather than a token of the text.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub candidate: bool,
}

impl From<Token> for TokenOutput {
    fn from(token: Token) -> Self {
        let original = token
            .metadata
            .as_ref()
            .and_then(|m| m.original_text.clone())
            .filter(|original| *original != token.text);
        let candidate = token.token_type() == Some(TokenType::Candidate);
        TokenOutput {
            text: token.text,
            start: token.start_offset,
            end: token.end_offset,
            original,
            candidate,
        }
    }
}

/// Result structure for tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeOutput {
    pub tokens: Vec<TokenOutput>,
}

/// Result structure for candidate form generation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CandidatesOutput {
    pub word: String,
    pub forms: Vec<String>,
}

/// Result structure for matching.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutput {
    #[serde(flatten)]
    pub result: MatchResult,
    /// Unknown tokens to send for definition.
    pub prompt_tokens: Vec<String>,
    /// Matched entries merged with generated ones, when a response was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary_words: Option<Vec<VocabularyEntry>>,
    pub index: IndexStats,
}

/// Result structure for highlighting.
#[derive(Debug, Serialize, Deserialize)]
pub struct HighlightOutput {
    pub segments: Vec<Segment>,
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &MilonArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_human<T: HumanOutput>(message: &str, result: &T, args: &MilonArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!("{}", "═".repeat(message.chars().count()));
    }
    println!("{}", result.render_human());
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &MilonArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

impl HumanOutput for TokenizeOutput {
    fn render_human(&self) -> String {
        if self.tokens.is_empty() {
            return "No Hebrew tokens.".to_string();
        }
        let mut lines = Vec::new();
        let mut number = 0;
        for token in &self.tokens {
            if token.candidate {
                lines.push(format!("       ↳ {}", token.text));
                continue;
            }
            number += 1;
            let mut line = format!("{number:>3}. {} [{}..{}]", token.text, token.start, token.end);
            if let Some(original) = &token.original {
                line.push_str(&format!(" ({original})"));
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}

impl HumanOutput for CandidatesOutput {
    fn render_human(&self) -> String {
        format!("{}: {}", self.word, self.forms.join(", "))
    }
}

impl HumanOutput for MatchOutput {
    fn render_human(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Known ({}):", self.result.known_vocab.len()));
        for entry in &self.result.known_vocab {
            lines.push(format!("  {}", format_entry(entry)));
        }

        lines.push(String::new());
        lines.push(format!("Unknown ({}):", self.result.unknown_tokens.len()));
        for token in &self.result.unknown_tokens {
            lines.push(format!("  {token}"));
        }

        if self.prompt_tokens.len() < self.result.unknown_tokens.len() {
            lines.push(format!(
                "  ({} listed for definition)",
                self.prompt_tokens.len()
            ));
        }

        if let Some(vocabulary) = &self.vocabulary_words {
            lines.push(String::new());
            lines.push(format!("Vocabulary ({}):", vocabulary.len()));
            for entry in vocabulary {
                lines.push(format!("  {}", format_entry(entry)));
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "Used words: {} | Index: {} forms from {} words, {} collisions",
            self.result.used_words.len(),
            self.index.forms,
            self.index.words,
            self.index.collisions
        ));

        lines.join("\n")
    }
}

impl HumanOutput for HighlightOutput {
    fn render_human(&self) -> String {
        let mut line = String::new();
        for segment in &self.segments {
            let rendered = match (segment.kind, segment.translation.as_deref()) {
                (SegmentKind::Known, Some(t)) => format!("[{}|{t}]", segment.text),
                (SegmentKind::New, Some(t)) => format!("{{{}|{t}}}", segment.text),
                (SegmentKind::Unknown, _) => format!("<{}>", segment.text),
                _ => segment.text.clone(),
            };
            line.push_str(&rendered);
        }
        format!("{line}\n\n[known]  {{new}}  <unknown>")
    }
}

fn format_entry(entry: &VocabularyEntry) -> String {
    let mut line = format!(
        "{} → {} ({})",
        entry.hebrew,
        entry.translation,
        entry.word_type.as_str()
    );
    if let Some(infinitive) = &entry.infinitive {
        line.push_str(&format!(", inf. {infinitive}"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::WordType;

    #[test]
    fn test_token_output_keeps_original_only_when_different() {
        let token = Token::with_offsets("ילד", 0, 0, 6);
        assert!(TokenOutput::from(token).original.is_none());

        let token = Token::with_offsets("ילד", 0, 0, 8).with_original_text("יֶלֶד");
        assert_eq!(TokenOutput::from(token).original.as_deref(), Some("יֶלֶד"));
    }

    #[test]
    fn test_render_tokens_with_candidates() {
        let tokens = vec![
            Token::with_offsets("הלך", 0, 0, 6),
            Token::with_offsets("לכ", 0, 0, 6).with_token_type(TokenType::Candidate),
            Token::with_offsets("ילד", 1, 7, 13),
        ];
        let output = TokenizeOutput {
            tokens: tokens.into_iter().map(TokenOutput::from).collect(),
        };
        assert!(output.tokens[1].candidate);

        let rendered = output.render_human();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "  1. הלך [0..6]");
        assert_eq!(lines[1].trim(), "↳ לכ");
        assert_eq!(lines[2], "  2. ילד [7..13]");
    }

    #[test]
    fn test_render_candidates() {
        let output = CandidatesOutput {
            word: "הלך".to_string(),
            forms: vec!["הלכ".to_string(), "לכ".to_string()],
        };
        assert_eq!(output.render_human(), "הלך: הלכ, לכ");
    }

    #[test]
    fn test_render_match() {
        let mut result = MatchResult::default();
        result
            .known_vocab
            .push(VocabularyEntry::new("והילד", "niño", WordType::Other));
        result.unknown_tokens = vec!["הלך".to_string(), "לבית".to_string()];
        let output = MatchOutput {
            prompt_tokens: vec!["הלך".to_string()],
            result,
            vocabulary_words: None,
            index: IndexStats::default(),
        };

        let rendered = output.render_human();
        assert!(rendered.contains("Known (1):"));
        assert!(rendered.contains("והילד → niño (other)"));
        assert!(rendered.contains("Unknown (2):"));
        assert!(rendered.contains("(1 listed for definition)"));
    }

    #[test]
    fn test_render_highlight() {
        let segments = vec![
            Segment {
                text: "הילד".to_string(),
                start: 0,
                end: 8,
                kind: SegmentKind::Known,
                translation: Some("niño".to_string()),
            },
            Segment {
                text: " ".to_string(),
                start: 8,
                end: 9,
                kind: SegmentKind::Plain,
                translation: None,
            },
            Segment {
                text: "הלך".to_string(),
                start: 9,
                end: 15,
                kind: SegmentKind::Unknown,
                translation: None,
            },
        ];
        let rendered = HighlightOutput { segments }.render_human();
        assert!(rendered.starts_with("[הילד|niño] <הלך>"));
    }

    #[test]
    fn test_match_output_json_is_flat() {
        let output = MatchOutput {
            result: MatchResult::default(),
            prompt_tokens: Vec::new(),
            vocabulary_words: None,
            index: IndexStats::default(),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert!(json.get("knownVocab").is_some());
        assert!(json.get("promptTokens").is_some());
        assert!(json.get("vocabularyWords").is_none());
        assert_eq!(json["index"]["forms"], 0);
    }
}
