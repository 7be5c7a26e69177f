// src/prompt.rs

/// Marcador de hueco dentro del enunciado.
pub const BLANK_MARKER: &str = "_______";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSegment {
    Word(String),
    /// Hueco asociado a un índice fijo de slot.
    Blank(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedPrompt {
    pub segments: Vec<PromptSegment>,
    pub blank_count: usize,
}

/// Trocea el enunciado en palabras y huecos, numerando los huecos de
/// izquierda a derecha una sola vez al cargar la pregunta.
pub fn parse_prompt(prompt: &str) -> ParsedPrompt {
    let mut segments = Vec::new();
    let mut next_slot = 0;

    for token in prompt.split_whitespace() {
        let mut rest = token;
        while let Some(pos) = rest.find(BLANK_MARKER) {
            if pos > 0 {
                segments.push(PromptSegment::Word(rest[..pos].to_string()));
            }
            segments.push(PromptSegment::Blank(next_slot));
            next_slot += 1;
            // Los marcadores largos ("__________") cuentan como uno solo
            rest = rest[pos..].trim_start_matches('_');
        }
        if !rest.is_empty() {
            segments.push(PromptSegment::Word(rest.to_string()));
        }
    }

    ParsedPrompt {
        segments,
        blank_count: next_slot,
    }
}

pub fn count_blanks(prompt: &str) -> usize {
    parse_prompt(prompt).blank_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanks_get_stable_left_to_right_slots() {
        let parsed = parse_prompt("The _______ fox _______ over the _______ dog _______");
        let slots: Vec<usize> = parsed
            .segments
            .iter()
            .filter_map(|s| match s {
                PromptSegment::Blank(i) => Some(*i),
                _ => None,
            })
            .collect();
        assert_eq!(slots, vec![0, 1, 2, 3]);
        assert_eq!(parsed.blank_count, 4);
        assert_eq!(parsed.segments[0], PromptSegment::Word("The".into()));
    }

    #[test]
    fn punctuation_around_marker_is_kept_as_words() {
        let parsed = parse_prompt("He said _______, then left _______.");
        assert_eq!(
            parsed.segments,
            vec![
                PromptSegment::Word("He".into()),
                PromptSegment::Word("said".into()),
                PromptSegment::Blank(0),
                PromptSegment::Word(",".into()),
                PromptSegment::Word("then".into()),
                PromptSegment::Word("left".into()),
                PromptSegment::Blank(1),
                PromptSegment::Word(".".into()),
            ]
        );
    }

    #[test]
    fn prompt_without_markers_has_no_blanks() {
        assert_eq!(count_blanks("no blanks here"), 0);
        assert_eq!(count_blanks(""), 0);
    }
}
