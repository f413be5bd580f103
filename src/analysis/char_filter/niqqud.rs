use super::{CharFilter, Transformation};
use crate::analysis::hebrew::is_niqqud;

/// Remove every Hebrew diacritic (U+0591..=U+05C7) from `text`.
pub fn strip_niqqud(text: &str) -> String {
    text.chars().filter(|c| !is_niqqud(*c)).collect()
}

/// A char filter that removes niqqud.
///
/// Each run of consecutive marks is reported as one deletion.
#[derive(Clone, Debug, Default)]
pub struct NiqqudCharFilter;

impl NiqqudCharFilter {
    pub fn new() -> Self {
        NiqqudCharFilter
    }
}

impl CharFilter for NiqqudCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations: Vec<Transformation> = Vec::new();

        for (offset, c) in input.char_indices() {
            if !is_niqqud(c) {
                output.push(c);
                continue;
            }

            let end = offset + c.len_utf8();
            match transformations.last_mut() {
                Some(last) if last.original_end == offset => last.original_end = end,
                _ => transformations.push(Transformation::new(
                    offset,
                    end,
                    output.len(),
                    output.len(),
                )),
            }
        }

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "niqqud"
    }
}
