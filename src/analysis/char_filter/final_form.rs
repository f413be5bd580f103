use super::{CharFilter, Transformation};
use crate::analysis::hebrew::fold_final_form;

/// Fold the five Hebrew final letter-forms to their medial counterparts.
pub fn normalize_final_forms(text: &str) -> String {
    text.chars().map(fold_final_form).collect()
}

/// A char filter that folds final letter-forms (ך ם ן ף ץ) to כ מ נ פ צ.
///
/// Both forms encode to two bytes, so offsets are unchanged; the
/// substitutions are still reported.
#[derive(Clone, Debug, Default)]
pub struct FinalFormCharFilter;

impl FinalFormCharFilter {
    pub fn new() -> Self {
        FinalFormCharFilter
    }
}

impl CharFilter for FinalFormCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();

        for (offset, c) in input.char_indices() {
            let folded = fold_final_form(c);
            if folded != c {
                let new_start = output.len();
                transformations.push(Transformation::new(
                    offset,
                    offset + c.len_utf8(),
                    new_start,
                    new_start + folded.len_utf8(),
                ));
            }
            output.push(folded);
        }

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "final_form"
    }
}
