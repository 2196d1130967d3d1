// This module builds the documentation header placed above a procedure. The header has
// three lines (Descrpt, Input, Output) framed by '=' borders as wide as the longest line.
// Every field is optional and falls back to "No description." / "No input." /
// "No output.". When the calling code is supplied, its push sequence is listed in the
// Input line as "(By order) [1] a, [2] b." so the reader knows which argument sits where;
// explicit input text is then appended on a continuation line indented under the colon.
// Fields are capitalized (first letter upper, rest lower) and end in exactly one period.

//! Procedure header generation.

use crate::core::text::{border, capitalize, char_len, with_period};
use crate::stack::{parse_pushes, PushSequence};

const DESCRIPTION_PREFIX: &str = "; Descrpt: ";
const INPUT_PREFIX: &str = "; Input  : ";
const OUTPUT_PREFIX: &str = "; Output : ";

const NO_DESCRIPTION: &str = "no description";
const NO_INPUT: &str = "no input";
const NO_OUTPUT: &str = "no output";

/// Continuation lines of the Input field start under the text after `"; Input  : "`,
/// plus two columns.
const CONTINUATION_INDENT: usize = 13;

/// Builder for a procedure header. Empty strings count as missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcedureDoc<'a> {
    description: Option<&'a str>,
    input: Option<&'a str>,
    output: Option<&'a str>,
    code: Option<&'a str>,
}

impl<'a> ProcedureDoc<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn input(mut self, input: &'a str) -> Self {
        self.input = Some(input);
        self
    }

    pub fn output(mut self, output: &'a str) -> Self {
        self.output = Some(output);
        self
    }

    /// Calling code whose pushes are listed in the Input line.
    pub fn code(mut self, code: &'a str) -> Self {
        self.code = Some(code);
        self
    }

    pub fn render(&self) -> String {
        let stack_input = present(self.code).map(|code| stack_preamble(&parse_pushes(code)));

        let description = with_period(capitalize(present(self.description).unwrap_or(NO_DESCRIPTION)));
        let description = format!("{DESCRIPTION_PREFIX}{description}");

        let input = match (present(self.input), stack_input) {
            (Some(input), stack_input) => format!(
                "{INPUT_PREFIX}{}{}",
                stack_input.unwrap_or_default(),
                capitalize(input)
            ),
            (None, Some(stack_input)) => format!("{INPUT_PREFIX}{}", stack_input.trim()),
            (None, None) => format!("{INPUT_PREFIX}{}", capitalize(NO_INPUT)),
        };
        let input = with_period(input);

        let output = with_period(capitalize(present(self.output).unwrap_or(NO_OUTPUT)));
        let output = format!("{OUTPUT_PREFIX}{output}");

        let width = [&description, &input, &output]
            .iter()
            .map(|line| char_len(line))
            .max()
            .unwrap_or_default();
        log::trace!("procedure header: {} columns", width);

        let rule = border('=', width);
        [rule.clone(), description, input, output, rule].join("\n")
    }
}

/// `"(By order) [1] a, [2] b.\n"` followed by the continuation indent.
fn stack_preamble(pushes: &PushSequence) -> String {
    let listed: Vec<String> = pushes
        .iter()
        .zip(1..)
        .map(|(operand, position)| format!("[{position}] {operand}"))
        .collect();

    format!(
        "(By order) {}.\n{}",
        listed.join(", "),
        " ".repeat(CONTINUATION_INDENT)
    )
}

fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|text| !text.is_empty())
}

/// Render a procedure header; every argument may be omitted.
pub fn procedure_description(
    description: Option<&str>,
    input: Option<&str>,
    output: Option<&str>,
    code: Option<&str>,
) -> String {
    ProcedureDoc {
        description,
        input,
        output,
        code,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUM_ARRAY: &str = "
        push offset array
        push arraySize
        push offset sum
        push x
        call SumArrayPositive
        ";

    #[test]
    fn test_all_fields_missing() {
        let expected = "\
; ========================
; Descrpt: No description.
; Input  : No input.
; Output : No output.
; ========================";
        assert_eq!(procedure_description(None, None, None, None), expected);
        assert_eq!(ProcedureDoc::new().render(), expected);
    }

    #[test]
    fn test_empty_strings_fall_back() {
        assert_eq!(
            procedure_description(Some(""), Some(""), Some(""), Some("")),
            procedure_description(None, None, None, None)
        );
    }

    #[test]
    fn test_sum_array_with_code() {
        let expected = "\
; ===========================================================================
; Descrpt: Sums positive values in pushed array into a variable.
; Input  : (By order) [1] x, [2] offset sum, [3] arraySize, [4] offset array.
; Output : Sum in [sum] at dseg.
; ===========================================================================";
        let header = ProcedureDoc::new()
            .description("sums positive values in pushed array into a variable")
            .output("sum in [Sum] at DSEG")
            .code(SUM_ARRAY)
            .render();
        assert_eq!(header, expected);
    }

    #[test]
    fn test_explicit_input_follows_preamble() {
        let header = procedure_description(None, Some("ES points to the DATA segment"), None, Some("push ax\ncall P"));
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines[2], "; Input  : (By order) [1] ax.");
        assert_eq!(lines[3], "             Es points to the data segment.");
        assert_eq!(lines[4], "; Output : No output.");
    }

    #[test]
    fn test_explicit_input_without_code() {
        let header = procedure_description(None, Some("AX = value"), None, None);
        assert_eq!(header.lines().nth(2), Some("; Input  : Ax = value."));
    }

    #[test]
    fn test_code_without_pushes() {
        let header = procedure_description(None, None, None, Some("call Proc"));
        assert_eq!(header.lines().nth(2), Some("; Input  : (By order) ."));
    }

    #[test]
    fn test_single_trailing_period() {
        let header = procedure_description(Some("done."), Some("nothing."), Some("ax."), None);
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines[1], "; Descrpt: Done.");
        assert_eq!(lines[2], "; Input  : Nothing.");
        assert_eq!(lines[3], "; Output : Ax.");
    }

    #[test]
    fn test_borders_match_longest_line() {
        let header = procedure_description(Some("a"), None, Some("a much longer output line"), None);
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines[0].len(), lines[3].len());
        assert_eq!(lines[0], lines[4]);
    }
}
