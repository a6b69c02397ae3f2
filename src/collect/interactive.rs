use crate::error::Result;
use crate::types::catalog::{Catalog, Criterion};
use crate::types::response::{Judgment, ResponseSet};
use std::io::{BufRead, Write};

/// Walks the catalog in order and prompts for every criterion on stdin.
pub fn collect(catalog: &Catalog) -> Result<ResponseSet> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    collect_with(catalog, &mut stdin.lock(), &mut stdout.lock())
}

/// Prompt loop over arbitrary reader/writer pairs. Accepts y/yes, n/no,
/// na/n/a; `?` prints the criterion's guidance and re-asks; anything else
/// re-asks. Input ending before the walk completes is an error, the scorer
/// would reject the partial set anyway.
pub fn collect_with<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<ResponseSet> {
    let mut responses = ResponseSet::new();
    for bucket in &catalog.buckets {
        writeln!(output)?;
        writeln!(output, "== {} ==", bucket.name)?;
        for factor in &bucket.factors {
            writeln!(output)?;
            writeln!(output, "{}", factor.name)?;
            for criterion in &factor.criteria {
                let judgment = ask(criterion, input, output)?;
                responses.record(&bucket.name, &factor.name, &criterion.name, judgment);
            }
        }
    }
    Ok(responses)
}

fn ask<R: BufRead, W: Write>(
    criterion: &Criterion,
    input: &mut R,
    output: &mut W,
) -> Result<Judgment> {
    loop {
        write!(output, "  {} [y/n/na, ? for help]: ", criterion.name)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input ended before every criterion was answered",
            )
            .into());
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(Judgment::Yes),
            "n" | "no" => return Ok(Judgment::No),
            "na" | "n/a" => return Ok(Judgment::NotApplicable),
            "?" => {
                if criterion.guidance.is_empty() {
                    writeln!(output, "  (no guidance recorded for this criterion)")?;
                } else {
                    writeln!(output, "  {}", criterion.guidance)?;
                }
            }
            other => writeln!(output, "  Invalid: '{other}'. Enter y, n, or na.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tiny_catalog() -> Catalog {
        toml::from_str(
            r#"
[[bucket]]
name = "On-Page"
weight = 1.0

[[bucket.factor]]
name = "H1 Tag"

[[bucket.factor.criterion]]
name = "Contains primary keyword"
weight = 9
guidance = "Check if your target keyword appears in the H1 tag."

[[bucket.factor.criterion]]
name = "Contains proper length"
weight = 8
"#,
        )
        .expect("catalog should parse")
    }

    #[test]
    fn collects_one_judgment_per_criterion() {
        let catalog = tiny_catalog();
        let mut input = Cursor::new("y\nna\n");
        let mut output = Vec::new();

        let responses =
            collect_with(&catalog, &mut input, &mut output).expect("collection should finish");
        assert_eq!(responses.len(), 2);
        assert_eq!(
            responses.get("On-Page", "H1 Tag", "Contains primary keyword"),
            Some(Judgment::Yes)
        );
        assert_eq!(
            responses.get("On-Page", "H1 Tag", "Contains proper length"),
            Some(Judgment::NotApplicable)
        );
        assert!(responses.missing_paths(&catalog).is_empty());
    }

    #[test]
    fn question_mark_prints_guidance_then_reasks() {
        let catalog = tiny_catalog();
        let mut input = Cursor::new("?\nyes\nno\n");
        let mut output = Vec::new();

        let responses =
            collect_with(&catalog, &mut input, &mut output).expect("collection should finish");
        let transcript = String::from_utf8(output).expect("prompt output should be utf-8");
        assert!(transcript.contains("Check if your target keyword appears in the H1 tag."));
        assert_eq!(
            responses.get("On-Page", "H1 Tag", "Contains primary keyword"),
            Some(Judgment::Yes)
        );
    }

    #[test]
    fn invalid_input_reasks_until_valid() {
        let catalog = tiny_catalog();
        let mut input = Cursor::new("maybe\nY\nN/A\n");
        let mut output = Vec::new();

        let responses =
            collect_with(&catalog, &mut input, &mut output).expect("collection should finish");
        let transcript = String::from_utf8(output).expect("prompt output should be utf-8");
        assert!(transcript.contains("Invalid: 'maybe'"));
        assert_eq!(
            responses.get("On-Page", "H1 Tag", "Contains primary keyword"),
            Some(Judgment::Yes)
        );
        assert_eq!(
            responses.get("On-Page", "H1 Tag", "Contains proper length"),
            Some(Judgment::NotApplicable)
        );
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let catalog = tiny_catalog();
        let mut input = Cursor::new("y\n");
        let mut output = Vec::new();

        let err = collect_with(&catalog, &mut input, &mut output)
            .expect_err("missing answers should fail");
        assert!(err.to_string().contains("input ended"));
    }
}
