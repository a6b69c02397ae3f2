use crate::types::catalog::Catalog;

/// Renders a responses-file skeleton for a catalog: every criterion as a
/// commented-out assignment under its judgments header. Uncommenting a line
/// and setting yes/no/na yields a loadable responses file.
pub fn responses_template(catalog: &Catalog) -> String {
    let mut output = String::new();
    output.push_str("# Responses file skeleton. Uncomment each criterion line and set its\n");
    output.push_str("# value to yes, no, or na. Every criterion must be answered to score.\n\n");
    output.push_str("[audit]\n");
    output.push_str("# subject = \"https://example.com/page\"\n");

    for bucket in &catalog.buckets {
        for factor in &bucket.factors {
            output.push_str(&format!(
                "\n[judgments.{}.{}]\n",
                toml_key(&bucket.name),
                toml_key(&factor.name)
            ));
            for criterion in &factor.criteria {
                output.push_str(&format!(
                    "# {} = \"yes\"  # weight {}\n",
                    toml_key(&criterion.name),
                    criterion.weight
                ));
            }
        }
    }
    output
}

fn toml_key(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
