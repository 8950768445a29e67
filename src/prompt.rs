//! Prompt assembly and completion cleanup.
//!
//! The system prompt carries three parts: the translation instruction,
//! a description of the live schema, and a few worked examples with the
//! output rules. The user message is the question verbatim.

use crate::db::schema::TableSchema;

/// Builds the system prompt from an introspected schema.
pub struct PromptBuilder {
    tables: Vec<TableSchema>,
}

impl PromptBuilder {
    #[must_use]
    pub fn new(tables: Vec<TableSchema>) -> Self {
        Self { tables }
    }

    /// Render the full system prompt.
    #[must_use]
    pub fn system_prompt(&self) -> String {
        let mut prompt = String::new();
        prompt.push_str(
            "You are an expert at translating natural language questions into \
             precise SQL queries for a SQLite database.\n\n",
        );

        prompt.push_str("The database contains the following tables:\n\n");
        for table in &self.tables {
            prompt.push_str(&format!(
                "- Table `{}` with columns: {}\n",
                table.name,
                table.column_list()
            ));
        }

        prompt.push('\n');
        prompt.push_str(&self.examples_section());

        prompt.push_str(
            "\nImportant rules:\n\
             - Do NOT include ``` or the word \"sql\" in the output.\n\
             - Output exactly one clean, executable SQL statement and nothing else.\n",
        );
        prompt
    }

    fn examples_section(&self) -> String {
        let table = self
            .tables
            .first()
            .map(|t| t.name.as_str())
            .unwrap_or("candidates");

        let mut section = String::from("Examples:\n");
        section.push_str(&format!(
            "- \"How many records are available in the table?\"\n  SELECT COUNT(*) FROM {table};\n"
        ));
        section.push_str(&format!(
            "- \"List all rows of the table\"\n  SELECT * FROM {table};\n"
        ));

        // The worked filters only make sense against the candidates shape.
        if table == "candidates" {
            section.push_str(
                "- \"List all candidates whose Category is 'OBC'\"\n  \
                 SELECT * FROM candidates WHERE Category = 'OBC';\n",
            );
            section.push_str(
                "- \"How many candidates are there whose id starts from RJUD and dob of 1965\"\n  \
                 SELECT COUNT(*) FROM candidates WHERE ID LIKE 'RJUD%' AND DOB LIKE '%1965';\n",
            );
        }
        section
    }
}

/// Strip markdown fences and language tags from a completion.
///
/// The prompt forbids them, but models emit them anyway often enough
/// that the raw text cannot be trusted to be bare SQL.
#[must_use]
pub fn sanitize_completion(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        text = match rest.split_once('\n') {
            Some((tag, body))
                if tag.trim().is_empty() || tag.trim().eq_ignore_ascii_case("sql") =>
            {
                body
            }
            _ => rest,
        };
    }

    text = text.trim_end();
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text = text.trim();
    if let Some(rest) = text
        .strip_prefix("sql\n")
        .or_else(|| text.strip_prefix("SQL\n"))
    {
        text = rest;
    }

    text.trim().to_string()
}
