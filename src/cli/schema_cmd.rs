//! Handler for the `schema` command: list tables and columns.

use tabled::{Table, Tabled};

use crate::cli::{output, DatabaseArgs};
use crate::config::Config;
use crate::db::schema;
use crate::error::Result;

#[derive(Tabled)]
struct ColumnRow {
    #[tabled(rename = "Column")]
    name: String,
    #[tabled(rename = "Type")]
    ty: String,
}

/// Execute the schema command.
pub fn execute(args: &DatabaseArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(ref database) = args.database {
        config.database.path = database.clone();
    }

    let tables = schema::introspect(&config.database.path)?;

    output::section(&format!("Schema of {}", config.database.path.display()));

    if tables.is_empty() {
        output::warn("no user tables found");
        return Ok(());
    }

    for table in tables {
        println!();
        output::note(&output::highlight(&table.name));

        let rows: Vec<ColumnRow> = table
            .columns
            .into_iter()
            .map(|c| ColumnRow {
                name: c.name,
                ty: c.ty,
            })
            .collect();

        let rendered = Table::new(rows).to_string();
        for line in rendered.lines() {
            println!("  {line}");
        }
    }

    println!();
    Ok(())
}
