//! `rollcall extract <page>` — extract contact records from a saved page.

use crate::cli::input::PageSource;
use crate::cli::output::{self, Styled};
use crate::extract::{self, Record};
use anyhow::Result;

/// Run the extract command.
pub fn run(source: &PageSource) -> Result<()> {
    let s = Styled::new();

    let html = source.read()?;
    let records = extract::extract_from_html(&html);

    if output::is_json() {
        output::print_json(&serde_json::to_value(&records)?);
        return Ok(());
    }

    if !output::is_quiet() {
        print_records(&s, &records);
        eprintln!();
    }
    print_summary(&s, &records);

    Ok(())
}

fn print_records(s: &Styled, records: &[Record]) {
    for (i, record) in records.iter().enumerate() {
        let heading = match record.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("entry {}", i + 1),
        };
        eprintln!("  {}", s.bold(&heading));
        output::print_field(s, "email", record.email.as_deref());
        output::print_field(s, "parent email", record.parent_email.as_deref());
        output::print_field(s, "state", record.state.as_deref());
    }
}

fn print_summary(s: &Styled, records: &[Record]) {
    let total = records.len();
    if total == 0 {
        eprintln!("  {} no directory entries found", s.warn_sym());
        return;
    }

    let have = |pick: fn(&Record) -> bool| records.iter().filter(|r| pick(r)).count();

    eprintln!("  {}", s.bold(&format!("{total} records")));
    output::print_coverage(s, "name", have(|r| r.name.is_some()), total);
    output::print_coverage(s, "email", have(|r| r.email.is_some()), total);
    output::print_coverage(s, "parent email", have(|r| r.parent_email.is_some()), total);
    output::print_coverage(s, "state", have(|r| r.state.is_some()), total);

    let empty = have(Record::is_empty);
    if empty > 0 {
        eprintln!(
            "    {} {empty} entries matched but produced no fields",
            s.warn_sym()
        );
    }
}
