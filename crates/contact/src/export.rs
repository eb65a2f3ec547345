use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::ContactSubmission;

pub const HEADERS: [&str; 8] = [
    "Name",
    "Email",
    "Company",
    "Phone",
    "Subject",
    "Message",
    "Status",
    "Created At",
];

#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

/// Serializes `rows` as CSV: one header line, `\n` between records and no
/// trailing newline. Fields are quoted only when they hold a comma, a quote
/// or a line break.
pub fn to_csv(rows: &[ContactSubmission]) -> triove_shared::Result<String> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(vec![]);

    wtr.write_record(HEADERS).map_err(anyhow::Error::from)?;

    for row in rows {
        let created_at = triove_shared::to_iso8601(row.created_at)?;
        wtr.write_record([
            row.name.as_str(),
            row.email.as_str(),
            row.company.as_deref().unwrap_or_default(),
            row.phone.as_deref().unwrap_or_default(),
            row.subject.as_str(),
            row.message.as_str(),
            row.status.as_ref(),
            created_at.as_str(),
        ])
        .map_err(anyhow::Error::from)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush csv writer: {e}"))?;
    let mut content = String::from_utf8(bytes).map_err(anyhow::Error::from)?;

    if content.ends_with('\n') {
        content.pop();
    }

    Ok(content)
}

/// Builds the download for the currently visible rows. `None` means there is
/// nothing to export and no file should be produced.
pub fn export_csv(rows: &[ContactSubmission]) -> triove_shared::Result<Option<CsvExport>> {
    if rows.is_empty() {
        return Ok(None);
    }

    Ok(Some(CsvExport {
        filename: format!("contacts_{}.csv", triove_shared::now_iso8601()?),
        content: to_csv(rows)?,
    }))
}
