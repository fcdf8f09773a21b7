use std::{
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::Path,
};

use super::{
    models::TopList,
    WordHistError,
};

pub const EXPORT_FILE_NAME: &str = "word_histogram.csv";
pub const CSV_HEADER: &str = "Word,Count";

/// Renders the list as `Word,Count` rows joined by `\n`, without a trailing newline.
///
/// Words are written verbatim. Tokens produced by the counter never contain a
/// comma, but nothing here escapes one if a caller passes other data.
pub fn to_csv(top_list: &TopList) -> String {
    let mut lines = Vec::with_capacity(top_list.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(top_list.entries().iter().map(|entry| format!("{},{}", entry.word, entry.count)));
    lines.join("\n")
}

pub fn write_csv(path: &Path, content: &str) -> Result<(), WordHistError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(content.as_bytes())?;
    writer.flush()?;

    Ok(())
}
