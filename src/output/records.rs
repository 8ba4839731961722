//! The CSV record artifact
//!
//! Every value is sanitized before writing so a record always occupies one
//! row: embedded double quotes become single quotes and line breaks become
//! spaces. The column schema is `url,category,title,date,content`.

use crate::output::OutputResult;
use crate::scrape::ArticleRecord;
use std::path::Path;

/// Normalizes a value for the row-oriented sink
///
/// Replaces `"` with `'`, `\n` with a space, and removes `\r`. Applying the
/// function twice yields the same string as applying it once.
pub fn sanitize(value: &str) -> String {
    value.replace('"', "'").replace('\n', " ").replace('\r', "")
}

/// Sanitizes every value of a record
fn sanitize_record(record: &ArticleRecord) -> ArticleRecord {
    ArticleRecord {
        url: sanitize(&record.url),
        category: record.category.as_deref().map(sanitize),
        title: record.title.as_deref().map(sanitize),
        date: record.date.as_deref().map(sanitize),
        content: record.content.as_deref().map(sanitize),
    }
}

/// Writes all records to the CSV file, header included
///
/// The file is replaced on each run; absent fields are written as empty
/// values.
pub fn write_records(path: &Path, records: &[ArticleRecord]) -> OutputResult<()> {
    tracing::info!("Saving {} records to {}", records.len(), path.display());

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(sanitize_record(record))?;
    }
    writer.flush()?;

    Ok(())
}

/// Reads the record artifact back
pub fn read_records(path: &Path) -> OutputResult<Vec<ArticleRecord>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(url: &str, title: Option<&str>, content: Option<&str>) -> ArticleRecord {
        ArticleRecord {
            url: url.to_string(),
            category: Some("politik".to_string()),
            title: title.map(String::from),
            date: Some("1 Januari 2024".to_string()),
            content: content.map(String::from),
        }
    }

    #[test]
    fn test_sanitize_replaces_quotes_and_newlines() {
        assert_eq!(
            sanitize("kata \"penting\"\ndi baris baru\r"),
            "kata 'penting' di baris baru"
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let once = sanitize("a \"b\"\nc\r\nd");
        let twice = sanitize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sanitize_leaves_clean_values_alone() {
        assert_eq!(sanitize("judul biasa"), "judul biasa");
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("articles.csv");

        let records = vec![
            record(
                "https://www.tempo.co/a",
                Some("Judul A"),
                Some("Paragraf satu. Paragraf dua."),
            ),
            record("https://www.tempo.co/b", None, None),
            ArticleRecord::empty("https://www.tempo.co/c"),
        ];

        write_records(&path, &records).unwrap();
        let read_back = read_records(&path).unwrap();

        assert_eq!(read_back.len(), 3);
        assert_eq!(read_back[0], records[0]);
        assert_eq!(read_back[1], records[1]);
        assert!(read_back[2].is_empty());
    }

    #[test]
    fn test_values_with_delimiters_survive_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("articles.csv");

        let records = vec![record(
            "https://www.tempo.co/a",
            Some("Judul, dengan koma"),
            Some("Isi dengan \"kutipan\"\ndan baris baru"),
        )];

        write_records(&path, &records).unwrap();
        let read_back = read_records(&path).unwrap();

        assert_eq!(read_back.len(), 1);
        assert_eq!(read_back[0].title.as_deref(), Some("Judul, dengan koma"));
        // Quotes and newlines were normalized on the way out
        assert_eq!(
            read_back[0].content.as_deref(),
            Some("Isi dengan 'kutipan' dan baris baru")
        );
    }

    #[test]
    fn test_header_row_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("articles.csv");

        write_records(&path, &[ArticleRecord::empty("https://www.tempo.co/a")]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(header, "url,category,title,date,content");
    }
}
