use chrono::NaiveDate;

use crate::models::WordEntry;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date typed into the form. Accepts `YYYY-MM-DD` with surrounding spaces.
pub fn parse_form_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub fn csv_file_name(child: &str) -> String {
    let safe: String = child
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}_vocabulary.csv", safe)
}

/// One row per word:
/// `Word,Date First Used,Speaks,ASL,Confidence %`
pub fn export_csv(words: &[WordEntry]) -> String {
    let mut out = String::from("Word,Date First Used,Speaks,ASL,Confidence %\n");
    for w in words {
        let row = [
            csv_field(&w.word),
            w.added_on.format(DATE_FORMAT).to_string(),
            yes_no(w.speaks()).to_string(),
            yes_no(w.asl()).to_string(),
            w.confidence.unwrap_or(0).to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

// Quote when the field holds a delimiter, quote or line break; double inner quotes.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_form_date_accepts_iso_dates_only() {
        assert_eq!(
            parse_form_date(" 2024-02-29 "),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_form_date("2023-02-29"), None);
        assert_eq!(parse_form_date("02/03/2024"), None);
        assert_eq!(parse_form_date(""), None);
    }

    #[test]
    fn export_csv_rows() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let words = vec![
            WordEntry::dated("mama", day),
            WordEntry::dated("all done", day)
                .with_modes(true, true)
                .with_confidence(75),
        ];
        assert_eq!(
            export_csv(&words),
            "Word,Date First Used,Speaks,ASL,Confidence %\n\
             mama,2024-01-01,No,No,0\n\
             all done,2024-01-01,Yes,Yes,75\n"
        );
    }

    #[test]
    fn export_csv_quotes_special_characters() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let words = vec![WordEntry::dated("uh, \"oh\"", day)];
        let csv = export_csv(&words);
        assert!(csv.contains("\"uh, \"\"oh\"\"\",2024-01-01"));
    }

    #[test]
    fn export_csv_quotes_line_breaks() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let words = vec![WordEntry::dated("night\nnight", day), WordEntry::dated("a\rb", day)];
        let csv = export_csv(&words);
        assert!(csv.contains("\n\"night\nnight\",2024-01-01,No,No,0\n"));
        assert!(csv.contains("\"a\rb\",2024-01-01"));
    }

    #[test]
    fn csv_file_name_is_filesystem_safe() {
        assert_eq!(csv_file_name("Sam"), "Sam_vocabulary.csv");
        assert_eq!(csv_file_name("Mary Ann/2"), "Mary_Ann_2_vocabulary.csv");
    }
}
