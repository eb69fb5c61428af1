//! CSV export of a result set

use crate::profiles::Profile;
use chrono::NaiveDate;

/// Column headers, in output order
pub const HEADERS: [&str; 9] = [
    "Name",
    "Handle",
    "Platform",
    "Category",
    "Followers",
    "Avg Likes",
    "Engagement Rate",
    "Description",
    "URL",
];

/// Render profiles as CSV, every field double-quoted.
///
/// Returns `None` for an empty result set: there is nothing to export.
pub fn to_csv(profiles: &[Profile]) -> Option<String> {
    if profiles.is_empty() {
        return None;
    }

    let mut csv = String::new();
    push_row(&mut csv, HEADERS);

    for p in profiles {
        push_row(
            &mut csv,
            [
                p.name.as_str(),
                p.handle.as_str(),
                p.platform.as_str(),
                p.category.as_str(),
                p.followers.to_string().as_str(),
                p.avg_likes.to_string().as_str(),
                format!("{}%", p.engagement_rate).as_str(),
                p.description.as_str(),
                p.platform_url.as_str(),
            ],
        );
    }

    Some(csv)
}

/// Download name for an export made on `date`
pub fn file_name(date: NaiveDate) -> String {
    format!("influencers_{}.csv", date.format("%Y-%m-%d"))
}

fn push_row<'a>(csv: &mut String, cells: impl IntoIterator<Item = &'a str>) {
    let row: Vec<String> = cells
        .into_iter()
        .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
        .collect();
    csv.push_str(&row.join(","));
    csv.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::catalog;

    /// Minimal reader for the fully quoted CSV written above
    fn parse_line(line: &str) -> Vec<String> {
        let mut cells = Vec::new();
        let mut chars = line.chars().peekable();

        while chars.peek().is_some() {
            assert_eq!(chars.next(), Some('"'));
            let mut cell = String::new();
            loop {
                match chars.next() {
                    Some('"') if chars.peek() == Some(&'"') => {
                        chars.next();
                        cell.push('"');
                    }
                    Some('"') => break,
                    Some(c) => cell.push(c),
                    None => panic!("unterminated cell in {:?}", line),
                }
            }
            cells.push(cell);
            if chars.peek() == Some(&',') {
                chars.next();
            }
        }
        cells
    }

    #[test]
    fn test_empty_has_no_export() {
        assert!(to_csv(&[]).is_none());
    }

    #[test]
    fn test_header_and_rows() {
        let profiles = catalog::parse(catalog::EMBEDDED_DATASET).unwrap();
        let csv = to_csv(&profiles).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 21);
        assert_eq!(parse_line(lines[0]), HEADERS);
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_round_trip_fields() {
        let profiles = catalog::parse(catalog::EMBEDDED_DATASET).unwrap();
        let csv = to_csv(&profiles).unwrap();

        for (profile, line) in profiles.iter().zip(csv.lines().skip(1)) {
            let cells = parse_line(line);
            assert_eq!(cells.len(), HEADERS.len());
            assert_eq!(cells[0], profile.name);
            assert_eq!(cells[4].parse::<u64>().unwrap(), profile.followers);

            let rate = cells[6].strip_suffix('%').unwrap();
            assert_eq!(rate.parse::<f64>().unwrap(), profile.engagement_rate);
        }
    }

    #[test]
    fn test_whole_rate_has_no_decimals() {
        let profiles = catalog::parse(catalog::EMBEDDED_DATASET).unwrap();
        let thirteen = profiles.iter().find(|p| p.id == "13").unwrap();
        let csv = to_csv(std::slice::from_ref(thirteen)).unwrap();
        assert!(csv.contains("\"5%\""));
    }

    #[test]
    fn test_quotes_are_doubled() {
        let mut profile = catalog::parse(catalog::EMBEDDED_DATASET).unwrap()[0].clone();
        profile.description = "Say \"hi\", kids".to_string();

        let csv = to_csv(&[profile]).unwrap();
        let row = csv.lines().nth(1).unwrap();

        assert!(row.contains("\"Say \"\"hi\"\", kids\""));
        assert_eq!(parse_line(row)[7], "Say \"hi\", kids");
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(file_name(date), "influencers_2024-03-09.csv");
    }
}
