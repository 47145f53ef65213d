//! Read-only table of stored candidate records.

use askama::Template;

use crate::domain::CandidateRecord;

/// One table row. `serial` is the 1-based position in the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow<'a> {
    pub serial: usize,
    pub full_name: &'a str,
    pub job_role: &'a str,
    pub email: &'a str,
    pub qualification: &'a str,
}

/// Table rendering the cached records in order.
///
/// Address and comments are stored but not shown.
#[derive(Debug, Template)]
#[template(path = "record_table.html")]
pub struct RecordTable<'a> {
    pub rows: Vec<RecordRow<'a>>,
}

impl<'a> RecordTable<'a> {
    pub fn new(records: &'a [CandidateRecord]) -> Self {
        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| RecordRow {
                serial: index + 1,
                full_name: record.full_name(),
                job_role: record.job_role(),
                email: record.email(),
                qualification: record.qualification(),
            })
            .collect();
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoredFields;
    use rstest::rstest;

    fn record(full_name: &str, email: &str) -> CandidateRecord {
        CandidateRecord::from_stored(StoredFields {
            job_role: "ui-developer".to_owned(),
            full_name: full_name.to_owned(),
            email: email.to_owned(),
            address: "221B Baker Street, London".to_owned(),
            qualification: "BSc Computer Science".to_owned(),
            comments: "Excited to interview for this role.".to_owned(),
        })
    }

    #[rstest]
    fn serial_numbers_start_at_one() {
        let records = [
            record("First Person", "first@example.com"),
            record("Second Person", "second@example.com"),
        ];

        let table = RecordTable::new(&records);

        let serials: Vec<_> = table.rows.iter().map(|row| row.serial).collect();
        assert_eq!(serials, vec![1, 2]);
        assert_eq!(table.rows[1].email, "second@example.com");
    }

    #[rstest]
    fn renders_headings_and_hides_address() {
        let records = [record("First Person", "first@example.com")];

        let html = RecordTable::new(&records).render().expect("render table");

        for heading in ["S. No", "Full name", "Job Role", "Email", "Qualification"] {
            assert!(html.contains(heading), "missing heading {heading}");
        }
        assert!(html.contains("<td>1</td>"));
        assert!(!html.contains("Baker Street"));
    }

    #[rstest]
    fn empty_cache_renders_empty_body() {
        let html = RecordTable::new(&[]).render().expect("render table");

        assert!(!html.contains("<td>"));
    }
}
