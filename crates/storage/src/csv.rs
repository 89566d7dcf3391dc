//! CSV question tables, one file per company.

use std::io::Read;
use std::path::PathBuf;

use async_trait::async_trait;
use prep_core::model::{Company, PracticeQuestion, QuestionId};

use crate::repository::{QuestionRepository, StorageError};

const TITLE_COLUMN: &str = "Title";
const LINK_COLUMN: &str = "Leetcode Question Link";
const ID_COLUMN: &str = "ID";

/// Question bank reading one CSV table per company from a data directory.
#[derive(Clone, Debug)]
pub struct CsvQuestionBank {
    data_dir: PathBuf,
}

impl CsvQuestionBank {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the backing table for a company.
    #[must_use]
    pub fn table_path(&self, company: Company) -> PathBuf {
        self.data_dir.join(company.file_name())
    }
}

#[async_trait]
impl QuestionRepository for CsvQuestionBank {
    async fn load_questions(
        &self,
        company: Company,
    ) -> Result<Vec<PracticeQuestion>, StorageError> {
        let path = self.table_path(company);
        let file = std::fs::File::open(&path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                StorageError::MissingTable(company)
            } else {
                StorageError::Io(err)
            }
        })?;
        read_questions(file)
    }
}

/// Parse a question table, keeping only rows with a usable title and link.
///
/// The `Title` and `Leetcode Question Link` columns are required; the `ID`
/// column is optional. A row whose `ID` cell is absent or not an integer is
/// assigned a sequential identifier over the kept rows, matching the
/// 1-based range a table without the column would get.
pub fn read_questions<R: Read>(reader: R) -> Result<Vec<PracticeQuestion>, StorageError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| StorageError::Malformed(e.to_string()))?
        .clone();
    let title_ix = find_column(&headers, TITLE_COLUMN)?;
    let link_ix = find_column(&headers, LINK_COLUMN)?;
    let id_ix = headers.iter().position(|h| h.trim() == ID_COLUMN);

    let mut questions = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| StorageError::Malformed(e.to_string()))?;
        let title = record.get(title_ix).unwrap_or("");
        let link = record.get(link_ix).unwrap_or("");
        let id = id_ix
            .and_then(|ix| record.get(ix))
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(questions.len() as u64 + 1);

        // Rows missing a title or link are discarded, not reported.
        if let Ok(question) = PracticeQuestion::new(QuestionId::new(id), title, link) {
            questions.push(question);
        }
    }

    Ok(questions)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize, StorageError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| StorageError::Malformed(format!("missing column: {name}")))
}
