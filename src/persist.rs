//! Saving an exchange as a timestamped Markdown file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::info;

use crate::template::ReportTemplate;

/// Local-time format used as the file name stem.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// One saved question and answer. Written once, never read back.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub user_input: &'a str,
    pub assistant_output: &'a str,
    pub created_at: DateTime<Local>,
}

/// Writes records into a directory using a [`ReportTemplate`].
#[derive(Debug, Clone)]
pub struct Recorder {
    dir: PathBuf,
    template: ReportTemplate,
}

impl Recorder {
    pub fn new(dir: impl Into<PathBuf>, template: ReportTemplate) -> Self {
        Recorder {
            dir: dir.into(),
            template,
        }
    }

    /// File name for a record created at `at`.
    pub fn file_name(&self, at: &DateTime<Local>) -> String {
        format!("{}{}", at.format(TIMESTAMP_FORMAT), self.template.suffix)
    }

    /// Save the exchange stamped with the current local time.
    pub fn persist(&self, user_input: &str, assistant_output: &str) -> io::Result<PathBuf> {
        self.write(&Record {
            user_input,
            assistant_output,
            created_at: Local::now(),
        })
    }

    /// Save the exchange stamped with `created_at`.
    pub fn persist_at(
        &self,
        user_input: &str,
        assistant_output: &str,
        created_at: DateTime<Local>,
    ) -> io::Result<PathBuf> {
        self.write(&Record {
            user_input,
            assistant_output,
            created_at,
        })
    }

    /// Write `record`, overwriting a file of the same name if one exists.
    pub fn write(&self, record: &Record<'_>) -> io::Result<PathBuf> {
        let path = self.dir.join(self.file_name(&record.created_at));
        let doc = self.template.render(record.user_input, record.assistant_output);
        write_document(&path, &doc)?;
        info!("saved exchange to {}", path.display());
        Ok(path)
    }
}

fn write_document(path: &Path, doc: &str) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(doc.as_bytes())?;
    out.flush()
}
