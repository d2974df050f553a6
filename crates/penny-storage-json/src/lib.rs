use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use penny_core::{CoreError, ExpenseSource};
use penny_domain::Transaction;

pub const DEFAULT_FILE_NAME: &str = "expenses.json";
const TMP_SUFFIX: &str = "tmp";

/// A JSON array of transactions on disk, used to exchange expense history
/// with the forecasting core.
#[derive(Debug, Clone)]
pub struct JsonExpenseFile {
    path: PathBuf,
}

impl JsonExpenseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Points at the default expense file inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all transactions; a missing file is an empty history.
    pub fn load(&self) -> Result<Vec<Transaction>, CoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "expense file missing, using empty history");
            return Ok(Vec::new());
        }
        load_transactions_from_path(&self.path)
    }

    pub fn save(&self, transactions: &[Transaction]) -> Result<(), CoreError> {
        save_transactions_to_path(transactions, &self.path)
    }

    /// Appends one transaction and rewrites the file.
    pub fn append(&self, transaction: Transaction) -> Result<usize, CoreError> {
        let mut transactions = self.load()?;
        transactions.push(transaction);
        self.save(&transactions)?;
        Ok(transactions.len())
    }
}

impl ExpenseSource for JsonExpenseFile {
    fn load_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        self.load()
    }
}

pub fn save_transactions_to_path(
    transactions: &[Transaction],
    path: &Path,
) -> Result<(), CoreError> {
    let json = serde_json::to_string_pretty(transactions)
        .map_err(|err| CoreError::Serialization(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), count = transactions.len(), "saved expense file");
    Ok(())
}

pub fn load_transactions_from_path(path: &Path) -> Result<Vec<Transaction>, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| {
        CoreError::Serialization(format!("{}: {}", path.display(), err))
    })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
