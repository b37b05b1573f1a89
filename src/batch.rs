// 📊 Batch Validation - CSV ingestion and summary reports
// Validates a whole file of account records and rolls the outcomes up

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::BankAccount;

// ============================================================================
// OUTCOMES
// ============================================================================

/// Validation outcome for a single record in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordOutcome {
    /// 1-based data row in the source file.
    pub row: usize,

    /// Holder name as the record renders it.
    pub holder: String,

    /// Masked account number, safe to print.
    pub display_number: String,

    pub valid: bool,

    /// Flattened "field message" lines; empty when valid.
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub outcomes: Vec<RecordOutcome>,
}

impl BatchReport {
    pub fn all_valid(&self) -> bool {
        self.invalid_count == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} accounts: {} valid, {} invalid",
            self.total, self.valid_count, self.invalid_count
        )
    }
}

// ============================================================================
// CSV INGESTION
// ============================================================================

/// Read account records from CSV. Header names match the record's field
/// names; camelCase aliases work here too, and missing columns default to
/// empty fields.
pub fn read_accounts<R: Read>(reader: R) -> Result<Vec<BankAccount>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let mut accounts = Vec::new();

    for result in rdr.deserialize() {
        let account: BankAccount = result.context("Failed to deserialize account row")?;
        accounts.push(account);
    }

    Ok(accounts)
}

pub fn load_csv(csv_path: &Path) -> Result<Vec<BankAccount>> {
    let file = File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    read_accounts(file)
}

// ============================================================================
// BATCH VALIDATION
// ============================================================================

/// Validate every record and roll the outcomes into a report.
pub fn validate_all(accounts: &mut [BankAccount]) -> BatchReport {
    let mut outcomes = Vec::with_capacity(accounts.len());
    let mut valid_count = 0;

    for (index, account) in accounts.iter_mut().enumerate() {
        let valid = account.is_valid();
        if valid {
            valid_count += 1;
        }

        outcomes.push(RecordOutcome {
            row: index + 1,
            holder: account.name(),
            display_number: account.display_number(),
            valid,
            messages: account.errors().full_messages(),
        });
    }

    BatchReport {
        generated_at: Utc::now(),
        total: outcomes.len(),
        valid_count,
        invalid_count: outcomes.len() - valid_count,
        outcomes,
    }
}

// ============================================================================
// TESTS
// ============================================================================
