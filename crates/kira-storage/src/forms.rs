//! Saved calculator inputs.
//!
//! Each calculator form stores its raw field text under `form.field` keys,
//! plus a `form.__saved_at` RFC 3339 timestamp of the last save. Values are
//! kept exactly as typed (thousands separators included) so they can be
//! shown back to the user unchanged.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adapter::KeyValueStore;
use crate::error::{StorageError, StorageResult};

const SAVED_AT_FIELD: &str = "__saved_at";

/// A calculator whose inputs can be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculatorForm {
    /// Loan payment and schedule
    Loan,
    /// Two-offer loan comparison
    Comparison,
    /// Compound interest savings
    Compound,
    /// Property purchase costs
    PropertyTax,
    /// Rental yields
    Roi,
    /// Fuel economy
    Fuel,
}

impl CalculatorForm {
    /// All forms, in display order.
    pub const ALL: [CalculatorForm; 6] = [
        CalculatorForm::Loan,
        CalculatorForm::Comparison,
        CalculatorForm::Compound,
        CalculatorForm::PropertyTax,
        CalculatorForm::Roi,
        CalculatorForm::Fuel,
    ];

    /// Key prefix of the form.
    pub fn key(&self) -> &'static str {
        match self {
            CalculatorForm::Loan => "loan",
            CalculatorForm::Comparison => "comparison",
            CalculatorForm::Compound => "compound",
            CalculatorForm::PropertyTax => "propertyTax",
            CalculatorForm::Roi => "roi",
            CalculatorForm::Fuel => "fuel",
        }
    }

    /// Field names of the form, in entry order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            CalculatorForm::Loan => &["loanAmount", "interestRate", "loanTerm"],
            CalculatorForm::Comparison => &[
                "loanAmount",
                "interestRate1",
                "loanTerm1",
                "interestRate2",
                "loanTerm2",
            ],
            CalculatorForm::Compound => &[
                "principal",
                "monthlyDeposit",
                "interestRate",
                "termMonths",
                "compoundFrequency",
            ],
            CalculatorForm::PropertyTax => &["propertyPrice", "loanAmount"],
            CalculatorForm::Roi => &[
                "propertyPrice",
                "monthlyRental",
                "annualExpenses",
                "loanAmount",
                "interestRate",
            ],
            CalculatorForm::Fuel => &["distance", "fuelUsed", "fuelPrice"],
        }
    }

    /// Returns true if `field` belongs to this form.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields().iter().any(|known| *known == field)
    }

    /// Storage key of one field.
    pub fn field_key(&self, field: &str) -> String {
        format!("{}.{}", self.key(), field)
    }

    fn saved_at_key(&self) -> String {
        self.field_key(SAVED_AT_FIELD)
    }

    fn prefix(&self) -> String {
        format!("{}.", self.key())
    }
}

impl fmt::Display for CalculatorForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for CalculatorForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        CalculatorForm::ALL
            .into_iter()
            .find(|form| form.key().to_lowercase() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = CalculatorForm::ALL.iter().map(|f| f.key()).collect();
                format!("Unknown form '{}'. Known forms: {}", s, known.join(", "))
            })
    }
}

/// The saved values of one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// The form
    pub form: CalculatorForm,
    /// Saved field values keyed by field name
    pub values: BTreeMap<String, String>,
    /// When the form was last saved
    pub saved_at: Option<DateTime<Utc>>,
}

impl FormSnapshot {
    /// Saved value of a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Returns true if no field has a saved value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fields of the form without a saved value.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.form
            .fields()
            .iter()
            .copied()
            .filter(|field| !self.values.contains_key(*field))
            .collect()
    }

    /// Returns true if every field of the form has a saved value.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Saves and restores calculator inputs in a [`KeyValueStore`].
///
/// # Example
///
/// ```rust
/// use kira_storage::{CalculatorForm, FormStore, InMemoryStore};
///
/// let forms = FormStore::new(InMemoryStore::new());
/// forms
///     .save(CalculatorForm::Loan, &[("loanAmount", "100,000"), ("interestRate", "5")])
///     .unwrap();
///
/// let snapshot = forms.load(CalculatorForm::Loan).unwrap();
/// assert_eq!(snapshot.get("loanAmount"), Some("100,000"));
/// assert_eq!(snapshot.missing_fields(), vec!["loanTerm"]);
/// assert!(forms.load_complete(CalculatorForm::Loan).unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct FormStore<S> {
    store: S,
}

impl<S: KeyValueStore> FormStore<S> {
    /// Wraps a key-value store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Saves field values, stamped with the current time.
    ///
    /// Fields not listed keep their previously saved value.
    pub fn save(&self, form: CalculatorForm, values: &[(&str, &str)]) -> StorageResult<()> {
        self.save_at(form, values, Utc::now())
    }

    /// Saves field values with an explicit timestamp.
    pub fn save_at(
        &self,
        form: CalculatorForm,
        values: &[(&str, &str)],
        saved_at: DateTime<Utc>,
    ) -> StorageResult<()> {
        if let Some((field, _)) = values.iter().find(|(field, _)| !form.has_field(field)) {
            return Err(StorageError::UnknownField {
                form: form.key(),
                field: (*field).to_string(),
            });
        }

        let mut keys: Vec<String> = values.iter().map(|(field, _)| form.field_key(field)).collect();
        keys.push(form.saved_at_key());
        let timestamp = saved_at.to_rfc3339();

        let entries: Vec<(&str, &str)> = keys
            .iter()
            .map(String::as_str)
            .zip(values.iter().map(|(_, value)| *value).chain([timestamp.as_str()]))
            .collect();

        self.store.set_many(&entries)?;
        log::debug!(
            "saved {} field(s) of form {} to {}",
            values.len(),
            form,
            self.store.backend_name()
        );
        Ok(())
    }

    /// Loads whatever fields of the form have been saved.
    pub fn load(&self, form: CalculatorForm) -> StorageResult<FormSnapshot> {
        let mut keys: Vec<String> = form
            .fields()
            .iter()
            .map(|field| form.field_key(field))
            .collect();
        keys.push(form.saved_at_key());
        let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();

        let mut stored = self.store.get_many(&key_refs)?;
        let saved_at = match stored.pop().flatten() {
            Some(raw) => Some(DateTime::parse_from_rfc3339(&raw)?.with_timezone(&Utc)),
            None => None,
        };

        let values = form
            .fields()
            .iter()
            .zip(stored)
            .filter_map(|(field, value)| value.map(|value| ((*field).to_string(), value)))
            .collect();

        Ok(FormSnapshot {
            form,
            values,
            saved_at,
        })
    }

    /// Loads the form only if every field has been saved.
    pub fn load_complete(&self, form: CalculatorForm) -> StorageResult<Option<FormSnapshot>> {
        let snapshot = self.load(form)?;
        Ok(snapshot.is_complete().then_some(snapshot))
    }

    /// Removes every saved value of the form. Returns the number of keys removed.
    pub fn clear(&self, form: CalculatorForm) -> StorageResult<usize> {
        let keys = self.store.keys_with_prefix(&form.prefix())?;
        let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        let removed = self.store.remove_many(&key_refs)?;
        log::debug!("cleared {} key(s) of form {}", removed, form);
        Ok(removed)
    }

    /// Removes the saved values of every form.
    pub fn clear_all(&self) -> StorageResult<usize> {
        let mut removed = 0;
        for form in CalculatorForm::ALL {
            removed += self.clear(form)?;
        }
        Ok(removed)
    }
}
