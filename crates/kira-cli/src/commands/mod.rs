//! CLI command implementations.

pub mod compare;
pub mod compound;
pub mod fuel;
pub mod inputs;
pub mod loan;
pub mod property_tax;
pub mod roi;
pub mod schedule;

// Re-export submodules for convenience
pub use compare::CompareArgs;
pub use compound::CompoundArgs;
pub use fuel::FuelArgs;
pub use inputs::InputsArgs;
pub use loan::LoanArgs;
pub use property_tax::PropertyTaxArgs;
pub use roi::RoiArgs;
pub use schedule::ScheduleArgs;

use kira_core::formatting::{format_money, format_percent};
use kira_storage::{CalculatorForm, FormSnapshot, FormStore, RedbStore};

use crate::cli::OutputFormat;
use crate::config::KiraConfig;
use crate::error::{CliError, CliResult};

/// State shared by every command.
pub struct Context {
    pub config: KiraConfig,
    pub format: OutputFormat,
    pub save: bool,
    pub quiet: bool,
    pub forms: FormStore<RedbStore>,
}

impl Context {
    /// Formats an amount with the configured currency label.
    pub fn money(&self, amount: f64) -> String {
        format_money(amount, &self.config.currency)
    }

    /// Formats a percentage with two decimals.
    pub fn percent(&self, value: f64) -> String {
        format_percent(value, 2)
    }

    /// Starts resolving the fields of a form against its saved values.
    pub fn inputs(&self, form: CalculatorForm) -> CliResult<FormInputs> {
        Ok(FormInputs {
            form,
            saved: self.forms.load(form)?,
            supplied: Vec::new(),
        })
    }
}

/// Command-line values of one form, falling back to the saved ones.
pub struct FormInputs {
    form: CalculatorForm,
    saved: FormSnapshot,
    supplied: Vec<(&'static str, String)>,
}

impl FormInputs {
    /// The given value, else the saved one, else a missing-argument error.
    pub fn require(
        &mut self,
        field: &'static str,
        flag: &'static str,
        arg: Option<String>,
    ) -> CliResult<String> {
        self.optional(field, arg)
            .ok_or(CliError::MissingArgument { flag, field })
    }

    /// The given value, else the saved one.
    pub fn optional(&mut self, field: &'static str, arg: Option<String>) -> Option<String> {
        match arg {
            Some(value) => {
                self.supplied.push((field, value.clone()));
                Some(value)
            }
            None => {
                let saved = self.saved.get(field).map(str::to_string);
                if saved.is_some() {
                    tracing::debug!("restored {}.{} from saved inputs", self.form, field);
                }
                saved
            }
        }
    }

    /// Saves the values given on the command line, unless saving is off.
    pub fn remember(&self, ctx: &Context) -> CliResult<()> {
        if !ctx.save || self.supplied.is_empty() {
            return Ok(());
        }
        let entries: Vec<(&str, &str)> = self
            .supplied
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
            .collect();
        ctx.forms.save(self.form, &entries)?;
        tracing::debug!("saved {} input(s) for {}", entries.len(), self.form);
        Ok(())
    }
}
