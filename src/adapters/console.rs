use crate::domain::model::{FieldErrors, SimulationResult};
use crate::domain::ports::SubmissionView;
use crate::utils::error::ApiError;
use crate::utils::format::format_brl;
use serde_json::{json, Value};

/// Terminal rendering of submission outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleView {
    json: bool,
}

impl ConsoleView {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

pub fn render_result(result: &SimulationResult) -> String {
    [
        "✅ Simulation completed".to_string(),
        format!("  Down payment:        {}", format_brl(result.down_payment_amount)),
        format!("  Financed amount:     {}", format_brl(result.financed_amount)),
        format!("  Total to save:       {}", format_brl(result.total_to_save)),
        format!("  Monthly installment: {}", format_brl(result.monthly_installment)),
    ]
    .join("\n")
}

pub fn render_field_errors(errors: &FieldErrors) -> String {
    let mut lines = vec!["❌ Fix the following fields:".to_string()];
    for (field, message) in errors {
        lines.push(format!("  {}: {}", field, message));
    }
    lines.join("\n")
}

/// `{"status": "invalid", "field_errors": {"propertyValue": "..."}}`
pub fn field_errors_json(errors: &FieldErrors) -> Value {
    let field_errors: serde_json::Map<String, Value> = errors
        .iter()
        .map(|(field, message)| (field.name().to_string(), Value::from(message.as_str())))
        .collect();
    json!({ "status": "invalid", "field_errors": field_errors })
}

pub fn failure_json(error: &ApiError) -> Value {
    json!({
        "status": "failed",
        "error": error.to_string(),
        "retryable": error.is_retryable(),
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("Could not encode output as JSON: {}", e),
    }
}

impl SubmissionView for ConsoleView {
    fn set_busy(&self, busy: bool) {
        if busy && !self.json {
            eprintln!("⏳ Calculating simulation...");
        }
    }

    fn show_field_errors(&self, errors: &FieldErrors) {
        if self.json {
            print_json(&field_errors_json(errors));
        } else {
            eprintln!("{}", render_field_errors(errors));
        }
    }

    fn show_failure(&self, error: &ApiError) {
        if self.json {
            print_json(&failure_json(error));
        } else {
            eprintln!("❌ {}", error);
            eprintln!("💡 Suggestion: {}", error.recovery_suggestion());
        }
    }

    fn show_result(&self, result: &SimulationResult) {
        if self.json {
            print_json(result);
        } else {
            println!("{}", render_result(result));
        }
    }

    fn show_rejected(&self) {
        if self.json {
            print_json(&json!({ "status": "busy" }));
        } else {
            eprintln!("⚠️ A simulation is already in progress");
        }
    }
}
