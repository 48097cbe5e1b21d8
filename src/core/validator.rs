//! Client-side checks for the simulation form.
//!
//! Every field is checked on each pass, so the view can flag all bad inputs
//! at once. Unparsable and out-of-range input get different messages.

use crate::domain::model::{Field, FieldErrors, FormFields, SimulationRequest, ValidationOutcome};

pub const PROPERTY_VALUE_MIN: f64 = 0.01;
pub const PROPERTY_VALUE_MAX: f64 = 999_999_999.0;
pub const DOWN_PAYMENT_PERCENT_MIN: f64 = 5.0;
pub const DOWN_PAYMENT_PERCENT_MAX: f64 = 20.0;
pub const CONTRACT_YEARS_MIN: u32 = 1;
pub const CONTRACT_YEARS_MAX: u32 = 5;

enum Parsed {
    Missing,
    NotANumber,
    Number(f64),
}

fn parse_decimal(raw: &str) -> Parsed {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Parsed::Missing;
    }
    // pt-BR input: a lone decimal comma reads as a dot. Grouped forms such
    // as "1.000,50" stay unparsable.
    let normalized = if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Parsed::Number(value),
        _ => Parsed::NotANumber,
    }
}

pub fn check_property_value(raw: &str) -> Result<f64, String> {
    let value = match parse_decimal(raw) {
        Parsed::Missing => return Err("Property value is required".to_string()),
        Parsed::NotANumber => return Err("Property value must be a number".to_string()),
        Parsed::Number(value) => value,
    };

    if value <= 0.0 {
        return Err("Property value must be greater than zero".to_string());
    }
    if value < PROPERTY_VALUE_MIN {
        return Err(format!("Minimum value: R$ {:.2}", PROPERTY_VALUE_MIN));
    }
    if value > PROPERTY_VALUE_MAX {
        return Err("Property value is too high".to_string());
    }
    Ok(value)
}

pub fn check_down_payment_percent(raw: &str) -> Result<f64, String> {
    let value = match parse_decimal(raw) {
        Parsed::Missing => return Err("Down payment percentage is required".to_string()),
        Parsed::NotANumber => return Err("Down payment percentage must be a number".to_string()),
        Parsed::Number(value) => value,
    };

    if value < DOWN_PAYMENT_PERCENT_MIN {
        return Err(format!("Minimum percentage: {}%", DOWN_PAYMENT_PERCENT_MIN));
    }
    if value > DOWN_PAYMENT_PERCENT_MAX {
        return Err(format!("Maximum percentage: {}%", DOWN_PAYMENT_PERCENT_MAX));
    }
    Ok(value)
}

pub fn check_contract_years(raw: &str) -> Result<u32, String> {
    let value = match parse_decimal(raw) {
        Parsed::Missing => return Err("Contract duration is required".to_string()),
        Parsed::NotANumber => return Err("Contract duration must be a number".to_string()),
        Parsed::Number(value) => value,
    };

    if value.fract() != 0.0 {
        return Err("Contract duration must be a whole number of years".to_string());
    }
    if value < f64::from(CONTRACT_YEARS_MIN) {
        return Err(format!("Minimum: {} year", CONTRACT_YEARS_MIN));
    }
    if value > f64::from(CONTRACT_YEARS_MAX) {
        return Err(format!("Maximum: {} years", CONTRACT_YEARS_MAX));
    }
    // In range, so the cast is exact.
    Ok(value as u32)
}

/// Parses all three fields into a request, or reports every failing field.
pub fn parse_request(fields: &FormFields) -> Result<SimulationRequest, FieldErrors> {
    tracing::debug!("Validating form fields: {:?}", fields);

    let property_value = check_property_value(&fields.property_value);
    let down_payment_percent = check_down_payment_percent(&fields.down_payment_percent);
    let contract_years = check_contract_years(&fields.contract_years);

    match (property_value, down_payment_percent, contract_years) {
        (Ok(property_value), Ok(down_payment_percent), Ok(contract_years)) => Ok(
            SimulationRequest::new(property_value, down_payment_percent, contract_years),
        ),
        (property_value, down_payment_percent, contract_years) => {
            let mut errors = FieldErrors::new();
            if let Err(message) = property_value {
                errors.insert(Field::PropertyValue, message);
            }
            if let Err(message) = down_payment_percent {
                errors.insert(Field::DownPaymentPercent, message);
            }
            if let Err(message) = contract_years {
                errors.insert(Field::ContractYears, message);
            }
            tracing::debug!("Validation failed: {:?}", errors);
            Err(errors)
        }
    }
}

pub fn validate(fields: &FormFields) -> ValidationOutcome {
    match parse_request(fields) {
        Ok(_) => ValidationOutcome::from_errors(FieldErrors::new()),
        Err(errors) => ValidationOutcome::from_errors(errors),
    }
}
