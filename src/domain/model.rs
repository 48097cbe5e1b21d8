use crate::utils::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The three form inputs, exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormFields {
    #[serde(rename = "valor_imovel", default)]
    pub property_value: String,
    #[serde(rename = "percentual_entrada", default)]
    pub down_payment_percent: String,
    #[serde(rename = "anos_contrato", default)]
    pub contract_years: String,
}

impl FormFields {
    pub fn new(
        property_value: impl Into<String>,
        down_payment_percent: impl Into<String>,
        contract_years: impl Into<String>,
    ) -> Self {
        Self {
            property_value: property_value.into(),
            down_payment_percent: down_payment_percent.into(),
            contract_years: contract_years.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    PropertyValue,
    DownPaymentPercent,
    ContractYears,
}

impl Field {
    /// Form field name, as the view layer knows it.
    pub fn name(self) -> &'static str {
        match self {
            Field::PropertyValue => "propertyValue",
            Field::DownPaymentPercent => "downPaymentPercent",
            Field::ContractYears => "contractYears",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type FieldErrors = BTreeMap<Field, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub field_errors: FieldErrors,
}

impl ValidationOutcome {
    pub fn from_errors(field_errors: FieldErrors) -> Self {
        Self {
            valid: field_errors.is_empty(),
            field_errors,
        }
    }
}

/// A validated simulation request. Only `core::validator` builds these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRequest {
    #[serde(rename = "valor_imovel")]
    property_value: f64,
    #[serde(rename = "percentual_entrada")]
    down_payment_percent: f64,
    #[serde(rename = "anos_contrato")]
    contract_years: u32,
}

impl SimulationRequest {
    pub(crate) fn new(property_value: f64, down_payment_percent: f64, contract_years: u32) -> Self {
        Self {
            property_value,
            down_payment_percent,
            contract_years,
        }
    }

    pub fn property_value(&self) -> f64 {
        self.property_value
    }

    pub fn down_payment_percent(&self) -> f64 {
        self.down_payment_percent
    }

    pub fn contract_years(&self) -> u32 {
        self.contract_years
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    #[serde(rename = "valor_entrada")]
    pub down_payment_amount: f64,
    #[serde(rename = "valor_financiado")]
    pub financed_amount: f64,
    #[serde(rename = "total_a_guardar")]
    pub total_to_save: f64,
    #[serde(rename = "parcela_mensal")]
    pub monthly_installment: f64,
}

impl SimulationResult {
    pub fn amounts(&self) -> [f64; 4] {
        [
            self.down_payment_amount,
            self.financed_amount,
            self.total_to_save,
            self.monthly_installment,
        ]
    }

    /// Every amount is finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.amounts().iter().all(|v| v.is_finite() && *v >= 0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    FieldErrors(FieldErrors),
    ApiFailure(ApiError),
    Success(SimulationResult),
    /// Rejected because another submission is still in flight.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    RequestInFlight,
    Success,
    Failed,
    Invalid,
}

impl SubmissionState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SubmissionState::Success | SubmissionState::Failed | SubmissionState::Invalid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = SimulationRequest::new(300000.0, 10.0, 3);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "valor_imovel": 300000.0,
                "percentual_entrada": 10.0,
                "anos_contrato": 3
            })
        );
    }

    #[test]
    fn test_result_from_wire_format() {
        let result: SimulationResult = serde_json::from_value(serde_json::json!({
            "valor_entrada": 30000.0,
            "valor_financiado": 270000.0,
            "total_a_guardar": 30000.0,
            "parcela_mensal": 1250.0
        }))
        .unwrap();
        assert_eq!(result.financed_amount, 270000.0);
        assert!(result.is_well_formed());
    }

    #[test]
    fn test_negative_amount_is_not_well_formed() {
        let result = SimulationResult {
            down_payment_amount: -1.0,
            financed_amount: 0.0,
            total_to_save: 0.0,
            monthly_installment: 0.0,
        };
        assert!(!result.is_well_formed());
    }

    #[test]
    fn test_form_fields_from_csv_names() {
        let fields: FormFields = serde_json::from_value(serde_json::json!({
            "valor_imovel": "300000",
            "anos_contrato": "3"
        }))
        .unwrap();
        assert_eq!(fields.property_value, "300000");
        assert_eq!(fields.down_payment_percent, "");
    }
}
