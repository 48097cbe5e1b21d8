use crate::core::orchestrator::Orchestrator;
use crate::domain::model::{FormFields, Outcome};
use crate::domain::ports::SimulationApi;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::{Read, Write};

#[derive(Debug, Serialize)]
struct BatchRow {
    valor_imovel: String,
    percentual_entrada: String,
    anos_contrato: String,
    status: &'static str,
    valor_entrada: Option<f64>,
    valor_financiado: Option<f64>,
    total_a_guardar: Option<f64>,
    parcela_mensal: Option<f64>,
    message: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub invalid: usize,
    pub failed: usize,
}

impl BatchRow {
    fn new(fields: FormFields, status: &'static str) -> Self {
        Self {
            valor_imovel: fields.property_value,
            percentual_entrada: fields.down_payment_percent,
            anos_contrato: fields.contract_years,
            status,
            valor_entrada: None,
            valor_financiado: None,
            total_a_guardar: None,
            parcela_mensal: None,
            message: None,
        }
    }
}

/// Runs every scenario in `reader` through `orchestrator`, one request at a
/// time, and writes one CSV row per scenario to `writer`.
pub async fn run_batch<A, R, W>(
    orchestrator: &Orchestrator<A>,
    reader: R,
    writer: W,
) -> Result<BatchSummary>
where
    A: SimulationApi,
    R: Read,
    W: Write,
{
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut summary = BatchSummary::default();

    for record in csv_reader.deserialize::<FormFields>() {
        let fields = record?;
        summary.total += 1;
        tracing::debug!("Batch scenario {}: {:?}", summary.total, fields);

        let outcome = orchestrator.handle_submission(&fields).await;
        let row = match outcome {
            Outcome::Success(result) => {
                summary.succeeded += 1;
                BatchRow {
                    valor_entrada: Some(result.down_payment_amount),
                    valor_financiado: Some(result.financed_amount),
                    total_a_guardar: Some(result.total_to_save),
                    parcela_mensal: Some(result.monthly_installment),
                    ..BatchRow::new(fields, "success")
                }
            }
            Outcome::FieldErrors(errors) => {
                summary.invalid += 1;
                let message = errors
                    .iter()
                    .map(|(field, message)| format!("{}: {}", field, message))
                    .collect::<Vec<_>>()
                    .join("; ");
                BatchRow {
                    message: Some(message),
                    ..BatchRow::new(fields, "invalid")
                }
            }
            Outcome::ApiFailure(error) => {
                summary.failed += 1;
                BatchRow {
                    message: Some(error.to_string()),
                    ..BatchRow::new(fields, "failed")
                }
            }
            // Scenarios run sequentially; only another caller sharing the
            // orchestrator can trigger this.
            Outcome::Busy => {
                summary.failed += 1;
                BatchRow {
                    message: Some("A simulation is already in progress".to_string()),
                    ..BatchRow::new(fields, "failed")
                }
            }
        };
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    tracing::info!(
        "Batch finished: {} scenarios, {} succeeded, {} invalid, {} failed",
        summary.total,
        summary.succeeded,
        summary.invalid,
        summary.failed
    );
    Ok(summary)
}
