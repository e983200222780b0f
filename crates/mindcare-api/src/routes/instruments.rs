use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use mindcare_core::models::assessment::Severity;
use mindcare_instruments::scoring::AnswerRange;
use mindcare_instruments::severity;
use mindcare_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct SeverityRange {
    severity: Severity,
    range: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscaleDetail {
    id: String,
    name: String,
    items: Vec<usize>,
    description: Option<String>,
    severity_ranges: Vec<SeverityRange>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentDetail {
    id: String,
    name: String,
    item_count: usize,
    answer_range: AnswerRange,
    scale_factor: u32,
    subscales: Vec<SubscaleDetail>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)?;

    let subscales = instrument
        .subscales()
        .iter()
        .map(|definition| {
            let bands = severity::bands(definition.subscale);
            SubscaleDetail {
                id: definition.subscale.as_str().to_string(),
                name: definition.name.clone(),
                items: definition.items.clone(),
                description: definition.description.clone(),
                severity_ranges: Severity::ALL
                    .iter()
                    .map(|&level| SeverityRange {
                        severity: level,
                        range: bands.range_label(level),
                    })
                    .collect(),
            }
        })
        .collect();

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        item_count: instrument.item_count(),
        answer_range: instrument.answer_range(),
        scale_factor: instrument.scale_factor(),
        subscales,
    }))
}
