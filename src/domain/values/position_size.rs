//! Fixed-fractional position sizing.
//!
//! Risk per trade is a percentage of the account balance. Given the stop
//! distance and the saved monetary value of one price unit per lot for the
//! instrument, the lot size that risks exactly that amount is
//! `risk_amount / (stop_distance * value_per_lot)`.

use serde::{Deserialize, Serialize};

/// Inputs for a sizing calculation. Zero counts as "not provided" for the
/// account fields and prices, the same as an empty field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskInputs {
    pub balance: Option<f64>,
    pub risk_percent: Option<f64>,
    pub entry_price: Option<f64>,
    pub stop_loss: Option<f64>,
    pub instrument: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidanceStatus {
    MissingInputs,
    NoInstrument,
    NoInstrumentValue,
    ZeroStopDistance,
    Sized,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskGuidance {
    pub status: GuidanceStatus,
    pub risk_amount: Option<f64>,
    pub stop_distance: Option<f64>,
    pub position_size_lots: Option<f64>,
    pub message: String,
}

fn provided(v: Option<f64>) -> Option<f64> {
    v.filter(|x| *x != 0.0 && x.is_finite())
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Money at risk, rounded to cents. `None` unless both inputs are set.
pub fn risk_amount(balance: Option<f64>, risk_percent: Option<f64>) -> Option<f64> {
    let balance = provided(balance)?;
    let pct = provided(risk_percent)?;
    Some(round_cents(balance * (pct / 100.0)))
}

/// Compute sizing guidance. `value_per_lot` is the saved instrument value
/// for the trade's instrument and market, if any.
pub fn guidance(inputs: &RiskInputs, value_per_lot: Option<f64>) -> RiskGuidance {
    let (Some(balance), Some(pct), Some(entry), Some(stop)) = (
        provided(inputs.balance),
        provided(inputs.risk_percent),
        provided(inputs.entry_price),
        provided(inputs.stop_loss),
    ) else {
        return RiskGuidance {
            status: GuidanceStatus::MissingInputs,
            risk_amount: None,
            stop_distance: None,
            position_size_lots: None,
            message: "Provide balance, risk %, entry, and stop-loss to calculate risk.".into(),
        };
    };

    let risk = balance * (pct / 100.0);
    let stop_distance = (entry - stop).abs();
    let mut result = RiskGuidance {
        status: GuidanceStatus::Sized,
        risk_amount: Some(round_cents(risk)),
        stop_distance: Some(stop_distance),
        position_size_lots: None,
        message: String::new(),
    };

    let has_instrument = inputs
        .instrument
        .as_deref()
        .is_some_and(|i| !i.trim().is_empty());
    if !has_instrument {
        result.status = GuidanceStatus::NoInstrument;
        result.message = format!(
            "Risk amount: {risk:.2}. Stop distance: {stop_distance:.2}. Add instrument for sizing guidance."
        );
        return result;
    }

    let Some(value) = value_per_lot else {
        result.status = GuidanceStatus::NoInstrumentValue;
        result.message = format!(
            "Risk amount: {risk:.2}. Stop distance: {stop_distance:.2}. Insufficient data to verify position size."
        );
        return result;
    };

    if stop_distance == 0.0 {
        result.status = GuidanceStatus::ZeroStopDistance;
        result.message = "Stop distance is zero. Adjust entry and stop-loss.".into();
        return result;
    }

    let lots = risk / (stop_distance * value);
    result.position_size_lots = Some(lots);
    result.message = format!("Estimated position size: {lots:.2} lots based on your saved value.");
    result
}
