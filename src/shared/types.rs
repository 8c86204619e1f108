use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The calculators offered by the suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub enum CalculatorKind {
    Basic,
    Age,
    Weight,
    Percentage,
    Time,
    Length,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub enum WeightUnit {
    Kg,
    G,
    Lb,
    Oz,
    St,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub enum LengthUnit {
    M,
    Cm,
    Mm,
    Km,
    In,
    Ft,
    Yd,
    Mi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub enum PercentageOp {
    PercentageOf,
    PercentageChange,
    PercentageDifference,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct BasicCalcRequest {
    pub expression: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct BasicCalcResponse {
    pub result: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct AgeCalcRequest {
    pub birth_date: String,
    pub calc_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct AgeCalcResponse {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_days: i64,
    pub total_weeks: i64,
    pub days_until_birthday: i64,
    #[ts(type = "string")]
    pub next_birthday: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct WeightCalcRequest {
    pub weight: f64,
    pub unit: WeightUnit,
}

/// A weight expressed in every supported unit at once
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct WeightConversions {
    pub kg: f64,
    pub g: f64,
    pub lb: f64,
    pub oz: f64,
    pub st: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct PercentageCalcRequest {
    pub value: f64,
    pub percentage: f64,
    pub calculation_type: PercentageOp,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct PercentageCalcResponse {
    pub result: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct TimeCalcRequest {
    pub time: f64,
    pub from_unit: TimeUnit,
    pub to_unit: TimeUnit,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct TimeConversions {
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
    pub days: f64,
    pub weeks: f64,
    pub months: f64,
    pub years: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct TimeCalcResponse {
    pub result: f64,
    pub conversions: TimeConversions,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct LengthCalcRequest {
    pub length: f64,
    pub from_unit: LengthUnit,
    pub to_unit: LengthUnit,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct LengthConversions {
    pub m: f64,
    pub cm: f64,
    pub mm: f64,
    pub km: f64,
    #[serde(rename = "in")]
    #[ts(rename = "in")]
    pub inches: f64,
    pub ft: f64,
    pub yd: f64,
    pub mi: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct LengthCalcResponse {
    pub result: f64,
    pub conversions: LengthConversions,
}

/// Payload for appending to the calculation history
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct NewCalculation {
    #[serde(rename = "type")]
    #[ts(rename = "type")]
    pub kind: CalculatorKind,
    pub calculation: String,
    pub result: String,
}

/// One completed calculation, immutable once stored
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct CalculationRecord {
    pub id: u64,
    #[serde(rename = "type")]
    #[ts(rename = "type")]
    pub kind: CalculatorKind,
    pub calculation: String,
    pub result: String,
    #[ts(type = "string")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "client/src/types/bindings.ts")]
pub struct MessageResponse {
    pub message: String,
}

// The limit arrives as a query-string value, so it is parsed by hand
// rather than through serde's number deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<String>,
}
