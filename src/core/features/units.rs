//! Unit conversion tables for the weight, length and time calculators.
//!
//! Every dimension pivots through a canonical base unit: kilograms for
//! weight, meters for length, seconds for time. Converting between two
//! units is `from_base(to_base(value))`. The math is sign-agnostic;
//! magnitude validation happens in the request handlers.

use crate::shared::types::{
    LengthCalcResponse, LengthConversions, LengthUnit, TimeCalcResponse, TimeConversions,
    TimeUnit, WeightConversions, WeightUnit,
};

impl WeightUnit {
    pub const ALL: [WeightUnit; 5] = [
        WeightUnit::Kg,
        WeightUnit::G,
        WeightUnit::Lb,
        WeightUnit::Oz,
        WeightUnit::St,
    ];

    pub fn to_kilograms(self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::G => value / 1000.0,
            WeightUnit::Lb => value * 0.45359237,
            WeightUnit::Oz => value * 0.0283495231,
            WeightUnit::St => value * 6.35029318,
        }
    }

    pub fn from_kilograms(self, kilograms: f64) -> f64 {
        match self {
            WeightUnit::Kg => kilograms,
            WeightUnit::G => kilograms * 1000.0,
            WeightUnit::Lb => kilograms / 0.45359237,
            WeightUnit::Oz => kilograms / 0.0283495231,
            WeightUnit::St => kilograms / 6.35029318,
        }
    }
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::M,
        LengthUnit::Cm,
        LengthUnit::Mm,
        LengthUnit::Km,
        LengthUnit::In,
        LengthUnit::Ft,
        LengthUnit::Yd,
        LengthUnit::Mi,
    ];

    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            LengthUnit::M => value,
            LengthUnit::Cm => value / 100.0,
            LengthUnit::Mm => value / 1000.0,
            LengthUnit::Km => value * 1000.0,
            LengthUnit::In => value * 0.0254,
            LengthUnit::Ft => value * 0.3048,
            LengthUnit::Yd => value * 0.9144,
            LengthUnit::Mi => value * 1609.34,
        }
    }

    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            LengthUnit::M => meters,
            LengthUnit::Cm => meters * 100.0,
            LengthUnit::Mm => meters * 1000.0,
            LengthUnit::Km => meters / 1000.0,
            LengthUnit::In => meters / 0.0254,
            LengthUnit::Ft => meters / 0.3048,
            LengthUnit::Yd => meters / 0.9144,
            LengthUnit::Mi => meters / 1609.34,
        }
    }
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
    ];

    // Months and years use fixed 30-day / 365-day approximations. That is
    // a deliberate low-precision choice inherited from the calculators'
    // wire contract, not calendar arithmetic.
    pub fn to_seconds(self, value: f64) -> f64 {
        match self {
            TimeUnit::Seconds => value,
            TimeUnit::Minutes => value * 60.0,
            TimeUnit::Hours => value * 3600.0,
            TimeUnit::Days => value * 86_400.0,
            TimeUnit::Weeks => value * 604_800.0,
            TimeUnit::Months => value * 2_592_000.0,
            TimeUnit::Years => value * 31_536_000.0,
        }
    }

    pub fn from_seconds(self, seconds: f64) -> f64 {
        match self {
            TimeUnit::Seconds => seconds,
            TimeUnit::Minutes => seconds / 60.0,
            TimeUnit::Hours => seconds / 3600.0,
            TimeUnit::Days => seconds / 86_400.0,
            TimeUnit::Weeks => seconds / 604_800.0,
            TimeUnit::Months => seconds / 2_592_000.0,
            TimeUnit::Years => seconds / 31_536_000.0,
        }
    }
}

pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    to.from_kilograms(from.to_kilograms(value))
}

pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    to.from_meters(from.to_meters(value))
}

pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    to.from_seconds(from.to_seconds(value))
}

/// Express a weight in every supported unit at once
pub fn weight_conversions(weight: f64, unit: WeightUnit) -> WeightConversions {
    let kilograms = unit.to_kilograms(weight);
    WeightConversions {
        kg: kilograms,
        g: WeightUnit::G.from_kilograms(kilograms),
        lb: WeightUnit::Lb.from_kilograms(kilograms),
        oz: WeightUnit::Oz.from_kilograms(kilograms),
        st: WeightUnit::St.from_kilograms(kilograms),
    }
}

pub fn length_conversions(length: f64, from: LengthUnit, to: LengthUnit) -> LengthCalcResponse {
    let meters = from.to_meters(length);
    LengthCalcResponse {
        result: to.from_meters(meters),
        conversions: LengthConversions {
            m: meters,
            cm: LengthUnit::Cm.from_meters(meters),
            mm: LengthUnit::Mm.from_meters(meters),
            km: LengthUnit::Km.from_meters(meters),
            inches: LengthUnit::In.from_meters(meters),
            ft: LengthUnit::Ft.from_meters(meters),
            yd: LengthUnit::Yd.from_meters(meters),
            mi: LengthUnit::Mi.from_meters(meters),
        },
    }
}

pub fn time_conversions(time: f64, from: TimeUnit, to: TimeUnit) -> TimeCalcResponse {
    let seconds = from.to_seconds(time);
    TimeCalcResponse {
        result: to.from_seconds(seconds),
        conversions: TimeConversions {
            seconds,
            minutes: TimeUnit::Minutes.from_seconds(seconds),
            hours: TimeUnit::Hours.from_seconds(seconds),
            days: TimeUnit::Days.from_seconds(seconds),
            weeks: TimeUnit::Weeks.from_seconds(seconds),
            months: TimeUnit::Months.from_seconds(seconds),
            years: TimeUnit::Years.from_seconds(seconds),
        },
    }
}
