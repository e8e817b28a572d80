use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A body-measurement snapshot for one client on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProgressMetrics {
    #[serde(default)]
    pub id: String,
    pub client_id: String,
    pub date: Date,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub body_fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub muscle_mass: Option<f64>,
    pub measurements: Measurements,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub photos: Option<Vec<String>>,
}

/// Circumferences in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Measurements {
    pub chest: f64,
    pub waist: f64,
    pub biceps: f64,
    pub forearms: f64,
    pub thighs: f64,
    pub calves: f64,
    pub neck: f64,
    pub shoulders: f64,
    pub hips: f64,
}

impl Measurements {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("chest", self.chest),
            ("waist", self.waist),
            ("biceps", self.biceps),
            ("forearms", self.forearms),
            ("thighs", self.thighs),
            ("calves", self.calves),
            ("neck", self.neck),
            ("shoulders", self.shoulders),
            ("hips", self.hips),
        ]
        .into_iter()
    }
}
