use serde::{Deserialize, Serialize};

/// Raw grid layout as found in a JSON grid file.
///
/// `tables` is the header row (`T<n>(<d>)` labels), `timeslots` the data rows.
#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDto {
    pub tables: Vec<String>,
    pub timeslots: Vec<TimeslotDto>,
}

#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeslotDto {
    pub id: u8,
    pub states: Vec<SlotStateDto>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlotStateDto {
    #[serde(rename = "o")]
    Open,
    #[serde(rename = "x")]
    Occupied,
}
