//! Data structures for the tee-time listing endpoint.

use crate::database::models::TeeTimeSlot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query parameters accepted by the listing endpoint
#[derive(Debug, Deserialize)]
pub struct TeeTimeQuery {
    /// Calendar date (`YYYY-MM-DD`) restricting the listing to one day
    pub date: Option<NaiveDate>,
}

/// One tee-time slot as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeeTimeResponse {
    pub id: String,
    /// Tee-off time rendered on a 12-hour clock, e.g. "9:30 AM"
    pub time: String,
    pub spots_left: i64,
    pub holes: i64,
    pub price_walk: f64,
    pub price_with_cart: f64,
    pub course_name: String,
    pub state: String,
}

impl From<TeeTimeSlot> for TeeTimeResponse {
    fn from(slot: TeeTimeSlot) -> Self {
        TeeTimeResponse {
            id: slot.id,
            time: slot.tee_time.format("%-I:%M %p").to_string(),
            spots_left: slot.spots_left,
            holes: slot.hole_count,
            price_walk: slot.price_walk,
            price_with_cart: slot.price_with_cart,
            course_name: slot.course_name,
            state: slot.course_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn slot() -> TeeTimeSlot {
        TeeTimeSlot {
            id: "t1".to_string(),
            tee_time: Utc.with_ymd_and_hms(2026, 8, 7, 9, 30, 0).unwrap(),
            hole_count: 18,
            spots_left: 3,
            price_walk: 45.0,
            price_with_cart: 62.5,
            course_name: "Pine Hollow".to_string(),
            course_state: "NJ".to_string(),
        }
    }

    #[test]
    fn renders_twelve_hour_clock() {
        let response = TeeTimeResponse::from(slot());
        assert_eq!(response.time, "9:30 AM");
    }

    #[test]
    fn state_comes_from_the_course() {
        let response = TeeTimeResponse::from(slot());
        assert_eq!(response.state, "NJ");
        assert_eq!(response.course_name, "Pine Hollow");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(TeeTimeResponse::from(slot())).unwrap();
        assert_eq!(value["spotsLeft"], 3);
        assert_eq!(value["holes"], 18);
        assert_eq!(value["priceWalk"], 45.0);
        assert_eq!(value["priceWithCart"], 62.5);
        assert_eq!(value["courseName"], "Pine Hollow");
        assert_eq!(value["state"], "NJ");
    }
}
