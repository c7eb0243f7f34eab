//! Database repository for tee-time listing queries.
//!
//! Joins scheduled tee times with their course for the public listing
//! endpoint.

use crate::database::models::TeeTimeSlot;
use chrono::NaiveDate;
use sqlx::SqlitePool;

const LIST_TEE_TIMES: &str = r#"
    SELECT
        tt.id,
        tt.tee_time,
        tt.hole_count,
        tt.spots_left,
        tt.price_walk,
        tt.price_with_cart,
        c.course_name,
        c.course_state
    FROM tee_times tt
    JOIN courses c ON tt.course_id = c.id
"#;

/// Repository for tee-time database operations.
pub struct TeeTimeRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> TeeTimeRepository<'a> {
    /// Creates a new TeeTimeRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists tee times joined with course details, ordered by tee-off time.
    ///
    /// # Arguments
    /// * `date` - Optional calendar date; when present only slots teeing off
    ///   on that date are returned
    pub async fn list_tee_times(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<TeeTimeSlot>, sqlx::Error> {
        let slots = match date {
            Some(date) => {
                let query = format!(
                    "{} WHERE DATE(tt.tee_time) = ? ORDER BY tt.tee_time ASC",
                    LIST_TEE_TIMES
                );
                sqlx::query_as::<_, TeeTimeSlot>(&query)
                    .bind(date.format("%Y-%m-%d").to_string())
                    .fetch_all(self.pool)
                    .await?
            }
            None => {
                let query = format!("{} ORDER BY tt.tee_time ASC", LIST_TEE_TIMES);
                sqlx::query_as::<_, TeeTimeSlot>(&query)
                    .fetch_all(self.pool)
                    .await?
            }
        };

        Ok(slots)
    }
}
