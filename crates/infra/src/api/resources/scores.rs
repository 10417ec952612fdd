//! Score endpoints
//!
//! Scores are kept per competition, level, and problem. The batch routes
//! move a whole level's sheet at once; the single-problem route updates one
//! entry and is where the backend does its strictest validation (attempt
//! counts that contradict the bonus/top flags come back as 422).

use serde::{Deserialize, Serialize};

use crate::api::client::ApiClient;
use crate::api::errors::ApiError;

/// Attempt counts and results for one problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreUpdate {
    pub attempts_total: u32,
    pub got_bonus: bool,
    pub got_top: bool,
    #[serde(default)]
    pub attempts_to_bonus: Option<u32>,
    #[serde(default)]
    pub attempts_to_top: Option<u32>,
}

/// One problem's entry in a batch sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemScore {
    pub problem_no: u32,
    #[serde(flatten)]
    pub score: ScoreUpdate,
}

/// A level's full score sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBatch {
    pub items: Vec<ProblemScore>,
}

/// Score endpoints. All routes need a session.
pub struct ScoresApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ScoresApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the current climber's score sheet for a level.
    ///
    /// # Errors
    /// `AuthenticationRequired` without a usable session.
    pub async fn batch(&self, competition_id: i64, level: u8) -> Result<ScoreBatch, ApiError> {
        self.client
            .get(&format!("/competitions/{competition_id}/level/{level}/scores/batch"), true)
            .await
    }

    /// Replace the score sheet for a level.
    ///
    /// # Errors
    /// `AuthenticationRequired` without a usable session.
    pub async fn save_batch(
        &self,
        competition_id: i64,
        level: u8,
        batch: &ScoreBatch,
    ) -> Result<ScoreBatch, ApiError> {
        self.client
            .put(&format!("/competitions/{competition_id}/level/{level}/scores/batch"), batch, true)
            .await
    }

    /// Update a single problem's score.
    ///
    /// # Errors
    /// `Validation` on a 422 with the backend's first field message.
    pub async fn save_problem(
        &self,
        competition_id: i64,
        level: u8,
        problem_no: u32,
        score: &ScoreUpdate,
    ) -> Result<ProblemScore, ApiError> {
        self.client
            .put(
                &format!(
                    "/competitions/{competition_id}/level/{level}/problems/{problem_no}/score"
                ),
                score,
                true,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates the batch wire format flattens score fields into each item.
    #[test]
    fn test_batch_wire_format() {
        let batch = ScoreBatch {
            items: vec![ProblemScore {
                problem_no: 3,
                score: ScoreUpdate {
                    attempts_total: 4,
                    got_bonus: true,
                    got_top: false,
                    attempts_to_bonus: Some(2),
                    attempts_to_top: None,
                },
            }],
        };

        let value = serde_json::to_value(&batch).unwrap();
        assert_eq!(value["items"][0]["problem_no"], 3);
        assert_eq!(value["items"][0]["attempts_total"], 4);
        assert_eq!(value["items"][0]["got_bonus"], true);
    }
}
