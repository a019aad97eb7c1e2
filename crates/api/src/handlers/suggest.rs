//! Milestone suggestion endpoint.
//!
//! Accepts a project type and description but currently returns a fixed
//! five-phase plan regardless of input — the generation side of this
//! endpoint was never built out.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// Request payload; accepted but not yet used by the plan below.
#[derive(Debug, Deserialize)]
pub struct SuggestMilestonesRequest {
    #[allow(dead_code)]
    pub project_type: Option<String>,
    #[allow(dead_code)]
    pub description: Option<String>,
}

/// One suggested milestone: a title plus day offsets relative to an
/// arbitrary project start.
#[derive(Debug, Serialize)]
pub struct SuggestedMilestone {
    pub title: &'static str,
    pub offset_start: i64,
    pub duration: i64,
}

#[derive(Debug, Serialize)]
pub struct SuggestMilestonesResponse {
    pub milestones: Vec<SuggestedMilestone>,
}

/// POST /api/v1/milestones/suggest
pub async fn suggest(
    Json(_input): Json<SuggestMilestonesRequest>,
) -> AppResult<Json<SuggestMilestonesResponse>> {
    let milestones = vec![
        SuggestedMilestone {
            title: "Site Survey & Clearing",
            offset_start: 0,
            duration: 5,
        },
        SuggestedMilestone {
            title: "Foundation Pour",
            offset_start: 7,
            duration: 3,
        },
        SuggestedMilestone {
            title: "Framing & Structural",
            offset_start: 12,
            duration: 10,
        },
        SuggestedMilestone {
            title: "Electrical & Plumbing Rough-in",
            offset_start: 25,
            duration: 7,
        },
        SuggestedMilestone {
            title: "Final Inspection",
            offset_start: 40,
            duration: 1,
        },
    ];

    Ok(Json(SuggestMilestonesResponse { milestones }))
}
