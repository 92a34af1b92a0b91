use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExercisesQuery {
    muscle_group: String,
}

#[derive(Serialize)]
struct ExercisesResponse {
    exercises: Vec<String>,
}

pub async fn list_exercises(
    State(state): State<AppState>,
    Query(query): Query<ExercisesQuery>,
) -> Response {
    let exercises = state.catalog().exercises(&query.muscle_group);
    Json(ExercisesResponse { exercises }).into_response()
}

#[derive(Debug, Deserialize)]
pub struct ExerciseDetailsQuery {
    muscle_group: String,
    exercise_name: String,
}

#[derive(Serialize)]
struct ExerciseDetailsResponse {
    exercise: String,
    muscle_group: String,
    sets: String,
    reps: String,
    rest: String,
    form_cues: Vec<String>,
    common_mistakes: Vec<String>,
}

pub async fn exercise_details(
    State(state): State<AppState>,
    Query(query): Query<ExerciseDetailsQuery>,
) -> Response {
    let profile = state
        .catalog()
        .profile(&query.muscle_group, &query.exercise_name)
        .cloned()
        .unwrap_or_default();

    Json(ExerciseDetailsResponse {
        exercise: query.exercise_name,
        muscle_group: query.muscle_group,
        sets: profile.sets,
        reps: profile.reps,
        rest: profile.rest,
        form_cues: profile.form_cues,
        common_mistakes: profile.common_mistakes,
    })
    .into_response()
}
