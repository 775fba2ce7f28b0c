use crate::domain::dialogue::templates;
use crate::error::{AppError, AppResult};
use axum::{extract::Path, Json};

/// GET /api/templates - All instruction preset names
pub async fn list_templates() -> Json<Vec<&'static str>> {
    Json(templates::names())
}

/// GET /api/templates/:name - One preset's instruction fields
pub async fn get_template(
    Path(name): Path<String>,
) -> AppResult<Json<&'static templates::InstructionSet>> {
    templates::get(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("no instruction template named '{name}'")))
}
