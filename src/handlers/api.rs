use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::error::AppError;
use crate::models::{CreateTodo, Todo, UpdateTodo};
use crate::repo::{create_todo, delete_todo, list_todos, update_todo};
use crate::AppState;

pub async fn list_all_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let todos = list_todos(&state.store);
    info!(count = todos.len(), "Listed todos");
    Json(todos)
}

pub async fn create_new_todo(
    State(state): State<AppState>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    // A missing or unparseable body carries no name.
    let req = match body {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_) | JsonRejection::JsonSyntaxError(_)) => {
            CreateTodo::default()
        }
        Err(rejection) => return Err(rejection.into()),
    };

    let name = req.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::BadRequest("Todo name is required"));
    }

    let todo = create_todo(&state.store, name);
    info!(id = %todo.id, name = %todo.name, "Created todo");
    Ok(Json(todo))
}

pub async fn update_existing_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => UpdateTodo::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    match update_todo(&state.store, &id, &req) {
        Some(todo) => {
            info!(id = %todo.id, is_complete = todo.is_complete, "Updated todo");
            Ok(Json(todo))
        }
        None => Err(AppError::NotFound),
    }
}

pub async fn delete_existing_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    match delete_todo(&state.store, &id) {
        Some(todo) => {
            info!(id = %todo.id, "Deleted todo");
            Ok(Json(todo))
        }
        None => Err(AppError::NotFound),
    }
}
