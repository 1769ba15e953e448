use super::handlers::apply_edit::{__path_apply_edit, apply_edit};
use super::handlers::close_edit_session::{__path_close_edit_session, close_edit_session};
use super::handlers::commit_edit::{__path_commit_edit, commit_edit};
use super::handlers::get_edit_session::{__path_get_edit_session, get_edit_session};
use super::handlers::open_edit_session::{__path_open_edit_session, open_edit_session};
use super::handlers::revert_edit::{__path_revert_edit, revert_edit};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    open_edit_session,
    get_edit_session,
    apply_edit,
    revert_edit,
    commit_edit,
    close_edit_session
))]
pub struct EditorApiDoc;

pub fn editor_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/dishes/{{dish_id}}/edit-sessions",
                state.args.server.root_path
            ),
            post(open_edit_session),
        )
        .route(
            &format!(
                "{}/edit-sessions/{{session_id}}",
                state.args.server.root_path
            ),
            get(get_edit_session).delete(close_edit_session),
        )
        .route(
            &format!(
                "{}/edit-sessions/{{session_id}}/edits",
                state.args.server.root_path
            ),
            post(apply_edit),
        )
        .route(
            &format!(
                "{}/edit-sessions/{{session_id}}/revert",
                state.args.server.root_path
            ),
            post(revert_edit),
        )
        .route(
            &format!(
                "{}/edit-sessions/{{session_id}}/commit",
                state.args.server.root_path
            ),
            post(commit_edit),
        )
}
