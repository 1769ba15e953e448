pub mod apply_edit;
pub mod close_edit_session;
pub mod commit_edit;
pub mod get_edit_session;
pub mod open_edit_session;
pub mod revert_edit;
