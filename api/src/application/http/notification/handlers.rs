pub mod get_notifications;
