pub mod app;
pub mod approvals_view;
pub mod dashboard;
pub mod design_studio;
pub mod home;
pub mod local_store;
pub mod messages_view;
pub mod payments_view;
pub mod studio_state;
pub mod toast_stack;
