pub mod header;
pub mod new_task_dialog;
pub mod status_bar;
pub mod summary_panel;
pub mod task_list;
pub mod toast;
