pub mod context;
pub mod edit;
pub mod export_cmd;
pub mod init;
pub mod preset;
pub mod show;

pub use context::{CommandContext, exit_code, report_error, session_for, write_error};
pub use edit::{
    apply_updates, parse_condition, run_condition, run_disposition, run_item_tier, run_select,
    run_style, run_tier, run_toggle,
};
pub use export_cmd::{compile_for_export, export_sinks, run_export};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use preset::{reset_sections, run_reset, run_save_preset};
pub use show::{format_sections, run_sections, run_show};
