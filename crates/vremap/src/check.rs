use std::path::Path;

use colored::Colorize;
use vremap_config::{load_settings, Action, ActionBinding};

use crate::error::AppError;
use crate::print_info;

/// One line summary of a binding, e.g. `pause: on, blocks menu [R_A, L_Menu]`.
pub(crate) fn describe(action: Action, binding: &ActionBinding) -> String {
    let state = if binding.enabled() { "on" } else { "off" };
    let block = if binding.block_built_in() {
        ", blocks menu"
    } else {
        ""
    };
    let buttons: Vec<&str> = binding.buttons().iter().map(|b| b.token()).collect();
    format!("{action}: {state}{block} [{}]", buttons.join(", "))
}

pub(crate) fn run(path: &Path) -> Result<(), AppError> {
    let settings = load_settings(path)?;
    print_info!("{} is valid", path.display().to_string().bold());
    print_info!("menu override: {}", settings.menu_action);
    for (action, binding) in settings.bindings.iter() {
        print_info!("{}", describe(action, binding));
    }
    Ok(())
}
