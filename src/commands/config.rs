//! Config command handler - Manage the configuration file

use crate::cli::{ConfigArgs, ConfigOperation};
use crate::commands::{CommandContext, Report, Status};
use crate::config::WaymarkConfig;
use crate::error::{Result, WaymarkError};

/// Run the config command
pub fn run_config(args: &ConfigArgs, ctx: &CommandContext) -> Result<Report> {
    match &args.operation {
        ConfigOperation::Show => {
            let json_value = serde_json::to_value(&ctx.config).unwrap_or_default();
            Ok(Report::new(
                ctx.render(json_value, ctx.config.display()),
                Status::Done,
            ))
        }
        ConfigOperation::Get { key } => {
            let value = ctx.config.get(key).ok_or_else(|| WaymarkError::ConfigError {
                message: format!("Unknown or unset configuration key: {}", key),
            })?;
            let json_value = serde_json::json!({ "key": key, "value": value });
            Ok(Report::new(
                ctx.render(json_value, format!("{}\n", value)),
                Status::Done,
            ))
        }
        ConfigOperation::Set { key, value } => {
            let mut config = ctx.config.clone();
            config.set(key, value)?;
            config.save_to(&ctx.config_path)?;
            tracing::info!("Set {} = {} in {}", key, value, ctx.config_path.display());
            let json_value = serde_json::json!({ "key": key, "value": value });
            Ok(Report::new(
                ctx.render(json_value, format!("Set {} = {}\n", key, value)),
                Status::Done,
            ))
        }
        ConfigOperation::Reset => {
            let mut config = ctx.config.clone();
            config.reset();
            config.save_to(&ctx.config_path)?;
            let json_value = serde_json::json!({ "reset": true });
            Ok(Report::new(
                ctx.render(json_value, "Configuration reset to defaults\n".to_string()),
                Status::Done,
            ))
        }
        ConfigOperation::Path => {
            let path = ctx.config_path.display().to_string();
            let json_value = serde_json::json!({ "path": path });
            Ok(Report::new(
                ctx.render(json_value, format!("{}\n", path)),
                Status::Done,
            ))
        }
    }
}
