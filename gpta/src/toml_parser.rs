use toml::Table;
use toml::Value;
use crate::options::Options;
use crate::error::AppError;

fn get_str_val(val: &Value, err: &'static str) -> Result<String, AppError> {
    val.as_str()
        .map(str::to_owned)
        .ok_or(AppError::ConfigParseError(err))
}

fn get_bool_val(val: &Value, err: &'static str) -> Result<bool, AppError> {
    val.as_bool().ok_or(AppError::ConfigParseError(err))
}

/// Fill options from the settings file content.
pub fn parse_toml_config(content: &str, options: &mut Options) -> Result<(), AppError> {

    let settings: Table = toml::from_str(content)?;

    if let Some(val) = settings.get("api_key") {
        options.api_key.replace(get_str_val(val, "api_key must be a string value")?);
    }

    if let Some(val) = settings.get("model") {
        options.model.replace(get_str_val(val, "model must be a string value")?);
    }

    if let Some(val) = settings.get("shell") {
        options.shell.replace(get_str_val(val, "shell must be a string value")?);
    }

    if let Some(val) = settings.get("api_url") {
        options.api_url.replace(get_str_val(val, "api_url must be a string value")?);
    }

    if let Some(val) = settings.get("config") {
        options.instructions.replace(get_str_val(val, "config must be a string value")?);
    }

    if let Some(val) = settings.get("interactive") {
        options.interactive.replace(get_bool_val(val, "interactive must be a boolean value")?);
    }

    if let Some(val) = settings.get("verbose") {
        options.verbose.replace(get_bool_val(val, "verbose must be a boolean value")?);
    }

    Ok(())
}
