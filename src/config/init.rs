// ABOUTME: Config scaffolding for new workspaces.
// ABOUTME: Creates goploy.yml template files.

use std::path::Path;

use crate::error::{Error, Result};
use crate::transport::BaseUrl;

use super::{CONFIG_FILENAME, DEFAULT_URL};

pub fn init_config(dir: &Path, url: Option<&str>, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let url = url.unwrap_or(DEFAULT_URL);
    BaseUrl::parse(url).map_err(|e| Error::InvalidConfig(e.to_string()))?;

    std::fs::write(&config_path, generate_template_yaml(url))?;

    Ok(())
}

fn generate_template_yaml(url: &str) -> String {
    format!(
        r#"url: {url}
namespace_id: 1
api_key:
  env: GOPLOY_API_KEY
timeout: 30s
# Extra servers selectable with --profile
# profiles:
#   staging:
#     url: http://staging.example.com:3000
#     namespace_id: 2
"#
    )
}
