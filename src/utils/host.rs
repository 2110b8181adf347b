use anyhow::{anyhow, Result};

/// Name of the current machine. ActivityWatch names its buckets after it.
pub fn local_hostname() -> Result<String> {
    hostname::get()?
        .into_string()
        .map_err(|name| anyhow!("Hostname {name:?} is not valid unicode"))
}
