use crate::errors::Error;
use crate::storage;
use crate::types::Config;
use soroban_sdk::{Address, Env};

pub fn load_config(env: &Env) -> Result<Config, Error> {
    storage::get_config(env).ok_or(Error::NotInitialized)
}

/// Checks `admin` signed the call and is the configured admin.
pub fn require_admin(env: &Env, admin: &Address) -> Result<Config, Error> {
    admin.require_auth();
    let config = load_config(env)?;
    if config.admin != *admin {
        return Err(Error::Unauthorized);
    }
    Ok(config)
}
