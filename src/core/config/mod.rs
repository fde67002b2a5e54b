pub mod cli_args;
pub mod gateway_config;
