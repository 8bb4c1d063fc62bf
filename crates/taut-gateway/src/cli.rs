use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use taut_engine::config::{DEFAULT_MIN_CODE_LENGTH, DEFAULT_RETRY_BUDGET};

pub const LISTEN_ADDR_ENV: &str = "TAUT_GATEWAY_LISTEN_ADDR";
pub const DB_PATH_ENV: &str = "TAUT_DB_PATH";
pub const PUBLIC_BASE_URL_ENV: &str = "TAUT_PUBLIC_BASE_URL";
pub const MIN_CODE_LENGTH_ENV: &str = "TAUT_MIN_CODE_LENGTH";
pub const RETRY_BUDGET_ENV: &str = "TAUT_RETRY_BUDGET";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "taut-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Path of the database file; created on first start.
    #[arg(long, env = DB_PATH_ENV)]
    pub db_path: PathBuf,

    /// Base used when rendering short URLs back to clients.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    /// Length of the first candidate codes drawn for a new URL.
    #[arg(long, env = MIN_CODE_LENGTH_ENV, default_value_t = DEFAULT_MIN_CODE_LENGTH)]
    pub min_code_length: usize,

    /// Failed insert attempts at one length before codes grow longer.
    #[arg(long, env = RETRY_BUDGET_ENV, default_value_t = DEFAULT_RETRY_BUDGET)]
    pub retry_budget: u32,
}
