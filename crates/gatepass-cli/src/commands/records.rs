//! Record inspection commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use gatepass_auth::rbac::RbacEnforcer;
use gatepass_core::error::AppError;
use gatepass_entity::record::Record;
use gatepass_service::RecordService;

use crate::output::{self, OutputFormat};

/// Arguments for records commands
#[derive(Debug, Args)]
pub struct RecordsArgs {
    /// Records subcommand
    #[command(subcommand)]
    pub command: RecordsCommand,
}

/// Records subcommands
#[derive(Debug, Subcommand)]
pub enum RecordsCommand {
    /// List every stored record
    List,
}

/// One line of the record table.
#[derive(Debug, Serialize, Tabled)]
struct RecordLine {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Record ID")]
    record_id: String,
    #[tabled(rename = "Detail")]
    detail: String,
    #[tabled(rename = "Time")]
    time: String,
}

impl From<&Record> for RecordLine {
    fn from(record: &Record) -> Self {
        match record {
            Record::Pass(pass) => Self {
                kind: record.kind(),
                name: pass.name.clone(),
                record_id: pass.current_check_in.clone(),
                detail: format!("pass {} (host {})", pass.pass_identifier, pass.host_username),
                time: pass.created_at.to_rfc3339(),
            },
            Record::CheckIn(check_in) => Self {
                kind: record.kind(),
                name: check_in.name.clone(),
                record_id: check_in.record_id.clone(),
                detail: check_in.purpose.clone(),
                time: check_in.check_in_time.to_rfc3339(),
            },
        }
    }
}

/// Execute records commands
pub async fn execute(
    args: &RecordsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let (pool, stores) = super::connect_stores(&config).await?;
    let service = RecordService::new(stores, Arc::new(RbacEnforcer::new()));

    match &args.command {
        RecordsCommand::List => {
            let records = service.list_records().await?;
            match format {
                OutputFormat::Json => output::print_item(&records, format),
                OutputFormat::Table => {
                    let lines: Vec<RecordLine> = records.iter().map(RecordLine::from).collect();
                    output::print_list(&lines, format);
                }
            }
        }
    }

    pool.close().await;
    Ok(())
}
