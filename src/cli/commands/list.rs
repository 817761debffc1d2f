use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::length::format_length;
use crate::core::record_list::RecordListController;
use crate::db::{RecordStore, SqliteStore};
use crate::errors::{AppError, AppResult};
use crate::models::{GroupFilter, Record};
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};
use crate::utils::time::display_local;
use ansi_term::Colour::{Black, Yellow};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Serialize)]
struct ListedRecord<'a> {
    #[serde(flatten)]
    record: &'a Record,
    recent: bool,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { group, json } = cmd {
        let filter: GroupFilter = group.parse()?;

        let store = SqliteStore::open(&cfg.database)?;
        let mut list = RecordListController::new(filter);
        let recent: HashSet<i64> = list
            .refresh(store.list()?, Utc::now())
            .into_iter()
            .map(|(id, _)| id)
            .collect();

        if *json {
            let out: Vec<ListedRecord> = list
                .visible()
                .iter()
                .map(|r| ListedRecord {
                    record: r,
                    recent: recent.contains(&r.id),
                })
                .collect();
            let text =
                serde_json::to_string_pretty(&out).map_err(|e| AppError::Other(e.to_string()))?;
            println!("{text}");
            return Ok(());
        }

        print_table(list.visible(), &recent, filter);
    }
    Ok(())
}

fn print_table(records: &[Record], recent: &HashSet<i64>, filter: GroupFilter) {
    header(format!("Cuts (group: {filter})"));

    if records.is_empty() {
        info("No records.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("Boy (m)"),
        Column::new("Tampon"),
        Column::new("Tarih/Saat"),
        Column::new(""),
    ]);

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            format_length(r.length),
            r.buffer_type.clone(),
            display_local(r.created_at),
            if recent.contains(&r.id) { "*".into() } else { String::new() },
        ]);
    }

    println!("{}", table.header_line());
    let highlight = Black.on(Yellow);
    for (r, line) in records.iter().zip(table.row_lines()) {
        if recent.contains(&r.id) {
            println!("{}", highlight.paint(line));
        } else {
            println!("{line}");
        }
    }

    println!();
    info(format!(
        "{} records, {} from the last 24 hours (*)",
        records.len(),
        recent.len()
    ));
}
