use crate::cli::parser::{Cli, Commands, RequestAction};
use crate::config::Config;
use crate::core::auth::{self, Role};
use crate::core::requests::{NewRequest, RequestLogic};
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::record::split_paths;
use crate::models::request::RequestStatus;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Request { action } = &cli.command else {
        return Ok(());
    };

    match action {
        RequestAction::Add {
            requester,
            team,
            due_date,
            category,
            priority,
            product,
            details,
            attachments,
        } => {
            auth::require(cfg, Role::Portal, cli.password.as_deref())?;

            let record = RequestLogic::submit(
                &cfg.requests_path(),
                &cfg.uploads_path(),
                NewRequest {
                    requester: requester.clone(),
                    team: team.clone(),
                    due_date: due_date.clone(),
                    category: category.clone(),
                    priority: *priority,
                    product: product.clone(),
                    details: details.clone(),
                    attachments: attachments.clone(),
                },
            )?;

            let n = split_paths(&record.attachments).len();
            success(format!(
                "Request submitted by {} (due {}, {} attachment(s)), status {}",
                record.requester, record.due_date, n, record.status
            ));
            audit(cfg, "request_add", &record.requester, &record.details);
        }

        RequestAction::List { status } => {
            auth::require(cfg, Role::Portal, cli.password.as_deref())?;

            let filter = status.as_deref().map(RequestStatus::parse).transpose()?;
            let rows = RequestLogic::list(&cfg.requests_path(), filter)?;

            if rows.is_empty() {
                warning("No document requests found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("#", 4),
                Column::new("timestamp", 19),
                Column::new("requester", 12),
                Column::new("team", 12),
                Column::new("due", 10),
                Column::new("category", 12),
                Column::new("priority", 8),
                Column::new("product", 16),
                Column::new("status", 8),
                Column::new("details", 40),
                Column::new("memo", 24),
            ]);
            for (idx, r) in &rows {
                table.add_row(vec![
                    idx.to_string(),
                    r.timestamp.clone(),
                    r.requester.clone(),
                    r.team.clone(),
                    r.due_date.clone(),
                    r.category.clone(),
                    r.priority.clone(),
                    r.product.clone(),
                    r.status.clone(),
                    r.details.clone(),
                    r.memo.clone(),
                ]);
            }

            header("📨 문서 요청 목록");
            print!("{}", table.render());
            info(format!("{} request(s)", rows.len()));
        }

        RequestAction::Status {
            index,
            status,
            memo,
        } => {
            auth::require(cfg, Role::Admin, cli.password.as_deref())?;

            let new_status = RequestStatus::parse(status)?;
            let change = RequestLogic::update_status(
                &cfg.requests_path(),
                *index,
                new_status,
                memo.as_deref(),
            )?;

            success(format!(
                "Request #{} ({}): {} → {}",
                index, change.request.requester, change.previous, change.request.status
            ));
            audit(
                cfg,
                "request_status",
                &format!("#{}", index),
                &format!("{} → {}", change.previous, change.request.status),
            );
        }
    }

    Ok(())
}
