use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::{self, Role};
use crate::core::catalog::Catalog;
use crate::core::chatbot::ChatbotLogic;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Ask {
        question,
        requester,
    } = &cli.command
    {
        // questions land in the chatbot log like any other workflow write
        auth::require(cfg, Role::Portal, cli.password.as_deref())?;

        // the assistant still answers FAQ questions without a catalog
        let catalog = match Catalog::load(&cfg.catalog_path(), &cfg.code_column, &cfg.name_column) {
            Ok(c) => Some(c),
            Err(e @ (AppError::CatalogNotFound(_) | AppError::MissingColumn(_))) => {
                warning(format!("{}; answering without product data.", e));
                None
            }
            Err(e) => return Err(e),
        };

        let record = ChatbotLogic::ask(&cfg.chatbot_path(), catalog.as_ref(), requester, question)?;

        if record.answered {
            println!("🤖 {}", record.answer);
        } else {
            println!("🤖 답변을 찾지 못했습니다. 질문이 담당자에게 전달되었습니다.");
        }
        info(format!("Question logged to {}", cfg.chatbot_path().display()));
        audit(cfg, "ask", &record.requester, &record.question);
    }

    Ok(())
}
