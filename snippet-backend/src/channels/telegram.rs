//! Telegram channel: long-polling dispatcher for chat commands and inline search.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{
    InlineQuery, InlineQueryResult, InlineQueryResultArticle, InputMessageContent,
    InputMessageContentText, Message,
};

use super::commands;
use super::inline::{self, InlineArticle};
use super::util::{self, MAX_MESSAGE_LENGTH};
use crate::notes::NoteStore;

/// Shared handler dependencies, injected into every endpoint by the dispatcher
#[derive(Clone)]
struct HandlerDeps {
    store: Arc<NoteStore>,
    search_limit: usize,
}

pub struct TelegramChannel {
    bot: Bot,
    deps: HandlerDeps,
}

impl TelegramChannel {
    pub fn new(token: &str, store: Arc<NoteStore>, search_limit: usize) -> Self {
        Self {
            bot: Bot::new(token),
            deps: HandlerDeps {
                store,
                search_limit,
            },
        }
    }

    /// Poll for updates until Ctrl+C
    pub async fn run(self) {
        let handler = dptree::entry()
            .branch(Update::filter_message().endpoint(handle_message))
            .branch(Update::filter_inline_query().endpoint(handle_inline_query));

        log::info!("[TELEGRAM] Starting long-polling dispatcher");

        Dispatcher::builder(self.bot, handler)
            .dependencies(dptree::deps![self.deps])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        log::info!("[TELEGRAM] Dispatcher stopped");
    }
}

async fn handle_message(bot: Bot, msg: Message, deps: HandlerDeps) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let command = commands::parse(text);
    log::debug!("[TELEGRAM] chat {}: {:?}", msg.chat.id.0, command);

    let reply = commands::execute(command, &deps.store);
    for chunk in util::split_message(&reply, MAX_MESSAGE_LENGTH) {
        // Telegram rejects empty or whitespace-only texts
        if chunk.trim().is_empty() {
            continue;
        }
        bot.send_message(msg.chat.id, chunk).await?;
    }

    Ok(())
}

async fn handle_inline_query(
    bot: Bot,
    query: InlineQuery,
    deps: HandlerDeps,
) -> ResponseResult<()> {
    let results: Vec<InlineQueryResult> =
        match inline::search_articles(&deps.store, &query.query, deps.search_limit) {
            Ok(articles) => articles.into_iter().map(to_inline_result).collect(),
            Err(e) => {
                log::error!("[TELEGRAM] Inline search failed: {}", e);
                Vec::new()
            }
        };

    bot.answer_inline_query(query.id, results).await?;
    Ok(())
}

fn to_inline_result(article: InlineArticle) -> InlineQueryResult {
    InlineQueryResult::Article(InlineQueryResultArticle::new(
        article.id,
        article.title,
        InputMessageContent::Text(InputMessageContentText::new(article.message_text)),
    ))
}
