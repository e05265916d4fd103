use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use tracing::info;

use hb_core::{
    bot::Bot as ChatBot,
    config::Config,
    dispatch::Dispatcher as ReplyDispatcher,
    domain::UserId,
    messaging::port::ChatGateway,
    ports::{Responder, Translator},
};

use crate::handlers;
use crate::TelegramGateway;

#[derive(Clone)]
pub struct AppState {
    pub bot: ChatBot,
    /// The bot's own account, for self-message filtering.
    pub me: UserId,
}

/// Connect to Telegram, announce readiness and process updates until shutdown.
pub async fn run_polling(
    cfg: Arc<Config>,
    responder: Arc<dyn Responder>,
    translator: Arc<dyn Translator>,
) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());
    let me = bot.get_me().await?;

    let gateway: Arc<dyn ChatGateway> = Arc::new(TelegramGateway::new(bot.clone()));
    let chat_bot = ChatBot::new(ReplyDispatcher::new(gateway, responder, translator));
    chat_bot.on_ready(&format!("@{}", me.username()));

    let state = Arc::new(AppState {
        bot: chat_bot,
        me: UserId(me.id.0 as i64),
    });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("telegram dispatcher stopped");
    Ok(())
}
