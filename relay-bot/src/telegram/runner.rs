//! Polling runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//! Stops polling on Ctrl+C / SIGTERM through the dispatcher's shutdown token.

use std::future::Future;
use std::io;
use std::sync::Arc;

use teloxide::{
    dispatching::{DefaultKey, ShutdownToken},
    prelude::*,
    update_listeners, RequestError,
};
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;
use crate::core::{RelayError, Result, ToCoreMessage};
use crate::lifecycle::Lifecycle;

/// Dispatcher routing message updates into `handler_chain`; other updates are logged and dropped.
pub fn build_dispatcher(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
) -> Dispatcher<teloxide::Bot, RequestError, DefaultKey> {
    let handler = Update::filter_message().endpoint(dispatch_message);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .default_handler(|update| async move {
            debug!(update_id = ?update.id, "Ignoring non-message update");
        })
        .build()
}

/// Runs long polling until Ctrl+C / SIGTERM. Each message goes through `handler_chain`; a failing
/// message is logged and never stops polling.
///
/// Returns `Err(RelayError::Shutdown)` when stopping the dispatcher fails.
pub async fn run_polling(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    lifecycle: Arc<Lifecycle>,
) -> Result<()> {
    run_polling_until(bot, handler_chain, lifecycle, wait_for_signal).await
}

/// [`run_polling`] with a custom shutdown source: every completion of `next_signal()` counts as
/// one shutdown signal.
#[instrument(skip_all)]
pub async fn run_polling_until<F, Fut>(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    lifecycle: Arc<Lifecycle>,
    next_signal: F,
) -> Result<()>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = io::Result<()>> + Send + 'static,
{
    let mut dispatcher = build_dispatcher(bot.clone(), handler_chain);

    let mut signal_task = tokio::spawn(watch_shutdown_signals(
        lifecycle,
        dispatcher.shutdown_token(),
        next_signal,
    ));

    let listener = update_listeners::polling_default(bot).await;
    info!("Polling started");

    tokio::select! {
        dispatched = dispatcher.try_dispatch_with_listener(listener, Arc::new(log_polling_error)) => {
            signal_task.abort();
            dispatched.map_err(|e| RelayError::Bot(format!("failed to start polling: {}", e)))?;
            info!("Polling stopped");
            Ok(())
        }
        outcome = &mut signal_task => match outcome {
            Ok(result) => result,
            Err(e) => Err(RelayError::Shutdown(format!("signal watcher failed: {}", e))),
        },
    }
}

/// Handles one shutdown signal. Only the first caller (per [`Lifecycle::begin_shutdown`]) asks the
/// dispatcher to stop and gets `Ok(true)`; later calls return `Ok(false)`.
///
/// Fails with `RelayError::Shutdown` when the dispatcher refuses to stop (it is not running).
pub fn request_shutdown(lifecycle: &Lifecycle, token: &ShutdownToken) -> Result<bool> {
    if !lifecycle.begin_shutdown() {
        info!("Shutdown already in progress");
        return Ok(false);
    }

    info!("Shutdown signal received, stopping polling");
    match token.shutdown() {
        Ok(_) => Ok(true),
        Err(e) => {
            error!(error = %e, "Failed to stop polling");
            Err(RelayError::Shutdown(e.to_string()))
        }
    }
}

async fn dispatch_message(msg: teloxide::types::Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();

    match core_msg.text.as_deref() {
        Some(text) => info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            message_id = %core_msg.id,
            message_content = %text,
            "Received message"
        ),
        None => info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Received non-text message"
        ),
    }

    if let Err(e) = chain.handle(&core_msg).await {
        error!(
            error = %e,
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Handler chain failed"
        );
    }
    Ok(())
}

async fn log_polling_error(err: RequestError) {
    error!(error = %err, "Polling error");
}

/// Returns only when a signal source fails or the shutdown request itself fails.
async fn watch_shutdown_signals<F, Fut>(
    lifecycle: Arc<Lifecycle>,
    token: ShutdownToken,
    mut next_signal: F,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<()>>,
{
    loop {
        next_signal().await?;
        request_shutdown(&lifecycle, &token)?;
    }
}

async fn wait_for_signal() -> io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result,
            _ = terminate.recv() => Ok(()),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}
