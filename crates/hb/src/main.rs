use std::sync::Arc;

use hb_azure::{AzureOptions, AzureTranslator};
use hb_core::{config::Config, responder::CannedResponder};

#[tokio::main]
async fn main() -> Result<(), hb_core::Error> {
    hb_core::logging::init("hb")?;

    let cfg = Arc::new(Config::load()?);

    let translator = Arc::new(AzureTranslator::new(AzureOptions::from(cfg.as_ref()))?);
    let responder = Arc::new(CannedResponder::new());

    hb_telegram::router::run_polling(cfg, responder, translator)
        .await
        .map_err(|e| hb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
