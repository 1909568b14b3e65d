//! Resolves raw order status values to labels and styles.
use enumdict_core::TypeStyle;
use enumdict_dictionary::{Dict, DictConfig, DictRegistry};
use enumdict_example::{INCOMING, order_status};
use tracing::{info, warn};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let mut registry = DictRegistry::new();
    registry.register(order_status())?;
    registry.register(Dict::from_json_with_config(
        r#"{"type": "PayChannel", "items": [
            {"value": "alipay", "label": "Alipay", "fee": 0.006},
            {"value": "card", "label": "Card", "fee": 0.015}
        ]}"#,
        DictConfig::new()
            .with_type_style(TypeStyle::SnakeCase)
            .with_default_label("unknown"),
    )?);

    for dict in registry.dicts() {
        info!("{}", dict);
    }

    let orders = registry
        .get("order_status")
        .ok_or_else(|| anyhow::anyhow!("order_status not registered"))?;
    for raw in INCOMING {
        if !orders.contains(raw) {
            warn!("unknown order status {}", raw);
        }
        info!(
            "order status {} -> {} ({})",
            raw,
            orders.label(raw),
            orders.attr_type(raw)
        );
    }

    info!("pay channel bitcoin -> {}", registry.label("pay_channel", "bitcoin"));
    Ok(())
}
