//! Enriches a shared dictionary from a background thread while readers run.
use enumdict_dictionary::{EntryPatch, PatchMap, SharedDict};
use enumdict_example::order_status;
use std::thread;
use std::time::Duration;
use tracing::info;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let dict = SharedDict::new(order_status());
    let reader = dict.clone();

    let handle = thread::spawn(move || {
        for _ in 0..5 {
            info!(
                "paid: {} style={} icon={:?}",
                reader.label(1),
                reader.attr_type(1),
                reader.get_field(1, "icon")
            );
            thread::sleep(Duration::from_millis(20));
        }
    });

    thread::sleep(Duration::from_millis(30));
    // Patches usually come from a settings table; label changes are dropped.
    let patches = PatchMap::from_json(
        r#"{
            "1": {"icon": "check", "label": "Settled"},
            "3": {"attrType": "info", "refunded": true},
            "42": {"icon": "ghost"}
        }"#,
    )?;
    dict.patch_field_value(&patches);
    dict.patch_field_value(&PatchMap::new().with(2, EntryPatch::new().clear_attr_type()));

    handle
        .join()
        .map_err(|_| anyhow::anyhow!("reader thread panicked"))?;

    for entry in dict.get_entries() {
        info!("{} -> {} {:?}", entry.value(), entry.label().unwrap_or("-"), entry.fields());
    }
    Ok(())
}
