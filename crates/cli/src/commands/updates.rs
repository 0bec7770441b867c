use anyhow::Result;
use unionboard_client::{LocalMarker, SyncCheck, VersionClient, VersionTracker};
use unionboard_core::ClientConfig;

fn tracker() -> Result<VersionTracker> {
    let config = ClientConfig::from_env()?;
    let client = VersionClient::new(&config.version_url, config.fetch_timeout)?;
    let marker = LocalMarker::new(config.marker_path, config.marker_field);
    Ok(VersionTracker::new(client, marker))
}

pub(crate) async fn run_check() -> Result<()> {
    let check = tracker()?.check().await;
    match check {
        SyncCheck::Checked { status, .. } => println!("{}", status.as_str()),
        SyncCheck::Unavailable { ref reason } => {
            println!("{} (could not check: {reason})", check.status().as_str());
        },
    }
    Ok(())
}

pub(crate) async fn run_history() -> Result<()> {
    let tracker = tracker()?;
    let descriptor = match tracker.check().await {
        SyncCheck::Checked { descriptor, .. } => descriptor,
        SyncCheck::Unavailable { reason } => {
            anyhow::bail!("could not fetch version history: {reason}")
        },
    };

    println!("latest: {}", descriptor.latest_version);
    for entry in &descriptor.versions {
        println!();
        println!("{}  {}", entry.version, entry.title);
        for item in &entry.items {
            println!("  - {item}");
        }
        if let Some(ref note) = entry.note {
            println!("  {note}");
        }
    }

    tracker.acknowledge(&descriptor).await?;
    Ok(())
}
