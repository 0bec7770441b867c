use anyhow::Result;
use unionboard_client::{IssueApiClient, IssueCache, RefreshOutcome};
use unionboard_core::{ClientConfig, Tab, TabView};

pub(crate) async fn run(tab: Tab, keyword: &str) -> Result<()> {
    let config = ClientConfig::from_env()?;
    let client = IssueApiClient::new(&config.api_url, config.fetch_timeout)?;
    let mut cache = IssueCache::load(config.cache_path).await;

    if let RefreshOutcome::Stale { reason, cached } = cache.refresh(&client).await {
        eprintln!("could not refresh issues ({reason}); showing {cached} cached");
    }

    match cache.view(tab, keyword) {
        TabView::Empty => println!("no issues"),
        TabView::Issues(issues) => println!("{}", serde_json::to_string_pretty(&issues)?),
    }
    Ok(())
}
