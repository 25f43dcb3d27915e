use rdapi::logging::{init_logging, LogConfig};
use rdapi::models::downloads::{Download, ListQuery};
use rdapi::models::torrents::{ActiveCount, TorrentListQuery};
use rdapi::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = init_logging(LogConfig::default())?;

    // Token comes from RD_APITOKEN or a .env file
    let client = Client::from_env()?;

    println!("Fetching user info...");
    let user = client.user().get().await?;
    println!("User: {} ({:?})", user.username, user.account_type);
    println!("Premium seconds left: {}", user.premium);

    println!("\nServer time: {}", client.system().time().await?.text());

    println!("\nFetching traffic...");
    let traffic = client.traffic().get().await?;
    for (host, info) in &traffic {
        println!("  {}: {:?} left ({})", host, info.left, info.kind);
    }

    println!("\nActive torrents...");
    let count: ActiveCount = client.torrents().active_count().await?.json()?;
    println!("  {} / {}", count.nb, count.limit);

    let response = client.torrents().get(&TorrentListQuery::active()).await?;
    if let Some(err) = response.error() {
        println!("Failed to list torrents: {:?}", err);
    } else {
        println!("{}", response.text());
    }

    println!("\nLast downloads...");
    let query = ListQuery {
        limit: Some(10),
        ..Default::default()
    };
    let downloads: Vec<Download> = client.downloads().get(&query).await?.decode()?;
    for download in &downloads {
        println!("  {} - {} bytes", download.filename, download.filesize);
    }

    println!("\nDone!");

    Ok(())
}
