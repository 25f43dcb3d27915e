use rdapi::logging::{init_logging, LogConfig};
use rdapi::models::torrents::{AddedTorrent, TorrentInfo};
use rdapi::{Client, FileSelection};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = init_logging(LogConfig::default())?;

    let hash = std::env::args()
        .nth(1)
        .ok_or("usage: add_magnet <info-hash>")?;

    let client = Client::from_env()?;
    let torrents = client.torrents();

    println!("Adding magnet for {}...", hash);
    let added: AddedTorrent = torrents.add_magnet(&hash, None).await?.decode()?;
    println!("Added torrent {}", added.id);

    let info: TorrentInfo = torrents.info(&added.id).await?.decode()?;
    println!("{} ({:?}), {} files", info.filename, info.status, info.files.len());

    let response = torrents.select_files(&added.id, &FileSelection::All).await?;
    match response.error() {
        None => println!("Selected all files"),
        Some(err) => println!("Failed to select files: {:?}", err),
    }

    Ok(())
}
