use hitomi::platform::hitomi::{Client, errors::Error};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://hitomi.la/galleries/867789.html".to_owned());

    let client = Client::new();

    let Some(page) = client.gallery_from_url(&url).await? else {
        println!("no gallery exists at `{url}`");
        return Ok(());
    };

    let metadata = page.metadata()?;

    println!("gallery_id: {}", metadata.gallery_id());
    println!("title: {}", metadata.title());
    println!("artist: {}", metadata.artist());
    println!("group: {}", metadata.group());
    println!("type: {}", metadata.kind());
    println!("language: {:?}", metadata.language());
    println!("lang: {:?}", metadata.lang());
    println!("date: {}", metadata.date());
    println!("published: {:?}", metadata.published());
    println!("series: {}", metadata.series());
    println!("characters: {}", metadata.characters());
    println!("tags: {}", metadata.tags());

    for (number, image) in page.images().enumerate() {
        println!("{:>4}: {}", number + 1, image.url());
    }

    Ok(())
}
