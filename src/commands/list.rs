//! List posts published in the content API

use anyhow::Result;

use crate::content::Feed;
use crate::helpers::format_optional_date;
use crate::Orbit;

/// List every post the listing query can reach
pub async fn run(orbit: &Orbit) -> Result<()> {
    let client = orbit.client()?;
    let mut feed = Feed::fetch(&client, &orbit.config.api).await?;
    feed.load_all(&client).await?;

    println!("Posts ({}):", feed.posts().len());
    for post in feed.posts() {
        let date = format_optional_date(
            post.first_publication_date.as_ref(),
            "YYYY-MM-DD",
            &orbit.config.language,
        );
        println!("  {} - {} [{}]", date, post.title, post.slug());
    }

    Ok(())
}
