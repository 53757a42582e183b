use std::env;
use std::error::Error;

use harvest::{
    domain::TimeEntriesFilter, Credentials, HarvestClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let account_id: i64 = env::var("HARVEST_ACCOUNT_ID")
        .expect("HARVEST_ACCOUNT_ID must be set")
        .parse()?;
    let token = env::var("HARVEST_TOKEN").expect("HARVEST_TOKEN must be set");

    let client = HarvestClient::new(Credentials::new(account_id, token));
    let me = client.get_me().await?;
    println!("entries for {}:", me.full_name());

    let filter = TimeEntriesFilter::new().user_id(me.id);
    let page = client.get_time_entries(&filter).await?;

    for entry in &page.time_entries {
        let date = entry
            .spent_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "(no date)".to_string());
        println!("{}  {:>6.2}h  {}", date, entry.hours, entry.notes.as_deref().unwrap_or(""));
    }

    if let Some(next) = page.next_page {
        println!("... more on page {}", next);
    }

    Ok(())
}
