//! Print a restmail mailbox and clear it.
//!
//! Usage: `cargo run --example demo -- <account>`

use restmail_client::Client;

#[tokio::main]
async fn main() -> Result<(), restmail_client::Error> {
    let account = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "restmail-client-demo".to_string());

    let client = Client::new()?;

    let messages = client.get_messages(&account).await?;
    println!("{} message(s) for {account}@restmail.net", messages.len());
    for (i, msg) in messages.iter().enumerate() {
        println!("--- message {i}");
        println!("Subject: {}", msg.subject);
        if let Some(from) = msg.headers.get("from") {
            println!("From: {from}");
        }
        print!("{}", msg.text);
    }

    client.delete_account(&account).await?;
    println!("Mailbox cleared.");
    Ok(())
}
