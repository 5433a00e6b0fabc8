use carmine::Command;
use carmine::Connection;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let conn = Connection::new();
    conn.connect().await?;

    let reply = conn.exec(Command::new("PING")).await?;
    println!("PING -> {reply}");

    let reply = conn.exec_line("set greeting hello").await?;
    println!("SET -> {reply}");

    let reply = conn.exec_line("get greeting").await?;
    println!("GET -> {:?}", reply.as_str());

    conn.close().await;
    Ok(())
}
