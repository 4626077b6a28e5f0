use gantry_bridge::{Bridge, ChatClient, McpClient};

/// Run one bridge turn and print the final answer.
pub async fn run(
    mcp_url: &str,
    llm_url: &str,
    model: &str,
    api_key: Option<String>,
    query: &str,
) -> anyhow::Result<()> {
    let chat = ChatClient::new(llm_url, api_key)?;
    let mcp = McpClient::new(mcp_url)?;
    let bridge = Bridge::new(chat, mcp, model);

    tracing::info!(model, "submitting query");
    let answer = bridge.answer(query).await?;
    println!("{answer}");

    Ok(())
}
