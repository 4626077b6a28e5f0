use gantry_bridge::McpClient;

/// Print the tool definitions the server advertises.
pub async fn list(mcp_url: &str) -> anyhow::Result<()> {
    let client = McpClient::new(mcp_url)?;
    let tools = client.list_tools().await?;
    println!("{}", serde_json::to_string_pretty(&tools)?);
    Ok(())
}

/// Invoke one tool directly and print its text output (diagnostic).
pub async fn call(mcp_url: &str, tool: &str, arguments: &str) -> anyhow::Result<()> {
    let arguments: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| anyhow::anyhow!("--arguments must be a JSON object: {e}"))?;
    if !arguments.is_object() {
        anyhow::bail!("--arguments must be a JSON object");
    }

    let client = McpClient::new(mcp_url)?;
    let output = client.call_tool(tool, &arguments).await;
    println!("{output}");
    Ok(())
}
