/// 上游文本解析结果：首段为回复，其余非空段为建议
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    pub response: String,
    pub tips: Vec<String>,
}

/// 按 `|` 切分模型输出。没有分隔符时整段即回复，tips 为空；不限制 tips 数量
pub fn parse_reply(text: &str) -> ParsedReply {
    let mut parts = text.split('|');
    let response = parts.next().unwrap_or_default().trim().to_string();
    let tips = parts
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    ParsedReply { response, tips }
}
