/// 组装发给上游模型的指令；language 原样透传，不做本地化
pub fn build_prompt(language: &str, query: &str) -> String {
    format!(
        "You are a friendly, caring person helping women with their concerns.\n\
         Language: {language}\n\
         Query: {query}\n\
         \n\
         Provide:\n\
         1. A brief, caring response (2-3 sentences) as if talking to a friend\n\
         2. Three short safety tips if relevant (if not, return empty list)\n\
         \n\
         Format the response as: [response] | [tip1] | [tip2] | [tip3]"
    )
}
