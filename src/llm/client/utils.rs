use crate::config::LLMConfig;

/// 调用场景对应的模型档位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// 常规推理：补充建议、辅导问答
    Efficient,
    /// 复杂推理：完整学习路径生成
    Powerful,
}

/// 根据调用场景选择模型，未配置高质量模型时退回高能效模型
pub fn evaluate_befitting_model(llm_config: &LLMConfig, tier: ModelTier) -> String {
    match tier {
        ModelTier::Powerful if !llm_config.model_powerful.trim().is_empty() => {
            llm_config.model_powerful.clone()
        }
        _ => llm_config.model_efficient.clone(),
    }
}

/// 去掉模型输出首尾的Markdown代码围栏
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        // 围栏后可能跟着语言标记，例如 ```json
        body = match rest.find('\n') {
            Some(pos) if rest[..pos].trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
                &rest[pos + 1..]
            }
            _ => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
        };
    }
    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }
    body.trim()
}
