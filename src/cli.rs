use std::{
    fmt::{self, Display},
    path::PathBuf,
    str::FromStr,
};

use clap::Parser;

use crate::template::ReportTemplate;

/// The profile used when none is given.
pub const DEFAULT_PROFILE: Profile = Profile::Analysis;

/// Game research analysis assistant: five fixed output sections.
pub const ANALYSIS_SYSTEM_PROMPT: &str = "
你是一名【游戏研究与 AI 应用分析助手】，服务对象是游戏研发与运营团队。

你的任务是：对用户提供的【游戏机制描述 / 玩法设计 / 剧情文本】进行分析，
并输出可用于【研究讨论、设计决策与优化参考】的结构化内容。

请严格按照以下结构输出：

【一、核心玩法与机制理解】
- 概括该设计的核心循环与关键机制
- 指出玩家主要行为路径

【二、玩家体验分析】
- 新手理解成本
- 中后期可玩性与重复体验
- 可能出现的爽点或挫败点

【三、留存与商业化潜力（定性）】
- 对新手留存的潜在影响
- 对长期留存的潜在影响
- 是否存在自然的商业化切入点（不涉及数值）

【四、风险点与设计隐患】
- 可能导致玩家流失的问题
- 实现或维护成本风险

【五、改进建议（可执行）】
- 提供 1～3 条具体、可落地的优化建议
- 每条建议需说明改进目标

输出要求：
- 使用专业、简洁的游戏研发语言
- 使用要点列出，避免长段落
- 不虚构数据，不做最终结论判断
- 本分析仅作为研究与设计参考
";

/// General purpose assistant.
pub const CHAT_SYSTEM_PROMPT: &str =
    "你是一名专业、可靠的 AI 助手。请使用简体中文，准确、简洁地回答用户的问题；不确定的内容请明确说明，不要虚构事实。";

/// Built-in prompt and report pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Analysis,
    Chat,
}

impl Profile {
    pub fn all_profiles() -> Vec<String> {
        [Profile::Analysis, Profile::Chat]
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Profile::Analysis => ANALYSIS_SYSTEM_PROMPT,
            Profile::Chat => CHAT_SYSTEM_PROMPT,
        }
    }

    pub fn template(&self) -> ReportTemplate {
        match self {
            Profile::Analysis => ReportTemplate::analysis(),
            Profile::Chat => ReportTemplate::chat(),
        }
    }

    pub fn console(&self) -> Console {
        match self {
            Profile::Analysis => Console {
                banner: "🎮 游戏研究 AI 分析辅助工具",
                input_prompt: "请输入游戏机制 / 玩法 / 剧情描述：",
                waiting: "⏳ 正在进行 AI 分析，请稍候...",
                result_header: "===== AI 分析结果 =====",
                saved: "✅ 分析结果已保存为文件：",
            },
            Profile::Chat => Console {
                banner: "💬 大模型问答工具",
                input_prompt: "请输入你的问题：",
                waiting: "⏳ 正在请求模型，请稍候...",
                result_header: "===== 模型回答 =====",
                saved: "✅ 对话已保存为文件：",
            },
        }
    }
}

/// Operator-facing lines printed by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Console {
    pub banner: &'static str,
    pub input_prompt: &'static str,
    pub waiting: &'static str,
    pub result_header: &'static str,
    pub saved: &'static str,
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "analysis" => Ok(Profile::Analysis),
            "a" => Ok(Profile::Analysis),
            "chat" => Ok(Profile::Chat),
            "c" => Ok(Profile::Chat),
            _ => Err(format!(
                "Invalid profile: {}. Choose from: {}.",
                s,
                Profile::all_profiles().join(", ")
            )),
        }
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Analysis => write!(f, "analysis"),
            Profile::Chat => write!(f, "chat"),
        }
    }
}

/// CLI for `moonscribe`
///
/// Reads one line from stdin, asks the model, prints the answer and saves
/// the exchange as Markdown. Requires `MOONSHOT_API_KEY`.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Prompt and report layout to use (analysis, chat).
    #[arg(short, long, default_value_t = DEFAULT_PROFILE)]
    pub profile: Profile,
    /// Model identifier, overrides `MOONSHOT_MODEL`.
    #[arg(short, long)]
    pub model: Option<String>,
    /// Directory the Markdown record is written to.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
    /// Read the system prompt from this file instead of the profile's.
    #[arg(long)]
    pub system_prompt_file: Option<PathBuf>,
    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,
}
