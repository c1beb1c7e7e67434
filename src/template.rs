//! Markdown layout of a saved exchange.

/// How a saved exchange is named and laid out on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTemplate {
    /// Appended to the timestamp to form the file name, e.g. `_chat.md`.
    pub suffix: String,
    /// Optional top-level heading line placed before the sections.
    pub title: Option<String>,
    pub input_heading: String,
    pub output_heading: String,
    /// Optional closing line, written verbatim after the output section.
    pub footer: Option<String>,
}

impl ReportTemplate {
    /// `# 用户输入` / `# 模型回答`
    pub fn chat() -> Self {
        ReportTemplate {
            suffix: "_chat.md".to_string(),
            title: None,
            input_heading: "# 用户输入".to_string(),
            output_heading: "# 模型回答".to_string(),
            footer: None,
        }
    }

    /// Game research analysis record.
    pub fn analysis() -> Self {
        ReportTemplate {
            suffix: "_game_analysis.md".to_string(),
            title: Some("# 游戏研究分析记录".to_string()),
            input_heading: "## 研究对象".to_string(),
            output_heading: "## AI 分析结果".to_string(),
            footer: Some("> 注：本分析由大模型生成，仅作为研究与设计参考。".to_string()),
        }
    }

    /// Lay out the exchange. User and model text go in untouched.
    pub fn render(&self, user_input: &str, assistant_output: &str) -> String {
        let mut doc = String::new();
        if let Some(title) = &self.title {
            doc.push_str(title);
            doc.push_str("\n\n");
        }
        doc.push_str(&self.input_heading);
        doc.push('\n');
        doc.push_str(user_input);
        doc.push_str("\n\n");
        doc.push_str(&self.output_heading);
        doc.push('\n');
        doc.push_str(assistant_output);
        doc.push_str("\n\n");
        if let Some(footer) = &self.footer {
            doc.push_str(footer);
            doc.push('\n');
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_layout() {
        let doc = ReportTemplate::analysis().render("背包系统", "分析结果");
        assert_eq!(
            doc,
            "# 游戏研究分析记录\n\n## 研究对象\n背包系统\n\n## AI 分析结果\n分析结果\n\n> 注：本分析由大模型生成，仅作为研究与设计参考。\n"
        );
    }

    #[test]
    fn chat_layout() {
        let doc = ReportTemplate::chat().render("hi", "hello");
        assert_eq!(doc, "# 用户输入\nhi\n\n# 模型回答\nhello\n\n");
    }

    #[test]
    fn markdown_is_not_escaped() {
        let input = "**bold** _x_ # not a heading <b>";
        let doc = ReportTemplate::chat().render(input, "`code`");
        assert!(doc.contains(input));
        assert!(doc.contains("`code`"));
    }
}
