/// Every fixed string the session writes.
///
/// `Default` gives the stock Chinese transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionText {
    pub title: String,
    pub separator: String,
    pub instructions: String,
    pub prompt: String,
    pub empty_input: String,
    pub report_header: String,
    pub no_words: String,
    /// Appended to each count, e.g. `3次`.
    pub count_suffix: String,
    /// Placed before the error message on stderr.
    pub read_error_prefix: String,
}

impl Default for SessionText {
    fn default() -> Self {
        Self {
            title: "CLI 词频统计器".to_string(),
            separator: "================".to_string(),
            instructions: "请输入要统计的文本 (按 Ctrl+C 退出):".to_string(),
            prompt: "> ".to_string(),
            empty_input: "请输入一些文本进行统计".to_string(),
            report_header: "词频统计结果:".to_string(),
            no_words: "没有找到任何单词".to_string(),
            count_suffix: "次".to_string(),
            read_error_prefix: "读取输入时发生错误: ".to_string(),
        }
    }
}

impl SessionText {
    /// ASCII-only wording with the same layout.
    pub fn english() -> Self {
        Self {
            title: "CLI word frequency counter".to_string(),
            separator: "================".to_string(),
            instructions: "Enter text to count (Ctrl+C to quit):".to_string(),
            prompt: "> ".to_string(),
            empty_input: "Please enter some text".to_string(),
            report_header: "Word frequency results:".to_string(),
            no_words: "No words found".to_string(),
            count_suffix: String::new(),
            read_error_prefix: "error reading input: ".to_string(),
        }
    }
}
