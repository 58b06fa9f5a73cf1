use std::collections::VecDeque;

/// Message severity for console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleSeverity {
    Info,
    Warning,
    Error,
}

/// One console line. `timestamp` is caller-defined (frame counter or
/// milliseconds); `category` tags the producing subsystem ("Render",
/// "Assets", ...).
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub text: String,
    pub severity: ConsoleSeverity,
    pub timestamp: u64,
    pub category: String,
}

/// Bounded FIFO of console messages with a compound severity + substring
/// filter. Oldest messages are evicted first once `max_messages` is
/// exceeded; 0 disables the bound.
#[derive(Debug, Clone)]
pub struct ConsoleState {
    messages: VecDeque<ConsoleMessage>,
    max_messages: usize,
    show_info: bool,
    show_warnings: bool,
    show_errors: bool,
    text_filter: String,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self {
            messages: VecDeque::new(),
            max_messages: 1024,
            show_info: true,
            show_warnings: true,
            show_errors: true,
            text_filter: String::new(),
        }
    }
}

impl ConsoleState {
    pub fn add_message(&mut self, message: ConsoleMessage) {
        self.messages.push_back(message);
        self.trim_if_needed();
    }

    pub fn push(
        &mut self,
        text: impl Into<String>,
        severity: ConsoleSeverity,
        timestamp: u64,
        category: impl Into<String>,
    ) {
        self.add_message(ConsoleMessage {
            text: text.into(),
            severity,
            timestamp,
            category: category.into(),
        });
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &VecDeque<ConsoleMessage> {
        &self.messages
    }

    pub fn set_max_messages(&mut self, max_messages: usize) {
        self.max_messages = max_messages;
        self.trim_if_needed();
    }

    pub fn max_messages(&self) -> usize {
        self.max_messages
    }

    pub fn set_show_info(&mut self, show: bool) {
        self.show_info = show;
    }

    pub fn set_show_warnings(&mut self, show: bool) {
        self.show_warnings = show;
    }

    pub fn set_show_errors(&mut self, show: bool) {
        self.show_errors = show;
    }

    pub fn show_info(&self) -> bool {
        self.show_info
    }

    pub fn show_warnings(&self) -> bool {
        self.show_warnings
    }

    pub fn show_errors(&self) -> bool {
        self.show_errors
    }

    /// Substring filter matched against text and category. Empty string
    /// disables it.
    pub fn set_text_filter(&mut self, filter: impl Into<String>) {
        self.text_filter = filter.into();
    }

    pub fn text_filter(&self) -> &str {
        &self.text_filter
    }

    pub fn passes_filter(&self, message: &ConsoleMessage) -> bool {
        let severity_shown = match message.severity {
            ConsoleSeverity::Info => self.show_info,
            ConsoleSeverity::Warning => self.show_warnings,
            ConsoleSeverity::Error => self.show_errors,
        };
        if !severity_shown {
            return false;
        }

        if !self.text_filter.is_empty()
            && !message.text.contains(&self.text_filter)
            && !message.category.contains(&self.text_filter)
        {
            return false;
        }

        true
    }

    fn trim_if_needed(&mut self) {
        if self.max_messages == 0 {
            return;
        }
        while self.messages.len() > self.max_messages {
            self.messages.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(text: &str) -> ConsoleMessage {
        ConsoleMessage {
            text: text.to_string(),
            severity: ConsoleSeverity::Info,
            timestamp: 0,
            category: String::new(),
        }
    }

    #[test]
    fn oldest_messages_evicted_first() {
        let mut console = ConsoleState::default();
        console.set_max_messages(8);

        for i in 0..13 {
            console.push(format!("msg {i}"), ConsoleSeverity::Info, i, "");
        }

        assert_eq!(console.messages().len(), 8);
        assert_eq!(console.messages().front().unwrap().text, "msg 5");
        assert_eq!(console.messages().back().unwrap().text, "msg 12");
    }

    #[test]
    fn lowering_cap_retrims() {
        let mut console = ConsoleState::default();
        for i in 0..10 {
            console.add_message(info(&format!("m{i}")));
        }
        console.set_max_messages(3);
        assert_eq!(console.messages().len(), 3);
        assert_eq!(console.messages().front().unwrap().text, "m7");
    }

    #[test]
    fn zero_cap_is_unbounded() {
        let mut console = ConsoleState::default();
        console.set_max_messages(0);
        for i in 0..2000 {
            console.push(format!("{i}"), ConsoleSeverity::Info, 0, "");
        }
        assert_eq!(console.messages().len(), 2000);
    }

    #[test]
    fn severity_filter() {
        let mut console = ConsoleState::default();
        console.set_show_warnings(false);

        let warning = ConsoleMessage {
            severity: ConsoleSeverity::Warning,
            ..info("careful")
        };
        assert!(!console.passes_filter(&warning));
        assert!(console.passes_filter(&info("fine")));
    }

    #[test]
    fn text_filter_matches_text_or_category() {
        let mut console = ConsoleState::default();
        console.set_text_filter("Render");

        let by_category = ConsoleMessage {
            category: "Render".to_string(),
            ..info("frame done")
        };
        assert!(console.passes_filter(&by_category));
        assert!(console.passes_filter(&info("Render pass begun")));
        assert!(!console.passes_filter(&info("asset loaded")));
    }

    #[test]
    fn clear_empties_history() {
        let mut console = ConsoleState::default();
        console.add_message(info("one"));
        console.clear();
        assert!(console.messages().is_empty());
    }
}
