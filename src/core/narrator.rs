use std::cell::RefCell;
use std::rc::Rc;

/// Console sink for demo narration.
///
/// Clones share the same sink, so tasks spawned on one thread can narrate into
/// a single ordered transcript. A captured narrator keeps the lines in memory
/// instead of printing them.
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    capture: Option<Rc<RefCell<Vec<String>>>>,
}

impl Narrator {
    pub fn stdout() -> Self {
        Self { capture: None }
    }

    pub fn captured() -> Self {
        Self {
            capture: Some(Rc::default()),
        }
    }

    pub fn say(&self, line: impl AsRef<str>) {
        let line = line.as_ref();
        match &self.capture {
            Some(lines) => lines.borrow_mut().push(line.to_string()),
            None => println!("{}", line),
        }
    }

    pub fn blank(&self) {
        self.say("");
    }

    /// Lines recorded so far. Always empty for a stdout narrator.
    pub fn lines(&self) -> Vec<String> {
        self.capture
            .as_ref()
            .map(|lines| lines.borrow().clone())
            .unwrap_or_default()
    }

    /// Index of the first recorded line containing `needle`.
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.lines().iter().position(|line| line.contains(needle))
    }
}
