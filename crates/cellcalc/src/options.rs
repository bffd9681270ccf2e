//! Sheet printing options

/// Options for [`crate::Sheet::print_texts_with`] and [`crate::Sheet::print_values_with`]
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Field delimiter (default: tab)
    pub delimiter: char,
    /// Line terminator written after every row
    pub line_terminator: LineTerminator,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            line_terminator: LineTerminator::LF,
        }
    }
}

impl PrintOptions {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
    /// Mac classic (CR)
    CR,
}

impl LineTerminator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::LF => "\n",
            LineTerminator::CRLF => "\r\n",
            LineTerminator::CR => "\r",
        }
    }
}
