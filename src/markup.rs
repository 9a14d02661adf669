/// What a run wrote into the main region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Markup produced by the parser module.
    Output(String),
    /// The parser module's error message.
    Error(String),
}

impl Rendered {
    /// The exact markup for the main region. Parser output is trusted
    /// and used verbatim.
    pub fn markup(&self) -> String {
        match self {
            Rendered::Output(out) => out.clone(),
            Rendered::Error(msg) => error_paragraph(msg),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Rendered::Error(_))
    }
}

pub fn error_paragraph(msg: &str) -> String {
    format!("<p class=\"error\">{}</p>", msg)
}
