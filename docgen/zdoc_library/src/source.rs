//! Line heuristics over a class's header and implementation source.
//!
//! Implementation lines are read top to bottom with a little state:
//!
//! ```text
//! line has no `;` and no `#`      function line: each `A :: b` may switch
//!                                  the current class (A) and function (b)
//! line has `;` inside a function   look for DoNotifyException(title, msg)
//! any line                         look for an event call
//! ```

use zdoc_ir::{Token, TokenKind, TokenSequence};

use crate::library::CLASS_PREFIXES;
use crate::{argument_if_string, detect_event_call, EventRole, ExceptionDoc, Library};

const NOTIFY_EXCEPTION: &str = "DoNotifyException";
const VARIABLE_TEXT: &str = "[variable]";

/// What a source scan found.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SourceSummary {
    pub event_uses: usize,
    pub exceptions: usize,
}

impl Library {
    /// Register the events a class header declares (`Events :: Name`), one
    /// per line. Returns how many declarations were read.
    pub fn scan_header_lines<S: AsRef<str>>(&mut self, class_name: &str, lines: impl IntoIterator<Item = S>) -> usize {
        let Some(ci) = self.position(class_name) else {
            return 0;
        };
        let mut declared = 0;
        for line in lines {
            let tokens = zdoc_lexer::tokenize(line.as_ref());
            let Some(at) = tokens.iter().position(|t| t.text == "Events") else {
                continue;
            };
            let Some(name) = tokens.get(at + 2) else {
                continue;
            };
            self.events.add(name.text.clone());
            self.class_at_mut(ci).events_sent.push(name.text.clone());
            declared += 1;
        }
        declared
    }

    /// Read a class's implementation lines for event calls and exceptions.
    #[tracing::instrument(level = "debug", skip(self, lines))]
    pub fn scan_source_lines<S: AsRef<str>>(&mut self, class_name: &str, lines: impl IntoIterator<Item = S>) -> SourceSummary {
        let mut summary = SourceSummary::default();
        let Some(home) = self.position(class_name) else {
            return summary;
        };
        let mut current_class = home;
        let mut current_fn: Option<(usize, String)> = None;

        for line in lines {
            let tokens = zdoc_lexer::tokenize(line.as_ref());
            if tokens.is_empty() {
                continue;
            }

            if let Some((event, role)) = detect_event_call(&tokens, &self.events) {
                self.record_event(home, event, role);
                summary.event_uses += 1;
            }

            if tokens[0].is(TokenKind::Pound) {
                continue;
            }
            if tokens.contains_kind(TokenKind::Semicolon) {
                if let Some((ci, function)) = &current_fn {
                    if let Some(exception) = exception_from_line(&tokens) {
                        if self.class_at_mut(*ci).add_exception(function, exception) {
                            summary.exceptions += 1;
                        }
                    }
                }
                continue;
            }
            self.track_function(&tokens, &mut current_class, &mut current_fn);
        }
        summary
    }

    fn track_function(
        &self,
        tokens: &TokenSequence,
        current_class: &mut usize,
        current_fn: &mut Option<(usize, String)>,
    ) {
        let slice = tokens.as_slice();
        for (i, token) in slice.iter().enumerate() {
            if !token.is(TokenKind::ScopeResolution) || i == 0 {
                continue;
            }
            let Some(rhs) = slice.get(i + 1) else {
                continue;
            };
            if let Some(ci) = self.find_class(&slice[i - 1].text, CLASS_PREFIXES) {
                *current_class = ci;
            }
            if self.class_at(*current_class).has_method(&rhs.text) {
                *current_fn = Some((*current_class, rhs.text.clone()));
            }
        }
    }

    fn record_event(&mut self, ci: usize, event: &str, role: EventRole) {
        let class = self.class_at_mut(ci);
        match role {
            EventRole::Sends => class.events_sent.push(event.to_string()),
            EventRole::Listens => class.events_listened.push(event.to_string()),
        }
        let class_name = class.name.clone();
        self.events.record(event, &class_name, role);
    }
}

fn exception_from_line(tokens: &TokenSequence) -> Option<ExceptionDoc> {
    if !tokens.contains_token(&Token::word(NOTIFY_EXCEPTION)) {
        return None;
    }
    let title = argument_if_string(tokens, 1);
    let message = argument_if_string(tokens, 2);
    if title.is_none() && message.is_none() {
        return None;
    }
    Some(ExceptionDoc {
        title: title.map_or_else(|| VARIABLE_TEXT.to_string(), unquote),
        message: message.map_or_else(|| VARIABLE_TEXT.to_string(), unquote),
    })
}

fn unquote(literal: &str) -> String {
    literal.trim_matches(['"', '\'']).to_string()
}

#[cfg(test)]
mod tests;
